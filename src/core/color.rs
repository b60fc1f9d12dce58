use super::error::{GameError, Result};
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    pub fn color(&self) -> Color {
        Color::from(self.rgb)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    index: FxHashMap<Box<str>, usize>,
}

impl Palette {
    pub fn new() -> Self {
        Self { entries: Vec::new(), index: FxHashMap::default() }
    }

    pub fn insert(&mut self, name: &str, color: Color) {
        if let Some(&i) = self.index.get(name) {
            self.entries[i].rgb = color.to_array();
            return;
        }
        self.index.insert(name.into(), self.entries.len());
        self.entries.push(PaletteEntry { name: name.to_string(), rgb: color.to_array() });
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.index.get(name).map(|&i| self.entries[i].color())
    }

    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.entries.iter().find(|e| e.color() == color).map(|e| e.name.as_str())
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|e| e.color())
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn random_color<R: Rng>(&self, rng: &mut R) -> Result<Color> {
        if self.entries.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        Ok(self.entries[rng.gen_range(0..self.entries.len())].color())
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut p = Palette::new();
        p.insert("white", Color::WHITE);
        p.insert("black", Color::BLACK);
        p.insert("red", Color::RED);
        p.insert("green", Color::GREEN);
        p.insert("blue", Color::BLUE);
        p
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl From<Vec<PaletteEntry>> for Palette {
    fn from(entries: Vec<PaletteEntry>) -> Self {
        let mut p = Palette::new();
        for e in &entries {
            p.insert(&e.name, e.color());
        }
        p
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(p: Palette) -> Self {
        p.entries
    }
}
