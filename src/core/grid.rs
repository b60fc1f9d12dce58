use super::color::{Color, Palette};
use super::error::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn clamped(row: i64, col: i64, size: usize) -> Self {
        let max = size.saturating_sub(1) as i64;
        Self { row: row.clamp(0, max) as usize, col: col.clamp(0, max) as usize }
    }

    // Clamped at the edges; a neighbor that clamps onto self is dropped.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = GridCoord> {
        let (r, c) = (self.row as i64, self.col as i64);
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .into_iter()
            .map(move |(nr, nc)| GridCoord::clamped(nr, nc, size))
            .filter(move |&n| n != self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Color>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::from_cells(raw.size, raw.cells)
    }
}

impl Grid {
    pub fn filled(size: usize, color: Color) -> Self {
        Self { size, cells: vec![color; size * size] }
    }

    pub fn from_cells(size: usize, cells: Vec<Color>) -> Result<Self> {
        if cells.len() != size * size {
            return Err(GameError::DimensionMismatch { expected: size * size, actual: cells.len() });
        }
        Ok(Self { size, cells })
    }

    pub fn random<R: Rng>(size: usize, palette: &Palette, rng: &mut R) -> Result<Self> {
        let cells = (0..size * size)
            .map(|_| palette.random_color(rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize { self.size }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
    pub fn cells(&self) -> &[Color] { &self.cells }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    pub fn index_of(&self, coord: GridCoord) -> Result<usize> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBounds { row: coord.row, col: coord.col, size: self.size });
        }
        Ok(coord.row * self.size + coord.col)
    }

    pub fn coord_of(&self, index: usize) -> Result<GridCoord> {
        if index >= self.cells.len() {
            return Err(GameError::OutOfBounds {
                row: index / self.size.max(1),
                col: index % self.size.max(1),
                size: self.size,
            });
        }
        Ok(GridCoord::new(index / self.size, index % self.size))
    }

    pub fn color_at(&self, coord: GridCoord) -> Result<Color> {
        Ok(self.cells[self.index_of(coord)?])
    }

    pub fn set_color_at(&mut self, coord: GridCoord, color: Color) -> Result<()> {
        let i = self.index_of(coord)?;
        self.cells[i] = color;
        Ok(())
    }

    pub fn transpose(&mut self) {
        let n = self.size;
        for r in 0..n {
            for c in r + 1..n {
                self.cells.swap(r * n + c, c * n + r);
            }
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.cells.windows(2).all(|w| w[0] == w[1])
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|c| format!("{:02x}{:02x}{:02x}", c.r, c.g, c.b))
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn letters(size: usize) -> Grid {
        let cells = (0..size * size).map(|i| Color::rgb(i as u8, 0, 0)).collect();
        Grid::from_cells(size, cells).unwrap()
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::filled(9, Color::WHITE);
        let c = GridCoord::new(4, 7);
        let i = g.index_of(c).unwrap();
        assert_eq!(i, 4 * 9 + 7);
        assert_eq!(g.coord_of(i).unwrap(), c);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut g = Grid::filled(3, Color::WHITE);
        assert!(matches!(
            g.color_at(GridCoord::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
        ));
        assert!(g.set_color_at(GridCoord::new(0, 5), Color::RED).is_err());
        assert!(g.coord_of(9).is_err());
    }

    #[test]
    fn from_cells_checks_length() {
        let err = Grid::from_cells(3, vec![Color::RED; 8]).unwrap_err();
        assert!(matches!(err, GameError::DimensionMismatch { expected: 9, actual: 8 }));
    }

    #[test]
    fn clamping() {
        assert_eq!(GridCoord::clamped(-1, 4, 9), GridCoord::new(0, 4));
        assert_eq!(GridCoord::clamped(3, 12, 9), GridCoord::new(3, 8));
    }

    #[test]
    fn corner_neighbors_skip_self() {
        let n: Vec<_> = GridCoord::new(0, 0).neighbors(3).collect();
        assert_eq!(n, vec![GridCoord::new(1, 0), GridCoord::new(0, 1)]);
        assert_eq!(GridCoord::new(1, 1).neighbors(3).count(), 4);
    }

    #[test]
    fn transpose_3x3() {
        let mut g = letters(3);
        g.transpose();
        let order: Vec<u8> = g.cells().iter().map(|c| c.r).collect();
        assert_eq!(order, vec![0, 3, 6, 1, 4, 7, 2, 5, 8]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = Grid::random(9, &Palette::default(), &mut rng).unwrap();
        let mut g = original.clone();
        g.transpose();
        assert_ne!(g, original);
        g.transpose();
        assert_eq!(g, original);
    }

    #[test]
    fn uniform_and_counts() {
        let mut g = Grid::filled(4, Color::GREEN);
        assert!(g.is_uniform());
        g.set_color_at(GridCoord::new(2, 2), Color::BLUE).unwrap();
        assert!(!g.is_uniform());
        assert_eq!(g.count_color(Color::GREEN), 15);
    }

    #[test]
    fn deserialize_rejects_wrong_length() {
        let ok = serde_json::to_string(&Grid::filled(2, Color::RED)).unwrap();
        assert!(serde_json::from_str::<Grid>(&ok).is_ok());
        let bad = r#"{"size":3,"cells":[{"r":0,"g":0,"b":0}]}"#;
        assert!(serde_json::from_str::<Grid>(bad).is_err());
    }

    #[test]
    fn display_rows() {
        let mut g = Grid::filled(2, Color::BLACK);
        g.set_color_at(GridCoord::new(0, 1), Color::RED).unwrap();
        assert_eq!(g.to_string(), "000000 ff0000\n000000 000000");
    }
}
