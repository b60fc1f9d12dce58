use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::GameConfig;
use crate::core::{Color, GameError, Grid, GridCoord, Palette, Result};
use crate::engine::{flood_fill, History, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
}

#[derive(Debug)]
pub struct GameSession {
    size: usize,
    palette: Palette,
    replacement: Color,
    history: History,
    score: Score,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let replacement = config.initial_color()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            size: config.cells_per_axis,
            score: Score::new(config.max_score()),
            palette: config.palette,
            replacement,
            history: History::default(),
            rng,
        })
    }

    pub fn start(&mut self, grid: Option<Grid>) -> Result<()> {
        let grid = match grid {
            Some(g) => {
                if g.size() != self.size {
                    return Err(GameError::DimensionMismatch {
                        expected: self.size * self.size,
                        actual: g.len(),
                    });
                }
                g
            }
            None => Grid::random(self.size, &self.palette, &mut self.rng)?,
        };
        self.history.reset(grid);
        debug!(size = self.size, "game started");
        Ok(())
    }

    pub fn select_replacement_color(&mut self, color: Color) {
        self.replacement = color;
    }

    pub fn select_named_color(&mut self, name: &str) -> Result<Color> {
        let color = self
            .palette
            .get(name)
            .ok_or_else(|| GameError::UnknownColor(name.to_string()))?;
        self.replacement = color;
        Ok(color)
    }

    pub fn click(&mut self, coord: GridCoord) -> Result<bool> {
        let mut next = self.history.current()?.clone();
        let changed = flood_fill(&mut next, coord, self.replacement)?;
        if changed {
            self.history.push(next);
            self.score.record_move(true);
        }
        trace!(
            row = coord.row,
            col = coord.col,
            changed,
            score = self.score.current(),
            "click"
        );
        Ok(changed)
    }

    pub fn undo(&mut self) -> Result<bool> {
        self.history.current()?;
        let undone = self.history.rollback();
        debug!(undone, history = self.history.len(), "undo");
        Ok(undone)
    }

    pub fn rotate(&mut self) -> Result<()> {
        self.history.current()?;
        self.history.transpose_all();
        debug!(history = self.history.len(), "rotated");
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        let first = self.history.first()?.clone();
        debug!("restart");
        self.start(Some(first))
    }

    pub fn current_grid(&self) -> Result<&Grid> {
        self.history.current()
    }

    pub fn current_score(&self) -> u32 {
        self.score.current()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn replacement_color(&self) -> Color {
        self.replacement
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn state(&self) -> SessionState {
        if self.history.is_empty() {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    pub fn is_solved(&self) -> Result<bool> {
        Ok(self.history.current()?.is_uniform())
    }
}
