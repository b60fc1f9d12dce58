use crate::core::{GameError, Grid, Result};

#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    pub fn new(initial: Grid) -> Self {
        Self { snapshots: vec![initial] }
    }

    pub fn reset(&mut self, initial: Grid) {
        self.snapshots.clear();
        self.snapshots.push(initial);
    }

    pub fn push(&mut self, grid: Grid) {
        self.snapshots.push(grid);
    }

    pub fn rollback(&mut self) -> bool {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Result<&Grid> {
        self.snapshots.last().ok_or(GameError::EmptyHistory)
    }

    pub fn first(&self) -> Result<&Grid> {
        self.snapshots.first().ok_or(GameError::EmptyHistory)
    }

    pub fn transpose_all(&mut self) {
        for g in &mut self.snapshots {
            g.transpose();
        }
    }

    pub fn snapshots(&self) -> &[Grid] { &self.snapshots }
    pub fn len(&self) -> usize { self.snapshots.len() }
    pub fn is_empty(&self) -> bool { self.snapshots.is_empty() }
}
