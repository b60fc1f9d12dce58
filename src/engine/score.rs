#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
    max: u32,
    moves: u32,
}

impl Score {
    pub fn new(max: u32) -> Self {
        Self { value: max, max, moves: 0 }
    }

    pub fn initialize(&mut self, max: u32) {
        *self = Self::new(max);
    }

    pub fn record_move(&mut self, changed: bool) {
        if !changed {
            return;
        }
        self.value = self.value.saturating_sub(1);
        self.moves += 1;
    }

    pub fn current(&self) -> u32 { self.value }
    pub fn max(&self) -> u32 { self.max }
    pub fn moves(&self) -> u32 { self.moves }
}
