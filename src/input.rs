use crate::core::GridCoord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub width: f32,
    pub height: f32,
    pub cells_per_axis: usize,
}

impl BoardGeometry {
    pub fn new(width: f32, height: f32, cells_per_axis: usize) -> Self {
        Self { width, height, cells_per_axis }
    }

    pub fn cell_width(&self) -> f32 {
        self.width / self.cells_per_axis as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.height / self.cells_per_axis as f32
    }

    pub fn cell_at(&self, x: f32, y: f32) -> GridCoord {
        let col = (x / self.cell_width()).floor() as i64;
        let row = (y / self.cell_height()).floor() as i64;
        GridCoord::clamped(row, col, self.cells_per_axis)
    }
}
