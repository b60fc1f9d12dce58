use crate::core::{Color, Grid, GridCoord, Result};
use tracing::trace;

pub fn flood_fill(grid: &mut Grid, seed: GridCoord, replacement: Color) -> Result<bool> {
    let target = grid.color_at(seed)?;
    if target == replacement {
        return Ok(false);
    }
    let size = grid.size();
    let mut stack = vec![seed];
    grid.set_color_at(seed, replacement)?;
    let mut painted = 1usize;

    while let Some(cell) = stack.pop() {
        for next in cell.neighbors(size) {
            if grid.color_at(next)? == target {
                grid.set_color_at(next, replacement)?;
                painted += 1;
                stack.push(next);
            }
        }
    }

    trace!(row = seed.row, col = seed.col, painted, "flood fill");
    Ok(true)
}

pub fn region(grid: &Grid, seed: GridCoord) -> Result<Vec<GridCoord>> {
    let target = grid.color_at(seed)?;
    let size = grid.size();
    let mut seen = vec![false; grid.len()];
    let mut out = Vec::new();
    let mut stack = vec![seed];
    seen[grid.index_of(seed)?] = true;

    while let Some(cell) = stack.pop() {
        out.push(cell);
        for next in cell.neighbors(size) {
            let i = grid.index_of(next)?;
            if !seen[i] && grid.color_at(next)? == target {
                seen[i] = true;
                stack.push(next);
            }
        }
    }
    Ok(out)
}
