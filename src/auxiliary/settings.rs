/// Edge length of one cell, in frame pixels.
pub const CELL_SIZE: u32 = 5;
/// How far a pushed cell travels beyond the player's leading edge.
pub const PUSH_AMOUNT: usize = 3;
pub const PLAYER_SIZE: usize = 3;
/// Threshold a uniform draw must exceed for a cell to start alive, so a
/// cell starts alive with probability `1 - INITIAL_FILL`.
pub const INITIAL_FILL: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub cell_size: u32,
    pub push_amount: usize,
    pub player_size: usize,
    pub initial_fill: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            push_amount: PUSH_AMOUNT,
            player_size: PLAYER_SIZE,
            initial_fill: INITIAL_FILL,
        }
    }
}

impl Settings {
    /// Grid `(rows, cols)` for a viewport, rounding the viewport down to whole cells.
    pub fn grid_dimensions(&self, width_px: u32, height_px: u32) -> (usize, usize) {
        let cell = self.cell_size.max(1);
        let rows = (height_px / cell).max(1) as usize;
        let cols = (width_px / cell).max(1) as usize;
        (rows, cols)
    }

    /// Frame buffer size in pixels for a grid.
    pub fn frame_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        (cols as u32 * self.cell_size, rows as u32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rounds_down_to_cells() {
        let settings = Settings::default();
        assert_eq!(settings.grid_dimensions(803, 604), (120, 160));
        assert_eq!(settings.frame_size(120, 160), (800, 600));
    }

    #[test]
    fn tiny_viewport_still_has_a_cell() {
        let settings = Settings::default();
        assert_eq!(settings.grid_dimensions(3, 0), (1, 1));
    }
}
