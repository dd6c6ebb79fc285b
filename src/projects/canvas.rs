#![deny(clippy::all)]
#![forbid(unsafe_code)]

/// Opaque white, what the frame is cleared to.
pub const BACKGROUND: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
/// Solid black for the player overlay.
pub const PLAYER_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// An RGBA8 frame addressed in pixels, with helpers for whole grid cells.
///
/// The only drawing operations are clearing the frame and filling
/// axis-aligned rectangles; everything is clipped to the frame.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    cell_size: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32, cell_size: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        debug_assert_eq!(frame.len(), 4 * width * height);
        Self {
            frame,
            width,
            height,
            cell_size: cell_size as usize,
        }
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pix in self.frame.chunks_exact_mut(4) {
            pix.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y..y_end {
            let start = 4 * (row * self.width + x);
            let end = 4 * (row * self.width + x_end);
            for pix in self.frame[start..end].chunks_exact_mut(4) {
                pix.copy_from_slice(&color);
            }
        }
    }

    /// Fill a block of `rows × cols` grid cells whose top-left cell is `(row, col)`.
    pub fn fill_cells(&mut self, row: usize, col: usize, rows: usize, cols: usize, color: [u8; 4]) {
        let s = self.cell_size;
        self.fill_rect(col * s, row * s, cols * s, rows * s, color);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y * self.width + x);
        let mut pix = [0; 4];
        pix.copy_from_slice(&self.frame[i..i + 4]);
        Some(pix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [0xff, 0, 0, 0xff];

    #[test]
    fn clear_paints_every_pixel() {
        let mut frame = vec![0; 4 * 6 * 4];
        let mut canvas = Canvas::new(&mut frame, 6, 4, 2);
        canvas.clear(BACKGROUND);
        assert!(frame.iter().all(|&b| b == 0xff));
    }

    #[test]
    fn fill_rect_clips_to_the_frame() {
        let mut frame = vec![0; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4, 1);
        canvas.fill_rect(2, 3, 10, 10, RED);
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(2, 3), Some(RED));
        assert_eq!(canvas.pixel(1, 3), Some([0; 4]));
        assert_eq!(canvas.pixel(3, 2), Some([0; 4]));
        canvas.fill_rect(4, 0, 1, 1, RED);
        assert_eq!(frame.chunks_exact(4).filter(|p| *p == RED).count(), 2);
    }

    #[test]
    fn fill_cells_scales_by_cell_size() {
        let mut frame = vec![0; 4 * 10 * 10];
        let mut canvas = Canvas::new(&mut frame, 10, 10, 5);
        canvas.fill_cells(1, 0, 1, 1, RED);
        assert_eq!(canvas.pixel(0, 5), Some(RED));
        assert_eq!(canvas.pixel(4, 9), Some(RED));
        assert_eq!(canvas.pixel(5, 5), Some([0; 4]));
        assert_eq!(canvas.pixel(0, 4), Some([0; 4]));
    }
}
