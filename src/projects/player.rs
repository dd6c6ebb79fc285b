#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::projects::board::{wrap, Coord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `w a s d`, in either case.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// `(drow, dcol)` of one step.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The pusher: a `size × size` square whose top-left cell is at column `x`, row `y`.
///
/// Unlike the board it does not wrap; it stays fully inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

impl Player {
    pub fn new(x: usize, y: usize, size: usize) -> Self {
        Self { x, y, size }
    }

    pub fn centered(rows: usize, cols: usize, size: usize) -> Self {
        Self::new(cols / 2, rows / 2, size)
    }

    pub fn can_move(&self, direction: Direction, rows: usize, cols: usize) -> bool {
        match direction {
            Direction::Up => self.y > 0,
            Direction::Down => self.y + self.size < rows,
            Direction::Left => self.x > 0,
            Direction::Right => self.x + self.size < cols,
        }
    }

    /// One cell in `direction`. Callers check `can_move` first.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y -= 1,
            Direction::Down => self.y += 1,
            Direction::Left => self.x -= 1,
            Direction::Right => self.x += 1,
        }
    }

    /// Source and target of every push along the leading edge.
    ///
    /// The source is the cell just past the edge, the target is `push_amount`
    /// further on. Both wrap around the board.
    pub fn leading_edge(
        &self,
        direction: Direction,
        rows: usize,
        cols: usize,
        push_amount: usize,
    ) -> impl Iterator<Item = (Coord, Coord)> {
        let Player { x, y, size } = *self;
        let (dr, dc) = direction.offset();
        let push = push_amount as isize;
        (0..size).map(move |i| {
            let source = match direction {
                Direction::Up | Direction::Down => {
                    let edge = if direction == Direction::Down { y + size - 1 } else { y };
                    (wrap(edge, dr, rows), wrap(x + i, 0, cols))
                }
                Direction::Left | Direction::Right => {
                    let edge = if direction == Direction::Right { x + size - 1 } else { x };
                    (wrap(y + i, 0, rows), wrap(edge, dc, cols))
                }
            };
            let target = (wrap(source.0, dr * push, rows), wrap(source.1, dc * push, cols));
            (source, target)
        })
    }
}
