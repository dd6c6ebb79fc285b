#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::trace;

use crate::auxiliary::randomizer::unit;
use crate::projects::canvas::Canvas;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::cell::Cell;
use crate::traits_and_structs::palette::Color;

/// `(row, col)` on the board.
pub type Coord = (usize, usize);

/// Moore neighborhood offsets as `(drow, dcol)`, row-major.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Move `index` by `delta` on a ring of `len` slots.
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// The 8 toroidally-adjacent coordinates of `(row, col)`.
pub fn neighbor_coords(rows: usize, cols: usize, row: usize, col: usize) -> [Coord; 8] {
    NEIGHBOR_OFFSETS.map(|(dr, dc)| (wrap(row, dr, rows), wrap(col, dc, cols)))
}

/// The Moore neighborhood of `(row, col)` in a row-major `rows × cols` torus.
pub fn neighbors(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> [Cell; 8] {
    neighbor_coords(rows, cols, row, col).map(|(r, c)| cells[c + r * cols])
}

pub fn alive_neighbors(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> usize {
    neighbors(cells, rows, cols, row, col)
        .iter()
        .filter(|c| c.alive)
        .count()
}

/// Toroidal grid of colored cells.
///
/// Two cell arenas are allocated up front. Every bulk update reads the front
/// arena as a snapshot, writes the back one, and then swaps which is which, so
/// no write is ever visible to reads made in the same update.
#[derive(Clone, Debug)]
pub struct Board {
    buffers: [Vec<Cell>; 2],
    front: usize,
    rows: usize,
    cols: usize,
    generation: u64,
}

impl Board {
    pub fn new_empty(rows: usize, cols: usize) -> Self {
        assert!(rows != 0 && cols != 0);
        let size = rows.checked_mul(cols).expect("too big");
        Self {
            buffers: [vec![Cell::default(); size], vec![Cell::default(); size]],
            front: 0,
            rows,
            cols,
            generation: 0,
        }
    }

    pub fn new_random(rows: usize, cols: usize, fill: f32, rng: &mut randomize::PCG32) -> Self {
        let mut result = Self::new_empty(rows, cols);
        result.randomize(fill, rng);
        result
    }

    /// Board from row-major cells.
    #[cfg(test)]
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        let mut result = Self::new_empty(rows, cols);
        assert_eq!(cells.len(), result.buffers[0].len());
        result.buffers[0] = cells;
        result
    }

    /// A cell starts alive when its uniform draw exceeds `fill`, so with
    /// probability `1 - fill`. Colors are uniform over the palette.
    pub fn randomize(&mut self, fill: f32, rng: &mut randomize::PCG32) {
        let front = self.front;
        for c in self.buffers[front].iter_mut() {
            let alive = unit(rng) > fill;
            *c = Cell::new(alive, Color::from_unit(unit(rng)));
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.buffers[self.front]
    }

    pub fn alive_count(&self) -> usize {
        self.cells().iter().filter(|c| c.alive).count()
    }

    #[cfg(test)]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        col + row * self.cols
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells()[self.idx(row, col)]
    }

    #[cfg(test)]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.idx(row, col);
        let front = self.front;
        self.buffers[front][i] = cell;
    }

    fn split_buffers(&mut self) -> (&[Cell], &mut [Cell]) {
        let [a, b] = &mut self.buffers;
        if self.front == 0 {
            (a.as_slice(), b.as_mut_slice())
        } else {
            (b.as_slice(), a.as_mut_slice())
        }
    }

    fn flip(&mut self) {
        self.front ^= 1;
    }

    /// Advance one generation.
    pub fn next_generation(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        let (front, back) = self.split_buffers();
        for row in 0..rows {
            for col in 0..cols {
                let alive = alive_neighbors(front, rows, cols, row, col);
                let idx = col + row * cols;
                back[idx] = front[idx].next_state(alive);
            }
        }
        self.flip();
        self.generation += 1;
        trace!("generation {}, {} alive", self.generation, self.alive_count());
    }

    /// Move every live source cell onto its target.
    ///
    /// Sources are read from the board as it was before the call. A moved
    /// cell keeps its color and its source is left dead. Returns how many
    /// cells moved.
    pub fn displace<I>(&mut self, moves: I) -> usize
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        let cols = self.cols;
        let (front, back) = self.split_buffers();
        back.copy_from_slice(front);
        let mut moved = 0;
        for ((sr, sc), (tr, tc)) in moves {
            let source = front[sc + sr * cols];
            if source.alive {
                back[tc + tr * cols] = source;
                back[sc + sr * cols].set_dead();
                moved += 1;
            }
        }
        self.flip();
        moved
    }
}

impl CellAutomata for Board {
    fn draw(&self, canvas: &mut Canvas) {
        for (i, c) in self.cells().iter().enumerate() {
            if c.alive {
                canvas.fill_cells(i / self.cols, i % self.cols, 1, 1, c.color.rgba());
            }
        }
    }

    fn update(&mut self) {
        self.next_generation()
    }

    fn describe() -> String {
        "Colored Life on a torus: B3/S23, newborns take the next palette color".to_string()
    }
}
