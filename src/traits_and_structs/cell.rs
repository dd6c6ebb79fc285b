use super::palette::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub color: Color,
}

impl Cell {
    pub fn new(alive: bool, color: Color) -> Self {
        Self { alive, color }
    }

    pub fn alive(color: Color) -> Self {
        Self::new(true, color)
    }

    pub fn dead(color: Color) -> Self {
        Self::new(false, color)
    }

    /// Life rules: survive on 2 or 3, birth on exactly 3.
    ///
    /// A newborn takes the color after its own previous color, not a neighbor's.
    #[must_use]
    pub fn next_state(self, alive_neighbors: usize) -> Self {
        match (self.alive, alive_neighbors) {
            (true, 2) | (true, 3) => self,
            (true, _) => Self::dead(self.color),
            (false, 3) => Self::alive(self.color.next()),
            (false, _) => self,
        }
    }

    pub fn set_dead(&mut self) {
        self.alive = false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_on_two_or_three() {
        let cell = Cell::alive(Color::Green);
        assert_eq!(cell.next_state(2), cell);
        assert_eq!(cell.next_state(3), cell);
    }

    #[test]
    fn live_cell_dies_when_lonely_or_crowded() {
        let cell = Cell::alive(Color::Blue);
        for n in [0, 1, 4, 5, 8] {
            let next = cell.next_state(n);
            assert!(!next.alive, "{} neighbors", n);
            assert_eq!(next.color, Color::Blue);
        }
    }

    #[test]
    fn dead_cell_is_born_with_its_own_next_color() {
        let next = Cell::dead(Color::Violet).next_state(3);
        assert!(next.alive);
        assert_eq!(next.color, Color::Red);
    }

    #[test]
    fn dead_cell_stays_dead_otherwise() {
        let cell = Cell::dead(Color::Yellow);
        for n in [0, 1, 2, 4, 6, 8] {
            assert_eq!(cell.next_state(n), cell);
        }
    }
}
