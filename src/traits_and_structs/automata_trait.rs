use crate::projects::canvas::Canvas;

pub trait CellAutomata {
    fn draw(&self, canvas: &mut Canvas);
    fn update(&mut self);
    fn describe() -> String;
}
