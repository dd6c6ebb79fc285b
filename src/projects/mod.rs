pub mod board;
pub mod canvas;
pub mod player;
pub mod pusher;
