#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use log::{debug, error, info, trace};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::{TextChar, WinitInputHelper};

use crate::auxiliary::randomizer::new_rng;
use crate::auxiliary::settings::Settings;
use crate::auxiliary::window::create_window;
use crate::projects::board::Board;
use crate::projects::canvas::{Canvas, BACKGROUND, PLAYER_COLOR};
use crate::projects::player::{Direction, Player};
use crate::traits_and_structs::automata_trait::CellAutomata;

pub fn run_pusher() -> anyhow::Result<()> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) = create_window("Pusher Life", &event_loop)?;

    let settings = Settings::default();
    let (rows, cols) = settings.grid_dimensions(p_width, p_height);
    let (frame_width, frame_height) = settings.frame_size(rows, cols);
    info!("{}", Board::describe());
    info!(
        "grid {}x{} cells, frame {}x{} px",
        cols, rows, frame_width, frame_height
    );

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(frame_width, frame_height, surface_texture)?;
    let mut rng = new_rng();
    let mut game = PusherLife::new_random(rows, cols, settings, &mut rng);

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            game.frame(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            for text in input.text() {
                if let TextChar::Char(key) = text {
                    game.queue_key(key);
                }
            }
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Only the presentation surface follows the window; the grid keeps its size.
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
            }
            window.request_redraw();
        }
    });
}

/// Everything one running game owns: the board, the pusher and the keys
/// typed since the last frame.
#[derive(Debug)]
pub struct PusherLife {
    board: Board,
    player: Player,
    settings: Settings,
    pending: VecDeque<char>,
}

impl PusherLife {
    pub fn new(board: Board, player: Player, settings: Settings) -> Self {
        Self {
            board,
            player,
            settings,
            pending: VecDeque::new(),
        }
    }

    /// Random board with the pusher in the middle.
    pub fn new_random(
        rows: usize,
        cols: usize,
        settings: Settings,
        rng: &mut randomize::PCG32,
    ) -> Self {
        let board = Board::new_random(rows, cols, settings.initial_fill, rng);
        let player = Player::centered(rows, cols, settings.player_size);
        Self::new(board, player, settings)
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn queue_key(&mut self, key: char) {
        self.pending.push_back(key);
    }

    pub fn pending_keys(&self) -> usize {
        self.pending.len()
    }

    /// Push then move for a `w a s d` key, if the pusher has room.
    ///
    /// Returns whether the key did anything.
    pub fn handle_key(&mut self, key: char) -> bool {
        let direction = match Direction::from_key(key) {
            Some(direction) => direction,
            None => {
                trace!("ignoring key {:?}", key);
                return false;
            }
        };
        let (rows, cols) = (self.board.rows(), self.board.cols());
        if !self.player.can_move(direction, rows, cols) {
            trace!("{:?} blocked at ({}, {})", direction, self.player.x, self.player.y);
            return false;
        }
        let edge = self
            .player
            .leading_edge(direction, rows, cols, self.settings.push_amount);
        let moved = self.board.displace(edge);
        self.player.step(direction);
        debug!(
            "generation {}: pushed {} cells {:?}, player now at ({}, {})",
            self.board.generation(),
            moved,
            direction,
            self.player.x,
            self.player.y
        );
        true
    }

    /// Apply queued keys in the order they arrived.
    pub fn drain_input(&mut self) {
        if !self.pending.is_empty() {
            trace!("draining {} keys", self.pending_keys());
        }
        while let Some(key) = self.pending.pop_front() {
            self.handle_key(key);
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear(BACKGROUND);
        self.board.draw(canvas);
        let Player { x, y, size } = self.player;
        canvas.fill_cells(y, x, size, size, PLAYER_COLOR);
    }

    /// One frame: input, render into `screen`, then simulate.
    pub fn frame(&mut self, screen: &mut [u8]) {
        self.drain_input();
        let (width, height) = self
            .settings
            .frame_size(self.board.rows(), self.board.cols());
        let mut canvas = Canvas::new(screen, width, height, self.settings.cell_size);
        self.draw(&mut canvas);
        self.board.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::cell::Cell;
    use crate::traits_and_structs::palette::Color;

    fn empty_game(rows: usize, cols: usize, player: Player) -> PusherLife {
        PusherLife::new(Board::new_empty(rows, cols), player, Settings::default())
    }

    fn random_game(rows: usize, cols: usize, player: Player) -> PusherLife {
        let mut rng: randomize::PCG32 = (3, 5).into();
        let board = Board::new_random(rows, cols, 0.5, &mut rng);
        PusherLife::new(board, player, Settings::default())
    }

    #[test]
    fn up_at_the_top_is_a_no_op() {
        let mut game = random_game(20, 20, Player::new(5, 0, 3));
        let before = game.board().cells().to_vec();
        assert!(!game.handle_key('w'));
        assert_eq!(*game.player(), Player::new(5, 0, 3));
        assert_eq!(game.board().cells(), before.as_slice());
    }

    #[test]
    fn down_moves_one_row_and_keeps_the_column() {
        let mut game = random_game(20, 20, Player::new(5, 0, 3));
        assert!(game.handle_key('s'));
        assert_eq!(game.player().y, 1);
        assert_eq!(game.player().x, 5);
    }

    #[test]
    fn pushing_right_moves_the_cell_three_further() {
        let mut game = empty_game(4, 6, Player::new(2, 1, 1));
        game.board.set(1, 3, Cell::alive(Color::Indigo));
        assert!(game.handle_key('D'));
        assert!(!game.board().get(1, 3).alive);
        assert_eq!(game.board().get(1, 0), Cell::alive(Color::Indigo));
        assert_eq!(*game.player(), Player::new(3, 1, 1));
    }

    #[test]
    fn push_overwrites_whatever_is_at_the_target() {
        let mut game = empty_game(10, 10, Player::new(4, 2, 3));
        game.board.set(5, 5, Cell::alive(Color::Red));
        game.board.set(8, 5, Cell::alive(Color::Blue));
        game.handle_key('s');
        assert_eq!(game.board().get(8, 5), Cell::alive(Color::Red));
        assert_eq!(game.board().alive_count(), 1);
    }

    #[test]
    fn unrecognized_key_changes_nothing() {
        let mut game = random_game(12, 12, Player::new(4, 4, 3));
        let before = game.board().cells().to_vec();
        assert!(!game.handle_key('q'));
        assert_eq!(game.board().cells(), before.as_slice());
        assert_eq!(*game.player(), Player::new(4, 4, 3));
    }

    #[test]
    fn queued_keys_apply_in_order_before_the_step() {
        let mut game = empty_game(10, 10, Player::new(4, 4, 3));
        for key in ['d', 'q', 'w', 'W'] {
            game.queue_key(key);
        }
        assert_eq!(game.pending_keys(), 4);
        let mut frame = vec![0; 4 * 50 * 50];
        game.frame(&mut frame);
        assert_eq!(game.pending_keys(), 0);
        assert_eq!(*game.player(), Player::new(5, 2, 3));
        assert_eq!(game.board().generation(), 1);
    }

    #[test]
    fn frame_renders_before_it_simulates() {
        // A lone cell dies in the step but must still be on screen.
        let mut game = empty_game(4, 4, Player::new(0, 0, 1));
        game.board.set(2, 3, Cell::alive(Color::Green));
        let mut frame = vec![0; 4 * 20 * 20];
        game.frame(&mut frame);
        assert_eq!(game.board().alive_count(), 0);

        let canvas = Canvas::new(&mut frame, 20, 20, 5);
        assert_eq!(canvas.pixel(15, 10), Some(Color::Green.rgba()));
        assert_eq!(canvas.pixel(2, 2), Some(PLAYER_COLOR));
        assert_eq!(canvas.pixel(10, 0), Some(BACKGROUND));
    }

    #[test]
    fn player_is_drawn_over_live_cells() {
        let mut game = empty_game(4, 4, Player::new(1, 1, 2));
        game.board.set(2, 2, Cell::alive(Color::Orange));
        let mut frame = vec![0; 4 * 20 * 20];
        let mut canvas = Canvas::new(&mut frame, 20, 20, 5);
        game.draw(&mut canvas);
        assert_eq!(canvas.pixel(12, 12), Some(PLAYER_COLOR));
        assert_eq!(canvas.pixel(17, 17), Some(BACKGROUND));
    }

    #[test]
    fn centered_player_starts_mid_grid() {
        let mut rng: randomize::PCG32 = (9, 9).into();
        let game = PusherLife::new_random(30, 41, Settings::default(), &mut rng);
        assert_eq!(*game.player(), Player::new(20, 15, 3));
        assert_eq!(game.board().rows(), 30);
        assert_eq!(game.board().cols(), 41);
    }
}
