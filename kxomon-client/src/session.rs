//! Session controller
//!
//! Owns the board, the in-progress move buffer, and the game history, and
//! applies every decoded event to them. The monitor loop around it dispatches
//! exactly one event to completion before waiting again, so none of this
//! state needs locking.

// Allow unused code that's part of the public API
#![allow(dead_code)]

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::Stream;
use tokio::io::AsyncRead;

use kxomon_protocol::{Occupant, StatusRecord};
use kxomon_utils::Result;

use crate::board::{Board, BOARD_SIDE};
use crate::control::ControlChannel;
use crate::event::{Multiplexer, MuxEvent};
use crate::history::History;
use crate::terminal::Terminal;

/// Toggle the board display on or off.
const TOGGLE_KEY: char = 'p';
/// Ask the engine to stop, then shut the monitor down.
const QUIT_KEY: char = 'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Terminating,
}

/// A single applied update, kept in arrival order until the game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    cell: usize,
    occupant: Occupant,
}

/// Session state: board, in-progress moves, archived games, display flag.
pub struct Session {
    board: Board,
    moves: Vec<Move>,
    history: History,
    display_enabled: bool,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        let board = Board::new(BOARD_SIDE);
        let moves = Vec::with_capacity(board.cell_count());
        Self {
            board,
            moves,
            history: History::new(),
            display_enabled: true,
            state: SessionState::Running,
        }
    }

    pub fn terminating(&self) -> bool {
        self.state == SessionState::Terminating
    }

    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn flip_display(&mut self) {
        self.display_enabled = !self.display_enabled;
    }

    pub fn begin_termination(&mut self) {
        self.state = SessionState::Terminating;
    }

    /// Apply one status record. Returns the frame to draw, or `None` when
    /// nothing should be shown (heartbeat, or display off).
    ///
    /// The frame is captured before any end-of-game reset so the final board
    /// of a game is the last thing displayed.
    pub fn apply_status(&mut self, record: StatusRecord) -> Option<String> {
        if record.is_heartbeat() {
            return None;
        }

        if let Some(cell) = record.cell {
            self.apply_move(cell, record.word.occupant);
        }

        let frame = self.display_enabled.then(|| self.board.render());

        if record.word.end_of_game {
            self.finish_game(record.word.occupant);
        }

        frame
    }

    fn apply_move(&mut self, cell: usize, occupant: Occupant) {
        if !self.board.set(cell, occupant) {
            tracing::warn!(cell, "cell index out of range, dropping update");
            return;
        }
        if self.moves.len() == self.moves.capacity() {
            if let Err(e) = self.moves.try_reserve(1) {
                tracing::error!("move buffer growth failed, dropping move: {e}");
                return;
            }
        }
        self.moves.push(Move { cell, occupant });
    }

    /// Commit the finished game (winner taken from the end-flagged status
    /// word) and reset for the next one. A bare end signal with no recorded
    /// moves archives nothing.
    fn finish_game(&mut self, winner: Occupant) {
        if !self.moves.is_empty() {
            let moves = self.moves.iter().map(|m| m.cell);
            if let Err(e) = self.history.commit(moves, winner) {
                tracing::error!("history allocation failed, dropping completed game: {e}");
            }
            self.moves.clear();
        }
        self.board.reset();
    }

    /// Shutdown report lines, newest game first.
    pub fn report_lines(&self) -> impl Iterator<Item = String> + '_ {
        let side = self.board.side();
        self.history.iter().map(move |record| record.report_line(side))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// The run loop: multiplexer in, session state changes and terminal frames
/// out, control commands back to the engine on key presses.
pub struct Monitor<K, R> {
    session: Session,
    mux: Multiplexer<K, R>,
    control: ControlChannel,
    terminal: Terminal,
}

impl<K, R> Monitor<K, R>
where
    K: Stream<Item = io::Result<Event>> + Unpin,
    R: AsyncRead + Unpin,
{
    pub fn new(mux: Multiplexer<K, R>, control: ControlChannel, terminal: Terminal) -> Self {
        Self {
            session: Session::new(),
            mux,
            control,
            terminal,
        }
    }

    /// Dispatch events until a quit command lands. Multiplexing failures
    /// propagate; the caller exits non-zero without a report.
    pub async fn run(&mut self) -> Result<()> {
        while !self.session.terminating() {
            match self.mux.next().await? {
                MuxEvent::Key(key) => self.on_key(key).await?,
                MuxEvent::Status(record) => self.on_status(record)?,
            }
        }
        Ok(())
    }

    /// Tear down the channels and terminal, handing back the session so the
    /// shutdown report can be printed on a cooked terminal.
    pub fn into_session(self) -> Session {
        let Monitor { session, .. } = self;
        session
    }

    async fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        match (key.code, key.modifiers) {
            (KeyCode::Char(TOGGLE_KEY), KeyModifiers::CONTROL) => self.on_toggle().await,
            (KeyCode::Char(QUIT_KEY), KeyModifiers::CONTROL) => self.on_quit().await,
            _ => Ok(()),
        }
    }

    async fn on_toggle(&mut self) -> Result<()> {
        match self.control.toggle_display().await {
            Ok(Some(_)) => {
                self.session.flip_display();
                if !self.session.display_enabled() {
                    self.terminal.status_line("Board display paused")?;
                }
            }
            // Short read: no command recognized for this event
            Ok(None) => {}
            Err(e) => tracing::warn!("control toggle failed: {e}"),
        }
        Ok(())
    }

    async fn on_quit(&mut self) -> Result<()> {
        if let Err(e) = self.control.request_quit().await {
            tracing::warn!("control quit write failed: {e}");
        }
        self.terminal.status_line("Stopping the tic-tac-toe engine...")?;
        self.session.begin_termination();
        Ok(())
    }

    fn on_status(&mut self, record: StatusRecord) -> Result<()> {
        if let Some(frame) = self.session.apply_status(record) {
            self.terminal.draw_frame(&frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kxomon_protocol::status::NO_CELL;

    fn record(status: u8, cell: i32) -> StatusRecord {
        StatusRecord::from_wire(status, cell)
    }

    const END: u8 = 0x80;

    #[test]
    fn test_heartbeat_is_noop() {
        let mut session = Session::new();
        let frame = session.apply_status(record(b'O', NO_CELL));
        assert!(frame.is_none());
        assert!(session.board().is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_move_applied_and_rendered() {
        let mut session = Session::new();
        let frame = session.apply_status(record(b'O', 4)).unwrap();
        assert_eq!(session.board().get(4), Some(Occupant::new(b'O')));
        assert!(frame.contains('O'));
    }

    #[test]
    fn test_display_disabled_suppresses_frame() {
        let mut session = Session::new();
        session.flip_display();
        assert!(session.apply_status(record(b'O', 4)).is_none());
        // The move is still applied
        assert_eq!(session.board().get(4), Some(Occupant::new(b'O')));
    }

    #[test]
    fn test_toggle_pair_restores_display() {
        let mut session = Session::new();
        assert!(session.display_enabled());
        session.flip_display();
        session.flip_display();
        assert!(session.display_enabled());
    }

    #[test]
    fn test_empty_game_suppressed() {
        let mut session = Session::new();
        session.apply_status(record(b'O' | END, NO_CELL));
        assert!(session.history().is_empty());
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_repeated_end_signals_archive_once() {
        let mut session = Session::new();
        session.apply_status(record(b'O', 0));
        session.apply_status(record(b'O' | END, NO_CELL));
        session.apply_status(record(b'O' | END, NO_CELL));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_board_reset_after_commit() {
        let mut session = Session::new();
        session.apply_status(record(b'X', 2));
        session.apply_status(record(b'X' | END, NO_CELL));
        assert!(session.board().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_out_of_range_cell_dropped() {
        let mut session = Session::new();
        session.apply_status(record(b'O', 42));
        assert!(session.board().is_empty());
        session.apply_status(record(b'O' | END, NO_CELL));
        // The dropped update never made it into a record
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_end_word_with_cell_writes_then_records_winner() {
        let mut session = Session::new();
        session.apply_status(record(b'O', 0));
        let frame = session.apply_status(record(b'X' | END, 8)).unwrap();

        // The final cell was written before the reset
        assert!(frame.contains('X'));
        let game = session.history().iter().next().unwrap();
        assert_eq!(game.moves(), &[0, 8]);
        assert_eq!(game.winner(), Occupant::new(b'X'));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut session = Session::new();

        assert!(session.apply_status(record(1, 4)).is_some());
        assert!(session.apply_status(record(2, 0)).is_some());

        assert_eq!(session.board().get(4), Some(Occupant::new(1)));
        assert_eq!(session.board().get(0), Some(Occupant::new(2)));

        let frame = session.apply_status(record(1 | END, 8)).unwrap();
        assert_eq!(frame, "\n\n2| | \n-----\n |1| \n-----\n | |1\n-----\n");

        assert!(session.board().is_empty());
        assert_eq!(session.history().len(), 1);

        let game = session.history().iter().next().unwrap();
        assert_eq!(game.moves(), &[4, 0, 8]);
        assert_eq!(game.winner(), Occupant::new(1));

        let lines: Vec<_> = session.report_lines().collect();
        assert_eq!(lines, vec!["Moves: B2 -> A1 -> C3 | Winner: 1"]);
    }

    #[test]
    fn test_two_games_reported_newest_first() {
        let mut session = Session::new();
        session.apply_status(record(b'O', 0));
        session.apply_status(record(b'O' | END, NO_CELL));
        session.apply_status(record(b'X', 8));
        session.apply_status(record(b'X' | END, NO_CELL));

        let lines: Vec<_> = session.report_lines().collect();
        assert_eq!(
            lines,
            vec![
                "Moves: C3 | Winner: X",
                "Moves: A1 | Winner: O",
            ]
        );
    }

    #[test]
    fn test_begin_termination() {
        let mut session = Session::new();
        assert!(!session.terminating());
        session.begin_termination();
        assert!(session.terminating());
    }
}
