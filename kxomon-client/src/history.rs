//! Move history store
//!
//! Completed games are archived newest-first and only read back at shutdown.
//! A commit takes an owned copy of the move list, so a record stays valid
//! after the live buffer resets for the next game.

// Allow unused code that's part of the public API
#![allow(dead_code)]

use std::collections::{vec_deque, TryReserveError, VecDeque};

use kxomon_protocol::Occupant;

use crate::board::cell_label;

/// Archived outcome of one completed game. Immutable once committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<usize>,
    winner: Occupant,
}

impl GameRecord {
    /// Cell indices in the order the moves arrived.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn winner(&self) -> Occupant {
        self.winner
    }

    /// One-line shutdown report entry, cells translated to column/row labels.
    pub fn report_line(&self, side: usize) -> String {
        let moves = self
            .moves
            .iter()
            .map(|&cell| cell_label(cell, side))
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("Moves: {} | Winner: {}", moves, self.winner)
    }
}

/// Ordered collection of completed games, newest first.
#[derive(Debug, Default)]
pub struct History {
    records: VecDeque<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record at the front. Allocation is fallible: on failure
    /// the store is unchanged and the caller drops this game.
    pub fn commit<I>(&mut self, moves: I, winner: Occupant) -> Result<(), TryReserveError>
    where
        I: IntoIterator<Item = usize>,
        I::IntoIter: ExactSizeIterator,
    {
        self.records.try_reserve(1)?;
        let moves = moves.into_iter();
        let mut owned = Vec::new();
        owned.try_reserve_exact(moves.len())?;
        owned.extend(moves);
        self.records.push_front(GameRecord {
            moves: owned,
            winner,
        });
        Ok(())
    }

    /// Iterate records newest-first. Finite and restartable.
    pub fn iter(&self) -> vec_deque::Iter<'_, GameRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
