//! Table-driven game fixture: positions, sides and transitions are declared
//! up front, so search behaviour over the fixture is exactly predictable.

use std::fmt;
use std::sync::Arc;

use tanto::environment::{Environment, Player, Promotions, Rollout};
use tanto::evaluation::{Evaluate, Reward};

/// One declared position: the side to move and the labelled transitions to
/// successor entries.
pub(crate) struct Entry {
    pub(crate) side: Player,
    pub(crate) moves: Vec<(char, usize)>,
}

pub(crate) fn entry(side: Player, moves: &[(char, usize)]) -> Entry {
    Entry {
        side,
        moves: moves.to_vec(),
    }
}

/// A labelled move between table entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Label(pub(crate) char);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position in the scripted game: an index into the shared table.
#[derive(Clone)]
pub(crate) struct Script {
    table: Arc<Vec<Entry>>,
    at: usize,
}

impl Script {
    pub(crate) fn new(table: Vec<Entry>) -> Self {
        Self {
            table: Arc::new(table),
            at: 0,
        }
    }
}

fn moves_of(table: &[Entry], at: usize) -> Vec<Label> {
    table[at].moves.iter().map(|&(label, _)| Label(label)).collect()
}

fn successor(table: &[Entry], at: usize, m: Label) -> usize {
    table[at]
        .moves
        .iter()
        .find(|&&(label, _)| label == m.0)
        .map(|&(_, target)| target)
        .expect("scripted games only receive their own moves")
}

impl Environment for Script {
    type Move = Label;
    type Rollout = Playback;

    fn side_to_move(&self) -> Player {
        self.table[self.at].side
    }

    fn generate_moves(&self, _promotions: Promotions, _at_root: bool) -> Vec<Label> {
        moves_of(&self.table, self.at)
    }

    fn make_move(&mut self, m: &Label) {
        self.at = successor(&self.table, self.at, *m);
    }

    fn rollout(&self) -> Playback {
        Playback {
            table: Arc::clone(&self.table),
            at: self.at,
        }
    }
}

/// Lightweight counterpart of [`Script`]; walks the same table.
pub(crate) struct Playback {
    table: Arc<Vec<Entry>>,
    at: usize,
}

impl Rollout for Playback {
    type Move = Label;

    fn generate_moves(&self, _side: Player) -> Vec<Label> {
        moves_of(&self.table, self.at)
    }

    fn make_move(&mut self, m: &Label) {
        self.at = successor(&self.table, self.at, *m);
    }
}

/// Evaluator that scores every unfinished playout with the same value.
pub(crate) struct Fixed(pub(crate) Reward);

impl<R> Evaluate<R> for Fixed {
    fn evaluate(&self, _rollout: &R, _side: Player) -> Reward {
        self.0
    }
}
