//! Interface between the search and the game rules implementation: whose
//! turn it is, which moves are legal and how a move transforms a position.
//!
//! The search never inspects positions directly. The full-fidelity
//! [`Environment`] is what the tree stores and expands; the cheaper
//! [`Rollout`] is the mutable snapshot that playouts burn through. Both are
//! provided by the game, and everything the search does is expressed through
//! them.

use std::fmt;
use std::ops::Not;

use anyhow::bail;
use bitflags::bitflags;

/// A game is played between two players: White (having the advantage of the
/// first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    White,
    Black,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("color should be 'w' or 'b', got '{color}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Self::White => 'w',
                Self::Black => 'b',
            }
        )
    }
}

bitflags! {
    /// Promotion kinds the move generator is allowed to emit.
    ///
    /// Restricting promotions prunes the branching factor at the root in
    /// games that have them. Games without promotions ignore the filter.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Promotions: u8 {
        /// Promotions to a queen (or the strongest piece of the game).
        const QUEEN = 1;
        /// Promotions to a rook.
        const ROOK = 1 << 1;
        /// Promotions to a bishop.
        const BISHOP = 1 << 2;
        /// Underpromotions to a knight.
        const KNIGHT = 1 << 3;
    }
}

/// Full-fidelity game state as stored in the search tree.
///
/// Implementations must be cheap enough to clone per expanded node. Move
/// enumeration order has to be deterministic for a given state: the search
/// uses it as the tie-break order between equally scored children.
pub trait Environment: Clone {
    /// A move that transforms one position into the next.
    type Move: Clone + fmt::Display;
    /// The lightweight snapshot used by playouts.
    type Rollout: Rollout<Move = Self::Move>;

    /// The player whose turn it is.
    fn side_to_move(&self) -> Player;

    /// Enumerates the legal moves in a stable order. `at_root` distinguishes
    /// root-level generation, where `promotions` filtering applies.
    fn generate_moves(&self, promotions: Promotions, at_root: bool) -> Vec<Self::Move>;

    /// Applies a legal move in place.
    fn make_move(&mut self, m: &Self::Move);

    /// Produces the lightweight snapshot for playouts.
    fn rollout(&self) -> Self::Rollout;
}

/// Mutable, throwaway position snapshot for the playout fast path.
pub trait Rollout {
    /// Same move representation as the owning [`Environment`].
    type Move;

    /// Enumerates the available moves for `side`.
    fn generate_moves(&self, side: Player) -> Vec<Self::Move>;

    /// Applies a move in place.
    fn make_move(&mut self, m: &Self::Move);
}
