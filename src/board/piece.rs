/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::Square;

/// The two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the side this side is playing against.
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    White,
    Black,
    Tie,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "White"),
            Self::Black => write!(f, "Black"),
            Self::Tie => write!(f, "Tie"),
        }
    }
}

/// Stable handle to a piece in the board's arena.
///
/// A handle identifies a piece as an entity; two pieces with identical fields
/// still have distinct handles. Handles survive unrelated board mutations,
/// but a handle to a removed piece is stale and must be re-resolved by
/// position before reuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u32);

/// A piece on the board.
///
/// `kind` is the type identifier declared by configuration; the engine
/// attaches no built-in meaning to it beyond the rule-table lookup and the
/// pawn straight-push exception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    /// The type identifier of this piece, as declared by configuration.
    pub kind: String,

    /// Whether this piece is its team's king.
    pub is_king: bool,

    /// The side this piece belongs to.
    pub team: Color,

    /// Where this piece currently stands.
    pub position: Square,

    /// Whether this piece was ever relocated through the board's move
    /// primitive. Drives "first move" rules.
    pub has_moved: bool,
}

impl Piece {
    /// Constructs a new, not-yet-moved [`Piece`].
    pub fn new(kind: impl Into<String>, is_king: bool, position: Square, team: Color) -> Self {
        Self {
            kind: kind.into(),
            is_king,
            team,
            position,
            has_moved: false,
        }
    }
}
