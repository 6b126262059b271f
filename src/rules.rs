/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

use crate::{Board, Color, Piece, PieceConfig, Portal, Square};

/// The piece type whose straight pushes can never capture.
pub const PAWN_TYPE: &str = "pawn";

/// How far a piece may travel along one family of directions.
///
/// Configuration encodes this as a raw integer: `0` disables the family,
/// `-1` grants sliding to the board edge, and a positive `n` grants exactly
/// that distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "i32")]
pub enum MoveRange {
    /// Movement along this family is not granted.
    #[default]
    Disabled,

    /// Exactly this many squares, no more, no less.
    Fixed(i32),

    /// Sliding movement, bounded only by board edge and obstruction.
    Unlimited,
}

impl MoveRange {
    /// Whether a displacement of exactly `distance` squares is granted.
    #[inline(always)]
    pub const fn covers(&self, distance: i32) -> bool {
        match self {
            Self::Disabled => false,
            Self::Fixed(n) => *n == distance,
            Self::Unlimited => true,
        }
    }
}

impl From<i32> for MoveRange {
    fn from(raw: i32) -> Self {
        match raw {
            0 => Self::Disabled,
            n if n < 0 => Self::Unlimited,
            n => Self::Fixed(n),
        }
    }
}

/// The movement rules of one piece type.
///
/// All distances are team-relative: "forward" means toward the opponent's
/// back rank for both colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MovementRules {
    /// Straight movement toward the opponent.
    pub forward: MoveRange,

    /// Straight movement toward the own back rank.
    pub backward: MoveRange,

    /// Straight movement along the own rank, either direction.
    pub sideways: MoveRange,

    /// Diagonal movement in all four diagonal directions.
    pub diagonal: MoveRange,

    /// Knight-style jumps: `(1, 2)` displacements in any orientation.
    pub l_shape: bool,

    /// Forward-only movement granted once, before the piece has moved.
    pub first_move_forward: MoveRange,

    /// Forward diagonal movement onto an opposing piece only. Models
    /// pawn-style capture asymmetry without granting a general diagonal.
    pub diagonal_capture: MoveRange,
}

/// Stateless legality oracle over the per-type movement-rule table.
///
/// All operations are pure and safe to call arbitrarily during speculation.
/// A piece type absent from the table resolves to all-disabled rules: such a
/// piece simply cannot move, which is not an error.
#[derive(Debug)]
pub struct MoveValidator {
    rules: HashMap<String, MovementRules>,
}

impl MoveValidator {
    /// Builds the rule table from the configured piece types.
    pub fn new(piece_configs: &[PieceConfig]) -> Self {
        let rules = piece_configs
            .iter()
            .map(|config| (config.kind.clone(), config.movement))
            .collect();

        Self { rules }
    }

    fn rules_for(&self, kind: &str) -> MovementRules {
        self.rules.get(kind).copied().unwrap_or_default()
    }

    /// Returns `true` if moving `piece` to `destination` is geometrically
    /// legal on `board`: in bounds, shape granted by the piece's rules, no
    /// friendly piece on the target, and no obstruction along the path.
    ///
    /// Self-check is not this operation's concern; the turn machine layers
    /// that on top.
    pub fn validate_move(&self, board: &Board, piece: &Piece, destination: Square) -> bool {
        if !destination.in_bounds(board.size()) {
            return false;
        }

        // A friendly occupant blocks the move; an opposing one is a capture
        let occupant = board.piece_at(destination);
        if let Some(other) = occupant {
            if other.team == piece.team {
                return false;
            }
        }

        let origin = piece.position;
        let rule = self.rules_for(&piece.kind);

        let dx = destination.x - origin.x;
        let mut dy = destination.y - origin.y;

        // Rule offsets are team-relative; board coordinates stay absolute
        if piece.team == Color::Black {
            dy = -dy;
        }

        if dx == 0 && dy == 0 {
            // Not a move
            return false;
        } else if dx.abs() == dy.abs() {
            // Diagonal
            let granted = rule.diagonal.covers(dx.abs());
            let capture =
                occupant.is_some() && dy > 0 && rule.diagonal_capture.covers(dx.abs());
            if !granted && !capture {
                return false;
            }
        } else if dy == 0 {
            // Horizontal
            if !rule.sideways.covers(dx.abs()) {
                return false;
            }
        } else if dx == 0 && dy > 0 {
            // Forward. Pawns never capture by straight push
            if piece.kind == PAWN_TYPE && occupant.is_some() {
                return false;
            }

            let granted = rule.forward.covers(dy);
            let first_move = !piece.has_moved && rule.first_move_forward.covers(dy);
            if !granted && !first_move {
                return false;
            }
        } else if dx == 0 && dy < 0 {
            // Backward
            if !rule.backward.covers(-dy) {
                return false;
            }
        } else if (dx.abs() == 1 && dy.abs() == 2) || (dx.abs() == 2 && dy.abs() == 1) {
            // Knight-shape jumps over anything; no path check
            return rule.l_shape;
        } else {
            return false;
        }

        // Path obstruction along the confirmed line, endpoints excluded
        let range = dx.abs().max(dy.abs());
        let step_x = (destination.x - origin.x).signum();
        let step_y = (destination.y - origin.y).signum();
        for i in 1..range {
            let waypoint = Square::new(origin.x + step_x * i, origin.y + step_y * i);
            if board.piece_at(waypoint).is_some() {
                return false;
            }
        }

        true
    }

    /// Every square `piece` can legally move to.
    ///
    /// Candidates are generated from the rule table and then re-verified
    /// through [`MoveValidator::validate_move`], so the two operations cannot
    /// diverge.
    pub fn possible_moves(&self, board: &Board, piece: &Piece) -> BTreeSet<Square> {
        let origin = piece.position;
        let rule = self.rules_for(&piece.kind);
        let size = board.size();
        let mut candidates = Vec::new();

        // Vertical candidates: forward, first-move bonus, and backward all
        // live on the origin's file
        for range in [rule.forward, rule.first_move_forward, rule.backward] {
            match range {
                MoveRange::Disabled => {}
                MoveRange::Fixed(n) => {
                    candidates.push(Square::new(origin.x, origin.y + n));
                    candidates.push(Square::new(origin.x, origin.y - n));
                }
                MoveRange::Unlimited => {
                    candidates.extend((0..size).map(|y| Square::new(origin.x, y)));
                }
            }
        }

        match rule.sideways {
            MoveRange::Disabled => {}
            MoveRange::Fixed(n) => {
                candidates.push(Square::new(origin.x + n, origin.y));
                candidates.push(Square::new(origin.x - n, origin.y));
            }
            MoveRange::Unlimited => {
                candidates.extend((0..size).map(|x| Square::new(x, origin.y)));
            }
        }

        for range in [rule.diagonal, rule.diagonal_capture] {
            match range {
                MoveRange::Disabled => {}
                MoveRange::Fixed(n) => {
                    candidates.push(Square::new(origin.x + n, origin.y + n));
                    candidates.push(Square::new(origin.x + n, origin.y - n));
                    candidates.push(Square::new(origin.x - n, origin.y + n));
                    candidates.push(Square::new(origin.x - n, origin.y - n));
                }
                MoveRange::Unlimited => {
                    for i in 0..size {
                        candidates.push(Square::new(origin.x - origin.y + i, i));
                        candidates.push(Square::new(origin.x + origin.y - i, i));
                    }
                }
            }
        }

        if rule.l_shape {
            for (dx, dy) in [(1, 2), (2, 1)] {
                candidates.push(Square::new(origin.x + dx, origin.y + dy));
                candidates.push(Square::new(origin.x + dx, origin.y - dy));
                candidates.push(Square::new(origin.x - dx, origin.y + dy));
                candidates.push(Square::new(origin.x - dx, origin.y - dy));
            }
        }

        candidates
            .into_iter()
            .filter(|&destination| self.validate_move(board, piece, destination))
            .collect()
    }

    /// Returns `true` if `piece` may use `portal` right now: the portal is
    /// off cooldown and the piece's team is allowed through.
    pub fn validate_portal_use(&self, piece: &Piece, portal: &Portal) -> bool {
        portal.current_cooldown == 0 && portal.allows(piece.team)
    }
}
