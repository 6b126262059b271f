/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::BTreeSet;

use crate::{
    Board, Color, GameConfig, MoveValidator, Piece, PieceId, PortalSystem, Square, Winner,
};

/// A reversible relocation: the single speculation primitive shared by the
/// self-check guard and the exhaustive game-over search.
///
/// Captures everything needed to restore the board exactly: the origin, the
/// prior has-moved flag, and a snapshot of any captured piece.
#[derive(Debug)]
struct MoveRecord {
    piece: PieceId,
    from: Square,
    had_moved: bool,
    captured: Option<Piece>,
}

impl MoveRecord {
    /// Applies the relocation, capturing any opposing piece on
    /// `destination`.
    ///
    /// # Panics
    ///
    /// If a friendly piece occupies `destination`; the caller must have
    /// validated the move first.
    fn apply(board: &mut Board, id: PieceId, destination: Square) -> Self {
        let (from, had_moved, team) = {
            let piece = board.piece(id);
            (piece.position, piece.has_moved, piece.team)
        };

        let captured = board.piece_id_at(destination).map(|victim| {
            assert!(
                board.piece(victim).team != team,
                "capturing a friendly piece; move validation must have caught this"
            );
            board.remove_piece(victim)
        });

        board.relocate(id, destination);

        Self {
            piece: id,
            from,
            had_moved,
            captured,
        }
    }

    /// Rewinds the relocation: restores the origin and the prior has-moved
    /// flag, and re-inserts any captured piece with its exact prior
    /// attributes.
    fn undo(self, board: &mut Board) {
        board.relocate(self.piece, self.from);
        board.set_has_moved(self.piece, self.had_moved);

        if let Some(captured) = self.captured {
            board.add_piece(captured);
        }
    }
}

/// A game in progress: the turn state machine over a [`Board`], a
/// [`MoveValidator`], and a [`PortalSystem`].
///
/// The only component with a notion of whose turn it is, whether a move is
/// legal right now, and whether the game is over. Exposes no I/O; drivers
/// call [`Game::play_turn`] in a loop and render the returned state.
#[derive(Debug)]
pub struct Game {
    board: Board,
    validator: MoveValidator,
    portals: PortalSystem,

    current_player: Color,
    move_count: u32,
    move_limit: u32,
    game_over: bool,
    winner: Option<Winner>,

    /// Why the most recent turn was rejected. Overwritten each call, not a
    /// log.
    turn_error: &'static str,

    /// The most recently observed checking piece, kept for end-of-game
    /// reporting only.
    checking_piece: Option<PieceId>,
}

impl Game {
    /// Sets up a game from an already-well-formed configuration.
    ///
    /// The configured turn limit counts full turns and is doubled into a
    /// half-turn counter internally.
    pub fn new(config: &GameConfig) -> Self {
        let mut board = Board::new(&config.game_settings, &config.pieces);
        let portals = PortalSystem::new(&mut board, &config.portals);
        let validator = MoveValidator::new(&config.pieces);

        Self {
            board,
            validator,
            portals,
            current_player: Color::White,
            move_count: 0,
            move_limit: config.game_settings.turn_limit * 2,
            game_over: false,
            winner: None,
            turn_error: "",
            checking_piece: None,
        }
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Half-turns committed so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Half-turn limit, or zero if unlimited.
    pub fn move_limit(&self) -> u32 {
        self.move_limit
    }

    /// Why the most recent turn was rejected.
    pub fn turn_error(&self) -> &'static str {
        self.turn_error
    }

    /// Whether the game has reached a terminal state.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// The most recently observed checking piece, for reporting. May be
    /// stale if that piece has since been captured.
    pub fn checking_piece(&self) -> Option<PieceId> {
        self.checking_piece
    }

    /// Every square the given piece can legally move to, ignoring
    /// self-check.
    ///
    /// # Panics
    ///
    /// If `id` is stale.
    pub fn possible_moves(&self, id: PieceId) -> BTreeSet<Square> {
        self.validator.possible_moves(&self.board, self.board.piece(id))
    }

    /// Returns `true` if any piece on the board can legally move onto the
    /// king square of `team`, recording the attacker for reporting.
    ///
    /// # Panics
    ///
    /// If `team` has no king on the board. That signals a malformed ruleset
    /// which let a king be captured, which the engine assumes impossible.
    pub fn is_king_under_check(&mut self, team: Color) -> bool {
        let checker = self.find_checker(team);
        if checker.is_some() {
            self.checking_piece = checker;
        }

        checker.is_some()
    }

    fn find_checker(&self, team: Color) -> Option<PieceId> {
        let king = self
            .board
            .king_of(team)
            .unwrap_or_else(|| panic!("no {team} king on the board, which is impossible"));
        let king_square = self.board.piece(king).position;

        self.board
            .pieces()
            .find(|(_, piece)| self.validator.validate_move(&self.board, piece, king_square))
            .map(|(id, _)| id)
    }

    fn reject(&mut self, reason: &'static str) -> bool {
        self.turn_error = reason;
        false
    }

    /// Plays one turn by position pair: the piece standing on `from` moves
    /// to `to`.
    ///
    /// Returns `true` if the move was committed. On rejection, the board is
    /// unchanged and [`Game::turn_error`] holds the reason.
    pub fn play_turn(&mut self, from: Square, to: Square) -> bool {
        let Some(id) = self.board.piece_id_at(from) else {
            return self.reject("No Piece at Position");
        };

        self.play_turn_piece(id, to)
    }

    /// Plays one turn with the piece behind `id`.
    ///
    /// A destination on a portal endpoint redirects the landing square to
    /// the portal's far endpoint; the piece never stops on the portal tile.
    ///
    /// # Panics
    ///
    /// If `id` is stale, or if the square behind a portal holds a friendly
    /// piece (the geometric validation cannot see through portals).
    pub fn play_turn_piece(&mut self, id: PieceId, destination: Square) -> bool {
        if self.game_over {
            return self.reject("Game is Over");
        }

        let piece = self.board.piece(id).clone();
        if !self.validator.validate_move(&self.board, &piece, destination) {
            return self.reject("Invalid Move");
        }

        if piece.team != self.current_player {
            return self.reject("Wrong Player");
        }

        // Entering a portal relocates straight to the far endpoint
        let mut landing = destination;
        let mut used_portal = None;
        if let Some(portal) = self.board.portal_at(destination) {
            if !self.validator.validate_portal_use(&piece, portal) {
                return self.reject("Portal is Unusable");
            }

            landing = portal.far_end(destination);
            used_portal = Some(portal.entry);
        }

        let record = MoveRecord::apply(&mut self.board, id, landing);

        if self.is_king_under_check(self.current_player) {
            record.undo(&mut self.board);
            return self.reject("King Under Check! Reversed");
        }

        // Commit. Decay runs before the used portal's cooldown starts, so a
        // just-used portal does not decay on its activation turn
        self.portals.decrease_cooldowns(&mut self.board);
        if let Some(entry) = used_portal {
            self.portals.start_cooldown(&mut self.board, entry);
        }

        self.current_player = self.current_player.opponent();
        self.move_count += 1;
        self.check_game_over();

        true
    }

    /// Game-over detection for the side about to move: speculatively applies
    /// every legal candidate move and rewinds it, looking for one that
    /// leaves the king clear.
    ///
    /// No escape and in check is checkmate; no escape out of check is
    /// stalemate. Reaching the half-turn limit forces a tie.
    fn check_game_over(&mut self) {
        let in_check = self.is_king_under_check(self.current_player);

        let team_pieces: Vec<PieceId> = self
            .board
            .pieces_of(self.current_player)
            .map(|(id, _)| id)
            .collect();

        let mut trapped = true;
        'candidates: for id in team_pieces {
            let piece = self.board.piece(id).clone();
            for destination in self.validator.possible_moves(&self.board, &piece) {
                let record = MoveRecord::apply(&mut self.board, id, destination);
                let still_check = self.find_checker(self.current_player).is_some();
                record.undo(&mut self.board);

                if !still_check {
                    trapped = false;
                    break 'candidates;
                }
            }
        }

        if trapped {
            self.game_over = true;
            self.winner = Some(if in_check {
                Winner::from(self.current_player.opponent())
            } else {
                Winner::Tie
            });
        } else if self.move_limit > 0 && self.move_count >= self.move_limit {
            self.game_over = true;
            self.winner = Some(Winner::Tie);
        }
    }
}
