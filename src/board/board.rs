/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::BTreeSet;

use crate::{GameSettings, PieceConfig};

use super::{Color, Piece, PieceId, Portal, Square};

/// The board: owner of every piece and portal in a game.
///
/// Pieces live in a free-list arena and are addressed by stable [`PieceId`]
/// handles, never by storage location. All other components borrow; any
/// handle held across a structural mutation (move, remove, rewind) must be
/// treated as invalidated and re-resolved by position.
#[derive(Clone, Debug)]
pub struct Board {
    /// Board side length.
    size: i32,

    /// Piece arena. `None` slots are free and tracked in `free`.
    slots: Vec<Option<Piece>>,

    /// Indices of vacated arena slots, reused by subsequent adds.
    free: Vec<u32>,

    /// All portals on the board.
    portals: Vec<Portal>,
}

impl Board {
    /// Constructs a board of the configured size and populates it with the
    /// configured pieces, one white and one black piece per indexed slot of
    /// each piece type.
    ///
    /// Positions are taken from the config as-is; an out-of-range index in a
    /// malformed config is the config layer's bug, not handled here.
    ///
    /// # Panics
    ///
    /// If two configured pieces claim the same square.
    pub fn new(settings: &GameSettings, piece_configs: &[PieceConfig]) -> Self {
        let mut board = Self {
            size: settings.board_size,
            slots: Vec::new(),
            free: Vec::new(),
            portals: Vec::new(),
        };

        for config in piece_configs {
            for i in 0..config.count {
                let black = Piece::new(
                    &config.kind,
                    config.king_type,
                    config.positions.black[i],
                    Color::Black,
                );
                let white = Piece::new(
                    &config.kind,
                    config.king_type,
                    config.positions.white[i],
                    Color::White,
                );

                board.add_piece(black);
                board.add_piece(white);
            }
        }

        board
    }

    /// Side length of the board.
    #[inline(always)]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Iterates over every live piece and its handle.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|piece| (PieceId(i as u32), piece)))
    }

    /// Iterates over the live pieces of `team`.
    pub fn pieces_of(&self, team: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.team == team)
    }

    /// Number of live pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Resolves a handle, or `None` if the piece was removed.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0 as usize).and_then(|slot| slot.as_ref())
    }

    /// Resolves a handle to its piece.
    ///
    /// # Panics
    ///
    /// If `id` is stale.
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.get(id)
            .unwrap_or_else(|| panic!("stale piece handle {id:?}"))
    }

    fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        self.slots
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.as_mut())
            .unwrap_or_else(|| panic!("stale piece handle {id:?}"))
    }

    pub(crate) fn set_has_moved(&mut self, id: PieceId, has_moved: bool) {
        self.piece_mut(id).has_moved = has_moved;
    }

    /// Finds the king of `team`, if one is on the board.
    pub fn king_of(&self, team: Color) -> Option<PieceId> {
        self.pieces_of(team)
            .find(|(_, piece)| piece.is_king)
            .map(|(id, _)| id)
    }

    /// The set of squares occupied by `team`.
    pub fn positions_of(&self, team: Color) -> BTreeSet<Square> {
        self.pieces_of(team)
            .map(|(_, piece)| piece.position)
            .collect()
    }

    /// The piece standing on `position`, if any.
    pub fn piece_at(&self, position: Square) -> Option<&Piece> {
        self.pieces()
            .find(|(_, piece)| piece.position == position)
            .map(|(_, piece)| piece)
    }

    /// The handle of the piece standing on `position`, if any.
    pub fn piece_id_at(&self, position: Square) -> Option<PieceId> {
        self.pieces()
            .find(|(_, piece)| piece.position == position)
            .map(|(id, _)| id)
    }

    /// Adds a piece to the board, returning its handle.
    ///
    /// # Panics
    ///
    /// If a piece already occupies the target square. Turn-level code
    /// pre-checks occupancy; hitting this is a caller bug.
    pub fn add_piece(&mut self, piece: Piece) -> PieceId {
        assert!(
            self.piece_at(piece.position).is_none(),
            "square {} is already occupied",
            piece.position
        );

        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(piece);
                PieceId(index)
            }
            None => {
                self.slots.push(Some(piece));
                PieceId(self.slots.len() as u32 - 1)
            }
        }
    }

    /// Removes a piece from the board, returning its final state as a
    /// snapshot suitable for later re-insertion.
    ///
    /// # Panics
    ///
    /// If `id` is stale.
    pub fn remove_piece(&mut self, id: PieceId) -> Piece {
        let piece = self
            .slots
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.take())
            .unwrap_or_else(|| panic!("stale piece handle {id:?}"));

        self.free.push(id.0);
        piece
    }

    /// Relocates a piece to `destination` and marks it as having moved.
    ///
    /// No path checking happens here; the caller already validated the move.
    /// The has-moved flag is set unconditionally, even for speculative
    /// relocations, which restore it themselves afterward.
    ///
    /// # Panics
    ///
    /// If `destination` is occupied, or `id` is stale.
    pub fn relocate(&mut self, id: PieceId, destination: Square) {
        assert!(
            self.piece_at(destination).is_none(),
            "square {destination} is already occupied"
        );

        let piece = self.piece_mut(id);
        piece.position = destination;
        piece.has_moved = true;
    }

    /// Exchanges the positions of two pieces in place, leaving both
    /// has-moved flags untouched. Intended for scenario setup, not gameplay.
    ///
    /// # Panics
    ///
    /// If either handle is stale.
    pub fn swap(&mut self, a: PieceId, b: PieceId) {
        let position_b = self.piece(b).position;
        let position_a = std::mem::replace(&mut self.piece_mut(a).position, position_b);
        self.piece_mut(b).position = position_a;
    }

    /// All portals on the board.
    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    pub(crate) fn portals_mut(&mut self) -> &mut [Portal] {
        &mut self.portals
    }

    /// The portal reachable through `position`: one whose entry is there,
    /// or whose exit is there if it is bidirectional.
    pub fn portal_at(&self, position: Square) -> Option<&Portal> {
        self.portals
            .iter()
            .find(|portal| portal.entry == position || (portal.both_ways && portal.exit == position))
    }

    pub(crate) fn portal_at_mut(&mut self, position: Square) -> Option<&mut Portal> {
        self.portals
            .iter_mut()
            .find(|portal| portal.entry == position || (portal.both_ways && portal.exit == position))
    }

    /// Registers a portal on the board.
    ///
    /// # Panics
    ///
    /// If another portal already claims the entry square.
    pub fn add_portal(&mut self, portal: Portal) {
        assert!(
            self.portal_at(portal.entry).is_none(),
            "a portal already occupies {}",
            portal.entry
        );

        self.portals.push(portal);
    }

    /// Renders the board as bordered ASCII art.
    pub fn render(&self) -> String {
        self.render_highlighted(&BTreeSet::new())
    }

    /// Renders the board, drawing emphasized borders around every square in
    /// `highlight`.
    ///
    /// Cells show a piece's type initial flanked by `^` (White) or `.`
    /// (Black). Portal endpoints show the portal's id initial flanked by `=`
    /// (bidirectional) or `>`/`<` pointing along the travel direction, and
    /// show the remaining cooldown digit instead while cooling down.
    pub fn render_highlighted(&self, highlight: &BTreeSet<Square>) -> String {
        let size = self.size as usize;
        let mut cells = vec![vec![[' '; 3]; size]; size];

        for portal in &self.portals {
            let (entry_cell, exit_cell) = if portal.current_cooldown != 0 {
                let digit = (b'0' + portal.current_cooldown.min(9) as u8) as char;
                ([' ', digit, ' '], [' ', digit, ' '])
            } else {
                let tag = portal.id.chars().next().unwrap_or('?');
                if portal.both_ways {
                    (['=', tag, '='], ['=', tag, '='])
                } else {
                    (['>', tag, '<'], ['<', tag, '>'])
                }
            };

            cells[portal.entry.y as usize][portal.entry.x as usize] = entry_cell;
            cells[portal.exit.y as usize][portal.exit.x as usize] = exit_cell;
        }

        for (_, piece) in self.pieces() {
            let tag = piece.kind.chars().next().unwrap_or('?');
            let flank = if piece.team == Color::White { '^' } else { '.' };
            cells[piece.position.y as usize][piece.position.x as usize] = [flank, tag, flank];
        }

        let mut out = String::new();

        // Column headers
        out.push_str("   ");
        for x in 0..size {
            out.push(' ');
            out.push((b'a' + x as u8) as char);
            out.push_str("  ");
        }
        out.push('\n');

        for y in (0..size).rev() {
            // Border above the row, emphasized when the square on either
            // side is highlighted
            out.push_str("  ");
            for x in 0..size {
                let emphasized = highlight.contains(&Square::new(x as i32, y as i32))
                    || highlight.contains(&Square::new(x as i32, y as i32 + 1));
                out.push_str(if emphasized { "+===" } else { "+---" });
            }
            out.push_str("+\n");

            out.push_str(&format!("{} ", y + 1));
            for x in 0..size {
                let emphasized = highlight.contains(&Square::new(x as i32 - 1, y as i32))
                    || highlight.contains(&Square::new(x as i32, y as i32));
                out.push(if emphasized { 'I' } else { '|' });
                out.extend(cells[y][x]);
            }

            let emphasized = highlight.contains(&Square::new(size as i32 - 1, y as i32));
            out.push(if emphasized { 'I' } else { '|' });
            out.push('\n');
        }

        // Bottom border
        out.push_str("  ");
        for x in 0..size {
            let emphasized = highlight.contains(&Square::new(x as i32, 0));
            out.push_str(if emphasized { "+===" } else { "+---" });
        }
        out.push_str("+\n");

        out
    }
}
