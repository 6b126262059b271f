/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Shared configuration builders for the integration suites.

#![allow(dead_code)]

use portalchess::{
    GameConfig, GameSettings, MovementRules, PieceConfig, PiecePositions, PortalConfig,
    PortalPositions, PortalProperties, Square,
};

pub fn sq(x: i32, y: i32) -> Square {
    Square::new(x, y)
}

pub fn settings(name: &str, board_size: i32, turn_limit: u32) -> GameSettings {
    GameSettings {
        name: name.into(),
        board_size,
        turn_limit,
    }
}

pub fn movement(
    forward: i32,
    backward: i32,
    sideways: i32,
    diagonal: i32,
    l_shape: bool,
    first_move_forward: i32,
    diagonal_capture: i32,
) -> MovementRules {
    MovementRules {
        forward: forward.into(),
        backward: backward.into(),
        sideways: sideways.into(),
        diagonal: diagonal.into(),
        l_shape,
        first_move_forward: first_move_forward.into(),
        diagonal_capture: diagonal_capture.into(),
    }
}

pub fn piece_type(
    kind: &str,
    king_type: bool,
    movement: MovementRules,
    white: Vec<Square>,
    black: Vec<Square>,
) -> PieceConfig {
    let count = white.len();
    PieceConfig {
        kind: kind.into(),
        king_type,
        positions: PiecePositions { white, black },
        movement,
        count,
    }
}

pub fn portal(
    id: &str,
    entry: Square,
    exit: Square,
    preserve_direction: bool,
    allowed_colors: &[&str],
    cooldown: u32,
) -> PortalConfig {
    PortalConfig {
        id: id.into(),
        positions: PortalPositions { entry, exit },
        properties: PortalProperties {
            preserve_direction,
            allowed_colors: allowed_colors.iter().map(|c| c.to_string()).collect(),
            cooldown,
        },
    }
}

fn back_rank(y: i32, xs: &[i32]) -> Vec<Square> {
    xs.iter().map(|&x| sq(x, y)).collect()
}

/// The six standard chess piece types at their standard starting squares.
pub fn standard_pieces() -> Vec<PieceConfig> {
    vec![
        piece_type(
            "pawn",
            false,
            movement(1, 0, 0, 0, false, 2, 1),
            (0..8).map(|x| sq(x, 1)).collect(),
            (0..8).map(|x| sq(x, 6)).collect(),
        ),
        piece_type(
            "rook",
            false,
            movement(-1, -1, -1, 0, false, 0, 0),
            back_rank(0, &[0, 7]),
            back_rank(7, &[0, 7]),
        ),
        piece_type(
            "knight",
            false,
            movement(0, 0, 0, 0, true, 0, 0),
            back_rank(0, &[1, 6]),
            back_rank(7, &[1, 6]),
        ),
        piece_type(
            "bishop",
            false,
            movement(0, 0, 0, -1, false, 0, 0),
            back_rank(0, &[2, 5]),
            back_rank(7, &[2, 5]),
        ),
        piece_type(
            "queen",
            false,
            movement(-1, -1, -1, -1, false, 0, 0),
            back_rank(0, &[3]),
            back_rank(7, &[3]),
        ),
        piece_type(
            "king",
            true,
            movement(1, 1, 1, 1, false, 0, 0),
            back_rank(0, &[4]),
            back_rank(7, &[4]),
        ),
    ]
}

/// Full standard chess, no portals, no turn limit.
pub fn standard_config() -> GameConfig {
    GameConfig {
        game_settings: settings("Standard Chess", 8, 0),
        pieces: standard_pieces(),
        portals: Vec::new(),
    }
}

/// Standard chess minus the pawns, for unobstructed movement geometry.
pub fn no_pawn_config() -> GameConfig {
    let mut config = standard_config();
    config.pieces.retain(|piece| piece.kind != "pawn");
    config.game_settings.name = "Standard Chess, No Pawns".into();
    config
}

/// Kings plus one rook per side, with the given portals.
pub fn rook_duel_config(portals: Vec<PortalConfig>) -> GameConfig {
    GameConfig {
        game_settings: settings("Rook Duel", 8, 0),
        pieces: vec![
            piece_type(
                "king",
                true,
                movement(1, 1, 1, 1, false, 0, 0),
                vec![sq(4, 0)],
                vec![sq(4, 7)],
            ),
            piece_type(
                "rook",
                false,
                movement(-1, -1, -1, 0, false, 0, 0),
                vec![sq(0, 0)],
                vec![sq(7, 7)],
            ),
        ],
        portals,
    }
}
