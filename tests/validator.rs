/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod common;

use std::collections::BTreeSet;

use common::*;
use portalchess::{Board, Color, MoveValidator, Piece, Portal, Square};

fn no_pawn_setup() -> (Board, MoveValidator) {
    let config = no_pawn_config();
    let board = Board::new(&config.game_settings, &config.pieces);
    let validator = MoveValidator::new(&config.pieces);
    (board, validator)
}

fn standard_setup() -> (Board, MoveValidator) {
    let config = standard_config();
    let board = Board::new(&config.game_settings, &config.pieces);
    let validator = MoveValidator::new(&config.pieces);
    (board, validator)
}

fn squares(list: &[(i32, i32)]) -> BTreeSet<Square> {
    list.iter().map(|&(x, y)| sq(x, y)).collect()
}

/// validate_move(piece, p) must hold exactly when p is in
/// possible_moves(piece), for every piece and every square.
#[test]
fn possible_moves_and_validate_move_agree() {
    let (board, validator) = no_pawn_setup();

    for (_, piece) in board.pieces() {
        let moves = validator.possible_moves(&board, piece);

        for x in 0..board.size() {
            for y in 0..board.size() {
                let destination = sq(x, y);
                assert_eq!(
                    validator.validate_move(&board, piece, destination),
                    moves.contains(&destination),
                    "{} {} at {}: disagreement on {destination}",
                    piece.team,
                    piece.kind,
                    piece.position,
                );
            }
        }
    }
}

#[test]
fn opening_moves_without_pawns() {
    let (board, validator) = no_pawn_setup();

    let expected: &[((i32, i32), &[(i32, i32)])] = &[
        // Rooks slide the empty files
        ((0, 0), &[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7)]),
        ((0, 7), &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6)]),
        ((7, 0), &[(7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]),
        ((7, 7), &[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4), (7, 5), (7, 6)]),
        // Bishops
        ((2, 0), &[(1, 1), (0, 2), (3, 1), (4, 2), (5, 3), (6, 4), (7, 5)]),
        ((2, 7), &[(1, 6), (0, 5), (3, 6), (4, 5), (5, 4), (6, 3), (7, 2)]),
        ((5, 0), &[(6, 1), (7, 2), (4, 1), (3, 2), (2, 3), (1, 4), (0, 5)]),
        ((5, 7), &[(6, 6), (7, 5), (4, 6), (3, 5), (2, 4), (1, 3), (0, 2)]),
        // Knights, hemmed in by their own back rank
        ((1, 0), &[(0, 2), (2, 2), (3, 1)]),
        ((1, 7), &[(0, 5), (2, 5), (3, 6)]),
        ((6, 0), &[(7, 2), (5, 2), (4, 1)]),
        ((6, 7), &[(7, 5), (5, 5), (4, 6)]),
        // Queens
        (
            (3, 0),
            &[
                (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7),
                (2, 1), (1, 2), (0, 3), (4, 1), (5, 2), (6, 3), (7, 4),
            ],
        ),
        (
            (3, 7),
            &[
                (3, 6), (3, 5), (3, 4), (3, 3), (3, 2), (3, 1), (3, 0),
                (2, 6), (1, 5), (0, 4), (4, 6), (5, 5), (6, 4), (7, 3),
            ],
        ),
        // Kings
        ((4, 0), &[(3, 1), (4, 1), (5, 1)]),
        ((4, 7), &[(3, 6), (4, 6), (5, 6)]),
    ];

    for &((x, y), moves) in expected {
        let piece = board.piece_at(sq(x, y)).unwrap();
        assert_eq!(
            validator.possible_moves(&board, piece),
            squares(moves),
            "wrong move set for {} {} at {}",
            piece.team,
            piece.kind,
            piece.position,
        );
    }
}

#[test]
fn pawn_pushes() {
    let (board, validator) = standard_setup();

    let white_pawn = board.piece_at(sq(4, 1)).unwrap();
    assert_eq!(
        validator.possible_moves(&board, white_pawn),
        squares(&[(4, 2), (4, 3)]),
    );

    let black_pawn = board.piece_at(sq(4, 6)).unwrap();
    assert_eq!(
        validator.possible_moves(&board, black_pawn),
        squares(&[(4, 5), (4, 4)]),
    );
}

#[test]
fn first_move_bonus_expires_after_relocation() {
    let (mut board, validator) = standard_setup();

    let id = board.piece_id_at(sq(4, 1)).unwrap();
    board.relocate(id, sq(4, 2));

    let pawn = board.piece(id);
    assert!(validator.validate_move(&board, pawn, sq(4, 3)));
    assert!(!validator.validate_move(&board, pawn, sq(4, 4)));
}

#[test]
fn pawn_never_captures_by_straight_push() {
    let (mut board, validator) = standard_setup();

    // A black blocker one and two squares ahead of the e2 pawn
    board.add_piece(Piece::new("blocker", false, sq(4, 3), Color::Black));
    let pawn = board.piece_at(sq(4, 1)).unwrap();
    assert!(validator.validate_move(&board, pawn, sq(4, 2)));
    assert!(!validator.validate_move(&board, pawn, sq(4, 3)));

    board.add_piece(Piece::new("blocker", false, sq(4, 2), Color::Black));
    let pawn = board.piece_at(sq(4, 1)).unwrap();
    assert!(!validator.validate_move(&board, pawn, sq(4, 2)));
}

#[test]
fn pawn_diagonal_capture_is_forward_onto_opponent_only() {
    let (mut board, validator) = standard_setup();

    // Empty diagonal: no
    let pawn = board.piece_at(sq(4, 1)).unwrap();
    assert!(!validator.validate_move(&board, pawn, sq(3, 2)));

    // Opposing piece on the forward diagonal: yes
    board.add_piece(Piece::new("blocker", false, sq(3, 2), Color::Black));
    let pawn = board.piece_at(sq(4, 1)).unwrap();
    assert!(validator.validate_move(&board, pawn, sq(3, 2)));

    // A black pawn's forward diagonal runs toward White
    board.add_piece(Piece::new("blocker", false, sq(3, 5), Color::White));
    let black_pawn = board.piece_at(sq(4, 6)).unwrap();
    assert!(validator.validate_move(&board, black_pawn, sq(3, 5)));

    // Backward diagonal onto an opponent: no
    let id = board.add_piece(Piece::new("pawn", false, sq(4, 3), Color::White));
    board.add_piece(Piece::new("blocker", false, sq(5, 2), Color::Black));
    assert!(!validator.validate_move(&board, board.piece(id), sq(5, 2)));
}

#[test]
fn same_team_destination_is_illegal() {
    let (board, validator) = standard_setup();

    let rook = board.piece_at(sq(0, 0)).unwrap();
    assert!(!validator.validate_move(&board, rook, sq(0, 1)));
}

#[test]
fn out_of_bounds_is_illegal() {
    let (board, validator) = no_pawn_setup();

    let rook = board.piece_at(sq(0, 0)).unwrap();
    assert!(!validator.validate_move(&board, rook, sq(-1, 0)));
    assert!(!validator.validate_move(&board, rook, sq(0, 8)));
}

#[test]
fn sliding_moves_stop_at_obstructions() {
    let (mut board, validator) = no_pawn_setup();

    board.add_piece(Piece::new("blocker", false, sq(0, 3), Color::Black));
    let rook = board.piece_at(sq(0, 0)).unwrap();

    // Up to and including the blocker, capture included
    assert!(validator.validate_move(&board, rook, sq(0, 2)));
    assert!(validator.validate_move(&board, rook, sq(0, 3)));
    // Not through it
    assert!(!validator.validate_move(&board, rook, sq(0, 4)));
    assert!(!validator.validate_move(&board, rook, sq(0, 7)));
}

#[test]
fn knights_jump_over_obstructions() {
    let (board, validator) = standard_setup();

    // Pawns hem in everything else, but not the knights
    let knight = board.piece_at(sq(1, 0)).unwrap();
    assert_eq!(
        validator.possible_moves(&board, knight),
        squares(&[(0, 2), (2, 2)]),
    );
}

#[test]
fn unknown_piece_type_cannot_move() {
    let (mut board, validator) = no_pawn_setup();

    let id = board.add_piece(Piece::new("wizard", false, sq(4, 4), Color::White));
    let wizard = board.piece(id);

    assert!(validator.possible_moves(&board, wizard).is_empty());
    assert!(!validator.validate_move(&board, wizard, sq(4, 5)));
}

#[test]
fn portal_use_requires_ready_portal_and_allowed_team() {
    let (board, validator) = standard_setup();

    let mut gate = Portal::from_config(&portal(
        "X",
        sq(0, 3),
        sq(7, 4),
        false,
        &["white"],
        3,
    ));

    let white = board.piece_at(sq(0, 1)).unwrap();
    let black = board.piece_at(sq(0, 6)).unwrap();

    assert!(validator.validate_portal_use(white, &gate));
    assert!(!validator.validate_portal_use(black, &gate));

    gate.current_cooldown = 1;
    assert!(!validator.validate_portal_use(white, &gate));
}
