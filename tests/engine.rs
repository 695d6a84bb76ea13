//! Engine properties checked over many seeded random games.

use othello::ai::{greedy_move, random_move};
use othello::board::{BOARD_SIZE, Board};
use othello::sim::play_out;
use othello::{BoardError, Cell, Piece, Position, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn all_cells() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
}

/// Plays `plies` random moves (passing when stuck) from the opening.
fn random_position(seed: u64, plies: usize) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let piece = board.current_player();
        if let Some(mv) = random_move(&board, piece, &mut rng) {
            board.place(mv.row, mv.col, piece).unwrap();
        }
        board.switch_turn();
    }
    board
}

#[test]
fn opening_position_matches_directional_scan() {
    let board = Board::new();
    let occupied: Vec<(Position, Cell)> = all_cells()
        .map(|p| (p, board.cell(p.row, p.col).unwrap()))
        .filter(|(_, cell)| *cell != Cell::Empty)
        .collect();

    assert_eq!(
        occupied,
        vec![
            (Position::new(3, 3), Cell::Black),
            (Position::new(3, 4), Cell::White),
            (Position::new(4, 3), Cell::White),
            (Position::new(4, 4), Cell::Black),
        ]
    );
    assert_eq!(board.current_player(), Piece::Black);

    let moves = board.legal_moves(Piece::Black);
    assert_eq!(
        moves,
        vec![
            Position::new(2, 4),
            Position::new(3, 5),
            Position::new(4, 2),
            Position::new(5, 3),
        ]
    );
    for mv in &moves {
        assert_eq!(board.capture_value(mv.row, mv.col, Piece::Black), Ok(1));
    }

    let mut after = board;
    assert_eq!(after.place(2, 4, Piece::Black), Ok(vec![Position::new(3, 4)]));
    assert_eq!(after.cell(3, 3), Ok(Cell::Black));
}

#[test]
fn queries_never_mutate_the_board() {
    for seed in 0..20 {
        let board = random_position(seed, (seed as usize * 3) % 50);
        let before = board;

        for p in all_cells() {
            for piece in [Piece::Black, Piece::White] {
                let legal = board.is_legal_move(p.row, p.col, piece).unwrap();
                let value = board.capture_value(p.row, p.col, piece).unwrap();
                if board.cell(p.row, p.col).unwrap() != Cell::Empty {
                    assert!(!legal);
                    assert_eq!(value, 0);
                }
                assert_eq!(legal, value > 0);
            }
        }
        let _ = board.is_terminal();
        let _ = greedy_move(&board, board.current_player());

        assert_eq!(board, before);
    }
}

#[test]
fn place_adds_one_disc_and_flips_exactly_the_capture_value() {
    for seed in 0..20 {
        let board = random_position(seed, 20);
        let piece = board.current_player();

        for mv in board.legal_moves(piece) {
            let value = board.capture_value(mv.row, mv.col, piece).unwrap();
            assert!(value >= 1);

            let mut next = board;
            let flipped = next.place(mv.row, mv.col, piece).unwrap();

            assert_eq!(flipped.len(), value);
            assert_eq!(
                next.count_pieces(Piece::Black) + next.count_pieces(Piece::White),
                board.count_pieces(Piece::Black) + board.count_pieces(Piece::White) + 1
            );
            assert_eq!(
                next.count_pieces(piece),
                board.count_pieces(piece) + value + 1
            );
            for p in flipped {
                assert_eq!(board.cell(p.row, p.col), Ok(Cell::from(piece.opponent())));
                assert_eq!(next.cell(p.row, p.col), Ok(Cell::from(piece)));
            }
        }
    }
}

#[test]
fn illegal_cells_are_rejected_by_place() {
    let board = random_position(3, 12);
    let piece = board.current_player();

    for p in all_cells() {
        if board.is_legal_move(p.row, p.col, piece).unwrap() {
            continue;
        }
        let mut copy = board;
        assert_eq!(
            copy.place(p.row, p.col, piece),
            Err(BoardError::IllegalMove {
                row: p.row,
                col: p.col,
                piece
            })
        );
        assert_eq!(copy, board);
    }
}

#[test]
fn terminal_state_is_global() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        play_out(&mut board, Strategy::Random, Strategy::Greedy, &mut rng).unwrap();

        assert!(board.is_terminal());
        let total: usize = all_cells()
            .flat_map(|p| {
                [Piece::Black, Piece::White]
                    .map(|piece| board.capture_value(p.row, p.col, piece).unwrap())
            })
            .sum();
        assert!(board.empty_count() == 0 || total == 0);
    }
}

#[test]
fn greedy_choice_has_maximal_capture_value() {
    for seed in 0..20 {
        let board = random_position(seed + 100, 16);
        let piece = board.current_player();
        let Some(choice) = greedy_move(&board, piece) else {
            assert!(board.legal_moves(piece).is_empty());
            continue;
        };

        let best = board.capture_value(choice.row, choice.col, piece).unwrap();
        for p in all_cells() {
            let value = board.capture_value(p.row, p.col, piece).unwrap();
            assert!(value <= best);
            if value == best {
                assert!(p >= choice, "{p} ties {choice} but comes first");
            }
        }
    }
}
