//! End-to-end scenarios over literal FEN inputs, one per numbered case.

use chessrules_core::{load_position, render_san, Position, Square};

fn legal(fen: &str) -> (Position, Vec<chessrules_core::Move>) {
    let mut pos = load_position(fen).unwrap();
    let moves = chessrules_core::legal_moves(&mut pos);
    (pos, moves)
}

#[test]
fn scenario_1_starting_position_has_twenty_legal_moves() {
    let (_, moves) = legal("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves.iter().filter(|m| m.capture.is_none() && m.promotion.is_none()).count();
    assert!(pawn_moves >= 16);
}

#[test]
fn scenario_2_mate_in_one_has_105_mating_moves() {
    let (_, moves) = legal("1B1Q1Q2/2R5/pQ4QN/RB2k3/1Q5Q/N4Q2/K2Q4/6Q1 w - -");
    let mate_count = moves.iter().filter(|m| m.is_mate).count();
    assert_eq!(mate_count, 105);
}

#[test]
fn scenario_3_maximum_moves_position_has_218_legal_moves() {
    let (_, moves) = legal("R6R/3Q4/1Q4Q1/4Q3/2Q4Q/Q4Q2/pp1Q4/kBNN1KB1 w - -");
    assert_eq!(moves.len(), 218);
}

#[test]
fn scenario_4_pinned_knight_has_no_legal_moves() {
    let (_, moves) = legal("rnbqk1nr/pppp1ppp/8/4p3/1b1P4/2N5/PPP1PPPP/R1BQKBNR w KQkq - 2 3");
    let knight_moves: Vec<_> = moves.iter().filter(|m| m.from == Square::C3).collect();
    assert!(knight_moves.is_empty(), "pinned c3-knight should have zero legal moves");
    assert!(!moves.iter().any(|m| m.from == Square::C3 && m.to == Square::E5));
}

#[test]
fn scenario_5_en_passant_left_is_offered() {
    let (_, moves) = legal("rnbqkbnr/ppp1ppp1/7p/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    assert!(moves.iter().any(|m| {
        m.from == Square::E5
            && m.to == Square::D6
            && m.en_passant
            && m.capture == Some(chessrules_core::PieceKind::Pawn)
    }));
}

#[test]
fn scenario_6_pawn_promotions_include_thirty_two_moves() {
    let (_, moves) = legal("8/PPPPPPPP/8/8/8/7k/K7/8 w - - 0 1");
    let promo_count = moves.iter().filter(|m| m.promotion.is_some()).count();
    assert_eq!(promo_count, 32);
    assert!(moves.iter().any(|m| m.piece == chessrules_core::PieceKind::King));
}

#[test]
fn scenario_7_castling_legality_offers_both_sides() {
    let (_, moves) = legal("rnbqkbnr/ppp2ppp/3pp3/8/2BPP1Q1/2N1BN2/PPP2PPP/R3K2R w KQ - 6 7");
    let sans: Vec<String> = moves.iter().map(render_san).collect();
    assert!(sans.iter().any(|s| s == "O-O"));
    assert!(sans.iter().any(|s| s == "O-O-O"));
}
