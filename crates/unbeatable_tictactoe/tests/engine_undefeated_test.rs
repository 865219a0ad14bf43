//! The computer never loses, whatever X does.

use proptest::prelude::*;
use unbeatable_tictactoe::{
    Board, OutcomeEvent, Player, Session, choose_move, evaluate_outcome, rules,
};

/// Plays every possible X move from `session`, recursing until each game ends.
fn explore(session: &Session, finished: &mut Vec<OutcomeEvent>) {
    let empties: Vec<usize> = session.board().empty_cells().collect();
    for index in empties {
        let mut next = session.clone();
        let event = next
            .apply_human_move(index)
            .expect("empty cell on an undecided board must be playable");

        assert_ne!(
            event,
            OutcomeEvent::Win { winner: Player::X },
            "X won after {:?}",
            next.history()
        );
        assert_board_consistent(next.board());

        if event.is_terminal() {
            finished.push(event);
        } else {
            explore(&next, finished);
        }
    }
}

fn assert_board_consistent(board: &Board) {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    assert!(x == o || x == o + 1, "bad counts x={x} o={o} on {board}");
    assert!(
        !(rules::has_won(board, Player::X) && rules::has_won(board, Player::O)),
        "both players won on {board}"
    );
}

#[test]
fn test_every_line_of_play_ends_in_draw_or_o_win() {
    let mut finished = Vec::new();
    explore(&Session::new(), &mut finished);

    assert!(!finished.is_empty());
    assert!(finished.contains(&OutcomeEvent::Draw));
    assert!(finished.contains(&OutcomeEvent::Win { winner: Player::O }));
}

#[test]
fn test_perfect_play_both_sides_is_a_draw() {
    // X asks the engine for its own move on the swapped board.
    let mut session = Session::new();
    loop {
        let index = choose_move(&session.board().swapped());
        let event = session.apply_human_move(index).unwrap();
        if event.is_terminal() {
            assert_eq!(event, OutcomeEvent::Draw);
            break;
        }
    }
}

proptest! {
    #[test]
    fn prop_random_x_never_wins(picks in proptest::collection::vec(0usize..9, 5)) {
        let mut session = Session::new();
        for pick in picks {
            let empties: Vec<usize> = session.board().empty_cells().collect();
            let index = empties[pick % empties.len()];
            let event = session.apply_human_move(index).unwrap();

            prop_assert_ne!(event, OutcomeEvent::Win { winner: Player::X });
            let outcome = evaluate_outcome(session.board());
            prop_assert_eq!(outcome, evaluate_outcome(session.board()));
            if let Some(reply) = session.last_computer_move() {
                prop_assert_eq!(
                    session.history().last().map(|m| m.index),
                    Some(reply)
                );
            }
            if event.is_terminal() {
                prop_assert!(session.is_over());
                break;
            }
        }
    }

    #[test]
    fn prop_choice_is_always_an_empty_cell(picks in proptest::collection::vec(0usize..9, 0..4)) {
        let mut session = Session::new();
        for pick in picks {
            let empties: Vec<usize> = session.board().empty_cells().collect();
            if session.apply_human_move(empties[pick % empties.len()]).unwrap().is_terminal() {
                return Ok(());
            }
        }
        let index = choose_move(session.board());
        prop_assert!(session.board().is_empty(index));
    }
}
