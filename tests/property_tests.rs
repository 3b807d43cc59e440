//! Property tests for the selection state machine.
//!
//! Random click sequences are driven through the controller and the
//! transition table is checked after every click.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rust_chessboard::controller::{InteractionController, UiEvent};
use rust_chessboard::core::{PieceKind, Square};
use rust_chessboard::games::standard::StandardChess;
use rust_chessboard::rules::RulesEngine;
use rust_chessboard::ui::HighlightState;

/// One scripted input: a raw square, or (when `aim` is set) the
/// `pick`-th candidate destination of the current selection.
#[derive(Clone, Copy, Debug)]
struct Click {
    square: u8,
    aim: bool,
    pick: u8,
}

fn arb_click() -> impl Strategy<Value = Click> {
    (0u8..64, any::<bool>(), any::<u8>()).prop_map(|(square, aim, pick)| Click {
        square,
        aim,
        pick,
    })
}

fn resolve(controller: &InteractionController<StandardChess>, click: Click) -> Square {
    let destinations = controller.selection().destinations();
    if click.aim && !destinations.is_empty() {
        destinations[click.pick as usize % destinations.len()]
    } else {
        Square::from_index(click.square).unwrap()
    }
}

fn run(clicks: &[Click]) -> (Vec<UiEvent>, String) {
    let mut controller = InteractionController::new(StandardChess::new());
    let mut events = Vec::new();
    for &click in clicks {
        let square = resolve(&controller, click);
        events.extend(controller.handle_click(square));
    }
    (events, controller.engine().to_fen())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    /// Every transition matches the table.
    #[test]
    fn prop_transition_table(clicks in prop::collection::vec(arb_click(), 1..120)) {
        let mut controller = InteractionController::new(StandardChess::new());
        let mut highlights = HighlightState::new();

        for click in clicks {
            let square = resolve(&controller, click);
            let was_idle = controller.selection().is_idle();
            let friendly = controller.engine().is_friendly(square);
            let commit = controller.selection().move_to(square);
            let mover = controller.engine().side_to_move();

            let events = controller.handle_click(square);
            highlights.apply_all(&events);

            if was_idle && !friendly {
                prop_assert!(events.is_empty());
                prop_assert!(controller.selection().is_idle());
            } else if let Some(mv) = commit {
                prop_assert_eq!(&events[0], &UiEvent::MoveApplied { mv });
                prop_assert!(controller.selection().is_idle());
                prop_assert_eq!(controller.engine().side_to_move(), mover.opposite());
                prop_assert_eq!(events.len() == 2, controller.engine().is_game_over());
                if mv.is_promotion() {
                    prop_assert_eq!(mv.promotion, Some(PieceKind::Queen));
                }
            } else if friendly {
                prop_assert_eq!(controller.selection().origin(), Some(square));
                let legal = controller.engine().legal_moves_from(square);
                prop_assert_eq!(
                    controller.selection().candidates(),
                    legal.as_slice()
                );
                prop_assert_eq!(events.len(), 1);
            } else {
                prop_assert_eq!(&events, &vec![UiEvent::cleared()]);
                prop_assert!(controller.selection().is_idle());
                prop_assert_eq!(controller.engine().side_to_move(), mover);
            }

            prop_assert_eq!(highlights.origin, controller.selection().origin());
            prop_assert_eq!(&highlights.destinations, &controller.selection().destinations());
        }
    }

    /// Replaying a click sequence gives the same events and position.
    #[test]
    fn prop_deterministic_replay(clicks in prop::collection::vec(arb_click(), 1..80)) {
        prop_assert_eq!(run(&clicks), run(&clicks));
    }

    /// Random playouts through clicks agree with applying moves directly.
    #[test]
    fn prop_click_playout_matches_engine(seed in any::<u64>(), plies in 1usize..60) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut controller = InteractionController::new(StandardChess::new());
        let mut shadow = StandardChess::new();

        for _ in 0..plies {
            if shadow.is_game_over() {
                break;
            }
            let legal: Vec<_> = shadow
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.promotion.is_none() || mv.promotion == Some(PieceKind::Queen))
                .collect();
            let Some(&mv) = legal.choose(&mut rng) else {
                break;
            };

            controller.handle_click(mv.from);
            let events = controller.handle_click(mv.to);
            shadow.apply_move(mv).unwrap();

            prop_assert_eq!(&events[0], &UiEvent::MoveApplied { mv });
            prop_assert_eq!(controller.engine().to_fen(), shadow.to_fen());
            prop_assert_eq!(controller.engine().result(), shadow.result());
        }
    }
}
