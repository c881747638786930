//! Property tests for the field and figure rules
//!
//! Generated grids and figures check that:
//! - collision is exactly "some filled cell sits on a locked cell"
//! - merge only ever adds locked cells, and adds every filled cell
//! - line removal keeps the dimensions and leaves no full row behind
//! - four quarter turns are the identity
//! - a figure at x = 0 can never move left
//! - guarded moves never leave the field or overlap locked cells
//! - the session driver keeps its figure in bounds over random play

use proptest::prelude::*;

use bricks::core::{catalog, Field, Figure, Shape};
use bricks::engine::{Session, SessionConfig};
use bricks::types::{Intent, PieceKind};

fn bits(width: usize, height: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..=1, width), height)
}

fn field_strategy() -> impl Strategy<Value = Field> {
    (1usize..=8, 1usize..=8).prop_flat_map(|(w, h)| {
        bits(w, h).prop_map(|rows| Field::from_bits(rows.as_slice()).unwrap())
    })
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// A field plus a catalog figure whose bounding box lies inside it
fn placed_strategy() -> impl Strategy<Value = (Field, Figure)> {
    (kind_strategy(), 0u32..4, 4usize..=10, 4usize..=10).prop_flat_map(
        |(kind, turns, w, h)| {
            let mut figure = Figure::new(catalog::shape(kind));
            figure.rotate_times(turns);
            let max_x = w - figure.width();
            let max_y = h - figure.height();
            (bits(w, h), 0..=max_x, 0..=max_y).prop_map(move |(rows, x, y)| {
                let mut placed = figure.clone();
                placed.x = x;
                placed.y = y;
                (Field::from_bits(rows.as_slice()).unwrap(), placed)
            })
        },
    )
}

fn intent_strategy() -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(
        prop::sample::select(vec![
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::HardDrop,
            Intent::Rotate,
        ]),
        0..4,
    )
}

/// Copy of `field` with every cell under the figure emptied
fn clear_under(field: &Field, figure: &Figure) -> Field {
    let mut rows = field.to_bits();
    for (i, j) in figure.filled_cells() {
        rows[figure.y + i][figure.x + j] = 0;
    }
    Field::from_bits(rows.as_slice()).unwrap()
}

fn overlaps_locked(field: &Field, figure: &Figure) -> bool {
    figure
        .filled_cells()
        .any(|(i, j)| field.is_locked(figure.x + j, figure.y + i))
}

proptest! {
    #[test]
    fn collision_matches_overlap((field, figure) in placed_strategy()) {
        prop_assert_eq!(
            field.check_collision(&figure).unwrap(),
            overlaps_locked(&field, &figure)
        );
    }

    #[test]
    fn empty_field_never_collides((field, figure) in placed_strategy()) {
        let empty = Field::new(field.width(), field.height());
        prop_assert!(!empty.check_collision(&figure).unwrap());
    }

    #[test]
    fn merge_is_monotonic((field, figure) in placed_strategy()) {
        let mut merged = field.clone();
        merged.merge(&figure).unwrap();

        for y in 0..field.height() {
            for x in 0..field.width() {
                let in_figure = x >= figure.x
                    && y >= figure.y
                    && figure.shape().is_filled(y - figure.y, x - figure.x);
                let expected = field.is_locked(x, y) || in_figure;
                prop_assert_eq!(merged.is_locked(x, y), expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn remove_full_lines_leaves_no_full_row(mut field in field_strategy()) {
        let (width, height) = (field.width(), field.height());
        let full = field.full_lines().len();
        let locked_before = field.to_bits().iter().flatten().filter(|&&b| b == 1).count();

        prop_assert_eq!(field.remove_full_lines(), full);
        prop_assert_eq!((field.width(), field.height()), (width, height));
        prop_assert!(field.full_lines().is_empty());

        let locked_after = field.to_bits().iter().flatten().filter(|&&b| b == 1).count();
        prop_assert_eq!(locked_after, locked_before - full * width);
    }

    #[test]
    fn reset_empties_any_field(mut field in field_strategy()) {
        let (width, height) = (field.width(), field.height());
        field.reset();
        prop_assert_eq!(field, Field::new(width, height));
    }

    #[test]
    fn four_turns_are_identity(
        rows in (1usize..=5, 1usize..=5).prop_flat_map(|(w, h)| bits(w, h)),
    ) {
        let shape = Shape::from_bits(rows.as_slice()).unwrap();
        let turned = shape.rotated().rotated().rotated().rotated();
        prop_assert_eq!(turned, shape);
    }

    #[test]
    fn left_edge_blocks_left_move(
        field in field_strategy(),
        kind in kind_strategy(),
        y in 0usize..8,
    ) {
        let figure = Figure::at(catalog::shape(kind), 0, y);
        prop_assert!(!figure.is_allowed_to_move_left(&field));
    }

    #[test]
    fn guarded_moves_stay_legal(
        (field, figure) in placed_strategy(),
        intents in prop::collection::vec(intent_strategy(), 1..20),
    ) {
        let field = clear_under(&field, &figure);
        prop_assert!(!overlaps_locked(&field, &figure));
        let mut figure = figure;
        for step in intents {
            for intent in step {
                match intent {
                    Intent::MoveLeft => { figure.move_left_if_allowed(&field); }
                    Intent::MoveRight => { figure.move_right_if_allowed(&field); }
                    Intent::SoftDrop => { figure.move_down_if_allowed(&field); }
                    Intent::HardDrop => { figure.drop_to_floor(&field); }
                    Intent::Rotate => { figure.rotate_if_allowed(&field); }
                }
                prop_assert_eq!(field.check_collision(&figure), Ok(false));
            }
        }
    }

    #[test]
    fn session_keeps_figure_in_bounds(
        seed in any::<u32>(),
        steps in prop::collection::vec(intent_strategy(), 1..120),
    ) {
        let mut session = Session::new(SessionConfig::default().with_seed(seed)).unwrap();
        for intents in steps {
            let outcome = session.step(&intents).unwrap();
            prop_assert!(session.best_score() >= session.score());
            if outcome.game_over {
                prop_assert_eq!(session.score(), 0);
            }
            prop_assert!(session.field().full_lines().is_empty());
            prop_assert!(session.field().check_collision(session.current()).is_ok());
        }
    }
}
