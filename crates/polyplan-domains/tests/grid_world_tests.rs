use std::collections::HashMap;

use polyplan_core::{Mdp, check_probabilities, solve};
use polyplan_domains::{
    Cell, DomainError, GridAction, GridWorld, SLIP_PROBABILITY, render_grid, render_policy,
};

fn open_three_by_three() -> GridWorld {
    GridWorld::from_rows(["OOO", "OOO", "OOO"]).expect("grid should parse")
}

#[test]
fn actions_enumerate_in_the_tie_break_order() {
    let grid = open_three_by_three();

    assert_eq!(
        grid.actions(),
        vec![
            GridAction::Stay,
            GridAction::North,
            GridAction::East,
            GridAction::South,
            GridAction::West,
        ]
    );
}

#[test]
fn transition_rows_sum_to_one_on_a_walled_grid() {
    let grid = GridWorld::from_rows([
        "OOWWOOOWOOOO",
        "OOWWOWOWOWOO",
        "OOWWOWOOOWOO",
        "OOOOOWWWWWOO",
        "OOWWOOOOOOOO",
        "OOOOOWWWWWGO",
    ])
    .expect("grid should parse");

    assert!(check_probabilities(&grid).is_empty());
}

#[test]
fn wall_states_absorb() {
    let grid = GridWorld::from_rows(["OW", "OO"]).expect("grid should parse");
    let wall = grid.state_index(0, 1);

    for action in GridAction::ALL {
        assert_eq!(grid.transition_probability(&wall, &action, &wall), 1.0);
        for state in grid.states() {
            if state != wall {
                assert_eq!(grid.transition_probability(&wall, &action, &state), 0.0);
            }
        }
    }
}

#[test]
fn slip_mass_splits_across_open_neighbors() {
    let grid = open_three_by_three();
    let center = grid.state_index(1, 1);

    let north = grid.state_index(0, 1);
    let east = grid.state_index(1, 2);
    let west = grid.state_index(1, 0);

    assert_eq!(
        grid.transition_probability(&center, &GridAction::North, &north),
        1.0 - SLIP_PROBABILITY
    );
    assert_eq!(
        grid.transition_probability(&center, &GridAction::North, &east),
        SLIP_PROBABILITY / 2.0
    );
    assert_eq!(
        grid.transition_probability(&center, &GridAction::North, &west),
        SLIP_PROBABILITY / 2.0
    );
    assert_eq!(
        grid.transition_probability(&center, &GridAction::North, &center),
        0.0
    );
}

#[test]
fn boundary_moves_bounce_in_place() {
    let grid = open_three_by_three();
    let top_middle = grid.state_index(0, 1);

    // Moving into the edge keeps the agent in place; the slip mass still
    // goes to the open cells beside it.
    assert_eq!(
        grid.transition_probability(&top_middle, &GridAction::North, &top_middle),
        1.0 - SLIP_PROBABILITY
    );
    let left = grid.state_index(0, 0);
    let right = grid.state_index(0, 2);
    assert_eq!(
        grid.transition_probability(&top_middle, &GridAction::North, &left),
        SLIP_PROBABILITY / 2.0
    );
    assert_eq!(
        grid.transition_probability(&top_middle, &GridAction::North, &right),
        SLIP_PROBABILITY / 2.0
    );
}

#[test]
fn moves_without_slip_room_are_deterministic() {
    // One row: East/West have no perpendicular neighbors at all.
    let grid = GridWorld::from_rows(["OOOG"]).expect("grid should parse");

    let first = grid.state_index(0, 0);
    let second = grid.state_index(0, 1);
    assert_eq!(grid.transition_probability(&first, &GridAction::East, &second), 1.0);
    assert_eq!(grid.transition_probability(&first, &GridAction::East, &first), 0.0);
}

#[test]
fn staying_is_deterministic() {
    let grid = open_three_by_three();
    let center = grid.state_index(1, 1);

    assert_eq!(grid.transition_probability(&center, &GridAction::Stay, &center), 1.0);
}

#[test]
fn only_staying_on_the_goal_pays() {
    let grid = GridWorld::from_rows(["OG"]).expect("grid should parse");
    let open = grid.state_index(0, 0);
    let goal = grid.state_index(0, 1);

    assert_eq!(grid.reward(&goal, &GridAction::Stay), 1.0);
    assert_eq!(grid.reward(&goal, &GridAction::North), 0.0);
    assert_eq!(grid.reward(&open, &GridAction::Stay), 0.0);
}

#[test]
fn start_mass_is_uniform_over_open_cells() {
    let grid = GridWorld::from_rows(["OW", "OO"]).expect("grid should parse");

    let wall = grid.state_index(0, 1);
    for state in grid.states() {
        let expected = if state == wall { 0.0 } else { 1.0 / 3.0 };
        assert_eq!(grid.start_probability(&state), expected);
    }
}

#[test]
fn malformed_grids_are_rejected() {
    let err = GridWorld::from_rows(["OO", "O"]).expect_err("ragged grid should fail");
    assert!(matches!(
        err,
        DomainError::RaggedGrid {
            row: 1,
            expected: 2,
            found: 1,
        }
    ));

    let err = GridWorld::from_rows(["OXO"]).expect_err("unknown symbol should fail");
    assert!(matches!(
        err,
        DomainError::UnknownCellSymbol {
            row: 0,
            column: 1,
            symbol: 'X',
        }
    ));

    let rows: [&str; 0] = [];
    let err = GridWorld::from_rows(rows).expect_err("empty grid should fail");
    assert!(matches!(err, DomainError::EmptyGrid));
}

#[test]
fn solved_corridor_walks_to_the_goal() {
    let grid = GridWorld::from_rows(["OOOG"]).expect("grid should parse");

    let solution = solve(&grid, 0.9).expect("solve should succeed");

    for column in 0..3 {
        let state = grid.state_index(0, column);
        assert_eq!(solution.policy[&state], GridAction::East);
    }
    let goal = grid.state_index(0, 3);
    assert_eq!(solution.policy[&goal], GridAction::Stay);

    // Values rise towards the goal, which collects 1 forever.
    assert!((solution.values[&goal] - 10.0).abs() < 1e-6);
    for column in 0..3 {
        let here = grid.state_index(0, column);
        let there = grid.state_index(0, column + 1);
        assert!(solution.values[&here] < solution.values[&there]);
    }
}

#[test]
fn renderers_draw_cells_and_arrows() {
    let grid = GridWorld::from_rows(["SWOG"]).expect("grid should parse");

    let layout = render_grid(&grid);
    assert!(layout.contains('\u{229B}')); // start
    assert!(layout.contains('\u{25A0}')); // wall
    assert!(layout.contains('\u{25A1}')); // open
    assert!(layout.contains('\u{272A}')); // goal

    let mut policy = HashMap::new();
    policy.insert(grid.state_index(0, 2), GridAction::East);
    policy.insert(grid.state_index(0, 3), GridAction::Stay);
    let rendered = render_policy(&grid, &policy);
    assert!(rendered.contains('\u{2192}')); // east arrow
    assert!(rendered.contains('\u{2205}')); // stay
    assert!(rendered.contains('\u{25A0}')); // wall stays a wall
}
