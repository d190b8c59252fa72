use std::collections::HashMap;

use crate::{Cell, GridAction, GridWorld};

const WALL_SYMBOL: char = '\u{25A0}';
const GOAL_SYMBOL: char = '\u{272A}';
const START_SYMBOL: char = '\u{229B}';
const OPEN_SYMBOL: char = '\u{25A1}';

/// Render the raw grid layout, one symbol per cell.
pub fn render_grid(grid: &GridWorld) -> String {
    let mut out = String::new();

    for row in 0..grid.height() {
        for column in 0..grid.width() {
            let symbol = match grid.cell(row, column) {
                Cell::Wall => WALL_SYMBOL,
                Cell::Goal => GOAL_SYMBOL,
                Cell::Start => START_SYMBOL,
                Cell::Open => OPEN_SYMBOL,
            };
            out.push(symbol);
            out.push_str("  ");
        }
        out.push('\n');
    }

    out
}

/// Render a solved policy as one arrow per open cell.
///
/// Walls render as blocks; open cells missing from `policy` render as `·`.
pub fn render_policy(grid: &GridWorld, policy: &HashMap<usize, GridAction>) -> String {
    let mut out = String::new();

    for row in 0..grid.height() {
        for column in 0..grid.width() {
            let symbol = if grid.cell(row, column) == Cell::Wall {
                WALL_SYMBOL
            } else {
                match policy.get(&grid.state_index(row, column)) {
                    Some(action) => action.symbol(),
                    None => '\u{00B7}',
                }
            };
            out.push(symbol);
            out.push_str("  ");
        }
        out.push('\n');
    }

    out
}
