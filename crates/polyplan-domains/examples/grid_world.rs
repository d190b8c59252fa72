use std::collections::HashMap;
use std::error::Error;

use polyplan_core::{DenseMdp, DenseSimulator, MinilpOracle, solve_dense, value_lp};
use polyplan_domains::{GridAction, GridWorld, render_grid, render_policy};

const GAMMA: f64 = 0.99;

fn main() -> Result<(), Box<dyn Error>> {
    let grid = GridWorld::from_rows([
        "OOWWOOOWOOOO",
        "OOWWOWOWOWOO",
        "OOWWOWOOOWOO",
        "OOOOOWWWWWOO",
        "OOWWOOOOOOOO",
        "OOOOOWWWWWGO",
    ])?;

    println!("Grid World Domain:");
    println!("{}", render_grid(&grid));

    println!("Setting up the grid world MDP...");
    let dense = DenseMdp::materialize(&grid);

    let program = value_lp(&dense, GAMMA);
    println!("{program}");
    println!();

    println!("Solving the grid world MDP...");
    let solved = solve_dense(&dense, GAMMA, &MinilpOracle)?;

    let policy: HashMap<usize, GridAction> = dense
        .states
        .iter()
        .copied()
        .zip(solved.policy.iter().map(|&j| dense.actions[j]))
        .collect();

    println!("Grid World Policy:");
    println!("{}", render_policy(&grid, &policy));

    let mut simulator = DenseSimulator::new(&dense, 7);
    let simulated = simulator.evaluate_policy(&solved.policy, GAMMA, 200, 600);
    println!("lp objective:     {:.4}", solved.objective_value);
    println!("simulated return: {simulated:.4}");

    Ok(())
}
