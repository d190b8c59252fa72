use std::error::Error;

use polyplan_core::{Mdp, MinilpOracle, SolverOracle, check_probabilities, solve};
use polyplan_domains::{DeliveryMdp, delivery_map_from_yaml};

const MAP_YAML: &str = r#"
locations: [DEPOT, MIDTOWN, HARBOR]
paths:
  DEPOT:
    MIDTOWN: { cost: 4.0 }
  MIDTOWN:
    DEPOT: { cost: 4.0 }
    HARBOR: { cost: 7.0 }
  HARBOR:
    MIDTOWN: { cost: 7.0 }
"#;

const GAMMA: f64 = 0.95;

fn main() -> Result<(), Box<dyn Error>> {
    let map = delivery_map_from_yaml(MAP_YAML)?;
    let mdp = DeliveryMdp::new(map, "DEPOT", "HARBOR")?;

    let violations = check_probabilities(&mdp);
    println!("probability audit: {} violations", violations.len());
    println!();

    println!("Solving the delivery MDP with {}...", MinilpOracle.name());
    let solution = solve(&mdp, GAMMA)?;
    println!("objective value: {:.2}", solution.objective_value);
    println!();

    for state in mdp.states() {
        let value = solution.values[&state];
        let action = &solution.policy[&state];
        let marker = if mdp.is_goal(&state) { "  <- goal" } else { "" };
        println!(
            "{:<24} value {value:>10.2}  ->  {action}{marker}",
            state.to_string()
        );
    }

    Ok(())
}
