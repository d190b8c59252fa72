use std::collections::{HashMap, HashSet};
use std::fmt;

use polyplan_core::Mdp;
use serde::{Deserialize, Serialize};

use crate::DomainError;

const PICKUP_COST: f64 = -10.0;
const DROPOFF_REWARD: f64 = 1000.0;
const INVALID_MOVE_PENALTY: f64 = -1000.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
/// A directed travel edge between two locations.
pub struct PathEdge {
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable road map for the delivery domain.
///
/// `locations` fixes the enumeration order of states and `Goto` actions;
/// `paths` lists the directed edges a courier can travel, keyed by origin.
pub struct DeliveryMap {
    pub locations: Vec<String>,
    #[serde(default)]
    pub paths: HashMap<String, HashMap<String, PathEdge>>,
}

impl DeliveryMap {
    /// Check location uniqueness and that every path endpoint is declared.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(self.locations.len());
        for location in &self.locations {
            if !seen.insert(location) {
                return Err(DomainError::DuplicateLocation {
                    location: location.clone(),
                });
            }
        }

        for (from, edges) in &self.paths {
            if !seen.contains(from) {
                return Err(DomainError::UnknownLocation {
                    location: from.clone(),
                });
            }
            for to in edges.keys() {
                if !seen.contains(to) {
                    return Err(DomainError::UnknownPathEndpoint {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Courier state: where the courier is and whether it carries the package.
pub struct DeliveryState {
    pub location: String,
    pub has_package: bool,
}

impl fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_package {
            write!(f, "{} (carrying)", self.location)
        } else {
            write!(f, "{} (empty-handed)", self.location)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Courier actions: travel towards a location, or handle the package.
pub enum DeliveryAction {
    Goto(String),
    Pickup,
    Dropoff,
}

impl fmt::Display for DeliveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryAction::Goto(location) => write!(f, "goto {location}"),
            DeliveryAction::Pickup => write!(f, "pickup"),
            DeliveryAction::Dropoff => write!(f, "dropoff"),
        }
    }
}

#[derive(Debug, Clone)]
/// Package-delivery domain over a validated road map.
///
/// Transitions are deterministic. Picking up works only at the pickup
/// location; dropping off anywhere else loses the package. A successful
/// dropoff state is absorbing and keeps paying the dropoff reward, so the
/// optimal policy routes the courier there and parks it.
pub struct DeliveryMdp {
    map: DeliveryMap,
    pickup_location: String,
    dropoff_location: String,
}

impl DeliveryMdp {
    /// Build the domain, validating the map and both special locations.
    pub fn new(
        map: DeliveryMap,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
    ) -> Result<Self, DomainError> {
        map.validate()?;

        let pickup_location = pickup_location.into();
        let dropoff_location = dropoff_location.into();
        for location in [&pickup_location, &dropoff_location] {
            if !map.locations.contains(location) {
                return Err(DomainError::UnknownLocation {
                    location: location.clone(),
                });
            }
        }

        Ok(Self {
            map,
            pickup_location,
            dropoff_location,
        })
    }

    pub fn map(&self) -> &DeliveryMap {
        &self.map
    }

    /// Whether the package has been carried to the dropoff location.
    pub fn is_goal(&self, state: &DeliveryState) -> bool {
        state.location == self.dropoff_location && state.has_package
    }

    /// The unique successor of `(state, action)`.
    fn successor(&self, state: &DeliveryState, action: &DeliveryAction) -> DeliveryState {
        match action {
            DeliveryAction::Pickup => {
                if state.location == self.pickup_location {
                    DeliveryState {
                        location: state.location.clone(),
                        has_package: true,
                    }
                } else {
                    state.clone()
                }
            }
            DeliveryAction::Dropoff => {
                if state.location == self.dropoff_location {
                    state.clone()
                } else {
                    // Dropping the package anywhere else loses it.
                    DeliveryState {
                        location: state.location.clone(),
                        has_package: false,
                    }
                }
            }
            DeliveryAction::Goto(destination) => {
                let reachable = self
                    .map
                    .paths
                    .get(&state.location)
                    .is_some_and(|edges| edges.contains_key(destination));

                if *destination != state.location && reachable {
                    DeliveryState {
                        location: destination.clone(),
                        has_package: state.has_package,
                    }
                } else {
                    state.clone()
                }
            }
        }
    }
}

impl Mdp for DeliveryMdp {
    type State = DeliveryState;
    type Action = DeliveryAction;

    fn states(&self) -> Vec<DeliveryState> {
        self.map
            .locations
            .iter()
            .flat_map(|location| {
                [true, false].map(|has_package| DeliveryState {
                    location: location.clone(),
                    has_package,
                })
            })
            .collect()
    }

    fn actions(&self) -> Vec<DeliveryAction> {
        self.map
            .locations
            .iter()
            .cloned()
            .map(DeliveryAction::Goto)
            .chain([DeliveryAction::Pickup, DeliveryAction::Dropoff])
            .collect()
    }

    fn transition_probability(
        &self,
        state: &DeliveryState,
        action: &DeliveryAction,
        successor: &DeliveryState,
    ) -> f64 {
        if self.successor(state, action) == *successor {
            1.0
        } else {
            0.0
        }
    }

    fn reward(&self, state: &DeliveryState, action: &DeliveryAction) -> f64 {
        match action {
            DeliveryAction::Pickup => PICKUP_COST,
            DeliveryAction::Dropoff => {
                if state.location == self.dropoff_location && state.has_package {
                    DROPOFF_REWARD
                } else {
                    PICKUP_COST
                }
            }
            DeliveryAction::Goto(destination) => {
                match self
                    .map
                    .paths
                    .get(&state.location)
                    .and_then(|edges| edges.get(destination))
                {
                    Some(edge) => -edge.cost,
                    None => INVALID_MOVE_PENALTY,
                }
            }
        }
    }

    fn start_probability(&self, _state: &DeliveryState) -> f64 {
        1.0 / (2 * self.map.locations.len()) as f64
    }
}
