mod delivery;
mod display;
mod error;
mod grid_world;
mod io;

pub use delivery::{DeliveryAction, DeliveryMap, DeliveryMdp, DeliveryState, PathEdge};
pub use display::{render_grid, render_policy};
pub use error::DomainError;
pub use grid_world::{Cell, GridAction, GridWorld, SLIP_PROBABILITY};
pub use io::{
    delivery_map_from_yaml, grid_from_yaml, load_delivery_map, load_grid, save_delivery_map,
};
