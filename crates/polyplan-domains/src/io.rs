use std::{fs, path::Path};

use crate::{DeliveryMap, DomainError, GridWorld};

/// Parse a grid world from YAML text (a list of row strings).
pub fn grid_from_yaml(yaml: &str) -> Result<GridWorld, DomainError> {
    let rows: Vec<String> = serde_yaml::from_str(yaml)?;
    GridWorld::from_rows(rows)
}

/// Load a grid world from a YAML file.
pub fn load_grid(path: impl AsRef<Path>) -> Result<GridWorld, DomainError> {
    let yaml = fs::read_to_string(path)?;
    grid_from_yaml(&yaml)
}

/// Parse and validate a delivery map from YAML text.
pub fn delivery_map_from_yaml(yaml: &str) -> Result<DeliveryMap, DomainError> {
    let map: DeliveryMap = serde_yaml::from_str(yaml)?;
    map.validate()?;
    Ok(map)
}

/// Load a delivery map from a YAML file.
pub fn load_delivery_map(path: impl AsRef<Path>) -> Result<DeliveryMap, DomainError> {
    let yaml = fs::read_to_string(path)?;
    delivery_map_from_yaml(&yaml)
}

/// Serialize and write a delivery map to YAML.
pub fn save_delivery_map(path: impl AsRef<Path>, map: &DeliveryMap) -> Result<(), DomainError> {
    let yaml = serde_yaml::to_string(map)?;
    fs::write(path, yaml)?;
    Ok(())
}
