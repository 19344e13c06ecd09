// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::scenario::Scenario;

/// YAMLファイルの読み込み
pub fn load_yaml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    let value: T = from_reader(file)?;
    Ok(value)
}

/// シナリオの読み込み
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, Box<dyn Error>> {
    load_yaml(path)
}
