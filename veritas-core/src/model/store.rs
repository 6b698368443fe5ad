//! Snapshot of the cluster store, as dumped to JSON.
//!
//! Dumps write empty collections as `null`, so every collection here decodes
//! `null` the same as a missing key.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

pub const ACTUAL_LRP_STATE_STARTING: &str = "STARTING";

#[derive(Deserialize, Debug, Default)]
pub struct StoreDump {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Services,
    /// Tasks grouped by domain.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: IndexMap<String, Vec<Task>>,
    /// Long-running processes by process guid.
    #[serde(default, deserialize_with = "null_as_default")]
    pub lrps: IndexMap<String, Lrp>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Services {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cells: Vec<CellPresence>,
}

#[derive(Deserialize, Debug)]
pub struct CellPresence {
    #[serde(default)]
    pub cell_id: String,
}

#[derive(Deserialize, Debug)]
pub struct Task {
    #[serde(default)]
    pub cell_id: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct Lrp {
    /// Instance index, then instance guid.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actual_lrps_by_index: IndexMap<String, IndexMap<String, ActualLrp>>,
}

#[derive(Deserialize, Debug)]
pub struct ActualLrp {
    #[serde(default)]
    pub cell_id: String,
    #[serde(default)]
    pub state: String,
}

impl ActualLrp {
    pub fn is_starting(&self) -> bool {
        self.state == ACTUAL_LRP_STATE_STARTING
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
