mod config;
pub mod model;
pub mod prompt;
mod service;

use std::{fs, path::Path};

use anyhow::{Context, ensure};
use config::Root;
use model::{Action, PrefabAction};

pub use service::{
    assembler::{build_action, is_reserved_label},
    distribution::{DistributionOptions, print_distribution, render_distribution},
    leaf,
};

/// Load the pre-fabricated actions declared in a YAML file, in file order.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<PrefabAction>> {
    parse_prefabs(&fs::read_to_string(path)?)
}

pub fn parse_prefabs(yaml: &str) -> anyhow::Result<Vec<PrefabAction>> {
    let config = serde_norway::from_str::<Root>(yaml)?;

    config
        .prefabs
        .into_iter()
        .map(|(name, action)| {
            ensure!(
                !is_reserved_label(&name),
                "Pre-fab `{name}` uses a reserved menu label"
            );
            let action: Action = action
                .try_into()
                .with_context(|| format!("Invalid pre-fab `{name}`"))?;
            Ok::<_, anyhow::Error>(PrefabAction::canned(name, action))
        })
        .collect()
}
