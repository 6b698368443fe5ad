use std::{
    collections::HashMap,
    io::{Read, Write},
};

use anyhow::Context;
use colored::Colorize;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::model::StoreDump;

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[;H";
const MARKER: &str = "•";

/// The include switches filter what is counted: with `tasks: false` or
/// `lrps: false` those dots are left out, so a cell can render `Empty` while
/// still hosting work.
#[derive(Debug, Clone, Copy)]
pub struct DistributionOptions {
    /// Count tasks placed on each cell.
    pub tasks: bool,
    /// Count running and starting LRP instances on each cell.
    pub lrps: bool,
    /// Clear the terminal before printing.
    pub clear: bool,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            tasks: true,
            lrps: true,
            clear: false,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct CellUsage {
    tasks: usize,
    running: usize,
    starting: usize,
}

impl CellUsage {
    fn is_idle(&self) -> bool {
        self.tasks == 0 && self.running == 0 && self.starting == 0
    }
}

/// Decode a store dump from `reader` and write its distribution to `writer`.
pub fn print_distribution<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    options: DistributionOptions,
) -> anyhow::Result<()> {
    let dump: StoreDump =
        serde_json::from_reader(reader).context("Could not decode the store dump")?;
    writer.write_all(render_distribution(&dump, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// One line per cell, sorted by cell id: yellow dots for tasks, green for
/// running instances, gray for starting ones, or a red `Empty`.
pub fn render_distribution(dump: &StoreDump, options: DistributionOptions) -> String {
    let mut usage: HashMap<&str, CellUsage> = HashMap::new();

    if options.tasks {
        for task in dump.tasks.values().flatten() {
            usage.entry(task.cell_id.as_str()).or_default().tasks += 1;
        }
    }

    if options.lrps {
        let actuals = dump
            .lrps
            .values()
            .flat_map(|lrp| lrp.actual_lrps_by_index.values())
            .flat_map(IndexMap::values);
        for actual in actuals {
            let cell = usage.entry(actual.cell_id.as_str()).or_default();
            if actual.is_starting() {
                cell.starting += 1;
            } else {
                cell.running += 1;
            }
        }
    }

    let mut out = String::new();
    if options.clear {
        out.push_str(CLEAR_SCREEN);
    }
    out.push_str("Distribution\n");

    let cell_ids = dump
        .services
        .cells
        .iter()
        .map(|cell| cell.cell_id.as_str())
        .sorted()
        .collect_vec();
    debug!("Rendering distribution for {} cell(s)", cell_ids.len());

    for cell_id in cell_ids {
        let cell = usage.get(cell_id).copied().unwrap_or_default();
        let content = if cell.is_idle() {
            "Empty".red().to_string()
        } else {
            format!(
                "{}{}{}",
                MARKER.repeat(cell.tasks).yellow(),
                MARKER.repeat(cell.running).green(),
                MARKER.repeat(cell.starting).bright_black()
            )
        };
        out.push_str(&format!("{cell_id:>12}: {content}\n"));
    }

    out
}
