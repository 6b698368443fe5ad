//! Menu driven construction of an action tree.
//!
//! Every level shows the same menu: the grouping constructs, the primitive
//! actions, the registered pre-fabs and, once the level holds at least one
//! action, `Delete Previous`. Choosing a grouping construct opens a nested
//! level with its own children. A level only closes on `Done`.
//!
//! Nesting uses the call stack, so very deep trees are bounded by the thread's
//! stack size rather than by any explicit limit.

use anyhow::bail;
use itertools::Itertools;
use log::debug;

use crate::{
    model::{Action, PrefabAction},
    prompt::Prompter,
    service::leaf,
};

pub const DONE: &str = "Done";
pub const SERIAL_ACTION: &str = "SerialAction";
pub const PARALLEL_ACTION: &str = "ParallelAction";
pub const DOWNLOAD_ACTION: &str = "DownloadAction";
pub const RUN_ACTION: &str = "RunAction";
pub const UPLOAD_ACTION: &str = "UploadAction";
pub const DELETE_PREVIOUS: &str = "Delete Previous";

const BASE_CHOICES: [&str; 6] = [
    DONE,
    SERIAL_ACTION,
    PARALLEL_ACTION,
    DOWNLOAD_ACTION,
    RUN_ACTION,
    UPLOAD_ACTION,
];

/// Whether `name` is one of the menu's own labels. A pre-fab with such a name
/// is shadowed by the built-in entry.
pub fn is_reserved_label(name: &str) -> bool {
    name == DELETE_PREVIOUS || BASE_CHOICES.contains(&name)
}

/// Outcome of a single menu selection.
#[derive(Debug)]
enum Step {
    Done,
    /// May be [`Action::Empty`] when a nested level was closed without children.
    Add(Action),
    DeletePrevious,
}

#[derive(Debug, Clone, Copy)]
enum Grouping {
    Serial,
    Parallel,
}

impl Grouping {
    fn description(self) -> &'static str {
        match self {
            Grouping::Serial => "Build Series Action",
            Grouping::Parallel => "Build Parallel Action",
        }
    }

    fn wrap(self, actions: Vec<Action>) -> Action {
        match self {
            Grouping::Serial => Action::serial(actions),
            Grouping::Parallel => Action::parallel(actions),
        }
    }
}

struct Assembler<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
    prefabs: &'a [PrefabAction],
}

/// Ask the operator for an action.
///
/// The first menu never offers `Delete Previous`. Picking a primitive or a
/// pre-fab returns it as is, picking a grouping construct returns the whole
/// group and `Done` returns [`Action::Empty`].
pub fn build_action<P: Prompter + ?Sized>(
    prompter: &mut P,
    description: &str,
    prefabs: &[PrefabAction],
) -> anyhow::Result<Action> {
    let mut assembler = Assembler { prompter, prefabs };

    match assembler.next_step(description, false)? {
        Step::Add(action) => Ok(action),
        Step::Done | Step::DeletePrevious => Ok(Action::Empty),
    }
}

impl<P: Prompter + ?Sized> Assembler<'_, P> {
    fn menu(&self, allow_delete: bool) -> Vec<String> {
        let mut choices = BASE_CHOICES.into_iter().map(str::to_owned).collect_vec();
        choices.extend(self.prefabs.iter().map(|prefab| prefab.name.clone()));
        if allow_delete {
            choices.push(DELETE_PREVIOUS.to_owned());
        }
        choices
    }

    fn next_step(&mut self, description: &str, allow_delete: bool) -> anyhow::Result<Step> {
        let choices = self.menu(allow_delete);
        let choice = self.prompter.pick(description, &choices)?;
        debug!("`{description}`: selected `{choice}`");

        let action = match choice.as_str() {
            DONE => return Ok(Step::Done),
            DELETE_PREVIOUS if allow_delete => return Ok(Step::DeletePrevious),
            SERIAL_ACTION => self.build_group(Grouping::Serial)?,
            PARALLEL_ACTION => self.build_group(Grouping::Parallel)?,
            DOWNLOAD_ACTION => leaf::build_download_action(&mut *self.prompter)?,
            RUN_ACTION => leaf::build_run_action(&mut *self.prompter)?,
            UPLOAD_ACTION => leaf::build_upload_action(&mut *self.prompter)?,
            _ => {
                let Some(prefab) = self.prefabs.iter().find(|prefab| prefab.name == choice)
                else {
                    bail!("Unknown selection `{choice}` for `{description}`");
                };
                prefab.build()
            }
        };

        Ok(Step::Add(action))
    }

    fn build_group(&mut self, grouping: Grouping) -> anyhow::Result<Action> {
        let description = grouping.description();
        let mut actions = Vec::new();

        loop {
            match self.next_step(description, !actions.is_empty())? {
                Step::Done => break,
                Step::DeletePrevious => {
                    actions.pop();
                    debug!("`{description}`: {} action(s) left", actions.len());
                }
                Step::Add(Action::Empty) => {
                    debug!("`{description}`: nothing to add");
                }
                Step::Add(action) => actions.push(action),
            }
        }

        Ok(grouping.wrap(actions))
    }
}
