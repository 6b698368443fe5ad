use std::fmt;

use super::Action;

/// A named menu entry that produces a ready-made action when selected.
///
/// The name should not be one of the menu's own labels (`Done`,
/// `SerialAction`, `Delete Previous`, ...): the built-in entry wins and the
/// pre-fab cannot be reached. [`crate::parse_prefabs`] rejects such names.
pub struct PrefabAction {
    pub name: String,
    builder: Box<dyn Fn() -> Action>,
}

impl PrefabAction {
    pub fn new<F>(name: impl Into<String>, builder: F) -> Self
    where
        F: Fn() -> Action + 'static,
    {
        Self {
            name: name.into(),
            builder: Box::new(builder),
        }
    }

    /// A pre-fab that hands out a copy of `action` every time it is selected.
    pub fn canned(name: impl Into<String>, action: Action) -> Self {
        Self::new(name, move || action.clone())
    }

    pub fn build(&self) -> Action {
        (self.builder)()
    }
}

impl fmt::Debug for PrefabAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefabAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
