use indexmap::IndexMap;
use serde::Serialize;

#[derive(PartialEq, Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Nothing was selected. Never stored inside a serial or parallel action.
    #[default]
    Empty,
    Serial(SerialAction),
    Parallel(ParallelAction),
    Download(DownloadAction),
    Run(RunAction),
    Upload(UploadAction),
    Extension(ExtensionAction),
}

/// Children run one after the other, in order.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct SerialAction {
    pub actions: Vec<Action>,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ParallelAction {
    pub actions: Vec<Action>,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct DownloadAction {
    pub from: String,
    /// Destination inside the container.
    pub to: String,
    pub cache_key: String,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct RunAction {
    pub path: String,
    pub args: Vec<String>,
    pub env: Vec<EnvironmentVariable>,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct UploadAction {
    /// Source inside the container.
    pub from: String,
    pub to: String,
}

/// An action kind the builder does not interpret, produced by pre-fabs.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ExtensionAction {
    pub kind: String,
    pub params: IndexMap<String, String>,
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

impl Action {
    /// Wrap `actions` in a serial action, or [`Action::Empty`] when there is nothing to wrap.
    #[must_use]
    pub fn serial(actions: Vec<Action>) -> Self {
        if actions.is_empty() {
            Action::Empty
        } else {
            Action::Serial(SerialAction { actions })
        }
    }

    /// Wrap `actions` in a parallel action, or [`Action::Empty`] when there is nothing to wrap.
    #[must_use]
    pub fn parallel(actions: Vec<Action>) -> Self {
        if actions.is_empty() {
            Action::Empty
        } else {
            Action::Parallel(ParallelAction { actions })
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Action::Empty)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    fn upload() -> Action {
        Action::Upload(UploadAction {
            from: "/tmp/out".into(),
            to: "http://example.com/out".into(),
        })
    }

    #[test]
    fn test_empty_groupings_collapse() {
        assert_eq!(Action::Empty, Action::serial(vec![]));
        assert_eq!(Action::Empty, Action::parallel(vec![]));
        assert!(Action::default().is_empty());
    }

    #[test]
    fn test_groupings_keep_order() {
        let action = Action::serial(vec![upload(), Action::parallel(vec![upload()])]);
        assert_matches!(&action, Action::Serial(serial) if serial.actions.len() == 2);
        let Action::Serial(serial) = action else {
            unreachable!()
        };
        assert_eq!(upload(), serial.actions[0]);
        assert_matches!(serial.actions[1], Action::Parallel(_));
    }

    #[test]
    fn test_serialized_shape() {
        let action = Action::serial(vec![Action::Run(RunAction {
            path: "./start".into(),
            args: vec!["--flag".into()],
            env: vec![EnvironmentVariable {
                name: "FOO".into(),
                value: "BAR".into(),
            }],
        })]);
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            serde_json::json!({
                "serial": {
                    "actions": [
                        {
                            "run": {
                                "path": "./start",
                                "args": ["--flag"],
                                "env": [{ "name": "FOO", "value": "BAR" }]
                            }
                        }
                    ]
                }
            }),
            json
        );
        assert_eq!(serde_json::json!("empty"), serde_json::to_value(&Action::Empty).unwrap());
    }
}
