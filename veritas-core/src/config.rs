use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Root {
    #[serde(default)]
    pub prefabs: IndexMap<String, Action>,
}

/// A single-key map naming the kind of action.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Action {
    pub serial: Option<Vec<Action>>,
    pub parallel: Option<Vec<Action>>,
    pub download: Option<Download>,
    pub run: Option<Run>,
    pub upload: Option<Upload>,
    pub extension: Option<Extension>,
}

#[derive(Deserialize, Debug)]
pub struct Download {
    pub from: String,
    pub to: Option<String>,
    #[serde(default)]
    pub cache_key: String,
}

#[derive(Deserialize, Debug)]
pub struct Run {
    pub path: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Same `FOO=BAR;BAZ=WIBBLE` format as the interactive prompt.
    #[serde(default)]
    pub env: String,
}

#[derive(Deserialize, Debug)]
pub struct Upload {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize, Debug)]
pub struct Extension {
    pub kind: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
}
