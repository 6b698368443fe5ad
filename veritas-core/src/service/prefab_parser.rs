use anyhow::{bail, ensure};

use crate::{
    config,
    model::action::{Action, DownloadAction, ExtensionAction, RunAction, UploadAction},
    service::leaf::{parse_env_list, validate_command},
};

const ACTION_KINDS: &str = "serial, parallel, download, run, upload or extension";

impl TryFrom<config::Action> for Action {
    type Error = anyhow::Error;

    fn try_from(value: config::Action) -> Result<Self, Self::Error> {
        let kinds = [
            value.serial.is_some(),
            value.parallel.is_some(),
            value.download.is_some(),
            value.run.is_some(),
            value.upload.is_some(),
            value.extension.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        ensure!(
            kinds == 1,
            "An action should be exactly one of {ACTION_KINDS}, found {kinds}"
        );

        let action = if let Some(actions) = value.serial {
            ensure!(!actions.is_empty(), "A serial action needs at least one action");
            Action::serial(convert_all(actions)?)
        } else if let Some(actions) = value.parallel {
            ensure!(!actions.is_empty(), "A parallel action needs at least one action");
            Action::parallel(convert_all(actions)?)
        } else if let Some(download) = value.download {
            Action::Download(download.try_into()?)
        } else if let Some(run) = value.run {
            Action::Run(run.try_into()?)
        } else if let Some(upload) = value.upload {
            Action::Upload(upload.try_into()?)
        } else if let Some(extension) = value.extension {
            Action::Extension(extension.try_into()?)
        } else {
            bail!("An action should be one of {ACTION_KINDS}")
        };

        Ok(action)
    }
}

fn convert_all(actions: Vec<config::Action>) -> anyhow::Result<Vec<Action>> {
    actions
        .into_iter()
        .map(TryInto::try_into)
        .collect::<anyhow::Result<Vec<_>>>()
}

impl TryFrom<config::Download> for DownloadAction {
    type Error = anyhow::Error;

    fn try_from(value: config::Download) -> Result<Self, Self::Error> {
        ensure!(!value.from.is_empty(), "A download needs a URL to download from");
        Ok(Self {
            from: value.from,
            to: value
                .to
                .filter(|to| !to.is_empty())
                .unwrap_or_else(|| ".".to_owned()),
            cache_key: value.cache_key,
        })
    }
}

impl TryFrom<config::Run> for RunAction {
    type Error = anyhow::Error;

    fn try_from(value: config::Run) -> Result<Self, Self::Error> {
        ensure!(!value.path.is_empty(), "A run action needs a command");
        validate_command(&value.path)?;
        Ok(Self {
            path: value.path,
            args: value.args,
            env: parse_env_list(&value.env),
        })
    }
}

impl TryFrom<config::Upload> for UploadAction {
    type Error = anyhow::Error;

    fn try_from(value: config::Upload) -> Result<Self, Self::Error> {
        ensure!(
            !value.from.is_empty() && !value.to.is_empty(),
            "An upload needs both a container source and a URL"
        );
        Ok(Self {
            from: value.from,
            to: value.to,
        })
    }
}

impl TryFrom<config::Extension> for ExtensionAction {
    type Error = anyhow::Error;

    fn try_from(value: config::Extension) -> Result<Self, Self::Error> {
        ensure!(!value.kind.is_empty(), "An extension action needs a kind");
        Ok(Self {
            kind: value.kind,
            params: value.params,
        })
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use crate::model::action::EnvironmentVariable;

    use super::*;

    fn parse(yaml: &str) -> anyhow::Result<Action> {
        serde_norway::from_str::<config::Action>(yaml)?.try_into()
    }

    #[test]
    fn test_download_defaults() {
        assert_eq!(
            Action::Download(DownloadAction {
                from: "http://x/a.tgz".into(),
                to: ".".into(),
                cache_key: String::new(),
            }),
            parse("download: { from: 'http://x/a.tgz' }").unwrap()
        );
    }

    #[test]
    fn test_nested_tree() {
        let action = parse(
            r#"
serial:
  - download: { from: "http://x/bp.tgz", to: /tmp/bp, cache_key: bp }
  - parallel:
      - run: { path: /tmp/bp/bin/detect, args: ["/app"], env: "FOO=BAR;BROKEN" }
      - upload: { from: /tmp/out, to: "http://x/out" }
"#,
        )
        .unwrap();

        let Action::Serial(serial) = action else {
            panic!("Expected a serial action");
        };
        assert_eq!(2, serial.actions.len());
        assert_matches!(&serial.actions[0], Action::Download(download) if download.cache_key == "bp");
        let Action::Parallel(parallel) = &serial.actions[1] else {
            panic!("Expected a parallel action");
        };
        assert_eq!(
            Action::Run(RunAction {
                path: "/tmp/bp/bin/detect".into(),
                args: vec!["/app".into()],
                env: vec![EnvironmentVariable {
                    name: "FOO".into(),
                    value: "BAR".into(),
                }],
            }),
            parallel.actions[0]
        );
        assert_matches!(parallel.actions[1], Action::Upload(_));
    }

    #[test]
    fn test_extension() {
        assert_matches!(
            parse("extension: { kind: emit_progress, params: { message: hello } }").unwrap(),
            Action::Extension(ExtensionAction { kind, params }) if kind == "emit_progress" && params["message"] == "hello"
        );
    }

    #[test]
    fn test_empty_group_is_invalid() {
        assert!(parse("serial: []").is_err());
        assert!(parse("parallel: []").is_err());
    }

    #[test]
    fn test_command_with_arguments_is_invalid() {
        let err = parse("run: { path: 'ls -la' }").unwrap_err();
        assert!(err.to_string().contains("arguments"));
    }

    #[test]
    fn test_exactly_one_kind() {
        assert!(parse("upload: { from: a, to: b }\nrun: { path: ls }").is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn test_unknown_kind_is_invalid() {
        assert!(parse("teleport: { to: mars }").is_err());
    }
}
