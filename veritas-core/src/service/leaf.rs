//! Builders for the primitive actions. Each asks its questions in order and
//! returns a fully populated action.

use anyhow::ensure;
use itertools::Itertools;
use log::trace;

use crate::{
    model::action::{Action, DownloadAction, EnvironmentVariable, RunAction, UploadAction},
    prompt::Prompter,
};

pub const COMMAND_HAS_ARGUMENTS: &str =
    "You cannot specify arguments to the command, that'll come next...";

const ENV_SEPARATOR: char = ';';
const ENV_ASSIGNMENT: char = '=';
const ARGS_SEPARATOR: char = ';';

pub fn build_download_action<P: Prompter + ?Sized>(prompter: &mut P) -> anyhow::Result<Action> {
    Ok(Action::Download(DownloadAction {
        from: prompter.ask("Download URL")?,
        to: prompter.ask_with_default("Container Destination", ".")?,
        cache_key: prompter.ask("CacheKey")?,
    }))
}

pub fn build_upload_action<P: Prompter + ?Sized>(prompter: &mut P) -> anyhow::Result<Action> {
    Ok(Action::Upload(UploadAction {
        from: prompter.ask("Container Source")?,
        to: prompter.ask("Upload URL")?,
    }))
}

pub fn build_run_action<P: Prompter + ?Sized>(prompter: &mut P) -> anyhow::Result<Action> {
    let path = prompter.ask_with_validation("Command to run", validate_command)?;
    // A blank answer still yields one empty argument.
    let args = prompter
        .ask("Args (split by ';')")?
        .split(ARGS_SEPARATOR)
        .map(str::to_owned)
        .collect_vec();
    let env = build_env_list(prompter)?;

    Ok(Action::Run(RunAction { path, args, env }))
}

pub fn build_env_list<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> anyhow::Result<Vec<EnvironmentVariable>> {
    let line = prompter.ask("Environment Variables (FOO=BAR;BAZ=WIBBLE)")?;
    Ok(parse_env_list(&line))
}

/// The command is asked for on its own, arguments come separately.
pub fn validate_command(response: &str) -> anyhow::Result<()> {
    ensure!(!response.contains(' '), COMMAND_HAS_ARGUMENTS);
    Ok(())
}

/// Parse `FOO=BAR;BAZ=WIBBLE`. Entries without exactly one `=` are dropped.
pub fn parse_env_list(line: &str) -> Vec<EnvironmentVariable> {
    line.split(ENV_SEPARATOR)
        .filter_map(|entry| match entry.split(ENV_ASSIGNMENT).collect_tuple() {
            Some((name, value)) => Some(EnvironmentVariable {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
            None => {
                trace!("Dropping environment entry `{entry}`");
                None
            }
        })
        .collect_vec()
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use crate::prompt::ScriptedPrompter;

    use super::*;

    fn env(name: &str, value: &str) -> EnvironmentVariable {
        EnvironmentVariable {
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn test_env_list() {
        assert_eq!(
            vec![env("FOO", "BAR"), env("BAZ", "WIBBLE")],
            parse_env_list("FOO=BAR;BAZ=WIBBLE")
        );
    }

    #[test]
    fn test_env_list_drops_malformed_entries() {
        assert_eq!(
            vec![env("FOO", "BAR"), env("BAZ", "WIBBLE")],
            parse_env_list("FOO=BAR;MALFORMED;BAZ=WIBBLE")
        );
        assert_eq!(
            vec![env("B", ""), env("", "")],
            parse_env_list("A=1=2;B=;=")
        );
    }

    #[test]
    fn test_env_list_empty_line() {
        assert!(parse_env_list("").is_empty());
    }

    #[test]
    fn test_command_validation() {
        assert!(validate_command("ls").is_ok());
        let err = validate_command("ls -la").unwrap_err();
        assert_eq!(COMMAND_HAS_ARGUMENTS, err.to_string());
    }

    #[test]
    fn test_download() {
        let mut prompter = ScriptedPrompter::new(["http://x/a.tgz", "", "k1"]);
        assert_eq!(
            Action::Download(DownloadAction {
                from: "http://x/a.tgz".into(),
                to: ".".into(),
                cache_key: "k1".into(),
            }),
            build_download_action(&mut prompter).unwrap()
        );
    }

    #[test]
    fn test_download_blank_cache_key() {
        let mut prompter = ScriptedPrompter::new(["http://x/a.tgz", "/tmp", ""]);
        assert_matches!(
            build_download_action(&mut prompter).unwrap(),
            Action::Download(DownloadAction { to, cache_key, .. }) if to == "/tmp" && cache_key.is_empty()
        );
    }

    #[test]
    fn test_upload() {
        let mut prompter = ScriptedPrompter::new(["/tmp/out", "http://x/out"]);
        assert_eq!(
            Action::Upload(UploadAction {
                from: "/tmp/out".into(),
                to: "http://x/out".into(),
            }),
            build_upload_action(&mut prompter).unwrap()
        );
    }

    #[test]
    fn test_run_asks_again_for_command_with_arguments() {
        let mut prompter = ScriptedPrompter::new(["ls -la", "ls", "-la;--color", "TERM=xterm"]);
        assert_eq!(
            Action::Run(RunAction {
                path: "ls".into(),
                args: vec!["-la".into(), "--color".into()],
                env: vec![env("TERM", "xterm")],
            }),
            build_run_action(&mut prompter).unwrap()
        );
        assert_eq!(["ls -la"], prompter.rejections());
    }

    #[test]
    fn test_run_blank_args() {
        let mut prompter = ScriptedPrompter::new(["./start", "", ""]);
        assert_eq!(
            Action::Run(RunAction {
                path: "./start".into(),
                args: vec![String::new()],
                env: vec![],
            }),
            build_run_action(&mut prompter).unwrap()
        );
    }
}
