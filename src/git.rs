use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};

/// Runs `git <args>` in `dir` and waits for it to exit.
///
/// Only a failure to start the process is an error here; callers decide
/// what a non-zero exit means.
fn run(args: &[&str], dir: &Path) -> Result<Output> {
    debug!("Running git {} in {}", args.join(" "), dir.display());
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|source| Error::GitSpawn {
            command: args.join(" "),
            source,
        })
}

/// Runs `git <args>` in `dir`, turning a non-zero exit into an error that
/// carries the captured stderr. Returns stdout on success.
fn run_checked(args: &[&str], dir: &Path) -> Result<String> {
    let output = run(args, dir)?;
    if !output.status.success() {
        return Err(Error::GitCommand {
            command: args.join(" "),
            dir: dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            hint: None,
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Clone `url` into `parent_dir`, letting git name the new directory.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone(url: &str, parent_dir: &Path) -> Result<()> {
    run_checked(&["clone", url], parent_dir)
        .map(|_| ())
        .map_err(|err| match err {
            Error::GitCommand {
                command,
                dir,
                stderr,
                ..
            } => {
                let hint = auth_hint(&stderr);
                Error::GitCommand {
                    command,
                    dir,
                    stderr,
                    hint,
                }
            }
            other => other,
        })
}

/// Check out `rev` (a branch name or `tags/<version>`) in `repo_dir`.
pub fn checkout(repo_dir: &Path, rev: &str) -> Result<()> {
    run_checked(&["checkout", rev], repo_dir).map(|_| ())
}

/// Pull the currently checked-out branch, returning git's stdout.
pub fn pull(repo_dir: &Path) -> Result<String> {
    run_checked(&["pull"], repo_dir)
}

/// Returns the tag HEAD sits exactly on, or `None` if there is none.
///
/// A non-zero exit from `git describe` is the normal "no exact tag" answer,
/// so it is logged rather than returned as an error.
pub fn describe_exact_tag(repo_dir: &Path) -> Result<Option<String>> {
    let output = run(&["describe", "--exact-match", "--tags"], repo_dir)?;
    if !output.status.success() {
        debug!(
            "No exact tag in {}: {}",
            repo_dir.display(),
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
        return Ok(None);
    }
    let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok((!tag.is_empty()).then_some(tag))
}

/// Provide a helpful message for common authentication failures.
fn auth_hint(stderr: &str) -> Option<String> {
    let auth_failure = stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository");

    auth_failure.then(|| {
        "Make sure you have access to the repository. For private repos, ensure you have \
         an SSH key added to ssh-agent, git credentials configured, or a personal access \
         token set up."
            .to_string()
    })
}
