//! Experiment root resolution
//!
//! The caller states which environment it runs in; nothing here probes for
//! notebook kernels or mounted drives.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Default root when running on a hosted notebook with a mounted drive
pub const HOSTED_NOTEBOOK_ROOT: &str = "/content/drive/MyDrive/Experiments";

/// Folder name of the default root under the working directory
pub const LOCAL_ROOT_DIR: &str = "Experiments";

/// Runtime environment, supplied by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Local machine or local Jupyter kernel: `{cwd}/Experiments`
    #[default]
    Local,
    /// Hosted notebook with the drive mounted at the standard location
    HostedNotebook,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::HostedNotebook => "hosted_notebook",
        }
    }

    /// Default experiment root for this environment
    pub fn default_root(&self) -> io::Result<PathBuf> {
        match self {
            Environment::HostedNotebook => Ok(PathBuf::from(HOSTED_NOTEBOOK_ROOT)),
            Environment::Local => Ok(std::env::current_dir()?.join(LOCAL_ROOT_DIR)),
        }
    }
}

/// Resolve the experiment root: an explicit override wins, otherwise the
/// environment default. The result is absolute; no existence check is made.
pub fn resolve_root(override_root: Option<&Path>, environment: Environment) -> io::Result<PathBuf> {
    let root = match override_root {
        Some(path) => absolutize(path)?,
        None => normalize_lexically(&environment.default_root()?),
    };
    tracing::debug!(root = %root.display(), environment = environment.as_str(), "resolved experiment root");
    Ok(root)
}

/// Make `path` absolute against the working directory and drop `.`/`..`
/// lexically. Symlinks are not followed and the path need not exist.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_lexically(path))
    } else {
        Ok(normalize_lexically(&std::env::current_dir()?.join(path)))
    }
}

/// Lexical cleanup of `.` and `..` components
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => true,
                    _ => false,
                };
                if !popped {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let root = resolve_root(Some(Path::new("/srv/exp")), Environment::HostedNotebook).unwrap();
        assert_eq!(root, PathBuf::from("/srv/exp"));
    }

    #[test]
    fn test_hosted_notebook_default() {
        let root = resolve_root(None, Environment::HostedNotebook).unwrap();
        assert_eq!(root, PathBuf::from("/content/drive/MyDrive/Experiments"));
    }

    #[test]
    fn test_local_default_under_cwd() {
        let root = resolve_root(None, Environment::Local).unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(root, normalize_lexically(&cwd.join("Experiments")));
        assert!(root.is_absolute());
    }

    #[test]
    fn test_relative_override_is_made_absolute() {
        let root = resolve_root(Some(Path::new("runs/./exp1")), Environment::Local).unwrap();
        assert!(root.is_absolute());
        assert!(root.ends_with("runs/exp1"));
    }

    #[test]
    fn test_normalize_lexically() {
        assert_eq!(normalize_lexically(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexically(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(normalize_lexically(Path::new("a/../../b")), PathBuf::from("../b"));
    }
}
