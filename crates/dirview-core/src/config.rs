/// Viewer configuration — which directory to browse.
///
/// Resolution order: first command-line argument, then the `DIRVIEW_ROOT`
/// environment variable, then the process's current working directory.
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable that overrides the default root path.
pub const ROOT_ENV_VAR: &str = "DIRVIEW_ROOT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Startup settings for the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Directory shown when the window opens.
    pub root_path: PathBuf,
}

impl ViewerConfig {
    /// Resolve from the process arguments and environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::args_os().nth(1),
            std::env::var_os(ROOT_ENV_VAR),
        )
    }

    /// Resolve from explicit inputs. Empty values count as absent.
    pub fn resolve(arg: Option<OsString>, env_root: Option<OsString>) -> Result<Self, ConfigError> {
        let non_empty = |s: &OsString| !s.is_empty();
        let root_path = match arg.filter(non_empty).or(env_root.filter(non_empty)) {
            Some(path) => PathBuf::from(path),
            None => std::env::current_dir().map_err(ConfigError::CurrentDir)?,
        };
        Ok(Self { root_path })
    }
}
