use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding where named presets are looked up
pub const ENV_PRESET_DIR: &str = "RENAMEPIPE_PRESET_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `<name>.json` presets, if one could be determined
    pub preset_dir: Option<PathBuf>,
}

/// Load configuration from the environment (a `.env` file is read by `main`)
pub fn config_from_env() -> AppConfig {
    let preset_dir = env::var_os(ENV_PRESET_DIR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("renamepipe").join("presets")));

    AppConfig { preset_dir }
}

impl AppConfig {
    /// Resolve a `--preset` argument: an existing file wins, otherwise
    /// `<preset_dir>/<name>.json`
    pub fn resolve_preset(&self, arg: &Path) -> PathBuf {
        if arg.is_file() {
            return arg.to_path_buf();
        }

        match &self.preset_dir {
            Some(dir) if arg.extension().is_none() => dir.join(arg).with_extension("json"),
            Some(dir) => dir.join(arg),
            None => arg.to_path_buf(),
        }
    }
}
