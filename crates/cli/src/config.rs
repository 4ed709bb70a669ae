//! Arena runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings the `arena` binary needs before it can build a service.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    /// RON character catalog; the bundled roster when unset.
    pub roster_path: Option<PathBuf>,
    /// TOML battle rules; defaults when unset.
    pub config_path: Option<PathBuf>,
    /// Fixed simulation seed; a fresh one per run when unset.
    pub seed: Option<u64>,
    /// Keep battles on disk between invocations.
    pub persist: bool,
    pub data_dir: Option<PathBuf>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            roster_path: None,
            config_path: None,
            seed: None,
            persist: true,
            data_dir: None,
        }
    }
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_ROSTER` - Character catalog RON file (default: bundled roster)
    /// - `ARENA_CONFIG` - Battle rules TOML file (default: built-in rules)
    /// - `ARENA_SEED` - Simulation seed (default: random per run)
    /// - `ARENA_PERSIST` - Store battles on disk (default: true)
    /// - `ARENA_DATA_DIR` - Directory for stored battles (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.roster_path = env::var("ARENA_ROSTER").ok().map(PathBuf::from);
        config.config_path = env::var("ARENA_CONFIG").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("ARENA_SEED");

        if let Some(persist) = read_env::<bool>("ARENA_PERSIST") {
            config.persist = persist;
        }

        config.data_dir = env::var("ARENA_DATA_DIR").ok().map(PathBuf::from);

        config
    }

    /// Directory for stored battles.
    ///
    /// Follows platform conventions:
    /// - macOS: `~/Library/Application Support/arena`
    /// - Linux: `~/.local/share/arena` (or `$XDG_DATA_HOME/arena`)
    /// - Windows: `%APPDATA%\arena`
    /// - Fallback: `./arena_data`
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", "arena")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./arena_data"))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
