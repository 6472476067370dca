//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Defaults the command line falls back to.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Content directory (default: `data`)
    /// - `DUEL_SEED` - Battle seed (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("DUEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("DUEL_SEED") {
            config.seed = seed;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
