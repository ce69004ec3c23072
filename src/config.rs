use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/store.json";
const DEFAULT_COACH_DELAY_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Cosmetic pause before a coach reply is returned.
    pub coach_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let coach_delay_ms = env::var("COACH_REPLY_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_COACH_DELAY_MS);

        Self {
            port,
            data_path: resolve_data_path(),
            coach_delay: Duration::from_millis(coach_delay_ms),
        }
    }
}

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(DEFAULT_DATA_PATH),
    }
}
