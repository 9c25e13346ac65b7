/// Process configuration, read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FPS: u32 = 30;
pub const MIN_FPS: u32 = 10;
pub const MAX_FPS: u32 = 120;

const SCORE_FILE_VAR: &str = "ALIEN_INVASION_SCORE_FILE";
const LOG_FILE_VAR: &str = "ALIEN_INVASION_LOG";
const FPS_VAR: &str = "ALIEN_INVASION_FPS";
const MUTE_VAR: &str = "ALIEN_INVASION_MUTE";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub score_path: PathBuf,
    pub log_path: PathBuf,
    pub fps: u32,
    pub muted: bool,
    /// Raw `ALIEN_INVASION_FPS` value that was rejected, kept until logging is up.
    rejected_fps: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".alien_invasion");

        let score_path = lookup(SCORE_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("high_score.json"));
        let log_path = lookup(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("alien_invasion.log"));

        let (fps, rejected_fps) = match lookup(FPS_VAR) {
            None => (DEFAULT_FPS, None),
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(v) if (MIN_FPS..=MAX_FPS).contains(&v) => (v, None),
                _ => (DEFAULT_FPS, Some(raw)),
            },
        };

        let muted = lookup(MUTE_VAR)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Config {
            score_path,
            log_path,
            fps,
            muted,
            rejected_fps,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }

    /// Emit warnings deferred from parsing.  Call once logging is installed.
    pub fn log_summary(&self) {
        if let Some(raw) = &self.rejected_fps {
            tracing::warn!(
                "{FPS_VAR}={raw:?} is not in {MIN_FPS}..={MAX_FPS}. Falling back to {DEFAULT_FPS}."
            );
        }
        tracing::info!(
            score_path = %self.score_path.display(),
            fps = self.fps,
            muted = self.muted,
            "configuration loaded"
        );
    }
}
