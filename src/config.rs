//! Command-line configuration

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bubbleviz",
    version,
    about = "Step through every comparison of a bubble sort",
    after_help = "Keys: n = next step, b = previous step, Esc = quit"
)]
pub struct Config {
    /// Maximum number of snapshots to record. Unbounded when omitted;
    /// 100 reproduces the legacy buffer and fails with a capacity error.
    #[arg(long, env = "BUBBLEVIZ_CAPACITY")]
    pub capacity: Option<usize>,

    /// Delay between frames of the live sorting animation.
    #[arg(long, env = "BUBBLEVIZ_STEP_DELAY_MS", default_value_t = 500)]
    pub step_delay_ms: u64,

    /// Sleep between event loop iterations (16 ms is roughly 60 per second).
    #[arg(long, env = "BUBBLEVIZ_FRAME_MS", default_value_t = 16)]
    pub frame_ms: u64,

    /// Go straight to interactive playback without the live animation.
    #[arg(long, env = "BUBBLEVIZ_SKIP_ANIMATION")]
    pub skip_animation: bool,

    /// Write log output to this file instead of stderr.
    #[arg(long, env = "BUBBLEVIZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Filter directives for the log subscriber.
    ///
    /// `rust_log` only applies when logging to a file. Without one, output
    /// goes to stderr, which shares the screen with the TUI, so it is held
    /// at `error`.
    pub fn log_directives(&self, rust_log: Option<&str>) -> String {
        match (&self.log_file, rust_log) {
            (Some(_), Some(directives)) => directives.to_string(),
            (Some(_), None) => "info".to_string(),
            (None, _) => "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["bubbleviz"]).unwrap();
        assert_eq!(config.capacity, None);
        assert_eq!(config.step_delay(), Duration::from_millis(500));
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
        assert!(!config.skip_animation);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "bubbleviz",
            "--capacity",
            "100",
            "--skip-animation",
            "--frame-ms",
            "33",
        ])
        .unwrap();
        assert_eq!(config.capacity, Some(100));
        assert!(config.skip_animation);
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_stderr_logging_ignores_rust_log() {
        let config = Config::try_parse_from(["bubbleviz"]).unwrap();
        assert_eq!(config.log_directives(Some("debug")), "error");
        assert_eq!(config.log_directives(None), "error");
    }

    #[test]
    fn test_log_file_honours_rust_log() {
        let config =
            Config::try_parse_from(["bubbleviz", "--log-file", "bubbleviz.log"]).unwrap();
        assert_eq!(config.log_directives(Some("bubbleviz=trace")), "bubbleviz=trace");
        assert_eq!(config.log_directives(None), "info");
    }
}
