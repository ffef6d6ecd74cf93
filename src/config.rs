//! Command line arguments and runtime configuration
//!
//! The overlay itself is deliberately not configurable: geometry, opacity,
//! idle timeout and history depth are fixed constants. The flags here only
//! cover where input devices live and how chatty the logs are.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// How long the display persists after the last press.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(1);

/// Idle-monitor poll interval, also the GUI repaint cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "keyshow")]
#[command(about = "Displays the currently pressed keys in an always-on-top overlay window")]
#[command(version)]
pub struct Args {
    /// Input device directory
    #[arg(long, default_value = "/dev/input")]
    pub device_path: PathBuf,

    /// Verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub device_path: PathBuf,
    pub idle_timeout: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Config {
            device_path: args.device_path.clone(),
            idle_timeout: IDLE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["keyshow"]);
        let config = Config::from_args(&args);
        assert_eq!(config.device_path, PathBuf::from("/dev/input"));
        assert_eq!(config.idle_timeout, Duration::from_secs(1));
        assert!(!args.verbose);
    }

    #[test]
    fn test_device_path_override() {
        let args = Args::parse_from(["keyshow", "--device-path", "/tmp/fake-input", "-v"]);
        let config = Config::from_args(&args);
        assert_eq!(config.device_path, PathBuf::from("/tmp/fake-input"));
        assert!(args.verbose);
    }
}
