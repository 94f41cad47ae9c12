//! Runtime configuration for stack capture
//!
//! The active configuration lives in process-wide atomics so that capturing
//! a stack never takes a lock. Install one at startup with [`set`]:
//!
//! ```rust
//! use tagerr::config::{self, Config};
//!
//! config::set(Config::from_env().with_max_frames(32));
//! assert_eq!(config::get().max_frames, 32);
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Frames captured per error unless configured otherwise
pub const DEFAULT_MAX_FRAMES: usize = 64;

/// Upper bound for [`Config::max_frames`]
pub const FRAME_LIMIT: usize = 256;

/// Environment variable toggling stack capture (`0`, `false`, `off` disable it)
pub const ENV_CAPTURE_STACK: &str = "TAGERR_CAPTURE_STACK";

/// Environment variable setting the frame budget
pub const ENV_MAX_FRAMES: &str = "TAGERR_MAX_FRAMES";

static CAPTURE_STACK: AtomicBool = AtomicBool::new(true);
static MAX_FRAMES: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_FRAMES);

/// Stack capture settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Capture a stack when an error first enters the library
    pub capture_stack: bool,
    /// Maximum number of frames kept per stack, in `1..=FRAME_LIMIT`
    pub max_frames: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_stack: true,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_CAPTURE_STACK) {
            config.capture_stack = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "off" | "no"
            );
        }

        if let Some(frames) = lookup(ENV_MAX_FRAMES).and_then(|v| v.trim().parse().ok()) {
            config = config.with_max_frames(frames);
        }

        config
    }

    /// Set the frame budget, clamped to `1..=FRAME_LIMIT`
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames.clamp(1, FRAME_LIMIT);
        self
    }

    /// Disable stack capture
    pub fn without_stack(mut self) -> Self {
        self.capture_stack = false;
        self
    }
}

/// Install a configuration for the whole process
pub fn set(config: Config) {
    CAPTURE_STACK.store(config.capture_stack, Ordering::Relaxed);
    MAX_FRAMES.store(config.max_frames.clamp(1, FRAME_LIMIT), Ordering::Relaxed);
}

/// The configuration currently in effect
pub fn get() -> Config {
    Config {
        capture_stack: CAPTURE_STACK.load(Ordering::Relaxed),
        max_frames: MAX_FRAMES.load(Ordering::Relaxed),
    }
}
