//! # Error Stacks
//!
//! A bounded snapshot of the call stack, taken once when an error first
//! enters the library. Capture only records instruction pointers; symbols
//! are resolved lazily the first time the frames are asked for.

use crate::config::{self, Config};
use std::ffi::c_void;
use std::fmt;
use std::sync::OnceLock;

/// Extra frames recorded to cover the capture machinery, trimmed on resolve
const INTERNAL_SLACK: usize = 8;

/// Function paths that belong to the capture machinery itself
const INTERNAL_PATHS: &[&str] = &[
    "backtrace::",
    "_Unwind_",
    "tagerr::stack::",
    "tagerr::error::",
    "tagerr::tag::",
    "tagerr::ext::",
    "tagerr::wrap",
    "tagerr::tagged",
];

/// One resolved stack frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Demangled function path, or `<unknown>`
    pub function: String,
    /// Source line, `0` when unavailable
    pub line: u32,
}

/// A captured call stack, innermost call first
pub struct Stack {
    ips: Box<[usize]>,
    limit: usize,
    frames: OnceLock<Vec<Frame>>,
}

impl Stack {
    /// A stack with no frames
    pub fn empty() -> Self {
        Self {
            ips: Box::new([]),
            limit: 0,
            frames: OnceLock::new(),
        }
    }

    /// Capture the current stack using the process configuration
    pub(crate) fn capture() -> Self {
        Self::capture_with(&config::get())
    }

    /// Capture the current stack using the given configuration
    pub fn capture_with(config: &Config) -> Self {
        if !config.capture_stack {
            return Self::empty();
        }

        let budget = config.max_frames + INTERNAL_SLACK;
        let mut ips = Vec::with_capacity(budget);
        backtrace::trace(|frame| {
            ips.push(frame.ip() as usize);
            ips.len() < budget
        });

        if ips.is_empty() {
            tracing::debug!("stack capture returned no frames");
        } else {
            tracing::trace!(frames = ips.len(), "captured error stack");
        }

        Self {
            ips: ips.into_boxed_slice(),
            limit: config.max_frames,
            frames: OnceLock::new(),
        }
    }

    /// Number of raw frames recorded
    pub fn len(&self) -> usize {
        self.ips.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    /// Resolved frames, starting at the caller that entered the library
    pub fn frames(&self) -> &[Frame] {
        self.frames.get_or_init(|| resolve(&self.ips, self.limit))
    }
}

fn resolve(ips: &[usize], limit: usize) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(ips.len());
    for &ip in ips {
        let before = frames.len();
        backtrace::resolve(ip as *mut c_void, |symbol| {
            frames.push(Frame {
                function: symbol
                    .name()
                    .map(|name| format!("{:#}", name))
                    .unwrap_or_else(|| "<unknown>".to_string()),
                line: symbol.lineno().unwrap_or(0),
            });
        });
        if frames.len() == before {
            frames.push(Frame {
                function: "<unknown>".to_string(),
                line: 0,
            });
        }
    }

    let skip = frames
        .iter()
        .take_while(|frame| is_internal(&frame.function))
        .count();
    frames.drain(..skip);
    frames.truncate(limit);
    frames
}

fn is_internal(function: &str) -> bool {
    if function.contains("::tests::") {
        return false;
    }
    // qualified paths like `<A as tagerr::ext::ResultExt<T>>::tag` hold
    // several paths; each one must start with an internal prefix
    function
        .split(|c: char| matches!(c, '<' | '>' | ' ' | ',' | '&' | '*' | '(' | ')' | '[' | ']' | ';'))
        .any(|path| INTERNAL_PATHS.iter().any(|prefix| starts_with_segment(path, prefix)))
}

/// `path` begins with `prefix` and the match ends on a segment boundary
fn starts_with_segment(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => {
            prefix.ends_with("::") || prefix.ends_with('_') || rest.is_empty() || rest.starts_with("::")
        }
        None => false,
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("frames", &self.ips.len())
            .finish()
    }
}
