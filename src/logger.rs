//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, printed only with `--verbose`
//!
//! Everything goes to stderr so that `export` can stream the record on
//! stdout untouched.
//!
//! All styling goes through [`paint`], which honors `--color` and falls
//! back to plain text when the stream is not a terminal.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "metadata ok ({})", source);
//! debug!("config"; "loading metadata from {}", path.display());
//! ```

use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Style `text` for `stream`.
///
/// Plain when `--color never` is set, or in auto mode when `stream` is not a
/// color-capable terminal.
pub fn paint(text: impl fmt::Display, style: Style, stream: Stream) -> String {
    text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        "hint" => Style::new().bright_cyan(),
        "check" | "init" | "export" => Style::new().bright_green(),
        _ => Style::new().bright_yellow(),
    };
    paint(format!("[{module}]"), style.bold(), Stream::Stderr)
}

// ============================================================================
// Tests
// ============================================================================
