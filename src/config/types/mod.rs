//! Configuration utility types.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `error`  | Configuration error types                      |
//! | `field`  | Type-safe field paths for diagnostics          |
//! | `handle` | Process-wide metadata handle (install once)    |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{init_metadata, is_initialized, metadata};
