//! # clogger-core
//! Core building blocks for clogger: level gate, tag filtering, color
//! registries, platform capabilities and line formatting.
//!
//! Nothing in here locks. Every type is plain data meant to be owned by a
//! single logger context; hosts that share one across threads serialize
//! access themselves.

mod color;
pub mod config;
mod fixed_str;
mod level;
mod log_writer;
mod platform;
mod registry;
mod tag_filter;
mod utils;

pub use color::{Color, ParseColorError};
pub use config::{CLOGGER_CONFIG, ClogConfig};
pub use fixed_str::{BoundedWriter, FixedStr, floor_char_boundary, format_message};
pub use level::{Level, ParseLevelError, STATIC_MAX_LEVEL, should_emit};
pub use log_writer::{LogMemory, LogStdout, LogWriter};
pub use platform::{ParsePlatformError, Platform};
pub use registry::{LibraryColors, Registry, TagColors};
pub use tag_filter::{FilterMode, TagFilter};
pub use utils::{LineStyle, LogMessage, OwnedLogMessage, format_log};
