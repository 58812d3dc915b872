//! # clogger
//! Level-gated, tag-filterable, color-annotated logging for applications and
//! for the libraries embedded in them.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! clogger = "0.2.0"
//! ```
//!
//! ```rust
//! use clogger::{Level, logger_config};
//!
//! let mut logger = logger_config().with_level(Level::Debug).build();
//! clogger::info!(logger, "Main", "Hello, {}!", "world");
//! clogger::debug!(logger, "Main", "value = {:.2}", 3.14159);
//! ```
//!
//! ## Tag filtering
//! The first `enable_tag` after a reset switches to a whitelist, the first
//! `disable_tag` to a blacklist.
//!
//! ```rust
//! use clogger::Logger;
//!
//! let mut logger = Logger::new();
//! logger.disable_all_tags();
//! logger.enable_tag("DB");
//! assert!(logger.is_tag_enabled("DB"));
//! assert!(!logger.is_tag_enabled("UI"));
//!
//! logger.enable_all_tags();
//! logger.disable_tag("UI");
//! assert!(logger.is_tag_enabled("DB"));
//! assert!(!logger.is_tag_enabled("UI"));
//! ```
//!
//! ## Callbacks
//! A callback replaces console output entirely.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use clogger::{LogMessage, Logger, OwnedLogMessage};
//!
//! let seen: Arc<Mutex<Vec<OwnedLogMessage>>> = Arc::default();
//! let sink = seen.clone();
//! let mut logger = Logger::new();
//! logger.set_callback(Some(Box::new(move |message: &LogMessage<'_>| {
//!     sink.lock().unwrap().push(message.to_owned_message());
//! })));
//! clogger::warn!(logger, "Net", "retrying in {}s", 5);
//! assert_eq!(seen.lock().unwrap()[0].message, "retrying in 5s");
//! ```
//!
//! ## Library identity
//! A library names itself; only the host decides whether that name is shown.
//!
//! ```rust
//! use clogger::{Color, LogMemory, logger_config};
//!
//! let console = LogMemory::new();
//! let mut logger = logger_config()
//!     .with_writer(console.clone())
//!     .with_colors(false)
//!     .build();
//! logger.set_library_name(Some("NetworkLib"));
//! clogger::info!(logger, "HTTP", "request sent");
//! logger.enable_library_tags(true);
//! logger.set_library_color("NetworkLib", Color::BrightGreen);
//! clogger::info!(logger, "HTTP", "request sent");
//! assert_eq!(console.lines(), vec![
//!     "[INFO ] [HTTP]: request sent",
//!     "[INFO ] [NetworkLib][HTTP]: request sent",
//! ]);
//! ```
//!
//! ## Routing the `log` crate
//! ```rust
//! use clogger::logger_config;
//!
//! let logger = logger_config()
//!     .init_global()
//!     .expect("another global logger is already installed");
//! logger.lock().unwrap().disable_tag("noisy");
//! log::info!(target: "app", "shown");
//! log::info!(target: "noisy", "hidden");
//! ```
//!
//! ## Threads
//! [`Logger`] has no internal locking. Share it as a [`SharedLogger`] (or any
//! other mutex) when more than one thread logs or configures it.

mod bridge;
mod builder;
mod logger;
mod macros;

pub use bridge::{LogBridge, SharedLogger};
pub use builder::{ConfigBuilder, logger_config};
pub use clogger_core::{
    ClogConfig, Color, FilterMode, Level, LineStyle, LogMemory, LogMessage, LogStdout, LogWriter,
    OwnedLogMessage, ParseColorError, ParseLevelError, ParsePlatformError, Platform,
    STATIC_MAX_LEVEL, config,
};
pub use logger::{Callback, Logger, Saturation};
