use std::{fmt, str::FromStr};

use colored::Color as AnsiColor;
use thiserror::Error;

/// Severity of a log message, also used as the logger threshold.
///
/// Higher values are more verbose. A message passes the gate when its level is
/// numerically less than or equal to the threshold.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

/// Compile-time level ceiling.
///
/// Selected with the `max_level_*` cargo features; the most restrictive one
/// wins. Call sites above this level are folded away by the logging macros.
pub const STATIC_MAX_LEVEL: Level = if cfg!(feature = "max_level_off") {
    Level::Off
} else if cfg!(feature = "max_level_error") {
    Level::Error
} else if cfg!(feature = "max_level_warn") {
    Level::Warn
} else if cfg!(feature = "max_level_info") {
    Level::Info
} else if cfg!(feature = "max_level_debug") {
    Level::Debug
} else {
    Level::Trace
};

/// Level gate: true iff a message at `level` passes `threshold`.
#[inline(always)]
pub fn should_emit(level: Level, threshold: Level) -> bool {
    level <= threshold
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Off,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    pub const fn from_u8(value: u8) -> Option<Level> {
        match value {
            0 => Some(Level::Off),
            1 => Some(Level::Error),
            2 => Some(Level::Warn),
            3 => Some(Level::Info),
            4 => Some(Level::Debug),
            5 => Some(Level::Trace),
            _ => None,
        }
    }

    /// Fixed-width label used in rendered lines. Messages logged at `Off`
    /// render with the `?????` sentinel.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
            Level::Off => "?????",
        }
    }

    /// Canonical upper-case name, without padding.
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    pub(crate) const fn ansi_color(&self) -> Option<AnsiColor> {
        match self {
            Level::Error => Some(AnsiColor::BrightRed),
            Level::Warn => Some(AnsiColor::BrightYellow),
            Level::Info => Some(AnsiColor::BrightGreen),
            Level::Debug => Some(AnsiColor::BrightBlue),
            Level::Trace => Some(AnsiColor::BrightBlack),
            Level::Off => None,
        }
    }

    pub const fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::Off => log::LevelFilter::Off,
            Level::Error => log::LevelFilter::Error,
            Level::Warn => log::LevelFilter::Warn,
            Level::Info => log::LevelFilter::Info,
            Level::Debug => log::LevelFilter::Debug,
            Level::Trace => log::LevelFilter::Trace,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts level names in any case, `WARNING` as an alias, or the numeric
    /// value `0`..=`5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Level::from_u8(value).ok_or_else(|| ParseLevelError(s.to_string()));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "OFF" => Ok(Level::Off),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
