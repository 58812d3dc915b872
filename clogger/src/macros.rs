/// Logs a message at `level` on `tag` through `logger`.
///
/// Calls above [`STATIC_MAX_LEVEL`](crate::STATIC_MAX_LEVEL) compile to
/// nothing, and the format arguments are only evaluated for messages that
/// pass both the level gate and the tag filter.
///
/// ```rust
/// use clogger::{Level, LogMemory, Logger};
///
/// let console = LogMemory::new();
/// let mut logger = Logger::new();
/// logger.set_writer(console.clone());
/// logger.set_colors(false);
/// clogger::log!(logger, Level::Warn, "Disk", "{}% used", 93);
/// assert_eq!(console.lines(), vec!["[WARN ] [Disk]: 93% used"]);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        if level <= $crate::STATIC_MAX_LEVEL {
            let tag: &str = $tag;
            if let ::std::option::Option::Some(logger) = $logger.gate(level, tag) {
                logger.log(level, tag, ::std::format_args!($($arg)+));
            }
        }
    }};
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $tag, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $tag, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $tag, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $tag, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $tag:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $tag, $($arg)+)
    };
}

/// Logs `ASSERTION FAILED: <cond> - <message>` at ERROR when `cond` is false.
/// Compiled out of release builds.
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $cond:expr, $tag:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        if ::std::cfg!(debug_assertions) && !($cond) {
            $crate::error!(
                $logger,
                $tag,
                ::std::concat!("ASSERTION FAILED: ", ::std::stringify!($cond), " - ", $fmt)
                $(, $arg)*
            );
        }
    };
}
