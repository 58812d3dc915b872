use chrono::Utc;

use crate::{
    color::{Color, paint},
    level::Level,
};

/// One emitted message, as handed to callbacks and to the line formatter.
///
/// `library` is only set when library tags are enabled and a library name is
/// known for the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMessage<'a> {
    pub level: Level,
    pub tag: &'a str,
    pub message: &'a str,
    pub library: Option<&'a str>,
}

impl LogMessage<'_> {
    pub fn to_owned_message(&self) -> OwnedLogMessage {
        OwnedLogMessage {
            level: self.level,
            tag: self.tag.to_string(),
            message: self.message.to_string(),
            library: self.library.map(String::from),
        }
    }

    /// Uncolored rendering without timestamp.
    pub fn to_line(&self) -> String {
        format_log(self, &LineStyle::default())
    }
}

/// Owned copy of a [`LogMessage`], for callbacks that keep what they receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedLogMessage {
    pub level: Level,
    pub tag: String,
    pub message: String,
    pub library: Option<String>,
}

impl OwnedLogMessage {
    pub fn as_message(&self) -> LogMessage<'_> {
        LogMessage {
            level: self.level,
            tag: &self.tag,
            message: &self.message,
            library: self.library.as_deref(),
        }
    }
}

/// Decoration applied by [`format_log`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStyle {
    pub colors: bool,
    pub timestamp: bool,
    pub tag_color: Color,
    pub library_color: Color,
}

/// Renders `[LEVEL] [LIBRARY][TAG]: message`, the library segment only when
/// the message carries one.
pub fn format_log(message: &LogMessage<'_>, style: &LineStyle) -> String {
    let level = paint(
        &format!("[{}]", message.level.as_str()),
        message.level.ansi_color(),
        style.colors,
    );
    let library = message
        .library
        .map(|name| paint(&format!("[{name}]"), style.library_color.ansi(), style.colors))
        .unwrap_or_default();
    let tag = paint(
        &format!("[{}]", message.tag),
        style.tag_color.ansi(),
        style.colors,
    );
    let line = format!("{level} {library}{tag}: {}", message.message);
    if style.timestamp {
        let time = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3f");
        format!("[{time}] {line}")
    } else {
        line
    }
}
