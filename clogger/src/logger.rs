use std::fmt;

use clogger_core::{
    Color, FilterMode, FixedStr, Level, LibraryColors, LineStyle, LogMessage, LogStdout, LogWriter,
    Platform, STATIC_MAX_LEVEL, TagColors, TagFilter,
    config::{self, COLORS_ENABLED, MAX_LIBRARY_NAME_LENGTH, TAG_FILTERING_ENABLED},
    format_log, format_message, should_emit,
};

/// Receives every emitted message instead of the console.
pub type Callback = Box<dyn FnMut(&LogMessage<'_>) + Send>;

/// Inserts rejected by each registry because it was full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Saturation {
    pub tag_filters: usize,
    pub tag_colors: usize,
    pub library_colors: usize,
}

/// Logger context: threshold, output routing, tag filter and the color and
/// library registries.
///
/// There is no internal locking. A host that logs from several threads wraps
/// the logger in a mutex, see [`SharedLogger`](crate::SharedLogger).
pub struct Logger {
    level: Level,
    callback: Option<Callback>,
    direct_output: bool,
    writer: Box<dyn LogWriter + Send>,
    colors: bool,
    timestamps: bool,
    buffer_size: usize,
    platform: Platform,
    tag_filter: TagFilter,
    tag_colors: TagColors,
    library_name: FixedStr<MAX_LIBRARY_NAME_LENGTH>,
    library_tags: bool,
    library_colors: LibraryColors,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("callback", &self.callback.is_some())
            .field("direct_output", &self.direct_output)
            .field("colors", &self.colors)
            .field("timestamps", &self.timestamps)
            .field("buffer_size", &self.buffer_size)
            .field("platform", &self.platform)
            .field("tag_filter", &self.tag_filter)
            .field("library_name", &self.library_name)
            .field("library_tags", &self.library_tags)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger with the built-in defaults: INFO threshold, no callback, direct
    /// output to stdout, every registry empty, all tags allowed, library tags
    /// hidden. The environment is not consulted, see
    /// [`logger_config`](crate::logger_config) for that.
    pub fn new() -> Self {
        Self {
            level: config::DEFAULT_LEVEL,
            callback: None,
            direct_output: true,
            writer: Box::new(LogStdout),
            colors: true,
            timestamps: false,
            buffer_size: config::BUFFER_SIZE,
            platform: Platform::AutoDetect,
            tag_filter: TagFilter::new(),
            tag_colors: TagColors::new(),
            library_name: FixedStr::new(),
            library_tags: false,
            library_colors: LibraryColors::new(),
        }
    }

    // ========== Level gate ==========

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether a message at `level` on `tag` would be emitted.
    ///
    /// The level checks run first; the tag filter is only consulted for
    /// messages that pass them.
    #[inline]
    pub fn enabled(&self, level: Level, tag: &str) -> bool {
        level <= STATIC_MAX_LEVEL && should_emit(level, self.level) && self.is_tag_enabled(tag)
    }

    /// The logger itself when a message at `level` on `tag` would be emitted.
    /// Lets the logging macros evaluate their logger expression once.
    #[inline]
    pub fn gate(&mut self, level: Level, tag: &str) -> Option<&mut Self> {
        self.enabled(level, tag).then_some(self)
    }

    // ========== Logging ==========

    pub fn log(&mut self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        if !self.enabled(level, tag) {
            return;
        }
        let message = format_message(args, self.buffer_size);
        self.output(level, tag, &message);
    }

    pub fn error(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Error, tag, args);
    }

    pub fn warn(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, tag, args);
    }

    pub fn info(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Info, tag, args);
    }

    pub fn debug(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, tag, args);
    }

    pub fn trace(&mut self, tag: &str, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, tag, args);
    }

    fn output(&mut self, level: Level, tag: &str, message: &str) {
        let library = (self.library_tags && !self.library_name.is_empty())
            .then(|| self.library_name.as_str());
        let record = LogMessage {
            level,
            tag,
            message,
            library,
        };
        if let Some(callback) = self.callback.as_mut() {
            callback(&record);
        } else if self.direct_output {
            let style = LineStyle {
                colors: COLORS_ENABLED && self.colors && self.platform.has_color_support(),
                timestamp: self.timestamps,
                tag_color: self.tag_colors.get(tag).unwrap_or_default(),
                library_color: library
                    .and_then(|name| self.library_colors.get(name))
                    .unwrap_or_default(),
            };
            self.writer.regular(&format_log(&record, &style));
        }
    }

    pub fn flush(&mut self) {
        self.writer.flush();
    }

    // ========== Output routing ==========

    /// Installs or removes the callback. While a callback is set it receives
    /// every message and nothing is written to the console; removing it turns
    /// direct output back on.
    pub fn set_callback(&mut self, callback: Option<Callback>) {
        self.direct_output = callback.is_none();
        self.callback = callback;
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn enable_direct_output(&mut self, enabled: bool) {
        self.direct_output = enabled;
    }

    pub fn is_direct_output_enabled(&self) -> bool {
        self.direct_output
    }

    pub fn set_writer<W: LogWriter + Send + 'static>(&mut self, writer: W) {
        self.writer = Box::new(writer);
    }

    pub fn set_colors(&mut self, enabled: bool) {
        self.colors = enabled;
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn set_timestamps(&mut self, enabled: bool) {
        self.timestamps = enabled;
    }

    pub fn timestamps_enabled(&self) -> bool {
        self.timestamps
    }

    /// Message buffer size, clamped to the configured bounds. Messages keep
    /// at most `buffer_size - 1` bytes.
    pub fn set_buffer_size(&mut self, size: usize) {
        self.buffer_size = config::clamp_buffer_size(size);
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    // ========== Tag colors ==========

    pub fn set_tag_color(&mut self, tag: &str, color: Color) {
        if tag.is_empty() {
            return;
        }
        self.tag_colors.insert(tag, color);
    }

    pub fn clear_tag_color(&mut self, tag: &str) {
        self.tag_colors.remove(tag);
    }

    pub fn clear_all_tag_colors(&mut self) {
        self.tag_colors.clear();
    }

    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_colors.get(tag).unwrap_or_default()
    }

    // ========== Tag filtering ==========

    pub fn enable_tag(&mut self, tag: &str) {
        self.tag_filter.enable(tag);
    }

    pub fn disable_tag(&mut self, tag: &str) {
        self.tag_filter.disable(tag);
    }

    pub fn enable_all_tags(&mut self) {
        self.tag_filter.to_allow_all();
    }

    pub fn disable_all_tags(&mut self) {
        self.tag_filter.to_empty_whitelist();
    }

    pub fn is_tag_enabled(&self, tag: &str) -> bool {
        !TAG_FILTERING_ENABLED || self.tag_filter.is_enabled(tag)
    }

    pub fn clear_tag_filters(&mut self) {
        self.tag_filter.clear();
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.tag_filter.mode()
    }

    // ========== Library identity ==========

    /// Sets the name of the library currently logging. `None` or an empty
    /// name clears it; longer names are truncated.
    pub fn set_library_name(&mut self, name: Option<&str>) {
        match name {
            Some(name) => self.library_name = FixedStr::truncated(name),
            None => self.library_name.clear(),
        }
    }

    pub fn library_name(&self) -> &str {
        self.library_name.as_str()
    }

    /// Shows or hides the library segment. Hidden by default; meant to be
    /// decided by the host application.
    pub fn enable_library_tags(&mut self, enabled: bool) {
        self.library_tags = enabled;
    }

    pub fn is_library_tags_enabled(&self) -> bool {
        self.library_tags
    }

    pub fn set_library_color(&mut self, name: &str, color: Color) {
        if name.is_empty() {
            return;
        }
        self.library_colors.insert(name, color);
    }

    pub fn clear_library_color(&mut self, name: &str) {
        self.library_colors.remove(name);
    }

    pub fn clear_all_library_colors(&mut self) {
        self.library_colors.clear();
    }

    pub fn library_color(&self, name: &str) -> Color {
        self.library_colors.get(name).unwrap_or_default()
    }

    pub fn saturation(&self) -> Saturation {
        Saturation {
            tag_filters: self.tag_filter.saturation(),
            tag_colors: self.tag_colors.saturation(),
            library_colors: self.library_colors.saturation(),
        }
    }

    // ========== Platform ==========

    /// Resolves the platform from the compilation target.
    pub fn init(&mut self) {
        self.init_with_platform(Platform::AutoDetect);
    }

    /// Sets the platform and resets the buffer size to its default.
    pub fn init_with_platform(&mut self, platform: Platform) {
        self.set_platform(platform);
        self.buffer_size = config::platform_buffer_size(platform);
        self.flush();
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform.name()
    }

    pub fn is_arduino_platform(&self) -> bool {
        self.platform.is_arduino()
    }

    pub fn is_desktop_platform(&self) -> bool {
        self.platform.is_desktop()
    }

    pub fn is_embedded_platform(&self) -> bool {
        self.platform.is_embedded()
    }

    pub fn has_color_support(&self) -> bool {
        self.platform.has_color_support()
    }

    pub fn has_printf_support(&self) -> bool {
        self.platform.has_printf_support()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use clogger_core::{LogMemory, OwnedLogMessage};

    use super::*;

    fn capturing() -> (Logger, Arc<Mutex<Vec<OwnedLogMessage>>>) {
        let seen: Arc<Mutex<Vec<OwnedLogMessage>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let mut logger = Logger::new();
        logger.set_callback(Some(Box::new(move |message: &LogMessage<'_>| {
            sink.lock().unwrap().push(message.to_owned_message());
        })));
        (logger, seen)
    }

    fn console() -> (Logger, LogMemory) {
        let memory = LogMemory::new();
        let mut logger = Logger::new();
        logger.set_writer(memory.clone());
        logger.set_colors(false);
        (logger, memory)
    }

    fn messages(seen: &Arc<Mutex<Vec<OwnedLogMessage>>>) -> Vec<(Level, String, String)> {
        seen.lock()
            .unwrap()
            .iter()
            .map(|m| (m.level, m.tag.clone(), m.message.clone()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.has_callback());
        assert!(logger.is_direct_output_enabled());
        assert_eq!(logger.filter_mode(), FilterMode::AllowAll);
        assert!(!logger.is_library_tags_enabled());
        assert_eq!(logger.library_name(), "");
        assert_eq!(logger.saturation(), Saturation::default());
    }

    #[test]
    fn test_threshold_warn_scenario() {
        let (mut logger, seen) = capturing();
        logger.set_level(Level::Warn);
        logger.error("T", format_args!("e"));
        logger.warn("T", format_args!("w"));
        logger.info("T", format_args!("i"));
        assert_eq!(
            messages(&seen),
            vec![
                (Level::Error, "T".to_string(), "e".to_string()),
                (Level::Warn, "T".to_string(), "w".to_string()),
            ]
        );
    }

    #[test]
    fn test_level_monotonicity() {
        for threshold in Level::ALL {
            let (mut logger, seen) = capturing();
            logger.set_level(threshold);
            for level in Level::ALL {
                logger.log(level, "T", format_args!("{level}"));
            }
            let emitted: Vec<Level> = messages(&seen).into_iter().map(|m| m.0).collect();
            let expected: Vec<Level> = Level::ALL
                .into_iter()
                .filter(|level| *level <= threshold)
                .collect();
            assert_eq!(emitted, expected, "threshold {threshold}");
        }
    }

    #[test]
    fn test_whitelist_scenario_keeps_call_order() {
        let (mut logger, seen) = capturing();
        logger.disable_all_tags();
        logger.enable_tag("DB");
        logger.enable_tag("SEC");
        for tag in ["DB", "NET", "SEC", "UI"] {
            logger.info(tag, format_args!("from {tag}"));
        }
        let tags: Vec<String> = messages(&seen).into_iter().map(|m| m.1).collect();
        assert_eq!(tags, vec!["DB", "SEC"]);
    }

    #[test]
    fn test_filter_mode_transitions() {
        let mut logger = Logger::new();
        logger.enable_tag("A");
        assert!(!logger.is_tag_enabled("B"));
        assert_eq!(logger.filter_mode(), FilterMode::Whitelist);

        let mut logger = Logger::new();
        logger.disable_tag("A");
        assert!(logger.is_tag_enabled("B"));
        assert_eq!(logger.filter_mode(), FilterMode::Blacklist);

        logger.enable_all_tags();
        assert!(logger.is_tag_enabled("A"));
        assert_eq!(logger.filter_mode(), FilterMode::AllowAll);
    }

    #[test]
    fn test_clear_tag_filters_keeps_mode() {
        let mut logger = Logger::new();
        logger.enable_tag("A");
        logger.clear_tag_filters();
        assert_eq!(logger.filter_mode(), FilterMode::Whitelist);
        assert!(!logger.is_tag_enabled("A"));
    }

    #[test]
    fn test_printf_style_formatting() {
        let (mut logger, seen) = capturing();
        logger.info(
            "Format",
            format_args!(
                "Processing {} items with value {:.2}, status: {}",
                42, 3.14159, "active"
            ),
        );
        logger.info("Format", format_args!("Mixed: {}, {:.1}, {}", 42, 3.14159f32, "world"));
        let seen = messages(&seen);
        assert_eq!(seen[0].2, "Processing 42 items with value 3.14, status: active");
        assert_eq!(seen[1].2, "Mixed: 42, 3.1, world");
    }

    #[test]
    fn test_message_truncated_to_buffer() {
        let (mut logger, seen) = capturing();
        logger.set_buffer_size(64);
        logger.info("T", format_args!("{}", "x".repeat(500)));
        assert_eq!(messages(&seen)[0].2.len(), 63);

        logger.set_buffer_size(1);
        assert_eq!(logger.buffer_size(), config::MIN_BUFFER_SIZE);
    }

    #[test]
    fn test_callback_replaces_console() {
        let (mut logger, memory) = console();
        let seen: Arc<Mutex<Vec<OwnedLogMessage>>> = Arc::default();
        let sink = Arc::clone(&seen);
        logger.set_callback(Some(Box::new(move |message: &LogMessage<'_>| {
            sink.lock().unwrap().push(message.to_owned_message());
        })));
        logger.info("T", format_args!("to callback"));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(memory.is_empty());

        logger.set_callback(None);
        assert!(logger.is_direct_output_enabled());
        logger.info("T", format_args!("to console"));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(memory.lines(), vec!["[INFO ] [T]: to console"]);
    }

    #[test]
    fn test_direct_output_can_be_disabled() {
        let (mut logger, memory) = console();
        logger.enable_direct_output(false);
        logger.error("T", format_args!("dropped"));
        assert!(memory.is_empty());
        logger.enable_direct_output(true);
        logger.error("T", format_args!("kept"));
        assert_eq!(memory.lines(), vec!["[ERROR] [T]: kept"]);
    }

    #[test]
    fn test_library_gate() {
        let (mut logger, seen) = capturing();
        logger.set_library_name(Some("DatabaseLib"));
        logger.info("Init", format_args!("hidden identity"));
        logger.enable_library_tags(true);
        logger.info("Init", format_args!("shown identity"));
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].library, None);
        assert_eq!(seen[0].as_message().to_line(), "[INFO ] [Init]: hidden identity");
        assert_eq!(seen[1].library.as_deref(), Some("DatabaseLib"));
        assert_eq!(
            seen[1].as_message().to_line(),
            "[INFO ] [DatabaseLib][Init]: shown identity"
        );
    }

    #[test]
    fn test_library_segment_on_console() {
        let (mut logger, memory) = console();
        logger.enable_library_tags(true);
        logger.info("HTTP", format_args!("no library yet"));
        logger.set_library_name(Some("NetworkLib"));
        logger.set_library_color("NetworkLib", Color::BrightGreen);
        logger.info("HTTP", format_args!("ready"));
        logger.set_library_name(Some(""));
        logger.info("HTTP", format_args!("cleared"));
        assert_eq!(
            memory.lines(),
            vec![
                "[INFO ] [HTTP]: no library yet",
                "[INFO ] [NetworkLib][HTTP]: ready",
                "[INFO ] [HTTP]: cleared",
            ]
        );
    }

    #[test]
    fn test_library_name_truncated_and_cleared() {
        let mut logger = Logger::new();
        logger.set_library_name(Some(&"Y".repeat(MAX_LIBRARY_NAME_LENGTH + 10)));
        assert_eq!(logger.library_name().len(), MAX_LIBRARY_NAME_LENGTH);
        logger.set_library_name(Some("AuthLib"));
        assert_eq!(logger.library_name(), "AuthLib");
        logger.set_library_name(None);
        assert_eq!(logger.library_name(), "");
    }

    #[test]
    fn test_library_colors() {
        let mut logger = Logger::new();
        logger.set_library_color("", Color::Red);
        assert_eq!(logger.library_color(""), Color::Default);

        for i in 0..config::MAX_LIBRARY_COLORS + 2 {
            logger.set_library_color(&format!("ColorLib{i}"), Color::BrightCyan);
        }
        assert_eq!(logger.library_color("ColorLib0"), Color::BrightCyan);
        assert_eq!(
            logger.library_color(&format!("ColorLib{}", config::MAX_LIBRARY_COLORS)),
            Color::Default
        );
        assert_eq!(logger.saturation().library_colors, 2);

        logger.clear_library_color("ColorLib0");
        assert_eq!(logger.library_color("ColorLib0"), Color::Default);
        logger.clear_all_library_colors();
        assert_eq!(logger.library_color("ColorLib1"), Color::Default);
    }

    #[test]
    fn test_tag_colors_independent_of_filtering() {
        let mut logger = Logger::new();
        logger.set_tag_color("TempTag", Color::BrightRed);
        logger.set_tag_color("TempTag", Color::BrightGreen);
        logger.disable_tag("TempTag");
        assert_eq!(logger.tag_color("TempTag"), Color::BrightGreen);
        logger.enable_all_tags();
        assert_eq!(logger.tag_color("TempTag"), Color::BrightGreen);
        logger.clear_tag_color("TempTag");
        assert_eq!(logger.tag_color("TempTag"), Color::Default);
        logger.set_tag_color("A", Color::Red);
        logger.clear_all_tag_colors();
        assert_eq!(logger.tag_color("A"), Color::Default);
    }

    #[test]
    fn test_off_level_messages_pass_every_threshold() {
        let (mut logger, memory) = console();
        logger.log(Level::Off, "T", format_args!("off-level"));
        logger.set_level(Level::Off);
        logger.error("T", format_args!("suppressed"));
        logger.log(Level::Off, "T", format_args!("still shown"));
        assert_eq!(
            memory.lines(),
            vec!["[?????] [T]: off-level", "[?????] [T]: still shown"]
        );
    }

    #[test]
    fn test_colored_console_output() {
        colored::control::set_override(true);
        let memory = LogMemory::new();
        let mut logger = Logger::new();
        logger.set_writer(memory.clone());
        logger.set_platform(Platform::Linux);
        logger.set_colors(true);
        logger.set_tag_color("Net", Color::BrightCyan);
        logger.set_library_name(Some("NetLib"));
        logger.set_library_color("NetLib", Color::Magenta);
        logger.enable_library_tags(true);
        logger.error("Net", format_args!("link down"));
        logger.info("Plain", format_args!("no tag color"));
        let lines = memory.lines();
        if COLORS_ENABLED {
            assert_eq!(
                lines[0],
                "\x1b[91m[ERROR]\x1b[0m \x1b[35m[NetLib]\x1b[0m\x1b[96m[Net]\x1b[0m: link down"
            );
            assert_eq!(
                lines[1],
                "\x1b[92m[INFO ]\x1b[0m \x1b[35m[NetLib]\x1b[0m[Plain]: no tag color"
            );
        } else {
            assert_eq!(lines[0], "[ERROR] [NetLib][Net]: link down");
        }

        logger.set_colors(false);
        logger.warn("Net", format_args!("plain again"));
        assert_eq!(memory.lines()[2], "[WARN ] [NetLib][Net]: plain again");
    }

    #[test]
    fn test_gate_returns_logger_only_when_enabled() {
        let mut logger = Logger::new();
        logger.disable_tag("Muted");
        assert!(logger.gate(Level::Info, "Shown").is_some());
        assert!(logger.gate(Level::Debug, "Shown").is_none());
        assert!(logger.gate(Level::Error, "Muted").is_none());
    }

    #[test]
    fn test_init_seeds_buffer_size_from_platform() {
        let mut logger = Logger::new();
        assert_eq!(logger.buffer_size(), config::BUFFER_SIZE);
        logger.init_with_platform(Platform::Esp32);
        assert_eq!(logger.buffer_size(), 256);
        logger.set_buffer_size(2048);
        assert_eq!(logger.buffer_size(), 2048);
        logger.init_with_platform(Platform::Linux);
        assert_eq!(logger.buffer_size(), config::BUFFER_SIZE);
    }

    #[test]
    fn test_long_tags_filter_alike() {
        let prefix = "L".repeat(config::MAX_TAG_LENGTH);
        let (mut logger, seen) = capturing();
        logger.enable_tag(&format!("{prefix}-alpha"));
        logger.info(&format!("{prefix}-beta"), format_args!("passes"));
        logger.info("short", format_args!("filtered"));
        let seen = messages(&seen);
        assert_eq!(seen.len(), 1);
        // the emitted tag is the caller's, not the stored prefix
        assert_eq!(seen[0].1, format!("{prefix}-beta"));
    }

    #[test]
    fn test_platform_queries() {
        let mut logger = Logger::new();
        logger.init_with_platform(Platform::Esp32);
        assert_eq!(logger.platform(), Platform::Esp32);
        assert!(logger.is_arduino_platform());
        assert!(logger.is_embedded_platform());
        assert!(!logger.is_desktop_platform());
        assert!(logger.has_printf_support());
        assert!(!logger.has_color_support());
        assert_eq!(logger.platform_name(), "ESP32");

        logger.init();
        assert_eq!(logger.platform(), Platform::AutoDetect);
        assert_eq!(logger.is_desktop_platform(), Platform::detect().is_desktop());
    }

    #[test]
    fn test_no_color_platform_emits_raw_text() {
        let memory = LogMemory::new();
        let mut logger = Logger::new();
        logger.set_writer(memory.clone());
        logger.set_platform(Platform::Rp2040Sdk);
        logger.set_tag_color("Net", Color::Red);
        logger.warn("Net", format_args!("plain"));
        assert_eq!(memory.lines(), vec!["[WARN ] [Net]: plain"]);
    }
}
