use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::{level::Level, platform::Platform};

/// Threshold a fresh logger starts with.
pub const DEFAULT_LEVEL: Level = Level::Info;
/// Size of the message buffer, terminator included. Smaller on embedded
/// targets.
pub const BUFFER_SIZE: usize = if Platform::detect().is_embedded() { 256 } else { 512 };
pub const MIN_BUFFER_SIZE: usize = 64;
pub const MAX_BUFFER_SIZE: usize = 4096;
/// Tags are compared and stored on their first `MAX_TAG_LENGTH` bytes.
pub const MAX_TAG_LENGTH: usize = 31;
pub const MAX_TAG_FILTERS: usize = 16;
pub const MAX_TAG_COLORS: usize = 16;
pub const MAX_LIBRARY_COLORS: usize = 8;
pub const MAX_LIBRARY_NAME_LENGTH: usize = 31;
pub const TAG_FILTERING_ENABLED: bool = cfg!(feature = "tag-filtering");
/// Without the `colors` feature console output is never colorized.
pub const COLORS_ENABLED: bool = cfg!(feature = "colors");

const _: () = {
    assert!(BUFFER_SIZE >= MIN_BUFFER_SIZE && BUFFER_SIZE <= MAX_BUFFER_SIZE);
    assert!(MAX_TAG_LENGTH >= 4);
    assert!(MAX_TAG_FILTERS >= 1);
};

/// Runtime overrides, read from `CLOGGER_*` environment variables.
///
/// Every variable is kept as text and parsed on its own, so one bad value only
/// falls back to its own default.
#[derive(FromEnv)]
#[from_env(prefix = "CLOGGER")]
#[allow(non_snake_case)]
pub struct ClogConfig {
    #[from_env(default = "INFO")]
    pub LEVEL: String,
    #[from_env(default = "auto")]
    pub BUFFER_SIZE: String,
    #[from_env(default = "true")]
    pub COLORS: String,
    #[from_env(default = "false")]
    pub TIMESTAMPS: String,
    #[from_env(default = "false")]
    pub LIBRARY_TAGS: String,
    #[from_env(default = "AUTO_DETECT")]
    pub PLATFORM: String,
}

impl Default for ClogConfig {
    fn default() -> Self {
        Self {
            LEVEL: DEFAULT_LEVEL.name().into(),
            BUFFER_SIZE: "auto".into(),
            COLORS: "true".into(),
            TIMESTAMPS: "false".into(),
            LIBRARY_TAGS: "false".into(),
            PLATFORM: "AUTO_DETECT".into(),
        }
    }
}

fn parse_flag(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

impl ClogConfig {
    /// Configured threshold; an unparsable value falls back to [`DEFAULT_LEVEL`].
    pub fn level(&self) -> Level {
        self.LEVEL.parse().unwrap_or(DEFAULT_LEVEL)
    }

    /// Explicit buffer size, clamped. `None` when unset or unparsable, in which
    /// case the platform default applies.
    pub fn buffer_size(&self) -> Option<usize> {
        self.BUFFER_SIZE.trim().parse().ok().map(clamp_buffer_size)
    }

    pub fn colors(&self) -> bool {
        parse_flag(&self.COLORS, true)
    }

    pub fn timestamps(&self) -> bool {
        parse_flag(&self.TIMESTAMPS, false)
    }

    pub fn library_tags(&self) -> bool {
        parse_flag(&self.LIBRARY_TAGS, false)
    }

    pub fn platform(&self) -> Platform {
        self.PLATFORM.parse().unwrap_or_default()
    }
}

pub static CLOGGER_CONFIG: LazyLock<ClogConfig> =
    LazyLock::new(|| ClogConfig::from_env().unwrap_or_default());

pub fn clamp_buffer_size(size: usize) -> usize {
    size.clamp(MIN_BUFFER_SIZE, MAX_BUFFER_SIZE)
}

/// Buffer size a logger starts with on `platform`: its default, capped by
/// [`BUFFER_SIZE`].
pub fn platform_buffer_size(platform: Platform) -> usize {
    clamp_buffer_size(platform.default_buffer_size().min(BUFFER_SIZE))
}

/// Human-readable summary of the compile-time configuration.
pub fn summary() -> String {
    let on_off = |enabled: bool| if enabled { "enabled" } else { "disabled" };
    [
        "clogger configuration:".to_string(),
        format!("  Default Level: {DEFAULT_LEVEL}"),
        format!("  Compile-time Max Level: {}", crate::level::STATIC_MAX_LEVEL),
        format!("  Buffer Size: {BUFFER_SIZE} bytes"),
        format!("  Max Tag Length: {MAX_TAG_LENGTH} chars"),
        format!("  Max Tag Filters: {MAX_TAG_FILTERS}"),
        format!("  Max Tag Colors: {MAX_TAG_COLORS}"),
        format!("  Max Library Colors: {MAX_LIBRARY_COLORS}"),
        format!("  Max Library Name Length: {MAX_LIBRARY_NAME_LENGTH} chars"),
        format!("  Tag Filtering: {}", on_off(TAG_FILTERING_ENABLED)),
        format!("  Colors: {}", on_off(COLORS_ENABLED)),
        format!("  Platform: {}", Platform::detect()),
    ]
    .join("\n")
}

#[test]
fn test_config_defaults() {
    let config = ClogConfig::default();
    assert_eq!(config.level(), Level::Info);
    assert_eq!(config.buffer_size(), None);
    assert!(config.colors());
    assert!(!config.timestamps());
    assert!(!config.library_tags());
    assert_eq!(config.platform(), Platform::AutoDetect);
}

#[test]
fn test_config_fallbacks() {
    let config = ClogConfig {
        LEVEL: "chatty".into(),
        BUFFER_SIZE: "1".into(),
        PLATFORM: "amiga".into(),
        COLORS: "maybe".into(),
        ..ClogConfig::default()
    };
    assert_eq!(config.level(), DEFAULT_LEVEL);
    assert_eq!(config.buffer_size(), Some(MIN_BUFFER_SIZE));
    assert_eq!(config.platform(), Platform::AutoDetect);
    assert!(config.colors());
    assert_eq!(clamp_buffer_size(1 << 20), MAX_BUFFER_SIZE);
}

#[test]
fn test_bad_variable_keeps_the_others() {
    let config = ClogConfig {
        LEVEL: "TRACE".into(),
        BUFFER_SIZE: "big".into(),
        COLORS: "off".into(),
        TIMESTAMPS: "Yes".into(),
        LIBRARY_TAGS: "1".into(),
        PLATFORM: "esp32".into(),
    };
    assert_eq!(config.level(), Level::Trace);
    assert_eq!(config.buffer_size(), None);
    assert!(!config.colors());
    assert!(config.timestamps());
    assert!(config.library_tags());
    assert_eq!(config.platform(), Platform::Esp32);
}

#[test]
fn test_from_env_parses_each_variable() {
    // SAFETY: no other test in this crate reads or writes CLOGGER_* variables.
    unsafe {
        std::env::set_var("CLOGGER_LEVEL", "TRACE");
        std::env::set_var("CLOGGER_BUFFER_SIZE", "big");
        std::env::set_var("CLOGGER_TIMESTAMPS", "true");
    }
    let config = ClogConfig::from_env().unwrap_or_default();
    unsafe {
        std::env::remove_var("CLOGGER_LEVEL");
        std::env::remove_var("CLOGGER_BUFFER_SIZE");
        std::env::remove_var("CLOGGER_TIMESTAMPS");
    }
    assert_eq!(config.level(), Level::Trace);
    assert_eq!(config.buffer_size(), None);
    assert!(config.timestamps());
}

#[test]
fn test_platform_buffer_size() {
    assert_eq!(platform_buffer_size(Platform::Esp32), 256);
    assert_eq!(platform_buffer_size(Platform::Rp2040Sdk), 256);
    assert_eq!(platform_buffer_size(Platform::Linux), BUFFER_SIZE);
    if !Platform::detect().is_embedded() {
        assert_eq!(BUFFER_SIZE, 512);
    }
}

#[test]
fn test_summary_lists_limits() {
    let summary = summary();
    assert!(summary.contains("Max Tag Filters: 16"));
    assert!(summary.contains("Default Level: INFO"));
    assert!(summary.contains(if COLORS_ENABLED {
        "Colors: enabled"
    } else {
        "Colors: disabled"
    }));
}
