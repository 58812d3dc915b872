use std::sync::{Arc, Mutex};

use clogger_core::{CLOGGER_CONFIG, Level, LogMessage, LogWriter, Platform};

use crate::{
    bridge::{self, SharedLogger},
    logger::{Callback, Logger},
};

/// Builder for configuring a [`Logger`]. Starts from the `CLOGGER_*`
/// environment overrides.
pub struct ConfigBuilder {
    level: Level,
    buffer_size: Option<usize>,
    colors: bool,
    timestamps: bool,
    platform: Platform,
    library_name: Option<String>,
    library_tags: bool,
    writer: Option<Box<dyn LogWriter + Send>>,
    callback: Option<Callback>,
    no_stdout: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            level: CLOGGER_CONFIG.level(),
            buffer_size: CLOGGER_CONFIG.buffer_size(),
            colors: CLOGGER_CONFIG.colors(),
            timestamps: CLOGGER_CONFIG.timestamps(),
            platform: CLOGGER_CONFIG.platform(),
            library_name: None,
            library_tags: CLOGGER_CONFIG.library_tags(),
            writer: None,
            callback: None,
            no_stdout: false,
        }
    }
}

impl ConfigBuilder {
    /// Builds the logger.
    pub fn build(self) -> Logger {
        let Self {
            level,
            buffer_size,
            colors,
            timestamps,
            platform,
            library_name,
            library_tags,
            writer,
            callback,
            no_stdout,
        } = self;
        let mut logger = Logger::new();
        logger.set_level(level);
        logger.init_with_platform(platform);
        if let Some(buffer_size) = buffer_size {
            logger.set_buffer_size(buffer_size);
        }
        logger.set_colors(colors);
        logger.set_timestamps(timestamps);
        logger.set_library_name(library_name.as_deref());
        logger.enable_library_tags(library_tags);
        if let Some(writer) = writer {
            logger.set_writer(writer);
        }
        if callback.is_some() {
            logger.set_callback(callback);
        }
        if no_stdout {
            logger.enable_direct_output(false);
        }
        logger
    }

    /// Builds the logger behind a mutex, for hosts that log from several threads.
    pub fn build_shared(self) -> SharedLogger {
        Arc::new(Mutex::new(self.build()))
    }

    /// Builds a shared logger and installs it as the `log` crate's global
    /// logger.
    pub fn init_global(self) -> Result<SharedLogger, log::SetLoggerError> {
        let logger = self.build_shared();
        bridge::install(Arc::clone(&logger))?;
        Ok(logger)
    }

    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Sets the message buffer size; clamped when the logger is built. Without
    /// it the platform default applies.
    pub fn with_buffer_size(self, buffer_size: usize) -> Self {
        Self {
            buffer_size: Some(buffer_size),
            ..self
        }
    }

    pub fn with_colors(self, colors: bool) -> Self {
        Self { colors, ..self }
    }

    pub fn with_timestamps(self, timestamps: bool) -> Self {
        Self { timestamps, ..self }
    }

    pub fn with_platform(self, platform: Platform) -> Self {
        Self { platform, ..self }
    }

    pub fn with_library_name(self, name: &str) -> Self {
        Self {
            library_name: Some(name.into()),
            ..self
        }
    }

    pub fn with_library_tags(self, library_tags: bool) -> Self {
        Self {
            library_tags,
            ..self
        }
    }

    /// Replaces the console writer (stdout by default).
    pub fn with_writer<W: LogWriter + Send + 'static>(self, writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            ..self
        }
    }

    /// Routes every message to `callback` instead of the console.
    pub fn with_callback<F>(self, callback: F) -> Self
    where
        F: FnMut(&LogMessage<'_>) + Send + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            ..self
        }
    }

    /// Ignore console output
    pub fn no_stdout(self) -> Self {
        Self {
            no_stdout: true,
            ..self
        }
    }
}

/// Returns a ConfigBuilder seeded from the environment.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

#[cfg(test)]
mod tests {
    use clogger_core::{LogMemory, OwnedLogMessage, config};

    use super::*;

    #[test]
    fn test_builder_applies_settings() {
        let logger = logger_config()
            .with_level(Level::Trace)
            .with_buffer_size(100_000)
            .with_colors(false)
            .with_timestamps(true)
            .with_platform(Platform::Rp2040Sdk)
            .with_library_name("SensorLib")
            .with_library_tags(true)
            .build();
        assert_eq!(logger.level(), Level::Trace);
        assert_eq!(logger.buffer_size(), config::MAX_BUFFER_SIZE);
        assert!(!logger.colors_enabled());
        assert!(logger.timestamps_enabled());
        assert_eq!(logger.platform(), Platform::Rp2040Sdk);
        assert_eq!(logger.library_name(), "SensorLib");
        assert!(logger.is_library_tags_enabled());
        assert!(logger.is_direct_output_enabled());
    }

    #[test]
    fn test_buffer_size_follows_platform_unless_set() {
        let logger = logger_config().with_platform(Platform::Esp8266).build();
        if CLOGGER_CONFIG.buffer_size().is_none() {
            assert_eq!(logger.buffer_size(), 256);
        }
        let logger = logger_config()
            .with_platform(Platform::Esp8266)
            .with_buffer_size(1024)
            .build();
        assert_eq!(logger.buffer_size(), 1024);
    }

    #[test]
    fn test_builder_with_writer() {
        let memory = LogMemory::new();
        let mut logger = logger_config()
            .with_level(Level::Info)
            .with_colors(false)
            .with_timestamps(false)
            .with_library_tags(false)
            .with_writer(memory.clone())
            .build();
        logger.info("Main", format_args!("hello {}", 1));
        logger.debug("Main", format_args!("hidden"));
        assert_eq!(memory.lines(), vec!["[INFO ] [Main]: hello 1"]);
    }

    #[test]
    fn test_builder_with_callback() {
        let seen: Arc<Mutex<Vec<OwnedLogMessage>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let memory = LogMemory::new();
        let mut logger = logger_config()
            .with_level(Level::Info)
            .with_writer(memory.clone())
            .with_callback(move |message: &LogMessage<'_>| {
                sink.lock().unwrap().push(message.to_owned_message());
            })
            .build();
        assert!(logger.has_callback());
        assert!(!logger.is_direct_output_enabled());
        logger.warn("Cb", format_args!("routed"));
        assert_eq!(seen.lock().unwrap()[0].message, "routed");
        assert!(memory.is_empty());
    }

    #[test]
    fn test_no_stdout() {
        let memory = LogMemory::new();
        let mut logger = logger_config()
            .with_level(Level::Info)
            .with_writer(memory.clone())
            .no_stdout()
            .build();
        logger.error("T", format_args!("dropped"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_build_shared() {
        let memory = LogMemory::new();
        let logger = logger_config()
            .with_level(Level::Info)
            .with_colors(false)
            .with_timestamps(false)
            .with_library_tags(false)
            .with_writer(memory.clone())
            .build_shared();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    logger.lock().unwrap().info("Thread", format_args!("worker {i}"));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let mut lines = memory.lines();
        lines.sort();
        assert_eq!(
            lines,
            (0..4)
                .map(|i| format!("[INFO ] [Thread]: worker {i}"))
                .collect::<Vec<_>>()
        );
    }
}
