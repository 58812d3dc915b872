use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clogger_core::{Level, STATIC_MAX_LEVEL};
use log::Log;

use crate::logger::Logger;

/// A logger shared between threads.
pub type SharedLogger = Arc<Mutex<Logger>>;

/// Routes `log` crate records into a [`SharedLogger`], the record target
/// acting as the tag.
#[derive(Clone)]
pub struct LogBridge {
    logger: SharedLogger,
}

impl LogBridge {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    fn lock(&self) -> MutexGuard<'_, Logger> {
        self.logger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.lock().enabled(metadata.level().into(), metadata.target())
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        self.lock().log(level, record.target(), *record.args());
    }

    fn flush(&self) {
        self.lock().flush();
    }
}

pub(crate) fn install(logger: SharedLogger) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(STATIC_MAX_LEVEL.to_level_filter());
    Ok(())
}
