use std::sync::{Arc, Mutex};

use clogger::{Level, LogMessage, OwnedLogMessage, logger_config};

fn main() {
    let captured: Arc<Mutex<Vec<OwnedLogMessage>>> = Arc::default();
    let sink = Arc::clone(&captured);

    let mut logger = logger_config()
        .with_level(Level::Debug)
        .with_callback(move |message: &LogMessage<'_>| {
            sink.lock().unwrap().push(message.to_owned_message());
        })
        .build();

    clogger::info!(logger, "Sensor", "temperature {:.1}C", 21.46);
    clogger::debug!(logger, "Sensor", "raw reading {:#06x}", 0x1a2b);
    clogger::warn!(logger, "Radio", "retry {} of {}", 2, 5);

    // back to the console
    logger.set_callback(None);
    clogger::info!(logger, "Main", "callback captured {} messages", captured.lock().unwrap().len());

    for message in captured.lock().unwrap().iter() {
        println!("  {}", message.as_message().to_line());
    }
}
