use clogger::{Color, Level, Logger, logger_config};

mod network_lib {
    use clogger::Logger;

    pub fn connect(logger: &mut Logger, host: &str) {
        logger.set_library_name(Some("NetworkLib"));
        clogger::info!(logger, "HTTP", "connecting to {host}");
        clogger::debug!(logger, "TLS", "handshake done");
        logger.set_library_name(None);
    }
}

mod storage_lib {
    use clogger::Logger;

    pub fn open(logger: &mut Logger, path: &str) {
        logger.set_library_name(Some("StorageLib"));
        clogger::info!(logger, "DB", "opened {path}");
        logger.set_library_name(None);
    }
}

fn run(logger: &mut Logger) {
    network_lib::connect(logger, "example.org");
    storage_lib::open(logger, "/var/lib/app.db");
    clogger::info!(logger, "Main", "ready");
}

fn main() {
    let mut logger = logger_config().with_level(Level::Debug).build();

    println!("-- library tags hidden (default) --");
    run(&mut logger);

    println!("\n-- library tags shown --");
    logger.enable_library_tags(true);
    logger.set_library_color("NetworkLib", Color::BrightGreen);
    logger.set_library_color("StorageLib", Color::BrightMagenta);
    run(&mut logger);

    let saturation = logger.saturation();
    println!(
        "\nrejected inserts: {} filters, {} tag colors, {} library colors",
        saturation.tag_filters, saturation.tag_colors, saturation.library_colors
    );
}
