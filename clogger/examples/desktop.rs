use clogger::{Color, Level, logger_config};

fn main() {
    let mut logger = logger_config().with_level(Level::Trace).build();
    logger.init();

    println!("{}\n", clogger::config::summary());
    println!(
        "Running on {} (colors: {}, printf: {})\n",
        logger.platform_name(),
        logger.has_color_support(),
        logger.has_printf_support()
    );

    clogger::error!(logger, "Main", "Something went wrong: {}", "disk full");
    clogger::warn!(logger, "Main", "{}% of quota used", 93);
    clogger::info!(logger, "Main", "Hello, {}!", "world");
    clogger::debug!(logger, "Main", "pi ~= {:.2}", std::f64::consts::PI);
    clogger::trace!(logger, "Main", "entering event loop");

    logger.set_tag_color("Network", Color::BrightCyan);
    logger.set_tag_color("Storage", Color::Magenta);
    clogger::info!(logger, "Network", "listening on {}:{}", "0.0.0.0", 8080);
    clogger::info!(logger, "Storage", "{} blocks free", 1024);

    println!("\n-- whitelist: Network only --");
    logger.disable_all_tags();
    logger.enable_tag("Network");
    clogger::info!(logger, "Network", "shown");
    clogger::info!(logger, "Storage", "hidden");

    println!("\n-- blacklist: everything but Storage --");
    logger.enable_all_tags();
    logger.disable_tag("Storage");
    clogger::info!(logger, "Network", "shown");
    clogger::info!(logger, "Storage", "hidden");

    println!("\n-- threshold WARN --");
    logger.enable_all_tags();
    logger.set_level(Level::Warn);
    clogger::warn!(logger, "Main", "shown");
    clogger::info!(logger, "Main", "hidden");

    let free_blocks = 0;
    clogger::log_assert!(logger, free_blocks > 0, "Main", "{} blocks left", free_blocks);
    logger.flush();
}
