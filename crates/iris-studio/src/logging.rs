use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "iris_core=debug,iris_store=info"). `color` controls ANSI styling of the
/// log lines themselves; the preview renderer makes its own choice.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub color: bool,
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            // Log lines go to stderr, panels to stdout, so info is safe.
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(if config.color {
            env_logger::WriteStyle::Auto
        } else {
            env_logger::WriteStyle::Never
        });

        builder.init();

        log::debug!("logging initialized");
    });
}
