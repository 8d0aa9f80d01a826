// Logging bootstrap for forgepool.
//
// Built on the `tracing` ecosystem. The pool itself only emits events; this
// module wires up a global subscriber for binaries, demos and tests that want
// one. Initialization is guarded so repeated calls are harmless.
//
// # Usage
//
// ```rust
// use forgepool::logging;
//
// // Default settings: INFO level, human-readable console output
// logging::init_default();
//
// // Or custom settings
// let config = logging::LogConfig {
//     level: tracing::Level::DEBUG,
//     ..Default::default()
// };
// logging::init(config);
// ```

use std::sync::Once;

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Configuration for the forgepool logging bootstrap.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to display.
    pub level: Level,
    /// Whether to emit JSON instead of human-readable lines.
    pub json_format: bool,
    /// Whether to include file and line information.
    pub show_file_line: bool,
    /// Whether to include thread names and ids. Worker threads are named
    /// from the pool's `thread_name_prefix`, so this is the easiest way to
    /// see which worker ran which job.
    pub show_thread_info: bool,
    /// Target filter expressions ("target=level,target2=level2,...").
    pub target_filters: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            show_file_line: true,
            show_thread_info: true,
            target_filters: None,
        }
    }
}

// Initialization guard to ensure we only initialize once
static INIT: Once = Once::new();

/// Initializes the global tracing subscriber with the given configuration.
///
/// Safe to call multiple times; only the first call takes effect.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let mut env_filter = EnvFilter::from_default_env().add_directive(config.level.into());

        if let Some(filters) = config.target_filters {
            for filter in filters.split(',') {
                if let Ok(directive) = filter.parse() {
                    env_filter = env_filter.add_directive(directive);
                }
            }
        }

        let fmt_layer = fmt::layer()
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_file(config.show_file_line)
            .with_line_number(config.show_file_line)
            .with_thread_names(config.show_thread_info)
            .with_thread_ids(config.show_thread_info);

        let registry = tracing_subscriber::registry().with(env_filter);

        let subscriber: Box<dyn Subscriber + Send + Sync> = if config.json_format {
            Box::new(registry.with(fmt::layer().json().flatten_event(true)))
        } else {
            Box::new(registry.with(fmt_layer))
        };

        if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Error setting global tracing subscriber: {}", err);
        }
    });
}

/// Initializes logging with default settings (INFO level, console output).
pub fn init_default() {
    init(LogConfig::default());
}

/// Initializes logging for development: DEBUG level overall with TRACE for
/// the pool internals, colored output, file/line information.
pub fn init_development() {
    init(LogConfig {
        level: Level::DEBUG,
        target_filters: Some("forgepool=debug,forgepool::pool=trace".to_string()),
        ..Default::default()
    });
}

/// Initializes logging for tests: WARN level only, compact output, so test
/// runs stay quiet unless something goes wrong.
pub fn init_test() {
    init(LogConfig {
        level: Level::WARN,
        json_format: false,
        show_file_line: true,
        show_thread_info: false,
        target_filters: None,
    });
}

// Re-export the most commonly used tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
