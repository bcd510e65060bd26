use std::fmt;
use std::io::Write;
use std::sync::Arc;

use env_logger::{Builder, Env};
use log::{Level, Log, Record};

/// Logger name used for every line the platform emits.
pub const LOGGER_NAME: &str = "vsan_learning_platform";

/// Logging handle handed to the application and its stages.
///
/// Records go straight into the wrapped sink, so nothing is registered with the
/// `log` crate's global facade and tests can swap in a capturing sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Log>,
    name: String,
}

impl Logger {
    pub fn new(sink: Arc<dyn Log>, name: &str) -> Self {
        Logger {
            sink,
            name: name.to_string(),
        }
    }

    /// Builds a stderr logger filtered by `RUST_LOG` (default `info`), formatting lines as
    /// `<timestamp> - <name> - <LEVEL> - <message>`.
    pub fn from_env(name: &str) -> Self {
        let sink = Builder::from_env(Env::default().default_filter_or("info"))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} - {} - {} - {}",
                    buf.timestamp_millis(),
                    record.target(),
                    record.level(),
                    record.args()
                )
            })
            .build();

        Logger::new(Arc::new(sink), name)
    }

    pub fn log(&self, level: Level, args: fmt::Arguments) {
        let record = Record::builder()
            .args(args)
            .level(level)
            .target(&self.name)
            .build();

        if self.sink.enabled(record.metadata()) {
            self.sink.log(&record);
        }
    }

    pub fn debug(&self, args: fmt::Arguments) {
        self.log(Level::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments) {
        self.log(Level::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments) {
        self.log(Level::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments) {
        self.log(Level::Error, args)
    }
}
