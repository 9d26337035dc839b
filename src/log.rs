pub use tracing::{debug, error, info, warn};
use {
    crate::error::{Error, Result},
    tracing_appender::non_blocking::WorkerGuard,
    tracing_subscriber::{prelude::*, EnvFilter},
};

pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
    ///
    /// Safe to call more than once per process: later calls keep the first subscriber.
    pub fn init(level: &str) -> Result<Self> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| Error::Logger(e.to_string()))?;

        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_writer(writer),
            )
            .try_init()
            .is_ok();

        Ok(Self {
            guard: installed.then_some(guard),
        })
    }

    pub fn stop(&mut self) {
        // Dropping the guard flushes the non-blocking writer.
        self.guard.take();
    }
}
