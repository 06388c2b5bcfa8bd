//! Logging setup.
//!
//! Components only emit `tracing` events. The process entry point builds the
//! subscriber here and decides where it lives: installed globally for the
//! binary, or scoped to a thread with `tracing::subscriber::with_default`
//! over a [`LogBuffer`] in tests.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set and valid, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Build a formatted subscriber writing to `writer`.
pub fn build_subscriber<W>(
    filter: EnvFilter,
    writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// In-memory log sink.
///
/// Clones share the same buffer, so one handle can be given to the
/// subscriber and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Lines logged at exactly `level`.
    pub fn lines_at(&self, level: Level) -> Vec<String> {
        let level = level.as_str();
        self.contents()
            .lines()
            .filter(|line| line.split_whitespace().nth(1) == Some(level))
            .map(str::to_owned)
            .collect()
    }

    /// Number of lines logged at exactly `level`.
    pub fn count(&self, level: Level) -> usize {
        self.lines_at(level).len()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_captures_levels() {
        let logs = LogBuffer::new();
        let subscriber = build_subscriber(EnvFilter::new("info"), logs.clone(), false);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first");
            tracing::warn!("second");
            tracing::error!("third");
            tracing::debug!("filtered out");
        });

        assert_eq!(logs.count(Level::INFO), 1);
        assert_eq!(logs.count(Level::WARN), 1);
        assert_eq!(logs.count(Level::ERROR), 1);
        assert_eq!(logs.count(Level::DEBUG), 0);
        assert!(logs.lines_at(Level::ERROR)[0].contains("third"));
    }
}
