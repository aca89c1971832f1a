//! Logging support.
//!
//! This module provides tracing functionality when the `tracing` feature is
//! enabled, and provides no-op implementations when it's disabled, so the
//! rest of the crate can log unconditionally.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::filter::LevelFilter;

    use crate::config::Verbosity;

    fn level_filter(verbosity: Verbosity) -> LevelFilter {
        match verbosity {
            Verbosity::Quiet => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::WARN,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }

    /// Installs a stderr subscriber. Only the first call in a process has
    /// any effect, and an already installed global subscriber is left alone.
    pub fn init_tracing(verbosity: Verbosity) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level_filter(verbosity))
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
        });
    }

    /// Runs `f` with a trace-level subscriber that writes into a buffer and
    /// returns the formatted output.
    #[cfg(test)]
    pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        use std::{
            io,
            sync::{Arc, Mutex},
        };

        #[derive(Clone)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Buffer {
            fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer(Arc::new(Mutex::new(Vec::new())));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        (result, output)
    }

}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use crate::config::Verbosity;

    pub fn init_tracing(_verbosity: Verbosity) {
        // No-op when tracing is disabled
    }

    macro_rules! debug {
        ($($fields:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($fields:tt)*) => {{}};
    }

    macro_rules! info_span {
        ($($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

// Re-export tracing macros for convenience
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
