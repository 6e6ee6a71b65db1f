//! Browser logging. Events go through a `tracing-subscriber` registry whose
//! `fmt` layer writes each formatted line to the developer console, routed to
//! `console.error`/`warn`/`info`/`debug` by level. The default level comes from
//! `AppConfig::log_level` and accepts names or numbers (0 = error .. 4 = trace).

use tracing::Level;

/// Parses a configured verbosity level.
pub fn parse_level(value: &str) -> Option<Level> {
    if let Ok(parsed) = value.trim().parse::<u8>() {
        return match parsed {
            0 => Some(Level::ERROR),
            1 => Some(Level::WARN),
            2 => Some(Level::INFO),
            3 => Some(Level::DEBUG),
            4 | 5 => Some(Level::TRACE),
            _ => None,
        };
    }

    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Installs the global subscriber. Safe to call once per page load.
#[cfg(target_arch = "wasm32")]
pub fn init(level: &str) {
    use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

    let verbosity_level = parse_level(level).unwrap_or(Level::INFO);

    let fmt_layer = fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(console::ConsoleMakeWriter);

    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .parse_lossy("");

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        web_sys::console::warn_1(&format!("logging already initialized: {err}").into());
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            let value = wasm_bindgen::JsValue::from_str(line);
            if self.level == Level::ERROR {
                web_sys::console::error_1(&value);
            } else if self.level == Level::WARN {
                web_sys::console::warn_1(&value);
            } else if self.level == Level::INFO {
                web_sys::console::info_1(&value);
            } else {
                web_sys::console::debug_1(&value);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}
