// tracing -> browser console bridge

use std::io::{self, Write};

use tracing::Level;

/// Collects one formatted event and forwards it to the console on flush.
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim();
        let js = wasm_bindgen::JsValue::from_str(line);
        if line.starts_with("ERROR") {
            web_sys::console::error_1(&js);
        } else if line.starts_with("WARN") {
            web_sys::console::warn_1(&js);
        } else {
            web_sys::console::log_1(&js);
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Install the global subscriber. Timestamps are off: `std::time` is not
/// available on wasm32-unknown-unknown.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::default)
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .try_init();
}
