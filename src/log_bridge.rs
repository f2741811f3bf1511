//! Buffers core log lines so the host UI can drain them and show them in its
//! own console. Lines also go through the `log` crate for native consumers.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static CORE_LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 200;

fn should_buffer(s: &str) -> bool {
    let lower = s.to_lowercase();
    // Always keep errors and failed requests.
    if lower.contains("error") || lower.contains("failed") {
        return true;
    }
    // Keep the category-flow lines; drop the rest to reduce noise.
    lower.contains("load_categories") || lower.contains("create_category")
}

/// Push a log line. Called by the core_log! macro.
pub fn push(s: String) {
    log::info!("{}", s);
    if !should_buffer(&s) {
        return;
    }
    if let Ok(mut v) = CORE_LOG_BUFFER.lock() {
        v.push(s);
        let n = v.len();
        if n > MAX_BUFFER_LEN {
            v.drain(0..n - MAX_BUFFER_LEN);
        }
    }
}

/// Drain and clear buffered log lines. The host polls this alongside
/// `drain_notifications`.
pub fn drain_core_logs() -> Vec<String> {
    CORE_LOG_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}

#[macro_export]
macro_rules! core_log {
    ($($t:tt)*) => {
        $crate::log_bridge::push(format!($($t)*))
    };
}
