use crate::common::utils::parse_from_env;
use core::sync::atomic::{AtomicU64, Ordering};
use std::{io::Write as _, sync::LazyLock};

/// Debug mode switch, read from environment variable "DEBUG", default to false
pub static DEBUG: LazyLock<bool> = LazyLock::new(|| parse_from_env("DEBUG", false));

/// Global log sequence number
static LOG_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[inline]
fn next_log_seq() -> u64 { LOG_SEQUENCE.fetch_add(1, Ordering::Relaxed) }

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if *$crate::app::lazy::log::DEBUG {
            $crate::app::lazy::log::debug_log(format_args!($($arg)*));
        }
    };
}

pub fn debug_log(args: core::fmt::Arguments<'_>) {
    let seq = next_log_seq();
    let line = format_line(seq, &chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), args);
    // stderr keeps stdout clean for the patched settings
    let _ = std::io::stderr().lock().write_all(line.as_bytes());
}

#[inline]
fn format_line(
    seq: u64,
    timestamp: &dyn core::fmt::Display,
    args: core::fmt::Arguments<'_>,
) -> String {
    format!("{seq} | {timestamp} | {args}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line =
            format_line(7, &"2026-01-02 03:04:05.006", format_args!("{} set", "share_token"));
        assert_eq!(line, "7 | 2026-01-02 03:04:05.006 | share_token set\n");
    }

    #[test]
    fn test_sequence_increases() {
        let first = next_log_seq();
        let second = next_log_seq();
        assert!(second > first);
    }
}
