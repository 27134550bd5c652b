//! Logging setup.
//!
//! Console logging goes through `env_logger`, filtered by `RUST_LOG`. When a log file is
//! configured, every record is also appended to that file, and each line carries a timestamp:
//! `[2024-01-01T12:00:00.000Z] info: message`.

use anyhow::{Context, Result as AnyhowResult};
use chrono::{DateTime, SecondsFormat, Utc};
use env_logger::{Builder, Target};
use log::Level;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Formats one timestamped log line, without the trailing newline.
pub fn format_line(timestamp: DateTime<Utc>, level: Level, message: impl Display) -> String {
    format!(
        "[{}] {}: {}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        level.as_str().to_lowercase(),
        message
    )
}

/// Writer that copies everything to two underlying writers.
pub struct Tee<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
    /// Wraps two writers; every write goes to `first`, then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Installs the global logger.
///
/// Without `log_file` this is the plain `env_logger` console setup. With it, the file (and its
/// parent directory) is created if missing, records are appended to it, and the console receives
/// the same timestamped lines.
pub fn init(log_file: Option<&Path>) -> AnyhowResult<()> {
    let mut builder = Builder::from_default_env();

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .context(format!("Failed to open log file {}", path.display()))?;

        builder
            .format(|buf, record| {
                writeln!(buf, "{}", format_line(Utc::now(), record.level(), record.args()))
            })
            .target(Target::Pipe(Box::new(Tee::new(io::stderr(), file))));
    }

    builder.try_init().context("Failed to initialize logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(
            format_line(timestamp, Level::Info, "Server is running"),
            "[2024-03-05T07:08:09.000Z] info: Server is running"
        );
        assert_eq!(
            format_line(timestamp, Level::Error, format_args!("code {}", 500)),
            "[2024-03-05T07:08:09.000Z] error: code 500"
        );
    }

    #[test]
    fn test_tee_writes_both() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        {
            let mut tee = Tee::new(&mut first, &mut second);
            writeln!(tee, "hello").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(first, b"hello\n");
        assert_eq!(second, b"hello\n");
    }

    #[test]
    fn test_tee_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();
        let mut tee = Tee::new(io::sink(), file);
        let line = format_line(Utc::now(), Level::Warn, "disk almost full");
        writeln!(tee, "{}", line).unwrap();
        tee.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('['));
        assert!(content.ends_with("] warn: disk almost full\n"));
    }
}
