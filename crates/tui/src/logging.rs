use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Send log output to a file in the temp dir, since the UI owns the terminal
///
/// Returns the log file path. The filter defaults to `info` and can be
/// overridden with `RUST_LOG`.
pub fn setup_logging() -> io::Result<PathBuf> {
    let log_path = std::env::temp_dir().join("strummer.log");

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(
                buf,
                "[{}] [{}] [{}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(log_path)
}
