//! Debug-build logging
//!
//! The terminal belongs to the TUI, so log records go to
//! `<cache_dir>/quickreply/quickreply.log`, truncated on every start.
//! `RUST_LOG` picks the filter; without it this crate logs at debug level.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

const LOG_DIR: &str = "quickreply";
const LOG_FILE: &str = "quickreply.log";
const DEFAULT_FILTER: &str = "quickreply=debug";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the file logger. Failing to set it up only disables logging.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_FILTER),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init();
}
