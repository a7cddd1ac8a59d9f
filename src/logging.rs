use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Target, WriteStyle};

/// The log lives next to the default reminders file.
pub fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("reminder-tui")
        .join("reminder-tui.log")
}

pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))
}

/// Install the logger writing to `path`. stderr belongs to the terminal UI
/// while it runs, so nothing is logged there. `RUST_LOG` sets the filter.
pub fn init(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;

    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .wrap_err("Failed to install logger")
}
