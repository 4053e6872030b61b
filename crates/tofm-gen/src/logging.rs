//! Stderr logging for the generator binary.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Starts the logger; `RUST_LOG` overrides the level picked from `verbose`.
///
/// The returned handle must stay alive for the duration of the process.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle, String> {
    let level = if verbose { "debug" } else { "info" };
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|err| format!("invalid log specification: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;
    info!(
        "event=app_start module=cli version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
