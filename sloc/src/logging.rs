//! Process-wide diagnostic sink, configured once before counting starts.

use std::io::Write;

use sloclib::LogLevel;

/// Install the stderr logger at `level`.
///
/// `RUST_LOG` is ignored: the command line is the only source of the level.
pub fn init(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level.to_level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    if builder.try_init().is_err() {
        log::warn!("logger already installed; keeping it");
    }
}
