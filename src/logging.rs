//! Logger setup shared by all executables.

use log::LevelFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "LGL_LOG";

/// Installs a [`fern`] logger writing `[HH:MM:SS LEVEL target] message` lines
/// to stdout.
pub fn init(configured: LevelFilter) -> Result<(), log::SetLoggerError> {
    let level = resolve_level(configured, std::env::var(LOG_ENV).ok().as_deref());
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}

fn resolve_level(configured: LevelFilter, env: Option<&str>) -> LevelFilter {
    env.and_then(|value| value.trim().parse().ok())
        .unwrap_or(configured)
}
