use log::LevelFilter;

/// Initialize logging for crossgrid binaries.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info` level.
/// - `RUST_LOG`, when set, overrides those defaults (e.g. `RUST_LOG=crossgrid=trace`
///   to see every rejected candidate).
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second initialisation (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Native logger initialized at {level:?} level");
    }
}
