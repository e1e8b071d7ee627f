use ::log::LevelFilter;
use env_logger::Builder;

/// Builds the global logger with a fixed level, writing to stderr so
/// solver output on stdout stays clean. Repeated calls are ignored.
pub fn build_logger_for_level(level: LevelFilter) {
    let _ = Builder::new().filter_level(level).try_init();
}

/// Raises the base level once per `-v` occurrence on the command line.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    let level = (0..verbosity).fold(base, |level, _| more_verbose(level));
    build_logger_for_level(level);
}

fn more_verbose(level: LevelFilter) -> LevelFilter {
    match level {
        LevelFilter::Off => LevelFilter::Error,
        LevelFilter::Error => LevelFilter::Warn,
        LevelFilter::Warn => LevelFilter::Info,
        LevelFilter::Info => LevelFilter::Debug,
        LevelFilter::Debug | LevelFilter::Trace => LevelFilter::Trace,
    }
}
