use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialize the logger. `RUST_LOG` overrides the level picked from `verbose`.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // A second init (tests, embedding) is not an error worth surfacing
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
