use env_logger::{Env, Target};

/// Initialize global logger using `env_logger`.
///
/// `RUST_LOG` wins when set. Otherwise `verbosity` picks the level: 0 is
/// `info`, 1 is `debug` (per-cycle states), 2 or more is `trace`. Output
/// goes to stderr so the rendered histories on stdout stay clean.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    // Ignore errors if the logger was already initialized
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init();
}
