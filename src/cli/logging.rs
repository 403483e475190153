use env_logger::Env;

pub fn get_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize env_logger. `RUST_LOG` wins over the verbosity flag.
pub fn setup_logging(verbose: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(get_log_level(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .try_init();
}
