use env_logger::Env;

/// Configure logging from RUST_LOG, defaulting to info.
pub fn init_from_env() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
