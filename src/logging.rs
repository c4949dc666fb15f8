//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging with a default filter level. Safe to call more than
/// once; later calls are no-ops.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
