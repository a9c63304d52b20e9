use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const QUIET_DIRECTIVES: &str = "warn";
pub const VERBOSE_DIRECTIVES: &str = "locwrap_text=debug,locwrap_i18n=debug,info";
/// Lets the FOUND/MISSING key lines through and nothing else.
pub const KEY_LOG_DIRECTIVES: &str = "warn,locwrap_i18n::key_log=debug";

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to `default_directives`.
pub fn init(default_directives: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
