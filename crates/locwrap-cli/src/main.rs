#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = locwrap_cli::run_from_env() {
        tracing::debug!(?error, "command failed");
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
