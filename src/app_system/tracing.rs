/// Configure structured logging for the application.
///
/// Reads `RUST_LOG` (default `info`):
///
/// ```bash
/// RUST_LOG=debug cargo run -- show                      # Show debug logs
/// RUST_LOG=cart_store::actors=debug cargo run -- add 1  # Only the cart service
/// ```
///
/// Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
