use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber for the command-line tool.
///
/// `RUST_LOG` wins over `default_directive`. Logs go to stderr so that
/// score output on stdout stays machine-readable.
pub fn init_tracing(default_directive: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let json_layer = json.then(|| {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .json()
    });
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
