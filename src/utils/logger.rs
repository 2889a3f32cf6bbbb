use std::io;
use tracing_subscriber::fmt::{
    self,
    format::{DefaultFields, Format},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "yaf_reader=debug,info"
    } else {
        "yaf_reader=info"
    }
}

/// Shared fmt layer settings; stdout carries the report, so logs go to stderr.
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> io::Stderr> {
    fmt::layer()
        .with_writer(io::stderr as fn() -> io::Stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber. `json` switches to one JSON object per event.
pub fn init_cli_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // Option<Layer> is a no-op when None
    let (json_layer, compact_layer) = if json {
        (Some(stderr_layer().json()), None)
    } else {
        (None, Some(stderr_layer().compact()))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}
