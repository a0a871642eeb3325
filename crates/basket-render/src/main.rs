//! Print the control grid of a basket-shaped NURBS surface as markup.
//!
//! Takes no arguments. Markup goes to stdout; logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use basket_render::emit_basket;
use basket_types::BasketConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = BasketConfig::default();
    tracing::info!(
        degree_u = config.degree_u,
        rings = config.rings.len(),
        "generating basket net"
    );

    let stdout = io::stdout();
    match emit_basket(&config, BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
