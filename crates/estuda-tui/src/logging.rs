use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config;

/// Logs go to a file in the data dir so they never bleed into the TUI.
pub fn init() -> color_eyre::Result<()> {
    let diretorio = config::get_data_dir();
    std::fs::create_dir_all(&diretorio)?;
    let arquivo = std::fs::File::create(diretorio.join("estuda.log"))?;

    // RUST_LOG wins; otherwise ESTUDA_LOG_LEVEL is consulted.
    let filtro = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    let filtro = filtro
        .try_from_env()
        .or_else(|_| filtro.with_env_var(config::ENV_LOG_LEVEL).from_env())?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .with_writer(arquivo)
                .with_target(false)
                .with_ansi(false)
                .with_filter(filtro),
        )
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
