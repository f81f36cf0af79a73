use clap::Parser;

mod api;
mod app;
mod cli;
mod config;
mod errors;
mod logging;
mod models;
mod pomodoro;
mod tui;
mod ui;
mod ws;

use app::App;
use cli::Cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    errors::init()?;
    logging::init()?;

    let args = Cli::parse();
    let mut app = App::new(args.tick_rate, &args.server);
    app.run().await?;
    Ok(())
}
