mod app;
mod cli;
mod render;
mod settings;

use crate::app::App;
use crate::cli::Cli;
use crate::settings::{Settings, init_logger};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    better_panic::install();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    init_logger(settings.log_level);

    let mut app = App::new(settings);
    app.bootstrap()?;
    app.run(cli.actions()).await
}
