mod app;
mod cli;
mod commands;
mod render;
mod settings;

use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use kodomotrip_core::Scope;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so listings on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Version = cli.command {
        return commands::version::run();
    }

    let app = App::open(cli.data_dir.as_deref(), cli.catalog.as_deref())?;

    match cli.command {
        Commands::Visit => commands::prompt::run_visit(&app),
        Commands::Dismiss => commands::prompt::run_dismiss(&app),
        Commands::Close => commands::prompt::run_close(&app),
        Commands::Status => commands::prompt::run_status(&app),
        Commands::Places { filter } => commands::list::run(&app, &filter, Scope::Outing),
        Commands::Events { filter } => commands::list::run(&app, &filter, Scope::Event),
        Commands::Show { place_id } => commands::show::run(&app, &place_id),
        Commands::Version => commands::version::run(),
    }
}
