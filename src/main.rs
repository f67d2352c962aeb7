use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use irsite::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for irsite::AppCommand {
    fn from(cmd: Commands) -> irsite::AppCommand {
        match cmd {
            Commands::Render => irsite::AppCommand::Render,
            Commands::Theme => irsite::AppCommand::Theme,
            Commands::Css => irsite::AppCommand::Css,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Render every configured site as a JSON page payload
    Render,
    /// Display the resolved style tokens per site
    Theme,
    /// Print the CSS custom properties per site
    Css,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => irsite::cli::setup::setup(),
        Some(cmd) => irsite::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
