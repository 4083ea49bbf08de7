mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mkhelp", version, about = "Render help and docs from annotated Makefiles")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    // `mkhelp [MAKEFILE] [-f FORMAT]` without a subcommand.
    #[command(flatten)]
    docs: DocsArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the documented targets of a Makefile
    Docs(DocsArgs),

    /// Print the standalone awk help script
    Script,

    /// List the supported output formats
    Formats(FormatsArgs),

    /// Validate configuration and print resolved values
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct DocsArgs {
    /// Location of makefile (defaults to the configured makefile, usually ./Makefile)
    pub makefile: Option<PathBuf>,

    /// Output format (see `mkhelp formats`)
    #[arg(short, long)]
    pub format: Option<String>,
}

#[derive(Debug, Args)]
pub struct FormatsArgs {
    /// Print the registry as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        None => cmd::docs::run(config, &cli.docs),
        Some(Commands::Docs(args)) => cmd::docs::run(config, &args),
        Some(Commands::Script) => cmd::script::run(),
        Some(Commands::Formats(args)) => cmd::formats::run(args.json),
        Some(Commands::Doctor) => cmd::doctor::run(config),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "mkhelp",
                &mut std::io::stdout(),
            );
        }
    }
}
