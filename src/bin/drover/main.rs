mod complete;
mod run;
mod verify;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use drover::{CommandTree, NamePolicy, TreeError};

#[derive(Parser, Debug)]
#[command(name = "drover", version, about = "Filesystem-backed subcommand dispatcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a command line against the tree and run the matched script
    Run(run::RunArgs),
    /// Print completion suggestions for a partial command line
    Complete(complete::CompleteArgs),
    /// Audit the whole tree for permission problems
    Verify(verify::VerifyArgs),
}

/// Arguments shared by every subcommand that opens a tree.
#[derive(Args, Debug)]
struct TreeArgs {
    /// Root directory of the command tree
    root: PathBuf,

    /// Restrict command names to letters and digits (no hyphens)
    #[arg(long)]
    strict_names: bool,
}

impl TreeArgs {
    fn open(&self) -> Result<CommandTree, TreeError> {
        let policy = if self.strict_names {
            NamePolicy::Alphanumeric
        } else {
            NamePolicy::Hyphenated
        };
        drover::open_tree(&self.root, policy)
    }
}

fn main() -> ExitCode {
    drover::logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(ref args) => run::run(args),
        Commands::Complete(ref args) => complete::run(args),
        Commands::Verify(ref args) => verify::run(args),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
