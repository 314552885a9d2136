use std::process::ExitCode;

use clap::Args;

use drover::diag::LogSink;
use drover::dispatch::Dispatcher;

use crate::TreeArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Command line to dispatch, as a single shell-quoted string
    #[arg(default_value = "")]
    input: String,

    /// Resolve only; don't spawn the matched script
    #[arg(long)]
    noop: bool,
}

pub fn run(args: &RunArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let tree = args.tree.open()?;
    let dispatcher = Dispatcher::new(tree, LogSink);
    match dispatcher.run(&args.input, args.noop)? {
        // the child's exit code passes through to our own exit status
        Some(code) => Ok(ExitCode::from(
            u8::try_from(code.rem_euclid(256)).unwrap_or(1),
        )),
        None => Ok(ExitCode::SUCCESS),
    }
}
