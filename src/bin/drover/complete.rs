use std::process::ExitCode;

use clap::Args;

use crate::TreeArgs;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Partial command line to complete, as a single shell-quoted string
    #[arg(default_value = "")]
    input: String,
}

pub fn run(args: &CompleteArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let tree = args.tree.open()?;
    for name in tree.complete(&args.input) {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}
