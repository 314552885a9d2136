use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Args;

use drover::verify::VerifyReport;

use crate::TreeArgs;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    tree: TreeArgs,

    /// Emit the report as JSON instead of a human summary
    #[arg(long)]
    json: bool,
}

pub fn run(args: &VerifyArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let tree = args.tree.open()?;
    let report = tree.verify();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// ANSI color helpers — only emit escape codes when stderr is a terminal.
struct Style {
    color: bool,
}

impl Style {
    fn new() -> Self {
        Self {
            color: std::io::stderr().is_terminal(),
        }
    }

    fn style(&self, code: &str, s: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{s}\x1b[0m")
        } else {
            s.to_string()
        }
    }

    fn green(&self, s: &str) -> String {
        self.style("32", s)
    }

    fn red(&self, s: &str) -> String {
        self.style("31", s)
    }

    fn dim(&self, s: &str) -> String {
        self.style("2", s)
    }
}

fn print_summary(report: &VerifyReport) {
    let sty = Style::new();
    if report.is_clean() {
        eprintln!("{}", sty.green("tree ok"));
        return;
    }
    for path in &report.bad_dirs {
        eprintln!("{} {}", sty.red("bad dir:"), path.display());
    }
    for path in &report.bad_files {
        eprintln!("{} {}", sty.red("bad file:"), path.display());
    }
    eprintln!(
        "{}",
        sty.dim(&format!(
            "{} bad directories, {} bad files",
            report.bad_dirs.len(),
            report.bad_files.len()
        ))
    );
}
