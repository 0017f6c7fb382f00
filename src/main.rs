mod cli;

use clap::Parser;
use cli::args::Args;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_tracing(args.verbose);

    let mut stdout = std::io::stdout();
    let result = cli::run(args, &mut stdout).await;
    ExitCode::from(cli::finish_run(result, &mut stdout))
}
