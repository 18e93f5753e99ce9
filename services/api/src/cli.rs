use crate::demo::{run_demo, run_negotiation, DemoArgs, NegotiateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use freight_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Freight Brokerage Orchestrator",
    about = "Run and demonstrate the freight brokerage automation service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Simulate a single carrier rate negotiation and print the transcript
    Negotiate(NegotiateArgs),
    /// Run an end-to-end CLI demo covering lead discovery and dispatch
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Negotiate(args) => run_negotiation(args),
        Command::Demo(args) => run_demo(args),
    }
}
