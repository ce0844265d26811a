use crate::demo::{run_explain_demo, ExplainArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credishield::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CrediShield Decision Support",
    about = "Run the explainable credit-risk decision-support service from the command line",
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
    /// Render the decision-support panel for a sample prediction
    Explain(ExplainArgs),
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
        Command::Explain(args) => run_explain_demo(args),
    }
}
