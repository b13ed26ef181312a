use crate::demo::{run_demo, run_predict, DemoArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_decision::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Service",
    about = "Serve and exercise the loan approval prediction service from the command line",
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
    /// Score one application JSON file offline and print the decision
    Predict(PredictArgs),
    /// Run a bundled sample model and application end-to-end
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
        Command::Predict(args) => run_predict(args),
        Command::Demo(args) => run_demo(args),
    }
}
