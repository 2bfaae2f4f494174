use crate::commands::{
    run_eligibility, run_recommend, run_resume_score, EligibilityArgs, RecommendArgs,
    ResumeScoreArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use campus_placement::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Campus Placement Engine",
    about = "Run the campus placement eligibility and application service from the command line",
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
    /// Evaluate a candidate profile against drive criteria
    Eligibility(EligibilityArgs),
    /// Resume heuristics
    Resume {
        #[command(subcommand)]
        command: ResumeCommand,
    },
    /// List the top drives a candidate is eligible for
    Recommend(RecommendArgs),
    /// Walk a seeded student through eligibility, applying, shortlisting and recommendations
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ResumeCommand {
    /// Score a plain-text resume with the keyword heuristic
    Score(ResumeScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve drives from a CSV export instead of the standard catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Resume {
            command: ResumeCommand::Score(args),
        } => run_resume_score(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}
