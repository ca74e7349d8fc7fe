use clap::Parser;
use medalquest::quest::QuestProblem;
use medalquest::search::{
    validate, AStar, HeuristicName, SearchEngine, SearchResult, Verbosity,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Plan a medal quest with A* search.
struct Cli {
    #[arg(help = "The quest file (TOML, with a `map` and a `[costs]` table)")]
    quest: PathBuf,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::WorstCase
    )]
    heuristic_name: HeuristicName,
    #[arg(
        help = "Where to write the plan, one direction per line",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let problem = match QuestProblem::from_path(&cli.quest) {
        Ok(problem) => problem,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    plan(cli, problem)
}

fn plan(cli: Cli, problem: QuestProblem) -> ExitCode {
    let mut heuristic = cli.heuristic_name.create::<QuestProblem>();
    let (result, statistics) = AStar::new().search(&problem, heuristic.as_mut());

    let plan = match result {
        SearchResult::Success(plan) => plan,
        SearchResult::NoSolution => {
            info!("no plan found");
            println!("No plan found");
            println!("Expanded nodes: {}", statistics.expanded_nodes());
            return ExitCode::FAILURE;
        }
    };

    info!("validating plan");
    let cost = match validate(&plan, &problem) {
        Ok(cost) => {
            info!("plan is valid");
            cost
        }
        Err(e) => {
            error!("plan is invalid: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Plan found:");
    println!("{}", plan);
    println!("Plan length: {}", plan.len());
    println!("Plan cost: {}", cost);
    println!("Expanded nodes: {}", statistics.expanded_nodes());

    if let Some(plan_path) = cli.plan {
        if let Err(e) = std::fs::write(&plan_path, format!("{}\n", plan)) {
            error!("failed to write plan to {}: {}", plan_path.display(), e);
            return ExitCode::FAILURE;
        }
        info!(path = %plan_path.display(), "plan written");
    }

    ExitCode::SUCCESS
}
