use clap::{Parser, Subcommand};
use graphsearch::{
    problems::{GraphHeuristicName, GraphProblem, MazeHeuristicName, MazeProblem},
    search::{
        validate, Heuristic, Plan, SearchEngineName, SearchProblem, SearchResult,
        SearchStatistics, Verbosity,
    },
};
use std::{fmt::Display, path::PathBuf, process::ExitCode};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Search for a plan in a maze or an explicit graph.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        help = "Write the plan to this file, one action per line",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    plan: Option<PathBuf>,
    #[arg(
        help = "Write the search statistics to this file as JSON",
        short = 's',
        long = "statistics",
        id = "STATISTICS"
    )]
    statistics: Option<PathBuf>,
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

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a maze layout (`%` wall, `P` start, `.` goal).
    Maze {
        #[arg(help = "The maze layout file")]
        layout: PathBuf,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use",
            short = 'H',
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = MazeHeuristicName::Manhattan
        )]
        heuristic_name: MazeHeuristicName,
    },
    /// Find a path through a weighted graph described in TOML.
    Graph {
        #[arg(help = "The graph file")]
        graph: PathBuf,
        #[arg(
            value_enum,
            help = "The heuristic evaluator to use",
            short = 'H',
            long = "heuristic",
            id = "HEURISTIC",
            default_value_t = GraphHeuristicName::Zero
        )]
        heuristic_name: GraphHeuristicName,
    },
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

    let outcome = match &cli.command {
        Commands::Maze {
            layout,
            heuristic_name,
        } => match MazeProblem::from_path(layout) {
            Ok(problem) => solve(&cli, &problem, heuristic_name.create()),
            Err(e) => Err(e.to_string()),
        },
        Commands::Graph {
            graph,
            heuristic_name,
        } => match GraphProblem::from_path(graph) {
            Ok(problem) => {
                let heuristic = heuristic_name.create(&problem);
                solve(&cli, &problem, heuristic)
            }
            Err(e) => Err(e.to_string()),
        },
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the search and reports the result. Returns whether a plan was found.
fn solve<P>(cli: &Cli, problem: &P, mut heuristic: Box<dyn Heuristic<P>>) -> Result<bool, String>
where
    P: SearchProblem,
    P::Action: PartialEq + Display,
{
    if !cli.search_engine_name.is_informed() {
        info!(engine = ?cli.search_engine_name, "engine ignores the heuristic");
    }
    let (result, statistics) = cli.search_engine_name.search(problem, &mut heuristic);
    write_statistics(cli, &statistics)?;

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            match validate(&plan, problem) {
                Ok(_) => info!("plan is valid"),
                Err(e) => {
                    warn!("plan is invalid: {}", e);
                    return Ok(false);
                }
            }
            let cost = plan.cost(problem);
            info!("plan found");
            info!(plan_length = plan.len(), plan_cost = cost.into_inner());

            println!("Plan found:");
            println!("{}", plan);
            println!("Plan length: {}", plan.len());
            println!("Plan cost: {}", cost);

            write_plan(cli, &plan)?;
            Ok(true)
        }
        SearchResult::NoSolution => {
            info!("no plan found");
            println!("No plan found");
            Ok(false)
        }
    }
}

fn write_plan<A: Display>(cli: &Cli, plan: &Plan<A>) -> Result<(), String> {
    if let Some(path) = &cli.plan {
        std::fs::write(path, format!("{}\n", plan))
            .map_err(|e| format!("failed to write plan file {}: {}", path.display(), e))?;
        info!(plan_file = %path.display(), "wrote plan");
    }
    Ok(())
}

fn write_statistics(cli: &Cli, statistics: &SearchStatistics) -> Result<(), String> {
    if let Some(path) = &cli.statistics {
        let json = serde_json::to_string_pretty(statistics)
            .map_err(|e| format!("failed to serialise statistics: {}", e))?;
        std::fs::write(path, json)
            .map_err(|e| format!("failed to write statistics file {}: {}", path.display(), e))?;
        info!(statistics_file = %path.display(), "wrote statistics");
    }
    Ok(())
}
