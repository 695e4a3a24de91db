//! Find and draw the cheapest route across a grid.
//!
//! Run: cargo run --bin astar
//!      cargo run --bin astar -- --random 60 --width 16 --seed 7
//!      cargo run --bin astar -- --scenario maze.json --ascii
//!
//! Set `RUST_LOG=debug` to see search statistics.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridstar_demo::{DemoError, Prepared, Scenario};
use gridstar_paths::{Heuristic, Outcome, Searcher};
use gridstar_term::{Glyphs, Scene};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum HeuristicArg {
    Octile,
    Manhattan,
    Chebyshev,
    Zero,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Octile => Heuristic::Octile,
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

/// A* on a square grid with 8-way movement
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load the scenario from a JSON file
    #[arg(short, long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random scenario with this many blocked cells
    #[arg(short, long)]
    random: Option<usize>,

    /// Grid width for random scenarios
    #[arg(long, default_value_t = 16)]
    width: i32,

    /// Seed for random scenarios
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Override the scenario's heuristic
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicArg>,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Use ASCII glyphs instead of the Unicode set
    #[arg(long)]
    ascii: bool,

    /// Never emit color escape codes
    #[arg(long)]
    plain: bool,

    /// Print the scenario as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn scenario(args: &Args) -> Result<Scenario, DemoError> {
    let mut scenario = match (&args.scenario, args.random) {
        (Some(path), _) => Scenario::load(path)?,
        (None, Some(count)) => Scenario::random(args.width, count, args.seed),
        (None, None) => Scenario::reference(),
    };
    scenario.override_search(args.heuristic.map(Heuristic::from), args.max_expansions);
    Ok(scenario)
}

fn run(args: &Args) -> Result<(), DemoError> {
    let scenario = scenario(args)?;
    if args.dump {
        println!("{}", scenario.to_json()?);
        return Ok(());
    }

    let Prepared { graph, start, goal } = scenario.prepare()?;
    if !scenario.search.heuristic.is_admissible(graph.costs()) {
        log::warn!(
            "{:?} may overestimate with these step costs; the path may not be the cheapest",
            scenario.search.heuristic
        );
    }

    let mut searcher = Searcher::new(scenario.search);
    let outcome = searcher.search(&graph, start, goal)?;
    let stats = searcher.stats();

    let mut scene = Scene::new().with_start(start).with_goal(goal);
    match &outcome {
        Outcome::Found(path) => {
            let route: Vec<String> = path.points(&graph).iter().map(ToString::to_string).collect();
            println!(
                "path: cost {}, {} steps, {} expanded",
                path.cost(),
                path.steps(),
                stats.expanded
            );
            println!("{}", route.join(" -> "));
            scene = scene.with_path(path.nodes());
        }
        Outcome::NotFound => {
            println!("no path from {} to {}", scenario.start, scenario.goal);
        }
        Outcome::LimitReached { expanded } => {
            println!("gave up after expanding {expanded} nodes");
        }
    }
    println!();

    let glyphs = if args.ascii { Glyphs::ASCII } else { Glyphs::UNICODE };
    let mut stdout = io::stdout().lock();
    if args.plain || !stdout.is_terminal() {
        stdout.write_all(gridstar_term::render(&graph, &scene, &glyphs).as_bytes())?;
    } else {
        gridstar_term::write_styled(&mut stdout, &graph, &scene, &glyphs)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
