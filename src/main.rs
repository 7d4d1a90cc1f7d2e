use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};
use log::debug;

use sliding_puzzle_solver::config::{Config, Method};
use sliding_puzzle_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sliding-puzzle-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("bfs")
                .short("b")
                .long("bfs")
                .help("Search breadth-first (shortest solution)"),
        )
        .arg(
            Arg::with_name("dfs")
                .short("d")
                .long("dfs")
                .help("Search depth-first (any solution)"),
        )
        .arg(
            Arg::with_name("misplaced")
                .short("m")
                .long("misplaced")
                .help("Use A* with the misplaced tiles heuristic (shortest solution)"),
        )
        .arg(
            Arg::with_name("manhattan")
                .short("a")
                .long("manhattan")
                .help("Use A* with the manhattan distance heuristic (shortest solution, default)"),
        )
        .group(
            ArgGroup::with_name("method")
                .arg("bfs")
                .arg("dfs")
                .arg("misplaced")
                .arg("manhattan"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("STATES")
                .help("Give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Print progress and stats"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let method = if matches.is_present("bfs") {
        Method::BreadthFirst
    } else if matches.is_present("dfs") {
        Method::DepthFirst
    } else if matches.is_present("misplaced") {
        Method::AStarMisplaced
    } else {
        Method::AStarManhattan
    };

    let node_limit = matches.value_of("limit").map(|limit| {
        limit.parse::<usize>().unwrap_or_else(|err| {
            eprintln!("Invalid limit {}: {}", limit, err);
            process::exit(1);
        })
    });

    let config = Config {
        method,
        print_status: matches.is_present("verbose"),
        node_limit,
    };
    debug!("{:?}", config);

    // required so it's always present
    let path = matches.value_of("file").unwrap();

    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load puzzle {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load puzzle {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    print!("{}", puzzle);
    println!();

    let solver_ok = puzzle.solve(&config).unwrap_or_else(|err| {
        eprintln!("Failed to solve: {}", err);
        process::exit(1);
    });

    match solver_ok.moves {
        Some(ref moves) => println!(
            "Puzzle can be solved in {} moves: {}",
            moves.len(),
            moves
        ),
        None => println!("Puzzle cannot be solved."),
    }
    if config.print_status {
        println!();
        print!("{}", solver_ok.stats);
    }
}
