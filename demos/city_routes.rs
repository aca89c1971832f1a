//! Interactive city route planner.
//!
//! Usage:
//!   cargo run --example city_routes
//!   cargo run --example city_routes -- --strategy heap -vv

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use hopgraph::{Graph, GraphConfig, PathStrategy, Verbosity, tracing_support::init_tracing};

#[path = "shared/console.rs"]
mod console;

use console::Console;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// O(V²) scan, lowest city index wins ties
    Dense,
    /// Binary heap from the pathfinding crate
    Heap,
}

impl From<Strategy> for PathStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Dense => PathStrategy::Dense,
            Strategy::Heap => PathStrategy::BinaryHeap,
        }
    }
}

/// Register cities and roads, then ask for the shortest route.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum number of cities (0 for no limit)
    #[arg(long, default_value_t = hopgraph::config::DEFAULT_MAX_VERTICES)]
    max_cities: usize,

    /// Shortest-path algorithm
    #[arg(long, value_enum, default_value_t = Strategy::Dense)]
    strategy: Strategy,

    /// Log graph operations to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Suppress all log output, including warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(Verbosity::from_flags(args.quiet, args.verbose));

    let config = GraphConfig::routes()
        .with_max_vertices((args.max_cities > 0).then_some(args.max_cities))
        .with_path_strategy(args.strategy.into());
    let mut graph = Graph::with_config(config);

    let mut console = Console::stdio();
    if let Err(err) = run(&mut graph, &mut console) {
        eprintln!("I/O error: {err}");
        process::exit(1);
    }
}

fn run<R: io::BufRead, W: Write>(graph: &mut Graph, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        writeln!(console.out())?;
        writeln!(console.out(), "=== CITY ROUTES ===")?;
        writeln!(console.out(), "1. Add city")?;
        writeln!(console.out(), "2. Add route")?;
        writeln!(console.out(), "3. List cities")?;
        writeln!(console.out(), "4. List routes")?;
        writeln!(console.out(), "5. Shortest route")?;
        writeln!(console.out(), "6. Exit")?;
        let Some(option) = console.value::<u32>("Choose an option: ")? else {
            return Ok(());
        };

        match option {
            1 => {
                let Some(name) = console.line("City name: ")? else {
                    return Ok(());
                };
                match graph.add_vertex(name.as_str()) {
                    Ok(_) => writeln!(console.out(), "City {name:?} added.")?,
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            2 => {
                let Some(from) = console.line("Origin city: ")? else {
                    return Ok(());
                };
                let Some(to) = console.line("Destination city: ")? else {
                    return Ok(());
                };
                let Some(km) = console.value::<u32>("Distance (km): ")? else {
                    return Ok(());
                };
                match graph.add_edge_by_label(&from, &to, km) {
                    Ok(()) => writeln!(console.out(), "Route {from:?} <-> {to:?} ({km} km) added.")?,
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            3 => {
                writeln!(console.out(), "\nCities:")?;
                for (id, name) in graph.list_vertices() {
                    writeln!(console.out(), "{id}: {name}")?;
                }
            }
            4 => {
                writeln!(console.out(), "\nRoutes:")?;
                for edge in graph.list_edges() {
                    writeln!(
                        console.out(),
                        "{} <-> {} ({} km)",
                        graph.label_of(edge.low).unwrap_or_default(),
                        graph.label_of(edge.high).unwrap_or_default(),
                        edge.weight
                    )?;
                }
            }
            5 => {
                let Some(from) = console.line("Origin city: ")? else {
                    return Ok(());
                };
                let Some(to) = console.line("Destination city: ")? else {
                    return Ok(());
                };
                match graph.shortest_path_by_label(&from, &to) {
                    Ok(found) => {
                        let stops: Vec<_> = found
                            .path
                            .iter()
                            .map(|&id| graph.label_of(id).unwrap_or_default())
                            .collect();
                        writeln!(
                            console.out(),
                            "Shortest distance from {from} to {to}: {} km",
                            found.distance
                        )?;
                        writeln!(console.out(), "Path: {}", stops.join(" -> "))?;
                    }
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            6 => {
                writeln!(console.out(), "Leaving...")?;
                return Ok(());
            }
            _ => writeln!(console.out(), "Invalid option!")?,
        }
    }
}
