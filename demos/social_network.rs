//! Interactive social network shell.
//!
//! Usage:
//!   cargo run --example social_network
//!   cargo run --example social_network -- --empty --max-users 10 -v

use std::io::{self, Write};
use std::process;

use clap::Parser;
use hopgraph::{Graph, GraphConfig, Verbosity, seed, tracing_support::init_tracing};

#[path = "shared/console.rs"]
mod console;

use console::Console;

/// Explore a small friendship network: traverse it and suggest friends.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start without the five seed users
    #[arg(long)]
    empty: bool,

    /// Maximum number of users (0 for no limit)
    #[arg(long, default_value_t = hopgraph::config::DEFAULT_MAX_VERTICES)]
    max_users: usize,

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

    let config = GraphConfig::friendship()
        .with_max_vertices((args.max_users > 0).then_some(args.max_users));
    let mut graph = if args.empty {
        Graph::with_config(config)
    } else {
        seed::social_network_with(config).unwrap_or_else(|err| {
            eprintln!("Failed to build seed network: {err}");
            process::exit(1);
        })
    };

    let mut console = Console::stdio();
    if let Err(err) = run(&mut graph, &mut console) {
        eprintln!("I/O error: {err}");
        process::exit(1);
    }
}

fn run<R: io::BufRead, W: Write>(graph: &mut Graph, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        writeln!(console.out())?;
        writeln!(console.out(), "--- MENU ---")?;
        writeln!(console.out(), "1. Add user")?;
        writeln!(console.out(), "2. Create friendship")?;
        writeln!(console.out(), "3. Show network")?;
        writeln!(console.out(), "4. Explore with DFS")?;
        writeln!(console.out(), "5. Explore with BFS")?;
        writeln!(console.out(), "6. Suggest friends")?;
        writeln!(console.out(), "0. Exit")?;
        let Some(option) = console.value::<u32>("Option: ")? else {
            return Ok(());
        };

        match option {
            1 => {
                let Some(name) = console.line("New user name: ")? else {
                    return Ok(());
                };
                match graph.add_vertex(name.trim()) {
                    Ok(id) => writeln!(console.out(), "User {:?} registered with ID {id}", name.trim())?,
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            2 => {
                let Some(ids) = console.values::<usize>("IDs of the two users (e.g. 0 3): ", 2)? else {
                    return Ok(());
                };
                match graph.add_unit_edge(ids[0], ids[1]) {
                    Ok(()) => writeln!(
                        console.out(),
                        "{:?} and {:?} are now friends!",
                        graph.label_of(ids[0]).unwrap_or_default(),
                        graph.label_of(ids[1]).unwrap_or_default()
                    )?,
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            3 => print_network(graph, console.out())?,
            4 | 5 => {
                let Some(start) = console.value::<usize>("Starting user ID: ")? else {
                    return Ok(());
                };
                let (name, order) = if option == 4 {
                    ("DFS", graph.dfs(start))
                } else {
                    ("BFS", graph.bfs(start))
                };
                match order {
                    Ok(order) => {
                        let ids: Vec<_> = order.iter().map(ToString::to_string).collect();
                        writeln!(
                            console.out(),
                            "{name} from {} (ID {start}): {}",
                            graph.label_of(start).unwrap_or_default(),
                            ids.join(" ")
                        )?;
                    }
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            6 => {
                let Some(user) = console.value::<usize>("User ID: ")? else {
                    return Ok(());
                };
                match graph.suggest(user) {
                    Ok(suggestions) if suggestions.is_empty() => {
                        writeln!(console.out(), "No suggestions found.")?
                    }
                    Ok(suggestions) => {
                        writeln!(
                            console.out(),
                            "Friend suggestions for {:?} (ID {user}):",
                            graph.label_of(user).unwrap_or_default()
                        )?;
                        for id in suggestions {
                            writeln!(
                                console.out(),
                                "- [{id}] {}",
                                graph.label_of(id).unwrap_or_default()
                            )?;
                        }
                    }
                    Err(err) => writeln!(console.out(), "Error: {err}")?,
                }
            }
            0 => {
                writeln!(console.out(), "Goodbye.")?;
                return Ok(());
            }
            _ => writeln!(console.out(), "Invalid option!")?,
        }
    }
}

fn print_network(graph: &Graph, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n===== FRIENDSHIP NETWORK =====")?;
    for (id, name) in graph.list_vertices() {
        write!(out, "[{id}] {name}:")?;
        let friends: Vec<_> = graph
            .neighbors_of(id)
            .map(|neighbors| {
                neighbors
                    .map(|a| format!("[{}] {}", a.vertex, graph.label_of(a.vertex).unwrap_or_default()))
                    .collect()
            })
            .unwrap_or_default();
        if friends.is_empty() {
            writeln!(out, " (no friends)")?;
        } else {
            writeln!(out, " {}", friends.join(", "))?;
        }
    }
    writeln!(out, "==============================")
}
