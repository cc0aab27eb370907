use anyhow::Result;
use clap::Parser;
use log::warn;
use std::io;
use std::path::PathBuf;

use transport_optimizer::menu::Menu;
use transport_optimizer::network::TransportSession;
use transport_optimizer::seed;

#[derive(Parser)]
#[command(name = "transport_optimizer")]
#[command(about = "Transport network with shortest routes and ticket booking")]
struct Cli {
    /// Seed file listing `<cityId> <name> <population>` per line
    #[arg(long, default_value = "cities.txt")]
    cities: PathBuf,

    /// Seed file listing `<sourceId> <destId> <distance> <time>` per line
    #[arg(long, default_value = "routes.txt")]
    routes: PathBuf,

    /// Print the loaded network and exit instead of opening the menu
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut session = TransportSession::new();

    // Missing seed files leave the network empty (or without routes) but usable
    if let Err(e) = seed::load_cities(&cli.cities, &mut session) {
        warn!("{:#}", e);
    }
    if let Err(e) = seed::load_routes(&cli.routes, &mut session) {
        warn!("{:#}", e);
    }

    if cli.headless {
        print_network(&session);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(&mut session, stdin.lock(), io::stdout());
    menu.run()?;
    Ok(())
}

/// Print a summary of the network state
fn print_network(session: &TransportSession) {
    let graph = session.graph();

    println!("{}", session.summary());
    println!();

    println!("--- Cities ---");
    for city in graph.get_cities() {
        println!("  {}. {}", city.id(), city);
    }

    println!("--- Routes ---");
    for (_, routes) in graph.routes_by_city() {
        for route in routes {
            println!("  {}", graph.describe_route(route));
        }
    }
}
