use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "flightnet")]
#[command(about = "Analyze airport connectivity and find the fewest-hop route between two airports")]
pub struct Args {
    /// Departure airport (name or IATA code)
    pub from: Option<String>,

    /// Arrival airport (name or IATA code)
    pub to: Option<String>,

    /// Keep only airports served by at least this many distinct airlines
    #[arg(short = 'x', long, value_name = "COUNT", default_value = "0")]
    pub min_airlines: u32,

    /// Flight data file (JSON with airports, airlines and flights)
    #[arg(short, long, value_name = "PATH", env = "FLIGHTNET_DATA")]
    pub data: Option<PathBuf>,

    /// List every airport in the graph, sorted by name
    #[arg(short, long)]
    pub list: bool,

    /// Show every airport reachable from the departure airport
    #[arg(short, long)]
    pub reachable: bool,

    /// Show the flight count of each leg of the path
    #[arg(short = 'w', long)]
    pub show_weights: bool,

    /// Show IATA codes next to airport names
    #[arg(short = 'c', long)]
    pub show_codes: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show graph info, search statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
