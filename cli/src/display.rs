use flightnet_core::{Airport, ExplorationResult, FlightGraph, PathStep};
use std::sync::Arc;

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_graph_summary(graph: &FlightGraph, args: &Args, colors: &ColorScheme) {
    println!(
        "✈️  Graph over airports served by at least {} airlines: {} airports, {} routes",
        colors.number(&args.min_airlines.to_string()),
        colors.number(&format_number(graph.vertex_count())),
        colors.number(&format_number(graph.edge_count()))
    );
}

pub fn display_airport_list(airports: &[Arc<Airport>], args: &Args, colors: &ColorScheme) {
    for (index, airport) in airports.iter().enumerate() {
        let step_number = format!("{}.", index + 1);
        println!(
            "{:>5} {}",
            colors.step_number(&step_number),
            format_airport(airport, args, colors)
        );
    }
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🛫 Finding route from {} to {}",
        colors.airport_name(&format!("\"{}\"", request.from_name)),
        colors.airport_name(&format!("\"{}\"", request.to_name))
    );
    println!("⚙️  Using fewest-hop search (BFS)");
    println!("🔍 Searching...");
}

pub fn display_search_results(result: SearchResult, colors: &ColorScheme) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match result.path {
        Some(path) => {
            display_successful_path(&path, &result.display_options, colors);
            if is_verbose {
                display_search_statistics(result.airports_visited, result.search_duration, colors);
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No route found between"),
                colors.airport_name(&format!("\"{}\"", result.from_name)),
                colors.airport_name(&format!("\"{}\"", result.to_name))
            );
            if is_verbose {
                display_search_statistics(result.airports_visited, result.search_duration, colors);
            }
        }
    }
}

fn display_successful_path(path: &[PathStep], display_options: &Args, colors: &ColorScheme) {
    if display_options.verbose {
        let hop_count = path.len() - 1;
        println!(
            "{} Found route with {} hops:\n",
            colors.success("✅"),
            colors.number(&hop_count.to_string())
        );
    }

    let path_flow = path
        .iter()
        .map(|(airport, _)| colors.airport_name(&format!("\"{}\"", airport.name)).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if !display_options.quiet {
        println!();
        for (step_index, (airport, flights)) in path.iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            println!(
                "{}",
                format_path_step(step_number, airport, *flights, step_index, display_options, colors)
            );
        }
    }
}

pub fn format_path_step(
    step_number: String,
    airport: &Airport,
    flights: u64,
    step_index: usize,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let mut formatted_line = format!(
        "{:2} {}",
        colors.step_number(&step_number),
        format_airport(airport, display_options, colors)
    );

    if display_options.show_weights && step_index > 0 {
        formatted_line.push_str(&format!(
            " {}{}{}",
            colors.weight("["),
            colors.number(&format!("{} flights", format_number(flights as usize))),
            colors.weight("]")
        ));
    }

    formatted_line
}

fn format_airport(airport: &Airport, display_options: &Args, colors: &ColorScheme) -> String {
    let mut formatted = colors.airport_name(&format!("\"{}\"", airport.name)).to_string();

    if display_options.show_codes {
        formatted.push_str(&format!(" ({})", colors.code(&airport.iata_code)));
    }

    if !airport.city.is_empty() && !display_options.quiet {
        formatted.push_str(&format!(" - {}", airport.city));
    }

    formatted
}

pub fn display_exploration(result: &ExplorationResult, args: &Args, colors: &ColorScheme) {
    println!(
        "🌐 {} airports reachable from {} (up to {} hops)",
        colors.number(&format_number(result.total_reachable())),
        colors.airport_name(&format!("\"{}\"", result.center.name)),
        colors.number(&result.max_hops().to_string())
    );

    for (airport, hops) in &result.reachable {
        println!(
            "  {} {}",
            colors.step_number(&format!("[{}]", hops)),
            format_airport(airport, args, colors)
        );
    }
}

fn display_search_statistics(airports_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} airports in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(airports_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
