use clap::Parser;
use flightnet::colors::ColorScheme;
use flightnet::display::{
    display_airport_list, display_exploration, display_graph_summary, display_search_info,
    display_search_results,
};
use flightnet::json_output::{create_json_output, print_json_output};
use flightnet::logging::init_logging;
use flightnet::search::{create_search_request, execute_pathfinding_search, find_best_airport_match};
use flightnet::{Args, FlightNetApp};
use flightnet_core::reachable_airports;
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = FlightNetApp::new(args.data.clone())?;
    let (mut network, name_lookup) = app.load_network()?;
    let graph = network.rebuild(args.min_airlines);
    let registry = network.database().registry();
    let print_text = !args.json;

    if print_text && !args.quiet {
        display_graph_summary(&graph, &args, colors);
    }

    if print_text && args.list {
        display_airport_list(&graph.sorted_vertices(), &args, colors);
    }

    let exploration = match (&args.from, args.reachable) {
        (Some(from), true) => {
            let center = find_best_airport_match(from, &name_lookup, registry, &graph)?;
            Some(reachable_airports(&graph, center)?)
        }
        (None, true) => return Err("--reachable needs a departure airport".into()),
        _ => None,
    };

    if print_text {
        if let Some(exploration) = &exploration {
            display_exploration(exploration, &args, colors);
        }
    }

    let search_result = match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let request = create_search_request(args.clone(), from, to, &name_lookup, registry, &graph)?;
            if print_text && args.verbose {
                display_search_info(&request, colors);
            }
            Some(execute_pathfinding_search(request, &graph)?)
        }
        _ => None,
    };

    if args.json {
        let json_output = create_json_output(&graph, &args, search_result.as_ref(), exploration.as_ref());
        print_json_output(&json_output);
    } else if let Some(result) = search_result {
        display_search_results(result, colors);
    }

    Ok(())
}
