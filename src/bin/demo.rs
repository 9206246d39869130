use std::env;

use weighted_graph::demo::{randomize_weights, sample_graph, DemoConfig};
use weighted_graph::{ShortestPaths, WeightedGraph};

fn print_graph(graph: &WeightedGraph<i64>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", graph.dump().to_json()?);
    } else {
        print!("{}", graph.print_graph());
    }
    Ok(())
}

fn format_distances(paths: &ShortestPaths<i64>) -> String {
    let entries: Vec<String> = paths
        .sorted()
        .into_iter()
        .map(|(v, d)| match paths.distance(v) {
            Some(_) => format!("{}={}", v, d),
            None => format!("{}=unreachable", v),
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DemoConfig::from_args(env::args().skip(1));
    let mut rng = config.rng();

    let mut graph = sample_graph();
    let baseline = graph.clone();

    println!("Vertices and their edges");
    print_graph(&graph, config.json)?;
    println!();
    println!(
        "Distances from vertex {}: {}",
        config.source,
        format_distances(&graph.shortest_paths(config.source)?)
    );
    println!();

    randomize_weights(&mut graph, &baseline, config.max_jitter, &mut rng);

    println!("New weighted graph after randomization of weights");
    print_graph(&graph, config.json)?;
    println!();
    println!("New Optimization");
    println!(
        "Distances from vertex {}: {}",
        config.source,
        format_distances(&graph.shortest_paths(config.source)?)
    );

    Ok(())
}
