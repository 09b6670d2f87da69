use hamcycle::{solve_with_config, AdjacencyMatrix, SearchConfig, SearchResult};

fn main() {
    env_logger::init();

    //  (0)---(1)---(2)
    //   |   /  \    |
    //   |  /    \   |
    //  (3)-------(4)
    let graph = match AdjacencyMatrix::from_edges(
        5,
        &[(0, 1), (0, 3), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4)],
    ) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build graph: {}", e);
            std::process::exit(1);
        }
    };

    match solve_with_config(&graph, &SearchConfig::default()) {
        Ok(report) => {
            match report.result {
                SearchResult::Cycle(cycle) => println!("Hamiltonian cycle: {:?}", cycle),
                SearchResult::NoCycle => println!("No Hamiltonian cycle"),
            }
            println!(
                "Explored {} nodes with {} backtracks",
                report.stats.nodes, report.stats.backtracks
            );
        }
        Err(e) => {
            eprintln!("Search failed: {}", e);
            std::process::exit(1);
        }
    }
}
