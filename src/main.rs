// algotty: frame-by-frame data-structure and algorithm stepper

mod algorithms;
mod playback;
mod snapshot;
mod structures;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use algorithms::{AlgorithmId, Params, run_algorithm};
use structures::{Graph, ListArena, ListKind, Queue, QueueKind, Stack, Structure, TreeArena};
use ui::App;

/// A named demo: a starting structure, an algorithm, and its parameters.
struct Scenario {
    name: &'static str,
    description: &'static str,
    kind: AlgorithmId,
    structure: fn() -> Structure,
    params: fn() -> Params,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "bubble-sort",
            description: "Bubble sort over [5, 1, 4, 2, 8]",
            kind: AlgorithmId::BubbleSort,
            structure: || Structure::Array(vec![5, 1, 4, 2, 8]),
            params: Params::default,
        },
        Scenario {
            name: "quick-sort",
            description: "Quick sort over [5, 1, 4, 2, 8]",
            kind: AlgorithmId::QuickSort,
            structure: || Structure::Array(vec![5, 1, 4, 2, 8]),
            params: Params::default,
        },
        Scenario {
            name: "binary-search",
            description: "Binary search for 7 in a sorted array",
            kind: AlgorithmId::BinarySearch,
            structure: || Structure::Array(vec![1, 3, 5, 7, 9, 11]),
            params: || Params::target("7"),
        },
        Scenario {
            name: "balanced-parens",
            description: "Bracket matching with a stack",
            kind: AlgorithmId::BalancedParentheses,
            structure: || Structure::Stack(Stack::new()),
            params: || Params::value("(()(()))"),
        },
        Scenario {
            name: "postfix-eval",
            description: "Postfix expression evaluation",
            kind: AlgorithmId::PostfixEvaluation,
            structure: || Structure::Stack(Stack::new()),
            params: || Params::value("2 3 4 * +"),
        },
        Scenario {
            name: "circular-enqueue",
            description: "Enqueue into a circular queue",
            kind: AlgorithmId::Enqueue,
            structure: || Structure::Queue(Queue::sample(QueueKind::Circular)),
            params: || Params::value("9"),
        },
        Scenario {
            name: "list-reverse",
            description: "Reverse a singly linked list",
            kind: AlgorithmId::ListReverse,
            structure: || Structure::List(ListArena::from_values(ListKind::Singly, &[1, 3, 5, 7])),
            params: Params::default,
        },
        Scenario {
            name: "list-detect-loop",
            description: "Floyd's cycle detection on a circular list",
            kind: AlgorithmId::ListDetectLoop,
            structure: || Structure::List(ListArena::sample(ListKind::Circular)),
            params: Params::default,
        },
        Scenario {
            name: "bst-insert",
            description: "Insert 45 into a binary search tree",
            kind: AlgorithmId::TreeInsert,
            structure: || Structure::Tree(TreeArena::sample()),
            params: || Params::value("45"),
        },
        Scenario {
            name: "bst-delete",
            description: "Delete a two-child node from a binary search tree",
            kind: AlgorithmId::TreeDelete,
            structure: || Structure::Tree(TreeArena::sample()),
            params: || Params::value("30"),
        },
        Scenario {
            name: "bfs",
            description: "Breadth-first search from A",
            kind: AlgorithmId::Bfs,
            structure: || Structure::Graph(sample_graph(false)),
            params: || Params::value("A"),
        },
        Scenario {
            name: "dijkstra",
            description: "Shortest path from A to E",
            kind: AlgorithmId::Dijkstra,
            structure: || Structure::Graph(sample_graph(false)),
            params: || Params::value("A,E"),
        },
        Scenario {
            name: "kruskal",
            description: "Kruskal's minimum spanning tree",
            kind: AlgorithmId::Kruskal,
            structure: || Structure::Graph(sample_graph(false)),
            params: Params::default,
        },
        Scenario {
            name: "topo-sort",
            description: "Topological sort of a DAG",
            kind: AlgorithmId::TopologicalSort,
            structure: || Structure::Graph(sample_graph(true)),
            params: Params::default,
        },
        Scenario {
            name: "kmp",
            description: "KMP substring search",
            kind: AlgorithmId::KmpMatch,
            structure: || Structure::Text("ababcababa".to_string()),
            params: || Params::target("aba"),
        },
        Scenario {
            name: "palindrome",
            description: "Two-pointer palindrome check",
            kind: AlgorithmId::PalindromeCheck,
            structure: || Structure::Text("racecar".to_string()),
            params: Params::default,
        },
    ]
}

fn sample_graph(directed: bool) -> Graph {
    Graph::from_edges(
        directed,
        &[
            ("A", "B", 4),
            ("A", "C", 2),
            ("B", "D", 5),
            ("C", "D", 8),
            ("C", "E", 10),
            ("D", "E", 2),
        ],
    )
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <scenario>", program_name);
    eprintln!();
    eprintln!("Scenarios:");
    for s in scenarios() {
        eprintln!("  {:<18} {}", s.name, s.description);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        eprintln!("Error: No scenario provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    let wanted = &args[1];
    let Some(scenario) = scenarios().into_iter().find(|s| s.name == *wanted) else {
        eprintln!("Error: Unknown scenario '{}'", wanted);
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };

    let structure = (scenario.structure)();
    let params = (scenario.params)();
    let trace = match run_algorithm(scenario.kind, &structure, &params) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Engine error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Recorded {} frames.", trace.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let title = format!("{} ({})", scenario.description, structure.kind());
    let mut app = App::new(scenario.kind, title, trace);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
