use route_graph_core::{Edge, Graph, Outcome, Query, Result, VertexId};
use std::time::Instant;

/// Benchmarked topologies: mode name, table title, one-line description, generator.
const GENERATORS: [(&str, &str, &str, fn(usize) -> Result<Graph>); 4] = [
    ("ring", "Ring with chords", "directed cycle with a chord every tenth vertex", gen_ring),
    ("random", "Uniform random", "~4 random out-edges per vertex, loops and parallels kept", gen_random),
    ("complete", "Complete digraph", "every ordered pair, walk counts grow fastest", gen_complete),
    ("grid", "Wrapped grid", "square torus with right/down edges", gen_grid),
];

const DEFAULT_VERTEX_COUNT: usize = 200;

fn usage() {
    println!("Usage: route-graph-bench [mode] [vertex_count]");
    println!();
    println!("Builds a deterministic graph (edge distances 1..=9) and times one query");
    println!("of each kind against it:");
    println!("  P1  distance along an 8-hop route following first out-edges from 0");
    println!("  P2  walks 0 -> last vertex with at most 6 stops");
    println!("  P3  closed walks through 0 with exactly 12 stops");
    println!("  P4  shortest cycle through 0");
    println!("  P5  walks 0 -> last vertex shorter than 40");
    println!();
    println!("Modes:");
    println!("  {:<10}every topology below (default)", "all");
    for (mode, _, description, _) in GENERATORS {
        println!("  {:<10}{}", mode, description);
    }
    println!();
    println!("Default vertex_count: {}", DEFAULT_VERTEX_COUNT);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_VERTEX_COUNT);

    if mode == "help" || mode == "--help" {
        usage();
        return;
    }
    if vertex_count < 2 {
        eprintln!("vertex_count must be at least 2");
        return;
    }

    let selected: Vec<_> = GENERATORS
        .iter()
        .filter(|(name, ..)| mode == "all" || *name == mode)
        .collect();
    if selected.is_empty() {
        eprintln!("Unknown mode: {}. Use --help for options.", mode);
        return;
    }

    println!("route-graph-bench");
    println!("=================");
    println!();

    for (_, title, _, generator) in selected {
        run_benchmark(title, *generator, vertex_count);
    }
}

/// Follow the first outgoing edge from vertex 0 for up to `hops` steps.
fn first_edge_route(graph: &Graph, hops: usize) -> Vec<VertexId> {
    let mut route = vec![0];
    let mut current = 0;
    for _ in 0..hops {
        match graph.outgoing_edges(current).first() {
            Some(edge) => {
                current = edge.to;
                route.push(current);
            }
            None => break,
        }
    }
    route
}

fn run_benchmark(name: &str, generator: fn(usize) -> Result<Graph>, vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let graph = match generator(vertex_count) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("failed to build graph: {}", e);
            println!();
            return;
        }
    };
    let build_time = t.elapsed();
    println!(
        "Built in {:.1}ms: {} vertices, {} edges, ~{:.1}KB",
        build_time.as_secs_f64() * 1000.0,
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1024.0
    );

    let last = graph.vertex_count() - 1;
    let queries = [
        Query::RouteDistance {
            route: first_edge_route(&graph, 8),
        },
        Query::BoundedStops {
            start: 0,
            finish: last,
            max_stops: 6,
        },
        Query::ExactStops {
            start: 0,
            finish: 0,
            stops: 12,
        },
        Query::ShortestWithStop {
            start: 0,
            finish: 0,
        },
        Query::BoundedDistance {
            start: 0,
            finish: last,
            max_distance: 40,
        },
    ];

    println!();
    println!("{:>8} {:>22} {:>10}", "problem", "result", "time");
    println!("{:->8} {:->22} {:->10}", "", "", "");

    for query in &queries {
        let t = Instant::now();
        let result = query.execute(&graph);
        let elapsed = t.elapsed();
        let shown = match result {
            Ok(Outcome::Found(value)) => value.to_string(),
            Ok(Outcome::NotFound) => "no route".to_string(),
            Err(e) => format!("error: {}", e),
        };
        println!(
            "{:>8} {:>22} {:>8.2}ms",
            query.kind(),
            shown,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Deterministic LCG source for edge targets and distances.
struct EdgeRng {
    state: u64,
}

impl EdgeRng {
    fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    /// Uniform vertex id in `[0, vertex_count)`.
    fn vertex(&mut self, vertex_count: usize) -> VertexId {
        (self.step() % vertex_count as u64) as usize
    }

    /// Edge distance in `1..=9`.
    fn distance(&mut self) -> u32 {
        (self.step() % 9) as u32 + 1
    }
}

/// Directed cycle `i -> i+1` plus a chord from every tenth vertex.
fn gen_ring(vertex_count: usize) -> Result<Graph> {
    let mut rng = EdgeRng::seeded(42);
    let mut edges = Vec::with_capacity(vertex_count + vertex_count / 10);

    for i in 0..vertex_count {
        edges.push(Edge::new(i, (i + 1) % vertex_count, rng.distance())?);
        if i % 10 == 0 {
            let target = rng.vertex(vertex_count);
            edges.push(Edge::new(i, target, rng.distance())?);
        }
    }

    Graph::build(edges, vertex_count)
}

/// ~4 outgoing edges per vertex to uniformly random targets. Self-loops and
/// parallel edges are kept.
fn gen_random(vertex_count: usize) -> Result<Graph> {
    let mut rng = EdgeRng::seeded(54321);
    let mut edges = Vec::with_capacity(vertex_count * 4);

    for _ in 0..vertex_count * 4 {
        let from = rng.vertex(vertex_count);
        let to = rng.vertex(vertex_count);
        edges.push(Edge::new(from, to, rng.distance())?);
    }

    Graph::build(edges, vertex_count)
}

/// Every ordered pair `(i, j)` with `i != j`.
fn gen_complete(vertex_count: usize) -> Result<Graph> {
    let mut rng = EdgeRng::seeded(12345);
    let mut edges = Vec::with_capacity(vertex_count * (vertex_count - 1));

    for i in 0..vertex_count {
        for j in 0..vertex_count {
            if i != j {
                edges.push(Edge::new(i, j, rng.distance())?);
            }
        }
    }

    Graph::build(edges, vertex_count)
}

/// Square lattice, rounded down, with right and down edges that wrap around.
fn gen_grid(vertex_count: usize) -> Result<Graph> {
    let mut rng = EdgeRng::seeded(99999);
    let side = ((vertex_count as f64).sqrt() as usize).max(2);
    let n = side * side;
    let mut edges = Vec::with_capacity(n * 2);

    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let right = row * side + (col + 1) % side;
            let down = ((row + 1) % side) * side + col;
            edges.push(Edge::new(id, right, rng.distance())?);
            edges.push(Edge::new(id, down, rng.distance())?);
        }
    }

    Graph::build(edges, n)
}
