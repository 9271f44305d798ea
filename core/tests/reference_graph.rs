use route_graph_core::{Edge, Graph, Outcome, ProblemKind, Query, RouteError};

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;

fn towns() -> Graph {
    let edges = [
        (A, B, 5),
        (B, C, 4),
        (C, D, 8),
        (D, C, 8),
        (D, E, 6),
        (A, D, 5),
        (C, E, 2),
        (E, B, 3),
        (A, E, 7),
    ];
    Graph::build(
        edges
            .into_iter()
            .map(|(from, to, distance)| Edge::new(from, to, distance).unwrap()),
        5,
    )
    .unwrap()
}

fn run(graph: &Graph, query: Query) -> Outcome<u64> {
    query.execute(graph).unwrap()
}

#[test]
fn reference_answers() {
    let g = towns();

    let expected = [
        (Query::RouteDistance { route: vec![A, B, C] }, Outcome::Found(9)),
        (Query::RouteDistance { route: vec![A, D] }, Outcome::Found(5)),
        (Query::RouteDistance { route: vec![A, D, C] }, Outcome::Found(13)),
        (
            Query::RouteDistance {
                route: vec![A, E, B, C, D],
            },
            Outcome::Found(22),
        ),
        (Query::RouteDistance { route: vec![A, E, D] }, Outcome::NotFound),
        (
            Query::BoundedStops {
                start: C,
                finish: C,
                max_stops: 3,
            },
            Outcome::Found(2),
        ),
        (
            Query::ExactStops {
                start: A,
                finish: C,
                stops: 4,
            },
            Outcome::Found(3),
        ),
        (
            Query::ShortestWithStop {
                start: A,
                finish: C,
            },
            Outcome::Found(9),
        ),
        (
            Query::ShortestWithStop {
                start: B,
                finish: B,
            },
            Outcome::Found(9),
        ),
        (
            Query::BoundedDistance {
                start: C,
                finish: C,
                max_distance: 30,
            },
            Outcome::Found(7),
        ),
    ];

    for (query, answer) in expected {
        let kind = query.kind();
        assert_eq!(run(&g, query), answer, "{kind}");
    }
}

#[test]
fn queries_share_one_graph_across_threads() {
    let graph = towns();
    let g = &graph;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    run(
                        g,
                        Query::ExactStops {
                            start: A,
                            finish: C,
                            stops: 4,
                        },
                    )
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Outcome::Found(3));
        }
    });
}

#[test]
fn route_distance_matches_edge_sum() {
    let g = towns();
    let route = [A, D, E, B, C, E];
    let expected: u64 = route
        .windows(2)
        .map(|pair| {
            let edge = g
                .outgoing_edges(pair[0])
                .iter()
                .find(|e| e.to == pair[1])
                .unwrap();
            u64::from(edge.distance)
        })
        .sum();
    assert_eq!(
        run(&g, Query::RouteDistance { route: route.to_vec() }),
        Outcome::Found(expected)
    );
}

#[test]
fn bounded_distance_cap_boundary() {
    // C -> E -> B -> C has distance exactly 9: excluded at cap 9, counted at 10.
    let g = towns();
    let at_cap = Query::BoundedDistance {
        start: C,
        finish: C,
        max_distance: 9,
    };
    let above_cap = Query::BoundedDistance {
        start: C,
        finish: C,
        max_distance: 10,
    };
    assert_eq!(run(&g, at_cap), Outcome::NotFound);
    assert_eq!(run(&g, above_cap), Outcome::Found(1));
}

#[test]
fn validation_failures_are_errors_not_not_found() {
    assert_eq!(
        Graph::build(Vec::<Edge>::new(), 5).unwrap_err(),
        RouteError::EmptyGraph
    );
    assert!(matches!(
        Graph::build(vec![Edge::new(0, 5, 1).unwrap()], 5),
        Err(RouteError::VertexOutOfRange { vertex: 5, .. })
    ));
    assert!(matches!(
        Edge::new(0, 1, 0),
        Err(RouteError::NonPositiveDistance { .. })
    ));

    let g = towns();
    let err = Query::BoundedStops {
        start: A,
        finish: C,
        max_stops: -1,
    }
    .execute(&g)
    .unwrap_err();
    assert!(matches!(err, RouteError::NegativeParameter { .. }));
}

#[test]
fn problem_tags_parse() {
    let tags: Vec<ProblemKind> = ["P1", "P2", "P3", "P4", "P5"]
        .iter()
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(tags, ProblemKind::ALL.to_vec());
}
