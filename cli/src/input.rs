//! Text input: the edge line and the query lines.

use anyhow::{anyhow, bail, Context, Result};
use route_graph_core::{Edge, ProblemKind, Query};

use crate::labels::VertexLabels;

/// Parse the edge line, e.g. `AB5 BC4 CD8`, interning labels as they appear.
///
/// Each token is `XYN`: a from label, a to label and a positive distance.
pub fn parse_edges(line: &str, labels: &mut VertexLabels) -> Result<Vec<Edge>> {
    let edges = line
        .split_whitespace()
        .map(|token| parse_edge(token, labels))
        .collect::<Result<Vec<_>>>()?;

    if edges.is_empty() {
        bail!("missing graph edges");
    }
    Ok(edges)
}

fn parse_edge(token: &str, labels: &mut VertexLabels) -> Result<Edge> {
    let mut chars = token.chars();
    let (from, to) = match (chars.next(), chars.next()) {
        (Some(from), Some(to)) => (from, to),
        _ => bail!("expected graph edge in 'XYN' format, got '{token}'"),
    };
    let distance_text = chars.as_str();
    if distance_text.is_empty() {
        bail!("expected graph edge in 'XYN' format, got '{token}'");
    }

    let distance: u32 = distance_text
        .parse()
        .with_context(|| format!("invalid distance in edge '{token}'"))?;

    let from = labels.intern(from);
    let to = labels.intern(to);
    Edge::new(from, to, distance).with_context(|| format!("invalid edge '{token}'"))
}

/// Parse the query count line.
pub fn parse_query_count(line: &str) -> Result<usize> {
    line.trim()
        .parse()
        .with_context(|| format!("invalid number of queries '{}'", line.trim()))
}

/// Parse one query line such as `P2 C C 3` into a resolved [`Query`].
pub fn parse_query(line: &str, labels: &VertexLabels) -> Result<Query> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (tag, params) = tokens
        .split_first()
        .ok_or_else(|| anyhow!("the problem query is missing"))?;
    let kind: ProblemKind = tag.parse()?;

    let query = match kind {
        ProblemKind::RouteDistance => {
            if params.is_empty() {
                bail!("expected input: P1 X1 X2 ... - at least one vertex");
            }
            let route = params
                .iter()
                .map(|token| labels.resolve(token))
                .collect::<Result<Vec<_>>>()?;
            Query::RouteDistance { route }
        }
        ProblemKind::BoundedStops => {
            let [start, finish, n] = expect_params::<3>(kind, params, "X Y N")?;
            Query::BoundedStops {
                start: labels.resolve(start)?,
                finish: labels.resolve(finish)?,
                max_stops: parse_number(n, "number of stops")?,
            }
        }
        ProblemKind::ExactStops => {
            let [start, finish, n] = expect_params::<3>(kind, params, "X Y N")?;
            Query::ExactStops {
                start: labels.resolve(start)?,
                finish: labels.resolve(finish)?,
                stops: parse_number(n, "number of stops")?,
            }
        }
        ProblemKind::ShortestWithStop => {
            let [start, finish] = expect_params::<2>(kind, params, "X Y")?;
            Query::ShortestWithStop {
                start: labels.resolve(start)?,
                finish: labels.resolve(finish)?,
            }
        }
        ProblemKind::BoundedDistance => {
            let [start, finish, n] = expect_params::<3>(kind, params, "X Y N")?;
            Query::BoundedDistance {
                start: labels.resolve(start)?,
                finish: labels.resolve(finish)?,
                max_distance: parse_number(n, "max distance")?,
            }
        }
    };

    Ok(query)
}

fn expect_params<'a, const N: usize>(
    kind: ProblemKind,
    params: &[&'a str],
    shape: &str,
) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(params).map_err(|_| {
        anyhow!(
            "expected input: {kind} {shape}, got {} parameter(s)",
            params.len()
        )
    })
}

fn parse_number(token: &str, what: &str) -> Result<i64> {
    token
        .parse()
        .with_context(|| format!("invalid {what} '{token}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn towns() -> VertexLabels {
        let mut labels = VertexLabels::new();
        parse_edges("AB5 BC4 CD8 DC8 DE6 AD5 CE2 EB3 AE7", &mut labels).unwrap();
        labels
    }

    #[test]
    fn test_parse_edges() {
        let mut labels = VertexLabels::new();
        let edges = parse_edges("AB5 BC4 CA12", &mut labels).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], Edge::new(0, 1, 5).unwrap());
        assert_eq!(edges[2], Edge::new(2, 0, 12).unwrap());
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_parse_edges_extra_whitespace() {
        let mut labels = VertexLabels::new();
        let edges = parse_edges("  AB5\tBC4  \n", &mut labels).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_parse_edges_empty() {
        let mut labels = VertexLabels::new();
        assert!(parse_edges("   ", &mut labels).is_err());
    }

    #[test]
    fn test_parse_edges_malformed() {
        let mut labels = VertexLabels::new();
        assert!(parse_edges("AB", &mut labels).is_err());
        assert!(parse_edges("ABx", &mut labels).is_err());
        assert!(parse_edges("AB-3", &mut labels).is_err());
        assert!(parse_edges("AB0", &mut labels).is_err());
    }

    #[test]
    fn test_parse_query_count() {
        assert_eq!(parse_query_count(" 10 \n").unwrap(), 10);
        assert!(parse_query_count("ten").is_err());
    }

    #[test]
    fn test_parse_route_query() {
        let labels = towns();
        let q = parse_query("P1 A E B C D", &labels).unwrap();
        assert_eq!(
            q,
            Query::RouteDistance {
                route: vec![0, 4, 1, 2, 3]
            }
        );
    }

    #[test]
    fn test_parse_counting_queries() {
        let labels = towns();
        assert_eq!(
            parse_query("P2 C C 3", &labels).unwrap(),
            Query::BoundedStops {
                start: 2,
                finish: 2,
                max_stops: 3
            }
        );
        assert_eq!(
            parse_query("P3 A C 4", &labels).unwrap(),
            Query::ExactStops {
                start: 0,
                finish: 2,
                stops: 4
            }
        );
        assert_eq!(
            parse_query("P5 C C 30", &labels).unwrap(),
            Query::BoundedDistance {
                start: 2,
                finish: 2,
                max_distance: 30
            }
        );
    }

    #[test]
    fn test_parse_shortest_query() {
        let labels = towns();
        assert_eq!(
            parse_query("P4 B B", &labels).unwrap(),
            Query::ShortestWithStop {
                start: 1,
                finish: 1
            }
        );
    }

    #[test]
    fn test_negative_number_parses() {
        // Rejected later by Query::execute, not by the parser.
        let labels = towns();
        assert_eq!(
            parse_query("P2 A B -1", &labels).unwrap(),
            Query::BoundedStops {
                start: 0,
                finish: 1,
                max_stops: -1
            }
        );
    }

    #[test]
    fn test_parse_query_errors() {
        let labels = towns();
        assert!(parse_query("", &labels).is_err());
        assert!(parse_query("P1", &labels).is_err());
        assert!(parse_query("P9 A B", &labels).is_err());
        assert!(parse_query("P2 A B", &labels).is_err());
        assert!(parse_query("P4 A B C", &labels).is_err());
        assert!(parse_query("P3 A Z 2", &labels).is_err());
        assert!(parse_query("P3 A AB 2", &labels).is_err());
        assert!(parse_query("P5 A B many", &labels).is_err());
    }
}
