use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use route_graph_core::{Graph, Outcome, ProblemKind};
use tracing::{debug, info, warn};

use crate::config::OutputFormat;
use crate::input::{parse_edges, parse_query, parse_query_count};
use crate::labels::VertexLabels;
use crate::output::Answer;

/// Counters for one processed input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub queries: usize,
    pub not_found: usize,
    pub errors: usize,
}

/// Read a graph and its queries from `reader`, write one answer per query.
///
/// A malformed edge line or query count aborts the session, as does an I/O
/// error. A bad query line, including one that is not UTF-8, is answered with
/// an error and the session moves on.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W, format: OutputFormat) -> Result<Summary> {
    let mut lines = reader.split(b'\n');
    let mut next_line = |what: &str| -> Result<Vec<u8>> {
        let mut raw = lines
            .next()
            .ok_or_else(|| anyhow!("input ended before {what}"))?
            .with_context(|| format!("reading {what}"))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        Ok(raw)
    };

    let t = Instant::now();
    let mut labels = VertexLabels::new();
    let edge_line = decode_header(next_line("the edge line")?, "the edge line")?;
    let edges = parse_edges(&edge_line, &mut labels)?;
    let graph = Graph::build(edges, labels.len()).context("building graph")?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_ms = t.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    debug!(
        labels = %(0..labels.len()).filter_map(|id| labels.label(id)).collect::<String>(),
        "vertex ids in label order"
    );

    let count_line = decode_header(next_line("the query count")?, "the query count")?;
    let count = parse_query_count(&count_line)?;
    let mut summary = Summary::default();

    for number in 1..=count {
        let raw = next_line(&format!("query #{number} of {count}"))?;
        let answer = match String::from_utf8(raw) {
            Ok(line) => answer_line(&graph, &labels, number, &line),
            Err(e) => Answer {
                number,
                problem: None,
                result: Err(format!("query line is not valid UTF-8: {}", e.utf8_error())),
            },
        };

        summary.queries += 1;
        match &answer.result {
            Ok(Outcome::NotFound) => summary.not_found += 1,
            Err(message) => {
                summary.errors += 1;
                warn!(query = number, error = %message, "query failed");
            }
            Ok(Outcome::Found(_)) => {}
        }

        writeln!(writer, "{}", answer.render(format)).context("writing answer")?;
    }

    writer.flush().context("flushing output")?;
    info!(
        queries = summary.queries,
        not_found = summary.not_found,
        errors = summary.errors,
        "session finished"
    );
    Ok(summary)
}

fn decode_header(raw: Vec<u8>, what: &str) -> Result<String> {
    String::from_utf8(raw).with_context(|| format!("{what} is not valid UTF-8"))
}

fn answer_line(graph: &Graph, labels: &VertexLabels, number: usize, line: &str) -> Answer {
    let problem = line
        .split_whitespace()
        .next()
        .and_then(|tag| tag.parse::<ProblemKind>().ok());

    let result = parse_query(line, labels)
        .and_then(|query| query.execute(graph).map_err(Into::into))
        .map_err(|e| format!("{e:#}"));

    Answer {
        number,
        problem,
        result,
    }
}
