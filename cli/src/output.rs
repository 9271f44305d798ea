use route_graph_core::{Outcome, ProblemKind};
use serde_json::json;

use crate::config::OutputFormat;

pub const NO_ROUTE_FOUND: &str = "NO SUCH ROUTE";

/// The answer to one numbered query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// 1-based position of the query in the input.
    pub number: usize,
    /// None when the line could not be parsed far enough to know it.
    pub problem: Option<ProblemKind>,
    pub result: Result<Outcome<u64>, String>,
}

impl Answer {
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let body = match &self.result {
            Ok(Outcome::Found(value)) => value.to_string(),
            Ok(Outcome::NotFound) => NO_ROUTE_FOUND.to_string(),
            Err(message) => format!("ERROR {message}"),
        };
        format!("OUTPUT #{}: {}", self.number, body)
    }

    fn render_json(&self) -> String {
        let (result, error) = match &self.result {
            Ok(outcome) => (outcome.found(), None),
            Err(message) => (None, Some(message.as_str())),
        };
        json!({
            "query": self.number,
            "problem": self.problem.map(|p| p.tag()),
            "result": result,
            "error": error,
        })
        .to_string()
    }
}
