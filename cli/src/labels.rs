use std::collections::HashMap;

use anyhow::{anyhow, Result};
use route_graph_core::VertexId;

/// Interns single-character vertex labels to dense ids in first-seen order.
#[derive(Debug, Default)]
pub struct VertexLabels {
    ids: HashMap<char, VertexId>,
    labels: Vec<char>,
}

impl VertexLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its id. Repeated labels keep their first id.
    pub fn intern(&mut self, label: char) -> VertexId {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label);
        self.ids.insert(label, id);
        id
    }

    /// Resolve a known label.
    pub fn id(&self, label: char) -> Result<VertexId> {
        self.ids
            .get(&label)
            .copied()
            .ok_or_else(|| anyhow!("unknown vertex '{}'", label))
    }

    /// Resolve a query token, which must be exactly one known character.
    pub fn resolve(&self, token: &str) -> Result<VertexId> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => self.id(label),
            _ => Err(anyhow!(
                "expected a single character as vertex, got '{}'",
                token
            )),
        }
    }

    pub fn label(&self, id: VertexId) -> Option<char> {
        self.labels.get(id).copied()
    }

    /// Number of interned labels, which is the graph's vertex count.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
