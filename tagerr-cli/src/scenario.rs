//! Error scenarios described in JSON
//!
//! A scenario describes an error tree, optional data hints per tag, and the
//! tags to test membership for:
//!
//! ```json
//! {
//!   "error": { "tag": { "name": "db", "inner": { "combine": [
//!     { "message": "timeout" },
//!     null,
//!     { "tag": { "name": "net", "inner": { "message": "reset" } } }
//!   ] } } },
//!   "hints": { "net": "check the load balancer" },
//!   "queries": ["db", "net", "auth"]
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tagerr::{combine, Error, Tag};
use tagerr_data::DataKey;
use thiserror::Error as ThisError;

/// Errors loading a scenario file
#[derive(Debug, ThisError)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One node of a described error tree
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A plain error with this text
    Message(String),
    /// `inner` wrapped by the named tag (empty name: untagged)
    Tag { name: String, inner: Box<Node> },
    /// Several errors combined; `null` entries are skipped
    Combine(Vec<Option<Node>>),
}

impl Node {
    /// Build the error this node describes
    pub fn build(&self) -> Option<Error> {
        match self {
            Node::Message(text) => Some(Error::msg(text)),
            Node::Tag { name, inner } => Tag::from(name.clone()).wrap_opt(inner.build()),
            Node::Combine(nodes) => combine(nodes.iter().map(|n| n.as_ref().and_then(Node::build))),
        }
    }
}

/// A full scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub error: Option<Node>,
    #[serde(default)]
    pub hints: BTreeMap<String, String>,
    #[serde(default)]
    pub queries: Vec<String>,
}

/// Human-readable hint attached to a tag
pub struct Hint;

impl DataKey for Hint {
    type Value = String;
}

impl Scenario {
    /// Load a scenario from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Register this scenario's hints in the global data registry
    pub fn register_hints(&self) {
        for (tag, hint) in &self.hints {
            tagerr_data::set::<Hint>(&Tag::from(tag.clone()), hint.clone());
        }
    }

    /// Build the error and answer the scenario's queries about it
    pub fn report(&self, extra_queries: &[String]) -> Report {
        let error = self.error.as_ref().and_then(Node::build);
        let queries = self
            .queries
            .iter()
            .chain(extra_queries)
            .map(|name| {
                let member = error
                    .as_ref()
                    .map(|err| err.is(&Tag::from(name.clone())))
                    .unwrap_or(false);
                (name.clone(), member)
            })
            .collect();

        Report { error, queries }
    }
}

/// The answers for one scenario
pub struct Report {
    pub error: Option<Error>,
    pub queries: Vec<(String, bool)>,
}

impl Report {
    /// Render the report, with stacks when `verbose`
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        match &self.error {
            Some(err) => {
                let tags: Vec<String> = err.tags().iter().map(|t| t.name().to_string()).collect();
                out.push_str(&format!("error: {}\n", err.format(verbose)));
                out.push_str(&format!(
                    "name: {}\n",
                    err.name().unwrap_or_else(|| "-".to_string())
                ));
                out.push_str(&format!(
                    "tags: {}\n",
                    if tags.is_empty() { "-".to_string() } else { tags.join(", ") }
                ));
                if let Some(hint) = tagerr_data::get::<Hint>(err) {
                    out.push_str(&format!("hint: {}\n", hint));
                }
            }
            None => out.push_str("error: none\n"),
        }

        for (name, member) in &self.queries {
            out.push_str(&format!("is {}: {}\n", name, member));
        }
        out
    }
}
