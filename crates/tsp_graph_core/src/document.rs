//! JSON document wrapper around a built graph.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Error, Result, graph::Graph};

const JSON_INDENT: &[u8] = b"    ";

/// One output document holding a single graph keyed by its id:
/// `{ "<id>": { "id": ..., "nodes": ..., ... } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphDocument {
    graph: Graph,
}

impl GraphDocument {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Renders the document as JSON text. Pretty output is indented with
    /// four spaces.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let buf = if pretty {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            self.serialize(&mut ser)?;
            buf
        } else {
            serde_json::to_vec(self)?
        };

        String::from_utf8(buf).map_err(|e| Error::other(format!("non-UTF-8 JSON output: {e}")))
    }
}

impl Serialize for GraphDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.graph.id, &self.graph)?;
        map.end()
    }
}
