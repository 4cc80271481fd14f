//! Builds graph nodes and edges from a parsed document.
//!
//! Nodes are emitted depth-first with sequential IDs starting at "1":
//! - an object becomes one node: its primitive members as typed rows, its
//!   nested members as `object`/`array` rows holding the child count, each
//!   nested member becoming a child node
//! - an array adds one child node per element to its parent
//! - a scalar becomes a node with a single keyless row

use jsonsync_core::json::JsonPath;
use jsonsync_core::rows::{NodeRow, RowType};
use serde_json::Value;

use super::types::{Edge, GraphNode};

#[derive(Default)]
pub(crate) struct GraphBuilder {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub(crate) fn build(root: &Value) -> (Vec<GraphNode>, Vec<Edge>) {
        let mut builder = GraphBuilder::default();
        builder.visit(root, JsonPath::root(), None);
        (builder.nodes, builder.edges)
    }

    fn visit(&mut self, value: &Value, path: JsonPath, parent: Option<&str>) {
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.visit(item, path.clone().index(i), parent);
                }
            }
            Value::Object(map) => {
                let rows = map.iter().map(|(k, v)| member_row(k, v)).collect();
                let id = self.push_node(rows, path.clone(), parent);
                for (k, v) in map {
                    if v.is_object() || v.is_array() {
                        self.visit(v, path.clone().key(k.as_str()), Some(&id));
                    }
                }
            }
            scalar => {
                self.push_node(vec![NodeRow::scalar(scalar.clone())], path, parent);
            }
        }
    }

    fn push_node(&mut self, rows: Vec<NodeRow>, path: JsonPath, parent: Option<&str>) -> String {
        let id = (self.nodes.len() + 1).to_string();
        if let Some(src) = parent {
            self.edges.push(Edge {
                src: src.to_string(),
                dst: id.clone(),
            });
        }
        self.nodes.push(GraphNode::new(id.clone(), rows, Some(path)));
        id
    }
}

fn member_row(key: &str, value: &Value) -> NodeRow {
    match value {
        Value::Object(map) => NodeRow::new(Some(key.to_string()), Value::from(map.len()), RowType::Object),
        Value::Array(items) => {
            NodeRow::new(Some(key.to_string()), Value::from(items.len()), RowType::Array)
        }
        other => NodeRow::from_value(key, other.clone()),
    }
}
