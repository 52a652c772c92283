//! Graphviz DOT text for a pipeline graph.

use pv_graph::{EdgeKind, Graph};

const CENTRE_FILL: &str = "lightgrey";

/// Render `graph` as a DOT `digraph`.
///
/// Nodes are keyed by their id and labelled with their short name. The
/// centre node, if any, is filled. Connection edges are dashed.
pub fn dot_script(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph \"{}\" {{\n", escape_dot(graph.name())));
    out.push_str("  node [shape=box];\n");

    for (id, node) in graph.nodes() {
        let fill = if graph.is_centre(id) {
            format!(" style=filled fillcolor=\"{}\"", CENTRE_FILL)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  \"{}\" [label=\"{}\"{}];\n",
            escape_dot(node.id()),
            escape_dot(node.label()),
            fill
        ));
    }

    if !graph.edges().is_empty() {
        out.push('\n');
    }
    for edge in graph.edges() {
        let (Some(start), Some(end)) = (graph.node(edge.start()), graph.node(edge.end())) else {
            continue;
        };
        let style = match edge.kind() {
            EdgeKind::Direct => "solid",
            EdgeKind::Connection => "dashed",
        };
        out.push_str(&format!(
            "  \"{}\" -> \"{}\" [style={}];\n",
            escape_dot(start.id()),
            escape_dot(end.id()),
            style
        ));
    }

    out.push_str("}\n");
    out
}

/// File name stem for a graph's diagram; path separators and other
/// characters that are unsafe in file names become `_`.
pub fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.trim().is_empty() {
        "_".to_string()
    } else {
        stem
    }
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
