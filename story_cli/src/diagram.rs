//! Mermaid flowchart rendering of the scene graph's edge list.

use story_core::{Edge, SceneGraph, Target, TERMINAL_TARGET};

/// Render the graph as a Mermaid `flowchart TD`.
///
/// Every scene becomes a node labelled with its id (underscores shown as
/// spaces), every action an edge labelled with the action text.
pub fn to_mermaid(graph: &SceneGraph) -> String {
    let mut lines = vec!["flowchart TD".to_string()];

    for scene in graph.scenes() {
        lines.push(format!(
            "    {}(\"{}\")",
            node_id(scene.id.as_str()),
            escape(&scene.id.as_str().replace('_', " "))
        ));
    }

    let edges = graph.export_edges();
    if edges.iter().any(|edge| edge.to.is_terminal()) {
        lines.push(format!("    {TERMINAL_TARGET}((\"{TERMINAL_TARGET}\"))"));
    }
    lines.extend(edges.iter().map(edge_line));

    lines.join("\n")
}

fn edge_line(edge: &Edge) -> String {
    let to = match &edge.to {
        Target::Scene(scene) => node_id(scene.id().as_str()),
        Target::Terminal => TERMINAL_TARGET.to_string(),
    };
    format!(
        "    {} -->|\"{}\"| {}",
        node_id(edge.from.as_str()),
        escape(&edge.label),
        to
    )
}

/// Mermaid node ids must be plain identifiers.
fn node_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('"', "#quot;")
}
