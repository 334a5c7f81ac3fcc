use super::grid;
use crate::config::{GridConfig, HierarchicalConfig};
use crate::graph::{Edge, Node, Point};
use std::collections::{HashMap, HashSet};

/// Breadth-first topological leveling for tree-like graphs. Levels grow
/// downward; each level is centered around `config.axis_x`. The layered
/// fallback calls this with `rank_sep`/`node_sep` as the spacings.
pub(crate) fn arrange(
    nodes: &[Node],
    edges: &[Edge],
    level_spacing: f32,
    node_spacing: f32,
    config: &HierarchicalConfig,
) -> Vec<Node> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut incoming: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();
    for node in nodes {
        incoming.insert(node.id.as_str(), Vec::new());
        outgoing.insert(node.id.as_str(), Vec::new());
    }
    for edge in edges {
        if !incoming.contains_key(edge.source.as_str())
            || !incoming.contains_key(edge.target.as_str())
        {
            continue;
        }
        if let Some(sources) = incoming.get_mut(edge.target.as_str()) {
            sources.push(edge.source.as_str());
        }
        if let Some(targets) = outgoing.get_mut(edge.source.as_str()) {
            targets.push(edge.target.as_str());
        }
    }

    let roots: Vec<&str> = nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| incoming.get(id).is_none_or(Vec::is_empty))
        .collect();

    // Every node inside a cycle: no discoverable root, so leveling cannot
    // start. Fall back to a near-square grid.
    if roots.is_empty() {
        let fallback = GridConfig {
            columns: grid::square_columns(nodes.len()),
            ..GridConfig::default()
        };
        return grid::arrange(nodes, &fallback);
    }

    let mut levels: Vec<Vec<&str>> = Vec::new();
    let mut level_of: HashMap<&str, usize> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = roots;

    while !frontier.is_empty() {
        let level_index = levels.len();
        for &id in &frontier {
            visited.insert(id);
            level_of.insert(id, level_index);
        }

        let mut next: Vec<&str> = Vec::new();
        let mut queued: HashSet<&str> = HashSet::new();
        for &id in &frontier {
            let Some(children) = outgoing.get(id) else {
                continue;
            };
            for &child in children {
                if visited.contains(child) || queued.contains(child) {
                    continue;
                }
                // A child joins the next level only once every one of its
                // parents is leveled; otherwise a later frontier picks it
                // up through its remaining parents.
                let parents_done = incoming
                    .get(child)
                    .is_none_or(|parents| parents.iter().all(|parent| visited.contains(parent)));
                if parents_done {
                    queued.insert(child);
                    next.push(child);
                }
            }
        }

        levels.push(frontier);
        frontier = next;
    }

    nodes
        .iter()
        .map(|node| {
            // Nodes never reached (trapped in a cycle hanging off the
            // tree) default to level 0 rather than staying unplaced.
            let level = level_of.get(node.id.as_str()).copied().unwrap_or(0);
            let bucket: &[&str] = levels.get(level).map(Vec::as_slice).unwrap_or(&[]);
            let slot = bucket
                .iter()
                .position(|id| *id == node.id.as_str())
                .unwrap_or(0);
            let level_width = bucket.len().saturating_sub(1) as f32 * node_spacing;
            let start_x = -level_width / 2.0;
            Node {
                position: Point::new(
                    start_x + slot as f32 * node_spacing + config.axis_x,
                    level as f32 * level_spacing + config.margin_y,
                ),
                ..node.clone()
            }
        })
        .collect()
}
