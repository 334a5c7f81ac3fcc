mod circular;
mod grid;
mod hierarchical;
mod layered;
mod overlap;
mod viewport;

pub use layered::{DagreRanker, LayeredError, RankedLayout};
pub use viewport::FitResult;

use crate::config::{EngineConfig, LayoutOptions};
use crate::graph::{Edge, Node, Size};
use std::collections::HashMap;

/// One of the interchangeable arrangement algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Grid,
    Circular,
    Hierarchical,
    Layered,
}

/// Picks an arrangement strategy from the graph's shape. Pure function of
/// node count, edge count, and in-degree distribution; only edges whose
/// endpoints both exist participate.
pub fn select_strategy(nodes: &[Node], edges: &[Edge]) -> Strategy {
    if nodes.len() <= 1 {
        return Strategy::Grid;
    }
    if nodes.len() <= 3 {
        return Strategy::Circular;
    }

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for node in nodes {
        in_degree.insert(node.id.as_str(), 0);
    }
    let mut edge_count = 0usize;
    for edge in edges {
        if !in_degree.contains_key(edge.source.as_str()) {
            continue;
        }
        let Some(count) = in_degree.get_mut(edge.target.as_str()) else {
            continue;
        };
        *count += 1;
        edge_count += 1;
    }

    let tree_like = in_degree.values().filter(|count| **count <= 1).count();
    let tree_fraction = tree_like as f32 / nodes.len() as f32;

    if tree_fraction > 0.8 {
        Strategy::Hierarchical
    } else if edge_count > 0 {
        Strategy::Layered
    } else if nodes.len() <= 10 {
        Strategy::Circular
    } else {
        Strategy::Grid
    }
}

/// Full pipeline: select a strategy, arrange, then resolve overlaps.
/// Returns a new node list; the input is never mutated. Empty input yields
/// an empty result.
pub fn compute_layout(nodes: &[Node], edges: &[Edge], options: &LayoutOptions) -> Vec<Node> {
    let config = EngineConfig {
        layout: options.clone(),
        ..EngineConfig::default()
    };
    compute_layout_with(nodes, edges, &config)
}

/// Same pipeline as [`compute_layout`] but with the full set of tunables.
pub fn compute_layout_with(nodes: &[Node], edges: &[Edge], config: &EngineConfig) -> Vec<Node> {
    let strategy = select_strategy(nodes, edges);
    compute_layout_using(strategy, nodes, edges, config)
}

/// Runs the pipeline with a caller-chosen strategy instead of the
/// heuristic.
pub fn compute_layout_using(
    strategy: Strategy,
    nodes: &[Node],
    edges: &[Edge],
    config: &EngineConfig,
) -> Vec<Node> {
    if nodes.is_empty() {
        return Vec::new();
    }
    tracing::debug!(
        ?strategy,
        nodes = nodes.len(),
        edges = edges.len(),
        "arranging graph"
    );

    let options = &config.layout;
    let arranged = match strategy {
        Strategy::Grid => grid::arrange(nodes, &config.grid),
        Strategy::Circular => circular::arrange(nodes, &config.circular, options),
        Strategy::Hierarchical => hierarchical::arrange(
            nodes,
            edges,
            config.hierarchical.level_spacing,
            config.hierarchical.node_spacing,
            &config.hierarchical,
        ),
        Strategy::Layered => arrange_layered(nodes, edges, config),
    };

    overlap::resolve(
        &arranged,
        options.node_width,
        config.overlap.min_spacing,
        config.overlap.max_iterations,
    )
}

/// Pipeline plus viewport fitting, for callers that know their canvas size.
pub fn compute_layout_fitted(
    nodes: &[Node],
    edges: &[Edge],
    options: &LayoutOptions,
    view: Size,
    padding: f32,
) -> Vec<Node> {
    let arranged = compute_layout(nodes, edges, options);
    viewport::fit(&arranged, view, padding, node_size(options)).nodes
}

/// Pushes overlapping nodes apart until every pair is at least
/// `node_width + min_spacing` apart, or the iteration cap is reached.
/// Dense clusters may keep a slight residual overlap at the cap.
pub fn resolve_overlaps(nodes: &[Node], min_spacing: f32) -> Vec<Node> {
    let options = LayoutOptions::default();
    overlap::resolve(nodes, options.node_width, min_spacing, 10)
}

/// Scales and translates the node set so its bounding box sits centered
/// inside `view` minus `padding` on each side. Never scales up.
pub fn fit_to_viewport(nodes: &[Node], view: Size, padding: f32) -> FitResult {
    viewport::fit(nodes, view, padding, node_size(&LayoutOptions::default()))
}

/// [`fit_to_viewport`] with an explicit node size instead of the default.
pub fn fit_to_viewport_with(
    nodes: &[Node],
    view: Size,
    padding: f32,
    options: &LayoutOptions,
) -> FitResult {
    viewport::fit(nodes, view, padding, node_size(options))
}

fn node_size(options: &LayoutOptions) -> Size {
    Size::new(options.node_width, options.node_height)
}

fn arrange_layered(nodes: &[Node], edges: &[Edge], config: &EngineConfig) -> Vec<Node> {
    let options = &config.layout;
    match DagreRanker.arrange(nodes, edges, options) {
        Ok(placed) => placed,
        Err(err) => {
            tracing::warn!(error = %err, "layered layout failed, falling back to hierarchical leveling");
            hierarchical::arrange(
                nodes,
                edges,
                options.rank_sep,
                options.node_sep,
                &config.hierarchical,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn node(id: &str) -> Node {
        Node::new(id, id)
    }

    fn edge(id: &str, source: &str, target: &str) -> Edge {
        Edge::new(id, source, target)
    }

    fn ids(count: usize) -> Vec<Node> {
        (0..count).map(|i| node(&format!("n{i}"))).collect()
    }

    #[test]
    fn tiny_graphs_pick_trivial_strategies() {
        assert_eq!(select_strategy(&[], &[]), Strategy::Grid);
        assert_eq!(select_strategy(&ids(1), &[]), Strategy::Grid);
        assert_eq!(select_strategy(&ids(2), &[]), Strategy::Circular);
        assert_eq!(select_strategy(&ids(3), &[]), Strategy::Circular);
    }

    #[test]
    fn linear_chain_is_hierarchical() {
        let nodes = ids(4);
        let edges = vec![
            edge("e0", "n0", "n1"),
            edge("e1", "n1", "n2"),
            edge("e2", "n2", "n3"),
        ];
        assert_eq!(select_strategy(&nodes, &edges), Strategy::Hierarchical);
    }

    #[test]
    fn heavy_fan_in_is_layered() {
        // n3 and n4 each take three feeds, so only 3 of 5 nodes keep
        // in-degree <= 1 and the tree fraction drops to 0.6.
        let nodes = ids(5);
        let edges = vec![
            edge("e0", "n0", "n3"),
            edge("e1", "n1", "n3"),
            edge("e2", "n2", "n3"),
            edge("e3", "n0", "n4"),
            edge("e4", "n1", "n4"),
            edge("e5", "n2", "n4"),
        ];
        assert_eq!(select_strategy(&nodes, &edges), Strategy::Layered);
    }

    #[test]
    fn edgeless_graphs_split_on_size() {
        assert_eq!(select_strategy(&ids(4), &[]), Strategy::Circular);
        assert_eq!(select_strategy(&ids(10), &[]), Strategy::Circular);
        assert_eq!(select_strategy(&ids(11), &[]), Strategy::Grid);
    }

    #[test]
    fn ghost_edges_do_not_count() {
        let nodes = ids(11);
        let edges = vec![edge("e0", "ghost", "n0"), edge("e1", "n0", "phantom")];
        assert_eq!(select_strategy(&nodes, &edges), Strategy::Grid);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let laid_out = compute_layout(&[], &[], &LayoutOptions::default());
        assert!(laid_out.is_empty());
    }

    #[test]
    fn single_node_lands_at_grid_origin() {
        let laid_out = compute_layout(&ids(1), &[], &LayoutOptions::default());
        assert_eq!(laid_out.len(), 1);
        assert_eq!(laid_out[0].position.x, 50.0);
        assert_eq!(laid_out[0].position.y, 50.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let nodes = ids(5);
        let before = nodes.clone();
        let _ = compute_layout(&nodes, &[], &LayoutOptions::default());
        assert_eq!(nodes, before);
    }

    #[test]
    fn forced_strategy_overrides_heuristic() {
        let nodes = ids(2);
        let heuristic = compute_layout_with(&nodes, &[], &EngineConfig::default());
        let forced =
            compute_layout_using(Strategy::Grid, &nodes, &[], &EngineConfig::default());
        assert_ne!(heuristic, forced);
        assert_eq!(forced[0].position.x, 50.0);
        assert_eq!(forced[1].position.x, 200.0);
    }

    #[test]
    fn every_strategy_emits_finite_positions() {
        let nodes = ids(6);
        let edges = vec![
            edge("e0", "n0", "n1"),
            edge("e1", "n0", "n2"),
            edge("e2", "n1", "n3"),
            edge("e3", "n2", "n3"),
            edge("e4", "n4", "n3"),
            edge("e5", "n5", "n3"),
        ];
        for strategy in [
            Strategy::Grid,
            Strategy::Circular,
            Strategy::Hierarchical,
            Strategy::Layered,
        ] {
            let laid_out =
                compute_layout_using(strategy, &nodes, &edges, &EngineConfig::default());
            assert_eq!(laid_out.len(), nodes.len(), "{strategy:?}");
            for placed in &laid_out {
                assert!(placed.position.is_finite(), "{strategy:?}: {}", placed.id);
            }
        }
    }
}
