use crate::config::LayoutOptions;
use crate::graph::{Edge, Node, Point};
use dagre_rust::{
    GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode,
    layout as dagre_layout,
};
use graphlib_rust::{Graph as DagreGraph, GraphOption};
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Why the layered algorithm could not produce a usable arrangement. Never
/// crosses the public API; the pipeline maps it to the hierarchical
/// fallback.
#[derive(Debug, Error)]
pub enum LayeredError {
    #[error("layered algorithm panicked")]
    AlgorithmPanic,
    #[error("no position computed for node {0}")]
    MissingPosition(String),
    #[error("non-finite coordinate for node {0}")]
    NonFinite(String),
}

/// Capability interface over a layered (rank + crossing reduction)
/// graph-drawing algorithm, so the concrete dependency stays swappable.
pub trait RankedLayout {
    fn arrange(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        options: &LayoutOptions,
    ) -> Result<Vec<Node>, LayeredError>;
}

/// [`RankedLayout`] over the dagre port. The algorithm reports node
/// centers; these are converted to top-left corners before returning.
pub struct DagreRanker;

impl RankedLayout for DagreRanker {
    fn arrange(
        &self,
        nodes: &[Node],
        edges: &[Edge],
        options: &LayoutOptions,
    ) -> Result<Vec<Node>, LayeredError> {
        if nodes.is_empty() {
            return Ok(Vec::new());
        }

        let node_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
        let mut edge_set: HashSet<(&str, &str)> = HashSet::new();
        let mut ranked_edges: Vec<(String, String)> = Vec::new();
        for edge in edges {
            // Self-loops and edges with unknown endpoints carry no rank
            // information; duplicates would make the graph a multigraph.
            if edge.source == edge.target {
                continue;
            }
            if !node_ids.contains(edge.source.as_str()) || !node_ids.contains(edge.target.as_str())
            {
                continue;
            }
            if !edge_set.insert((edge.source.as_str(), edge.target.as_str())) {
                continue;
            }
            ranked_edges.push((edge.source.clone(), edge.target.clone()));
        }

        // The dagre port has no error channel; a panic is its failure mode.
        let centers = panic::catch_unwind(AssertUnwindSafe(|| {
            run_ranker(nodes, &ranked_edges, options)
        }))
        .map_err(|_| LayeredError::AlgorithmPanic)?;

        let mut placed = Vec::with_capacity(nodes.len());
        for (node, center) in nodes.iter().zip(centers) {
            let Some(center) = center else {
                return Err(LayeredError::MissingPosition(node.id.clone()));
            };
            let position = Point::new(
                center.x - options.node_width / 2.0,
                center.y - options.node_height / 2.0,
            );
            if !position.is_finite() {
                return Err(LayeredError::NonFinite(node.id.clone()));
            }
            placed.push(Node {
                position,
                ..node.clone()
            });
        }
        Ok(placed)
    }
}

fn run_ranker(
    nodes: &[Node],
    edges: &[(String, String)],
    options: &LayoutOptions,
) -> Vec<Option<Point>> {
    let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> =
        DagreGraph::new(Some(GraphOption {
            directed: Some(true),
            multigraph: Some(false),
            compound: Some(false),
        }));

    let mut graph_config = DagreConfig::default();
    graph_config.rankdir = Some(options.direction.rankdir().to_string());
    graph_config.nodesep = Some(options.node_sep);
    graph_config.ranksep = Some(options.rank_sep);
    graph_config.marginx = Some(50.0);
    graph_config.marginy = Some(50.0);
    dagre_graph.set_graph(graph_config);

    for (order, node) in nodes.iter().enumerate() {
        let mut ranked = DagreNode::default();
        ranked.width = options.node_width;
        ranked.height = options.node_height;
        ranked.order = Some(order);
        dagre_graph.set_node(node.id.clone(), Some(ranked));
    }

    for (from, to) in edges {
        let edge_label = DagreEdge::default();
        let _ = dagre_graph.set_edge(from, to, Some(edge_label), None);
    }

    dagre_layout::run_layout(&mut dagre_graph);

    nodes
        .iter()
        .map(|node| {
            dagre_graph
                .node(&node.id)
                .map(|ranked| Point::new(ranked.x, ranked.y))
        })
        .collect()
}
