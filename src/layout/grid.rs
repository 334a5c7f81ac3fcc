use crate::config::GridConfig;
use crate::graph::{Node, Point};

/// Row-major placement: index walks columns first, then rows.
pub(crate) fn arrange(nodes: &[Node], config: &GridConfig) -> Vec<Node> {
    let columns = config.columns.max(1);
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let column = index % columns;
            let row = index / columns;
            Node {
                position: Point::new(
                    column as f32 * config.spacing_x + config.margin,
                    row as f32 * config.spacing_y + config.margin,
                ),
                ..node.clone()
            }
        })
        .collect()
}

/// Column count for a near-square grid, used by fallback paths.
pub(crate) fn square_columns(count: usize) -> usize {
    ((count as f32).sqrt().ceil() as usize).max(1)
}
