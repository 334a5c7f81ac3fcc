use crate::config::{CircularConfig, LayoutOptions};
use crate::graph::{Node, Point};

/// Radial placement. A single node sits at the configured center; with
/// more, each node's box is centered on its circle point so the visual
/// box, not its corner, lies on the circle.
pub(crate) fn arrange(
    nodes: &[Node],
    config: &CircularConfig,
    options: &LayoutOptions,
) -> Vec<Node> {
    match nodes.len() {
        0 => Vec::new(),
        1 => vec![Node {
            position: config.center,
            ..nodes[0].clone()
        }],
        count => {
            let angle_step = std::f32::consts::TAU / count as f32;
            nodes
                .iter()
                .enumerate()
                .map(|(index, node)| {
                    let angle = index as f32 * angle_step;
                    Node {
                        position: Point::new(
                            config.center.x + config.radius * angle.cos()
                                - options.node_width / 2.0,
                            config.center.y + config.radius * angle.sin()
                                - options.node_height / 2.0,
                        ),
                        ..node.clone()
                    }
                })
                .collect()
        }
    }
}
