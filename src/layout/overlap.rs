use crate::graph::Node;

/// Iterative pairwise repulsion. Each node is modeled as a collision disk;
/// overlapping pairs are pushed apart symmetrically along the line between
/// them. Approximate on purpose: dense clusters may keep a slight residual
/// overlap once the iteration cap is reached.
pub(crate) fn resolve(
    nodes: &[Node],
    node_width: f32,
    min_spacing: f32,
    max_iterations: usize,
) -> Vec<Node> {
    if nodes.len() <= 1 {
        return nodes.to_vec();
    }

    let mut resolved: Vec<Node> = nodes.to_vec();
    let min_distance = node_width + min_spacing;

    for _ in 0..max_iterations {
        let mut moved = false;
        for i in 0..resolved.len() {
            for j in (i + 1)..resolved.len() {
                let dx = resolved[j].position.x - resolved[i].position.x;
                let dy = resolved[j].position.y - resolved[i].position.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance >= min_distance {
                    continue;
                }
                moved = true;

                let shortfall = (min_distance - distance) / 2.0;
                // Coincident nodes leave the push direction undefined;
                // separate along the x axis.
                let angle = if distance <= f32::EPSILON {
                    0.0
                } else {
                    dy.atan2(dx)
                };
                let push_x = angle.cos() * shortfall;
                let push_y = angle.sin() * shortfall;

                resolved[i].position.x -= push_x;
                resolved[i].position.y -= push_y;
                resolved[j].position.x += push_x;
                resolved[j].position.y += push_y;
            }
        }
        if !moved {
            break;
        }
    }

    resolved
}
