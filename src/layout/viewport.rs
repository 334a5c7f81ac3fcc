use crate::graph::{Node, Point, Size};

/// Outcome of a viewport fit: the transformed nodes plus the transform
/// itself, so the renderer can apply the same scale/offset to edges.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub nodes: Vec<Node>,
    pub scale: f32,
    pub offset: Point,
}

/// Uniform scale/translate mapping the node set's bounding box into
/// `view` minus `padding` on each side, centered. Never upscales.
pub(crate) fn fit(nodes: &[Node], view: Size, padding: f32, node_size: Size) -> FitResult {
    if nodes.is_empty() {
        return FitResult {
            nodes: Vec::new(),
            scale: 1.0,
            offset: Point::default(),
        };
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for node in nodes {
        min_x = min_x.min(node.position.x);
        min_y = min_y.min(node.position.y);
        max_x = max_x.max(node.position.x + node_size.width);
        max_y = max_y.max(node.position.y + node_size.height);
    }

    let content_width = max_x - min_x;
    let content_height = max_y - min_y;
    let available_width = view.width - padding * 2.0;
    let available_height = view.height - padding * 2.0;

    // Degenerate extents (and a padding that eats the whole view) would
    // divide by zero or flip the scale negative; render at 1:1 instead.
    let scale = if content_width <= 0.0
        || content_height <= 0.0
        || available_width <= 0.0
        || available_height <= 0.0
    {
        1.0
    } else {
        (available_width / content_width)
            .min(available_height / content_height)
            .min(1.0)
    };

    let offset = Point::new(
        (view.width - content_width * scale) / 2.0 - min_x * scale,
        (view.height - content_height * scale) / 2.0 - min_y * scale,
    );

    let nodes = nodes
        .iter()
        .map(|node| Node {
            position: Point::new(
                node.position.x * scale + offset.x,
                node.position.y * scale + offset.y,
            ),
            ..node.clone()
        })
        .collect();

    FitResult {
        nodes,
        scale,
        offset,
    }
}
