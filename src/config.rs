use crate::graph::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Flow orientation handed to the layered arranger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "TB", alias = "TD")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LR" => Some(Self::LeftRight),
            "RL" => Some(Self::RightLeft),
            "TB" | "TD" => Some(Self::TopBottom),
            "BT" => Some(Self::BottomTop),
            _ => None,
        }
    }

    pub(crate) fn rankdir(self) -> &'static str {
        match self {
            Self::LeftRight => "lr",
            Self::RightLeft => "rl",
            Self::TopBottom => "tb",
            Self::BottomTop => "bt",
        }
    }
}

/// Per-call layout options. Callers usually override a subset and keep the
/// rest at their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub direction: Direction,
    pub node_width: f32,
    pub node_height: f32,
    /// Space between tiers, along the flow direction.
    pub rank_sep: f32,
    /// Space between nodes sharing a tier.
    pub node_sep: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::LeftRight,
            node_width: 100.0,
            node_height: 60.0,
            rank_sep: 100.0,
            node_sep: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub columns: usize,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub margin: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            spacing_x: 150.0,
            spacing_y: 100.0,
            margin: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CircularConfig {
    pub radius: f32,
    pub center: Point,
}

impl Default for CircularConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            center: Point::new(300.0, 200.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HierarchicalConfig {
    pub level_spacing: f32,
    pub node_spacing: f32,
    /// Each level is centered around this vertical axis.
    pub axis_x: f32,
    pub margin_y: f32,
}

impl Default for HierarchicalConfig {
    fn default() -> Self {
        Self {
            level_spacing: 120.0,
            node_spacing: 150.0,
            axis_x: 300.0,
            margin_y: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlapConfig {
    pub min_spacing: f32,
    pub max_iterations: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            min_spacing: 20.0,
            max_iterations: 10,
        }
    }
}

/// Everything the pipeline consults, bundled for callers that tune more
/// than the per-call options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub layout: LayoutOptions,
    pub grid: GridConfig,
    pub circular: CircularConfig,
    pub hierarchical: HierarchicalConfig,
    pub overlap: OverlapConfig,
}

/// Loads an `EngineConfig` from a JSON file (JSON5 accepted, so trailing
/// commas and comments are fine). `None` yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = json5::from_str(&contents)?;
    Ok(config)
}
