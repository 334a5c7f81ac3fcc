#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod graph;
pub mod layout;

pub use config::{Direction, EngineConfig, LayoutOptions, load_config};
pub use graph::{Edge, GraphSnapshot, Node, Point, Size};
pub use layout::{
    FitResult, Strategy, compute_layout, compute_layout_fitted, compute_layout_using,
    compute_layout_with, fit_to_viewport, fit_to_viewport_with, resolve_overlaps,
    select_strategy,
};

#[cfg(feature = "cli")]
pub use cli::run;
