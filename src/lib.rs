#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod countdown;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{LayoutConfig, load_config};
pub use ir::{Category, Record, parse_records};
pub use layout::{
    Axis, LayoutCache, LayoutError, TimelineLayout, compute_axis, compute_layout,
    project_records, resolve_stacking,
};
pub use theme::CategoryStyle;
