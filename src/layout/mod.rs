//! Temporal layout: axis derivation, projection onto the percent axis, and
//! collision-free stacking of nearby markers.
//!
//! Every pass is a pure function of the record set, "now" and the config.

mod axis;
mod cache;
mod error;
mod markers;
mod projection;
mod stacking;
mod summary;
pub(crate) mod types;
pub use axis::compute_axis;
pub use cache::LayoutCache;
pub use error::LayoutError;
pub use markers::week_markers;
pub use projection::project_records;
pub use stacking::{StackingParams, resolve_stacked, resolve_stacking};
pub use summary::{chronological, summarize};
pub use types::*;

use crate::config::LayoutConfig;
use crate::countdown::Countdown;
use crate::ir::{Category, Record};
use chrono::{DateTime, Days, Utc};
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{debug, debug_span, trace, warn};

/// Runs the full layout pass for one render.
///
/// Configuration is validated before any record is looked at.
pub fn compute_layout(
    records: &[Record],
    now: DateTime<Utc>,
    config: &LayoutConfig,
) -> Result<TimelineLayout, LayoutError> {
    let _span = debug_span!("compute_layout", records = records.len()).entered();
    config.validate()?;
    let params = StackingParams::from_config(config)?;

    let axis = compute_axis(records, now, config)?;
    let projection = project_records(records, &axis);
    let stacked = resolve_stacked(&projection.visible, &params);

    let markers: Vec<MarkerLayout> = stacked.iter().map(MarkerLayout::from).collect();
    let summary = summarize(stacked.iter().map(|s| s.record));
    let excluded = projection
        .excluded
        .iter()
        .map(|record| record.id.clone())
        .collect::<Vec<_>>();
    if !excluded.is_empty() {
        debug!(excluded = excluded.len(), "records outside axis");
    }

    Ok(TimelineLayout {
        axis,
        markers,
        excluded,
        week_markers: week_markers(&axis, config.marker_interval_days),
        summary,
        countdown: config
            .countdown_target
            .map(|target| Countdown::until(target, now)),
    })
}
