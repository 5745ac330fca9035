use chrono::NaiveDate;
use serde::Serialize;

use crate::countdown::Countdown;
use crate::ir::{Category, Record};

/// Visible date window. `total_days` is never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axis {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
}

impl Axis {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days_from_start(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    pub fn percent(&self, days_from_start: i64) -> f32 {
        (days_from_start as f32 / self.total_days as f32 * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedRecord<'a> {
    pub record: &'a Record,
    pub days_from_start: i64,
    pub position: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedRecord<'a> {
    pub record: &'a Record,
    pub days_from_start: i64,
    pub position: f32,
    pub stack_level: u32,
}

#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub visible: Vec<ProjectedRecord<'a>>,
    pub excluded: Vec<&'a Record>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekMarker {
    pub date: NaiveDate,
    pub days_from_start: i64,
    pub position: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub total: usize,
    pub maintenance: usize,
    pub complaint: usize,
    pub violation: usize,
    pub notice: usize,
    pub other: usize,
}

/// Owned marker ready for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    pub id: String,
    pub category: Category,
    pub event_date: NaiveDate,
    pub days_from_start: i64,
    pub position: f32,
    pub stack_level: u32,
}

impl From<&StackedRecord<'_>> for MarkerLayout {
    fn from(stacked: &StackedRecord<'_>) -> Self {
        Self {
            id: stacked.record.id.clone(),
            category: stacked.record.category.clone(),
            event_date: stacked.record.event_date,
            days_from_start: stacked.days_from_start,
            position: stacked.position,
            stack_level: stacked.stack_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub axis: Axis,
    /// Visible records in ascending position order.
    pub markers: Vec<MarkerLayout>,
    /// Ids of records dated outside the axis, in input order.
    pub excluded: Vec<String>,
    pub week_markers: Vec<WeekMarker>,
    pub summary: CategorySummary,
    pub countdown: Option<Countdown>,
}

impl TimelineLayout {
    pub fn stack_level(&self, id: &str) -> Option<u32> {
        self.markers
            .iter()
            .find(|marker| marker.id == id)
            .map(|marker| marker.stack_level)
    }
}
