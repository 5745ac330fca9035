use super::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

const DEFAULT_CAPACITY: usize = 16;

/// Memoizes [`compute_layout`] on inputs that can change its output.
///
/// The key covers each record's id, date and category, the UTC date of "now"
/// (the full instant when a countdown is configured), and every config field.
#[derive(Debug)]
pub struct LayoutCache {
    capacity: usize,
    entries: HashMap<u64, Arc<TimelineLayout>>,
    order: VecDeque<u64>,
    hits: u64,
    misses: u64,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LayoutCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn get_or_compute(
        &mut self,
        records: &[Record],
        now: DateTime<Utc>,
        config: &LayoutConfig,
    ) -> Result<Arc<TimelineLayout>, LayoutError> {
        let key = fingerprint(records, now, config);
        if let Some(layout) = self.entries.get(&key) {
            self.hits += 1;
            trace!(key, "layout cache hit");
            return Ok(Arc::clone(layout));
        }

        self.misses += 1;
        let layout = Arc::new(compute_layout(records, now, config)?);
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
        self.order.push_back(key);
        self.entries.insert(key, Arc::clone(&layout));
        Ok(layout)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

fn fingerprint(records: &[Record], now: DateTime<Utc>, config: &LayoutConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.len().hash(&mut hasher);
    for record in records {
        record.id.hash(&mut hasher);
        record.event_date.hash(&mut hasher);
        record.category.hash(&mut hasher);
    }
    match config.countdown_target {
        Some(target) => {
            target.hash(&mut hasher);
            now.hash(&mut hasher);
        }
        None => now.date_naive().hash(&mut hasher),
    }
    config.lead_padding_days.hash(&mut hasher);
    config.trail_padding_days.hash(&mut hasher);
    config.proximity_threshold.to_bits().hash(&mut hasher);
    config.max_stack_level.hash(&mut hasher);
    config.fallback_axis_month_start.hash(&mut hasher);
    config.marker_interval_days.hash(&mut hasher);
    hasher.finish()
}
