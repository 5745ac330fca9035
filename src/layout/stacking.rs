use super::*;

/// Validated inputs of the stacking pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackingParams {
    threshold: f32,
    max_level: u32,
}

impl StackingParams {
    pub fn new(threshold: f32, max_level: i32) -> Result<Self, LayoutError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(LayoutError::config(format!(
                "proximity threshold must be a positive number, got {threshold}"
            )));
        }
        let max_level = u32::try_from(max_level).map_err(|_| {
            LayoutError::config(format!("max stack level must not be negative, got {max_level}"))
        })?;
        Ok(Self {
            threshold,
            max_level,
        })
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Self::new(config.proximity_threshold, config.max_stack_level)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn max_level(&self) -> u32 {
        self.max_level
    }
}

/// Assigns each record the lowest level not used by an already placed record
/// within `threshold` of it, saturating at `max_level`.
///
/// Records are visited by ascending position, ties in input order, so the
/// output is in that order too. Placement is greedy: a level is never revisited
/// once assigned.
pub fn resolve_stacked<'a>(
    projected: &[ProjectedRecord<'a>],
    params: &StackingParams,
) -> Vec<StackedRecord<'a>> {
    let mut order: Vec<&ProjectedRecord<'a>> = projected.iter().collect();
    // stable: equal positions keep input order
    order.sort_by(|a, b| a.position.total_cmp(&b.position));

    let mut placed: Vec<(f32, u32)> = Vec::with_capacity(order.len());
    let mut stacked = Vec::with_capacity(order.len());
    let mut used: Vec<u32> = Vec::new();
    let mut saturated = 0usize;

    for current in order {
        used.clear();
        // `placed` is sorted by position, so walk back until out of reach.
        for &(position, level) in placed.iter().rev() {
            if current.position - position >= params.threshold {
                break;
            }
            used.push(level);
        }
        used.sort_unstable();
        used.dedup();

        let mut level = 0u32;
        for &taken in &used {
            if taken == level {
                level += 1;
            } else if taken > level {
                break;
            }
        }
        if level > params.max_level {
            level = params.max_level;
            saturated += 1;
        }

        trace!(id = %current.record.id, position = current.position, level, "stacked record");
        placed.push((current.position, level));
        stacked.push(StackedRecord {
            record: current.record,
            days_from_start: current.days_from_start,
            position: current.position,
            stack_level: level,
        });
    }

    if saturated > 0 {
        warn!(
            saturated,
            max_level = params.max_level,
            "stack saturated; records share the top level"
        );
    }
    debug!(records = stacked.len(), "resolved stacking");
    stacked
}

/// Stack level per record id.
pub fn resolve_stacking(
    projected: &[ProjectedRecord<'_>],
    threshold: f32,
    max_level: i32,
) -> Result<BTreeMap<String, u32>, LayoutError> {
    let params = StackingParams::new(threshold, max_level)?;
    Ok(resolve_stacked(projected, &params)
        .into_iter()
        .map(|stacked| (stacked.record.id.clone(), stacked.stack_level))
        .collect())
}
