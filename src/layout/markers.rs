use super::*;

/// Grid markers every `interval_days` from the axis start, last one at or
/// before `total_days`.
pub fn week_markers(axis: &Axis, interval_days: u32) -> Vec<WeekMarker> {
    let step = interval_days.max(1) as usize;
    (0..=axis.total_days)
        .step_by(step)
        .filter_map(|day| {
            let date = axis.start.checked_add_days(Days::new(day as u64))?;
            Some(WeekMarker {
                date,
                days_from_start: day,
                position: axis.percent(day),
            })
        })
        .collect()
}
