use super::*;

/// Derives the visible date window from the record set and the current moment.
///
/// With records, the window opens `lead_padding_days` before the earliest
/// record and closes `trail_padding_days` after today. Without records it
/// falls back to the configured month start through today.
pub fn compute_axis(
    records: &[Record],
    now: DateTime<Utc>,
    config: &LayoutConfig,
) -> Result<Axis, LayoutError> {
    let today = now.date_naive();

    let (start, end) = match records.iter().map(|record| record.event_date).min() {
        Some(earliest) => {
            let start = earliest
                .checked_sub_days(Days::new(config.lead_padding_days.into()))
                .ok_or_else(|| LayoutError::InvalidDate(earliest.to_string()))?;
            let end = today
                .checked_add_days(Days::new(config.trail_padding_days.into()))
                .ok_or_else(|| LayoutError::InvalidDate(today.to_string()))?;
            (start, end)
        }
        None => {
            let fallback = config.fallback_axis_month_start;
            let start = fallback.first_day(today).ok_or_else(|| {
                LayoutError::config(format!(
                    "fallbackAxisMonthStart {:?} does not name a calendar month",
                    fallback
                ))
            })?;
            (start, today)
        }
    };

    if today < start {
        return Err(LayoutError::config(format!(
            "current date {today} is earlier than the axis start {start}"
        )));
    }

    let total_days = (end - start).num_days().max(1);
    debug!(%start, %end, total_days, records = records.len(), "computed axis");
    Ok(Axis {
        start,
        end,
        total_days,
    })
}
