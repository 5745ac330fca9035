use super::*;

/// Places each record on the percent axis, in input order.
///
/// Records dated outside `[axis.start, axis.end]` are excluded rather than
/// pinned to an edge; the clamp only absorbs float error at the bounds.
pub fn project_records<'a>(records: &'a [Record], axis: &Axis) -> Projection<'a> {
    let mut visible = Vec::with_capacity(records.len());
    let mut excluded = Vec::new();

    for record in records {
        let days_from_start = axis.days_from_start(record.event_date);
        // `total_days` is floored at 1, so check the dates rather than the span
        if !axis.contains(record.event_date) {
            trace!(id = %record.id, days_from_start, "record outside axis");
            excluded.push(record);
            continue;
        }
        visible.push(ProjectedRecord {
            record,
            days_from_start,
            position: axis.percent(days_from_start),
        });
    }

    Projection { visible, excluded }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::ir::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn axis() -> Axis {
        Axis {
            start: date(2025, 10, 1),
            end: date(2025, 10, 22),
            total_days: 21,
        }
    }

    #[test]
    fn projects_onto_percent_axis() {
        let records = vec![Record::new("a", date(2025, 10, 8), Category::Complaint)];
        let projection = project_records(&records, &axis());
        assert_eq!(projection.visible.len(), 1);
        let projected = projection.visible[0];
        assert_eq!(projected.days_from_start, 7);
        assert!((projected.position - 33.333).abs() < 0.01);
    }

    #[test]
    fn boundaries_are_inclusive() {
        let records = vec![
            Record::new("first", date(2025, 10, 1), Category::Notice),
            Record::new("last", date(2025, 10, 22), Category::Notice),
        ];
        let projection = project_records(&records, &axis());
        assert_eq!(projection.visible[0].position, 0.0);
        assert_eq!(projection.visible[1].position, 100.0);
        assert!(projection.excluded.is_empty());
    }

    #[test]
    fn out_of_range_records_are_excluded_not_clamped() {
        let records = vec![
            Record::new("early", date(2025, 9, 30), Category::Notice),
            Record::new("inside", date(2025, 10, 10), Category::Notice),
            Record::new("late", date(2025, 10, 23), Category::Notice),
        ];
        let projection = project_records(&records, &axis());
        let visible: Vec<&str> = projection.visible.iter().map(|p| p.record.id.as_str()).collect();
        let excluded: Vec<&str> = projection.excluded.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(visible, ["inside"]);
        assert_eq!(excluded, ["early", "late"]);
    }

    #[test]
    fn single_day_axis_excludes_next_day() {
        let axis = Axis {
            start: date(2025, 10, 15),
            end: date(2025, 10, 15),
            total_days: 1,
        };
        let records = vec![
            Record::new("today", date(2025, 10, 15), Category::Notice),
            Record::new("tomorrow", date(2025, 10, 16), Category::Notice),
        ];
        let projection = project_records(&records, &axis);
        assert_eq!(projection.visible.len(), 1);
        assert_eq!(projection.excluded[0].id, "tomorrow");
    }
}
