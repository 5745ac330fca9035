use chrono::{DateTime, Days, NaiveDate, Utc};
use incident_timeline::layout::{StackingParams, resolve_stacked};
use incident_timeline::{
    Category, LayoutConfig, Record, compute_axis, compute_layout, project_records,
};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
}

fn now() -> DateTime<Utc> {
    base()
        .checked_add_days(Days::new(60))
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc()
}

fn records_from(offsets: &[u64]) -> Vec<Record> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            Record::new(
                format!("r{i}"),
                base().checked_add_days(Days::new(offset)).unwrap(),
                Category::Maintenance,
            )
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_is_deterministic(offsets in prop::collection::vec(0u64..60, 0..40)) {
        let records = records_from(&offsets);
        let config = LayoutConfig::default();
        let first = compute_layout(&records, now(), &config).unwrap();
        let second = compute_layout(&records, now(), &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn earlier_record_never_moves_start_later(
        offsets in prop::collection::vec(0u64..60, 1..20),
        earlier in 0u64..30,
    ) {
        let mut records = records_from(&offsets);
        let config = LayoutConfig::default();
        let before = compute_axis(&records, now(), &config).unwrap();
        let date = before.start.checked_sub_days(Days::new(earlier)).unwrap();
        records.push(Record::new("extra", date, Category::Notice));
        let after = compute_axis(&records, now(), &config).unwrap();
        prop_assert!(after.start <= before.start);
    }

    #[test]
    fn colliding_records_below_cap_differ(
        offsets in prop::collection::vec(0u64..60, 0..60),
        threshold in 0.5f32..10.0,
        max_level in 0i32..8,
    ) {
        let records = records_from(&offsets);
        let config = LayoutConfig::default();
        let axis = compute_axis(&records, now(), &config).unwrap();
        let projection = project_records(&records, &axis);
        let params = StackingParams::new(threshold, max_level).unwrap();
        let stacked = resolve_stacked(&projection.visible, &params);
        let cap = max_level as u32;

        for (i, a) in stacked.iter().enumerate() {
            prop_assert!(a.stack_level <= cap);
            for b in &stacked[i + 1..] {
                let collide = (a.position - b.position).abs() < threshold;
                if collide && a.stack_level < cap && b.stack_level < cap {
                    prop_assert_ne!(a.stack_level, b.stack_level);
                }
            }
        }
    }

    #[test]
    fn out_of_range_records_never_appear(
        mut offsets in prop::collection::vec(0u64..120, 1..30),
    ) {
        // anchor one record at the base so the axis starts before now
        offsets.push(0);
        let records = records_from(&offsets);
        let layout = compute_layout(&records, now(), &LayoutConfig::default()).unwrap();
        for record in &records {
            let inside = layout.axis.contains(record.event_date);
            let shown = layout.markers.iter().any(|m| m.id == record.id);
            prop_assert_eq!(inside, shown);
            prop_assert_eq!(!inside, layout.excluded.contains(&record.id));
        }
    }
}
