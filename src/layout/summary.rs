use super::*;

pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Record>) -> CategorySummary {
    let mut summary = CategorySummary::default();
    for record in records {
        summary.total += 1;
        match record.category {
            Category::Maintenance => summary.maintenance += 1,
            Category::Complaint => summary.complaint += 1,
            Category::Violation => summary.violation += 1,
            Category::Notice => summary.notice += 1,
            Category::Other(_) => summary.other += 1,
        }
    }
    summary
}

/// All records oldest first, equal dates in input order. Unlike the axis
/// projection this drops nothing.
pub fn chronological(records: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by_key(|record| record.event_date);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn counts_per_category() {
        let records = vec![
            Record::new("a", date(1), Category::Maintenance),
            Record::new("b", date(2), Category::Maintenance),
            Record::new("c", date(3), Category::Notice),
            Record::new("d", date(4), Category::from_tag("noise")),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.maintenance, 2);
        assert_eq!(summary.notice, 1);
        assert_eq!(summary.other, 1);
        assert_eq!(summary.complaint, 0);
    }

    #[test]
    fn chronological_is_stable() {
        let records = vec![
            Record::new("late", date(9), Category::Notice),
            Record::new("tie-1", date(3), Category::Notice),
            Record::new("tie-2", date(3), Category::Notice),
        ];
        let ids: Vec<&str> = chronological(&records).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["tie-1", "tie-2", "late"]);
    }
}
