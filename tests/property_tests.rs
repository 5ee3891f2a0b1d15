use proptest::prelude::*;
use std::collections::HashMap;

use dupcheck::{CellValue, CheckOptions, GroupOrder, Table, check_duplicates, summarize_groups};

const COLUMNS: [&str; 3] = ["a", "b", "c"];

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        (0i64..3).prop_map(CellValue::Int),
        prop::sample::select(vec!["x", "y"]).prop_map(CellValue::from),
    ]
}

fn table() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(cell(), 3), 0..40)
        .prop_map(|rows| Table::from_rows(COLUMNS, rows).unwrap())
}

fn selection() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(COLUMNS.to_vec(), 1..=3)
}

fn counts(summary: &Table) -> Vec<i64> {
    summary
        .rows()
        .iter()
        .map(|row| match row.last() {
            Some(CellValue::Int(n)) => *n,
            other => panic!("count cell missing: {other:?}"),
        })
        .collect()
}

proptest! {
    #[test]
    fn group_counts_sum_to_row_count(table in table(), columns in selection()) {
        let summary = summarize_groups(&table, &columns, &CheckOptions::default()).unwrap();
        prop_assert_eq!(counts(&summary).iter().sum::<i64>(), table.row_count() as i64);
    }

    #[test]
    fn report_matches_naive_count(table in table(), columns in selection()) {
        let indices: Vec<usize> = columns.iter().map(|c| table.column_index(c).unwrap()).collect();
        let mut naive: HashMap<Vec<CellValue>, usize> = HashMap::new();
        for row in table.rows() {
            let key = indices.iter().map(|&i| row[i].clone()).collect();
            *naive.entry(key).or_default() += 1;
        }
        let expected = naive.values().filter(|&&n| n > 1).count();

        let report = check_duplicates(&table, &columns).unwrap();
        prop_assert_eq!(report.duplicate_group_count, expected);
        prop_assert_eq!(report.duplicate_group_count, report.duplicate_groups.row_count());
        prop_assert!(counts(&report.duplicate_groups).iter().all(|&n| n > 1));
    }

    #[test]
    fn row_indices_match_counts(table in table(), columns in selection()) {
        let report = check_duplicates(&table, &columns).unwrap();
        let sizes: Vec<i64> = report.row_indices.iter().map(|r| r.len() as i64).collect();
        prop_assert_eq!(sizes, counts(&report.duplicate_groups));
    }

    #[test]
    fn order_does_not_change_groups(table in table(), columns in selection()) {
        let sorted = summarize_groups(&table, &columns, &CheckOptions::default()).unwrap();
        let options = CheckOptions { order: GroupOrder::FirstSeen, ..CheckOptions::default() };
        let first_seen = summarize_groups(&table, &columns, &options).unwrap();

        let mut a = sorted.rows().to_vec();
        let mut b = first_seen.rows().to_vec();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn checking_twice_is_identical(table in table(), columns in selection()) {
        let first = check_duplicates(&table, &columns).unwrap();
        let second = check_duplicates(&table, &columns).unwrap();
        prop_assert_eq!(first, second);
    }
}
