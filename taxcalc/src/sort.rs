use tracing::debug;

use crate::record::TaxpayerRecord;

/// Sorts `records` in place by ascending salary.
///
/// Pairwise exchange sort: each slot `i` is compared with every later slot and
/// swapped whenever it holds the larger salary. Quadratic, no extra space, and
/// records move as whole units. The relative order of equal salaries is not
/// guaranteed.
pub fn sort_by_salary(records: &mut [TaxpayerRecord]) {
    let n = records.len();
    let mut swaps = 0usize;
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            if records[i].salary() > records[j].salary() {
                records.swap(i, j);
                swaps += 1;
            }
        }
    }
    debug!("Sorted {} records by salary ({} swaps)", n, swaps);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxRule;

    fn is_sorted_by_salary(records: &[TaxpayerRecord]) -> bool {
        records.windows(2).all(|w| w[0].salary() <= w[1].salary())
    }

    fn records(rows: &[(&str, &str, f64)]) -> Vec<TaxpayerRecord> {
        let rule = TaxRule::default();
        rows.iter()
            .map(|(name, company, salary)| TaxpayerRecord::new(*name, *company, *salary, &rule))
            .collect()
    }

    #[test]
    fn test_sort_permutes_whole_records() {
        let mut list = records(&[
            ("Alice", "Acme", 50_000.0),
            ("Bob", "Globex", 20_000.0),
            ("Carol", "Initech", 80_000.0),
        ]);
        sort_by_salary(&mut list);

        let names: Vec<_> = list.iter().map(|r| r.name()).collect();
        let companies: Vec<_> = list.iter().map(|r| r.company()).collect();
        let salaries: Vec<_> = list.iter().map(|r| r.salary()).collect();
        let taxes: Vec<_> = list.iter().map(|r| r.tax_owed()).collect();
        assert_eq!(names, ["Bob", "Alice", "Carol"]);
        assert_eq!(companies, ["Globex", "Acme", "Initech"]);
        assert_eq!(salaries, [20_000.0, 50_000.0, 80_000.0]);
        assert_eq!(taxes, [8_000.0, 20_000.0, 32_000.0]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = records(&[
            ("A", "a", 3.0),
            ("B", "b", 1.0),
            ("C", "c", 2.0),
            ("D", "d", 1.0),
            ("E", "e", 15_000_000.0),
        ]);
        sort_by_salary(&mut once);
        let mut twice = once.clone();
        sort_by_salary(&mut twice);
        assert_eq!(once, twice);
        assert!(is_sorted_by_salary(&twice));
    }

    #[test]
    fn test_sort_keeps_every_tuple() {
        let original = records(&[
            ("Zed", "Z", 900.0),
            ("Amy", "A", 100.0),
            ("Kim", "K", 500.0),
            ("Lee", "L", 500.0),
            ("Max", "M", 11_000_000.0),
            ("Ned", "N", 0.0),
        ]);
        let mut sorted = original.clone();
        sort_by_salary(&mut sorted);

        assert!(is_sorted_by_salary(&sorted));
        assert_eq!(sorted.len(), original.len());
        for record in &original {
            assert!(sorted.contains(record), "lost {}", record.name());
        }
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<TaxpayerRecord> = Vec::new();
        sort_by_salary(&mut empty);
        assert!(empty.is_empty());

        let mut single = records(&[("Solo", "S", 1.0)]);
        sort_by_salary(&mut single);
        assert_eq!(single[0].name(), "Solo");
    }
}
