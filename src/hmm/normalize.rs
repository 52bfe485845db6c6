use std::collections::BTreeMap;

use super::table::{CountTable, LogProbTable};

/// Turns every count into `ln(count / row_total)`, row by row.
///
/// Consumes the counts: a log-probability table cannot be fed back in, so each
/// raw table is normalized exactly once.
pub fn normalize<S: Ord, D: Ord>(counts: CountTable<S, D>) -> LogProbTable<S, D> {
    let rows = counts
        .into_rows()
        .into_iter()
        .filter_map(|(src, row)| {
            let total: u64 = row.values().sum();
            if total == 0 {
                return None;
            }
            let total = total as f64;
            let row: BTreeMap<D, f64> = row
                .into_iter()
                .filter(|(_, n)| *n > 0)
                .map(|(dst, n)| (dst, (n as f64 / total).ln()))
                .collect();
            Some((src, row))
        })
        .collect();
    LogProbTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> CountTable<&'static str, &'static str> {
        let mut t = CountTable::default();
        for (s, d) in [("N", "V"), ("N", "V"), ("N", "N"), ("V", "N"), ("DET", "N"), ("N", "DET"), ("N", "V")] {
            t.increment(s, d);
        }
        t
    }

    #[test]
    fn rows_sum_to_one() {
        let table = normalize(counts());
        assert_eq!(table.len(), 3);
        for (src, row) in table.rows() {
            let sum: f64 = row.values().map(|x| x.exp()).sum();
            assert!((sum - 1.0).abs() < 1e-12, "{src}: {sum}");
        }
    }

    #[test]
    fn values() {
        let table = normalize(counts());
        let p = table.get("N", "V").unwrap();
        assert!((p - (3.0_f64 / 5.0).ln()).abs() < 1e-12);
        assert_eq!(table.get("V", "N"), Some(0.0));
        assert_eq!(table.get("V", "V"), None);
        assert_eq!(table.get("ADJ", "N"), None);
    }

    #[test]
    fn empty() {
        let table = normalize(CountTable::<String, String>::default());
        assert!(table.is_empty());
    }
}
