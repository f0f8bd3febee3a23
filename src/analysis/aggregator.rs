//! Reign statistics aggregation.
//!
//! This module provides the summary queries computed over a resolved
//! dataset: longest single reign, longest cumulative house, and most
//! common first name.

use crate::error::StatError;
use crate::models::{HouseTotal, LongestReign, ReignRecord, ReignStats};
use std::collections::HashMap;

/// The monarch with the longest single reign.
///
/// Ties keep the earliest record in input order.
pub fn longest_reign(records: &[ReignRecord]) -> Result<LongestReign, StatError> {
    let mut best = records.first().ok_or(StatError::EmptyInput)?;

    for record in &records[1..] {
        if record.duration > best.duration {
            best = record;
        }
    }

    Ok(LongestReign {
        name: best.name.clone(),
        years: best.duration,
    })
}

/// Cumulative reign duration per house.
///
/// Houses are keyed by exact, case-sensitive name and returned in order of
/// first appearance in the input.
pub fn house_totals(records: &[ReignRecord]) -> Vec<HouseTotal> {
    let mut totals: Vec<HouseTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.house.as_str()) {
            Some(&i) => totals[i].years += record.duration,
            None => {
                index.insert(record.house.as_str(), totals.len());
                totals.push(HouseTotal {
                    house: record.house.clone(),
                    years: record.duration,
                });
            }
        }
    }

    totals
}

/// The house with the greatest cumulative reign duration.
///
/// Scans houses in first-appearance order; only a strictly greater sum
/// displaces the running winner, so ties keep the earliest house.
pub fn longest_ruling_house(records: &[ReignRecord]) -> Result<HouseTotal, StatError> {
    let totals = house_totals(records);
    let mut best = totals.first().cloned().ok_or(StatError::EmptyInput)?;

    for total in &totals[1..] {
        if total.years > best.years {
            best = total.clone();
        }
    }

    Ok(best)
}

/// Occurrence counts of first-name tokens.
///
/// Tokens are compared by exact text equality and returned in order of
/// first appearance in the input.
pub fn first_name_counts(records: &[ReignRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let token = record.first_name();
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.to_string(), counts.len());
                counts.push((token.to_string(), 1));
            }
        }
    }

    counts
}

/// The most frequently occurring first name.
///
/// Among tokens sharing the maximum count, the one appearing first in the
/// input wins.
pub fn most_common_first_name(records: &[ReignRecord]) -> Result<String, StatError> {
    let counts = first_name_counts(records);
    let (mut best_name, mut best_count) = counts.first().cloned().ok_or(StatError::EmptyInput)?;

    for (name, count) in &counts[1..] {
        if *count > best_count {
            best_name = name.clone();
            best_count = *count;
        }
    }

    Ok(best_name)
}

/// Compute all summary statistics in one pass over the dataset.
///
/// The three queries are independent read-only reductions; any of them on an
/// empty dataset fails with [`StatError::EmptyInput`].
pub fn compute_stats(records: &[ReignRecord]) -> Result<ReignStats, StatError> {
    Ok(ReignStats {
        total_monarchs: records.len(),
        longest_reign: longest_reign(records)?,
        longest_house: longest_ruling_house(records)?,
        most_common_first_name: most_common_first_name(records)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, house: &str, duration: i32) -> ReignRecord {
        ReignRecord {
            name: name.to_string(),
            house: house.to_string(),
            duration,
        }
    }

    #[test]
    fn test_longest_reign() {
        let records = vec![
            record("Alfred", "Wessex", 28),
            record("Victoria", "Hanover", 63),
            record("Henry III", "Plantagenet", 56),
        ];

        let longest = longest_reign(&records).unwrap();
        assert_eq!(longest.name, "Victoria");
        assert_eq!(longest.years, 63);
    }

    #[test]
    fn test_longest_reign_tie_keeps_first() {
        let records = vec![
            record("A", "X", 10),
            record("B", "Y", 20),
            record("C", "Z", 20),
        ];

        let longest = longest_reign(&records).unwrap();
        assert_eq!(longest.name, "B");
        assert_eq!(longest.years, 20);
    }

    #[test]
    fn test_longest_reign_empty() {
        assert_eq!(longest_reign(&[]).unwrap_err(), StatError::EmptyInput);
    }

    #[test]
    fn test_house_totals_first_appearance_order() {
        let records = vec![
            record("A", "X", 5),
            record("B", "Y", 3),
            record("C", "X", 1),
        ];

        let totals = house_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].house, "X");
        assert_eq!(totals[0].years, 6);
        assert_eq!(totals[1].house, "Y");
        assert_eq!(totals[1].years, 3);
    }

    #[test]
    fn test_house_keys_are_case_sensitive() {
        let records = vec![record("A", "Tudor", 5), record("B", "tudor", 3)];
        assert_eq!(house_totals(&records).len(), 2);
    }

    #[test]
    fn test_longest_ruling_house() {
        let records = vec![
            record("A", "X", 5),
            record("B", "Y", 3),
            record("C", "X", 1),
        ];

        let house = longest_ruling_house(&records).unwrap();
        assert_eq!(house.house, "X");
        assert_eq!(house.years, 6);
    }

    #[test]
    fn test_longest_ruling_house_tie_keeps_first() {
        let records = vec![
            record("A", "X", 4),
            record("B", "Y", 2),
            record("C", "Y", 2),
        ];

        let house = longest_ruling_house(&records).unwrap();
        assert_eq!(house.house, "X");
        assert_eq!(house.years, 4);
    }

    #[test]
    fn test_longest_ruling_house_negative_durations() {
        // Negative spans from malformed data are summed like any other number.
        let records = vec![record("A", "X", -10), record("B", "Y", 1)];

        let house = longest_ruling_house(&records).unwrap();
        assert_eq!(house.house, "Y");
    }

    #[test]
    fn test_longest_ruling_house_empty() {
        assert_eq!(
            longest_ruling_house(&[]).unwrap_err(),
            StatError::EmptyInput
        );
    }

    #[test]
    fn test_most_common_first_name() {
        let records = vec![
            record("John Smith", "X", 1),
            record("Jane Doe", "Y", 2),
            record("John Adams", "Z", 3),
        ];

        assert_eq!(most_common_first_name(&records).unwrap(), "John");
    }

    #[test]
    fn test_most_common_first_name_tie_keeps_first() {
        let records = vec![
            record("Edward I", "X", 1),
            record("Henry I", "Y", 2),
            record("Henry II", "Y", 3),
            record("Edward II", "X", 4),
        ];

        assert_eq!(most_common_first_name(&records).unwrap(), "Edward");
    }

    #[test]
    fn test_most_common_first_name_empty() {
        assert_eq!(
            most_common_first_name(&[]).unwrap_err(),
            StatError::EmptyInput
        );
    }

    #[test]
    fn test_first_name_counts() {
        let records = vec![
            record("John Smith", "X", 1),
            record("Jane Doe", "Y", 2),
            record("John Adams", "Z", 3),
        ];

        let counts = first_name_counts(&records);
        assert_eq!(counts[0], ("John".to_string(), 2));
        assert_eq!(counts[1], ("Jane".to_string(), 1));
    }

    #[test]
    fn test_compute_stats() {
        let records = vec![
            record("William I", "House of Normandy", 21),
            record("William II", "House of Normandy", 13),
            record("Victoria", "House of Hanover", 63),
        ];

        let stats = compute_stats(&records).unwrap();
        assert_eq!(stats.total_monarchs, 3);
        assert_eq!(stats.longest_reign.name, "Victoria");
        assert_eq!(stats.longest_reign.years, 63);
        assert_eq!(stats.longest_house.house, "House of Hanover");
        assert_eq!(stats.longest_house.years, 63);
        assert_eq!(stats.most_common_first_name, "William");
    }

    #[test]
    fn test_compute_stats_empty() {
        assert_eq!(compute_stats(&[]).unwrap_err(), StatError::EmptyInput);
    }
}
