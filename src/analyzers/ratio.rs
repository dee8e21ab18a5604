use crate::errors::RatioError;
use crate::parser::Record;

/// Residential area per occupant for a single record.
///
/// # Errors
///
/// Returns [`RatioError::ZeroPopulation`] when the record has no occupants.
pub fn area_per_occupant(record: &Record) -> Result<f64, RatioError> {
    if record.population == 0 {
        return Err(RatioError::ZeroPopulation {
            address: record.address.clone(),
        });
    }
    Ok(record.area_residential / record.population as f64)
}

/// Returns the address of the record with the smallest area per occupant.
///
/// Ties go to the earliest record. Every record is checked, so a zero
/// population anywhere fails the call even after a minimum has been seen.
pub fn find_min_ratio_address(records: &[Record]) -> Result<&str, RatioError> {
    let mut best: Option<(&Record, f64)> = None;

    for record in records {
        let ratio = area_per_occupant(record)?;
        if best.is_none_or(|(_, min)| ratio < min) {
            best = Some((record, ratio));
        }
    }

    best.map(|(record, _)| record.address.as_str())
        .ok_or(RatioError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, population: i64, area_residential: f64) -> Record {
        Record {
            address: address.to_string(),
            floor_count: 1,
            population,
            heating_value: 0.0,
            area_residential,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_area_per_occupant() {
        assert_eq!(area_per_occupant(&record("a", 4, 100.0)), Ok(25.0));
    }

    #[test]
    fn test_single_record() {
        let records = vec![record("only", 7, 3.0)];
        assert_eq!(find_min_ratio_address(&records), Ok("only"));
    }

    #[test]
    fn test_picks_minimum() {
        let records = vec![
            record("a", 10, 500.0),
            record("b", 10, 120.0),
            record("c", 2, 90.0),
        ];
        assert_eq!(find_min_ratio_address(&records), Ok("b"));
    }

    #[test]
    fn test_minimum_invariant_under_permutation() {
        let mut records = vec![
            record("a", 10, 500.0),
            record("b", 10, 120.0),
            record("c", 2, 90.0),
            record("d", 3, 300.0),
        ];
        for _ in 0..records.len() {
            records.rotate_left(1);
            assert_eq!(find_min_ratio_address(&records), Ok("b"));
        }
        records.reverse();
        assert_eq!(find_min_ratio_address(&records), Ok("b"));
    }

    #[test]
    fn test_tie_returns_first_occurrence() {
        let records = vec![record("A", 10, 100.0), record("B", 5, 50.0)];
        assert_eq!(find_min_ratio_address(&records), Ok("A"));

        let swapped = vec![record("B", 5, 50.0), record("A", 10, 100.0)];
        assert_eq!(find_min_ratio_address(&swapped), Ok("B"));
    }

    #[test]
    fn test_duplicate_addresses_rank_by_ratio_only() {
        let records = vec![record("same", 1, 10.0), record("same", 1, 5.0)];
        assert_eq!(find_min_ratio_address(&records), Ok("same"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(find_min_ratio_address(&[]), Err(RatioError::EmptyInput));
    }

    #[test]
    fn test_zero_population_fails_fast() {
        let records = vec![record("a", 1, 1.0), record("ghost", 0, 80.0)];
        assert_eq!(
            find_min_ratio_address(&records),
            Err(RatioError::ZeroPopulation {
                address: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_zero_area_is_valid_minimum() {
        let records = vec![record("a", 3, 60.0), record("empty", 3, 0.0)];
        assert_eq!(find_min_ratio_address(&records), Ok("empty"));
    }
}
