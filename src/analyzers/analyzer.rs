use chrono::Utc;
use tracing::info;

use crate::analyzers::aggregate::{classify_all, count_by_category};
use crate::analyzers::ratio::find_min_ratio_address;
use crate::analyzers::types::AnalysisSummary;
use crate::errors::RatioError;
use crate::parser::Record;

/// Runs the height-band count and the area-per-occupant ranking over
/// `records`.
///
/// A classification failure shows up as an `Error` entry in the counts and
/// does not fail the call. Ranking errors do.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn analyze(records: &[Record]) -> Result<AnalysisSummary, RatioError> {
    let categories = count_by_category(&classify_all(records));
    let min_ratio_address = find_min_ratio_address(records)?.to_string();

    info!(
        classified = categories.total(),
        min_ratio_address = %min_ratio_address,
        "Analysis complete"
    );

    Ok(AnalysisSummary {
        generated_at: Utc::now(),
        record_count: records.len(),
        categories,
        min_ratio_address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::category::Category;
    use crate::analyzers::types::Label;

    fn record(address: &str, floor_count: i64, population: i64, area: f64) -> Record {
        Record {
            address: address.to_string(),
            floor_count,
            population,
            heating_value: 0.0,
            area_residential: area,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_analyze_two_records_with_tied_ratio() {
        let records = vec![record("A", 3, 10, 100.0), record("B", 20, 5, 50.0)];
        let summary = analyze(&records).unwrap();

        assert_eq!(summary.record_count, 2);
        assert_eq!(summary.categories.get(Label::Category(Category::LowRise)), 1);
        assert_eq!(summary.categories.get(Label::Category(Category::HighRise)), 1);
        assert_eq!(summary.categories.get(Label::Category(Category::MidRise)), 0);
        assert_eq!(summary.min_ratio_address, "A");
    }

    #[test]
    fn test_analyze_classification_failure_is_not_fatal() {
        let records = vec![record("A", 0, 10, 100.0), record("B", 7, 5, 10.0)];
        let summary = analyze(&records).unwrap();

        assert_eq!(summary.categories.get(Label::Error), 1);
        assert_eq!(summary.categories.total(), 1);
        assert_eq!(summary.min_ratio_address, "B");
    }

    #[test]
    fn test_analyze_empty_input() {
        assert_eq!(analyze(&[]).unwrap_err(), RatioError::EmptyInput);
    }
}
