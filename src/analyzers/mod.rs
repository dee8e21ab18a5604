//! Height-band classification and occupancy ranking.
//!
//! Both branches read the same loaded records: [`aggregate`] tallies records
//! per height band and [`ratio`] finds the most crowded building.
//! [`analyzer`] runs them together into an [`types::AnalysisSummary`].

pub mod aggregate;
pub mod analyzer;
pub mod category;
pub mod ratio;
pub mod types;
