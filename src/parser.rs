//! CSV loader for housing records.
//!
//! Columns are matched by header name, so their order in the file is free.
//! Numeric fields are coerced eagerly and a single bad row fails the load.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::LoadError;

pub const ADDRESS_COLUMN: &str = "house_address";
pub const ADDRESS_ALIAS: &str = "address";
pub const FLOOR_COUNT_COLUMN: &str = "floor_count";
pub const POPULATION_COLUMN: &str = "population";
pub const HEATING_VALUE_COLUMN: &str = "heating_value";
pub const AREA_RESIDENTIAL_COLUMN: &str = "area_residential";

/// One building row from the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "house_address")]
    pub address: String,
    pub floor_count: i64,
    pub population: i64,
    pub heating_value: f64,
    pub area_residential: f64,
    /// Columns outside the known set, as `(header, value)` in file order.
    #[serde(skip)]
    pub extra: Vec<(String, String)>,
}

/// Positions of the required columns within a header row.
struct ColumnMap {
    address: usize,
    floor_count: usize,
    population: usize,
    heating_value: usize,
    area_residential: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        let address = find(ADDRESS_COLUMN).or_else(|_| {
            headers
                .iter()
                .position(|h| h == ADDRESS_ALIAS)
                .ok_or(LoadError::MissingColumn(ADDRESS_COLUMN))
        })?;

        let mut map = ColumnMap {
            address,
            floor_count: find(FLOOR_COUNT_COLUMN)?,
            population: find(POPULATION_COLUMN)?,
            heating_value: find(HEATING_VALUE_COLUMN)?,
            area_residential: find(AREA_RESIDENTIAL_COLUMN)?,
            extra: Vec::new(),
        };

        let known = [
            map.address,
            map.floor_count,
            map.population,
            map.heating_value,
            map.area_residential,
        ];
        map.extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !known.contains(i))
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        Ok(map)
    }
}

/// Loads every record from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be opened, the header lacks a
/// required column, or any row fails to parse. No records are returned in
/// that case.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    debug!("Opening housing data");

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let records = parse_records(file)?;
    info!(records = records.len(), "Housing data loaded");
    Ok(records)
}

/// Parses comma-separated records from any reader.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    parse_records_with_delimiter(reader, b',')
}

/// Parses records separated by `delimiter` from any reader.
pub fn parse_records_with_delimiter<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<Record>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::Headers)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(parse_row(&row, &columns)?);
    }

    Ok(records)
}

fn parse_row(row: &StringRecord, columns: &ColumnMap) -> Result<Record, LoadError> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let field = |idx: usize| row.get(idx).unwrap_or_default();

    Ok(Record {
        address: field(columns.address).to_string(),
        floor_count: parse_number(field(columns.floor_count), FLOOR_COUNT_COLUMN, line)?,
        population: parse_number(field(columns.population), POPULATION_COLUMN, line)?,
        heating_value: parse_finite(field(columns.heating_value), HEATING_VALUE_COLUMN, line)?,
        area_residential: parse_finite(
            field(columns.area_residential),
            AREA_RESIDENTIAL_COLUMN,
            line,
        )?,
        extra: columns
            .extra
            .iter()
            .map(|(idx, name)| (name.clone(), field(*idx).to_string()))
            .collect(),
    })
}

fn parse_number<T: FromStr>(raw: &str, column: &'static str, line: u64) -> Result<T, LoadError> {
    raw.trim().parse().map_err(|_| LoadError::InvalidNumber {
        line,
        column,
        value: raw.to_string(),
    })
}

// NaN and infinities parse as f64 but are not usable measurements.
fn parse_finite(raw: &str, column: &'static str, line: u64) -> Result<f64, LoadError> {
    let value: f64 = parse_number(raw, column, line)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LoadError::InvalidNumber {
            line,
            column,
            value: raw.to_string(),
        })
    }
}
