//! CSV ingest for well-log datasets
//!
//! Expects a header row with case-sensitive curve names, one of which must be
//! `Depth`. Every other cell must be a finite number, except for the derived
//! curves written by [`crate::report::write_csv`]: `hydrocarbon_zone` holds
//! zone labels and `water_saturation` may be empty (undefined row). That lets
//! an exported file be loaded and re-interpreted.
//!
//! # Usage
//!
//! ```ignore
//! use well_log_insights::ingest;
//!
//! let dataset = ingest::load_csv("log.csv")?;
//! ```

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::types::{curves, CurveData, DatasetError, WellLogDataset, ZoneLabel};

/// Errors loading a dataset from CSV
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("header has no '{}' column", curves::DEPTH)]
    MissingDepth,

    #[error("duplicate column '{0}' in header")]
    DuplicateColumn(String),

    #[error("line {line}, column '{column}': '{value}' is not a finite number")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },

    #[error("line {line}, column '{column}': '{value}' is not a zone label")]
    InvalidZone {
        line: usize,
        column: String,
        value: String,
    },

    #[error("file has a header but no data rows")]
    NoRows,

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// How a column's cells are parsed
enum ColumnBuffer {
    Numeric(Vec<f64>),
    Nullable(Vec<Option<f64>>),
    Zone(Vec<ZoneLabel>),
}

impl ColumnBuffer {
    fn for_column(name: &str) -> Self {
        match name {
            curves::WATER_SATURATION => ColumnBuffer::Nullable(Vec::new()),
            curves::HYDROCARBON_ZONE => ColumnBuffer::Zone(Vec::new()),
            _ => ColumnBuffer::Numeric(Vec::new()),
        }
    }

    fn push(&mut self, raw: &str, line: usize, column: &str) -> Result<(), IngestError> {
        let raw = raw.trim();
        match self {
            ColumnBuffer::Numeric(v) => v.push(parse_finite(raw, line, column)?),
            ColumnBuffer::Nullable(v) => {
                if raw.is_empty() {
                    v.push(None);
                } else {
                    v.push(Some(parse_finite(raw, line, column)?));
                }
            }
            ColumnBuffer::Zone(v) => {
                let zone = raw.parse::<ZoneLabel>().map_err(|_| IngestError::InvalidZone {
                    line,
                    column: column.to_string(),
                    value: raw.to_string(),
                })?;
                v.push(zone);
            }
        }
        Ok(())
    }

    fn into_curve_data(self) -> CurveData {
        match self {
            ColumnBuffer::Numeric(v) => CurveData::Numeric(v),
            ColumnBuffer::Nullable(v) => CurveData::Nullable(v),
            ColumnBuffer::Zone(v) => CurveData::Zone(v),
        }
    }
}

fn parse_finite(raw: &str, line: usize, column: &str) -> Result<f64, IngestError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(IngestError::InvalidNumber {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Load a dataset from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<WellLogDataset, IngestError> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)?;
    let dataset = read_records(reader)?;
    tracing::info!(
        file = %path.display(),
        rows = dataset.len(),
        curves = dataset.curves().len(),
        "Loaded well log"
    );
    Ok(dataset)
}

/// Load a dataset from any CSV source.
pub fn read_csv<R: Read>(source: R) -> Result<WellLogDataset, IngestError> {
    read_records(csv::Reader::from_reader(source))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<WellLogDataset, IngestError> {
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for (i, name) in headers.iter().enumerate() {
        if headers[..i].contains(name) {
            return Err(IngestError::DuplicateColumn(name.clone()));
        }
    }
    let depth_idx = headers
        .iter()
        .position(|h| h == curves::DEPTH)
        .ok_or(IngestError::MissingDepth)?;

    let mut buffers: Vec<ColumnBuffer> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == depth_idx {
                ColumnBuffer::Numeric(Vec::new())
            } else {
                ColumnBuffer::for_column(h)
            }
        })
        .collect();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = i + 2;
        for ((buffer, raw), column) in buffers.iter_mut().zip(record.iter()).zip(&headers) {
            buffer.push(raw, line, column)?;
        }
    }

    let mut columns: Vec<(String, CurveData)> = headers
        .into_iter()
        .zip(buffers)
        .map(|(name, buffer)| (name, buffer.into_curve_data()))
        .collect();

    let depth = match columns.remove(depth_idx).1 {
        CurveData::Numeric(v) => v,
        _ => Vec::new(),
    };
    if depth.is_empty() {
        return Err(IngestError::NoRows);
    }

    let mut dataset = WellLogDataset::new(depth)?;
    for (name, data) in columns {
        dataset.insert_curve(&name, data)?;
    }
    Ok(dataset)
}

/// The built-in four-sample demonstration log.
pub fn sample_dataset() -> Result<WellLogDataset, DatasetError> {
    WellLogDataset::new(vec![1000.0, 1500.0, 2000.0, 2500.0])?
        .with_curve(curves::BULK_DENSITY, vec![2.45, 2.55, 2.60, 2.50])?
        .with_curve(curves::DEEP_RESISTIVITY, vec![120.0, 95.0, 105.0, 130.0])?
        .with_curve("MN", vec![0.45, 0.50, 0.48, 0.47])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_basic_log() {
        let csv = "Depth,RHOB,RILD,MN\n1000,2.45,120,0.45\n1500,2.55,95,0.50\n";
        let ds = read_csv(csv.as_bytes()).expect("valid csv");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.depth(), &[1000.0, 1500.0]);
        assert_eq!(ds.numeric("MN"), Some(&[0.45, 0.50][..]));
    }

    #[test]
    fn test_depth_need_not_be_first() {
        let csv = "RHOB,Depth\n2.45,1000\n";
        let ds = read_csv(csv.as_bytes()).expect("valid csv");
        assert_eq!(ds.depth(), &[1000.0]);
        assert_eq!(ds.curve_names().collect::<Vec<_>>(), vec!["Depth", "RHOB"]);
    }

    #[test]
    fn test_missing_depth_header() {
        let csv = "depth,RHOB\n1000,2.45\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(IngestError::MissingDepth)));
    }

    #[test]
    fn test_bad_cell_reports_line_and_column() {
        let csv = "Depth,RHOB\n1000,2.45\n1500,n/a\n";
        match read_csv(csv.as_bytes()) {
            Err(IngestError::InvalidNumber { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, "RHOB");
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_non_finite_cells_rejected() {
        assert!(read_csv("Depth,RHOB\n1000,\n".as_bytes()).is_err());
        assert!(read_csv("Depth,RHOB\n1000,NaN\n".as_bytes()).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let csv = "Depth,RHOB,RILD\n1000,2.45\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(IngestError::Csv(_))));
    }

    #[test]
    fn test_header_only_is_no_rows() {
        assert!(matches!(
            read_csv("Depth,RHOB\n".as_bytes()),
            Err(IngestError::NoRows)
        ));
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let csv = "Depth,RHOB,RHOB\n1000,2.45,2.46\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(IngestError::DuplicateColumn(name)) if name == "RHOB"
        ));
    }

    #[test]
    fn test_derived_columns_parse_back() {
        let csv = "Depth,porosity,water_saturation,hydrocarbon_zone\n1000,0.2,0.5,Gas\n1500,0,,Water\n";
        let ds = read_csv(csv.as_bytes()).expect("exported csv");
        assert_eq!(ds.water_saturation(), Some(&[Some(0.5), None][..]));
        assert_eq!(ds.hydrocarbon_zones(), Some(&[ZoneLabel::Gas, ZoneLabel::Water][..]));
        assert_eq!(ds.porosity(), Some(&[0.2, 0.0][..]));
    }

    #[test]
    fn test_sample_dataset_shape() {
        let ds = sample_dataset().expect("sample");
        assert_eq!(ds.len(), 4);
        assert!(ds.has_curve(curves::BULK_DENSITY));
        assert!(ds.has_curve(curves::DEEP_RESISTIVITY));
    }
}
