//! Tabular export of an augmented dataset

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::WellLogDataset;

/// Write every curve as CSV, in dataset column order.
///
/// Undefined saturation rows are written as empty cells.
pub fn write_csv<W: Write>(dataset: &WellLogDataset, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    writer
        .write_record(dataset.curve_names())
        .context("writing CSV header")?;

    for row in 0..dataset.len() {
        let record: Vec<String> = dataset
            .curves()
            .iter()
            .map(|curve| curve.data.cell_text(row))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("writing CSV row {row}"))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Write the dataset to a CSV file.
pub fn save_csv(dataset: &WellLogDataset, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(dataset, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = dataset.len(), "Exported dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_csv;
    use crate::types::{curves, CurveData, ZoneLabel};

    #[test]
    fn test_export_writes_all_columns_and_empty_invalid_cells() {
        let mut ds = WellLogDataset::new(vec![1000.0, 1500.0])
            .and_then(|d| d.with_curve(curves::BULK_DENSITY, vec![2.45, 2.65]))
            .expect("valid dataset");
        ds.set_curve(
            curves::WATER_SATURATION,
            CurveData::Nullable(vec![Some(0.25), None]),
        )
        .expect("saturation");
        ds.set_curve(
            curves::HYDROCARBON_ZONE,
            CurveData::Zone(vec![ZoneLabel::Oil, ZoneLabel::Water]),
        )
        .expect("zones");

        let mut out = Vec::new();
        write_csv(&ds, &mut out).expect("export");
        let text = String::from_utf8(out).expect("utf8");

        assert_eq!(
            text,
            "Depth,RHOB,water_saturation,hydrocarbon_zone\n\
             1000,2.45,0.25,Oil\n\
             1500,2.65,,Water\n"
        );

        // And it loads back unchanged
        let back = read_csv(text.as_bytes()).expect("reload");
        assert_eq!(back, ds);
    }
}
