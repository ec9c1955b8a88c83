use std::io::Write;

use super::Table;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Text rendering (Arrow pretty printer)
// ---------------------------------------------------------------------------

/// Render a table as an aligned text grid.
///
/// Every column goes through Arrow as text so mixed numeric / "Not
/// Applicable" columns print as they appear in the table. An empty table
/// renders as an empty string.
#[cfg(feature = "table")]
pub fn pretty_format(table: &Table) -> Result<String> {
    use std::sync::Arc;

    use arrow::array::{ArrayRef, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use arrow::util::pretty::pretty_format_batches;

    if table.headers.is_empty() {
        return Ok(String::new());
    }

    let schema = Schema::new(
        table
            .headers
            .iter()
            .map(|h| Field::new(h.as_str(), DataType::Utf8, false))
            .collect::<Vec<_>>(),
    );
    let columns: Vec<ArrayRef> = (0..table.headers.len())
        .map(|col| {
            let values = StringArray::from_iter_values(
                table.rows.iter().map(|row| row[col].to_string()),
            );
            Arc::new(values) as ArrayRef
        })
        .collect();

    let batch = RecordBatch::try_new(Arc::new(schema), columns)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

#[cfg(not(feature = "table"))]
pub fn pretty_format(_table: &Table) -> Result<String> {
    Err(crate::error::VizError::RendererUnavailable("table"))
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Write the header row and every body row as CSV. Nothing is written for
/// an empty table.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&table.headers)?;
    for row in &table.rows {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn table() -> Table {
        Table {
            headers: vec!["idx".into(), "layer_fqn".into(), "min".into()],
            rows: vec![
                vec![Cell::Index(0), Cell::Label("layer1".into()), Cell::Number(0.1)],
                vec![Cell::Index(1), Cell::Label("layer2".into()), Cell::NotApplicable],
            ],
        }
    }

    #[cfg(feature = "table")]
    #[test]
    fn pretty_format_lists_every_cell() {
        let text = pretty_format(&table()).unwrap();
        for needle in ["idx", "layer_fqn", "min", "layer1", "layer2", "0.1", "Not Applicable"] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
        // header + separator lines + two rows
        assert!(text.lines().count() >= 4);
    }

    #[cfg(feature = "table")]
    #[test]
    fn empty_table_formats_to_nothing() {
        assert_eq!(pretty_format(&Table::default()).unwrap(), "");
    }

    #[test]
    fn csv_export() {
        let mut out = Vec::new();
        write_csv(&table(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "idx,layer_fqn,min\n0,layer1,0.1\n1,layer2,Not Applicable\n"
        );
    }

    #[test]
    fn csv_export_skips_empty_table() {
        let mut out = Vec::new();
        write_csv(&Table::default(), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
