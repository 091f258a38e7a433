use crate::error::ShapeError;
use crate::logfile::ClockRecord;

/// One field of the clock records across a whole file, in record order.
pub type MetricSeries = Vec<f64>;

/// Reshape rows into columns: column `i` holds `row[i]` of every row.
///
/// The width comes from the first row; any row of a different length is a
/// [`ShapeError`]. No rows means no columns.
pub fn transpose(records: &[ClockRecord]) -> Result<Vec<MetricSeries>, ShapeError> {
    let Some(first) = records.first() else {
        return Ok(vec![]);
    };
    let width = first.len();

    let mut columns: Vec<MetricSeries> = (0..width)
        .map(|_| Vec::with_capacity(records.len()))
        .collect();

    for (row, record) in records.iter().enumerate() {
        if record.len() != width {
            return Err(ShapeError {
                row,
                expected: width,
                found: record.len(),
            });
        }
        for (column, value) in columns.iter_mut().zip(record.values()) {
            column.push(*value);
        }
    }

    Ok(columns)
}
