//! Column projection.

use crate::model::Column;
use crate::model::Record;

/// Restricts every record to the configured columns, in column order.
///
/// Fields not named by a column are dropped. A column the source record
/// lacks stays absent and reads as [`Value::Null`](crate::model::Value::Null);
/// a malformed record is not an error. An explicit null is copied like any
/// other value.
pub fn project(dataset: &[Record], columns: &[Column]) -> Vec<Record> {
    dataset
        .iter()
        .map(|record| project_record(record, columns))
        .collect()
}

fn project_record(record: &Record, columns: &[Column]) -> Record {
    columns
        .iter()
        .filter_map(|column| {
            let value = record.get(&column.key)?;
            Some((column.key.as_str(), value.clone()))
        })
        .collect()
}
