use std::path::Path;

use anyhow::Context;

use crate::schema::ClaimRecord;

/// Deserialize every row of a claims CSV and hand it to `on_record`.
///
/// Stops at the first malformed row. Returns the number of rows read.
pub fn stream_claims(
    path: &Path,
    mut on_record: impl FnMut(ClaimRecord),
) -> anyhow::Result<usize> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed opening claims file {}", path.display()))?;

    let mut count = 0;
    for (row, result) in reader.deserialize::<ClaimRecord>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let record = result.with_context(|| {
            format!("Invalid claim at line {} of {}", row + 2, path.display())
        })?;
        on_record(record);
        count += 1;
    }
    Ok(count)
}

pub fn read_claims(path: &Path) -> anyhow::Result<Vec<ClaimRecord>> {
    let mut records = Vec::new();
    stream_claims(path, |record| records.push(record))?;
    Ok(records)
}
