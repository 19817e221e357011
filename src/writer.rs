use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Context;
use csv::WriterBuilder;

use crate::schema::{CSV_HEADER, ClaimRecord};

/// Streaming CSV sink for claim records.
///
/// The header row is written up front, so a run that produces no records
/// still leaves a valid file behind.
pub struct ClaimWriter<W: io::Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl ClaimWriter<File> {
    /// Create (or truncate) the file at `path`. The parent directory must
    /// already exist.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed creating output file {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: io::Write> ClaimWriter<W> {
    pub fn from_writer(sink: W) -> anyhow::Result<Self> {
        let mut inner = WriterBuilder::new().has_headers(false).from_writer(sink);
        inner
            .write_record(CSV_HEADER)
            .context("Failed writing CSV header")?;
        Ok(Self { inner, rows: 0 })
    }

    pub fn write(&mut self, record: &ClaimRecord) -> anyhow::Result<()> {
        self.inner
            .serialize(record)
            .with_context(|| format!("Failed writing claim {}", record.claim_id))?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, header excluded.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the underlying sink.
    pub fn finish(self) -> anyhow::Result<(W, usize)> {
        let rows = self.rows;
        let sink = self
            .inner
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed flushing CSV output: {}", e.error()))?;
        Ok((sink, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::mock_record;

    fn into_string(writer: ClaimWriter<Vec<u8>>) -> String {
        let (bytes, _) = writer.finish().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_header_written_without_rows() {
        let writer = ClaimWriter::from_writer(Vec::new()).unwrap();
        assert_eq!(writer.rows(), 0);
        let out = into_string(writer);
        assert_eq!(out, format!("{}\n", CSV_HEADER.join(",")));
    }

    /// Test that a record serializes in column order with two-digit money.
    #[test]
    fn test_row_format() {
        let mut writer = ClaimWriter::from_writer(Vec::new()).unwrap();
        let mut record = mock_record();
        record.billed_amount = 185.0;
        record.allowed_amount = 138.7;
        record.paid_amount = 120.0;
        writer.write(&record).unwrap();
        assert_eq!(writer.rows(), 1);

        let out = into_string(writer);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "C0000001,P012345,Medicare,Medicare FFS,1234567890,2024-03-01,2024-03-04,2024-04-02,\
             99214,I10,185.00,138.70,120.00,Paid,None,CO-45,Yes"
        );
    }

    #[test]
    fn test_partially_paid_label() {
        let mut writer = ClaimWriter::from_writer(Vec::new()).unwrap();
        let mut record = mock_record();
        record.claim_status = crate::schema::ClaimStatus::PartiallyPaid;
        writer.write(&record).unwrap();
        let out = into_string(writer);
        assert!(out.contains(",Partially Paid,"));
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("claims.csv");
        let err = ClaimWriter::create(&path).err().expect("expected an error");
        assert!(format!("{}", err).contains("Failed creating output file"));
    }
}
