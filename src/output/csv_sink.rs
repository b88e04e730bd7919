// CSV sink for pairwise LSM rows.
//
// Header: File, Segment, PairId, P1, P2, P1_WC, P2_WC, LSM. The last five
// columns are the per-pair row; the first three are forwarded metadata.
// Undefined scores are written as an empty cell.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::group::models::SegmentRow;

pub const HEADER: [&str; 8] = ["File", "Segment", "PairId", "P1", "P2", "P1_WC", "P2_WC", "LSM"];

/// Writes result rows to any `io::Write`, header first.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl CsvSink<std::fs::File> {
    /// Create (or truncate) a CSV file, creating parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Append one document's rows.
    pub fn write_rows(&mut self, file_id: &str, rows: &[SegmentRow]) -> Result<()> {
        for row in rows {
            let segment = row.segment_number.to_string();
            let [p1, p2, wc1, wc2, lsm] = row.row.fields();
            self.writer.write_record([
                file_id,
                segment.as_str(),
                row.pair_id.as_str(),
                p1.as_str(),
                p2.as_str(),
                wc1.as_str(),
                wc2.as_str(),
                lsm.as_str(),
            ])?;
        }
        self.rows_written += rows.len();
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}
