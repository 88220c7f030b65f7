//! CSV and console output for paper records.

use crate::error::Result;
use crate::paper::PaperRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write records as CSV with a header row.
///
/// Returns `false` without touching the filesystem when there is nothing to
/// write.
pub fn save_csv(path: &Path, papers: &[PaperRecord]) -> Result<bool> {
    if papers.is_empty() {
        info!(path = %path.display(), "No papers to save");
        return Ok(false);
    }

    let file = File::create(path)?;
    write_csv(BufWriter::new(file), papers)?;

    info!(path = %path.display(), count = papers.len(), "Saved CSV");
    Ok(true)
}

/// Write records as CSV to any writer. Headers come from
/// [`PaperRow`](crate::paper::PaperRow) field names.
pub fn write_csv<W: Write>(writer: W, papers: &[PaperRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);
    for paper in papers {
        wtr.serialize(paper.to_row())?;
    }
    wtr.flush()?;
    debug!(rows = papers.len(), "CSV rows written");
    Ok(())
}

/// Print records to a writer, one block per record.
pub fn print_papers<W: Write>(mut out: W, papers: &[PaperRecord]) -> Result<()> {
    for paper in papers {
        writeln!(out, "{}", paper)?;
        writeln!(out)?;
    }
    Ok(())
}
