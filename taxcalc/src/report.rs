use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::errors::{TaxError, TaxResult};
use crate::record::TaxpayerRecord;

/// Prompt shown before the name lookup
pub const SEARCH_PROMPT: &str = "Enter the name of the taxpayer to search: ";
/// Printed when a lookup finds no record
pub const NOT_FOUND_MESSAGE: &str = "Taxpayer not found.";
/// Label in front of every reported load, write or parse failure
pub const IO_ERROR_LABEL: &str = "File I/O error:";
/// Label in front of configuration failures
pub const CONFIG_ERROR_LABEL: &str = "error:";

/// Writes one file block per record, in slice order
pub fn write_records<W: Write>(writer: &mut W, records: &[TaxpayerRecord]) -> io::Result<()> {
    for record in records {
        record.write_block(writer)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes every record to it.
///
/// Blocks already flushed stay on disk if a later write fails.
pub fn save_records(path: &Path, records: &[TaxpayerRecord]) -> TaxResult<()> {
    let file = File::create(path).map_err(|e| TaxError::from_io(e, path))?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Console side of the job: confirmations, record listings, the search prompt
/// and its outcome. Works over any writer so the job can run against a buffer.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn records_stored(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Records stored in {}", path.display())
    }

    /// Prints every record followed by a blank line
    pub fn records(&mut self, records: &[TaxpayerRecord]) -> io::Result<()> {
        for record in records {
            writeln!(self.out, "{}", record)?;
        }
        Ok(())
    }

    pub fn sorted_saved(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Sorted records saved to {}", path.display())
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", SEARCH_PROMPT)?;
        self.out.flush()
    }

    pub fn search_result(&mut self, found: Option<&TaxpayerRecord>) -> io::Result<()> {
        match found {
            Some(record) => write!(self.out, "{}", record)?,
            None => writeln!(self.out, "{}", NOT_FOUND_MESSAGE)?,
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes a labelled one-line failure message, e.g. to stderr
pub fn write_error<W: Write>(writer: &mut W, err: &TaxError) -> io::Result<()> {
    let label = match err {
        TaxError::ConfigError(_) => CONFIG_ERROR_LABEL,
        _ => IO_ERROR_LABEL,
    };
    writeln!(writer, "{} {}", label, err)
}

/// Reads one query line, dropping only the trailing line terminator.
/// End of input yields an empty query.
pub fn read_query<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
