use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{TaxError, TaxResult};
use crate::record::TaxpayerRecord;
use crate::tax::TaxRule;

/// Number of input lines that make up one record: name, company, salary
pub const LINES_PER_RECORD: usize = 3;

/// Loads exactly `count` records from the file at `path`.
///
/// Any failure, including a single bad salary line, fails the whole load;
/// no partial record set is ever returned.
pub fn load_records(
    path: &Path,
    count: usize,
    rule: &TaxRule,
) -> TaxResult<Vec<TaxpayerRecord>> {
    info!("Loading {} records from {}", count, path.display());
    let file = File::open(path).map_err(|e| TaxError::from_io(e, path))?;
    read_records(BufReader::new(file), count, rule)
}

/// Reads `count` name/company/salary triples from `reader`.
///
/// Lines past the last record are left unread. Salary lines are parsed with
/// surrounding whitespace ignored; nothing else about the fields is checked.
pub fn read_records<R: BufRead>(
    reader: R,
    count: usize,
    rule: &TaxRule,
) -> TaxResult<Vec<TaxpayerRecord>> {
    let expected = count * LINES_PER_RECORD;
    let mut lines = reader.lines();
    let mut line_no = 0;
    let mut next_line = || -> TaxResult<String> {
        match lines.next() {
            Some(line) => {
                line_no += 1;
                Ok(line?)
            }
            None => Err(TaxError::unexpected_eof(expected, line_no)),
        }
    };

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let name = next_line()?;
        let company = next_line()?;
        let raw_salary = next_line()?;
        let salary_line = (records.len() + 1) * LINES_PER_RECORD;
        let salary = parse_salary(&raw_salary)
            .ok_or_else(|| TaxError::invalid_salary(salary_line, raw_salary))?;
        records.push(TaxpayerRecord::new(name, company, salary, rule));
    }

    debug!("Read {} records ({} lines)", records.len(), expected);
    Ok(records)
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
