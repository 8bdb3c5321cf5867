use std::io::{BufRead, Write};
use tracing::{error, info};

use crate::config::TaxConfig;
use crate::errors::TaxResult;
use crate::loader::load_records;
use crate::record::TaxpayerRecord;
use crate::report::{read_query, save_records, write_error, ConsoleReporter};
use crate::search::position_by_name;
use crate::sort::sort_by_salary;

/// Where the lookup name comes from
#[derive(Debug, Clone)]
pub enum Query {
    /// Prompt on the console and read one line of input
    Prompt,
    /// Use the given name without prompting
    Name(String),
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Records in their final (salary-sorted) order
    pub records: Vec<TaxpayerRecord>,
    /// Whether the sorted report reached disk
    pub sorted_saved: bool,
    /// The name that was looked up
    pub query: String,
    /// Index into `records` of the first matching name
    pub matched: Option<usize>,
}

impl RunSummary {
    pub fn found(&self) -> Option<&TaxpayerRecord> {
        self.matched.map(|i| &self.records[i])
    }
}

/// Runs the whole job: load, report, sort, save sorted, look up.
///
/// Load failures and failures writing the load-order report abort the run and
/// are returned. A failure saving the sorted report is written to `errors` and
/// the run carries on to the lookup.
pub fn run<R, W, E>(
    config: &TaxConfig,
    query: Query,
    input: &mut R,
    out: W,
    errors: &mut E,
) -> TaxResult<RunSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let rule = config.rule();
    let mut console = ConsoleReporter::new(out);

    let mut records = load_records(&config.input_path, config.record_count.get(), &rule)?;

    save_records(&config.output_path, &records)?;
    console.records_stored(&config.output_path)?;
    console.records(&records)?;

    sort_by_salary(&mut records);

    let sorted_saved = match save_records(&config.sorted_output_path, &records) {
        Ok(()) => {
            console.sorted_saved(&config.sorted_output_path)?;
            true
        }
        Err(e) => {
            error!(
                "Failed to save sorted records to {}: {}",
                config.sorted_output_path.display(),
                e
            );
            write_error(errors, &e)?;
            false
        }
    };

    let query = match query {
        Query::Name(name) => name,
        Query::Prompt => {
            console.prompt()?;
            read_query(input)?
        }
    };

    let matched = position_by_name(&records, &query);
    if matched.is_none() {
        info!("No taxpayer named {:?}", query);
    }
    console.search_result(matched.map(|i| &records[i]))?;

    info!(
        "Run complete: {} records, sorted report saved: {}",
        records.len(),
        sorted_saved
    );
    Ok(RunSummary {
        records,
        sorted_saved,
        query,
        matched,
    })
}
