pub mod config;
pub mod errors;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod search;
pub mod sort;
pub mod tax;

pub use config::{CliOverrides, TaxConfig};
pub use errors::{TaxError, TaxResult};
pub use pipeline::{run, Query, RunSummary};
pub use record::TaxpayerRecord;
pub use tax::{compute_tax, TaxRule};
