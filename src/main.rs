use std::path::Path;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use scripts::fe_cr_co_c_n;
use submodules::report::dump_json;

mod scripts;
mod submodules;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let summary = fe_cr_co_c_n::run()?;
    info!(
        completed = summary.completed,
        skipped = summary.skipped,
        "Fe-Cr-Co-C-N solidification sweep done"
    );
    dump_json(&summary.records, Path::new("sweep_records.json"))?;
    Ok(())
}
