use anyhow::Context;
use wingit_core::TargetFilters;

use crate::app::App;
use crate::cli::SourceArgs;
use crate::settings::Settings;

/// One-shot recommendation: JSON to stdout, summary line to stderr
pub fn run(sources: &SourceArgs, filters: TargetFilters) -> anyhow::Result<()> {
    let settings = Settings::resolve(sources)?;
    let app = App::load(&settings)?;

    let runtime = super::runtime().context("starting async runtime")?;
    let result = runtime.block_on(app.recommend(filters))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    eprintln!("{}", result.summary());
    Ok(())
}
