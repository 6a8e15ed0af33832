use anyhow::{Context, Result};
use ironstat::{PipelineConfig, run};
use std::io::Write;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: ironstat <measurements-file>")?;

    let summary = run(&path, &PipelineConfig::default())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(summary.render().as_bytes())
        .context("write report")?;
    out.flush().context("flush report")?;
    Ok(())
}
