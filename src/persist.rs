//! Best-result record: two newline-separated integers (score, delay).
//!
//! An unreadable or malformed record is never fatal: it degrades to
//! "no prior best" and gameplay continues.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Default record location, next to the working directory like the
/// classic champion file.
pub const DEFAULT_RESULT_PATH: &str = "champion.txt";

/// Best score and the drop delay it was reached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestResult {
    pub score: u32,
    pub delay_ms: i64,
}

/// Read the prior best result. Missing or unparseable files yield the
/// zero record; the cause is logged to stderr and play continues.
pub fn load(path: impl AsRef<Path>) -> BestResult {
    match try_load(path.as_ref()) {
        Ok(best) => best,
        Err(err) => {
            eprintln!("best-result record unavailable ({err:#}); starting from zero");
            BestResult::default()
        }
    }
}

fn try_load(path: &Path) -> Result<BestResult> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse(text: &str) -> Result<BestResult> {
    let mut lines = text.lines();
    let score = lines
        .next()
        .context("missing score line")?
        .trim()
        .parse::<u32>()
        .context("score is not an integer")?;
    let delay_ms = lines
        .next()
        .context("missing delay line")?
        .trim()
        .parse::<i64>()
        .context("delay is not an integer")?;
    Ok(BestResult { score, delay_ms })
}

/// Overwrite the record iff `score` beats the stored best. Returns true
/// when a new record was written.
pub fn save_if_better(path: impl AsRef<Path>, score: u32, delay_ms: i64) -> Result<bool> {
    let path = path.as_ref();
    let best = load(path);
    if score <= best.score {
        return Ok(false);
    }
    fs::write(path, format!("{}\n{}", score, delay_ms))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}
