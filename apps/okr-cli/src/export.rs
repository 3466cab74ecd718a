// export.rs — Write the objective and current goals to a JSON document.
//
// Pure serialization of the currently displayed working set; the PDF
// export of the original lives in presentation land and has no
// counterpart here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use okr_types::{GoalRecord, ObjectiveInput};

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    exported_at: DateTime<Utc>,
    okr: &'a ObjectiveInput,
    managers_goal: String,
    goals: &'a [GoalRecord],
}

/// Serialize the submission into pretty-printed JSON at `path`.
pub fn write_json(path: &Path, input: &ObjectiveInput, goals: &[GoalRecord]) -> Result<()> {
    let document = ExportDocument {
        exported_at: Utc::now(),
        okr: input,
        managers_goal: input.managers_goal(),
        goals,
    };
    let json = serde_json::to_string_pretty(&document)?;
    fs::write(path, json).with_context(|| format!("writing export to {}", path.display()))?;
    Ok(())
}
