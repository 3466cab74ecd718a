// generate.rs — The generate subcommand: submit, render, act, export.
//
// Reads the objective from a TOML file, runs it through the form (so the
// same non-empty and date-ordering rules apply as in interactive entry),
// submits it through the coordinator, and renders whatever shape comes
// back. --edit and --save act on 1-based goal numbers as displayed.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;

use okr_client::{ApiClient, ApiConfig};
use okr_types::{ObjectiveForm, ObjectiveInput};
use okr_workflow::{SubmissionCoordinator, WorkflowError};

use crate::export;
use crate::render;

#[derive(Args)]
pub struct GenerateArgs {
    /// TOML file describing the objective (see `objective.example.toml`).
    #[arg(long)]
    pub input: PathBuf,

    /// Revise this goal number (1-based) after generation.
    #[arg(long)]
    pub edit: Option<usize>,

    /// Instructions for --edit.
    #[arg(long, default_value = "", requires = "edit")]
    pub comments: String,

    /// Save this goal number (1-based); discards the other candidates.
    #[arg(long)]
    pub save: Option<usize>,

    /// Write the objective and current goals to a JSON document.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// On-disk objective file. Dates are quoted `YYYY-MM-DD` strings.
#[derive(Debug, Deserialize)]
struct ObjectiveFile {
    department: String,
    job_title: String,
    manager_objectives: Vec<String>,
    goal_description: String,
    key_result: String,
    start_date: String,
    due_date: String,
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("{field} '{raw}' is not a YYYY-MM-DD date"))
}

fn read_objective(path: &PathBuf) -> Result<ObjectiveInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading objective file {}", path.display()))?;
    let file: ObjectiveFile =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;

    let mut form = ObjectiveForm::new();
    form.set_department(file.department);
    form.set_job_title(file.job_title);
    for objective in &file.manager_objectives {
        form.toggle_manager_objective(objective);
    }
    form.set_goal_description(file.goal_description);
    form.set_key_result(file.key_result);
    form.set_start_date(parse_date(&file.start_date, "start_date")?);
    form.set_due_date(parse_date(&file.due_date, "due_date")?)
        .context("the due date was cleared; pick one on or after the start date")?;
    Ok(form.finish()?)
}

/// Translate a 1-based displayed goal number to a list index.
fn goal_index(number: usize, what: &str) -> Result<usize> {
    if number == 0 {
        bail!("{what} numbers are 1-based");
    }
    Ok(number - 1)
}

pub async fn execute(args: &GenerateArgs, config: ApiConfig) -> Result<()> {
    let input = read_objective(&args.input)?;
    let client = ApiClient::new(config.clone())?;
    let mut coordinator =
        SubmissionCoordinator::new(client, config.retry.clone(), config.enable_fallback);

    if let Err(error) = coordinator.submit(input.clone()).await {
        // The coordinator already holds the failure message; surface it
        // with the retry affordance the web form would show.
        eprintln!("{error}");
        eprintln!("Run the command again to retry, or check the service at {}.", config.base_url);
        bail!("generation failed");
    }

    if let Some(number) = args.edit {
        let index = goal_index(number, "--edit")?;
        match coordinator.edit_goal(index, &args.comments).await {
            Ok(()) => println!("Goal #{number} edited successfully.\n"),
            // Scoped failure: the original goals are still displayed below.
            Err(error @ WorkflowError::Action { .. }) => eprintln!("{error}"),
            Err(error) => return Err(error.into()),
        }
    }

    if let Some(number) = args.save {
        let index = goal_index(number, "--save")?;
        match coordinator.save_goal(index).await {
            Ok(()) => println!("Goal #{number} saved; other candidates discarded.\n"),
            Err(error @ WorkflowError::Action { .. }) => eprintln!("{error}"),
            Err(error) => return Err(error.into()),
        }
    }

    render::render_submission(&input, &coordinator.display_model(), coordinator.origin());

    if let Some(path) = &args.export {
        export::write_json(path, &input, coordinator.goals())?;
        println!("\nExported to {}", path.display());
    }
    Ok(())
}
