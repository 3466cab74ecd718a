// render.rs — Plain-text rendering of the display model.
//
// One rendering path per payload shape: narrative block, numbered goal
// cards with the parsed KPI heading/bullets, generic label/text sections,
// or the "no goals found" notice. Goal numbers shown here are the 1-based
// numbers --edit and --save accept.

use okr_types::{KpiBreakdown, ObjectiveInput};
use okr_workflow::{DisplayModel, ResultOrigin};

/// Print the submitted objective and whatever the service returned.
pub fn render_submission(
    input: &ObjectiveInput,
    model: &DisplayModel,
    origin: Option<ResultOrigin>,
) {
    println!("OKR Summary");
    println!("  Department:   {}", input.department);
    println!("  Job title:    {}", input.job_title);
    println!("  Aligned with: {}", input.managers_goal());
    println!("  Objective:    {}", input.goal_description);
    println!("  Key result:   {}", input.key_result);
    println!("  Timeline:     {} to {}", input.start_date, input.due_date);
    println!();

    if origin == Some(ResultOrigin::Fallback) {
        println!("Note: showing locally generated goals because the service was unavailable.");
        println!();
    }

    match model {
        DisplayModel::Narrative(text) => {
            println!("Generated SMART goal:");
            println!("{text}");
        }
        DisplayModel::Goals(goals) => {
            for (number, goal) in goals.iter().enumerate().map(|(i, g)| (i + 1, g)) {
                println!("Goal #{number}: {}", goal.title);
                if !goal.description.is_empty() {
                    println!("  Description: {}", goal.description);
                }
                if !goal.kpi.is_empty() {
                    render_kpi(&goal.kpi_breakdown());
                }
                if !goal.company_top_bet_alignment.is_empty() {
                    println!("  Company bet: {}", goal.company_top_bet_alignment);
                }
                if !goal.framework_3e.is_empty() {
                    println!("  3E framework: {}", goal.framework_3e);
                }
                if !goal.core_value.is_empty() {
                    println!("  Core value: {}", goal.core_value);
                }
                println!();
            }
        }
        DisplayModel::Sections(sections) => {
            for (label, text) in sections {
                println!("{label}");
                println!("  {text}");
                println!();
            }
        }
        DisplayModel::NoGoals => {
            println!("No SMART goals found in response.");
        }
    }
}

fn render_kpi(breakdown: &KpiBreakdown) {
    match breakdown {
        KpiBreakdown::Plain(text) => println!("  KPIs: {text}"),
        KpiBreakdown::Itemized { heading, points } => {
            match heading {
                Some(heading) => println!("  KPIs: {heading}"),
                None => println!("  KPIs:"),
            }
            for point in points {
                println!("    - {point}");
            }
        }
    }
}
