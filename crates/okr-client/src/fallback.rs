// fallback.rs — Local stand-in goal generator.
//
// When the upstream service is unreachable after exhausting its retries
// and the fallback feature flag is on, the workflow substitutes this
// deterministic goal set so the user still leaves with something
// actionable. Results produced here are always flagged as fallback so the
// presentation layer can say so.

use okr_types::{GoalRecord, ObjectiveInput, KPI_DELIMITER};

/// Build a two-goal stand-in set from the submitted objective.
///
/// The KPI strings use the same `*`-delimited heading/bullet encoding the
/// upstream produces, so they render through the normal path.
pub fn fallback_goals(input: &ObjectiveInput) -> Vec<GoalRecord> {
    let d = KPI_DELIMITER;
    let objective_goal = GoalRecord {
        title: format!("{}: {}", input.department, input.goal_description),
        description: format!(
            "Deliver \"{}\" for the {} team by {}, aligned with: {}.",
            input.goal_description,
            input.department,
            input.due_date,
            input.managers_goal()
        ),
        kpi: format!(
            "Progress checkpoints{d}Plan agreed within two weeks of {start}{d}Mid-point review scheduled{d}Completed by {due}",
            start = input.start_date,
            due = input.due_date,
        ),
        company_top_bet_alignment: input.managers_goal(),
        framework_3e: "Execution".to_string(),
        core_value: "Ownership".to_string(),
    };
    let key_result_goal = GoalRecord {
        title: format!("Measure: {}", input.key_result),
        description: format!(
            "Track \"{}\" as the measurable outcome for the {} objective owned by the {}.",
            input.key_result, input.department, input.job_title
        ),
        kpi: format!(
            "Key result tracking{d}Baseline captured by {start}{d}{kr}{d}Reviewed weekly until {due}",
            start = input.start_date,
            due = input.due_date,
            kr = input.key_result,
        ),
        company_top_bet_alignment: input.managers_goal(),
        framework_3e: "Evaluation".to_string(),
        core_value: "Accountability".to_string(),
    };
    vec![objective_goal, key_result_goal]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use okr_types::KpiBreakdown;

    fn sample_input() -> ObjectiveInput {
        ObjectiveInput {
            department: "Engineering".to_string(),
            job_title: "Backend Engineer".to_string(),
            manager_objectives: vec!["Improve platform reliability".to_string()],
            goal_description: "Reduce API error rate".to_string(),
            key_result: "Error rate below 0.1%".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        }
    }

    #[test]
    fn produces_two_non_empty_goals() {
        let goals = fallback_goals(&sample_input());
        assert_eq!(goals.len(), 2);
        assert!(goals.iter().all(|g| !g.is_empty()));
        assert!(goals[0].title.contains("Reduce API error rate"));
        assert!(goals[1].title.contains("Error rate below 0.1%"));
    }

    #[test]
    fn kpi_strings_parse_through_the_normal_path() {
        let goals = fallback_goals(&sample_input());
        for goal in &goals {
            match goal.kpi_breakdown() {
                KpiBreakdown::Itemized { heading, points } => {
                    assert!(heading.is_some());
                    assert!(!points.is_empty());
                }
                KpiBreakdown::Plain(_) => panic!("fallback KPI should be itemized"),
            }
        }
    }

    #[test]
    fn is_deterministic() {
        let input = sample_input();
        assert_eq!(fallback_goals(&input), fallback_goals(&input));
    }
}
