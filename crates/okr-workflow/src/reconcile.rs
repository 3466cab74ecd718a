// reconcile.rs — Normalize result payloads and merge edits/saves.
//
// The upstream's three response shapes each get their own rendering path;
// an empty or content-free goal list degrades to "no goals found" rather
// than crashing. apply_edit and apply_save are the only two ways the
// displayed goal list changes after a successful generation.

use okr_types::{GoalPatch, GoalRecord, ResultPayload};

/// What the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayModel {
    /// A single narrative block.
    Narrative(String),

    /// Structured goal cards.
    Goals(Vec<GoalRecord>),

    /// Generic (label, text) sections for unanticipated object shapes.
    Sections(Vec<(String, String)>),

    /// Nothing displayable in the response.
    NoGoals,
}

/// Normalize a raw payload into its display form.
///
/// Goal lists pass through verbatim; an empty list, or one whose records
/// all carry no content, yields [`DisplayModel::NoGoals`].
pub fn normalize(payload: &ResultPayload) -> DisplayModel {
    match payload {
        ResultPayload::Narrative(text) => DisplayModel::Narrative(text.clone()),
        ResultPayload::Goals(_) | ResultPayload::Wrapped(_) => {
            // goals() is Some for both variants.
            let goals = payload.goals().unwrap_or_default();
            if goals.is_empty() || goals.iter().all(GoalRecord::is_empty) {
                DisplayModel::NoGoals
            } else {
                DisplayModel::Goals(goals.to_vec())
            }
        }
        ResultPayload::Sections(map) => {
            if map.is_empty() {
                return DisplayModel::NoGoals;
            }
            let sections = map
                .iter()
                .map(|(label, value)| {
                    let text = match value.as_str() {
                        Some(s) => s.to_string(),
                        None => value.to_string(),
                    };
                    (label.clone(), text)
                })
                .collect();
            DisplayModel::Sections(sections)
        }
    }
}

/// Replace the goal at `index` with `patch` merged over it.
///
/// Each patch field wins only when present and non-empty; everything else
/// keeps the original value.
///
/// # Panics
///
/// Panics when `index` is out of range — callers select indices from the
/// displayed list, so an out-of-range index is a programmer error.
pub fn apply_edit(goals: &[GoalRecord], index: usize, patch: &GoalPatch) -> Vec<GoalRecord> {
    assert!(
        index < goals.len(),
        "goal index {index} out of range (have {})",
        goals.len()
    );
    let mut updated = goals.to_vec();
    updated[index] = patch.apply_to(&goals[index]);
    updated
}

/// Collapse the working set to the single saved goal.
///
/// Saving is a final selection: the other candidates are discarded.
pub fn apply_save(goal: &GoalRecord) -> Vec<GoalRecord> {
    vec![goal.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(title: &str) -> GoalRecord {
        GoalRecord {
            title: title.to_string(),
            description: format!("{title} description"),
            kpi: "Overview*point1*point2".to_string(),
            ..GoalRecord::default()
        }
    }

    #[test]
    fn bare_string_normalizes_to_narrative() {
        let payload: ResultPayload =
            serde_json::from_str(r#""Grow revenue by 10%""#).unwrap();
        assert_eq!(
            normalize(&payload),
            DisplayModel::Narrative("Grow revenue by 10%".to_string())
        );
    }

    #[test]
    fn goal_array_normalizes_verbatim() {
        let payload: ResultPayload = serde_json::from_str(
            r#"[{"title":"A","kpi":"Overview*point1*point2"}]"#,
        )
        .unwrap();
        match normalize(&payload) {
            DisplayModel::Goals(goals) => {
                assert_eq!(goals.len(), 1);
                assert_eq!(goals[0].title, "A");
                assert_eq!(goals[0].kpi, "Overview*point1*point2");
            }
            other => panic!("expected goals, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_no_goals() {
        assert_eq!(
            normalize(&ResultPayload::Goals(Vec::new())),
            DisplayModel::NoGoals
        );
    }

    #[test]
    fn array_of_content_free_records_is_no_goals() {
        let payload: ResultPayload = serde_json::from_str(r#"[{}, {}]"#).unwrap();
        assert_eq!(normalize(&payload), DisplayModel::NoGoals);
    }

    #[test]
    fn object_normalizes_to_sections() {
        let payload: ResultPayload = serde_json::from_str(
            r#"{"Objective":"Grow revenue","Confidence":0.8}"#,
        )
        .unwrap();
        match normalize(&payload) {
            DisplayModel::Sections(sections) => {
                assert_eq!(sections.len(), 2);
                assert!(sections
                    .iter()
                    .any(|(label, text)| label == "Objective" && text == "Grow revenue"));
                // Non-string values are stringified, not dropped.
                assert!(sections
                    .iter()
                    .any(|(label, text)| label == "Confidence" && text == "0.8"));
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn apply_edit_replaces_one_record_in_place() {
        let goals = vec![goal("first"), goal("second")];
        let patch = GoalPatch {
            title: Some("New Title".to_string()),
            ..GoalPatch::default()
        };
        let updated = apply_edit(&goals, 1, &patch);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0], goals[0]);
        assert_eq!(updated[1].title, "New Title");
        assert_eq!(updated[1].description, goals[1].description);
        assert_eq!(updated[1].kpi, goals[1].kpi);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn apply_edit_out_of_range_panics() {
        apply_edit(&[goal("only")], 3, &GoalPatch::default());
    }

    #[test]
    fn apply_save_keeps_only_the_saved_goal() {
        let goals = vec![goal("a"), goal("b"), goal("c")];
        let saved = apply_save(&goals[0]);
        assert_eq!(saved, vec![goals[0].clone()]);
    }
}
