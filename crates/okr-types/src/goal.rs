// goal.rs — GoalRecord: one AI-produced SMART goal.
//
// Wire field names follow the generation service's contract
// (companyTopBetAlignment, framework3E, coreValue). A record is immutable
// once received; the only mutation path is the explicit edit round-trip,
// which replaces a record in place via GoalPatch.

use serde::{Deserialize, Serialize};

/// Marker character separating the KPI heading from its bullet points.
pub const KPI_DELIMITER: char = '*';

/// One AI-generated SMART goal.
///
/// All fields default to empty: the upstream omits fields it has nothing
/// to say about, and the renderer skips empty sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    /// Short goal statement.
    #[serde(default)]
    pub title: String,

    /// Longer narrative describing the goal.
    #[serde(default)]
    pub description: String,

    /// Raw KPI text. May encode a heading plus `*`-delimited bullet
    /// points; see [`parse_kpi`].
    #[serde(default)]
    pub kpi: String,

    /// How the goal aligns with the company's top strategic bets.
    #[serde(default)]
    pub company_top_bet_alignment: String,

    /// How the goal aligns with the 3E framework.
    #[serde(default, rename = "framework3E")]
    pub framework_3e: String,

    /// Which core value the goal supports.
    #[serde(default)]
    pub core_value: String,
}

impl GoalRecord {
    /// True when every field is empty — used to reject arrays of records
    /// that deserialized but carry no actual goal content.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.kpi.is_empty()
            && self.company_top_bet_alignment.is_empty()
            && self.framework_3e.is_empty()
            && self.core_value.is_empty()
    }

    /// Parse this record's KPI text into heading and bullet points.
    pub fn kpi_breakdown(&self) -> KpiBreakdown {
        parse_kpi(&self.kpi)
    }
}

/// A partial goal revision returned by the edit endpoint.
///
/// A field participates in a merge only when it is present *and*
/// non-empty; anything else keeps the original record's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kpi: Option<String>,
    pub company_top_bet_alignment: Option<String>,
    #[serde(rename = "framework3E")]
    pub framework_3e: Option<String>,
    pub core_value: Option<String>,
}

impl GoalPatch {
    /// Merge this patch over `original`, field by field.
    pub fn apply_to(&self, original: &GoalRecord) -> GoalRecord {
        fn pick(revised: &Option<String>, original: &str) -> String {
            match revised {
                Some(value) if !value.trim().is_empty() => value.clone(),
                _ => original.to_string(),
            }
        }
        GoalRecord {
            title: pick(&self.title, &original.title),
            description: pick(&self.description, &original.description),
            kpi: pick(&self.kpi, &original.kpi),
            company_top_bet_alignment: pick(
                &self.company_top_bet_alignment,
                &original.company_top_bet_alignment,
            ),
            framework_3e: pick(&self.framework_3e, &original.framework_3e),
            core_value: pick(&self.core_value, &original.core_value),
        }
    }
}

/// Parsed form of a KPI string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KpiBreakdown {
    /// No delimiter present — displayed as-is, no heading.
    Plain(String),

    /// Heading plus bullet points split on [`KPI_DELIMITER`].
    Itemized {
        /// Text before the first delimiter; `None` when that segment is
        /// empty after trimming.
        heading: Option<String>,
        /// Remaining segments, trimmed, with empty segments dropped.
        points: Vec<String>,
    },
}

/// Split a raw KPI string on [`KPI_DELIMITER`].
pub fn parse_kpi(raw: &str) -> KpiBreakdown {
    if !raw.contains(KPI_DELIMITER) {
        return KpiBreakdown::Plain(raw.to_string());
    }
    let mut parts = raw.split(KPI_DELIMITER);
    let heading = parts
        .next()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    let points = parts
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    KpiBreakdown::Itemized { heading, points }
}
