// objectives.rs — List the predefined manager objectives.

use anyhow::Result;

/// The manager objectives an OKR can align with. Presentation data: the
/// form joins the selected entries into a single string for transmission.
pub const MANAGER_OBJECTIVE_CATALOG: &[&str] = &[
    "Improve platform reliability",
    "Grow recurring revenue",
    "Expand into new markets",
    "Raise customer satisfaction",
    "Develop team capabilities",
    "Reduce operating costs",
];

pub fn execute() -> Result<()> {
    println!("Predefined manager objectives:");
    for objective in MANAGER_OBJECTIVE_CATALOG {
        println!("  - {objective}");
    }
    Ok(())
}
