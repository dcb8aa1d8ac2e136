use crate::errors::{Error, Result};
use crate::rename::RenameOutcome;

/// Format a rename outcome for display.
///
/// With `json` the outcome is rendered as pretty-printed JSON; otherwise as
/// a table with one row per mapping. The status column reads `planned` for
/// view-only passes, and `renamed` or `unchanged` for live ones.
pub fn format_outcome(outcome: &RenameOutcome, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(outcome)
            .map_err(|e| Error::Serialize { source: e });
    }

    use comfy_table::{Cell, Color, Table};

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("From").fg(Color::Cyan),
        Cell::new("To").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
    ]);

    for (old, new) in &outcome.mappings {
        let status = if outcome.view_only {
            "planned"
        } else if old.to_string_lossy().to_lowercase() == new.to_string_lossy().to_lowercase() {
            "unchanged"
        } else {
            "renamed"
        };

        let from = old.to_string_lossy();
        let to = new.to_string_lossy();
        table.add_row(vec![from.as_ref(), to.as_ref(), status]);
    }

    Ok(table.to_string())
}
