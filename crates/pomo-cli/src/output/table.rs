//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use pomo::CatalogStats;

/// Statistics for one compiled file.
pub struct FileStats {
    /// Path of the `.po` file.
    pub file: String,
    pub stats: CatalogStats,
}

/// Format per-file message counts as an ASCII table.
pub fn format_stats_table(rows: &[FileStats]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Messages", "Fuzzy", "Untranslated"]);

    for row in rows {
        table.add_row(vec![
            row.file.clone(),
            row.stats.messages.to_string(),
            row.stats.fuzzy.to_string(),
            row.stats.untranslated.to_string(),
        ]);
    }
    for index in 1..4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}
