use crate::domain::model::{Legend, LegendEntry, CATEGORY_TABLE};

/// Builds the depth legend from the category table, in index order.
pub fn build_legend() -> Legend {
    Legend {
        entries: CATEGORY_TABLE
            .iter()
            .map(|category| LegendEntry {
                color: category.color,
                label: category.label,
            })
            .collect(),
    }
}

impl Legend {
    /// One swatch row per entry, as placed inside the `info legend` control.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("<li style='background: {}'></li> {}<br>", entry.color, entry.label))
            .collect()
    }
}
