use std::path::Path;

use crate::error::Result;
use crate::visualization::data::VizData;
use crate::visualization::templates::{page_shell, DATA_MARKER, PAGE_ICON_MARKER, PAGE_TITLE_MARKER};

/// Render the dashboard page as a string
pub fn render_html(viz_data: &VizData) -> Result<String> {
    // "</" inside the JSON would close the inline <script> block
    let json_data = serde_json::to_string(viz_data)?.replace("</", "<\\/");

    let html = page_shell()
        .replace(PAGE_TITLE_MARKER, &escape_html(&viz_data.page_title))
        .replace(PAGE_ICON_MARKER, &viz_data.page_icon)
        .replace(DATA_MARKER, &json_data);

    Ok(html)
}

/// Generate the HTML dashboard file
pub fn generate_html(viz_data: &VizData, output_path: &Path) -> Result<()> {
    let html = render_html(viz_data)?;
    std::fs::write(output_path, html)?;
    tracing::info!(path = %output_path.display(), tabs = viz_data.tabs.len(), "wrote dashboard");
    Ok(())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
