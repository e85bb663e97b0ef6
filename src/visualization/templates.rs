//! Dashboard page assets, compiled into the binary from `templates/`.

pub const HTML_TEMPLATE: &str = include_str!("../../templates/index.html");
pub const STYLES_CSS: &str = include_str!("../../templates/styles.css");
/// Builds the tabs and maps each `ChartSpec` to plotly traces
pub const DASHBOARD_JS: &str = include_str!("../../templates/dashboard.js");

/// Markers in `HTML_TEMPLATE` replaced by the generator
pub const PAGE_TITLE_MARKER: &str = "__PAGE_TITLE__";
pub const PAGE_ICON_MARKER: &str = "__PAGE_ICON__";
pub const STYLES_MARKER: &str = "/* __STYLES_PLACEHOLDER__ */";
pub const SCRIPT_MARKER: &str = "/* __DASHBOARD_JS_PLACEHOLDER__ */";
/// Quoted so the template stays valid JavaScript before substitution
pub const DATA_MARKER: &str = "\"__DATA_PLACEHOLDER__\"";

/// Page with the static assets inlined, still carrying the page and data markers
pub fn page_shell() -> String {
    HTML_TEMPLATE
        .replace(STYLES_MARKER, STYLES_CSS)
        .replace(SCRIPT_MARKER, DASHBOARD_JS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_every_marker() {
        for marker in [PAGE_TITLE_MARKER, PAGE_ICON_MARKER, STYLES_MARKER, SCRIPT_MARKER, DATA_MARKER] {
            assert!(HTML_TEMPLATE.contains(marker), "missing {}", marker);
        }
    }

    #[test]
    fn test_page_shell_inlines_assets() {
        let shell = page_shell();
        assert!(!shell.contains(STYLES_MARKER));
        assert!(!shell.contains(SCRIPT_MARKER));
        assert!(shell.contains(DATA_MARKER));
        assert!(shell.contains("function tracesFor(spec)"));
    }

    #[test]
    fn test_script_renders_summary() {
        assert!(HTML_TEMPLATE.contains("id=\"summary\""));
        assert!(DASHBOARD_JS.contains("data.summary.entity_count"));
        assert!(DASHBOARD_JS.contains("data.summary.grand_total"));
    }
}
