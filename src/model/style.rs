use serde::{Deserialize, Serialize};

use crate::model::ChartKind;

/// Presentation options handed through to the renderer untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Renderer theme name
    pub template: String,
    pub title_font_size: u32,
    pub title_color: String,
    pub grid_color: String,
    /// Hover mode ("x unified", "x", ...)
    pub hover_mode: Option<String>,
    pub line_width: Option<f64>,
    pub marker_size: Option<u32>,
    /// Line interpolation ("linear", "spline")
    pub line_shape: Option<String>,
    /// Single fill colour for bar charts
    pub bar_color: Option<String>,
    /// Donut hole fraction for pie charts
    pub hole: Option<f64>,
    pub slice_border_color: Option<String>,
    pub slice_border_width: Option<u32>,
    pub legend: Option<LegendOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub title: String,
    pub horizontal: bool,
    pub font_size: u32,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            title: "Websites".to_string(),
            horizontal: true,
            font_size: 12,
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            template: "plotly_white".to_string(),
            title_font_size: 20,
            title_color: "#333333".to_string(),
            grid_color: "lightgrey".to_string(),
            hover_mode: None,
            line_width: None,
            marker_size: None,
            line_shape: None,
            bar_color: None,
            hole: None,
            slice_border_color: None,
            slice_border_width: None,
            legend: None,
        }
    }
}

impl StyleOptions {
    pub fn time_series() -> Self {
        Self {
            hover_mode: Some("x unified".to_string()),
            line_width: Some(2.5),
            marker_size: Some(8),
            line_shape: Some("linear".to_string()),
            legend: Some(LegendOptions::default()),
            ..Self::default()
        }
    }

    pub fn bar() -> Self {
        Self {
            hover_mode: Some("x".to_string()),
            bar_color: Some("#1f77b4".to_string()),
            ..Self::default()
        }
    }

    pub fn pie() -> Self {
        Self {
            hole: Some(0.3),
            slice_border_color: Some("#FFFFFF".to_string()),
            slice_border_width: Some(2),
            ..Self::default()
        }
    }

    pub fn stacked_area() -> Self {
        Self {
            hover_mode: Some("x unified".to_string()),
            line_width: Some(2.5),
            line_shape: Some("spline".to_string()),
            legend: Some(LegendOptions::default()),
            ..Self::default()
        }
    }
}

impl StyleOptions {
    /// Defaults for a chart kind
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Line => Self::time_series(),
            ChartKind::Bar => Self::bar(),
            ChartKind::Pie => Self::pie(),
            ChartKind::StackedArea => Self::stacked_area(),
        }
    }
}

/// Fields to change in a chart's style. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylePatch {
    pub template: Option<String>,
    pub title_font_size: Option<u32>,
    pub title_color: Option<String>,
    pub grid_color: Option<String>,
    pub hover_mode: Option<String>,
    pub line_width: Option<f64>,
    pub marker_size: Option<u32>,
    pub line_shape: Option<String>,
    pub bar_color: Option<String>,
    pub hole: Option<f64>,
    pub slice_border_color: Option<String>,
    pub slice_border_width: Option<u32>,
    pub legend: Option<LegendOptions>,
}

impl StylePatch {
    /// Overlay this patch onto `base`
    pub fn apply(&self, mut base: StyleOptions) -> StyleOptions {
        let patch = self.clone();
        if let Some(v) = patch.template {
            base.template = v;
        }
        if let Some(v) = patch.title_font_size {
            base.title_font_size = v;
        }
        if let Some(v) = patch.title_color {
            base.title_color = v;
        }
        if let Some(v) = patch.grid_color {
            base.grid_color = v;
        }
        base.hover_mode = patch.hover_mode.or(base.hover_mode);
        base.line_width = patch.line_width.or(base.line_width);
        base.marker_size = patch.marker_size.or(base.marker_size);
        base.line_shape = patch.line_shape.or(base.line_shape);
        base.bar_color = patch.bar_color.or(base.bar_color);
        base.hole = patch.hole.or(base.hole);
        base.slice_border_color = patch.slice_border_color.or(base.slice_border_color);
        base.slice_border_width = patch.slice_border_width.or(base.slice_border_width);
        base.legend = patch.legend.or(base.legend);
        base
    }
}

/// Per-chart style patches loaded from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    pub line: Option<StylePatch>,
    pub bar: Option<StylePatch>,
    pub pie: Option<StylePatch>,
    pub stacked_area: Option<StylePatch>,
}

impl StyleOverrides {
    pub fn for_kind(&self, kind: ChartKind) -> Option<&StylePatch> {
        match kind {
            ChartKind::Line => self.line.as_ref(),
            ChartKind::Bar => self.bar.as_ref(),
            ChartKind::Pie => self.pie.as_ref(),
            ChartKind::StackedArea => self.stacked_area.as_ref(),
        }
    }

    /// Style for a chart kind: its defaults with any patch applied
    pub fn style_for(&self, kind: ChartKind) -> StyleOptions {
        let base = StyleOptions::for_kind(kind);
        match self.for_kind(kind) {
            Some(patch) => patch.apply(base),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_by_kind() {
        let overrides: StyleOverrides =
            serde_json::from_str(r##"{"bar": {"bar_color": "#ff7f0e"}}"##).unwrap();
        let bar = overrides.style_for(ChartKind::Bar);
        assert_eq!(bar.bar_color.as_deref(), Some("#ff7f0e"));
        assert_eq!(bar.hover_mode.as_deref(), Some("x"));
        assert!(overrides.for_kind(ChartKind::Pie).is_none());
        assert_eq!(overrides.style_for(ChartKind::Pie), StyleOptions::pie());
        assert!(serde_json::from_str::<StyleOverrides>(r#"{"donut": {}}"#).is_err());
        assert!(serde_json::from_str::<StyleOverrides>(r#"{"bar": {"colour": "red"}}"#).is_err());
    }

    #[test]
    fn test_partial_override_keeps_kind_defaults() {
        let overrides: StyleOverrides = serde_json::from_str(
            r##"{"line": {"title_color": "#000000", "line_width": 4.0}, "pie": {"hole": 0.5}}"##,
        )
        .unwrap();

        let line = overrides.style_for(ChartKind::Line);
        assert_eq!(line.title_color, "#000000");
        assert_eq!(line.line_width, Some(4.0));
        assert_eq!(line.template, "plotly_white");
        assert_eq!(line.title_font_size, 20);
        assert_eq!(line.marker_size, Some(8));
        assert_eq!(line.hover_mode.as_deref(), Some("x unified"));
        assert_eq!(line.legend, Some(LegendOptions::default()));

        let pie = overrides.style_for(ChartKind::Pie);
        assert_eq!(pie.hole, Some(0.5));
        assert_eq!(pie.slice_border_color.as_deref(), Some("#FFFFFF"));
        assert_eq!(pie.slice_border_width, Some(2));
    }

    #[test]
    fn test_pie_has_no_legend() {
        let style = StyleOptions::pie();
        assert!(style.legend.is_none());
        assert_eq!(style.hole, Some(0.3));
    }
}
