use crate::error::ExportError;

/// Page geometry and typography for the feedback report.
///
/// All lengths are PDF points (1/72 inch).
#[derive(Debug, Clone)]
pub struct ReportStyles {
    /// Page width; A4 by default.
    pub page_width: f32,

    /// Page height; A4 by default.
    pub page_height: f32,

    /// Uniform page margin.
    pub margin: f32,

    pub title_size: f32,
    pub body_size: f32,

    /// Font size of heatmap column headers and axis captions.
    pub label_size: f32,

    /// Font size of the score printed inside each heatmap cell.
    pub cell_text_size: f32,

    /// Heatmap cell width.
    pub cell_width: f32,

    /// Preferred heatmap cell height. Shrinks when responses do not fit.
    pub cell_height: f32,

    /// Distance from the title baseline down to the top of the grid,
    /// which holds the column header row.
    pub header_offset: f32,

    /// Width reserved left of the grid for response numbers.
    pub row_label_width: f32,

    /// Width of the colour legend bar right of the grid.
    pub legend_width: f32,

    /// Height of the colour legend bar.
    pub legend_height: f32,

    /// Font size of the mean score numeral.
    pub mean_size: f32,

    pub caption_size: f32,

    /// Indent of the bullet from the left margin on text pages.
    pub bullet_indent: f32,

    /// Line height as a multiple of the font size.
    pub line_spacing: f32,

    /// Extra space between bullet items, in points.
    pub paragraph_gap: f32,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 50.0,
            title_size: 18.0,
            body_size: 12.0,
            label_size: 9.0,
            cell_text_size: 8.0,
            cell_width: 60.0,
            cell_height: 22.0,
            header_offset: 48.0,
            row_label_width: 36.0,
            legend_width: 14.0,
            legend_height: 220.0,
            mean_size: 48.0,
            caption_size: 18.0,
            bullet_indent: 14.0,
            line_spacing: 1.35,
            paragraph_gap: 8.0,
        }
    }
}

impl ReportStyles {
    /// Reject geometry that cannot produce a usable page.
    pub fn validate(&self) -> Result<(), ExportError> {
        let lengths = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("title_size", self.title_size),
            ("body_size", self.body_size),
            ("label_size", self.label_size),
            ("cell_text_size", self.cell_text_size),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("mean_size", self.mean_size),
            ("caption_size", self.caption_size),
            ("line_spacing", self.line_spacing),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::InvalidStyles(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let offsets = [
            ("margin", self.margin),
            ("header_offset", self.header_offset),
            ("row_label_width", self.row_label_width),
            ("legend_width", self.legend_width),
            ("legend_height", self.legend_height),
            ("bullet_indent", self.bullet_indent),
            ("paragraph_gap", self.paragraph_gap),
        ];
        for (name, value) in offsets {
            if !value.is_finite() || value < 0.0 {
                return Err(ExportError::InvalidStyles(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.text_width() <= self.body_size {
            return Err(ExportError::InvalidStyles(
                "margins leave no room for text".to_string(),
            ));
        }
        if self.page_height - 2.0 * self.margin <= self.title_size + self.body_size * self.line_spacing {
            return Err(ExportError::InvalidStyles(
                "margins leave no room for a title and one line".to_string(),
            ));
        }

        Ok(())
    }

    /// Width between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn line_height(&self, size: f32) -> f32 {
        size * self.line_spacing
    }
}
