//! Heatmap colour scale and grid geometry.

use seminar_core::models::category::SCORE_CATEGORY_COUNT;
use seminar_core::scoring::SCORE_MAX;

use crate::styles::ReportStyles;

/// An RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Linear red→blue scale: 0 is pure red, `SCORE_MAX` pure blue, no green.
pub fn score_color(score: f64) -> Rgb {
    let t = if score.is_finite() {
        (score / SCORE_MAX).clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    Rgb {
        r: 1.0 - t,
        g: 0.0,
        b: t,
    }
}

/// Vertical space below the grid reserved for the x-axis caption.
const AXIS_CAPTION_SPACE: f32 = 28.0;

/// Gap between the grid's right edge and the legend bar.
const LEGEND_GAP: f32 = 18.0;

/// Stroke width of the white line separating heatmap cells.
pub const CELL_BORDER_WIDTH: f32 = 0.5;

/// Cells shorter than this are drawn without borders, which would
/// otherwise cover the fill.
const MIN_BORDERED_CELL_HEIGHT: f32 = 2.0;

/// Position of every heatmap element on the page.
///
/// The grid's origin is its top-left corner; PDF y grows upwards, so row
/// `i` occupies `[grid_top - (i + 1) * cell_height, grid_top - i * cell_height]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLayout {
    pub rows: usize,
    pub title_y: f32,
    pub grid_left: f32,
    pub grid_top: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub legend_left: f32,
    pub legend_height: f32,
}

impl HeatmapLayout {
    pub fn new(rows: usize, styles: &ReportStyles) -> Self {
        let title_y = styles.page_height - styles.margin - styles.title_size;
        let grid_top = title_y - styles.header_offset;
        let grid_left = styles.margin + styles.row_label_width;

        let available = (grid_top - styles.margin - AXIS_CAPTION_SPACE).max(0.0);
        let cell_height = if rows == 0 {
            styles.cell_height
        } else {
            styles.cell_height.min(available / rows as f32)
        };

        let grid_width = styles.cell_width * SCORE_CATEGORY_COUNT as f32;

        Self {
            rows,
            title_y,
            grid_left,
            grid_top,
            cell_width: styles.cell_width,
            cell_height,
            legend_left: grid_left + grid_width + LEGEND_GAP,
            legend_height: styles.legend_height.min(available),
        }
    }

    pub fn grid_width(&self) -> f32 {
        self.cell_width * SCORE_CATEGORY_COUNT as f32
    }

    pub fn grid_height(&self) -> f32 {
        self.cell_height * self.rows as f32
    }

    pub fn grid_bottom(&self) -> f32 {
        self.grid_top - self.grid_height()
    }

    /// Lower-left corner of the cell at `row`, `column`.
    pub fn cell_origin(&self, row: usize, column: usize) -> (f32, f32) {
        (
            self.grid_left + column as f32 * self.cell_width,
            self.grid_top - (row + 1) as f32 * self.cell_height,
        )
    }

    /// Baseline for the x-axis caption under the grid.
    pub fn axis_caption_y(&self) -> f32 {
        self.grid_bottom() - AXIS_CAPTION_SPACE + 8.0
    }

    pub fn draws_cell_borders(&self) -> bool {
        self.cell_height >= MIN_BORDERED_CELL_HEIGHT
    }

    /// Whether a line of text at `size` fits inside one cell.
    pub fn fits_text(&self, size: f32) -> bool {
        self.cell_height >= size + 2.0
    }
}
