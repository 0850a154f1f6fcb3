//! PDF generation for the seminar feedback report.
//!
//! Page order is fixed: heatmap, mean score, then one page per free-text
//! category. Text pages that overflow continue on additional pages.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::info;

use seminar_core::FeedbackDataset;
use seminar_core::models::category::{ScoreCategory, TextCategory};
use seminar_core::scoring::SCORE_MAX;

use crate::error::ExportError;
use crate::heatmap::{CELL_BORDER_WIDTH, HeatmapLayout, Rgb, score_color};
use crate::styles::ReportStyles;
use crate::text::{BULLET, Face, encode_win_ansi, split_heading, text_width, wrap_text};

/// Page resource name of each face.
fn font_resource(face: Face) -> Name<'static> {
    match face {
        Face::Regular => Name(b"F1"),
        Face::Bold => Name(b"F2"),
    }
}

const HEATMAP_TITLE: &str = "Seminar Feedback Heatmap";
const MEAN_CAPTION: &str = "Mean Overall Score";
const MEAN_PLACEHOLDER: &str = "N/A";

/// Number of colour stripes used to draw the legend bar.
const LEGEND_STEPS: usize = 50;

/// Render the full report for `dataset`.
pub fn render_report(dataset: &FeedbackDataset, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    styles.validate()?;

    let mut writer = ReportWriter::new(styles);
    writer.add_page(heatmap_page(dataset, styles));
    writer.add_page(mean_page(dataset, styles));
    for category in TextCategory::ALL {
        for page in text_pages(category.title(), dataset.text(category), styles) {
            writer.add_page(page);
        }
    }

    let page_count = writer.page_count();
    let bytes = writer.finish()?;

    info!(
        responses = dataset.response_count(),
        pages = page_count,
        bytes = bytes.len(),
        "rendered feedback report"
    );

    Ok(bytes)
}

/// Owns the PDF object graph while pages are appended.
struct ReportWriter {
    pdf: Pdf,
    next_id: i32,
    page_tree: Ref,
    regular: Ref,
    bold: Ref,
    pages: Vec<Ref>,
    media_box: Rect,
}

impl ReportWriter {
    fn new(styles: &ReportStyles) -> Self {
        let mut pdf = Pdf::new();
        let catalog = Ref::new(1);
        let page_tree = Ref::new(2);
        let regular = Ref::new(3);
        let bold = Ref::new(4);
        let info = Ref::new(5);

        pdf.catalog(catalog).pages(page_tree);
        pdf.type1_font(regular)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.document_info(info)
            .title(TextStr("Seminar Feedback Summary"))
            .producer(TextStr(concat!("seminar-export ", env!("CARGO_PKG_VERSION"))));

        Self {
            pdf,
            next_id: 6,
            page_tree,
            regular,
            bold,
            pages: Vec::new(),
            media_box: Rect::new(0.0, 0.0, styles.page_width, styles.page_height),
        }
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn add_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();

        let mut page = self.pdf.page(page_id);
        page.media_box(self.media_box);
        page.parent(self.page_tree);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(font_resource(Face::Regular), self.regular)
            .pair(font_resource(Face::Bold), self.bold);
        page.finish();

        self.pdf.stream(content_id, &content.finish());
        self.pages.push(page_id);
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        let count = i32::try_from(self.pages.len())
            .map_err(|_| ExportError::Pdf("too many pages".to_string()))?;
        self.pdf
            .pages(self.page_tree)
            .kids(self.pages.iter().copied())
            .count(count);
        Ok(self.pdf.finish())
    }
}

fn draw_text(content: &mut Content, face: Face, size: f32, x: f32, y: f32, text: &str) {
    let encoded = encode_win_ansi(text);
    content
        .begin_text()
        .set_font(font_resource(face), size)
        .next_line(x, y)
        .show(Str(&encoded))
        .end_text();
}

fn draw_centered(content: &mut Content, face: Face, size: f32, center_x: f32, y: f32, text: &str) {
    let x = center_x - text_width(face, text, size) / 2.0;
    draw_text(content, face, size, x, y, text);
}

fn fill_rect(content: &mut Content, color: Rgb, x: f32, y: f32, width: f32, height: f32) {
    content.set_fill_rgb(color.r, color.g, color.b);
    content.rect(x, y, width, height);
    content.fill_nonzero();
}

fn heatmap_page(dataset: &FeedbackDataset, styles: &ReportStyles) -> Content {
    let layout = HeatmapLayout::new(dataset.response_count(), styles);
    let mut content = Content::new();

    content.set_fill_gray(0.0);
    draw_centered(
        &mut content,
        Face::Bold,
        styles.title_size,
        styles.page_width / 2.0,
        layout.title_y,
        HEATMAP_TITLE,
    );

    // Column headers, wrapped on the first space.
    let header_line = styles.label_size + 2.0;
    for category in ScoreCategory::ALL {
        let center = layout.grid_left + (category.index() as f32 + 0.5) * layout.cell_width;
        let base = layout.grid_top + 6.0;
        match split_heading(category.label()) {
            (first, Some(second)) => {
                draw_centered(&mut content, Face::Bold, styles.label_size, center, base + header_line, first);
                draw_centered(&mut content, Face::Bold, styles.label_size, center, base, second);
            }
            (only, None) => {
                draw_centered(&mut content, Face::Bold, styles.label_size, center, base, only);
            }
        }
    }

    let borders = layout.draws_cell_borders();
    if borders {
        content.set_line_width(CELL_BORDER_WIDTH);
        content.set_stroke_gray(1.0);
    }
    for (row, scores) in dataset.scores().iter().enumerate() {
        for category in ScoreCategory::ALL {
            let (x, y) = layout.cell_origin(row, category.index());
            fill_rect(
                &mut content,
                score_color(scores[category.index()]),
                x,
                y,
                layout.cell_width,
                layout.cell_height,
            );
            if borders {
                content.rect(x, y, layout.cell_width, layout.cell_height);
                content.stroke();
            }
        }
    }

    if layout.fits_text(styles.cell_text_size) {
        content.set_fill_gray(1.0);
        for (row, scores) in dataset.scores().iter().enumerate() {
            for category in ScoreCategory::ALL {
                let (x, y) = layout.cell_origin(row, category.index());
                let label = format!("{:.1}", scores[category.index()]);
                let baseline = y + (layout.cell_height - styles.cell_text_size * 0.7) / 2.0;
                draw_centered(
                    &mut content,
                    Face::Regular,
                    styles.cell_text_size,
                    x + layout.cell_width / 2.0,
                    baseline,
                    &label,
                );
            }
        }
    }

    content.set_fill_gray(0.0);
    if layout.fits_text(styles.label_size) {
        for row in 0..layout.rows {
            let (_, y) = layout.cell_origin(row, 0);
            let label = (row + 1).to_string();
            let x = layout.grid_left - 4.0 - text_width(Face::Regular, &label, styles.label_size);
            let baseline = y + (layout.cell_height - styles.label_size * 0.7) / 2.0;
            draw_text(&mut content, Face::Regular, styles.label_size, x, baseline, &label);
        }
    }

    draw_centered(
        &mut content,
        Face::Regular,
        styles.label_size + 1.0,
        layout.grid_left + layout.grid_width() / 2.0,
        layout.axis_caption_y(),
        "Feedback Category",
    );

    // y-axis caption, rotated a quarter turn counter-clockwise.
    let caption = "Responses";
    let caption_size = styles.label_size + 1.0;
    let caption_y = layout.grid_top - layout.grid_height().max(layout.legend_height) / 2.0
        - text_width(Face::Regular, caption, caption_size) / 2.0;
    let encoded = encode_win_ansi(caption);
    content
        .begin_text()
        .set_font(font_resource(Face::Regular), caption_size)
        .set_text_matrix([0.0, 1.0, -1.0, 0.0, styles.margin + caption_size, caption_y])
        .show(Str(&encoded))
        .end_text();

    draw_legend(&mut content, &layout, styles);

    content
}

fn draw_legend(content: &mut Content, layout: &HeatmapLayout, styles: &ReportStyles) {
    if layout.legend_height <= 0.0 || styles.legend_width <= 0.0 {
        return;
    }

    let bottom = layout.grid_top - layout.legend_height;
    let step = layout.legend_height / LEGEND_STEPS as f32;
    for i in 0..LEGEND_STEPS {
        let score = (i as f64 + 0.5) / LEGEND_STEPS as f64 * SCORE_MAX;
        fill_rect(
            content,
            score_color(score),
            layout.legend_left,
            bottom + i as f32 * step,
            styles.legend_width,
            step,
        );
    }

    content.set_fill_gray(0.0);
    let label_x = layout.legend_left + styles.legend_width + 4.0;
    let size = styles.label_size;
    draw_text(content, Face::Regular, size, label_x, bottom, "0");
    draw_text(content, Face::Regular, size, label_x, bottom + layout.legend_height / 2.0 - size * 0.35, "2.5");
    draw_text(content, Face::Regular, size, label_x, layout.grid_top - size * 0.7, "5");
}

fn mean_page(dataset: &FeedbackDataset, styles: &ReportStyles) -> Content {
    let mut content = Content::new();
    let center_x = styles.page_width / 2.0;
    let center_y = styles.page_height / 2.0;

    let numeral = match dataset.mean_score() {
        Some(mean) => format!("{mean:.2}"),
        None => MEAN_PLACEHOLDER.to_string(),
    };

    content.set_fill_gray(0.0);
    draw_centered(&mut content, Face::Bold, styles.mean_size, center_x, center_y, &numeral);
    draw_centered(
        &mut content,
        Face::Regular,
        styles.caption_size,
        center_x,
        center_y - styles.caption_size * 2.0,
        MEAN_CAPTION,
    );

    content
}

/// Lay out one free-text category, starting a continuation page whenever
/// the next line would cross the bottom margin.
fn text_pages(title: &str, items: &[String], styles: &ReportStyles) -> Vec<Content> {
    let line_height = styles.line_height(styles.body_size);
    let bullet_x = styles.margin + styles.bullet_indent;
    let text_x = bullet_x + styles.body_size;
    let wrap_width = styles.page_width - styles.margin - text_x;
    let bottom = styles.margin;

    let mut pages = Vec::new();
    let (mut content, mut y) = text_page_start(title, false, styles);

    for item in items {
        let lines = wrap_text(item, styles.body_size, wrap_width);
        for (i, line) in lines.iter().enumerate() {
            if y < bottom {
                pages.push(content);
                (content, y) = text_page_start(title, true, styles);
            }
            if i == 0 {
                draw_text(&mut content, Face::Regular, styles.body_size, bullet_x, y, &BULLET.to_string());
            }
            draw_text(&mut content, Face::Regular, styles.body_size, text_x, y, line);
            y -= line_height;
        }
        y -= styles.paragraph_gap;
    }

    pages.push(content);
    pages
}

fn text_page_start(title: &str, continued: bool, styles: &ReportStyles) -> (Content, f32) {
    let mut content = Content::new();
    let title_y = styles.page_height - styles.margin - styles.title_size;
    let heading = if continued {
        format!("{title} (continued)")
    } else {
        title.to_string()
    };

    content.set_fill_gray(0.0);
    draw_text(&mut content, Face::Bold, styles.title_size, styles.margin, title_y, &heading);

    let first_line = title_y - styles.title_size - styles.line_height(styles.body_size);
    (content, first_line)
}
