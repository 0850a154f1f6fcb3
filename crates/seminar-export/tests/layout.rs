use seminar_export::heatmap::{HeatmapLayout, score_color};
use seminar_export::styles::ReportStyles;
use seminar_export::text::{Face, encode_win_ansi, split_heading, text_width, wrap_text};

#[test]
fn color_scale_runs_from_red_to_blue() {
    let low = score_color(0.0);
    let high = score_color(5.0);
    let mid = score_color(2.5);

    assert_eq!((low.r, low.g, low.b), (1.0, 0.0, 0.0));
    assert_eq!((high.r, high.g, high.b), (0.0, 0.0, 1.0));
    assert!((mid.r - 0.5).abs() < 1e-6 && (mid.b - 0.5).abs() < 1e-6);
}

#[test]
fn color_scale_is_monotonic_and_never_green() {
    let mut previous = score_color(0.0);
    for step in 1..=50 {
        let color = score_color(step as f64 * 0.1);
        assert!(color.b >= previous.b);
        assert!(color.r <= previous.r);
        assert_eq!(color.g, 0.0);
        assert!((color.r + color.b - 1.0).abs() < 1e-6);
        previous = color;
    }
}

#[test]
fn color_scale_clamps_out_of_range_scores() {
    assert_eq!(score_color(-1.0), score_color(0.0));
    assert_eq!(score_color(9.0), score_color(5.0));
    assert_eq!(score_color(f64::NAN), score_color(0.0));
}

#[test]
fn grid_cells_are_uniform_and_inside_the_page() {
    let styles = ReportStyles::default();
    for rows in [0, 1, 12, 40, 500] {
        let layout = HeatmapLayout::new(rows, &styles);
        assert!(layout.cell_height > 0.0);
        assert!(layout.cell_height <= styles.cell_height);
        assert!(layout.grid_bottom() >= styles.margin);
        assert!(layout.grid_left + layout.grid_width() <= styles.page_width - styles.margin);
        assert!(layout.axis_caption_y() >= styles.margin);
    }
}

#[test]
fn neighbouring_cells_touch_without_overlapping() {
    let layout = HeatmapLayout::new(3, &ReportStyles::default());

    let (x0, y0) = layout.cell_origin(0, 0);
    let (x1, _) = layout.cell_origin(0, 1);
    let (_, y1) = layout.cell_origin(1, 0);

    assert!((x1 - (x0 + layout.cell_width)).abs() < 1e-3);
    assert!((y0 - (y1 + layout.cell_height)).abs() < 1e-3);
    assert!((y0 + layout.cell_height - layout.grid_top).abs() < 1e-3);
}

#[test]
fn small_grids_keep_the_configured_cell_height() {
    let styles = ReportStyles::default();
    let layout = HeatmapLayout::new(5, &styles);
    assert_eq!(layout.cell_height, styles.cell_height);
    assert!(layout.fits_text(styles.cell_text_size));
    assert!(layout.draws_cell_borders());
}

#[test]
fn very_short_cells_are_drawn_without_borders() {
    let styles = ReportStyles::default();
    for rows in [1300, 5000] {
        let layout = HeatmapLayout::new(rows, &styles);
        assert!(layout.cell_height < 2.0);
        assert!(!layout.draws_cell_borders());
    }
    assert!(HeatmapLayout::new(200, &styles).draws_cell_borders());
}

#[test]
fn headings_wrap_on_first_space_only() {
    assert_eq!(split_heading("Importance"), ("Importance", None));
    assert_eq!(split_heading("Research Quality"), ("Research", Some("Quality")));
    assert_eq!(split_heading("A B C"), ("A", Some("B C")));
}

#[test]
fn wrapped_lines_fit_the_requested_width() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                tempor incididunt ut labore et dolore magna aliqua.";
    let lines = wrap_text(text, 12.0, 150.0);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(text_width(Face::Regular, line, 12.0) <= 150.0, "line too wide: {line}");
    }
    assert_eq!(lines.join(" "), text);
}

#[test]
fn overlong_words_are_broken() {
    let word = "x".repeat(200);
    let lines = wrap_text(&word, 12.0, 60.0);

    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), word);
}

#[test]
fn newlines_start_new_lines_and_blank_text_yields_one_line() {
    assert_eq!(wrap_text("one\ntwo", 12.0, 500.0), ["one", "two"]);
    assert_eq!(wrap_text("", 12.0, 500.0), [""]);
}

#[test]
fn helvetica_widths_match_known_glyphs() {
    // 'i' is 222 units, 'W' 944.
    assert!((text_width(Face::Regular, "i", 10.0) - 2.22).abs() < 1e-4);
    assert!((text_width(Face::Regular, "W", 10.0) - 9.44).abs() < 1e-4);
}

#[test]
fn bold_text_is_measured_with_bold_widths() {
    // Bold 'i' is 278 units, 'A' 722, 'r' 389.
    assert!((text_width(Face::Bold, "i", 10.0) - 2.78).abs() < 1e-4);
    assert!((text_width(Face::Bold, "A", 10.0) - 7.22).abs() < 1e-4);
    assert!(
        text_width(Face::Bold, "Research Quality", 9.0)
            > text_width(Face::Regular, "Research Quality", 9.0)
    );
    assert_eq!(text_width(Face::Bold, "0123", 8.0), text_width(Face::Regular, "0123", 8.0));
}

#[test]
fn win_ansi_encoding_maps_latin_and_punctuation() {
    assert_eq!(encode_win_ansi("caf\u{e9}"), b"caf\xE9");
    assert_eq!(encode_win_ansi("\u{2022}\u{2013}\u{201C}"), b"\x95\x96\x93");
    assert_eq!(encode_win_ansi("\u{65E5}"), b"?");
}
