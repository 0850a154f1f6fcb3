use seminar_core::models::dataset::ScoreRow;
use seminar_core::{ColumnMapping, FeedbackDataset, RawRow, extract};
use seminar_export::error::ExportError;
use seminar_export::pdf::render_report;
use seminar_export::styles::ReportStyles;

fn page_count(pdf: &[u8]) -> usize {
    let doc = lopdf::Document::load_mem(pdf).expect("generated PDF should parse");
    doc.get_pages().len()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn example_row(scores: [&str; 6], texts: [&str; 3]) -> RawRow {
    let headers = [
        "Q1 [Importance]",
        "Q2 [Methods]",
        "Q3 [Results]",
        "Q4 [Discussion]",
        "Q5 [Research Quality]",
        "Q6 [Presentation Quality]",
        "Key Takeaways",
        "Speaker Strengths",
        "Suggestions for Improvement",
    ];
    let values = scores.into_iter().chain(texts);
    RawRow::from_pairs(headers.into_iter().zip(values))
}

fn dataset(scores: Vec<ScoreRow>, text: [Vec<String>; 3]) -> FeedbackDataset {
    FeedbackDataset::new(Vec::new(), scores, text)
}

#[test]
fn report_has_five_pages_for_a_small_upload() {
    let rows = vec![example_row(
        ["4: Good", "5: Great", "", "3:ok", "bad", "5:Excellent"],
        ["Clear framing", "Great slides", "Slow down"],
    )];
    let data = extract(&rows, &ColumnMapping::default()).unwrap();

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert!(pdf.starts_with(b"%PDF-"));
    assert_eq!(page_count(&pdf), 5);
    assert!(contains(&pdf, b"(4.25)"));
    assert!(contains(&pdf, b"(Seminar Feedback Heatmap)"));
    assert!(contains(&pdf, b"(Suggestions for Improvement)"));
}

#[test]
fn empty_text_categories_still_get_titled_pages() {
    let data = dataset(vec![[3.0; 6]], Default::default());

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert_eq!(page_count(&pdf), 5);
    assert!(contains(&pdf, b"(Key Takeaways)"));
    assert!(contains(&pdf, b"(Speaker Strengths)"));
}

#[test]
fn undefined_mean_renders_placeholder() {
    let data = dataset(vec![[0.0; 6], [0.0; 6]], Default::default());
    assert_eq!(data.mean_score(), None);

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert_eq!(page_count(&pdf), 5);
    assert!(contains(&pdf, b"(N/A)"));
}

#[test]
fn zero_responses_render_a_degenerate_grid() {
    let data = dataset(Vec::new(), Default::default());

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert_eq!(page_count(&pdf), 5);
}

#[test]
fn many_responses_still_fit_one_heatmap_page() {
    let scores: Vec<ScoreRow> = (0..250).map(|i| [(i % 6) as f64; 6]).collect();
    let data = dataset(scores, Default::default());

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert_eq!(page_count(&pdf), 5);
    assert!(contains(&pdf, b"0.5 w"));
}

#[test]
fn thousands_of_responses_drop_cell_borders() {
    let scores: Vec<ScoreRow> = (0..5000).map(|i| [(i % 6) as f64; 6]).collect();
    let data = dataset(scores, Default::default());

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert_eq!(page_count(&pdf), 5);
    assert!(!contains(&pdf, b"0.5 w"));
}

#[test]
fn long_text_lists_continue_on_extra_pages() {
    let takeaway = "The speaker connected the experimental design to the broader \
                    literature and explained each statistical choice in plain terms."
        .to_string();
    let data = dataset(
        vec![[4.0; 6]],
        [vec![takeaway; 60], vec!["Concise".to_string()], Vec::new()],
    );

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    assert!(page_count(&pdf) > 5);
    assert!(contains(&pdf, b"(Key Takeaways \\(continued\\))"));
}

#[test]
fn cell_scores_are_printed_with_one_decimal() {
    let data = dataset(vec![[4.0, 2.5, 0.0, 1.0, 5.0, 3.0]], Default::default());

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();

    for label in [&b"(4.0)"[..], &b"(2.5)"[..], &b"(0.0)"[..], &b"(5.0)"[..]] {
        assert!(contains(&pdf, label));
    }
}

#[test]
fn non_latin_text_does_not_break_rendering() {
    let data = dataset(
        vec![[5.0; 6]],
        [
            vec!["Très bien \u{2013} “great”".to_string()],
            vec!["素晴らしい".to_string()],
            vec!["\u{1F600}".to_string()],
        ],
    );

    let pdf = render_report(&data, &ReportStyles::default()).unwrap();
    assert_eq!(page_count(&pdf), 5);
}

#[test]
fn invalid_styles_are_rejected() {
    let styles = ReportStyles {
        cell_width: 0.0,
        ..ReportStyles::default()
    };
    let data = dataset(vec![[1.0; 6]], Default::default());

    let err = render_report(&data, &styles).unwrap_err();
    assert!(matches!(err, ExportError::InvalidStyles(_)));
    assert!(err.to_string().contains("cell_width"));
}

#[test]
fn summarize_csv_runs_the_whole_pipeline() {
    let csv = "Timestamp,Q1 [Importance],Q2 [Methods],Q3 [Results],Q4 [Discussion],\
               Q5 [Research Quality],Q6 [Presentation Quality],Key Takeaways,\
               Speaker Strengths,Suggestions for Improvement\n\
               2024-05-01,4: Good,5: Great,,3:ok,bad,5:Excellent,Clear,Slides,Pace\n";

    let pdf = seminar_export::summary::summarize_csv(
        csv.as_bytes(),
        &ColumnMapping::default(),
        &ReportStyles::default(),
    )
    .unwrap();

    assert_eq!(page_count(&pdf), 5);
    assert!(contains(&pdf, b"(4.25)"));
}

#[test]
fn summarize_csv_reports_missing_columns() {
    let err = seminar_export::summary::summarize_csv(
        b"a,b\n1,2\n",
        &ColumnMapping::default(),
        &ReportStyles::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        seminar_export::error::PipelineError::Extract(_)
    ));
}
