use super::*;

fn line_texts(message: &FormattedMessage) -> Vec<String> {
    message.lines().iter().map(FormattedLine::plain_text).collect()
}

fn links(message: &FormattedMessage) -> Vec<String> {
    message
        .lines()
        .iter()
        .flat_map(FormattedLine::inlines)
        .filter_map(|inline| match inline {
            Inline::Link(url) => Some(url.clone()),
            Inline::Text(_) => None,
        })
        .collect()
}

// =============================================================
// Line breaks
// =============================================================

#[test]
fn single_line_is_one_text_run() {
    let message = format_message("Plot 42 is available");
    assert_eq!(message.lines().len(), 1);
    assert_eq!(message.lines()[0].inlines(), &[Inline::Text("Plot 42 is available".to_owned())]);
}

#[test]
fn newlines_become_line_boundaries() {
    let message = format_message("first\nsecond\n\nfourth");
    assert_eq!(line_texts(&message), vec!["first", "second", "", "fourth"]);
}

#[test]
fn carriage_returns_are_dropped_at_line_end() {
    let message = format_message("one\r\ntwo");
    assert_eq!(line_texts(&message), vec!["one", "two"]);
}

#[test]
fn html_output_joins_lines_with_br() {
    assert_eq!(format_message("a\nb").to_html(), "a<br>b");
}

// =============================================================
// Bullets and numbering
// =============================================================

#[test]
fn bullet_markers_normalize_to_canonical_prefix() {
    let message = format_message("• one\n* two\n- three\n   -    four");
    assert_eq!(line_texts(&message), vec!["• one", "• two", "• three", "• four"]);
}

#[test]
fn bullet_only_line_keeps_prefix() {
    assert_eq!(line_texts(&format_message("  -")), vec!["• "]);
}

#[test]
fn numbered_marker_is_flush_left_and_unchanged() {
    let message = format_message("Steps:\n   1. Apply online\n\t12. Pay fee");
    assert_eq!(line_texts(&message), vec!["Steps:", "1. Apply online", "12. Pay fee"]);
}

#[test]
fn digits_without_period_keep_leading_whitespace() {
    assert_eq!(line_texts(&format_message("  12 plots left")), vec!["  12 plots left"]);
}

#[test]
fn markers_only_apply_at_line_start() {
    assert_eq!(line_texts(&format_message("north - south * east")), vec!["north - south * east"]);
}

// =============================================================
// Links
// =============================================================

#[test]
fn bare_url_becomes_link_labelled_with_url() {
    let message = format_message("Visit http://x.test now");
    assert_eq!(
        message.lines()[0].inlines(),
        &[
            Inline::Text("Visit ".to_owned()),
            Inline::Link("http://x.test".to_owned()),
            Inline::Text(" now".to_owned()),
        ]
    );
}

#[test]
fn link_html_opens_isolated_context_without_referrer() {
    let html = format_message("Visit http://x.test now").to_html();
    assert_eq!(
        html,
        r#"Visit <a href="http://x.test" target="_blank" rel="noopener noreferrer">http://x.test</a> now"#
    );
}

#[test]
fn https_urls_and_multiple_links_per_line() {
    let message = format_message("see https://a.test/x?y=1 and http://b.test");
    assert_eq!(links(&message), vec!["https://a.test/x?y=1", "http://b.test"]);
}

#[test]
fn url_token_runs_to_next_whitespace() {
    let message = format_message("(https://a.test/path), then more");
    assert_eq!(links(&message), vec!["https://a.test/path),"]);
}

#[test]
fn bare_scheme_is_not_a_link() {
    let message = format_message("type http:// then the host");
    assert!(links(&message).is_empty());
    assert_eq!(line_texts(&message), vec!["type http:// then the host"]);
}

#[test]
fn url_on_bullet_line_is_still_linked() {
    let message = format_message("- https://midc.test/plots");
    assert_eq!(
        message.lines()[0].inlines(),
        &[Inline::Text("• ".to_owned()), Inline::Link("https://midc.test/plots".to_owned())]
    );
}

// =============================================================
// Escaping
// =============================================================

#[test]
fn markup_in_text_stays_text() {
    let message = format_message("<script>alert(1)</script>");
    assert_eq!(message.lines()[0].inlines(), &[Inline::Text("<script>alert(1)</script>".to_owned())]);
    assert_eq!(message.to_html(), "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn link_attributes_cannot_be_broken_out_of() {
    let html = format_message(r#"http://x.test/"onmouseover="x"#).to_html();
    assert!(html.starts_with(r#"<a href="http://x.test/&quot;onmouseover=&quot;x""#));
}

#[test]
fn escaping_is_applied_once() {
    let html = format_message("fish &amp; chips & 'peas'").to_html();
    assert_eq!(html, "fish &amp;amp; chips &amp; &#39;peas&#39;");
}

#[test]
fn escape_html_borrows_clean_text() {
    assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
}

// =============================================================
// Idempotency and passthrough
// =============================================================

#[test]
fn reformatting_converted_plain_text_is_stable() {
    let first = format_message("Plots:\n  3. Ranjangaon\n\nContact the office.");
    let second = format_message(&first.plain_text());
    assert_eq!(first, second);
}

#[test]
fn reformatting_normalized_bullets_is_stable() {
    let first = format_message("* a\n-   b");
    assert_eq!(format_message(&first.plain_text()), first);
}

#[test]
fn formatted_content_passes_through_unchanged() {
    let panel = FormattedMessage {
        lines: vec![FormattedLine { inlines: vec![Inline::Text("<b>kept</b>".to_owned())] }],
    };
    assert_eq!(format_content(panel.clone()), panel);
}

#[test]
fn plain_content_is_formatted() {
    assert_eq!(format_content("- x"), format_message("- x"));
    assert_eq!(format_content(String::from("a\nb")).lines().len(), 2);
}
