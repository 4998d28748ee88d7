//! End-to-end tests for the HTML → table pipeline.
//!
//! These feed realistic pasted HTML (the kind copied out of an issue tracker
//! or a rich-text editor) through every stage and check the rendered table.

use std::io::Write;

use proptest::prelude::*;
use shotgrid::{
    Error, ImageRecord, RawTag, Role, TableConfig, classify, convert, convert_reader,
    extract_tags, group_records, render,
};

const MIXED_LABELS: &str = r#"
<meta charset="utf-8">
<p>Screens for review:</p>
<img alt="1. Feature_1_before" src="https://img.example/one.png">
<img alt="2.Feature 25_before" src="https://img.example/two.png" />
<img alt="3 Feature 32" src="https://img.example/three.png">
<img alt="4feature54_after" src="https://img.example/four.png">
"#;

/// Index of `needle` in `haystack`, panicking with context when absent.
fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in:\n{haystack}"))
}

// ============================================================================
// Stage-by-stage
// ============================================================================

#[test]
fn test_extracts_tags_in_document_order() {
    let alts: Vec<String> = extract_tags(MIXED_LABELS).map(|t| t.alt).collect();
    assert_eq!(
        alts,
        [
            "1. Feature_1_before",
            "2.Feature 25_before",
            "3 Feature 32",
            "4feature54_after"
        ]
    );
}

#[test]
fn test_classifies_in_order() {
    let records = classify(extract_tags(MIXED_LABELS));
    let summary: Vec<(u32, Role, &str)> = records
        .iter()
        .map(|r| (r.order, r.role, r.display_name.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (1, Role::Before, "Feature 1"),
            (2, Role::Before, "Feature 25"),
            (3, Role::Standalone, "Feature 32"),
            (4, Role::After, "Feature 54"),
        ]
    );
}

#[test]
fn test_end_to_end_mixed_labels() {
    let html = convert(MIXED_LABELS, &TableConfig::default()).expect("images present");

    // Feature 32 is the only standalone image, so its partner cells are empty
    assert!(html.contains(
        "<tr>\n<th>Feature 32</th>\n<th></th>\n</tr>\n\
         <tr>\n<td><img src=\"https://img.example/three.png\" width=\"400\"></td>\n<td></td>\n</tr>\n"
    ));

    // Each paired category has exactly one side populated
    assert!(html.contains(
        "<th colspan=\"2\">Feature 1</th>\n</tr>\n<tr>\n<th>Before</th>\n<th>After</th>\n</tr>\n\
         <tr>\n<td><img src=\"https://img.example/one.png\" width=\"400\"></td>\n<td></td>\n</tr>\n"
    ));
    assert!(html.contains(
        "<th colspan=\"2\">Feature 25</th>\n</tr>\n<tr>\n<th>Before</th>\n<th>After</th>\n</tr>\n\
         <tr>\n<td><img src=\"https://img.example/two.png\" width=\"400\"></td>\n<td></td>\n</tr>\n"
    ));
    assert!(html.contains(
        "<th colspan=\"2\">Feature 54</th>\n</tr>\n<tr>\n<th>Before</th>\n<th>After</th>\n</tr>\n\
         <tr>\n<td></td>\n<td><img src=\"https://img.example/four.png\" width=\"400\"></td>\n</tr>\n"
    ));

    // Standalone first, then paired groups by order
    let standalone = position(&html, "Feature 32");
    let one = position(&html, ">Feature 1<");
    let twenty_five = position(&html, "Feature 25");
    let fifty_four = position(&html, "Feature 54");
    assert!(standalone < one && one < twenty_five && twenty_five < fifty_four);
}

#[test]
fn test_complete_pairs_render_once() {
    let html = r#"
        <img alt="2. checkout_after" src="checkout-new.png">
        <img alt="1. checkout_before" src="checkout-old.png">
        <img alt="3. Feature 7_before" src="f7-old.png">
        <img alt="4. feature_7_after" src="f7-new.png">
    "#;
    let table = convert(html, &TableConfig::default()).unwrap();

    assert_eq!(table.matches("colspan").count(), 2);
    assert!(table.contains(
        "<th colspan=\"2\">Checkout</th>\n</tr>\n<tr>\n<th>Before</th>\n<th>After</th>\n</tr>\n\
         <tr>\n<td><img src=\"checkout-old.png\" width=\"400\"></td>\n\
         <td><img src=\"checkout-new.png\" width=\"400\"></td>\n</tr>\n"
    ));
    assert!(table.contains(
        "<tr>\n<td><img src=\"f7-old.png\" width=\"400\"></td>\n\
         <td><img src=\"f7-new.png\" width=\"400\"></td>\n</tr>\n"
    ));
}

#[test]
fn test_malformed_tags_never_reach_output() {
    let html = r#"
        <img src="no-alt.png">
        <img alt="no src">
        <img alt="" src="empty-alt.png">
        <img alt="kept" src="kept.png">
        <img alt="unterminated" src="cut.png"
    "#;
    let table = convert(html, &TableConfig::default()).unwrap();
    assert!(table.contains("kept.png"));
    for absent in ["no-alt.png", "no src", "empty-alt.png", "cut.png"] {
        assert!(!table.contains(absent), "{absent} leaked into output");
    }
}

#[test]
fn test_no_images_reported() {
    for html in ["", "<p>text only</p>", r#"<img src="a.png">"#] {
        assert!(
            matches!(convert(html, &TableConfig::default()), Err(Error::NoImages)),
            "expected NoImages for {html:?}"
        );
    }
}

#[test]
fn test_render_empty_is_not_an_error() {
    let table = render(&[], &TableConfig::default());
    assert!(table.contains("<table>\n</table>"));
}

// ============================================================================
// Reader / file input
// ============================================================================

#[test]
fn test_convert_reader_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MIXED_LABELS.as_bytes()).unwrap();

    let reopened = std::fs::File::open(file.path()).unwrap();
    let table = convert_reader(reopened, &TableConfig::default().with_image_width(320)).unwrap();
    assert_eq!(table.matches("width=\"320\"").count(), 4);
}

#[test]
fn test_convert_reader_windows_1252() {
    let bytes: &[u8] = b"<img alt=\"r\xE9sum\xE9_before\" src=\"r.png\">";
    let table = convert_reader(bytes, &TableConfig::default()).unwrap();
    assert!(table.contains("<th colspan=\"2\">Résumé</th>"));
}

#[test]
fn test_convert_reader_empty_input() {
    let empty: &[u8] = b"";
    assert!(matches!(
        convert_reader(empty, &TableConfig::default()),
        Err(Error::NoImages)
    ));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_each_category_rendered_once(count in 1usize..6) {
        let mut tags = Vec::new();
        for i in 0..count {
            tags.push(RawTag::new(format!("{}. screen{i}_before", 2 * i + 1), format!("b{i}.png")));
            tags.push(RawTag::new(format!("{}. screen{i}_after", 2 * i + 2), format!("a{i}.png")));
        }
        let table = render(&classify(tags), &TableConfig::default());

        prop_assert_eq!(table.matches("colspan").count(), count);
        for i in 0..count {
            let before = format!("src=\"b{i}.png\"");
            let after = format!("src=\"a{i}.png\"");
            prop_assert_eq!(table.matches(before.as_str()).count(), 1);
            prop_assert_eq!(table.matches(after.as_str()).count(), 1);
        }
    }

    #[test]
    fn prop_paired_groups_follow_min_order(orders in prop::collection::vec(0u32..50, 1..8)) {
        let records: Vec<ImageRecord> = orders
            .iter()
            .enumerate()
            .map(|(i, &order)| ImageRecord::new(format!("cat{}", i % 3), format!("{i}.png"), Role::After, order))
            .collect();
        let mut sorted = records.clone();
        sorted.sort_by_key(|r| r.order);

        let layout = group_records(&sorted);
        for pair in layout.paired.windows(2) {
            prop_assert!(pair[0].order <= pair[1].order);
        }
        for group in &layout.paired {
            let min = records
                .iter()
                .filter(|r| r.display_name == group.category)
                .map(|r| r.order)
                .min()
                .unwrap();
            prop_assert_eq!(group.order, min);
        }
    }
}
