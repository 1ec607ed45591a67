//! Footer content tests.

use ept_core::citations::{copyright_line, Footer, CITATIONS};

#[test]
fn copyright_line_carries_year() {
    assert_eq!(
        copyright_line(2024),
        "\u{a9} 2024 EPT Productivity Calculator. MIT License."
    );
}

#[test]
fn footer_lists_all_citations() {
    let footer = Footer::for_year(2030);

    assert!(footer.copyright.contains("2030"));
    assert!(footer.disclaimer.contains("Doherty's Threshold"));
    assert_eq!(footer.citations.len(), 7);
    assert_eq!(CITATIONS.iter().filter(|c| c.url.is_some()).count(), 2);
}
