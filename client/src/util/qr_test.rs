use super::*;

#[test]
fn link_svg_renders_square_document() {
    let svg = link_svg("https://coffercard.com/campaign/abc123").unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("#ffffff"));
}

#[test]
fn link_svg_differs_per_link() {
    let a = link_svg("https://coffercard.com/campaign/a").unwrap();
    let b = link_svg("https://coffercard.com/campaign/b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn link_svg_rejects_oversized_payload() {
    let huge = "x".repeat(4000);
    assert!(matches!(link_svg(&huge), Err(QrError::DataTooLong)));
}
