use super::*;

#[test]
fn test_span_len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
}

#[test]
fn test_span_contains_is_half_open() {
    let span = Span::new(2, 4);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(3));
    assert!(!span.contains(4));
}

#[test]
fn test_span_contains_span() {
    let outer = Span::new(0, 10);
    assert!(outer.contains_span(Span::new(0, 10)));
    assert!(outer.contains_span(Span::new(2, 5)));
    assert!(!outer.contains_span(Span::new(5, 11)));
}

#[test]
fn test_span_slice() {
    let source = "let x = (a);";
    assert_eq!(Span::new(8, 11).slice(source), "(a)");
    assert_eq!(Span::new(8, 100).slice(source), "");
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(1, 9).to_string(), "1..9");
}
