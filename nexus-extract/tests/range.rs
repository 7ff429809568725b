use nexus_extract::{ExtractError, Span, extract};

fn drain(mut span: Span<i64>) -> (Vec<i64>, Span<i64>) {
    let mut items = Vec::new();
    while let Span::Inclusive { .. } = span {
        let (item, rest) = extract(span).unwrap();
        items.push(item);
        span = rest;
    }
    (items, span)
}

// =============================================================================
// Descending
// =============================================================================

#[test]
fn descending_two_hundred_to_one_hundred() {
    let (items, end) = drain(Span::new(200, 100));

    assert_eq!(items.len(), 101);
    assert_eq!(items, (100..=200).rev().collect::<Vec<_>>());
    assert_eq!(end, Span::Empty);
}

#[test]
fn descending_through_zero() {
    let (items, _) = drain(Span::new(2, -2));
    assert_eq!(items, [2, 1, 0, -1, -2]);
}

// =============================================================================
// Ascending
// =============================================================================

#[test]
fn ascending_one_to_ten() {
    let mut span = Span::new(1, 10);
    for expected in 1..=10 {
        let (item, rest) = extract(span).unwrap();
        assert_eq!(item, expected);
        span = rest;
    }
    assert_eq!(span, Span::Empty);
    assert_eq!(extract(span), Err(ExtractError::Empty));
}

// =============================================================================
// Single element
// =============================================================================

#[test]
fn single_element_collapses_in_one_call() {
    let (item, rest) = extract(Span::new(42, 42)).unwrap();
    assert_eq!(item, 42);
    assert_eq!(rest, Span::Empty);
    assert_eq!(extract(rest), Err(ExtractError::Empty));
}

#[test]
fn never_reports_empty_for_inclusive() {
    for (first, last) in [(0, 0), (-3, 3), (3, -3), (i64::MAX, i64::MAX - 1)] {
        assert!(extract(Span::new(first, last)).is_ok());
    }
}
