use ironstat::record::{EntityKey, KEY_CAPACITY, Measure};
use ironstat::scan::Scanner;

fn scan(segment: &[u8]) -> ironstat::scan::PartialAggregate {
    let mut scanner = Scanner::new();
    scanner.consume(segment);
    scanner.into_partial()
}

#[test]
fn aggregates_repeated_entity() {
    let stats = scan(b"Paris;23.5\nParis;18.2\n");
    assert_eq!(stats.len(), 1);

    let m = &stats[&EntityKey::from(&b"Paris"[..])];
    assert_eq!(m.min, 182);
    assert_eq!(m.max, 235);
    assert_eq!(m.count, 2);
    assert_eq!(m.sum, 417);
}

#[test]
fn negative_values_apply_sign_at_record_end() {
    let stats = scan(b"City;-5.3\nCity;-1.1\n");
    let m = &stats[&EntityKey::from(&b"City"[..])];
    assert_eq!(m.min, -53);
    assert_eq!(m.max, -11);
    assert_eq!(m.sum, -64);
    assert_eq!(m.count, 2);
}

#[test]
fn decimal_point_concatenates_into_tenths() {
    let stats = scan(b"A;0.1\nB;10.0\n");
    assert_eq!(stats[&EntityKey::from(&b"A"[..])].sum, 1);
    assert_eq!(stats[&EntityKey::from(&b"B"[..])].sum, 100);
}

#[test]
fn aggregate_accumulates_across_consume_calls() {
    let mut scanner = Scanner::new();
    scanner.consume(b"A;1.0\n");
    scanner.consume(b"A;2.0\n");
    let stats = scanner.into_partial();
    assert_eq!(stats[&EntityKey::from(&b"A"[..])].count, 2);
}

#[test]
fn identifier_over_capacity_truncates_into_one_bucket() {
    // Two occurrences of the same over-long name: truncated identically,
    // aggregated together. The bytes past the cap bleed into the value
    // accumulator deterministically; the bucketing is what is guaranteed.
    let long_name = "x".repeat(KEY_CAPACITY + 6);
    let input = format!("{long_name};1.0\n{long_name};2.0\n");
    let stats = scan(input.as_bytes());

    assert_eq!(stats.len(), 1);
    let key = EntityKey::from(&long_name.as_bytes()[..KEY_CAPACITY]);
    let m = &stats[&key];
    assert_eq!(m.count, 2);
}

#[test]
fn over_capacity_misparse_is_deterministic() {
    let long_name = "y".repeat(KEY_CAPACITY + 3);
    let input = format!("{long_name};1.5\n");
    let first = scan(input.as_bytes());
    let second = scan(input.as_bytes());

    let key = EntityKey::from(&long_name.as_bytes()[..KEY_CAPACITY]);
    assert_eq!(first[&key], second[&key]);
}

#[test]
fn unterminated_trailing_record_is_dropped() {
    let stats = scan(b"A;1.0\nB;2");
    assert_eq!(stats.len(), 1);
    assert!(stats.contains_key(&EntityKey::from(&b"A"[..])));
}

#[test]
fn empty_segment_produces_nothing() {
    assert!(scan(b"").is_empty());
}

#[test]
fn merge_extends_both_min_and_max() {
    let mut a = Measure::new(10);
    a.record(50);
    let mut b = Measure::new(0);
    b.record(90);

    // A partial that widens both ends at once must not short-circuit.
    a.merge(&b);
    assert_eq!(a.min, 0);
    assert_eq!(a.max, 90);
    assert_eq!(a.count, 4);
    assert_eq!(a.sum, 150);
}
