use ironstat::record::{EntityKey, Measure};
use ironstat::reduce::GlobalAggregate;
use ironstat::report::Summary;

fn summary_of(entries: &[(&str, Measure)]) -> Summary {
    let mut stats = GlobalAggregate::default();
    for (name, measure) in entries {
        stats.insert(EntityKey::from(name.as_bytes()), *measure);
    }
    Summary::new(stats)
}

fn measure(min: i16, max: i16, count: i32, sum: i64) -> Measure {
    Measure { min, max, count, sum }
}

#[test]
fn renders_exact_layout() {
    let summary = summary_of(&[
        ("Paris", measure(182, 235, 2, 417)),
        ("Accra", measure(-101, -34, 2, -135)),
    ]);

    assert_eq!(
        summary.render(),
        "{\n\t\"Accra\":[-10.1,-3.4,-6.8],\n\t\"Paris\":[18.2,23.5,20.9]\n}\n4\n"
    );
}

#[test]
fn one_decimal_place_everywhere() {
    let summary = summary_of(&[("X", measure(0, 0, 1, 0))]);
    assert!(summary.render().contains("\"X\":[0.0,0.0,0.0]"));
}

#[test]
fn keys_sort_by_raw_bytes_not_case() {
    // 'B' (0x42) sorts before 'a' (0x61) in byte order.
    let summary = summary_of(&[
        ("apple", measure(10, 10, 1, 10)),
        ("Banana", measure(10, 10, 1, 10)),
    ]);

    let report = summary.render();
    assert!(report.find("Banana").unwrap() < report.find("apple").unwrap());
}

#[test]
fn total_count_sums_all_entities() {
    let summary = summary_of(&[
        ("a", measure(1, 9, 3, 12)),
        ("b", measure(2, 4, 5, 15)),
    ]);
    assert_eq!(summary.total_count(), 8);
}

#[test]
fn key_display_trims_zero_padding() {
    let key = EntityKey::from(&b"Oslo"[..]);
    assert_eq!(key.to_string(), "Oslo");
    assert_eq!(key.name(), b"Oslo");
    assert_eq!(key.as_bytes().len(), 64);
}
