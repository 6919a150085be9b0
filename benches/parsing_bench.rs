use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialplan::metadata::sample::sample_metadata;
use dialplan::{MetadataRegistry, PhoneNumberUtil};

type TestEntity = (&'static str, Option<&'static str>);

/// A varied set of inputs: plus-prefixed, IDD-prefixed, nationally dialed,
/// vanity letters, an extension, and a transform-rule case, so the numbers
/// exercise different parsing paths rather than one hot loop.
fn setup_parsing_data() -> Vec<TestEntity> {
    vec![
        ("(650) 253-0000", Some("US")),
        ("+44 20 8765 4321", None),
        ("020 8765 4321", Some("GB")),
        ("011 44 20 8765 4321", Some("US")),
        ("0343155551212", Some("AR")),
        ("02 3661 8300", Some("IT")),
        ("0800 4 PIZZA", Some("NZ")),
        ("020 8765 4321 ext. 456", Some("GB")),
        ("+800 1234 5678", None),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let phone_util = PhoneNumberUtil::new(MetadataRegistry::new(sample_metadata()));
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing");

    group.bench_function("parse()", |b| {
        b.iter(|| {
            for (number_str, region) in &numbers_to_parse {
                let _ = phone_util.parse(black_box(number_str), black_box(*region));
            }
        })
    });

    group.bench_function("parse_and_keep_raw_input()", |b| {
        b.iter(|| {
            for (number_str, region) in &numbers_to_parse {
                let _ =
                    phone_util.parse_and_keep_raw_input(black_box(number_str), black_box(*region));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
