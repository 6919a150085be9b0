use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialplan::metadata::sample::sample_metadata;
use dialplan::{MetadataRegistry, PhoneNumber, PhoneNumberFormat, PhoneNumberUtil};

fn setup_numbers(phone_util: &PhoneNumberUtil) -> Vec<PhoneNumber> {
    [
        ("(650) 253-0000", Some("US")),
        ("+44 20 8765 4321", None),
        ("0343155551212", Some("AR")),
        ("02 3661 8300", Some("IT")),
        ("020 8765 4321 ext. 456", Some("GB")),
        ("+800 1234 5678", None),
    ]
    .iter()
    .map(|(number_str, region)| phone_util.parse(number_str, *region).unwrap())
    .collect()
}

fn formatting_benchmark(c: &mut Criterion) {
    let phone_util = PhoneNumberUtil::new(MetadataRegistry::new(sample_metadata()));
    let numbers = setup_numbers(&phone_util);

    let mut group = c.benchmark_group("Formatting");

    for format in [
        PhoneNumberFormat::E164,
        PhoneNumberFormat::International,
        PhoneNumberFormat::National,
        PhoneNumberFormat::Rfc3966,
    ] {
        group.bench_function(format!("format({:?})", format), |b| {
            b.iter(|| {
                for number in &numbers {
                    phone_util.format(black_box(number), black_box(format));
                }
            })
        });
    }

    group.bench_function("format_out_of_country_calling_number()", |b| {
        b.iter(|| {
            for number in &numbers {
                phone_util
                    .format_out_of_country_calling_number(black_box(number), black_box("DE"));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
