use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use pedigree_core::{Family, Graph, Person, Record, Sex, ViewConfig, build};
use pedigree_layout::{LayoutOptions, layout};
use std::hint::black_box;
use std::time::Duration;

/// A full ancestor tree of `ancestors` generations above `P0`, and `descent` generations of
/// couples with `fanout` children each below it.
fn synthetic_record(ancestors: u32, descent: u32, fanout: usize) -> Record {
    let mut persons = Vec::new();
    let mut families = Vec::new();

    // Ahnentafel-numbered ancestors: person `A{n}` has parents `A{2n}` and `A{2n+1}`.
    let last = 1u64 << (ancestors + 1);
    for n in 1..last {
        let sex = if n % 2 == 0 { Sex::Male } else { Sex::Female };
        persons.push(Person::new(format!("A{n}")).with_sex(sex));
        if 2 * n + 1 < last {
            families.push(
                Family::new(format!("AF{n}"))
                    .with_husband(format!("A{}", 2 * n))
                    .with_wife(format!("A{}", 2 * n + 1))
                    .with_children([format!("A{n}")]),
            );
        }
    }

    let mut frontier = vec!["A1".to_string()];
    let mut next_id = 0usize;
    for _ in 0..descent {
        let mut next = Vec::new();
        for parent in frontier {
            let spouse = format!("S{next_id}");
            next_id += 1;
            persons.push(Person::new(spouse.clone()).with_sex(Sex::Female));
            let children: Vec<String> = (0..fanout)
                .map(|_| {
                    let id = format!("D{next_id}");
                    next_id += 1;
                    id
                })
                .collect();
            for child in &children {
                persons.push(Person::new(child.clone()).with_sex(Sex::Male));
            }
            families.push(
                Family::new(format!("DF{next_id}"))
                    .with_husband(parent)
                    .with_wife(spouse)
                    .with_children(children.clone()),
            );
            next.extend(children);
        }
        frontier = next;
    }

    Record::new(persons, families).unwrap()
}

fn measured_view(record: &Record, config: &ViewConfig) -> Graph {
    let mut g = build(record, "A1", config).unwrap();
    for (i, c) in g.cards_mut().enumerate() {
        c.width = 60.0 + (i % 5) as f64 * 12.0;
        c.height = 34.0;
    }
    for a in g.ancestors_mut() {
        a.width = 28.0;
        a.height = 22.0;
    }
    g
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("anc4_desc2_f3", 4u32, 2u32, 3usize),
        ("anc8_desc3_f4", 8, 3, 4),
        ("anc10_desc4_f4", 10, 4, 4),
    ];

    for (name, ancestors, descent, fanout) in cases {
        let record = synthetic_record(ancestors, descent, fanout);
        let config = ViewConfig::new(i64::from(descent), i64::from(ancestors)).unwrap();
        let options = LayoutOptions::default();
        group.bench_with_input(BenchmarkId::new("layout", name), &record, |b, record| {
            b.iter_batched(
                || measured_view(record, &config),
                |mut g| {
                    layout(black_box(&mut g), &options).unwrap();
                    black_box(g.lines().len());
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
