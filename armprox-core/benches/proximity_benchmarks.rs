use criterion::{black_box, criterion_group, criterion_main, Criterion};
use armprox_core::{Arm, GeometricPoint, Locus, OrderedRecordSequence, ProximityCounter, Record};

fn generate_records(count: usize, chromosomes: u32) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let chromosome = (i as u32 * 7) % chromosomes + 1;
            let arm = if i % 3 == 0 { Arm::Q } else { Arm::P };
            let x = ((i * 37) % 101) as f64;
            let y = ((i * 53) % 97) as f64;
            Record::new(format!("seq{}", i), Locus::new(chromosome, arm), GeometricPoint::new(x, y))
        })
        .collect()
}

fn bench_insert_sorted(c: &mut Criterion) {
    let records = generate_records(2000, 22);

    c.bench_function("insert_sorted_2k", |b| {
        b.iter(|| {
            let sequence: OrderedRecordSequence = black_box(records.clone()).into_iter().collect();
            black_box(sequence)
        })
    });
}

fn bench_count(c: &mut Criterion) {
    let sequence: OrderedRecordSequence = generate_records(2000, 22).into_iter().collect();
    let counter = ProximityCounter::new(10.0).unwrap();

    c.bench_function("count_2k_22chr", |b| {
        b.iter(|| black_box(counter.count(black_box(&sequence))))
    });
}

fn bench_count_single_arm(c: &mut Criterion) {
    // Worst case: every record on one arm
    let sequence: OrderedRecordSequence = generate_records(1000, 1)
        .into_iter()
        .map(|mut r| {
            r.locus = Locus::new(1, Arm::P);
            r
        })
        .collect();
    let counter = ProximityCounter::new(10.0).unwrap();

    c.bench_function("count_1k_single_arm", |b| {
        b.iter(|| black_box(counter.count(black_box(&sequence))))
    });
}

criterion_group!(benches, bench_insert_sorted, bench_count, bench_count_single_arm);
criterion_main!(benches);
