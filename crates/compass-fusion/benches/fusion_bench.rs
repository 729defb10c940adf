use std::collections::BTreeSet;

use criterion::{criterion_group, criterion_main, Criterion};

use compass_core::models::{GraphFact, VectorMatch};
use compass_fusion::ContextFuser;

fn build_inputs(matches: usize, facts: usize) -> (Vec<VectorMatch>, Vec<GraphFact>) {
    let matches = (0..matches)
        .map(|i| {
            VectorMatch::new(format!("m{i}"), 1.0 / (i + 1) as f64)
                .with_meta("name", format!("Place {i}"))
                .with_meta("type", "Attraction")
                .with_meta("city", "Hanoi")
        })
        .collect();
    let facts = (0..facts)
        .map(|i| GraphFact {
            source_id: format!("m{}", i % 10),
            relation: "NEAR".into(),
            target_id: format!("t{i}"),
            target_name: format!("Target {i}"),
            target_description: "x".repeat(400),
            target_labels: BTreeSet::from(["Entity".to_string()]),
            hop: 1,
        })
        .collect();
    (matches, facts)
}

fn bench_fuse_typical(c: &mut Criterion) {
    let fuser = ContextFuser::default();
    let (matches, facts) = build_inputs(5, 50);

    c.bench_function("fuse_5_matches_50_facts", |b| {
        b.iter(|| fuser.render_prompt(&fuser.fuse("best pagoda in Hanoi", &matches, &facts)));
    });
}

fn bench_fuse_oversized(c: &mut Criterion) {
    let fuser = ContextFuser::default();
    let (matches, facts) = build_inputs(500, 5000);

    c.bench_function("fuse_500_matches_5000_facts", |b| {
        b.iter(|| fuser.fuse("street food in Saigon", &matches, &facts));
    });
}

criterion_group!(benches, bench_fuse_typical, bench_fuse_oversized);
criterion_main!(benches);
