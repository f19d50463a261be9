use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knightnet::{
    board::BoardSize,
    network::{AdjacencyIndex, MoveGraph},
    search::relaxation::{Relaxation, DEFAULT_MAX_ITERATIONS},
};
use rand::{rngs::SmallRng, SeedableRng};

fn network(c: &mut Criterion) {
    let size = BoardSize::new(8, 8).unwrap();
    c.bench_function("move graph 8x8", |b| b.iter(|| MoveGraph::build(black_box(size))));

    let graph = MoveGraph::build(size);
    c.bench_function("adjacency 8x8", |b| {
        b.iter(|| AdjacencyIndex::build(black_box(&graph)))
    });
}

fn trial(c: &mut Criterion) {
    let graph = MoveGraph::build(BoardSize::new(8, 8).unwrap());
    let adjacency = AdjacencyIndex::build(&graph);
    let mut rng = SmallRng::seed_from_u64(0);

    c.bench_function("relaxation 8x8", |b| {
        b.iter(|| {
            let mut relaxation = Relaxation::random(graph.len(), &mut rng);
            relaxation.relax(&graph, &adjacency, DEFAULT_MAX_ITERATIONS)
        })
    });
}

criterion_group!(benches, network, trial);
criterion_main!(benches);
