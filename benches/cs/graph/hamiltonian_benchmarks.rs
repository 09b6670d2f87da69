use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamcycle::{solve_hamiltonian_cycle, AdjacencyMatrix};

fn petersen() -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
    }
    AdjacencyMatrix::from_edges(10, &edges).unwrap()
}

/// A ring with chords to the vertex three steps ahead.
fn chorded_ring(n: usize) -> AdjacencyMatrix {
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|v| [(v, (v + 1) % n), (v, (v + 3) % n)])
        .collect();
    AdjacencyMatrix::from_edges(n, &edges).unwrap()
}

fn bench_hamiltonian(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian");

    for &n in &[8, 16, 32, 64] {
        let complete = AdjacencyMatrix::complete(n).unwrap();
        group.bench_with_input(BenchmarkId::new("complete", n), &complete, |b, g| {
            b.iter(|| solve_hamiltonian_cycle(black_box(g)))
        });

        let ring = chorded_ring(n);
        group.bench_with_input(BenchmarkId::new("chorded_ring", n), &ring, |b, g| {
            b.iter(|| solve_hamiltonian_cycle(black_box(g)))
        });
    }

    // Exhausts the whole pruned tree.
    let g = petersen();
    group.bench_function("petersen", |b| {
        b.iter(|| solve_hamiltonian_cycle(black_box(&g)))
    });

    group.finish();
}

criterion_group!(benches, bench_hamiltonian);
criterion_main!(benches);
