//! Benchmarks for circuit construction and flattening
//!
//! Run with: cargo bench -p qlib-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qlib_ir::{Circuit, op};

/// Benchmark circuit creation with register bank allocation
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2usize, 5, 10, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark component construction through the builder
fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("builders");

    let circuit = Circuit::new("bench", 3);
    let (q0, q1, q2) = (circuit.qreg(0), circuit.qreg(1), circuit.qreg(2));

    group.bench_function("h_gate", |b| {
        b.iter(|| op::h(black_box(q0)).unwrap());
    });

    group.bench_function("r_gate", |b| {
        b.iter(|| op::r(black_box(0.25), black_box(q0)).unwrap());
    });

    group.bench_function("cnot_gate", |b| {
        b.iter(|| op::cnot(black_box(q0), black_box(q1)).unwrap());
    });

    group.bench_function("toffoli_gate", |b| {
        b.iter(|| op::toffoli(black_box(q0), black_box(q1), black_box(q2)).unwrap());
    });

    group.finish();
}

/// Benchmark flattening of wide and deep component trees
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for num_gates in &[10usize, 100, 1000] {
        // Wide: one container with num_gates leaves.
        let circuit = {
            let mut circuit = Circuit::new("wide", 2);
            let (q0, q1) = (circuit.qreg(0), circuit.qreg(1));
            let children = (0..*num_gates)
                .map(|i| {
                    if i % 2 == 0 {
                        op::h(q0).unwrap()
                    } else {
                        op::cnot(q0, q1).unwrap()
                    }
                })
                .collect();
            circuit.append(op::us("layer", children));
            circuit
        };

        group.bench_with_input(
            BenchmarkId::new("wide", num_gates),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.flatten().count()));
            },
        );

        // Deep: nested containers, one leaf per level.
        let circuit = {
            let mut circuit = Circuit::new("deep", 1);
            let q0 = circuit.qreg(0);
            let mut tree = op::x(q0).unwrap();
            for _ in 0..*num_gates {
                tree = op::us("level", vec![tree]);
            }
            circuit.append(tree);
            circuit
        };

        group.bench_with_input(
            BenchmarkId::new("deep", num_gates),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.flatten().count()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_circuit_creation, bench_builders, bench_flatten);
criterion_main!(benches);
