//! Benchmarks for Alsvid program operations
//!
//! Run with: cargo bench -p alsvid-ir

use alsvid_ir::{GateSet, Program, ProgramNode, QReg, TemplateBuilder};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark flattening of deeply nested programs
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let gates = GateSet::with_stdgates();
    let h = gates.lookup("h").unwrap();

    for depth in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("nested", depth), depth, |b, &depth| {
            // One gate wrapped in `depth` singleton sequences, repeated.
            let mut program = Program::new();
            for i in 0..64u32 {
                let mut node = ProgramNode::Gate(gates.gate(h, [i]).unwrap());
                for _ in 0..depth {
                    node = ProgramNode::Seq(vec![node]);
                }
                program.push(node);
            }
            b.iter(|| black_box(&program).flatten());
        });
    }

    group.finish();
}

/// Benchmark template instantiation
fn bench_instantiate(c: &mut Criterion) {
    let mut group = c.benchmark_group("instantiate");

    let gates = GateSet::with_stdgates();
    let cx = gates.lookup("cx").unwrap();

    for size in &[2u32, 8, 32, 128] {
        group.bench_with_input(BenchmarkId::new("chain", size), size, |b, &size| {
            let mut builder = TemplateBuilder::new();
            let reg = builder.qreg("q", size);
            for i in 0..size - 1 {
                builder.push(gates.gate(cx, [reg.wires[i as usize], reg.wires[i as usize + 1]]).unwrap());
            }
            let template = builder.build().unwrap();
            let actuals = [QReg::range("q", 1000, size)];

            b.iter(|| template.instantiate(black_box(&actuals)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark control-chain construction
fn bench_control(c: &mut Criterion) {
    let gates = GateSet::with_stdgates();
    let h = gates.lookup("h").unwrap();
    let gate = gates.gate(h, [0u32]).unwrap();

    c.bench_function("control_chain", |b| {
        b.iter(|| {
            gate.with_control(black_box(Some("0110")), black_box(&[1, 2, 3, 4]))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_flatten, bench_instantiate, bench_control);
criterion_main!(benches);
