//! Rendering benchmarks for mcpserver-codegen.
//!
//! Measures full-file rendering across method counts and the per-field
//! mapping cost.
//!
//! Run with: `cargo bench --package mcpserver-codegen`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mcpserver_codegen::{Renderer, map_field};
use mcpserver_core::{
    FieldDescriptor, FieldKind, GeneratorOptions, MessageDescriptor, MethodDescriptor, SchemaFile,
    ServiceDescriptor,
};
use std::hint::black_box;

const KINDS: [FieldKind; 10] = [
    FieldKind::Bool,
    FieldKind::Int32,
    FieldKind::Uint32,
    FieldKind::Int64,
    FieldKind::Uint64,
    FieldKind::Float,
    FieldKind::Double,
    FieldKind::String,
    FieldKind::Bytes,
    FieldKind::Message,
];

/// Creates a message with one field of every kind, alternating cardinality.
fn create_message(full_name: &str) -> MessageDescriptor {
    KINDS
        .iter()
        .enumerate()
        .fold(MessageDescriptor::new(full_name), |msg, (i, kind)| {
            let field = FieldDescriptor::new(format!("field_{i}"), kind.clone());
            msg.with_field(if i % 2 == 0 { field } else { field.repeated() })
        })
}

/// Creates a file with one service of `methods` methods.
fn create_file(methods: usize) -> SchemaFile {
    let service = (0..methods).fold(ServiceDescriptor::new("Bench"), |svc, i| {
        svc.with_method(MethodDescriptor::new(
            format!("Method{i}"),
            create_message(&format!("bench.Request{i}")),
            create_message(&format!("bench.Response{i}")),
        ))
    });
    SchemaFile::new("bench.proto", "bench").with_service(service)
}

fn bench_render(c: &mut Criterion) {
    let renderer = Renderer::new(GeneratorOptions::default()).unwrap();
    let mut group = c.benchmark_group("render");

    for methods in [1, 10, 100] {
        let file = create_file(methods);
        group.throughput(Throughput::Elements(methods as u64));
        group.bench_with_input(BenchmarkId::from_parameter(methods), &file, |b, file| {
            b.iter(|| renderer.render(black_box(file)).unwrap());
        });
    }

    group.finish();
}

fn bench_map_field(c: &mut Criterion) {
    let fields: Vec<_> = KINDS
        .iter()
        .map(|kind| FieldDescriptor::new("f", kind.clone()).repeated())
        .collect();

    c.bench_function("map_field", |b| {
        b.iter(|| {
            for field in &fields {
                black_box(map_field(black_box(field)));
            }
        });
    });
}

criterion_group!(benches, bench_render, bench_map_field);
criterion_main!(benches);
