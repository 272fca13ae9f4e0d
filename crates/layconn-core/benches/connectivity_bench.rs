// ─────────────────────────────────────────────────────────────────────
// Layconn — Connectivity Rule Set Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for building rule sets of realistic layer
//! stacks and rendering their canonical text form.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use layconn_core::Connectivity;
use layconn_types::{GlobalRule, RuleDeck};

/// Metal/via stack: each layer hard-connects to the next, every fourth
/// layer soft-connects down to a well layer, and the bottom and top
/// layers attach to supply nets.
fn stack(n: u32) -> Connectivity {
    let mut conn = Connectivity::new();
    for l in 0..n {
        conn.connect_layer(l);
        if l + 1 < n {
            conn.connect(l, l + 1);
        }
        if l % 4 == 0 {
            conn.soft_connect(l, n);
        }
    }
    conn.connect_global(0, "VSS");
    conn.soft_connect_global(n, "SUBSTRATE");
    conn.connect_global(n - 1, "VDD");
    conn
}

// ── Building ────────────────────────────────────────────────────────

fn bench_build_stack_16(c: &mut Criterion) {
    c.bench_function("build_stack_16", |b| b.iter(|| stack(black_box(16))));
}

fn bench_build_stack_1000(c: &mut Criterion) {
    c.bench_function("build_stack_1000", |b| b.iter(|| stack(black_box(1000))));
}

fn bench_build_from_deck(c: &mut Criterion) {
    let deck = RuleDeck {
        layers: (0..64).collect(),
        connections: (0..63).map(|l| (l, l + 1)).collect(),
        soft_connections: (0..64).step_by(4).map(|l| (l, 64)).collect(),
        global_connections: vec![GlobalRule::new(0, "VSS"), GlobalRule::new(63, "VDD")],
        soft_global_connections: vec![GlobalRule::new(64, "SUBSTRATE")],
    };
    c.bench_function("build_from_deck_64", |b| {
        b.iter(|| Connectivity::from_deck(black_box(&deck)))
    });
}

// ── Rendering ───────────────────────────────────────────────────────

fn bench_render_stack_16(c: &mut Criterion) {
    let conn = stack(16);
    c.bench_function("render_stack_16", |b| b.iter(|| black_box(&conn).to_string()));
}

fn bench_render_stack_1000(c: &mut Criterion) {
    let conn = stack(1000);
    c.bench_function("render_stack_1000", |b| b.iter(|| black_box(&conn).to_string()));
}

// ── Lookups ─────────────────────────────────────────────────────────

fn bench_interaction_lookup(c: &mut Criterion) {
    let conn = stack(1000);
    c.bench_function("interaction_lookup_1000", |b| {
        b.iter(|| conn.interaction(black_box(500), black_box(501)))
    });
}

criterion_group!(
    benches,
    bench_build_stack_16,
    bench_build_stack_1000,
    bench_build_from_deck,
    bench_render_stack_16,
    bench_render_stack_1000,
    bench_interaction_lookup,
);
criterion_main!(benches);
