//! Benchmark Demo - Per-frame rebuild cost
//!
//! Tests:
//! - Tree declaration throughput after `reset` (storage kept)
//! - Full layout runs at scale, flat and nested
//! - Wrapping rows with many lines
//!
//! Set `RUST_LOG=spark_layout=debug` to see arena growth.
//!
//! Run with: cargo run --example benchmark --release

use std::time::{Duration, Instant};

use spark_layout::{Behave, Contain, ItemId, LayoutContext};

const FRAMES: u32 = 200;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("spark-layout benchmark ({FRAMES} frames per case)\n");

    for count in [100, 1_000, 10_000, 50_000] {
        report("flat column", count, |ctx| flat_column(ctx, count));
    }
    for depth in [4, 8] {
        let count = nested_count(depth);
        report("nested rows/columns", count, |ctx| nested(ctx, depth));
    }
    for count in [1_000, 10_000] {
        report("wrapping row", count, |ctx| wrapping_row(ctx, count));
    }
}

/// Declare and lay out the same tree `FRAMES` times, reusing one context.
fn report(name: &str, count: usize, declare: impl Fn(&mut LayoutContext)) {
    let mut ctx = LayoutContext::new();
    let mut build = Duration::ZERO;
    let mut run = Duration::ZERO;

    for _ in 0..FRAMES {
        ctx.reset();

        let start = Instant::now();
        declare(&mut ctx);
        build += start.elapsed();

        let start = Instant::now();
        ctx.run_context();
        run += start.elapsed();
    }

    let per_frame = (build + run) / FRAMES;
    let per_item = per_frame.as_nanos() as f64 / count as f64;
    println!(
        "{name:<22} {count:>7} items  build {:>9.2?}  run {:>9.2?}  {per_item:>7.1} ns/item  (capacity {})",
        build / FRAMES,
        run / FRAMES,
        ctx.items_capacity(),
    );
}

fn flat_column(ctx: &mut LayoutContext, count: usize) {
    let root = ctx.item_new();
    ctx.set_size_xy(root, 200.0, 0.0);
    ctx.set_contain(root, Contain::COLUMN);
    let mut last = None;
    for _ in 1..count {
        let id = ctx.item_new();
        ctx.set_size_xy(id, 0.0, 1.0);
        ctx.set_behave(id, Behave::HFILL);
        match last {
            Some(prev) => ctx.append(prev, id),
            None => ctx.insert(root, id),
        }
        last = Some(id);
    }
}

/// Items in a binary tree of `depth` levels.
fn nested_count(depth: u32) -> usize {
    (1usize << (depth + 1)) - 1
}

fn nested(ctx: &mut LayoutContext, depth: u32) {
    let root = ctx.item_new();
    ctx.set_size_xy(root, 1920.0, 1080.0);
    split(ctx, root, depth, Contain::ROW);
}

fn split(ctx: &mut LayoutContext, parent: ItemId, depth: u32, contain: Contain) {
    ctx.set_contain(parent, contain);
    if depth == 0 {
        return;
    }
    let next = if contain == Contain::ROW {
        Contain::COLUMN
    } else {
        Contain::ROW
    };
    for _ in 0..2 {
        let id = ctx.item_new();
        ctx.set_behave(id, Behave::FILL);
        ctx.set_margins_ltrb(id, 1.0, 1.0, 1.0, 1.0);
        ctx.insert(parent, id);
        split(ctx, id, depth - 1, next);
    }
}

fn wrapping_row(ctx: &mut LayoutContext, count: usize) {
    let root = ctx.item_new();
    ctx.set_size_xy(root, 200.0, 0.0);
    ctx.set_contain(root, Contain::ROW | Contain::WRAP | Contain::START);

    let first = ctx.item_new();
    ctx.set_size_xy(first, 7.0, 1.0);
    ctx.insert(root, first);

    // append keeps declaration linear
    let mut last = first;
    for i in 1..count {
        let id = ctx.item_new();
        ctx.set_size_xy(id, (5 + i % 7) as f32, 1.0);
        ctx.append(last, id);
        last = id;
    }
}
