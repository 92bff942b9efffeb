//! Benchmarks for space distribution, garbage collection and hit testing
//!
//! Run with: cargo bench layout

mod support;
use support::{add_floating_tool, bounds, make_tree};

use dockyard::config::DockingConfig;
use dockyard::drag::DragSession;
use dockyard::geometry::Point;
use dockyard::layout::{distribute, ChildMeasure};
use dockyard::model::{ContentKind, DockLength, NodeTag};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Space distribution
// ============================================================================

fn mixed_children(count: usize) -> Vec<ChildMeasure> {
    (0..count)
        .map(|i| {
            let length = if i % 3 == 0 {
                DockLength::Absolute(120.0 + i as f64)
            } else {
                DockLength::Star(1.0 + (i % 4) as f64)
            };
            ChildMeasure::new(length, 25.0, 100.0)
        })
        .collect()
}

#[divan::bench(args = [2, 8, 32, 128])]
fn distribute_comfortable(bencher: divan::Bencher, count: usize) {
    let children = mixed_children(count);
    let available = 200.0 * count as f64;
    bencher.bench_local(|| distribute(divan::black_box(available), 6.0, &children));
}

#[divan::bench(args = [2, 8, 32, 128])]
fn distribute_intermediate(bencher: divan::Bencher, count: usize) {
    let children = mixed_children(count);
    // Between the minimum and the preferred minimum
    let available = 60.0 * count as f64;
    bencher.bench_local(|| distribute(divan::black_box(available), 6.0, &children));
}

#[divan::bench(args = [4, 16, 64])]
fn arrange_tree(bencher: divan::Bencher, depth: usize) {
    let mut tree = make_tree(depth, 4);
    let config = DockingConfig::default();
    bencher.bench_local(|| tree.arrange(bounds(), &config));
}

// ============================================================================
// Garbage collection
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn collect_garbage_after_close(bencher: divan::Bencher, depth: usize) {
    bencher
        .with_inputs(|| {
            let mut tree = make_tree(depth, 1);
            // Empty every document pane so whole levels collapse
            let docs: Vec<_> = tree
                .contents_of(tree.root_panel())
                .into_iter()
                .filter(|&c| tree.content(c).is_some_and(|c| c.kind == ContentKind::Document))
                .collect();
            for doc in docs {
                let _ = tree.destroy(doc);
            }
            tree
        })
        .bench_local_values(|mut tree| tree.collect_garbage());
}

#[divan::bench(args = [4, 16, 64])]
fn collect_garbage_clean_tree(bencher: divan::Bencher, depth: usize) {
    let mut tree = make_tree(depth, 2);
    tree.collect_garbage();
    bencher.bench_local(|| tree.collect_garbage());
}

// ============================================================================
// Hit testing
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn drag_cursor_sweep(bencher: divan::Bencher, depth: usize) {
    let mut tree = make_tree(depth, 3);
    let window = add_floating_tool(&mut tree);
    let config = DockingConfig::default();
    tree.arrange(bounds(), &config);

    let points: Vec<Point> = (0..64)
        .map(|i| Point::new(i as f64 * 30.0, (i * 17 % 1080) as f64))
        .collect();

    bencher.bench_local(|| {
        let mut session = DragSession::begin(&tree, window, &config).unwrap();
        for &point in &points {
            session.update_cursor_position(&tree, point);
        }
        divan::black_box(session.take_events().len())
    });
}

#[divan::bench(args = [4, 16, 64])]
fn find_floating_ancestor(bencher: divan::Bencher, depth: usize) {
    let tree = make_tree(depth, 2);
    let deepest = tree
        .contents_of(tree.root_panel())
        .last()
        .copied()
        .unwrap();
    bencher.bench_local(|| tree.find_parent_of_type(divan::black_box(deepest), NodeTag::FloatingWindow));
}
