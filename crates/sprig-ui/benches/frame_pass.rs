//! Frame pass benchmarks.

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sprig_core::{Pos, Size};
use sprig_render_2d::SoftwareRenderer;
use sprig_text::{render_small_string_monospace, BlockFont, GlyphSource};
use sprig_ui::{run_frame, view_multi_value, view_value, Leaf, List, ListData, Style, TwoRows, WidgetId, WidgetTree};

struct Scene {
    tree: WidgetTree,
    root: WidgetId,
    counter: Rc<RefCell<u64>>,
    _rows: Rc<RefCell<Vec<String>>>,
}

fn scene(rows: usize) -> Scene {
    let font: Rc<dyn GlyphSource> = Rc::new(BlockFont);
    let style = Rc::new(Style::new(Rc::clone(&font), 16.0));
    let counter = Rc::new(RefCell::new(0u64));
    let values = Rc::new(RefCell::new((0..rows).map(|i| format!("row {i}")).collect::<Vec<_>>()));

    let mut tree = WidgetTree::new();
    let root = tree.insert(List::new());
    let leaf = tree.insert(Leaf::with_proxy(view_value(&counter, &style)));
    let data = tree.insert(ListData::with_proxy(view_multi_value(&values, &style)));
    let pair = tree.insert(TwoRows::new(
        render_small_string_monospace("top", &*font, 16.0).img,
        render_small_string_monospace("bottom", &*font, 16.0).img,
    ));
    for child in [leaf, data, pair] {
        tree.attach(root, child).expect("fresh ids attach");
    }

    Scene { tree, root, counter, _rows: values }
}

fn frame_small(c: &mut Criterion) {
    let mut s = scene(8);
    let mut canvas = SoftwareRenderer::new(640, 480);
    c.bench_function("frame_small", |b| {
        b.iter(|| {
            *s.counter.borrow_mut() += 1;
            run_frame(&mut s.tree, s.root, Pos::new(320, 240), Size::ZERO, black_box(&mut canvas));
        })
    });
}

fn frame_long_list(c: &mut Criterion) {
    let mut s = scene(200);
    let mut canvas = SoftwareRenderer::new(640, 480);
    c.bench_function("frame_long_list", |b| {
        b.iter(|| run_frame(&mut s.tree, s.root, Pos::new(0, 0), Size::new(640, 480), black_box(&mut canvas)))
    });
}

criterion_group!(benches, frame_small, frame_long_list);
criterion_main!(benches);
