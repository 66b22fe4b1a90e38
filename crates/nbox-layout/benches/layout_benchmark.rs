//! Box layout benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nbox_core::{Position, Size};
use nbox_layout::{BoxLayout, CrossAlignment, ItemKind, LayoutItem, LayoutOptions, LayoutTree, Spacer};

struct Widget {
    min: Size,
    size: Size,
    position: Position,
    kind: ItemKind,
}

impl LayoutItem for Widget {
    fn min_size(&self) -> Size {
        self.min
    }

    fn size(&self) -> Size {
        self.size
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    fn kind(&self) -> ItemKind {
        self.kind
    }
}

fn wide_row(count: usize) -> Vec<Widget> {
    (0..count)
        .map(|i| Widget {
            min: Size::new(10.0 + (i % 7) as f32, 12.0 + (i % 5) as f32),
            size: Size::ZERO,
            position: Position::ORIGIN,
            kind: match i % 10 {
                0 => ItemKind::Spacer(Spacer::new()),
                5 => ItemKind::Container(BoxLayout::horizontal_expanded()),
                7 => ItemKind::Container(BoxLayout::vertical_expanded()),
                _ => ItemKind::Object,
            },
        })
        .collect()
}

fn layout_wide_row(c: &mut Criterion) {
    let layout = BoxLayout::horizontal_aligned(CrossAlignment::Center);
    let mut items = wide_row(1000);

    c.bench_function("min_size_1000", |b| {
        b.iter(|| layout.min_size(black_box(&items), 4.0))
    });

    c.bench_function("layout_1000", |b| {
        b.iter(|| layout.layout(black_box(&mut items), Size::new(40_000.0, 600.0), 4.0))
    });
}

fn resize_nested_tree(c: &mut Criterion) {
    let mut tree = LayoutTree::new(LayoutOptions::default());
    let root = tree.add_container(Some(BoxLayout::vertical()));
    for _ in 0..50 {
        let row = tree.add_container(Some(BoxLayout::horizontal_expanded()));
        for _ in 0..20 {
            let cell = tree.add_object(Size::new(20.0, 10.0));
            tree.add_child(row, cell).expect("fresh node");
        }
        tree.add_child(root, row).expect("fresh node");
    }

    c.bench_function("resize_nested_tree", |b| {
        b.iter(|| tree.resize(root, black_box(Size::new(1200.0, 900.0))))
    });
}

criterion_group!(benches, layout_wide_row, resize_nested_tree);
criterion_main!(benches);
