//! Sizing and layout passes for box containers.
//!
//! Both passes walk the children in order and skip invisible ones
//! entirely. Layout runs in four steps, each depending on aggregates of
//! the previous one:
//!
//! 1. Fixed children are resized to their minimum; flexible ones are counted
//! 2. Leftover main-axis space is split once between flexible children and spacers
//! 3. Children that need the full cross extent get the final sibling maximum
//! 4. Everything is positioned along the main axis, separated by padding

use nbox_core::Size;

use crate::config::{BoxLayout, CrossAlignment};
use crate::item::{Flex, LayoutItem};
use crate::observer::{LayoutObserver, LayoutPass, Silent};

impl BoxLayout {
    /// Smallest size that fits every visible child.
    ///
    /// The main extent is the sum of fixed children plus padding between
    /// each; flexible children and spacers all count for the largest
    /// flexible minimum. The cross extent is the widest child.
    pub fn min_size<I: LayoutItem>(&self, items: &[I], padding: f32) -> Size {
        let axis = self.axis();
        let mut main_size = 0.0_f32;
        let mut cross_size = 0.0_f32;
        let mut flex_count = 0usize;
        let mut spacer_count = 0usize;
        let mut min_space_per_flex = 0.0_f32;
        let mut add_padding = false;

        for item in items.iter().filter(|item| item.is_visible()) {
            if self.is_spacer(item) {
                spacer_count += 1;
                continue;
            }

            let min = item.min_size();
            if self.classify(item) == Flex::MainExpand {
                flex_count += 1;
                min_space_per_flex = min_space_per_flex.max(axis.main(min));
            } else {
                main_size += axis.main(min);
            }
            cross_size = cross_size.max(axis.cross(min));

            if add_padding {
                main_size += padding;
            }
            add_padding = true;
        }

        main_size += min_space_per_flex * (flex_count + spacer_count) as f32;
        axis.compose(main_size, cross_size)
    }

    /// Resize and move every visible child to fill `size`.
    pub fn layout<I: LayoutItem>(&self, items: &mut [I], size: Size, padding: f32) {
        self.layout_observed(items, size, padding, &mut Silent);
    }

    /// Same as [`BoxLayout::layout`], reporting the pass to `observer`.
    pub fn layout_observed<I, O>(&self, items: &mut [I], size: Size, padding: f32, observer: &mut O)
    where
        I: LayoutItem,
        O: LayoutObserver + ?Sized,
    {
        let axis = self.axis();
        let stretch = self.cross_alignment() == CrossAlignment::Stretch;
        let max_main = axis.main(size);
        let max_cross = axis.cross(size);

        let mut pass = LayoutPass::default();
        let mut visible = 0usize;
        let mut full_cross = Vec::new();

        // Fixed children
        for (index, item) in items.iter_mut().enumerate() {
            if !item.is_visible() {
                continue;
            }
            if self.is_spacer(&*item) {
                pass.spacer_count += 1;
                continue;
            }
            visible += 1;

            let min = item.min_size();
            let child_main = axis.main(min);
            let child_cross = if stretch { max_cross } else { axis.cross(min) };
            pass.cross_size = pass.cross_size.max(child_cross);

            match self.classify(&*item) {
                Flex::MainExpand => {
                    pass.flex_count += 1;
                    pass.min_space_per_flex = pass.min_space_per_flex.max(child_main);
                }
                Flex::CrossFull => {
                    // Cross extent is only known once every sibling was seen.
                    pass.allocated_size += child_main;
                    full_cross.push(index);
                }
                Flex::Fixed => {
                    pass.allocated_size += child_main;
                    item.resize(axis.compose(child_main, child_cross));
                }
            }
        }

        // Flexible children
        pass.free_space =
            max_main - pass.allocated_size - padding * visible.saturating_sub(1) as f32;
        let shares = pass.flex_count + pass.spacer_count;
        if shares > 0 {
            pass.space_per_flex = pass.free_space.max(0.0) / shares as f32;
        }

        if pass.flex_count > 0 {
            for item in items.iter_mut() {
                if !item.is_visible() || self.is_spacer(&*item) {
                    continue;
                }
                if self.classify(&*item) != Flex::MainExpand {
                    continue;
                }
                let child_cross = if stretch {
                    max_cross
                } else {
                    axis.cross(item.min_size())
                };
                item.resize(axis.compose(pass.space_per_flex, child_cross));
                pass.allocated_size += axis.main(item.size().max(item.min_size()));
            }
        }

        // Full cross extent children
        for index in full_cross {
            let item = &mut items[index];
            let child_main = axis.main(item.min_size());
            item.resize(axis.compose(child_main, pass.cross_size));
        }

        // Positions
        let mut main_pos = 0.0_f32;
        for item in items.iter_mut() {
            if !item.is_visible() {
                continue;
            }
            if self.is_spacer(&*item) {
                main_pos += pass.space_per_flex;
                continue;
            }

            let current = item.size().max(item.min_size());
            let cross_pos = match self.cross_alignment() {
                CrossAlignment::Start | CrossAlignment::Stretch => 0.0,
                CrossAlignment::End => pass.cross_size - axis.cross(current),
                CrossAlignment::Center => (pass.cross_size - axis.cross(current)) / 2.0,
                // TODO: offset by the child's text baseline once items can report one.
                CrossAlignment::Baseline => 0.0,
            };

            item.move_to(axis.place(main_pos, cross_pos));
            main_pos += padding + axis.main(current);
        }

        observer.on_pass(self, &pass);
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::Spacer;
    use crate::item::testing::TestItem;
    use crate::item::ItemKind;

    const EPSILON: f32 = 0.01;

    fn alignment() -> impl Strategy<Value = CrossAlignment> {
        prop_oneof![
            Just(CrossAlignment::Start),
            Just(CrossAlignment::End),
            Just(CrossAlignment::Center),
            Just(CrossAlignment::Baseline),
            Just(CrossAlignment::Stretch),
        ]
    }

    fn box_layout() -> impl Strategy<Value = BoxLayout> {
        (any::<bool>(), any::<bool>(), alignment()).prop_map(|(horizontal, expanded, alignment)| {
            match (horizontal, expanded) {
                (true, false) => BoxLayout::horizontal_aligned(alignment),
                (true, true) => BoxLayout::horizontal_expanded_aligned(alignment),
                (false, false) => BoxLayout::vertical_aligned(alignment),
                (false, true) => BoxLayout::vertical_expanded_aligned(alignment),
            }
        })
    }

    fn item() -> impl Strategy<Value = TestItem> {
        let kind = prop_oneof![
            4 => Just(ItemKind::Object),
            1 => Just(ItemKind::Spacer(Spacer::new())),
            1 => Just(ItemKind::Spacer(Spacer::horizontal())),
            1 => Just(ItemKind::Spacer(Spacer::vertical())),
            1 => box_layout().prop_map(ItemKind::Container),
        ];
        (0u16..100, 0u16..100, prop::bool::weighted(0.85), kind).prop_map(|(w, h, visible, kind)| {
            let mut item = match kind {
                ItemKind::Spacer(spacer) => TestItem::spacer(spacer),
                _ => TestItem::new(w as f32, h as f32),
            };
            item.kind = kind;
            item.visible = visible;
            item
        })
    }

    fn placed(layout: &BoxLayout, items: &[TestItem]) -> Vec<TestItem> {
        items
            .iter()
            .filter(|item| item.visible && !layout.is_spacer(*item))
            .cloned()
            .collect()
    }

    proptest! {
        #[test]
        fn children_fit_when_size_covers_minimum(
            layout in box_layout(),
            mut items in prop::collection::vec(item(), 0..10),
            padding in 0u8..8,
            extra_main in 0u16..200,
            extra_cross in 0u16..50,
        ) {
            let padding = padding as f32;
            let axis = layout.axis();
            let min = layout.min_size(&items, padding);
            let size = axis.compose(
                axis.main(min) + extra_main as f32,
                axis.cross(min) + extra_cross as f32,
            );

            layout.layout(&mut items, size, padding);

            let mut previous_end: Option<f32> = None;
            for item in placed(&layout, &items) {
                let start = axis.main_offset(item.position);
                let extent = axis.main(item.size.max(item.min));
                if let Some(end) = previous_end {
                    prop_assert!(start + EPSILON >= end + padding);
                }
                previous_end = Some(start + extent);
            }
            if let Some(end) = previous_end {
                prop_assert!(end <= axis.main(size) + EPSILON);
            }
        }

        #[test]
        fn stretch_gives_full_cross_extent(
            horizontal in any::<bool>(),
            expanded in any::<bool>(),
            mut items in prop::collection::vec(item(), 0..10),
            width in 0u16..400,
            height in 0u16..400,
        ) {
            let layout = match (horizontal, expanded) {
                (true, false) => BoxLayout::horizontal(),
                (true, true) => BoxLayout::horizontal_expanded(),
                (false, false) => BoxLayout::vertical(),
                (false, true) => BoxLayout::vertical_expanded(),
            };
            let size = Size::new(width as f32, height as f32);

            layout.layout(&mut items, size, 4.0);

            let axis = layout.axis();
            for item in placed(&layout, &items) {
                prop_assert_eq!(axis.cross(item.size), axis.cross(size));
            }
        }

        #[test]
        fn hidden_children_do_not_affect_siblings(
            layout in box_layout(),
            items in prop::collection::vec(item(), 0..10),
            extra in item(),
            at in any::<prop::sample::Index>(),
            width in 0u16..400,
            height in 0u16..400,
        ) {
            let size = Size::new(width as f32, height as f32);
            let mut without = items.clone();
            layout.layout(&mut without, size, 4.0);

            let index = at.index(items.len() + 1);
            let mut with = items;
            with.insert(index, TestItem { visible: false, ..extra });
            layout.layout(&mut with, size, 4.0);
            with.remove(index);

            prop_assert_eq!(with, without);
        }

        #[test]
        fn min_size_covers_children(
            layout in box_layout(),
            items in prop::collection::vec(item(), 0..10),
            padding in 0u8..8,
        ) {
            let padding = padding as f32;
            let axis = layout.axis();
            let min = layout.min_size(&items, padding);
            let children = placed(&layout, &items);

            let mut main_sum = 0.0;
            for child in &children {
                prop_assert!(axis.cross(min) >= axis.cross(child.min));
                if layout.classify(child) != Flex::MainExpand {
                    main_sum += axis.main(child.min);
                }
            }
            main_sum += padding * children.len().saturating_sub(1) as f32;
            prop_assert!(axis.main(min) + EPSILON >= main_sum);
        }

        #[test]
        fn spacers_share_leftover_evenly(
            widths in prop::collection::vec(0u16..50, 1..5),
            spacers in 1usize..4,
            extra in 0u16..300,
        ) {
            let layout = BoxLayout::horizontal_aligned(CrossAlignment::Start);
            let padding = 4.0;
            let mut items: Vec<TestItem> = widths.iter().map(|w| TestItem::new(*w as f32, 10.0)).collect();
            for _ in 0..spacers {
                items.push(TestItem::spacer(Spacer::new()));
            }
            let min = layout.min_size(&items, padding);
            let size = Size::new(min.width + extra as f32, 10.0);
            let mut seen = LayoutPass::default();

            layout.layout_observed(&mut items, size, padding, &mut |_: &BoxLayout, pass: &LayoutPass| {
                seen = *pass;
            });

            let fixed: f32 = widths.iter().map(|w| *w as f32).sum();
            let free = size.width - fixed - padding * (widths.len() - 1) as f32;
            prop_assert!((seen.space_per_flex - free / spacers as f32).abs() < EPSILON);
            for (item, width) in items.iter().zip(&widths) {
                prop_assert_eq!(item.size.width, *width as f32);
            }
        }
    }
}
