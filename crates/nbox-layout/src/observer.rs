//! Diagnostics hook for layout passes.

use crate::config::BoxLayout;

/// Working values of one layout pass, reported after distribution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutPass {
    /// Main-axis space left after fixed children and padding. May be negative.
    pub free_space: f32,
    /// Main extent handed to each flexible child and each spacer.
    pub space_per_flex: f32,
    /// Largest minimum main extent among flexible children.
    pub min_space_per_flex: f32,
    pub flex_count: usize,
    pub spacer_count: usize,
    /// Main extent consumed by fixed children, plus flexible children once sized.
    pub allocated_size: f32,
    /// Largest cross extent among visible children.
    pub cross_size: f32,
}

/// Receives a [`LayoutPass`] from [`BoxLayout::layout_observed`].
pub trait LayoutObserver {
    fn on_pass(&mut self, layout: &BoxLayout, pass: &LayoutPass);
}

impl<F> LayoutObserver for F
where
    F: FnMut(&BoxLayout, &LayoutPass),
{
    fn on_pass(&mut self, layout: &BoxLayout, pass: &LayoutPass) {
        self(layout, pass)
    }
}

/// Observer that emits each pass as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LayoutObserver for TracingObserver {
    fn on_pass(&mut self, layout: &BoxLayout, pass: &LayoutPass) {
        tracing::debug!(
            target: "nbox_layout::engine",
            axis = ?layout.axis(),
            expanded = layout.is_expanded(),
            free_space = pass.free_space,
            space_per_flex = pass.space_per_flex,
            min_space_per_flex = pass.min_space_per_flex,
            flex_count = pass.flex_count,
            spacer_count = pass.spacer_count,
            allocated_size = pass.allocated_size,
            cross_size = pass.cross_size,
            "box layout pass"
        );
    }
}

/// Observer that discards everything.
pub(crate) struct Silent;

impl LayoutObserver for Silent {
    #[inline]
    fn on_pass(&mut self, _layout: &BoxLayout, _pass: &LayoutPass) {}
}
