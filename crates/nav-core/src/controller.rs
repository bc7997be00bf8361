//! The navigation controller: owns every piece of interaction state and is
//! the only writer of the distortion parameters.

use crate::animator::InterpolationAnimator;
use crate::config::NavConfig;
use crate::constants::MAX_HOVER_ITEMS;
use crate::error::NavError;
use crate::focus;
use crate::item::{NavItem, TitleRasterizer};
use crate::mapper::{self, Viewport};
use crate::params::{DistortionParameters, DistortionUniforms};
use crate::pointer::{
    PointerKind, PointerRelease, PointerState, PointerStateMachine, PointerTransition,
};
use crate::sink::RenderSink;
use glam::DVec2;
use instant::Instant;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub position_px: DVec2,
    pub kind: PointerKind,
}

impl PointerInput {
    pub fn new(x: f64, y: f64, kind: PointerKind) -> Self {
        Self {
            position_px: DVec2::new(x, y),
            kind,
        }
    }
}

/// A tap landed on an item; the glue should follow its link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub index: usize,
    pub link: String,
}

pub struct NavigationController {
    config: NavConfig,
    viewport: Viewport,
    items: SmallVec<[NavItem; MAX_HOVER_ITEMS]>,
    row_width_px: f64,
    pointer: PointerStateMachine,
    animator: InterpolationAnimator,
    params: DistortionParameters,
    last_pointer_px: Option<DVec2>,
    hovered: Option<usize>,
    focused: Option<usize>,
    disposed: bool,
}

impl NavigationController {
    /// Builds the controller from an ordered `(title, link)` source, measuring
    /// every title through `rasterizer`.
    pub fn new<I, T, L, R>(
        sources: I,
        rasterizer: &mut R,
        viewport: Viewport,
        config: NavConfig,
    ) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = (T, L)>,
        T: Into<String>,
        L: Into<String>,
        R: TitleRasterizer + ?Sized,
    {
        let mut items: SmallVec<[NavItem; MAX_HOVER_ITEMS]> = sources
            .into_iter()
            .enumerate()
            .map(|(order, (title, link))| NavItem::new(order, title, link))
            .collect();
        if items.is_empty() {
            return Err(NavError::NoItems);
        }
        for item in items.iter_mut() {
            let w = rasterizer.rendered_width(&item.title);
            item.set_rendered_width(w);
        }
        let row_width_px: f64 = items.iter().map(NavItem::width).sum();
        if !row_width_px.is_finite() || row_width_px <= 0.0 {
            return Err(NavError::ZeroRowWidth {
                total: row_width_px,
            });
        }
        if items.len() > MAX_HOVER_ITEMS {
            log::warn!(
                "[nav] {} items; only the first {} get hover treatment",
                items.len(),
                MAX_HOVER_ITEMS
            );
        }
        log::info!(
            "[nav] {} items, row width {:.1}px, viewport {}x{}",
            items.len(),
            row_width_px,
            viewport.width_px,
            viewport.height_px
        );
        Ok(Self {
            pointer: PointerStateMachine::new(config.drag_threshold, config.release_delay),
            animator: InterpolationAnimator::new(config.damping),
            params: DistortionParameters::new(&viewport, config.pixel_ratio),
            config,
            viewport,
            items,
            row_width_px,
            last_pointer_px: None,
            hovered: None,
            focused: None,
            disposed: false,
        })
    }

    // ---------------- Accessors ----------------

    #[inline]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn params(&self) -> &DistortionParameters {
        &self.params
    }

    #[inline]
    pub fn pan_offset_px(&self) -> f64 {
        self.params.pan_offset_px
    }

    #[inline]
    pub fn row_width_px(&self) -> f64 {
        self.row_width_px
    }

    #[inline]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer.state()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    #[inline]
    pub fn animator(&self) -> &InterpolationAnimator {
        &self.animator
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Effective pointer position in pixels, recovered from normalized space.
    #[inline]
    pub fn mouse_px(&self) -> DVec2 {
        mapper::to_pixels(self.params.mouse, &self.viewport)
    }

    /// Whether item `index` should show its hover/focus treatment.
    pub fn item_highlighted(&self, index: usize) -> bool {
        self.hovered == Some(index) || self.focused == Some(index)
    }

    pub fn uniforms(&self) -> DistortionUniforms {
        DistortionUniforms::pack(
            &self.params,
            &self.items,
            &self.viewport,
            self.config.item_height_px,
        )
    }

    fn widths(&self) -> SmallVec<[f64; MAX_HOVER_ITEMS]> {
        self.items.iter().map(NavItem::width).collect()
    }

    /// Left edge of the item row on screen, in pixels.
    #[inline]
    pub fn row_left_px(&self) -> f64 {
        self.viewport.center().x + self.params.pan_offset_px - self.row_width_px * 0.5
    }

    /// Item under `pixel` in the undistorted row layout.
    pub fn item_at(&self, pixel: DVec2) -> Option<usize> {
        if !pixel.is_finite() {
            return None;
        }
        let half_h = self.config.item_height_px * 0.5;
        if (pixel.y - self.viewport.center().y).abs() > half_h {
            return None;
        }
        let mut x = pixel.x - self.row_left_px();
        if x < 0.0 {
            return None;
        }
        for (i, item) in self.items.iter().enumerate() {
            let w = item.width();
            if x < w {
                return Some(i);
            }
            x -= w;
        }
        None
    }

    // ---------------- Position ----------------

    /// Sets the live pointer from a pixel position, updating the normalized
    /// mouse and the pan offset. Non-finite input is dropped and the previous
    /// value kept; returns whether the position was accepted.
    pub fn set_mouse_position(&mut self, pixel: DVec2) -> bool {
        if !pixel.is_finite() {
            log::debug!("[nav] dropped non-finite mouse position {:?}", pixel);
            return false;
        }
        let normalized = mapper::to_normalized(pixel, &self.viewport);
        if !normalized.is_finite() {
            log::debug!("[nav] dropped unmappable mouse position {:?}", pixel);
            return false;
        }
        self.params.mouse = normalized;
        self.params.pan_offset_px = self.pan_for(pixel.x);
        true
    }

    /// Untyped variant for loosely-typed callers; anything but exactly two
    /// finite components is dropped.
    pub fn set_mouse_position_components(&mut self, components: &[f64]) -> bool {
        match components {
            [x, y] => self.set_mouse_position(DVec2::new(*x, *y)),
            _ => {
                log::debug!("[nav] dropped mouse position of arity {}", components.len());
                false
            }
        }
    }

    #[inline]
    fn pan_for(&self, x_px: f64) -> f64 {
        let p = x_px / self.viewport.safe_size().x;
        self.row_width_px * (0.5 - p)
    }

    // ---------------- Events ----------------

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.params.resize(&viewport, self.config.pixel_ratio);
        log::debug!(
            "[nav] resize {}x{} ratio {:.3}",
            viewport.width_px,
            viewport.height_px,
            self.params.aspect_ratio
        );
    }

    pub fn on_pointer_move(&mut self, input: PointerInput, now: Instant) {
        if self.disposed {
            return;
        }
        self.sync_pointer(now);
        self.last_pointer_px = Some(input.position_px);
        let follows = self.pointer.is_dragging() || input.kind == PointerKind::Mouse;
        if self.animator.is_active() {
            if follows && input.position_px.is_finite() {
                self.animator.retarget(input.position_px);
            }
        } else if follows {
            self.set_mouse_position(input.position_px);
        }
        self.refresh_hover();
    }

    pub fn on_pointer_down(&mut self, input: PointerInput, now: Instant) {
        if self.disposed {
            return;
        }
        self.sync_pointer(now);
        self.pointer.pointer_down(now);
        self.last_pointer_px = Some(input.position_px);
        self.refresh_hover();
    }

    /// Returns the activation to follow when the release was a tap over an
    /// item. Releases that end a drag never activate.
    pub fn on_pointer_up(&mut self, input: PointerInput, now: Instant) -> Option<Activation> {
        if self.disposed {
            return None;
        }
        self.sync_pointer(now);
        let release = self.pointer.pointer_up(now);
        let hit = self.item_at(input.position_px);
        if input.kind != PointerKind::Mouse {
            // touch and pen leave the surface on release
            self.last_pointer_px = None;
        }
        self.refresh_hover();
        let index = hit?;
        if release == PointerRelease::DragEnd {
            log::debug!("[pointer] click-through on item {} suppressed after drag", index);
            return None;
        }
        self.animator.stop();
        let link = self.items[index].target_link.clone();
        log::info!("[nav] activate item {} -> {}", index, link);
        Some(Activation { index, link })
    }

    /// Animates the field toward item `index` and marks it as focused.
    pub fn focus_item(&mut self, index: usize) -> Result<(), NavError> {
        let target = focus::resolve_position(&self.widths(), index, &self.viewport)?;
        if self.disposed {
            return Ok(());
        }
        self.focused = Some(index);
        if self.animator.start(target) {
            log::debug!("[nav] focus item {} scheduled animation", index);
        }
        self.refresh_hover();
        Ok(())
    }

    /// Places the field on item `index` immediately, without animating or
    /// marking the item as focused. Used for the initial layout.
    pub fn jump_to_item(&mut self, index: usize) -> Result<(), NavError> {
        let target = focus::resolve_position(&self.widths(), index, &self.viewport)?;
        if !self.disposed {
            self.set_mouse_position(target);
        }
        Ok(())
    }

    pub fn blur_item(&mut self, index: usize) {
        if self.focused == Some(index) {
            self.focused = None;
            self.refresh_hover();
        }
    }

    /// Opening sweeps the field in from the far right onto the first item.
    pub fn on_open(&mut self) -> Result<(), NavError> {
        let target = focus::resolve_position(&self.widths(), 0, &self.viewport)?;
        if self.disposed {
            return Ok(());
        }
        self.animator.start(target);
        let sweep = DVec2::new(
            self.config.open_sweep_start_x_px,
            self.viewport.safe_size().y * 0.5,
        );
        self.set_mouse_position(sweep);
        log::info!("[nav] open");
        Ok(())
    }

    pub fn on_close(&mut self) {
        self.animator.stop();
        log::info!("[nav] close");
    }

    // ---------------- Frame ----------------

    /// Advances one rendered frame: time, pointer timers, the animator and
    /// the hover mask.
    pub fn frame(&mut self, now: Instant) -> &DistortionParameters {
        if self.disposed {
            return &self.params;
        }
        self.params.advance_time();
        self.sync_pointer(now);
        let current = self.mouse_px();
        if let Some(step) = self.animator.step(current) {
            self.set_mouse_position(step.position_px);
        }
        self.refresh_hover();
        &self.params
    }

    pub fn render<S: RenderSink + ?Sized>(&mut self, now: Instant, sink: &mut S) {
        self.frame(now);
        if self.disposed {
            return;
        }
        let uniforms = self.uniforms();
        sink.submit(&self.params, &uniforms);
    }

    /// Fires pointer deadlines that are already due.
    fn sync_pointer(&mut self, now: Instant) {
        if let Some(PointerTransition::DragStarted) = self.pointer.poll(now) {
            // a drag takes over from any programmatic animation
            self.animator.stop();
        }
    }

    fn refresh_hover(&mut self) {
        self.hovered = self.last_pointer_px.and_then(|p| self.item_at(p));
        for (i, flag) in self.params.hover.iter_mut().enumerate() {
            *flag = self.hovered == Some(i) || self.focused == Some(i);
        }
    }

    /// Stops the animator, cancels pending pointer timers and ignores any
    /// further events.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.animator.cancel();
        self.pointer.reset();
        self.last_pointer_px = None;
        self.hovered = None;
        self.focused = None;
        self.disposed = true;
        log::info!("[nav] disposed");
    }
}
