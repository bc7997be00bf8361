// Host-side integration tests for the navigation controller.

use glam::DVec2;
use instant::Instant;
use nav_core::{
    Activation, DistortionParameters, DistortionUniforms, NavConfig, NavError,
    NavigationController, PointerInput, PointerKind, RenderSink, TitleRasterizer, Viewport,
};
use std::time::Duration;

/// Monospace stand-in: a fixed advance per character plus padding.
struct FixedAdvanceRasterizer {
    advance_px: f64,
    padding_px: f64,
}

impl TitleRasterizer for FixedAdvanceRasterizer {
    fn rendered_width(&mut self, title: &str) -> f64 {
        title.chars().count() as f64 * self.advance_px + self.padding_px
    }
}

/// Hands out preset widths in item order.
struct PresetWidths(std::vec::IntoIter<f64>);

impl TitleRasterizer for PresetWidths {
    fn rendered_width(&mut self, _title: &str) -> f64 {
        self.0.next().unwrap_or(0.0)
    }
}

fn make_controller(widths: &[f64], viewport: Viewport) -> NavigationController {
    let sources: Vec<(String, String)> = (0..widths.len())
        .map(|i| (format!("Item {i}"), format!("/{i}")))
        .collect();
    let mut raster = PresetWidths(widths.to_vec().into_iter());
    NavigationController::new(sources, &mut raster, viewport, NavConfig::default()).unwrap()
}

fn standard() -> NavigationController {
    make_controller(&[100.0, 200.0, 300.0, 400.0], Viewport::new(1000.0, 800.0))
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn mouse(x: f64, y: f64) -> PointerInput {
    PointerInput::new(x, y, PointerKind::Mouse)
}

fn touch(x: f64, y: f64) -> PointerInput {
    PointerInput::new(x, y, PointerKind::Touch)
}

#[test]
fn construction_measures_every_title() {
    let mut raster = FixedAdvanceRasterizer {
        advance_px: 40.0,
        padding_px: 50.0,
    };
    let nav = NavigationController::new(
        vec![("Home", "/"), ("About", "/about")],
        &mut raster,
        Viewport::new(800.0, 600.0),
        NavConfig::default(),
    )
    .unwrap();
    let widths: Vec<f64> = nav.items().iter().map(|i| i.width()).collect();
    assert_eq!(widths, vec![210.0, 250.0]);
    assert_eq!(nav.row_width_px(), 460.0);
    assert_eq!(nav.items()[1].order, 1);
    assert_eq!(nav.items()[1].target_link, "/about");
}

#[test]
fn construction_rejects_empty_or_zero_width_rows() {
    let mut raster = PresetWidths(vec![].into_iter());
    let empty: Vec<(String, String)> = Vec::new();
    let err = NavigationController::new(
        empty,
        &mut raster,
        Viewport::new(10.0, 10.0),
        NavConfig::default(),
    )
    .err();
    assert_eq!(err, Some(NavError::NoItems));

    let mut zero = PresetWidths(vec![0.0, 0.0].into_iter());
    let err = NavigationController::new(
        vec![("a", "/a"), ("b", "/b")],
        &mut zero,
        Viewport::new(10.0, 10.0),
        NavConfig::default(),
    )
    .err();
    assert!(matches!(err, Some(NavError::ZeroRowWidth { .. })));
}

#[test]
fn focus_item_animates_toward_resolved_target() {
    let mut nav = standard();
    nav.focus_item(2).unwrap();
    let target = nav.animator().target().unwrap().target_px;
    assert!((target - DVec2::new(460.0, 400.0)).length() < 1e-9);
    assert!(nav.is_animating());
    assert!(nav.item_highlighted(2));

    let t0 = Instant::now();
    for i in 0..120 {
        nav.frame(t0 + ms(16 * i));
    }
    let p = nav.mouse_px();
    assert!((p - DVec2::new(460.0, 400.0)).length() < 1.0, "got {p:?}");
}

#[test]
fn focus_item_out_of_range_fails_fast() {
    let mut nav = standard();
    assert_eq!(
        nav.focus_item(4),
        Err(NavError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert!(!nav.is_animating());
}

#[test]
fn malformed_positions_are_dropped() {
    let mut nav = standard();
    assert!(nav.set_mouse_position(DVec2::new(250.0, 400.0)));
    let before = nav.params().clone();
    assert!(!nav.set_mouse_position(DVec2::new(f64::NAN, 10.0)));
    assert!(!nav.set_mouse_position(DVec2::new(10.0, f64::INFINITY)));
    assert!(!nav.set_mouse_position_components(&[1.0, 2.0, 3.0]));
    assert!(!nav.set_mouse_position_components(&[1.0]));
    assert_eq!(nav.params(), &before);
    assert!(nav.set_mouse_position_components(&[500.0, 400.0]));
    assert_eq!(nav.params().mouse, DVec2::ZERO);
}

#[test]
fn pan_offset_follows_horizontal_pointer() {
    let mut nav = standard();
    nav.set_mouse_position(DVec2::new(500.0, 400.0));
    assert!(nav.pan_offset_px().abs() < 1e-9);
    nav.set_mouse_position(DVec2::new(0.0, 400.0));
    assert!((nav.pan_offset_px() - 500.0).abs() < 1e-9);
    nav.set_mouse_position(DVec2::new(1000.0, 400.0));
    assert!((nav.pan_offset_px() + 500.0).abs() < 1e-9);
}

#[test]
fn mouse_moves_track_but_idle_touch_moves_do_not() {
    let mut nav = standard();
    nav.on_pointer_move(touch(100.0, 100.0), Instant::now());
    assert_eq!(nav.params().mouse, DVec2::ZERO);
    nav.on_pointer_move(mouse(100.0, 100.0), Instant::now());
    assert!((nav.mouse_px() - DVec2::new(100.0, 100.0)).length() < 1e-9);
}

#[test]
fn touch_drag_pans_and_suppresses_click_through() {
    let mut nav = standard();
    let t0 = Instant::now();
    nav.on_pointer_down(touch(450.0, 400.0), t0);
    nav.frame(t0 + ms(300));
    assert!(nav.is_dragging());
    nav.on_pointer_move(touch(200.0, 400.0), t0 + ms(400));
    assert!((nav.pan_offset_px() - 300.0).abs() < 1e-9);
    // row now starts at x=300; x=700 sits over item 2, but this was a drag
    let up = nav.on_pointer_up(touch(700.0, 400.0), t0 + ms(800));
    assert_eq!(up, None);
    assert!(nav.is_dragging());
    nav.frame(t0 + ms(1100));
    assert!(!nav.is_dragging());
}

#[test]
fn quick_tap_over_item_activates_its_link() {
    let mut nav = standard();
    let t0 = Instant::now();
    // pointer centred: row spans 0..1000, item 2 covers 300..600
    nav.on_pointer_down(touch(450.0, 400.0), t0);
    nav.frame(t0 + ms(50));
    let up = nav.on_pointer_up(touch(450.0, 400.0), t0 + ms(100));
    assert_eq!(
        up,
        Some(Activation {
            index: 2,
            link: "/2".to_string()
        })
    );
    assert!(!nav.pointer_state().is_dragging);
}

#[test]
fn tap_outside_the_row_activates_nothing() {
    let mut nav = standard();
    let t0 = Instant::now();
    nav.on_pointer_down(touch(450.0, 50.0), t0);
    assert_eq!(nav.on_pointer_up(touch(450.0, 50.0), t0 + ms(100)), None);
}

#[test]
fn open_sweeps_in_from_the_right_toward_first_item() {
    let mut nav = standard();
    nav.on_open().unwrap();
    assert!(nav.is_animating());
    let start = nav.mouse_px();
    assert!((start - DVec2::new(3000.0, 400.0)).length() < 1e-6);
    let target = nav.animator().target().unwrap().target_px;
    assert!((target - DVec2::new(140.0, 400.0)).length() < 1e-9);

    let t0 = Instant::now();
    nav.frame(t0);
    let after = nav.mouse_px();
    assert!((after.x - (3000.0 + (140.0 - 3000.0) * 0.05)).abs() < 1e-6);
}

#[test]
fn mouse_moves_retarget_an_active_animation() {
    let mut nav = standard();
    nav.on_open().unwrap();
    nav.on_pointer_move(mouse(700.0, 300.0), Instant::now());
    assert_eq!(
        nav.animator().target().unwrap().target_px,
        DVec2::new(700.0, 300.0)
    );
    assert!((nav.mouse_px().x - 3000.0).abs() < 1e-6);
    // touch moves are ignored while animating
    nav.on_pointer_move(touch(10.0, 10.0), Instant::now());
    assert_eq!(
        nav.animator().target().unwrap().target_px,
        DVec2::new(700.0, 300.0)
    );
}

#[test]
fn close_stops_after_one_final_frame() {
    let mut nav = standard();
    nav.on_open().unwrap();
    let t0 = Instant::now();
    nav.frame(t0);
    nav.on_close();
    assert!(!nav.is_animating());
    assert!(nav.animator().is_scheduled());
    let before = nav.mouse_px();
    nav.frame(t0 + ms(16));
    assert!(nav.mouse_px().x < before.x);
    assert!(!nav.animator().is_scheduled());
    let settled = nav.mouse_px();
    nav.frame(t0 + ms(32));
    assert!((nav.mouse_px() - settled).length() < 1e-9);
}

#[test]
fn drag_start_takes_over_from_animation() {
    let mut nav = standard();
    nav.on_open().unwrap();
    let t0 = Instant::now();
    nav.on_pointer_down(touch(500.0, 400.0), t0);
    nav.frame(t0 + ms(300));
    assert!(nav.is_dragging());
    assert!(!nav.is_animating());
}

#[test]
fn hover_and_focus_drive_item_highlight() {
    let mut nav = standard();
    // mouse at x=400 pans the row so local x = 2x - 500 = 300, the start of item 2
    nav.on_pointer_move(mouse(400.0, 400.0), Instant::now());
    assert!(nav.item_highlighted(2));
    assert!(nav.params().hover[2]);
    assert!(!nav.item_highlighted(1));

    nav.on_pointer_move(mouse(400.0, 50.0), Instant::now());
    assert!(!nav.item_highlighted(2));

    nav.focus_item(0).unwrap();
    assert!(nav.item_highlighted(0));
    nav.blur_item(1);
    assert!(nav.item_highlighted(0));
    nav.blur_item(0);
    assert!(!nav.item_highlighted(0));
}

#[test]
fn resize_updates_resolution_but_not_pointer_or_pan() {
    let mut raster = PresetWidths(vec![100.0, 100.0].into_iter());
    let config = NavConfig {
        pixel_ratio: 2.0,
        ..NavConfig::default()
    };
    let mut nav = NavigationController::new(
        vec![("a", "/a"), ("b", "/b")],
        &mut raster,
        Viewport::new(1000.0, 800.0),
        config,
    )
    .unwrap();
    assert_eq!(nav.params().resolution, DVec2::new(2000.0, 1600.0));
    nav.set_mouse_position(DVec2::new(250.0, 200.0));
    let mouse_before = nav.params().mouse;
    let pan_before = nav.pan_offset_px();
    nav.on_resize(Viewport::new(600.0, 900.0));
    assert_eq!(nav.params().resolution, DVec2::new(1200.0, 1800.0));
    assert!((nav.params().aspect_ratio - 1.5).abs() < 1e-12);
    assert_eq!(nav.params().mouse, mouse_before);
    assert_eq!(nav.pan_offset_px(), pan_before);
}

#[test]
fn time_advances_once_per_frame() {
    let mut nav = standard();
    let t0 = Instant::now();
    for i in 0..10 {
        nav.frame(t0 + ms(i));
    }
    assert!((nav.params().time - 0.1).abs() < 1e-9);
}

#[derive(Default)]
struct RecordingSink {
    frames: Vec<(DistortionParameters, DistortionUniforms)>,
}

impl RenderSink for RecordingSink {
    fn submit(&mut self, params: &DistortionParameters, uniforms: &DistortionUniforms) {
        self.frames.push((params.clone(), *uniforms));
    }
}

#[test]
fn render_hands_parameters_to_the_sink() {
    let mut nav = standard();
    nav.focus_item(1).unwrap();
    let mut sink = RecordingSink::default();
    let t0 = Instant::now();
    nav.render(t0, &mut sink);
    nav.render(t0 + ms(16), &mut sink);
    assert_eq!(sink.frames.len(), 2);
    let (params, uniforms) = &sink.frames[1];
    assert_eq!(uniforms.item_count, 4.0);
    assert_eq!(uniforms.row[0], 1000.0);
    assert_eq!(uniforms.row[1], 120.0);
    assert_eq!(uniforms.items[1], [100.0, 200.0, 1.0, 0.0]);
    assert_eq!(uniforms.items[3], [600.0, 400.0, 0.0, 0.0]);
    assert_eq!(uniforms.texture_extent, [1000.0, 120.0, 0.0, 0.0]);
    assert_eq!(uniforms.mouse, params.mouse.as_vec2().to_array());
    assert!(bytemuck::bytes_of(uniforms).len() % 16 == 0);
}

#[test]
fn dispose_stops_everything() {
    let mut nav = standard();
    nav.on_open().unwrap();
    nav.dispose();
    assert!(nav.is_disposed());
    assert!(!nav.is_animating());
    assert!(!nav.animator().is_scheduled());
    let time = nav.params().time;
    let t0 = Instant::now();
    nav.frame(t0);
    assert_eq!(nav.params().time, time);
    nav.on_pointer_down(touch(450.0, 400.0), t0);
    assert!(!nav.pointer_state().is_down);
    let mut sink = RecordingSink::default();
    nav.render(t0, &mut sink);
    assert!(sink.frames.is_empty());
}

#[test]
fn jump_to_item_places_the_field_without_animating() {
    let mut nav = standard();
    let widths: Vec<f64> = nav.items().iter().map(|i| i.width()).collect();
    let target = nav_core::focus::resolve_position(&widths, 0, &nav.viewport()).unwrap();
    nav.jump_to_item(0).unwrap();
    assert!((nav.mouse_px() - target).length() < 1e-6);
    assert!(!nav.is_animating());
    assert!(!nav.item_highlighted(0));
    assert_eq!(
        nav.jump_to_item(9),
        Err(NavError::IndexOutOfRange { index: 9, len: 4 })
    );
}

#[test]
fn rendered_width_is_set_once() {
    let mut item = nav_core::NavItem::new(0, "Home", "/");
    assert_eq!(item.width(), 0.0);
    item.set_rendered_width(120.0);
    item.set_rendered_width(300.0);
    assert_eq!(item.rendered_width_px, Some(120.0));

    let mut bad = nav_core::NavItem::new(1, "Bad", "/bad");
    bad.set_rendered_width(f64::NAN);
    assert_eq!(bad.width(), 0.0);
}

#[test]
fn release_after_threshold_is_a_drag_even_without_a_frame() {
    let mut nav = standard();
    let t0 = Instant::now();
    nav.on_pointer_down(touch(500.0, 400.0), t0);
    // no frame ran while the press was held
    let up = nav.on_pointer_up(touch(500.0, 400.0), t0 + ms(1000));
    assert_eq!(up, None);
    assert!(nav.is_dragging());
}

#[test]
fn move_after_threshold_pans_before_the_next_frame() {
    let mut nav = standard();
    let t0 = Instant::now();
    nav.on_open().unwrap();
    nav.on_pointer_down(touch(500.0, 400.0), t0);
    nav.on_pointer_move(touch(200.0, 400.0), t0 + ms(400));
    assert!(nav.is_dragging());
    assert!(!nav.is_animating());
    assert!((nav.pan_offset_px() - 300.0).abs() < 1e-9);
}

#[test]
fn clipped_texture_keeps_row_layout() {
    let nav = make_controller(&[5000.0, 5000.0], Viewport::new(1000.0, 800.0));
    let uniforms = nav.uniforms().with_texture_extent(8192, 120);
    // layout still spans the full row; only the sampled extent shrinks
    assert_eq!(uniforms.row[0], 10000.0);
    assert_eq!(uniforms.items[1], [5000.0, 5000.0, 0.0, 0.0]);
    assert_eq!(uniforms.texture_extent, [8192.0, 120.0, 0.0, 0.0]);
}
