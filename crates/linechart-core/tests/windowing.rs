// File: crates/linechart-core/tests/windowing.rs
// Purpose: Validate visible-window arithmetic, clamping, and x projection.

use linechart_core::window::visible_window;

#[test]
fn window_at_origin() {
    let w = visible_window(50.0, 300.0, 0.0, 20);
    // 6 fully visible slots plus one slot of trailing slack.
    assert_eq!((w.start, w.end), (0, 7));
}

#[test]
fn window_mid_scroll() {
    let w = visible_window(50.0, 300.0, 500.0, 20);
    assert_eq!((w.start, w.end), (10, 17));
}

#[test]
fn scroll_past_content_clamps_to_empty() {
    for offset in [250.0, 300.0, 10_000.0] {
        let w = visible_window(50.0, 300.0, offset, 5);
        assert_eq!((w.start, w.end), (5, 5));
        assert!(w.is_empty());
    }
}

#[test]
fn no_items_means_no_window() {
    let w = visible_window(50.0, 300.0, 0.0, 0);
    assert_eq!((w.start, w.end), (0, 0));
    assert!(w.is_empty());
}

#[test]
fn end_clamps_to_item_count() {
    let w = visible_window(60.0, 200.0, 0.0, 3);
    assert_eq!((w.start, w.end), (0, 3));
}

#[test]
fn local_x_centers_items_in_their_slot() {
    let w = visible_window(60.0, 200.0, 0.0, 3);
    assert_eq!(w.local_x(0, 60.0), 30.0);
    assert_eq!(w.local_x(1, 60.0), 90.0);
    assert_eq!(w.local_x(2, 60.0), 150.0);
}

#[test]
fn local_x_rebases_on_window_start() {
    let w = visible_window(50.0, 300.0, 500.0, 20);
    assert_eq!(w.start, 10);
    assert_eq!(w.local_x(10, 50.0), 25.0);
    assert_eq!(w.local_x(12, 50.0), 125.0);
}

#[test]
fn canvas_offset_is_the_fraction_of_a_slot() {
    // Scrolled 10 slots and 20px into the 11th.
    let w = visible_window(50.0, 300.0, 520.0, 20);
    assert_eq!(w.start, 10);
    assert_eq!(w.canvas_offset(520.0, 50.0), -20.0);

    // Aligned on a slot boundary: no sub-slot shift at all.
    let w = visible_window(50.0, 300.0, 500.0, 20);
    assert_eq!(w.canvas_offset(500.0, 50.0), 0.0);
}
