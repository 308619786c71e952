use crate::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::vec::Vec;

use windowlist::{Align, ListOptions, Rect, VirtualList, WindowRange};

fn test_options() -> ListOptions {
    ListOptions::new(1000, 40)
        .with_overscan(2)
        .with_initial_rect(Some(Rect { main: 200, cross: 80 }))
}

#[test]
fn sampler_keeps_only_the_latest_event() {
    let mut sampler = FrameSampler::new();
    assert!(!sampler.has_pending());
    assert_eq!(sampler.take(), None);

    sampler.note_scroll(10);
    sampler.note_scroll(20);
    sampler.note_scroll(30);
    sampler.note_viewport(Rect { main: 100, cross: 50 });

    let sample = sampler.take().unwrap();
    assert_eq!(sample.scroll_offset, Some(30));
    assert_eq!(sample.viewport, Some(Rect { main: 100, cross: 50 }));

    // Drained: the next frame sees nothing.
    assert_eq!(sampler.take(), None);
}

#[test]
fn frame_applies_coalesced_events_as_one_update() {
    let hits = Arc::new(AtomicUsize::new(0));
    let options = {
        let hits = Arc::clone(&hits);
        test_options().with_on_change(Some(move |_: &VirtualList, _| {
            hits.fetch_add(1, Ordering::Relaxed);
        }))
    };
    let mut controller: Controller<usize> = Controller::new(options).unwrap();

    // A burst of raw events between frames...
    controller.on_scroll(100);
    controller.on_scroll(4000);
    controller.on_scroll(400);
    controller.on_viewport(Rect { main: 200, cross: 100 });

    let range = controller.frame(16, |row| row.index, |_, _| {});

    // ...lands as a single notification with the latest offset.
    assert_eq!(hits.load(Ordering::Relaxed), 1);
    assert_eq!(controller.list().scroll_offset(), 400);
    assert_eq!(range, WindowRange { start: 8, end: 17 });
    assert_eq!(controller.window().len(), range.len());
    assert!(controller.is_scrolling());
}

#[test]
fn frame_without_events_does_no_slot_work() {
    let mut controller: Controller<usize> = Controller::new(test_options()).unwrap();
    controller.frame(0, |row| row.index, |_, _| {});

    let mut created = 0usize;
    let mut destroyed = 0usize;
    let range = controller.frame(
        16,
        |row| {
            created += 1;
            row.index
        },
        |_, _| destroyed += 1,
    );
    assert_eq!((created, destroyed), (0, 0));
    assert_eq!(range, controller.window().range());
}

#[test]
fn retained_slots_survive_small_scrolls() {
    let mut controller: Controller<Arc<usize>> = Controller::new(test_options()).unwrap();
    controller.frame(0, |row| Arc::new(row.index), |_, _| {});

    let keep = Arc::clone(controller.window().get(3).unwrap());

    // One row of movement: the window shifts by one, index 3 stays live.
    controller.on_scroll(40);
    controller.frame(16, |row| Arc::new(row.index), |_, _| {});

    assert!(Arc::ptr_eq(&keep, controller.window().get(3).unwrap()));
}

#[test]
fn overscrolled_events_clamp_at_the_frame_boundary() {
    let mut controller: Controller<usize> = Controller::new(test_options()).unwrap();
    controller.on_scroll(u64::MAX);
    let range = controller.frame(0, |row| row.index, |_, _| {});

    assert_eq!(controller.list().scroll_offset(), 39_800);
    assert_eq!(range, WindowRange { start: 993, end: 1000 });
}

#[test]
fn is_scrolling_debounces_across_frames() {
    let mut controller: Controller<usize> = Controller::new(test_options()).unwrap();
    controller.on_scroll(80);
    controller.frame(0, |row| row.index, |_, _| {});
    assert!(controller.is_scrolling());

    controller.frame(100, |row| row.index, |_, _| {});
    assert!(controller.is_scrolling());

    // Default reset delay is 150ms after the last scroll event.
    controller.frame(200, |row| row.index, |_, _| {});
    assert!(!controller.is_scrolling());
}

#[test]
fn scroll_to_index_lands_on_next_frame() {
    let mut controller: Controller<usize> = Controller::new(test_options()).unwrap();
    controller.frame(0, |row| row.index, |_, _| {});

    let offset = controller.scroll_to_index(500, Align::Start, 16);
    assert_eq!(offset, 20_000);

    let range = controller.frame(32, |row| row.index, |_, _| {});
    assert_eq!(range, WindowRange { start: 498, end: 507 });
    assert!(controller.window().contains(500));
}

#[test]
fn teardown_cancels_pending_work_and_destroys_slots() {
    let mut controller: Controller<usize> = Controller::new(test_options()).unwrap();
    controller.frame(0, |row| row.index, |_, _| {});
    let live = controller.window().len();
    assert!(live > 0);

    controller.on_scroll(8_000);

    let mut destroyed = Vec::new();
    controller.teardown(|index, _| destroyed.push(index));

    assert_eq!(destroyed.len(), live);
    assert!(controller.window().is_empty());
    assert!(!controller.has_pending_sample());
}

#[test]
fn zero_viewport_renders_nothing_until_measured() {
    // No initial rect: the container has not been laid out yet.
    let mut controller: Controller<usize> =
        Controller::new(ListOptions::new(1000, 40).with_overscan(2)).unwrap();

    let range = controller.frame(0, |row| row.index, |_, _| {});
    assert!(range.is_empty());
    assert!(controller.window().is_empty());

    controller.on_viewport(Rect { main: 200, cross: 80 });
    let range = controller.frame(16, |row| row.index, |_, _| {});
    assert_eq!(range, WindowRange { start: 0, end: 7 });
}
