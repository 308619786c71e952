// Example: persisting and restoring list position across sessions.
use windowlist::{ListOptions, Rect, VirtualList};

fn main() {
    let mut list = VirtualList::new(
        ListOptions::new(5_000, 32).with_initial_rect(Some(Rect { main: 320, cross: 120 })),
    )
    .expect("valid configuration");
    list.apply_scroll_offset_event_clamped(48_000, 0);

    // A host would serialize this (the `serde` feature derives the traits).
    let saved = list.frame_state();
    println!("saved={saved:?}");

    let mut restored = VirtualList::new(ListOptions::new(5_000, 32)).expect("valid configuration");
    restored.restore_frame_state(saved, 16);
    println!(
        "restored offset={} window={:?}",
        restored.scroll_offset(),
        restored.window_range()
    );
}
