// Example: reconciling a slot window while scrolling.
//
// Slots stand in for whatever the host renders a row into (here, a label).
use windowlist::{ListOptions, Rect, SlotWindow, VirtualList};

fn main() {
    let mut list = VirtualList::new(
        ListOptions::new(10_000, 40)
            .with_overscan(2)
            .with_initial_rect(Some(Rect { main: 200, cross: 80 })),
    )
    .expect("valid configuration");
    let mut window: SlotWindow<String> = SlotWindow::new();

    for offset in [0u64, 80, 400, 395, 9_000, 399_800] {
        list.set_scroll_offset_clamped(offset);
        let mut created = 0usize;
        let mut destroyed = 0usize;
        list.sync_slots(
            &mut window,
            |row| {
                created += 1;
                format!("row #{} at y={}", row.index, row.start)
            },
            |_, _| destroyed += 1,
        );
        println!(
            "offset={offset:>6} window={:?} slots={} (+{created}/-{destroyed})",
            list.window_range(),
            window.len(),
        );
    }

    window.for_each(|index, label| println!("  [{index}] {label}"));
}
