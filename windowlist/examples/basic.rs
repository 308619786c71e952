// Example: minimal usage and scroll-to helper.
use windowlist::{Align, ListOptions, Rect, VirtualList};

fn main() {
    let mut list = VirtualList::new(
        ListOptions::new(1_000_000, 24)
            .with_overscan(3)
            .with_initial_rect(Some(Rect { main: 240, cross: 80 })),
    )
    .expect("valid configuration");

    list.set_scroll_offset_clamped(123_456);
    println!("spacer={}", list.total_size());
    println!("window={:?}", list.window_range());
    println!("visible={:?}", list.visible_range());

    let mut rows = Vec::new();
    list.collect_placed_rows(&mut rows);
    println!("first_row={:?}", rows.first());

    let off = list.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: offset={off} window={:?}", list.window_range());
}
