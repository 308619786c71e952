// Example: simulating a UI event loop around the controller.
//
// Raw scroll events arrive faster than frames; the controller coalesces them
// and reconciles slots once per frame.
use windowlist::{ListOptions, Rect};
use windowlist_adapter::Controller;

fn main() {
    let mut controller: Controller<String> = Controller::new(
        ListOptions::new(50_000, 28)
            .with_overscan(4)
            .with_initial_rect(Some(Rect { main: 280, cross: 120 })),
    )
    .expect("valid configuration");

    // Three wheel events land between two frames; only the last one counts.
    controller.on_scroll(300);
    controller.on_scroll(900);
    controller.on_scroll(1_400);

    let mut now_ms = 0u64;
    for _ in 0..12 {
        let mut created = 0usize;
        let mut destroyed = 0usize;
        let range = controller.frame(
            now_ms,
            |row| {
                created += 1;
                format!("row {}", row.index)
            },
            |_, _| destroyed += 1,
        );
        println!(
            "t={now_ms:>4}ms window={range:?} slots={} (+{created}/-{destroyed}) scrolling={}",
            controller.window().len(),
            controller.is_scrolling(),
        );

        // Keep scrolling for the first few frames, then let it settle.
        if now_ms < 64 {
            controller.on_scroll(1_400 + now_ms * 40);
        }
        now_ms += 16;
    }

    // The hosting container goes away: cancel everything.
    let mut torn_down = 0usize;
    controller.teardown(|_, _| torn_down += 1);
    println!("teardown destroyed {torn_down} slots");
}
