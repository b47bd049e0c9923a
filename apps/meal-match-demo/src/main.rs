//! Scripted terminal session of the restaurant finder.
//!
//! Drives the same input paths a browser host uses and paces frames from the
//! wall clock. Set `RUST_LOG=debug` to watch the tracker transitions.

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use meal_match_demo::{MealMatches, RestaurantFinder, Screen};
use swipematch_core::{FrameClock, FrameTicker};
use swipematch_foundation::{InputHandler, KeyCode, KeyEvent, PointerEvent};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 120;

struct Session {
    clock: FrameClock,
    ticker: FrameTicker,
}

impl Session {
    fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            ticker: FrameTicker::new(),
        }
    }

    fn settle(&mut self) -> anyhow::Result<()> {
        for _ in 0..MAX_FRAMES {
            self.ticker.tick(&self.clock);
            if !self.clock.has_frame_callbacks() {
                return Ok(());
            }
            thread::sleep(FRAME_INTERVAL);
        }
        bail!("animations still running after {MAX_FRAMES} frames")
    }

    fn drag(&mut self, handler: &dyn InputHandler, from_x: f32, to_x: f32) {
        handler.handle_pointer_event(&PointerEvent::down(from_x, 200.0));
        for step in 1..=6 {
            let x = from_x + (to_x - from_x) * step as f32 / 6.0;
            handler.handle_pointer_event(&PointerEvent::moved(x, 200.0));
            self.ticker.tick(&self.clock);
            thread::sleep(FRAME_INTERVAL);
        }
        handler.handle_pointer_event(&PointerEvent::up(to_x, 200.0));
    }
}

fn print_screen(title: &str, lines: &[String]) {
    println!("--- {title} ---");
    for line in lines {
        println!("{line}");
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== SwipeMatch Restaurant Finder ===");
    println!("Swipe left to pass, right to mark interest, or use the arrow keys.");
    println!();

    let mut session = Session::new();
    let finder = RestaurantFinder::new(session.clock.clone(), false)
        .context("restaurant finder configuration")?;
    print_screen("start", &finder.render());

    // Too short to commit: snaps back.
    session.drag(&finder, 300.0, 270.0);
    print_screen("short drag", &finder.render());
    session.settle()?;

    session.drag(&finder, 300.0, 420.0);
    print_screen("swiped right", &finder.render());
    session.settle()?;

    finder.handle_key_event(&KeyEvent::key_down(KeyCode::ArrowLeft));
    session.settle()?;
    finder.interested();
    session.settle()?;

    if finder.screen() != Screen::AllDone {
        bail!("expected the finder to run out of restaurants");
    }
    print_screen("all done", &finder.render());

    finder.toggle_history();
    print_screen("history", &finder.render());

    finder.start_over();
    print_screen("start over", &finder.render());

    let meals =
        MealMatches::new(session.clock.clone(), false).context("meal matches configuration")?;
    for _ in 0..4 {
        meals.deck().interested();
        session.settle()?;
    }
    print_screen("meal matches", &meals.render());

    Ok(())
}
