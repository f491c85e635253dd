//! Integration tests driving the full input chain from raw pin samples:
//! quadrature decoder + press filter feeding the menu navigator, polled
//! on a fixed 20 ms tick like the firmware loop.

use knobmenu::config::{BUTTON_DEBOUNCE_MS, TICK_PERIOD_MS};
use knobmenu::input::button::PressFilter;
use knobmenu::input::encoder::QuadratureDecoder;
use knobmenu::menu::{MenuLevel, MenuModel, NavigationEvent, Navigator};

/// One raw input sample: encoder A, encoder B, button pressed.
type Sample = (bool, bool, bool);

struct Rig {
    nav: Navigator,
    decoder: QuadratureDecoder,
    filter: PressFilter,
    now_ms: u64,
}

impl Rig {
    fn new() -> Self {
        Self {
            nav: Navigator::new(MenuModel::new(5, 4).unwrap()),
            decoder: QuadratureDecoder::new(false),
            filter: PressFilter::new(),
            now_ms: 0,
        }
    }

    /// Run one tick exactly as the firmware loop does; at most one
    /// event can come out.
    fn tick(&mut self, (a, b, pressed): Sample) -> Option<NavigationEvent> {
        self.now_ms += TICK_PERIOD_MS;

        let step = self.decoder.update(a, b);
        let mut event = self.nav.apply_step(step);

        if self.filter.poll(pressed, self.now_ms, BUTTON_DEBOUNCE_MS) {
            let activated = self.nav.apply_activate();
            if activated.is_some() {
                event = activated;
            }
        }

        event
    }

    fn run(&mut self, samples: &[Sample]) -> Vec<NavigationEvent> {
        samples.iter().filter_map(|&s| self.tick(s)).collect()
    }

    /// Hold the pins steady long enough for the button cooldown to
    /// expire, without generating encoder edges.
    fn settle(&mut self, a: bool, b: bool) {
        let ticks = BUTTON_DEBOUNCE_MS / TICK_PERIOD_MS + 1;
        for _ in 0..ticks {
            self.tick((a, b, false));
        }
    }
}

#[test]
fn end_to_end_navigation_from_pin_samples() {
    let mut rig = Rig::new();

    // Get past the power-on debounce window before pressing anything.
    rig.settle(false, false);

    // Two clockwise detents: each A toggle with B at the opposite level.
    let events = rig.run(&[(true, false, false), (false, true, false)]);
    assert_eq!(
        events,
        [
            NavigationEvent::CursorMoved {
                level: MenuLevel::Root,
                index: 1
            },
            NavigationEvent::CursorMoved {
                level: MenuLevel::Root,
                index: 2
            },
        ]
    );

    // Press select on root entry 2.
    let events = rig.run(&[(false, true, true), (false, true, false)]);
    assert_eq!(events, [NavigationEvent::ChildOpened { root_index: 2 }]);
    assert_eq!(rig.nav.level(), MenuLevel::Child);

    // Three clockwise detents down to "Return" (index 3).
    let events = rig.run(&[
        (true, false, false),
        (false, true, false),
        (true, false, false),
    ]);
    assert_eq!(
        events,
        [
            NavigationEvent::CursorMoved {
                level: MenuLevel::Child,
                index: 1
            },
            NavigationEvent::CursorMoved {
                level: MenuLevel::Child,
                index: 2
            },
            NavigationEvent::CursorMoved {
                level: MenuLevel::Child,
                index: 3
            },
        ]
    );

    // Wait out the cooldown, then press select on "Return".
    rig.settle(true, false);
    let events = rig.run(&[(true, false, true)]);
    assert_eq!(events, [NavigationEvent::ChildClosed]);

    // Back at the root list with the cursor where we left it.
    assert_eq!(rig.nav.level(), MenuLevel::Root);
    assert_eq!(rig.nav.root_cursor(), 2);
}

#[test]
fn counter_clockwise_wraps_from_pin_samples() {
    let mut rig = Rig::new();

    // A counter-clockwise detent has B already at A's new level.
    let events = rig.run(&[(true, true, false)]);
    assert_eq!(
        events,
        [NavigationEvent::CursorMoved {
            level: MenuLevel::Root,
            index: 4
        }]
    );
}

#[test]
fn held_select_repeats_once_per_window() {
    let mut rig = Rig::new();

    // Hold the button down for two seconds of ticks. The filter accepts
    // once per cooldown window; the first acceptance opens the child
    // list, and every later one lands on child index 0 - not "Return" -
    // so nothing further happens.
    let ticks = 2_000 / TICK_PERIOD_MS;
    let mut events = Vec::new();
    for _ in 0..ticks {
        events.extend(rig.tick((false, false, true)));
    }

    assert_eq!(events, [NavigationEvent::ChildOpened { root_index: 0 }]);
    assert_eq!(rig.nav.level(), MenuLevel::Child);
    assert_eq!(rig.nav.child_cursor(), 0);
}

#[test]
fn encoder_bounce_without_edges_is_silent() {
    let mut rig = Rig::new();

    // B wiggling with A steady never produces a step or an event.
    let events = rig.run(&[
        (false, true, false),
        (false, false, false),
        (false, true, false),
        (false, false, false),
    ]);
    assert!(events.is_empty());
    assert_eq!(rig.nav.cursor(), 0);
}
