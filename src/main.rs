//! knobmenu firmware entry point.
//!
//! One poll-driven loop owns every input and the display: each tick
//! samples the encoder pins, the select button and the monotonic clock,
//! runs the decoded results through the navigator, and redraws the OLED
//! when a navigation event came out. Inputs sampled at the start of a
//! tick are fully consumed before the next tick begins.

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use knobmenu::config;
use knobmenu::input::button::PressFilter;
use knobmenu::input::encoder::QuadratureDecoder;
use knobmenu::menu::{MenuLevel, MenuModel, NavigationEvent, Navigator};
use knobmenu::ui::display::{self, Display};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Redraw the view a navigation event made current.
fn render<I2C>(display: &mut Display<I2C>, nav: &Navigator, event: NavigationEvent)
where
    I2C: embedded_hal::i2c::I2c,
{
    match event {
        NavigationEvent::CursorMoved {
            level: MenuLevel::Root,
            index,
        } => display::draw_root_list(display, nav.model(), index),
        NavigationEvent::CursorMoved {
            level: MenuLevel::Child,
            index,
        } => display::draw_child_list(display, nav.model(), nav.root_cursor(), index),
        NavigationEvent::ChildOpened { root_index } => {
            display::draw_child_list(display, nav.model(), root_index, 0)
        }
        NavigationEvent::ChildClosed => {
            display::draw_root_list(display, nav.model(), nav.root_cursor())
        }
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("knobmenu starting");

    // Encoder channels come from a detented module with its own output
    // drivers; the select button is a bare switch to ground.
    let enc_a = Input::new(p.P0_03, Pull::None);
    let enc_b = Input::new(p.P0_04, Pull::None);
    let select = Input::new(p.P0_24, Pull::Up);

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = display::init(i2c);

    // Bad geometry means undefined wraparound arithmetic; refuse to run.
    let model = unwrap!(MenuModel::new(
        config::ROOT_ITEM_COUNT,
        config::CHILD_ITEM_COUNT
    ));

    let mut nav = Navigator::new(model);
    let mut decoder = QuadratureDecoder::new(enc_a.is_high());
    let mut filter = PressFilter::new();

    display::draw_root_list(&mut display, nav.model(), nav.cursor());
    info!("menu ready: {} root / {} child items", config::ROOT_ITEM_COUNT, config::CHILD_ITEM_COUNT);

    let mut ticker = Ticker::every(Duration::from_millis(config::TICK_PERIOD_MS));
    loop {
        ticker.next().await;

        // All raw inputs for this tick, sampled together.
        let a = enc_a.is_high();
        let b = enc_b.is_high();
        let pressed = select.is_low();
        let now_ms = Instant::now().as_millis();

        if let Some(event) = nav.apply_step(decoder.update(a, b)) {
            info!("nav: {}", event);
            render(&mut display, &nav, event);
        }

        if filter.poll(pressed, now_ms, config::BUTTON_DEBOUNCE_MS) {
            if let Some(event) = nav.apply_activate() {
                info!("nav: {}", event);
                render(&mut display, &nav, event);
            }
        }
    }
}
