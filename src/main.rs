//! reflow-menu firmware for the nRF52840.
//!
//! Wires the menu engine to five front-panel buttons and an SSD1306 OLED,
//! then advances it every [`TICK_INTERVAL_MS`]. SELECT starts the menu;
//! it closes itself after [`MENU_TIMEOUT_MS`] without input.

#![no_std]
#![no_main]

#[path = "ui/buttons.rs"]
mod buttons;
#[path = "ui/display.rs"]
mod display;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use reflow_menu::config::{MENU_TIMEOUT_MS, TICK_INTERVAL_MS};
use reflow_menu::oven::{Oven, MENU};
use reflow_menu::ui::Button;
use reflow_menu::Menu;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("reflow-menu starting");

    let panel: [(AnyPin, Button); 5] = [
        (p.P0_11.degrade(), Button::Inc),
        (p.P0_12.degrade(), Button::Dec),
        (p.P0_24.degrade(), Button::Select),
        (p.P0_25.degrade(), Button::Escape),
        (p.P0_02.degrade(), Button::Help),
    ];
    for (pin, button) in panel {
        unwrap!(spawner.spawn(button_task(pin, button)));
    }

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let oled = display::LineDisplay::new(display::init(i2c));

    let mut menu = unwrap!(Menu::new(MENU, Oven::default(), buttons::ChannelNav::new(), oled));
    menu.set_auto_start(true);
    menu.set_timeout(MENU_TIMEOUT_MS);

    loop {
        menu.run(false, Instant::now().as_millis());

        if let Some(job) = menu.context_mut().take_job() {
            info!("job requested: {}", job);
        }

        Timer::after_millis(TICK_INTERVAL_MS).await;
    }
}

#[embassy_executor::task(pool_size = 5)]
async fn button_task(pin: AnyPin, button: Button) -> ! {
    buttons::button_task(pin, button, buttons::BUTTON_EVENTS.sender()).await
}
