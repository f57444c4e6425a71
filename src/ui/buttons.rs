//! GPIO button input with async debouncing and auto-repeat.
//!
//! Five physical buttons (active-low with internal pull-up): INC, DEC,
//! SELECT, ESCAPE and HELP. Each one is handled by an async task that waits
//! for a GPIO edge, debounces it and queues a [`ButtonEvent`]. Holding INC
//! or DEC keeps queueing events with a larger step until the button is
//! released.
//!
//! The menu loop drains the queue through [`ChannelNav`], one event per tick.

use defmt::info;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer, WithTimeout};
use reflow_menu::config::{
    BUTTON_DEBOUNCE_MS, BUTTON_QUEUE_DEPTH, BUTTON_REPEAT_DELAY_MS, BUTTON_REPEAT_DELTA,
    BUTTON_REPEAT_INTERVAL_MS, DEFAULT_INC_DELTA,
};
use reflow_menu::menu::{NavAction, NavInput};
use reflow_menu::ui::{Button, ButtonEvent};

/// Queue between the button tasks and the menu loop.
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, sends the event,
/// then waits for release (auto-repeating if the button supports it).
pub async fn button_task(
    pin: AnyPin,
    button: Button,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>,
) -> ! {
    let mut input = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        input.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if input.is_high() {
            continue;
        }

        info!("Button: {}", button);
        tx.send(ButtonEvent {
            button,
            delta: DEFAULT_INC_DELTA,
        })
        .await;

        if button.repeats() {
            let mut hold = Duration::from_millis(BUTTON_REPEAT_DELAY_MS);
            while input.wait_for_rising_edge().with_timeout(hold).await.is_err() {
                tx.send(ButtonEvent {
                    button,
                    delta: BUTTON_REPEAT_DELTA,
                })
                .await;
                hold = Duration::from_millis(BUTTON_REPEAT_INTERVAL_MS);
            }
        } else {
            input.wait_for_rising_edge().await;
        }
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}

/// Navigation input fed by the button queue. Never blocks.
pub struct ChannelNav {
    rx: Receiver<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>,
}

impl ChannelNav {
    pub fn new() -> Self {
        Self {
            rx: BUTTON_EVENTS.receiver(),
        }
    }
}

impl NavInput for ChannelNav {
    fn next_action(&mut self, inc_delta: &mut u16) -> NavAction {
        match self.rx.try_receive() {
            Ok(event) => {
                *inc_delta = event.delta;
                event.button.action()
            }
            Err(_) => NavAction::None,
        }
    }
}
