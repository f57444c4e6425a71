//! Table-driven menu and value-edit engine for a reflow oven controller.
//!
//! Everything here is pure logic that builds on the host, so the whole
//! engine is tested with `cargo test` (no hardware required). The nRF52840
//! firmware in `main.rs` links this library and supplies buttons and an
//! OLED display as the engine's collaborators.
//!
//! Usage: `cargo test` on the host,
//! `cargo build --release --features embedded --target thumbv7em-none-eabihf`
//! for the firmware.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod inactivity;
pub mod menu;
pub mod oven;
pub mod ui;

pub use error::{DefinitionError, Error};
pub use menu::Menu;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::inactivity::{timed_out, InactivityTimer};
    use crate::ui::input_logic::{select_next, select_prev};
    use crate::ui::Button;
    use crate::menu::NavAction;

    // ════════════════════════════════════════════════════════════════════════
    // Cursor stepping
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn input_logic_clamps_at_boundaries() {
        assert_eq!(select_prev(10, 10, 12, false), 10);
        assert_eq!(select_prev(11, 10, 12, false), 10);
        assert_eq!(select_next(11, 10, 12, false), 12);
        assert_eq!(select_next(12, 10, 12, false), 12);
    }

    #[test]
    fn input_logic_wraps_when_enabled() {
        assert_eq!(select_prev(10, 10, 12, true), 12);
        assert_eq!(select_next(12, 10, 12, true), 10);
        assert_eq!(select_next(0, 0, 0, true), 0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Inactivity policy
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn inactivity_expires_exactly_at_timeout() {
        assert!(!timed_out(1000, 0, 999));
        assert!(timed_out(1000, 0, 1000));
        assert!(timed_out(1000, 500, 2000));
    }

    #[test]
    fn inactivity_disabled_never_expires() {
        assert!(!timed_out(0, 0, u64::MAX));
    }

    #[test]
    fn inactivity_clock_going_backwards_is_not_a_timeout() {
        assert!(!timed_out(1000, 5000, 10));
    }

    #[test]
    fn inactivity_timer_restarts_on_activity() {
        let mut timer = InactivityTimer::new(100);
        timer.restart(50);
        assert!(!timer.expired(149));
        assert!(timer.expired(150));

        timer.set_timeout(0);
        assert_eq!(timer.timeout(), 0);
        assert!(!timer.expired(10_000));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Buttons
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn buttons_map_to_nav_actions() {
        assert_eq!(Button::Select.action(), NavAction::Sel);
        assert_eq!(Button::Escape.action(), NavAction::Esc);
        assert!(Button::Inc.repeats());
        assert!(!Button::Help.repeats());
    }
}
