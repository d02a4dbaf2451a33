//! Input handlers: the reaction to each debounced transition.
//!
//! | Input  | Transition | Context write              | Uplink |
//! |--------|------------|----------------------------|--------|
//! | Button | Released   | `last_button_release_ms`   | forced |
//! | Button | Pressed    | -                          | -      |
//! | Door   | Released   | `last_door_opened_ms`      | forced |
//! | Door   | Pressed    | `last_door_closed_ms`      | forced |
//!
//! The two inputs use opposite conventions: a released door contact means
//! the door is open, so only the button has a side-effect-free branch.

use crate::app::events::{ButtonState, InputChange, InputRole, PressType};
use crate::app::ports::{ButtonSource, ModuleId, TimeSource, UplinkScheduler};
use crate::log_noout;

use super::CageModule;

impl CageModule {
    /// Route an Event Source notification to the handler for its role.
    pub fn handle_input(
        &mut self,
        change: InputChange,
        buttons: &impl ButtonSource,
        clock: &impl TimeSource,
        core: &mut impl UplinkScheduler,
    ) {
        match change.role {
            InputRole::UserButton => {
                self.on_button_change(change.state, change.press_type, buttons, core);
            }
            InputRole::DoorContact => {
                self.on_door_change(change.state, change.press_type, clock, core);
            }
        }
    }

    /// Button state changed.
    ///
    /// Only a release matters: the press duration and release time are both
    /// taken from the Event Source's own records, so the stored timestamp
    /// is the moment of the edge rather than the moment it was handled.
    pub fn on_button_change(
        &mut self,
        state: ButtonState,
        _press_type: PressType,
        buttons: &impl ButtonSource,
        core: &mut impl UplinkScheduler,
    ) {
        let Some(io) = self.config.button() else {
            return;
        };

        match state {
            ButtonState::Released => {
                let released_ms = buttons.last_release_ts(io);
                let duration_ms = released_ms.wrapping_sub(buttons.last_press_ts(io));
                log_noout!(
                    "CAGE: button released, duration {} ms, press type {:?}",
                    duration_ms,
                    buttons.last_press_type(io)
                );
                self.ctx.last_button_release_ms = released_ms;
                core.force_uplink(ModuleId::PTI);
            }
            ButtonState::Pressed => {
                log_noout!("CAGE: button pressed");
            }
        }
    }

    /// Door contact changed.  Released = door opened, otherwise closed.
    ///
    /// The Event Source keeps no open/close timestamps for the contact, so
    /// both branches stamp with the clock at handling time.
    pub fn on_door_change(
        &mut self,
        state: ButtonState,
        _press_type: PressType,
        clock: &impl TimeSource,
        core: &mut impl UplinkScheduler,
    ) {
        let now_ms = clock.rel_time_ms();
        if state == ButtonState::Released {
            log_noout!("CAGE: door opened");
            self.ctx.last_door_opened_ms = now_ms;
        } else {
            log_noout!("CAGE: door closed");
            self.ctx.last_door_closed_ms = now_ms;
        }
        core.force_uplink(ModuleId::PTI);
    }
}
