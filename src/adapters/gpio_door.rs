//! GPIO door adapter over `embedded-hal` 1.0 digital pins.
//!
//! | Pin      | Direction | Level meaning              |
//! |----------|-----------|----------------------------|
//! | `sensor` | input     | high = door closed (reed)  |
//! | `latch`  | output    | high = solenoid engaged    |
//!
//! The [`Door`] port is infallible, so pin errors are resolved here:
//! a failed sensor read reports the door as **open** (the controller then
//! refuses to lock an unknown door), and a failed latch write is logged.

use core::cell::RefCell;

use embedded_hal::digital::{InputPin, OutputPin};
use log::{error, warn};

use crate::app::ports::Door;

pub struct GpioDoor<S, L> {
    // `InputPin::is_high` needs `&mut`, `Door::closed` only has `&self`.
    sensor: RefCell<S>,
    latch: L,
}

impl<S: InputPin, L: OutputPin> GpioDoor<S, L> {
    pub fn new(sensor: S, latch: L) -> Self {
        Self {
            sensor: RefCell::new(sensor),
            latch,
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (S, L) {
        (self.sensor.into_inner(), self.latch)
    }
}

impl<S: InputPin, L: OutputPin> Door for GpioDoor<S, L> {
    fn closed(&self) -> bool {
        match self.sensor.borrow_mut().is_high() {
            Ok(high) => high,
            Err(e) => {
                warn!("DOOR gpio: sensor read failed ({:?}), assuming open", e);
                false
            }
        }
    }

    fn lock(&mut self) {
        if let Err(e) = self.latch.set_high() {
            error!("DOOR gpio: latch engage failed: {:?}", e);
        }
    }

    fn unlock(&mut self) {
        if let Err(e) = self.latch.set_low() {
            error!("DOOR gpio: latch release failed: {:?}", e);
        }
    }
}
