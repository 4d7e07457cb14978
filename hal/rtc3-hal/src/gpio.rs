//! GPIO pin abstractions
//!
//! The RTC only needs one digital input: its interrupt / square-wave line.

use core::cell::RefCell;

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        T::is_high(self)
    }
}

/// Adapter from an `embedded-hal` 1.0 input pin to [`InputPin`]
///
/// `embedded-hal` reads take `&mut self` and may fail; a failed read is
/// reported as low.
pub struct EhInputPin<P> {
    pin: RefCell<P>,
}

impl<P> EhInputPin<P> {
    /// Wrap an `embedded-hal` input pin
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Give back the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: embedded_hal::digital::InputPin> InputPin for EhInputPin<P> {
    fn is_high(&self) -> bool {
        let mut pin = self.pin.borrow_mut();
        embedded_hal::digital::InputPin::is_high(&mut *pin).unwrap_or(false)
    }
}
