//! Active-high buzzer behind a push-pull output pin.

use embedded_hal::digital::OutputPin;

use crate::bringup::BuzzerPort;

/// Buzzer driver. The output is assumed active-high: driving the pin high
/// sounds the buzzer, driving it low silences it.
pub struct Buzzer<P> {
    pin: P,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Sound the buzzer.
    pub fn on(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    /// Silence the buzzer.
    pub fn off(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    pub fn set(&mut self, active: bool) -> Result<(), P::Error> {
        if active {
            self.on()
        } else {
            self.off()
        }
    }

    /// Give the output pin back to the caller.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> BuzzerPort for Buzzer<P> {
    type Error = P::Error;

    fn off(&mut self) -> Result<(), Self::Error> {
        Buzzer::off(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn off_drives_the_pin_low() {
        let mut pin = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        Buzzer::new(pin.clone()).off().unwrap();

        pin.done();
    }

    #[test]
    fn on_drives_the_pin_high() {
        let mut pin = PinMock::new(&[PinTransaction::set(PinState::High)]);

        Buzzer::new(pin.clone()).on().unwrap();

        pin.done();
    }

    #[test]
    fn set_maps_to_pin_levels() {
        let mut pin = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);

        let mut buzzer = Buzzer::new(pin.clone());
        buzzer.set(true).unwrap();
        buzzer.set(false).unwrap();

        pin.done();
    }
}
