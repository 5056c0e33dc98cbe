//! Expansion I/O subsystem: the TCA9554 expander plus the buzzer.

use core::cell::RefCell;

use critical_section::{with, Mutex};
use esp_hal::gpio::Output;
use exio::{Buzzer, ExpansionIo, Tca9554};

use super::{DriverCell, DriverError, DriverHandle};
use crate::drivers::i2c::{I2cBus, I2cHandle};

pub type ExpansionSubsystem = ExpansionIo<Tca9554<I2cBus>, Buzzer<Output<'static>>>;

static EXIO_DRIVER: DriverCell<ExpansionSubsystem> = Mutex::new(RefCell::new(None));

pub type ExioHandle = DriverHandle<ExpansionSubsystem>;

/// Take ownership of the I2C bus, run the bring-up sequence (baseline pin
/// configuration, then buzzer off) and register the subsystem.
pub fn init_exio(i2c: &I2cHandle, buzzer_pin: Output<'static>) -> Result<ExioHandle, DriverError> {
    let bus = i2c.take().ok_or(DriverError::NotReady)?;

    if with(|cs| EXIO_DRIVER.borrow_ref(cs).is_some()) {
        let _ = i2c.replace(bus);
        return Err(DriverError::AlreadyInitialized);
    }

    let mut subsystem = ExpansionIo::new(Tca9554::new(bus), Buzzer::new(buzzer_pin));
    if let Err(err) = subsystem.initialize() {
        esp_println::println!("Expansion I/O bring-up failed: {:?}", err);
        return Err(DriverError::InitFailed("exio bring-up"));
    }

    with(|cs| {
        let mut cell = EXIO_DRIVER.borrow_ref_mut(cs);
        *cell = Some(subsystem);
    });

    Ok(ExioHandle::new(&EXIO_DRIVER))
}
