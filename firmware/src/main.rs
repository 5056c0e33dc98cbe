#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_bootloader_esp_idf::esp_app_desc;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::xtensa_lx_rt::entry;

mod drivers;

use drivers::exio::init_exio;
use drivers::i2c::init_i2c0;

esp_app_desc!(); // defaults are fine

#[entry]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());

    esp_println::println!(
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let esp_hal::peripherals::Peripherals {
        I2C0,
        GPIO10,
        GPIO11,
        GPIO42,
        ..
    } = peripherals;

    // Buzzer is wired directly to GPIO42 on this board revision; start it low
    // so nothing sounds before the bring-up sequence runs.
    let buzzer_pin = Output::new(GPIO42, Level::Low, OutputConfig::default());

    let exio = match init_i2c0(I2C0, GPIO11, GPIO10) {
        Ok(i2c) => match init_exio(&i2c, buzzer_pin) {
            Ok(handle) => {
                esp_println::println!("Expansion I/O ready");
                Some(handle)
            }
            Err(err) => {
                // Boot continues in degraded mode: peripherals behind the
                // expander stay unconfigured but the rest of the board works.
                esp_println::println!("Expansion I/O unavailable: {:?}", err);
                None
            }
        },
        Err(err) => {
            esp_println::println!("I2C initialization failed: {:?}", err);
            None
        }
    };

    let mut last_levels: Option<u8> = None;

    loop {
        if let Some(handle) = exio.as_ref() {
            match handle.try_with(|io| io.expander_mut().read_inputs()) {
                Some(Ok(levels)) => {
                    if last_levels != Some(levels) {
                        last_levels = Some(levels);
                        esp_println::println!("EXIO pin levels: {:#010b}", levels);
                    }
                }
                Some(Err(err)) => {
                    esp_println::println!("EXIO read-back failed: {:?}", err);
                }
                None => {}
            }
        }

        // Simple delay (blocking)
        for _ in 0..1_000_000 {
            core::hint::spin_loop();
        }
    }
}
