#![allow(missing_docs)]
#![no_std]
#![no_main]

use core::{convert::Infallible, panic};

use digit_panel::led_matrix::LedMatrix;
use digit_panel::panel::INTENSITY;
use digit_panel::{Result, digit, digit::Digit};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    defmt::info!("digit cycle: counting 0-9 forever");

    // BitDogLab wiring: WS2812 data on GPIO7.
    let mut matrix = LedMatrix::new(p.PIO0, p.PIN_7)?;

    let mut current = Digit::ZERO;
    loop {
        matrix.write_frame(&digit::render(current, INTENSITY)).await;
        Timer::after(Duration::from_millis(500)).await;
        current = current.next();
    }
}
