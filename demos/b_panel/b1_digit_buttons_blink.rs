#![allow(missing_docs)]
#![no_std]
#![no_main]

use core::{convert::Infallible, panic};

use digit_panel::blink::BlinkLed;
use digit_panel::button::PanelButtons;
use digit_panel::led_matrix::LedMatrix;
use digit_panel::{Result, panel};
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    defmt::info!("digit panel: A counts up, B counts down, status LED blinks");

    // BitDogLab wiring: WS2812 data on GPIO7, button A on GPIO5,
    // button B on GPIO6, red status LED on GPIO13.
    let matrix = LedMatrix::new(p.PIO0, p.PIN_7)?;
    let buttons = PanelButtons::new(p.PIN_5, p.PIN_6, spawner)?;
    let blink = BlinkLed::new(p.PIN_13);

    panel::run(matrix, buttons, blink).await
}
