//! This example sweeps the brightness of a light, then toggles it off and on.
//! The light address can be given as a command line argument.

use hue_ble::{Error, Session};
use tokio::time::{sleep, Duration};

const DEFAULT_ADDRESS: &str = "CB:E0:41:A5:E6:42";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

    pretty_env_logger::init();

    let mut light = Session::new(address);

    for brightness in (10..250).step_by(10) {
        light.set_brightness(brightness).await?;
        sleep(Duration::from_millis(100)).await;

        println!("{}", light.get_brightness().await?);
    }

    light.turn_off().await?;
    sleep(Duration::from_secs(2)).await;
    light.turn_on().await?;

    println!("{}", light.is_on().await?);

    Ok(())
}
