//! Display SPI configuration.

use embassy_rp::spi;

/// SPI clock for the ST7789 (62.5 MHz, the panel's datasheet maximum).
pub const DISPLAY_SPI_HZ: u32 = 62_500_000;

pub fn display_spi_config() -> spi::Config {
    let mut config = spi::Config::default();
    config.frequency = DISPLAY_SPI_HZ;
    config
}
