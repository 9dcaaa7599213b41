//! ST7789 display driver for the Pico Display Pack (320x240).
//!
//! Single static framebuffer with sequential render-then-flush. The CO
//! readout changes a few times per second, so the render loop draws
//! into the framebuffer and awaits one DMA flush per frame; there is no
//! double-buffer pipeline to coordinate.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

/// Display dimensions (landscape mode after 90 degree rotation).
pub const WIDTH: usize = 320;
pub const HEIGHT: usize = 240;
const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

/// Static framebuffer (153,600 bytes), owned by the single driver
/// instance.
static mut FRAMEBUFFER: [u8; BUFFER_SIZE] = [0u8; BUFFER_SIZE];

// ST7789 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// ST7789 driver: owns the SPI peripheral, the control pins and the
/// framebuffer. Implements `DrawTarget` so the shared widgets draw
/// straight into the framebuffer.
pub struct St7789<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
    framebuffer: &'static mut [u8; BUFFER_SIZE],
}

impl<'d> St7789<'d> {
    /// Create the driver.
    ///
    /// # Safety
    /// Must only be called once; the static framebuffer is owned by the
    /// returned instance.
    pub unsafe fn new(spi: Spi<'d, SPI0, Async>, dc: Output<'d>, cs: Output<'d>) -> Self {
        Self {
            spi,
            dc,
            cs,
            framebuffer: unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) },
        }
    }

    /// Initialize the panel.
    pub async fn init(&mut self) {
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        self.write_command(SLPOUT).await;
        Timer::after_millis(10).await;

        // RGB565 (16-bit) pixel format
        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // 90 degree rotation (landscape): MV=1, MX=1
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MV | MADCTL_MX]).await;

        // Inversion on (required for this panel)
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        self.write_command(DISPON).await;
        Timer::after_millis(10).await;

        // Window is the full screen for the lifetime of the driver
        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16).await;
    }

    /// Send a command byte (DC low during transfer).
    async fn write_command(&mut self, cmd: u8) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high during transfer).
    async fn write_data(&mut self, data: &[u8]) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the drawing window.
    async fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        let x1 = x + w - 1;
        let y1 = y + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x >> 8) as u8, x as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(RASET).await;
        self.write_data(&[(y >> 8) as u8, y as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Flush the framebuffer to the panel via DMA.
    pub async fn flush(&mut self) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[RAMWR]).await.ok();
        self.dc.set_high();
        self.spi.write(&self.framebuffer[..]).await.ok();
        self.cs.set_high();
    }

    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let bytes = RawU16::from(color).into_inner().to_be_bytes();
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for St7789<'_> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for St7789<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.size == Size::zero() {
            return Ok(());
        }

        let bytes = RawU16::from(color).into_inner().to_be_bytes();
        let x0 = drawable.top_left.x as usize;
        let width = drawable.size.width as usize;

        for y in drawable.rows() {
            let row_start = (y as usize * WIDTH + x0) * 2;
            let row = &mut self.framebuffer[row_start..row_start + width * 2];
            for pixel in row.chunks_exact_mut(2) {
                pixel[0] = bytes[0];
                pixel[1] = bytes[1];
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let bytes = RawU16::from(color).into_inner().to_be_bytes();
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel[0] = bytes[0];
            pixel[1] = bytes[1];
        }
        Ok(())
    }
}
