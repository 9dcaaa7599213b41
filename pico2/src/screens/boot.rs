//! Boot splash screen.
//!
//! Shown once at power-on while the sensor cell starts its warmup.

use comonitor_common::config::{CENTER_X, CENTER_Y};
use comonitor_common::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 30);
const VERSION_POS: Point = Point::new(CENTER_X, CENTER_Y - 6);
const HINT_POS: Point = Point::new(CENTER_X, CENTER_Y + 30);

pub fn draw_boot_screen<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("CO MONITOR", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    Text::with_text_style(
        concat!("v", env!("CARGO_PKG_VERSION")),
        VERSION_POS,
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        "A ZERO  B SPAN  X RESET  Y PAGE",
        HINT_POS,
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}
