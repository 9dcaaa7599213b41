//! The two reading cells: CURRENT ppm on top, MAX ppm below.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, RED, WHITE};
use crate::config::{CELL_HEIGHT, CURRENT_CELL_Y, MAX_CELL_Y, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_FONT, LABEL_STYLE_WHITE, VALUE_FONT, VALUE_FONT_MEDIUM};
use crate::thresholds::{co_color, is_danger_co};
use crate::widgets::primitives::{draw_cell_background, draw_value_with_outline};

/// Placeholder shown before the first reading (sensor warming up).
const NO_READING: &str = "----";

/// Draw the CURRENT concentration cell.
///
/// The background follows the CO band; at danger level the cell blinks
/// between the red band color and inverted white.
pub fn draw_current_cell<D>(display: &mut D, ppm: Option<f32>, blink_on: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let (bg, text_color) = match ppm {
        Some(ppm) if is_danger_co(ppm) && !blink_on => (WHITE, RED),
        Some(ppm) => co_color(ppm),
        None => (BLACK, WHITE),
    };
    draw_cell_background(display, 0, CURRENT_CELL_Y, SCREEN_WIDTH, CELL_HEIGHT, bg);

    let center_x = (SCREEN_WIDTH / 2) as i32;
    let center_y = (CURRENT_CELL_Y + CELL_HEIGHT / 2) as i32;

    let label_style = MonoTextStyle::new(LABEL_FONT, text_color);
    Text::with_text_style(
        "CURRENT",
        Point::new(center_x, CURRENT_CELL_Y as i32 + 14),
        label_style,
        CENTERED,
    )
    .draw(display)
    .ok();

    let mut value_str: String<16> = String::new();
    match ppm {
        Some(ppm) => {
            let _ = write!(value_str, "{ppm:.1}");
        }
        None => {
            let _ = value_str.push_str(NO_READING);
        }
    }
    draw_value_with_outline(
        display,
        &value_str,
        Point::new(center_x, center_y + 8),
        VALUE_FONT,
        text_color,
        CENTERED,
    );

    Text::with_text_style(
        "PPM CO",
        Point::new(center_x, (CURRENT_CELL_Y + CELL_HEIGHT) as i32 - 10),
        label_style,
        CENTERED,
    )
    .draw(display)
    .ok();
}

/// Draw the MAX concentration cell.
///
/// Stays on a black background regardless of band: the maximum is a
/// record, not an alarm.
pub fn draw_max_cell<D>(display: &mut D, max_ppm: Option<f32>)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_cell_background(display, 0, MAX_CELL_Y, SCREEN_WIDTH, CELL_HEIGHT, BLACK);

    let center_x = (SCREEN_WIDTH / 2) as i32;
    let center_y = (MAX_CELL_Y + CELL_HEIGHT / 2) as i32;

    Text::with_text_style(
        "MAX",
        Point::new(center_x, MAX_CELL_Y as i32 + 14),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();

    let mut value_str: String<16> = String::new();
    match max_ppm {
        Some(max_ppm) => {
            let _ = write!(value_str, "{max_ppm:.1}");
        }
        None => {
            let _ = value_str.push_str(NO_READING);
        }
    }
    draw_value_with_outline(
        display,
        &value_str,
        Point::new(center_x, center_y + 6),
        VALUE_FONT_MEDIUM,
        WHITE,
        CENTERED,
    );

    Text::with_text_style(
        "PPM CO SINCE RESET",
        Point::new(center_x, (MAX_CELL_Y + CELL_HEIGHT) as i32 - 10),
        LABEL_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
}
