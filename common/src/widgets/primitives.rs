//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Text, TextStyle};

use crate::colors::{BLACK, WHITE};

/// Draw a cell's background rectangle with a 2px inset.
pub fn draw_cell_background<D>(display: &mut D, x: u32, y: u32, w: u32, h: u32, bg_color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    if w < 4 || h < 4 {
        return;
    }
    Rectangle::new(Point::new(x as i32 + 2, y as i32 + 2), Size::new(w - 4, h - 4))
        .into_styled(PrimitiveStyle::with_fill(bg_color))
        .draw(display)
        .ok();
}

/// Pick the shadow color that contrasts with the text color.
///
/// Light text gets a black shadow, dark text a white one, so the big
/// value stays readable on any band background.
#[inline]
fn shadow_color_for_text(text_color: Rgb565) -> Rgb565 {
    let raw = text_color.into_storage();
    let r = u32::from((raw >> 11) & 0x1F) << 3;
    let g = u32::from((raw >> 5) & 0x3F) << 2;
    let b = u32::from(raw & 0x1F) << 3;
    let luma = (r * 77 + g * 150 + b * 29) >> 8;

    if luma >= 128 { BLACK } else { WHITE }
}

/// Draw text with a bottom-right drop shadow for contrast.
pub fn draw_value_with_outline<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    text_color: Rgb565,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let shadow_style = MonoTextStyle::new(font, shadow_color_for_text(text_color));
    let main_style = MonoTextStyle::new(font, text_color);

    for (dx, dy) in [(1, 1), (1, 0)] {
        let offset_pos = Point::new(position.x + dx, position.y + dy);
        Text::with_text_style(text, offset_pos, shadow_style, text_style)
            .draw(display)
            .ok();
    }

    Text::with_text_style(text, position, main_style, text_style)
        .draw(display)
        .ok();
}
