//! Header bar and divider line rendering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::GRAY;
use crate::config::{CENTER_X, HEADER_HEIGHT, MAX_CELL_Y, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_GREEN, LABEL_STYLE_YELLOW, RIGHT_ALIGNED, TITLE_STYLE_WHITE};

const HEADER_TITLE_POS: Point = Point::new(CENTER_X, 19);
const HEADER_STATE_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);
const HEADER_RECT_POS: Point = Point::new(0, 0);
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

const DIV_START: Point = Point::new(0, MAX_CELL_Y as i32);
const DIV_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, MAX_CELL_Y as i32);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

/// Draw the header bar with the readiness indicator.
pub fn draw_header<D>(display: &mut D, ready: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("CO MONITOR", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let (state, style) = if ready {
        ("READY", LABEL_STYLE_GREEN)
    } else {
        ("WARMUP", LABEL_STYLE_YELLOW)
    };
    Text::with_text_style(state, HEADER_STATE_POS, style, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the divider line between the CURRENT and MAX cells.
pub fn draw_divider<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(DIV_START, DIV_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}
