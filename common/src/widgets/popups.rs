//! Non-modal popup overlays for manager acknowledgements.
//!
//! Each popup confirms one handled request:
//! - **Reset popup**: "MAX RESET" after the maximum is cleared
//! - **Zero popup**: "ZERO SET" after zero calibration
//! - **Span popup**: "SPAN SET" after span calibration
//! - **Failure popup**: "CAL FAILED" plus the reason

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::calibration::CalibrationError;
use crate::colors::{RED, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_WHITE, TITLE_STYLE_WHITE};

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 60;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const TITLE_POS: Point = Point::new(CENTER_X, CENTER_Y - 2);
const TITLE_POS_TWO_LINE: Point = Point::new(CENTER_X, CENTER_Y - 8);
const DETAIL_POS: Point = Point::new(CENTER_X, CENTER_Y + 16);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// White-bordered red box shared by all popups.
fn draw_popup_box<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();
}

pub fn draw_reset_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_box(display);
    Text::with_text_style("MAX RESET", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

pub fn draw_zero_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_box(display);
    Text::with_text_style("ZERO SET", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

pub fn draw_span_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_box(display);
    Text::with_text_style("SPAN SET", TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the calibration failure popup with the reason on a second line.
pub fn draw_cal_failed_popup<D>(display: &mut D, error: CalibrationError)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup_box(display);
    Text::with_text_style("CAL FAILED", TITLE_POS_TWO_LINE, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    let reason = match error {
        CalibrationError::NotReady => "SENSOR WARMING UP",
        CalibrationError::SpanTooClose => "SPAN TOO CLOSE TO ZERO",
    };
    Text::with_text_style(reason, DETAIL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
