//! Status page: calibration constants, counters and the event log.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::eventlog::EventLog;
use crate::manager::ManagerStatus;
use crate::styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED, TITLE_STYLE_WHITE};

const MARGIN_X: i32 = 10;
const TITLE_Y: i32 = 24;
const ROWS_Y: i32 = 48;
const ROW_STEP: i32 = 14;
const LOG_GAP: i32 = 10;

/// Draw the full Status page.
///
/// Everything redraws each frame; the page is plain text and the
/// counters tick anyway.
pub fn draw_status_page<D>(display: &mut D, status: &ManagerStatus, log: &EventLog, uptime_secs: u32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("STATUS", Point::new(MARGIN_X, TITLE_Y), TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut y = ROWS_Y;
    let mut row: String<40> = String::new();

    let _ = write!(row, "STATE    {}", if status.ready { "READY" } else { "WARMUP" });
    draw_row(display, &row, &mut y);

    row.clear();
    let _ = write!(row, "ZERO     {:.0} cts", status.zero_counts);
    draw_row(display, &row, &mut y);

    row.clear();
    let _ = write!(row, "SPAN     {:.0} cts", status.span_counts);
    draw_row(display, &row, &mut y);

    row.clear();
    let _ = write!(row, "SAMPLES  {}", status.sample_count);
    draw_row(display, &row, &mut y);

    row.clear();
    let _ = write!(row, "UPTIME   {}s", uptime_secs);
    draw_row(display, &row, &mut y);

    y += LOG_GAP;
    draw_row(display, "EVENTS", &mut y);
    if log.is_empty() {
        draw_row(display, "  (none)", &mut y);
    } else {
        for line in log.iter() {
            row.clear();
            let _ = write!(row, "  {line}");
            draw_row(display, &row, &mut y);
        }
    }
}

fn draw_row<D>(display: &mut D, text: &str, y: &mut i32)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, Point::new(MARGIN_X, *y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    *y += ROW_STEP;
}
