//! Embedded entry point and render loop (RP2350 only).

use comonitor_common::SensorManager;
use comonitor_common::colors::BLACK;
use comonitor_common::eventlog::EventLog;
use comonitor_common::pages::Page;
use comonitor_common::reading::CoReading;
use comonitor_common::render::RenderState;
use comonitor_common::widgets::{
    draw_cal_failed_popup,
    draw_current_cell,
    draw_divider,
    draw_header,
    draw_max_cell,
    draw_reset_popup,
    draw_span_popup,
    draw_status_page,
    draw_zero_popup,
};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::prelude::*;
use {defmt_rtt as _, panic_probe as _};

use crate::display::display_spi_config;
use crate::screens::draw_boot_screen;
use crate::st7789::St7789;
use crate::state::{DebouncedButton, Popup, process_buttons};
use crate::tasks::{EVENTS, READINGS, REQUESTS, STATUS, sensor_task};

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => InterruptHandler;
});

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"comonitor-pico2"),
    embassy_rp::binary_info::rp_program_description!(c"Breath CO monitor on Pico Display Pack"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Render loop frame interval. Readings arrive at 4 Hz; rendering at
/// 20 Hz keeps popups and the danger blink smooth.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// How long the boot splash stays up.
const SPLASH: Duration = Duration::from_millis(1500);

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("CO monitor starting...");

    let p = embassy_rp::init(Default::default());

    // Display Pack pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // Async SPI with DMA (TX-only, the display has no MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, display_spi_config());

    // SAFETY: the only St7789 instance, created once at startup
    let mut display = unsafe { St7789::new(spi, dc, cs) };
    display.init().await;
    info!("Display initialized");

    display.clear(BLACK).ok();
    draw_boot_screen(&mut display);
    display.flush().await;

    // Analog front-end on GPIO26 (ADC0)
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let adc_channel = AdcChannel::new_pin(p.PIN_26, Pull::None);
    spawner.spawn(sensor_task(adc, adc_channel)).unwrap();
    info!("Sensor task spawned");

    // Buttons (active-low with internal pull-up): A=12, B=13, X=14, Y=15
    let mut btn_a = DebouncedButton::new(Input::new(p.PIN_12, Pull::Up));
    let mut btn_b = DebouncedButton::new(Input::new(p.PIN_13, Pull::Up));
    let mut btn_x = DebouncedButton::new(Input::new(p.PIN_14, Pull::Up));
    let mut btn_y = DebouncedButton::new(Input::new(p.PIN_15, Pull::Up));

    Timer::after(SPLASH).await;
    display.clear(BLACK).ok();

    // UI state
    let mut current_page = Page::Dashboard;
    let mut active_popup: Option<Popup> = None;
    let mut render_state = RenderState::new();
    let mut event_log = EventLog::new();
    let mut latest: Option<CoReading> = None;
    let mut manager_status = SensorManager::new().status();
    let started = Instant::now();

    let mut readings = READINGS.dyn_receiver().unwrap();
    let mut status_rx = STATUS.dyn_receiver().unwrap();

    info!("Render loop starting");

    loop {
        // Time-based blink cycle (200ms per state)
        let elapsed_ms = started.elapsed().as_millis() as u32;
        let blink_on = (elapsed_ms / 200).is_multiple_of(2);

        // Buttons: each press forwards at most one request; the labels
        // only move when the manager publishes the next reading
        let input = process_buttons(&mut btn_a, &mut btn_b, &mut btn_x, &mut btn_y, current_page);
        if let Some(request) = input.request
            && REQUESTS.try_send(request).is_err()
        {
            warn!("Request queue full, dropping press");
        }
        if let Some(page) = input.new_page {
            current_page = page;
            active_popup = None;
            display.clear(BLACK).ok();
            render_state.mark_display_cleared();
            info!(
                "Page: {}",
                match page {
                    Page::Dashboard => "Dashboard",
                    Page::Status => "Status",
                }
            );
        }

        // Drain manager acknowledgements into popups and the event log
        while let Ok(event) = EVENTS.try_receive() {
            info!("Manager event: {}", event.label());
            event_log.push(event.label());
            active_popup = Some(Popup::from_event(event, Instant::now()));
        }

        // Latest published state
        if let Some(reading) = readings.try_get() {
            latest = Some(reading);
        }
        if let Some(status) = status_rx.try_get() {
            manager_status = status;
        }

        // Check popup expiration
        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }
        render_state.update_popup(active_popup.as_ref().map(Popup::kind));

        if render_state.is_first_frame() || render_state.popup_just_closed() {
            display.clear(BLACK).ok();
        }

        match current_page {
            Page::Dashboard => {
                if render_state.check_header_dirty(manager_status.ready) {
                    draw_header(&mut display, manager_status.ready);
                }

                draw_current_cell(&mut display, latest.map(|r| r.ppm), blink_on);
                draw_max_cell(&mut display, latest.map(|r| r.max_ppm));

                if render_state.need_divider() {
                    draw_divider(&mut display);
                    render_state.mark_divider_drawn();
                }

                if let Some(ref popup) = active_popup {
                    match popup {
                        Popup::MaxReset(_) => draw_reset_popup(&mut display),
                        Popup::ZeroSet(_) => draw_zero_popup(&mut display),
                        Popup::SpanSet(_) => draw_span_popup(&mut display),
                        Popup::CalFailed(_, err) => draw_cal_failed_popup(&mut display, *err),
                    }
                }
            }

            Page::Status => {
                // Counters shrink and grow; clear the page every frame
                display.clear(BLACK).ok();
                draw_status_page(&mut display, &manager_status, &event_log, elapsed_ms / 1000);
            }
        }

        display.flush().await;
        render_state.end_frame();

        Timer::after(FRAME_INTERVAL).await;
    }
}
