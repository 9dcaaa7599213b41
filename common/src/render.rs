//! Render state tracking for optimized display updates.
//!
//! Tracks the little bit of cross-frame state the render loop needs to
//! avoid redrawing static chrome every frame:
//!
//! - Header conditional redraw (warmup indicator change, popup close,
//!   page switch)
//! - Divider draw-once tracking
//! - Popup cleanup (full clear when a popup disappears or switches)
//!
//! Cells redraw every frame; their values move with each sample.

/// Tracks render state for optimized display updates.
pub struct RenderState {
    /// Whether the divider has been drawn (only needs to happen once).
    divider_drawn: bool,

    /// Previous readiness shown in the header (WARMUP vs READY).
    prev_ready: bool,

    /// Previous popup kind (discriminant only, for detecting switches).
    prev_popup_kind: Option<u8>,

    /// Whether a popup closed or switched this frame (clear remnants).
    popup_just_closed: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g., page switch).
    display_cleared: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            divider_drawn: false,
            prev_ready: false,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the divider needs drawing.
    #[inline]
    pub const fn need_divider(&self) -> bool {
        !self.divider_drawn || self.first_frame || self.display_cleared
    }

    /// Mark the divider as drawn.
    #[inline]
    pub fn mark_divider_drawn(&mut self) {
        self.divider_drawn = true;
    }

    /// Check if the header needs redrawing.
    ///
    /// The header only changes when the readiness indicator flips, so
    /// it is dirty on that flip plus the usual full-redraw conditions.
    pub fn check_header_dirty(&mut self, ready: bool) -> bool {
        let dirty = self.first_frame
            || self.popup_just_closed
            || self.display_cleared
            || ready != self.prev_ready;
        self.prev_ready = ready;
        dirty
    }

    /// Update popup state with the current popup kind discriminant.
    ///
    /// Detects both popup close (becomes `None`) and popup switch (kind
    /// changes); both require a display clear to remove remnants.
    pub fn update_popup(&mut self, popup_kind: Option<u8>) {
        let changed = popup_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = popup_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
            self.divider_drawn = false;
        }
    }

    /// Check if a popup just closed this frame.
    #[inline]
    pub const fn popup_just_closed(&self) -> bool {
        self.popup_just_closed
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Mark that the display was cleared externally (page switch).
    pub fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.divider_drawn = false;
    }

    /// Call at end of frame to reset per-frame flags.
    pub fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_draws_everything() {
        let mut state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.need_divider());
        assert!(state.check_header_dirty(false));
        assert!(!state.popup_just_closed());
    }

    #[test]
    fn test_divider_draw_once() {
        let mut state = RenderState::new();
        state.end_frame();
        assert!(state.need_divider());
        state.mark_divider_drawn();
        assert!(!state.need_divider());
    }

    #[test]
    fn test_header_dirty_on_ready_flip() {
        let mut state = RenderState::new();
        state.check_header_dirty(false);
        state.end_frame();

        assert!(!state.check_header_dirty(false));
        assert!(state.check_header_dirty(true), "warmup -> ready flip");
        assert!(!state.check_header_dirty(true));
    }

    #[test]
    fn test_popup_close_triggers_cleanup() {
        let mut state = RenderState::new();
        state.end_frame();
        state.mark_divider_drawn();

        state.update_popup(Some(0));
        assert!(!state.popup_just_closed());

        state.update_popup(None);
        assert!(state.popup_just_closed());
        assert!(state.need_divider());
    }

    #[test]
    fn test_popup_switch_triggers_cleanup() {
        let mut state = RenderState::new();
        state.end_frame();

        state.update_popup(Some(0));
        state.end_frame();
        state.update_popup(Some(2));
        assert!(state.popup_just_closed());
    }

    #[test]
    fn test_page_switch_clear_forces_redraws() {
        let mut state = RenderState::new();
        state.end_frame();
        state.mark_divider_drawn();
        state.check_header_dirty(true);
        state.end_frame();

        state.mark_display_cleared();
        assert!(state.need_divider());
        assert!(state.check_header_dirty(true));
    }

    #[test]
    fn test_end_frame_clears_flags() {
        let mut state = RenderState::new();
        state.update_popup(Some(0));
        state.update_popup(None);
        assert!(state.popup_just_closed());

        state.end_frame();
        assert!(!state.popup_just_closed());
        assert!(!state.is_first_frame());
    }
}
