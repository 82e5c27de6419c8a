//! Page scrolling: wheel input, eased anchor scrolls, and one-shot reveal
//! animations for elements entering the viewport.

use raylib::prelude::*;

use crate::constants::*;

struct Glide {
    tween: ease::Tween,
    target: f32,
    remaining: f32,
}

/// Vertical scroll state for the page viewport.
///
/// Wheel input moves the offset directly and cancels any glide in flight;
/// anchor activation glides to its target with an eased tween. While the
/// navigation drawer holds the lock, wheel input is swallowed.
pub struct ScrollView {
    viewport_h: f32,
    content_h: f32,
    y: f32,
    glide: Option<Glide>,
    locked: bool,
}

impl ScrollView {
    pub fn new(viewport_h: f32, content_h: f32) -> Self {
        Self {
            viewport_h,
            content_h,
            y: 0.0,
            glide: None,
            locked: false,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_h
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_h - self.viewport_h).max(0.0)
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Apply wheel input (positive notches scroll up).
    pub fn wheel(&mut self, notches: f32) {
        if self.locked || notches == 0.0 {
            return;
        }
        self.glide = None;
        self.y = (self.y - notches * WHEEL_STEP).clamp(0.0, self.max_scroll());
    }

    /// Scroll position an anchor jump should land on for a section starting
    /// at `section_top`.
    pub fn anchor_target(section_top: f32, header_height: f32) -> f32 {
        section_top - header_height - ANCHOR_MARGIN
    }

    /// Glide to `target` (clamped to the valid range).
    pub fn scroll_to(&mut self, target: f32) {
        let target = target.clamp(0.0, self.max_scroll());
        self.glide = Some(Glide {
            tween: ease::Tween::new(ease::cubic_out, self.y, target, SCROLL_GLIDE_DURATION),
            target,
            remaining: SCROLL_GLIDE_DURATION,
        });
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(glide) = &mut self.glide {
            glide.remaining -= dt;
            self.y = glide.tween.apply(dt);
            if glide.remaining <= 0.0 {
                self.y = glide.target;
                self.glide = None;
            }
        }
    }
}

/// One-shot fade-in-up played when an element first becomes sufficiently
/// visible. Once revealed an element never hides again.
pub struct Reveal {
    rect: Rectangle,
    revealed: bool,
    progress: f32,
}

impl Reveal {
    pub fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            revealed: false,
            progress: 0.0,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Trigger check against the viewport, with the bottom inset applied.
    pub fn update_visibility(&mut self, scroll_y: f32, viewport_h: f32) {
        if self.revealed {
            return;
        }
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_h - REVEAL_BOTTOM_MARGIN;
        let top = self.rect.y.max(view_top);
        let bottom = (self.rect.y + self.rect.height).min(view_bottom);
        let visible = (bottom - top).max(0.0);
        if visible >= REVEAL_THRESHOLD * self.rect.height && visible > 0.0 {
            self.revealed = true;
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.revealed && self.progress < 1.0 {
            self.progress = (self.progress + dt / REVEAL_DURATION).min(1.0);
        }
    }

    /// Opacity of the element, 0.0 to 1.0.
    pub fn alpha(&self) -> f32 {
        ease::cubic_out(self.progress, 0.0, 1.0, 1.0)
    }

    /// Upward offset still to travel, in pixels.
    pub fn rise(&self) -> f32 {
        REVEAL_RISE * (1.0 - ease::cubic_out(self.progress, 0.0, 1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_scrolls_and_clamps() {
        let mut view = ScrollView::new(800.0, 2000.0);
        view.wheel(-2.0);
        assert_eq!(view.y(), 2.0 * WHEEL_STEP);
        view.wheel(100.0);
        assert_eq!(view.y(), 0.0);
        view.wheel(-1000.0);
        assert_eq!(view.y(), view.max_scroll());
    }

    #[test]
    fn locked_view_ignores_wheel() {
        let mut view = ScrollView::new(800.0, 2000.0);
        view.set_locked(true);
        view.wheel(-3.0);
        assert_eq!(view.y(), 0.0);
    }

    #[test]
    fn glide_lands_exactly_on_target() {
        let mut view = ScrollView::new(800.0, 2000.0);
        view.scroll_to(500.0);
        for _ in 0..120 {
            view.tick(1.0 / 60.0);
        }
        assert_eq!(view.y(), 500.0);
    }

    #[test]
    fn glide_target_is_clamped() {
        let mut view = ScrollView::new(800.0, 2000.0);
        view.scroll_to(99_999.0);
        for _ in 0..120 {
            view.tick(1.0 / 60.0);
        }
        assert_eq!(view.y(), view.max_scroll());
    }

    #[test]
    fn wheel_cancels_a_glide() {
        let mut view = ScrollView::new(800.0, 2000.0);
        view.scroll_to(1000.0);
        view.tick(0.1);
        view.wheel(-1.0);
        let y = view.y();
        view.tick(1.0);
        assert_eq!(view.y(), y);
    }

    #[test]
    fn anchor_target_offsets_for_header() {
        assert_eq!(
            ScrollView::anchor_target(900.0, 72.0),
            900.0 - 72.0 - ANCHOR_MARGIN
        );
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut view = ScrollView::new(800.0, 400.0);
        view.wheel(-5.0);
        assert_eq!(view.y(), 0.0);
        assert_eq!(view.max_scroll(), 0.0);
    }

    #[test]
    fn reveal_triggers_at_ten_percent_visibility() {
        // Element of height 200 sitting just under the inset viewport bottom
        let mut reveal = Reveal::new(Rectangle::new(0.0, 1000.0, 600.0, 200.0));
        // Viewport bottom (with margin) at 950: not visible at all
        reveal.update_visibility(200.0, 800.0);
        assert!(!reveal.revealed());
        // Bottom at 1010: 10 px visible, below the 20 px threshold
        reveal.update_visibility(260.0, 800.0);
        assert!(!reveal.revealed());
        // Bottom at 1025: 25 px visible, past the threshold
        reveal.update_visibility(275.0, 800.0);
        assert!(reveal.revealed());
    }

    #[test]
    fn reveal_is_permanent() {
        let mut reveal = Reveal::new(Rectangle::new(0.0, 100.0, 600.0, 200.0));
        reveal.update_visibility(0.0, 800.0);
        assert!(reveal.revealed());
        reveal.update_visibility(50_000.0, 800.0);
        assert!(reveal.revealed());
    }

    #[test]
    fn reveal_fade_runs_to_completion() {
        let mut reveal = Reveal::new(Rectangle::new(0.0, 100.0, 600.0, 200.0));
        reveal.update_visibility(0.0, 800.0);
        assert_eq!(reveal.alpha(), 0.0);
        for _ in 0..60 {
            reveal.tick(1.0 / 60.0);
        }
        assert_eq!(reveal.alpha(), 1.0);
        assert_eq!(reveal.rise(), 0.0);
    }
}
