use crate::carousel::gesture::{self, DragState};
use crate::carousel::state::PlayState;
use crate::constants::*;
use crate::timer::Repeat;

/// Keys the carousel responds to while it has focus.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Key {
    Left,
    Right,
    Space,
}

/// Slide-position state machine behind the testimonial carousel.
///
/// The widget is headless: it owns the slide list, the current index, the
/// autoplay timer and any in-flight gesture, and exposes transitions for the
/// host to call. Everything the host draws (track offset, indicator and
/// button states) is derived from here each frame, so every transition is
/// immediately reflected on screen.
///
/// `is_playing` records intent; the armed timer is a separate owned handle.
/// Hover and touch cancel only the timer and leave the flag alone, so the
/// post-interaction resume can be decided from the flag as it stood when the
/// interaction began.
pub struct Carousel<S> {
    slides: Vec<S>,
    current: usize,
    play_state: PlayState,
    autoplay: Option<Repeat>,
    drag: Option<DragState>,
}

impl<S> Carousel<S> {
    pub fn new(slides: Vec<S>) -> Self {
        let mut carousel = Self {
            slides,
            current: 0,
            play_state: PlayState::Paused,
            autoplay: None,
            drag: None,
        };
        if !carousel.slides.is_empty() {
            carousel.start_autoplay();
        }
        carousel
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    // --- Navigation ---

    /// Jump to `index`. Out-of-range targets are silently ignored.
    pub fn go_to_slide(&mut self, index: usize) {
        if index < self.slides.len() {
            self.current = index;
        }
    }

    /// Advance one slide, wrapping to the first past the last.
    pub fn next_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Step back one slide, wrapping to the last before the first.
    pub fn prev_slide(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
    }

    // --- Autoplay ---

    /// Arm the autoplay timer, replacing any timer already armed. The
    /// replacement guarantees at most one pending fire.
    fn arm(&mut self) {
        self.autoplay = if self.slides.is_empty() {
            None
        } else {
            Some(Repeat::every(AUTOPLAY_INTERVAL))
        };
    }

    pub fn start_autoplay(&mut self) {
        self.arm();
        self.play_state = PlayState::Playing;
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = None;
        self.play_state = PlayState::Paused;
    }

    pub fn toggle_autoplay(&mut self) {
        if self.is_playing() {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Advance the autoplay timer. Fires at most one slide change per call.
    pub fn tick(&mut self, dt: f32) {
        let fired = self.autoplay.as_mut().is_some_and(|t| t.tick(dt));
        if fired {
            self.next_slide();
        }
    }

    // --- Input ---

    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Left => self.prev_slide(),
            Key::Right => self.next_slide(),
            Key::Space => self.toggle_autoplay(),
        }
    }

    /// Pointer entered the widget: park the timer, keep the intent flag.
    pub fn pointer_enter(&mut self) {
        self.autoplay = None;
    }

    /// Pointer left the widget: resume only if autoplay was never stopped.
    pub fn pointer_leave(&mut self) {
        if self.is_playing() {
            self.arm();
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.drag = Some(DragState {
            start_x: x,
            start_y: y,
        });
        self.autoplay = None;
    }

    /// End the gesture. A recognized swipe navigates; either way autoplay
    /// resumes iff the intent flag survived the gesture untouched.
    pub fn touch_end(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag.take() {
            match gesture::classify(drag, x, y, SWIPE_THRESHOLD) {
                Some(gesture::Swipe::Next) => self.next_slide(),
                Some(gesture::Swipe::Prev) => self.prev_slide(),
                None => {}
            }
            if self.is_playing() {
                self.arm();
            }
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    // --- Derived view state ---

    /// Track translation as a percentage of one slide width.
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current as f32) * 100.0
    }

    pub fn indicator_active(&self, index: usize) -> bool {
        !self.slides.is_empty() && index == self.current
    }

    // End buttons pin at the edges even though keyboard, swipe and autoplay
    // still wrap past them.
    pub fn prev_enabled(&self) -> bool {
        !self.slides.is_empty() && self.current > 0
    }

    pub fn next_enabled(&self) -> bool {
        !self.slides.is_empty() && self.current + 1 < self.slides.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect())
    }

    #[test]
    fn starts_on_first_slide_playing() {
        let c = carousel(4);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_playing());
    }

    #[test]
    fn go_to_slide_sets_index_and_exclusive_indicator() {
        let mut c = carousel(4);
        for i in 0..4 {
            c.go_to_slide(i);
            assert_eq!(c.current_index(), i);
            for j in 0..4 {
                assert_eq!(c.indicator_active(j), i == j);
            }
        }
    }

    #[test]
    fn go_to_slide_out_of_range_is_a_no_op() {
        let mut c = carousel(4);
        c.go_to_slide(2);
        c.go_to_slide(4);
        assert_eq!(c.current_index(), 2);
        c.go_to_slide(usize::MAX);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn next_wraps_past_the_last_slide() {
        let mut c = carousel(4);
        c.go_to_slide(3);
        c.next_slide();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn prev_wraps_before_the_first_slide() {
        let mut c = carousel(4);
        c.prev_slide();
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn single_slide_wraps_onto_itself() {
        let mut c = carousel(1);
        c.next_slide();
        assert_eq!(c.current_index(), 0);
        c.prev_slide();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn autoplay_advances_on_the_interval() {
        let mut c = carousel(4);
        c.tick(AUTOPLAY_INTERVAL - 0.1);
        assert_eq!(c.current_index(), 0);
        c.tick(0.1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn double_start_leaves_exactly_one_timer() {
        let mut c = carousel(4);
        c.start_autoplay();
        c.start_autoplay();
        c.tick(AUTOPLAY_INTERVAL);
        // A duplicated timer would have advanced twice
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn restart_resets_the_timer_phase() {
        let mut c = carousel(4);
        c.tick(AUTOPLAY_INTERVAL - 0.1);
        c.start_autoplay();
        c.tick(AUTOPLAY_INTERVAL - 0.1);
        assert_eq!(c.current_index(), 0);
        c.tick(0.1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn stop_autoplay_is_idempotent() {
        let mut c = carousel(4);
        c.stop_autoplay();
        c.stop_autoplay();
        assert!(!c.is_playing());
        c.tick(AUTOPLAY_INTERVAL * 3.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn toggle_flips_play_state() {
        let mut c = carousel(4);
        c.toggle_autoplay();
        assert!(!c.is_playing());
        c.toggle_autoplay();
        assert!(c.is_playing());
    }

    #[test]
    fn hover_parks_the_timer_but_not_the_flag() {
        let mut c = carousel(4);
        c.go_to_slide(2);
        c.pointer_enter();
        assert!(c.is_playing());
        c.tick(AUTOPLAY_INTERVAL * 4.0);
        assert_eq!(c.current_index(), 2);
        c.pointer_leave();
        c.tick(AUTOPLAY_INTERVAL);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn hover_leave_does_not_resume_stopped_autoplay() {
        let mut c = carousel(4);
        c.stop_autoplay();
        c.pointer_enter();
        c.pointer_leave();
        c.tick(AUTOPLAY_INTERVAL * 2.0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn swipe_left_advances() {
        let mut c = carousel(4);
        c.touch_start(300.0, 120.0);
        c.touch_end(200.0, 120.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn swipe_right_steps_back() {
        let mut c = carousel(4);
        c.go_to_slide(2);
        c.touch_start(100.0, 50.0);
        c.touch_end(260.0, 50.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn unrecognized_gesture_still_resumes_autoplay() {
        let mut c = carousel(4);
        c.touch_start(100.0, 0.0);
        c.tick(AUTOPLAY_INTERVAL * 2.0);
        assert_eq!(c.current_index(), 0);
        c.touch_end(110.0, 0.0);
        assert_eq!(c.current_index(), 0);
        c.tick(AUTOPLAY_INTERVAL);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn gesture_does_not_resume_stopped_autoplay() {
        let mut c = carousel(4);
        c.stop_autoplay();
        c.touch_start(300.0, 0.0);
        c.touch_end(100.0, 0.0);
        assert_eq!(c.current_index(), 1);
        c.tick(AUTOPLAY_INTERVAL * 2.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn keys_navigate_and_toggle() {
        let mut c = carousel(4);
        c.handle_key(Key::Right);
        assert_eq!(c.current_index(), 1);
        c.handle_key(Key::Left);
        assert_eq!(c.current_index(), 0);
        // Keyboard wraps through the ends
        c.handle_key(Key::Left);
        assert_eq!(c.current_index(), 3);
        c.handle_key(Key::Space);
        assert!(!c.is_playing());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = carousel(0);
        assert!(!c.is_playing());
        c.start_autoplay();
        c.tick(AUTOPLAY_INTERVAL * 3.0);
        c.next_slide();
        c.prev_slide();
        c.go_to_slide(0);
        assert_eq!(c.current_index(), 0);
        assert!(!c.indicator_active(0));
        assert!(!c.prev_enabled());
        assert!(!c.next_enabled());
    }

    #[test]
    fn end_buttons_pin_while_navigation_wraps() {
        let mut c = carousel(4);
        assert!(!c.prev_enabled());
        assert!(c.next_enabled());
        c.go_to_slide(3);
        assert!(c.prev_enabled());
        assert!(!c.next_enabled());
        // The disabled edge is still crossed by other input paths
        c.handle_key(Key::Right);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn track_offset_tracks_the_index() {
        let mut c = carousel(4);
        c.go_to_slide(2);
        assert_eq!(c.track_offset_percent(), -200.0);
    }
}
