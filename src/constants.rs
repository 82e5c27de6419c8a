pub const WINDOW_WIDTH: i32 = 1280;             // Default window width
pub const WINDOW_HEIGHT: i32 = 800;             // Default window height
pub const FPS: u32 = 60;                        // Target frames per second

pub const AUTOPLAY_INTERVAL: f32 = 5.0;         // Seconds between automatic slide advances
pub const SWIPE_THRESHOLD: f32 = 50.0;          // Minimum horizontal drag (pixels) to count as a swipe
pub const TRACK_EASE_RATE: f32 = 10.0;          // Exponential rate for the drawn track offset

pub const HEADER_HEIGHT: f32 = 72.0;            // Fixed header bar height
pub const HEADER_SCROLL_THRESHOLD: f32 = 100.0; // Scroll offset past which the header is "scrolled"

pub const ANCHOR_MARGIN: f32 = 20.0;            // Gap between header and section after an anchor scroll
pub const SCROLL_GLIDE_DURATION: f32 = 0.6;     // Duration of an eased anchor scroll (seconds)
pub const WHEEL_STEP: f32 = 60.0;               // Pixels scrolled per wheel notch

pub const REVEAL_THRESHOLD: f32 = 0.1;          // Fraction of an element that must be visible to reveal
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;     // Viewport bottom inset applied before reveal checks
pub const REVEAL_DURATION: f32 = 0.5;           // Fade-in-up duration (seconds)
pub const REVEAL_RISE: f32 = 24.0;              // Pixels an element rises while revealing

pub const DRAWER_WIDTH: f32 = 320.0;            // Navigation drawer width
pub const DRAWER_SLIDE_DURATION: f32 = 0.25;    // Drawer open/close animation (seconds)

pub const ANNOUNCE_CLEAR_DELAY: f32 = 1.0;      // Seconds a live announcement stays up
pub const FEEDBACK_CLEAR_DELAY: f32 = 5.0;      // Seconds a form banner stays up
