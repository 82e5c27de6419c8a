//! Screen-reader announcement channel. One `Announcer` lives in the
//! application shell for the life of the process and is lent to whichever
//! widget needs to speak; widgets only ever see the `Announce` capability.

use crate::constants::ANNOUNCE_CLEAR_DELAY;
use crate::timer::Countdown;

pub trait Announce {
    fn announce(&mut self, message: &str);
}

/// Polite live region holding at most one message at a time.
pub struct Announcer {
    live: Option<(String, Countdown)>,
}

impl Announcer {
    pub fn new() -> Self {
        Self { live: None }
    }

    /// The message currently held by the live region, if any.
    pub fn current(&self) -> Option<&str> {
        self.live.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some((_, clear)) = &mut self.live {
            if clear.tick(dt) {
                self.live = None;
            }
        }
    }
}

impl Announce for Announcer {
    fn announce(&mut self, message: &str) {
        log::info!("announce: {message}");
        self.live = Some((message.to_string(), Countdown::new(ANNOUNCE_CLEAR_DELAY)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_clears_after_the_delay() {
        let mut announcer = Announcer::new();
        announcer.announce("Mobile navigation opened");
        assert_eq!(announcer.current(), Some("Mobile navigation opened"));
        announcer.tick(ANNOUNCE_CLEAR_DELAY - 0.1);
        assert!(announcer.current().is_some());
        announcer.tick(0.2);
        assert_eq!(announcer.current(), None);
    }

    #[test]
    fn newer_message_replaces_and_rearms() {
        let mut announcer = Announcer::new();
        announcer.announce("first");
        announcer.tick(ANNOUNCE_CLEAR_DELAY - 0.1);
        announcer.announce("second");
        announcer.tick(ANNOUNCE_CLEAR_DELAY - 0.1);
        assert_eq!(announcer.current(), Some("second"));
    }
}
