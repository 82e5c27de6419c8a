//! Slide-in navigation drawer. While open it locks page scrolling and traps
//! keyboard focus on its links; closing hands focus back to the toggle
//! (the caller owns that hand-off) and announces both transitions.

use crate::announcer::Announce;
use crate::constants::DRAWER_SLIDE_DURATION;
use crate::page::{NavLink, SectionId};

pub struct MobileNav {
    links: Vec<NavLink>,
    open: bool,
    focus: usize,
    progress: f32, // 0 closed .. 1 open, drives the slide animation
}

impl MobileNav {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self {
            links,
            open: false,
            focus: 0,
            progress: 0.0,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Drawer slide position, 0.0 (hidden) to 1.0 (fully out).
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// The page must not scroll underneath an open drawer.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, announcer: &mut dyn Announce) {
        if self.open {
            self.close_drawer(announcer);
        } else {
            self.open_drawer(announcer);
        }
    }

    pub fn open_drawer(&mut self, announcer: &mut dyn Announce) {
        if self.open {
            return;
        }
        self.open = true;
        // Focus trap starts on the first link
        self.focus = 0;
        announcer.announce("Mobile navigation opened");
    }

    pub fn close_drawer(&mut self, announcer: &mut dyn Announce) {
        if !self.open {
            return;
        }
        self.open = false;
        announcer.announce("Mobile navigation closed");
    }

    /// Tab/Shift-Tab while open cycles focus across the links and never
    /// escapes the drawer.
    pub fn handle_tab(&mut self, shift: bool) {
        if !self.open || self.links.is_empty() {
            return;
        }
        let len = self.links.len();
        self.focus = if shift {
            (self.focus + len - 1) % len
        } else {
            (self.focus + 1) % len
        };
    }

    pub fn focused(&self) -> Option<usize> {
        self.open.then_some(self.focus)
    }

    pub fn set_focused(&mut self, index: usize) {
        if self.open && index < self.links.len() {
            self.focus = index;
        }
    }

    /// Activate link `index`: the drawer closes and the caller scrolls to
    /// the returned section.
    pub fn activate(&mut self, index: usize, announcer: &mut dyn Announce) -> Option<SectionId> {
        if !self.open {
            return None;
        }
        let target = self.links.get(index).map(|link| link.target)?;
        self.close_drawer(announcer);
        Some(target)
    }

    /// Escape closes an open drawer. Returns whether the key was consumed.
    pub fn escape(&mut self, announcer: &mut dyn Announce) -> bool {
        if self.open {
            self.close_drawer(announcer);
            true
        } else {
            false
        }
    }

    /// A click outside the drawer (and off the toggle) closes it.
    pub fn outside_click(&mut self, announcer: &mut dyn Announce) {
        self.close_drawer(announcer);
    }

    pub fn tick(&mut self, dt: f32) {
        let target = if self.open { 1.0 } else { 0.0 };
        let step = dt / DRAWER_SLIDE_DURATION;
        if self.progress < target {
            self.progress = (self.progress + step).min(target);
        } else if self.progress > target {
            self.progress = (self.progress - step).max(target);
        }
    }
}
