//! Application shell: owns every widget, routes raw input to them once per
//! frame, and advances their timers. The shell is the one process-lifetime
//! owner of the announcer; widgets only borrow it for the duration of a
//! transition.

use std::path::PathBuf;
use std::sync::Arc;

use raylib::prelude::*;

use crate::announcer::Announcer;
use crate::carousel::{Carousel, Key as CarouselKey};
use crate::constants::*;
use crate::form::{ContactForm, FieldKind};
use crate::header::Header;
use crate::nav::MobileNav;
use crate::page::{Page, SectionId, Testimonial};
use crate::render;
use crate::scroll::ScrollView;
use crate::submit::Submitter;
use crate::texture_loader::AvatarStore;

/// Keyboard focus target, in page tab order. Links inside the open drawer
/// are tracked by the drawer's own trap instead.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Focus {
    None,
    SkipLink,
    NavToggle,
    HeroCta,
    Carousel,
    Field(usize),
    Submit,
}

const FOCUS_ORDER: [Focus; 9] = [
    Focus::SkipLink,
    Focus::NavToggle,
    Focus::HeroCta,
    Focus::Carousel,
    Focus::Field(0),
    Focus::Field(1),
    Focus::Field(2),
    Focus::Field(3),
    Focus::Submit,
];

fn next_focus(current: Focus, shift: bool) -> Focus {
    let len = FOCUS_ORDER.len();
    match FOCUS_ORDER.iter().position(|f| *f == current) {
        Some(i) if shift => FOCUS_ORDER[(i + len - 1) % len],
        Some(i) => FOCUS_ORDER[(i + 1) % len],
        None if shift => FOCUS_ORDER[len - 1],
        None => FOCUS_ORDER[0],
    }
}

pub struct App {
    pub page: Page,
    pub header: Header,
    pub nav: MobileNav,
    pub scroll: ScrollView,
    pub carousel: Carousel<Testimonial>,
    pub form: ContactForm,
    pub announcer: Announcer,
    pub avatars: AvatarStore,
    pub focus: Focus,
    /// Drawn track position in slide units, eased toward the current index.
    pub track_pos: f32,
    hover_carousel: bool,
}

impl App {
    pub fn new(
        width: f32,
        height: f32,
        submitter: Arc<dyn Submitter + Send + Sync>,
        assets: Option<PathBuf>,
    ) -> Self {
        let page = Page::build(width);
        let scroll = ScrollView::new(height, page.content_height);
        let nav = MobileNav::new(Page::nav_links());
        Self {
            carousel: Carousel::new(Page::testimonials()),
            form: ContactForm::new(submitter),
            announcer: Announcer::new(),
            avatars: AvatarStore::new(assets),
            header: Header::new(),
            focus: Focus::None,
            track_pos: 0.0,
            hover_carousel: false,
            nav,
            page,
            scroll,
        }
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let dt = rl.get_frame_time();
        let mouse = rl.get_mouse_position();
        let page_mouse = Vector2::new(mouse.x, mouse.y + self.scroll.y());

        self.handle_keyboard(rl);
        self.handle_text_input(rl);

        self.scroll.set_locked(self.nav.scroll_locked());
        self.scroll.wheel(rl.get_mouse_wheel_move());

        self.update_carousel_hover(page_mouse);
        self.update_drawer_hover(mouse);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.handle_press(mouse, page_mouse);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) && self.carousel.dragging() {
            self.carousel.touch_end(page_mouse.x, page_mouse.y);
        }

        self.tick(dt);
        self.lazy_load_avatars(rl, thread);
    }

    fn handle_keyboard(&mut self, rl: &mut RaylibHandle) {
        let shift = rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT)
            || rl.is_key_down(KeyboardKey::KEY_RIGHT_SHIFT);

        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            if self.nav.is_open() {
                self.nav.handle_tab(shift);
            } else {
                self.set_focus(next_focus(self.focus, shift));
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) && self.nav.escape(&mut self.announcer) {
            // Focus returns to the control that opened the drawer
            self.set_focus(Focus::NavToggle);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            if self.nav.is_open() {
                // Enter inside the trap activates the focused link
                if let Some(i) = self.nav.focused() {
                    if let Some(target) = self.nav.activate(i, &mut self.announcer) {
                        self.scroll_to_section(target);
                        self.set_focus(Focus::NavToggle);
                    }
                }
            } else {
                self.activate_focused();
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) && !self.nav.is_open() {
            if let Focus::Field(i) = self.focus {
                self.form.backspace(i);
            }
        }

        // Arrow keys and Space belong to the carousel only while it has
        // focus; a focused form field keeps Space as ordinary text.
        if self.focus == Focus::Carousel && !self.nav.is_open() {
            if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
                self.carousel.handle_key(CarouselKey::Left);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
                self.carousel.handle_key(CarouselKey::Right);
            }
            if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
                self.carousel.handle_key(CarouselKey::Space);
            }
        }
    }

    fn handle_text_input(&mut self, rl: &mut RaylibHandle) {
        while let Some(ch) = rl.get_char_pressed() {
            if self.nav.is_open() {
                continue;
            }
            if let Focus::Field(i) = self.focus {
                if !ch.is_control() {
                    self.form.input(i, ch);
                }
            }
        }
    }

    fn update_carousel_hover(&mut self, page_mouse: Vector2) {
        let layout = render::carousel_layout(&self.page, self.carousel.len());
        let inside = !self.nav.is_open() && render::hit(layout.frame, page_mouse);
        // Mid-gesture the timer stays parked no matter where the pointer is
        if self.carousel.dragging() {
            self.hover_carousel = inside;
            return;
        }
        if inside && !self.hover_carousel {
            self.carousel.pointer_enter();
        }
        if !inside && self.hover_carousel {
            self.carousel.pointer_leave();
        }
        self.hover_carousel = inside;
    }

    fn update_drawer_hover(&mut self, mouse: Vector2) {
        if !self.nav.is_open() {
            return;
        }
        for i in 0..self.nav.links().len() {
            let rect = render::drawer_link_rect(self.page.width, self.nav.progress(), i);
            if render::hit(rect, mouse) {
                self.nav.set_focused(i);
            }
        }
    }

    /// One mouse press, resolved against the fixed chrome first (drawer,
    /// header), then the scrolled page content.
    fn handle_press(&mut self, mouse: Vector2, page_mouse: Vector2) {
        let width = self.page.width;

        if self.nav.is_open() {
            if render::hit(render::header_toggle_rect(width), mouse) {
                self.nav.toggle(&mut self.announcer);
                self.set_focus(Focus::NavToggle);
                return;
            }
            for i in 0..self.nav.links().len() {
                if render::hit(render::drawer_link_rect(width, self.nav.progress(), i), mouse) {
                    if let Some(target) = self.nav.activate(i, &mut self.announcer) {
                        self.scroll_to_section(target);
                        self.set_focus(Focus::NavToggle);
                    }
                    return;
                }
            }
            if !render::hit(render::drawer_rect(width, self.nav.progress()), mouse) {
                self.nav.outside_click(&mut self.announcer);
                self.set_focus(Focus::NavToggle);
            }
            return;
        }

        if render::hit(render::header_toggle_rect(width), mouse) {
            self.nav.toggle(&mut self.announcer);
            self.set_focus(Focus::NavToggle);
            return;
        }
        if mouse.y < HEADER_HEIGHT {
            return;
        }

        if render::hit(render::hero_cta_rect(&self.page), page_mouse) {
            self.set_focus(Focus::HeroCta);
            self.scroll_to_section(SectionId::Contact);
            return;
        }

        let layout = render::carousel_layout(&self.page, self.carousel.len());
        // Exactly one of the pause/play pair is showing at a time
        let toggle_btn = if self.carousel.is_playing() {
            layout.pause_btn
        } else {
            layout.play_btn
        };
        if render::hit(layout.frame, page_mouse) || render::hit(toggle_btn, page_mouse) {
            self.set_focus(Focus::Carousel);
            if render::hit(layout.prev_btn, page_mouse) {
                // Disabled edge buttons swallow the click
                if self.carousel.prev_enabled() {
                    self.carousel.prev_slide();
                }
                return;
            }
            if render::hit(layout.next_btn, page_mouse) {
                if self.carousel.next_enabled() {
                    self.carousel.next_slide();
                }
                return;
            }
            if render::hit(toggle_btn, page_mouse) {
                if self.carousel.is_playing() {
                    self.carousel.stop_autoplay();
                } else {
                    self.carousel.start_autoplay();
                }
                return;
            }
            for (i, dot) in layout.indicators.iter().enumerate() {
                if render::hit(*dot, page_mouse) {
                    self.carousel.go_to_slide(i);
                    return;
                }
            }
            if render::hit(layout.track, page_mouse) {
                self.carousel.touch_start(page_mouse.x, page_mouse.y);
            }
            return;
        }

        let form = render::form_layout(&self.page);
        for (i, rect) in form.fields.iter().enumerate() {
            if render::hit(*rect, page_mouse) {
                self.set_focus(Focus::Field(i));
                return;
            }
        }
        if render::hit(form.submit, page_mouse) {
            self.set_focus(Focus::Submit);
            self.form.submit();
            return;
        }

        self.set_focus(Focus::None);
    }

    fn activate_focused(&mut self) {
        match self.focus {
            Focus::SkipLink => {
                // Jump to main content and drop the visual focus there
                self.scroll_to_section(SectionId::Home);
                self.set_focus(Focus::None);
            }
            Focus::NavToggle => {
                self.nav.toggle(&mut self.announcer);
            }
            Focus::HeroCta => self.scroll_to_section(SectionId::Contact),
            Focus::Field(i) => {
                let multiline = self
                    .form
                    .fields()
                    .get(i)
                    .is_some_and(|f| f.kind == FieldKind::Multiline);
                if multiline {
                    self.form.input(i, '\n');
                } else {
                    self.form.submit();
                }
            }
            Focus::Submit => self.form.submit(),
            Focus::Carousel | Focus::None => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        // Leaving a form field validates it, like a blur event
        if let Focus::Field(i) = self.focus {
            self.form.blur(i);
        }
        self.focus = focus;
    }

    pub fn scroll_to_section(&mut self, id: SectionId) {
        let target = if id == SectionId::Home {
            0.0
        } else {
            ScrollView::anchor_target(self.page.section_top(id), self.header.height())
        };
        self.scroll.scroll_to(target);
    }

    fn tick(&mut self, dt: f32) {
        self.nav.tick(dt);
        self.scroll.tick(dt);
        self.carousel.tick(dt);
        self.form.tick(dt);
        self.announcer.tick(dt);
        self.header.update(self.scroll.y());

        let scroll_y = self.scroll.y();
        let viewport = self.scroll.viewport_height();
        for reveal in &mut self.page.reveals {
            reveal.update_visibility(scroll_y, viewport);
            reveal.tick(dt);
        }

        // The widget reports its translation in percent of one slide width
        let target = -self.carousel.track_offset_percent() / 100.0;
        self.track_pos += (target - self.track_pos) * (TRACK_EASE_RATE * dt).min(1.0);
        if (target - self.track_pos).abs() < 0.002 {
            self.track_pos = target;
        }
    }

    fn lazy_load_avatars(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if self.avatars.loaded() {
            return;
        }
        let testimonials_top = self.page.section_top(SectionId::Testimonials);
        if testimonials_top < self.scroll.y() + 1.5 * self.scroll.viewport_height() {
            let files: Vec<&'static str> = self
                .carousel
                .slides()
                .iter()
                .filter_map(|t| t.avatar)
                .collect();
            self.avatars.load_all(rl, thread, &files);
        }
    }
}
