//! Immediate-mode drawing for the whole page, plus the layout helpers the
//! shell reuses for hit-testing. All section content lives in page
//! coordinates and is translated by the scroll offset at draw time; the
//! header, drawer, skip link and live region are fixed to the screen.

use raylib::prelude::*;

use crate::app::{App, Focus};
use crate::constants::*;
use crate::form::FeedbackKind;
use crate::page::{Page, SectionId, Testimonial};

pub const INK: Color = Color::new(24, 28, 39, 255);
pub const PAPER: Color = Color::new(248, 249, 251, 255);
pub const MUTED: Color = Color::new(110, 117, 131, 255);
pub const ACCENT: Color = Color::new(79, 70, 229, 255);
pub const CARD_BG: Color = Color::new(255, 255, 255, 255);
pub const LINE: Color = Color::new(222, 226, 233, 255);
pub const ERROR: Color = Color::new(211, 47, 47, 255);
pub const SUCCESS: Color = Color::new(27, 128, 76, 255);

// --- Layout ---

pub struct CarouselLayout {
    pub frame: Rectangle,
    pub track: Rectangle,
    pub prev_btn: Rectangle,
    pub next_btn: Rectangle,
    pub pause_btn: Rectangle,
    pub play_btn: Rectangle,
    pub indicators: Vec<Rectangle>,
}

/// Carousel geometry inside the testimonials section, in page coordinates.
pub fn carousel_layout(page: &Page, count: usize) -> CarouselLayout {
    let section = page.section(SectionId::Testimonials).rect;
    let frame_w = (page.width - 2.0 * 80.0).min(960.0);
    let frame = Rectangle::new(
        (page.width - frame_w) / 2.0,
        section.y + 110.0,
        frame_w,
        300.0,
    );
    let track = Rectangle::new(frame.x + 64.0, frame.y + 16.0, frame.width - 128.0, 220.0);

    let button = 40.0;
    let mid_y = track.y + track.height / 2.0 - button / 2.0;
    let prev_btn = Rectangle::new(frame.x + 8.0, mid_y, button, button);
    let next_btn = Rectangle::new(frame.x + frame.width - button - 8.0, mid_y, button, button);

    let pause_btn = Rectangle::new(frame.x + frame.width - 72.0, frame.y - 40.0, 32.0, 32.0);
    let play_btn = pause_btn;

    let dot = 12.0;
    let gap = 18.0;
    let total = count as f32 * dot + (count.saturating_sub(1)) as f32 * (gap - dot);
    let start_x = frame.x + (frame.width - total) / 2.0;
    let dot_y = track.y + track.height + 24.0;
    let indicators = (0..count)
        .map(|i| Rectangle::new(start_x + i as f32 * gap, dot_y, dot, dot))
        .collect();

    CarouselLayout {
        frame,
        track,
        prev_btn,
        next_btn,
        pause_btn,
        play_btn,
        indicators,
    }
}

pub struct FormLayout {
    pub fields: Vec<Rectangle>,
    pub submit: Rectangle,
    pub banner: Rectangle,
}

/// Contact form geometry, in page coordinates. Field heights depend on the
/// field order built by `ContactForm::new`: three inputs and a multiline.
pub fn form_layout(page: &Page) -> FormLayout {
    let section = page.section(SectionId::Contact).rect;
    let form_w = (page.width - 2.0 * 80.0).min(620.0);
    let x = (page.width - form_w) / 2.0;
    let mut y = section.y + 110.0;

    let mut fields = Vec::new();
    for height in [48.0, 48.0, 48.0, 140.0] {
        y += 24.0; // label line
        fields.push(Rectangle::new(x, y, form_w, height));
        y += height + 22.0; // room for the error line
    }

    let submit = Rectangle::new(x, y + 6.0, 190.0, 48.0);
    let banner = Rectangle::new(x + submit.width + 16.0, y + 6.0, form_w - submit.width - 16.0, 48.0);
    FormLayout {
        fields,
        submit,
        banner,
    }
}

pub fn header_toggle_rect(width: f32) -> Rectangle {
    Rectangle::new(width - 64.0, (HEADER_HEIGHT - 32.0) / 2.0, 40.0, 32.0)
}

pub fn hero_cta_rect(page: &Page) -> Rectangle {
    let hero = page.section(SectionId::Home).rect;
    Rectangle::new(80.0, hero.y + 320.0, 200.0, 52.0)
}

pub fn drawer_rect(width: f32, progress: f32) -> Rectangle {
    Rectangle::new(width - DRAWER_WIDTH * progress, 0.0, DRAWER_WIDTH, 10_000.0)
}

pub fn drawer_link_rect(width: f32, progress: f32, index: usize) -> Rectangle {
    let drawer = drawer_rect(width, progress);
    Rectangle::new(
        drawer.x + 24.0,
        HEADER_HEIGHT + 40.0 + index as f32 * 56.0,
        DRAWER_WIDTH - 48.0,
        44.0,
    )
}

fn contains(rect: Rectangle, x: f32, y: f32) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

pub fn hit(rect: Rectangle, point: Vector2) -> bool {
    contains(rect, point.x, point.y)
}

// --- Drawing ---

pub fn draw(app: &App, d: &mut RaylibDrawHandle) {
    d.clear_background(PAPER);

    let scroll = app.scroll.y();
    draw_sections(app, d, scroll);
    draw_carousel(app, d, scroll);
    draw_form(app, d, scroll);
    draw_footer(app, d, scroll);
    draw_header(app, d);
    draw_drawer(app, d);
    draw_skip_link(app, d);
    draw_live_region(app, d);
}

fn focus_ring(d: &mut RaylibDrawHandle, rect: Rectangle) {
    d.draw_rectangle_lines_ex(
        Rectangle::new(rect.x - 3.0, rect.y - 3.0, rect.width + 6.0, rect.height + 6.0),
        2.0,
        ACCENT,
    );
}

fn offset(rect: Rectangle, dy: f32) -> Rectangle {
    Rectangle::new(rect.x, rect.y - dy, rect.width, rect.height)
}

fn draw_sections(app: &App, d: &mut RaylibDrawHandle, scroll: f32) {
    let page = &app.page;

    // Hero
    let hero = page.section(SectionId::Home);
    let hy = hero.rect.y - scroll;
    d.draw_text(hero.title, 80, (hy + 140.0) as i32, 48, INK);
    d.draw_text(hero.subtitle, 80, (hy + 210.0) as i32, 20, MUTED);
    let cta = offset(hero_cta_rect(page), scroll);
    d.draw_rectangle_rec(cta, ACCENT);
    d.draw_text(
        "Start a project",
        (cta.x + 34.0) as i32,
        (cta.y + 16.0) as i32,
        20,
        Color::WHITE,
    );
    if app.focus == Focus::HeroCta {
        focus_ring(d, cta);
    }

    // Section titles ride their reveal animation
    for section in &page.sections {
        if section.id == SectionId::Home {
            continue;
        }
        let (alpha, rise) = match section.title_reveal {
            Some(i) => (page.reveals[i].alpha(), page.reveals[i].rise()),
            None => (1.0, 0.0),
        };
        let ty = section.rect.y - scroll + 24.0 + rise;
        d.draw_text(section.title, 80, ty as i32, 34, INK.fade(alpha));
        d.draw_text(section.subtitle, 80, (ty + 44.0) as i32, 18, MUTED.fade(alpha));
    }

    // Service cards
    for card in &page.cards {
        let reveal = &page.reveals[card.reveal];
        if !reveal.revealed() {
            continue;
        }
        let alpha = reveal.alpha();
        let rect = Rectangle::new(
            card.rect.x,
            card.rect.y - scroll + reveal.rise(),
            card.rect.width,
            card.rect.height,
        );
        d.draw_rectangle_rec(rect, CARD_BG.fade(alpha));
        d.draw_rectangle_lines_ex(rect, 1.0, LINE.fade(alpha));
        d.draw_text(
            card.title,
            (rect.x + 20.0) as i32,
            (rect.y + 20.0) as i32,
            22,
            INK.fade(alpha),
        );
        draw_wrapped(
            d,
            card.blurb,
            rect.x + 20.0,
            rect.y + 60.0,
            rect.width - 40.0,
            16,
            MUTED.fade(alpha),
        );
    }
}

fn draw_carousel(app: &App, d: &mut RaylibDrawHandle, scroll: f32) {
    if app.carousel.is_empty() {
        return;
    }
    let layout = carousel_layout(&app.page, app.carousel.len());
    let frame = offset(layout.frame, scroll);
    let track = offset(layout.track, scroll);

    d.draw_rectangle_rec(frame, CARD_BG);
    d.draw_rectangle_lines_ex(frame, 1.0, LINE);
    if app.focus == Focus::Carousel {
        focus_ring(d, frame);
    }

    // Slides, clipped to the track and offset by the eased position
    {
        let mut sd = d.begin_scissor_mode(
            track.x as i32,
            track.y as i32,
            track.width as i32,
            track.height as i32,
        );
        for (i, slide) in app.carousel.slides().iter().enumerate() {
            let x = track.x + (i as f32 - app.track_pos) * track.width;
            if x + track.width < track.x || x > track.x + track.width {
                continue;
            }
            draw_testimonial(app, &mut sd, slide, x, track);
        }
    }

    // Prev/next, dimmed when pinned at an edge
    let prev = offset(layout.prev_btn, scroll);
    let next = offset(layout.next_btn, scroll);
    let prev_color = if app.carousel.prev_enabled() { INK } else { LINE };
    let next_color = if app.carousel.next_enabled() { INK } else { LINE };
    d.draw_text("<", (prev.x + 14.0) as i32, (prev.y + 8.0) as i32, 28, prev_color);
    d.draw_text(">", (next.x + 14.0) as i32, (next.y + 8.0) as i32, 28, next_color);

    // Play/pause pair: exactly one of the two is visible
    if app.carousel.is_playing() {
        let pause = offset(layout.pause_btn, scroll);
        d.draw_text("||", (pause.x + 8.0) as i32, (pause.y + 6.0) as i32, 22, MUTED);
    } else {
        let play = offset(layout.play_btn, scroll);
        d.draw_text(">", (play.x + 10.0) as i32, (play.y + 4.0) as i32, 26, MUTED);
    }

    for (i, dot) in layout.indicators.iter().enumerate() {
        let dot = offset(*dot, scroll);
        let center = Vector2::new(dot.x + dot.width / 2.0, dot.y + dot.height / 2.0);
        if app.carousel.indicator_active(i) {
            d.draw_circle_v(center, dot.width / 2.0, ACCENT);
        } else {
            d.draw_circle_v(center, dot.width / 2.0 - 2.0, LINE);
        }
    }
}

fn draw_testimonial(
    app: &App,
    d: &mut impl RaylibDraw,
    slide: &Testimonial,
    x: f32,
    track: Rectangle,
) {
    let pad = 36.0;
    draw_wrapped(
        d,
        slide.quote,
        x + pad + 80.0,
        track.y + 32.0,
        track.width - 2.0 * pad - 80.0,
        20,
        INK,
    );
    d.draw_text(
        slide.author,
        (x + pad + 80.0) as i32,
        (track.y + 140.0) as i32,
        18,
        INK,
    );
    d.draw_text(
        slide.role,
        (x + pad + 80.0) as i32,
        (track.y + 164.0) as i32,
        16,
        MUTED,
    );

    // Avatar photo when loaded, initials badge otherwise
    let badge = Rectangle::new(x + pad, track.y + 32.0, 56.0, 56.0);
    match slide.avatar.and_then(|file| app.avatars.get(file)) {
        Some(texture) => {
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                badge,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
        None => {
            let center = Vector2::new(badge.x + 28.0, badge.y + 28.0);
            d.draw_circle_v(center, 28.0, ACCENT);
            let initial = slide.author.chars().next().unwrap_or('?');
            d.draw_text(
                &initial.to_string(),
                (center.x - 7.0) as i32,
                (center.y - 11.0) as i32,
                22,
                Color::WHITE,
            );
        }
    }
}

fn draw_form(app: &App, d: &mut RaylibDrawHandle, scroll: f32) {
    let layout = form_layout(&app.page);
    for (i, field) in app.form.fields().iter().enumerate() {
        let rect = offset(layout.fields[i], scroll);
        d.draw_text(field.label, rect.x as i32, (rect.y - 22.0) as i32, 16, INK);

        let border = if field.error.is_some() { ERROR } else { LINE };
        d.draw_rectangle_rec(rect, CARD_BG);
        d.draw_rectangle_lines_ex(rect, 1.0, border);
        if app.focus == Focus::Field(i) {
            focus_ring(d, rect);
        }

        let shown = if app.focus == Focus::Field(i) {
            format!("{}_", field.value)
        } else {
            field.value.clone()
        };
        draw_wrapped(d, &shown, rect.x + 12.0, rect.y + 14.0, rect.width - 24.0, 18, INK);

        if let Some(error) = &field.error {
            d.draw_text(
                error,
                rect.x as i32,
                (rect.y + rect.height + 4.0) as i32,
                14,
                ERROR,
            );
        }
    }

    let submit = offset(layout.submit, scroll);
    let submit_bg = if app.form.sending() { MUTED } else { ACCENT };
    d.draw_rectangle_rec(submit, submit_bg);
    d.draw_text(
        app.form.submit_label(),
        (submit.x + 24.0) as i32,
        (submit.y + 15.0) as i32,
        18,
        Color::WHITE,
    );
    if app.focus == Focus::Submit {
        focus_ring(d, submit);
    }

    if let Some(feedback) = app.form.feedback() {
        let color = match feedback.kind {
            FeedbackKind::Success => SUCCESS,
            FeedbackKind::Error => ERROR,
        };
        let banner = offset(layout.banner, scroll);
        d.draw_text(feedback.text, banner.x as i32, (banner.y + 14.0) as i32, 16, color);
    }
}

fn draw_footer(app: &App, d: &mut RaylibDrawHandle, scroll: f32) {
    let y = app.page.content_height - 90.0 - scroll;
    d.draw_line_ex(
        Vector2::new(0.0, y),
        Vector2::new(app.page.width, y),
        1.0,
        LINE,
    );
    d.draw_text(
        "(c) 2026 CodeRift Technologies",
        80,
        (y + 30.0) as i32,
        16,
        MUTED,
    );
}

fn draw_header(app: &App, d: &mut RaylibDrawHandle) {
    let width = app.page.width;
    let bg = if app.header.is_scrolled() {
        Color::WHITE
    } else {
        PAPER
    };
    d.draw_rectangle(0, 0, width as i32, HEADER_HEIGHT as i32, bg);
    if app.header.is_scrolled() {
        // Stand-in for the scrolled drop shadow
        d.draw_rectangle(0, HEADER_HEIGHT as i32, width as i32, 2, LINE);
    }
    d.draw_text("CodeRift", 80, ((HEADER_HEIGHT - 28.0) / 2.0) as i32, 28, INK);
    d.draw_text("Technologies", 212, ((HEADER_HEIGHT - 16.0) / 2.0) as i32, 16, MUTED);

    let toggle = header_toggle_rect(width);
    for i in 0..3 {
        d.draw_rectangle(
            toggle.x as i32 + 6,
            toggle.y as i32 + 7 + i * 7,
            (toggle.width - 12.0) as i32,
            3,
            INK,
        );
    }
    if app.focus == Focus::NavToggle {
        focus_ring(d, toggle);
    }
}

fn draw_drawer(app: &App, d: &mut RaylibDrawHandle) {
    let progress = app.nav.progress();
    if progress <= 0.0 {
        return;
    }
    let width = app.page.width;
    let height = app.scroll.viewport_height();

    // Dimmed backdrop, click-through handled by the shell
    d.draw_rectangle(0, 0, width as i32, height as i32, INK.fade(0.4 * progress));

    let drawer = drawer_rect(width, progress);
    d.draw_rectangle_rec(
        Rectangle::new(drawer.x, 0.0, drawer.width, height),
        Color::WHITE,
    );
    d.draw_text("Menu", (drawer.x + 24.0) as i32, 24, 24, INK);

    for (i, link) in app.nav.links().iter().enumerate() {
        let rect = drawer_link_rect(width, progress, i);
        if app.nav.focused() == Some(i) {
            d.draw_rectangle_rec(rect, PAPER);
            focus_ring(d, rect);
        }
        d.draw_text(
            link.label,
            (rect.x + 12.0) as i32,
            (rect.y + 12.0) as i32,
            20,
            INK,
        );
    }
}

fn draw_skip_link(app: &App, d: &mut RaylibDrawHandle) {
    // Visible only while focused, like its CSS counterpart
    if app.focus != Focus::SkipLink {
        return;
    }
    let rect = Rectangle::new(16.0, 16.0, 220.0, 40.0);
    d.draw_rectangle_rec(rect, INK);
    d.draw_text(
        "Skip to main content",
        (rect.x + 14.0) as i32,
        (rect.y + 12.0) as i32,
        16,
        Color::WHITE,
    );
}

fn draw_live_region(app: &App, d: &mut RaylibDrawHandle) {
    if let Some(message) = app.announcer.current() {
        let height = app.scroll.viewport_height();
        d.draw_rectangle(16, (height - 56.0) as i32, 360, 40, INK.fade(0.85));
        d.draw_text(message, 30, (height - 44.0) as i32, 16, Color::WHITE);
    }
}

/// Greedy word wrap with the default font.
fn draw_wrapped(
    d: &mut impl RaylibDraw,
    text: &str,
    x: f32,
    y: f32,
    max_width: f32,
    font_size: i32,
    color: Color,
) {
    let mut line = String::new();
    let mut line_y = y;
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure_text(&candidate, font_size) as f32 > max_width && !line.is_empty() {
            d.draw_text(&line, x as i32, line_y as i32, font_size, color);
            line_y += font_size as f32 + 6.0;
            line = word.to_string();
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        d.draw_text(&line, x as i32, line_y as i32, font_size, color);
    }
}
