//! Static page content and section layout. The page is laid out once per
//! window width; every rect is in page coordinates (y grows downward from
//! the top of the document, independent of scroll).

use raylib::prelude::*;

use crate::constants::*;
use crate::scroll::Reveal;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SectionId {
    Home,
    Services,
    Testimonials,
    Contact,
}

pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rect: Rectangle,
    pub title_reveal: Option<usize>,
}

pub struct Card {
    pub title: &'static str,
    pub blurb: &'static str,
    pub rect: Rectangle,
    pub reveal: usize,
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: Option<&'static str>,
}

const SIDE_MARGIN: f32 = 80.0;
const CARD_GAP: f32 = 24.0;
const CARD_HEIGHT: f32 = 190.0;
const TITLE_BLOCK: f32 = 110.0;
const HERO_HEIGHT: f32 = 560.0;
const TESTIMONIALS_BODY: f32 = 360.0;
const CONTACT_BODY: f32 = 560.0;
const FOOTER_HEIGHT: f32 = 120.0;

const SERVICES: [(&str, &str); 6] = [
    (
        "Custom Software",
        "Product engineering from first sketch to production rollout.",
    ),
    (
        "Cloud Platforms",
        "Resilient infrastructure that scales with your traffic, not your bills.",
    ),
    (
        "Data Pipelines",
        "Dependable ingestion and analytics with observable, testable stages.",
    ),
    (
        "Mobile Apps",
        "Native-feel experiences shipped to both stores from one codebase.",
    ),
    (
        "Security Reviews",
        "Threat modeling and hardening before attackers do it for you.",
    ),
    (
        "Team Augmentation",
        "Senior engineers who slot into your process from day one.",
    ),
];

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "CodeRift rebuilt our checkout flow and conversion jumped 18% in the first month.",
        author: "Maya Okafor",
        role: "VP Engineering, Lumen Retail",
        avatar: Some("maya.jpg"),
    },
    Testimonial {
        quote: "The only agency we've used that writes tests without being asked.",
        author: "Daniel Reyes",
        role: "CTO, Harbor Logistics",
        avatar: Some("daniel.jpg"),
    },
    Testimonial {
        quote: "They migrated two decades of data with zero downtime. Remarkable work.",
        author: "Priya Natarajan",
        role: "Director of IT, Meridian Health",
        avatar: Some("priya.jpg"),
    },
    Testimonial {
        quote: "Clear estimates, honest trade-offs, and a launch that actually hit the date.",
        author: "Tomas Lindqvist",
        role: "Founder, Fjord Analytics",
        avatar: Some("tomas.jpg"),
    },
];

pub struct Page {
    pub width: f32,
    pub sections: Vec<Section>,
    pub cards: Vec<Card>,
    pub reveals: Vec<Reveal>,
    pub content_height: f32,
}

impl Page {
    pub fn build(width: f32) -> Self {
        let content_w = width - 2.0 * SIDE_MARGIN;
        let mut sections = Vec::new();
        let mut cards = Vec::new();
        let mut reveals = Vec::new();
        let mut y = HEADER_HEIGHT;

        // Hero: no reveal, it is visible on load
        sections.push(Section {
            id: SectionId::Home,
            title: "Software that moves you forward",
            subtitle: "CodeRift Technologies designs, builds and runs the systems behind growing companies.",
            rect: Rectangle::new(0.0, y, width, HERO_HEIGHT),
            title_reveal: None,
        });
        y += HERO_HEIGHT;

        // Services: title block plus a two-row card grid
        let services_top = y;
        let title_rect = Rectangle::new(SIDE_MARGIN, y + 24.0, content_w, 60.0);
        reveals.push(Reveal::new(title_rect));
        let services_title_reveal = reveals.len() - 1;
        y += TITLE_BLOCK;

        let card_w = (content_w - 2.0 * CARD_GAP) / 3.0;
        for (i, (title, blurb)) in SERVICES.iter().enumerate() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            let rect = Rectangle::new(
                SIDE_MARGIN + col * (card_w + CARD_GAP),
                y + row * (CARD_HEIGHT + CARD_GAP),
                card_w,
                CARD_HEIGHT,
            );
            reveals.push(Reveal::new(rect));
            cards.push(Card {
                title,
                blurb,
                rect,
                reveal: reveals.len() - 1,
            });
        }
        y += 2.0 * CARD_HEIGHT + CARD_GAP + 64.0;
        sections.push(Section {
            id: SectionId::Services,
            title: "What we do",
            subtitle: "Six practices, one standard of care.",
            rect: Rectangle::new(0.0, services_top, width, y - services_top),
            title_reveal: Some(services_title_reveal),
        });

        // Testimonials: title block plus the carousel body
        let testimonials_top = y;
        let title_rect = Rectangle::new(SIDE_MARGIN, y + 24.0, content_w, 60.0);
        reveals.push(Reveal::new(title_rect));
        let testimonials_title_reveal = reveals.len() - 1;
        y += TITLE_BLOCK + TESTIMONIALS_BODY;
        sections.push(Section {
            id: SectionId::Testimonials,
            title: "What clients say",
            subtitle: "Four partners, in their own words.",
            rect: Rectangle::new(0.0, testimonials_top, width, y - testimonials_top),
            title_reveal: Some(testimonials_title_reveal),
        });

        // Contact: title block plus the form
        let contact_top = y;
        let title_rect = Rectangle::new(SIDE_MARGIN, y + 24.0, content_w, 60.0);
        reveals.push(Reveal::new(title_rect));
        let contact_title_reveal = reveals.len() - 1;
        y += TITLE_BLOCK + CONTACT_BODY;
        sections.push(Section {
            id: SectionId::Contact,
            title: "Start a project",
            subtitle: "Tell us where you want to be in six months.",
            rect: Rectangle::new(0.0, contact_top, width, y - contact_top),
            title_reveal: Some(contact_title_reveal),
        });

        y += FOOTER_HEIGHT;

        Self {
            width,
            sections,
            cards,
            reveals,
            content_height: y,
        }
    }

    pub fn nav_links() -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home",
                target: SectionId::Home,
            },
            NavLink {
                label: "Services",
                target: SectionId::Services,
            },
            NavLink {
                label: "Testimonials",
                target: SectionId::Testimonials,
            },
            NavLink {
                label: "Contact",
                target: SectionId::Contact,
            },
        ]
    }

    pub fn testimonials() -> Vec<Testimonial> {
        TESTIMONIALS.to_vec()
    }

    pub fn section(&self, id: SectionId) -> &Section {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .expect("every section id is built into the page")
    }

    pub fn section_top(&self, id: SectionId) -> f32 {
        // The hero anchor means "top of page", not "under the header"
        if id == SectionId::Home {
            0.0
        } else {
            self.section(id).rect.y
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_without_gaps_or_overlap() {
        let page = Page::build(1280.0);
        let mut last_bottom = HEADER_HEIGHT;
        for section in &page.sections {
            assert_eq!(section.rect.y, last_bottom);
            last_bottom = section.rect.y + section.rect.height;
        }
        assert_eq!(page.content_height, last_bottom + FOOTER_HEIGHT);
    }

    #[test]
    fn cards_stay_inside_the_services_section() {
        let page = Page::build(1280.0);
        let services = page.section(SectionId::Services).rect;
        for card in &page.cards {
            assert!(card.rect.y >= services.y);
            assert!(card.rect.y + card.rect.height <= services.y + services.height);
            assert!(card.rect.x >= 0.0);
            assert!(card.rect.x + card.rect.width <= page.width);
        }
    }

    #[test]
    fn every_card_has_a_reveal() {
        let page = Page::build(1280.0);
        for card in &page.cards {
            assert!(card.reveal < page.reveals.len());
        }
    }

    #[test]
    fn home_anchor_is_the_top_of_the_page() {
        let page = Page::build(1280.0);
        assert_eq!(page.section_top(SectionId::Home), 0.0);
        assert!(page.section_top(SectionId::Contact) > page.section_top(SectionId::Services));
    }

    #[test]
    fn four_testimonials_ship_with_the_page() {
        assert_eq!(Page::testimonials().len(), 4);
    }
}
