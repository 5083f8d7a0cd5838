use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

/// Visual state of the fixed header for one scroll sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub hidden: bool,
}

impl HeaderState {
    pub fn style(&self) -> String {
        let (background, shadow) = if self.scrolled {
            ("rgba(255, 255, 255, 0.98)", "0 2px 20px rgba(0, 0, 0, 0.15)")
        } else {
            ("rgba(255, 255, 255, 0.95)", "0 2px 20px rgba(0, 0, 0, 0.1)")
        };
        let transform = if self.hidden { "translateY(-100%)" } else { "translateY(0)" };
        format!(
            "background: {}; box-shadow: {}; transform: {};",
            background, shadow, transform
        )
    }
}

/// Remembers the previous scroll offset so the header can tell which way
/// the page is moving.
#[derive(Debug, Default)]
pub struct HeaderTracker {
    last_offset: f64,
}

impl HeaderTracker {
    pub fn observe(&mut self, offset: f64) -> HeaderState {
        let state = HeaderState {
            scrolled: offset > config::HEADER_SCROLLED_OFFSET,
            hidden: offset > self.last_offset && offset > config::HEADER_HIDE_OFFSET,
        };
        self.last_offset = offset;
        state
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section whose range covers `offset` plus the lookahead. Later sections
/// win when ranges overlap, matching document order.
pub fn active_section(sections: &[SectionBounds], offset: f64) -> Option<&str> {
    let position = offset + config::ACTIVE_LINK_LOOKAHEAD;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

pub fn current_offset() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    window
        .scroll_y()
        .ok()
        .or_else(|| {
            window
                .document()
                .and_then(|doc| doc.document_element())
                .map(|root| root.scroll_top() as f64)
        })
        .unwrap_or(0.0)
}

pub fn collect_sections() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

fn header_height(document: &Document) -> f64 {
    document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| header.offset_height() as f64)
}

/// Smoothly scrolls so the section identified by `fragment` ("#about" or
/// "about") sits just below the header. Unknown targets are ignored.
pub fn scroll_to_section(fragment: &str) -> bool {
    let id = fragment.trim_start_matches('#');
    let Some(window) = window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(section) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("No section found for {}", fragment);
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(section.offset_top() as f64, header_height(&document)));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "about".into(), top: 800.0, height: 400.0 },
            SectionBounds { id: "contact".into(), top: 1200.0, height: 400.0 },
        ]
    }

    #[test]
    fn scrolled_style_depends_only_on_offset() {
        let mut tracker = HeaderTracker::default();
        assert!(!tracker.observe(50.0).scrolled);
        assert!(tracker.observe(51.0).scrolled);
        // Scrolling back up past the threshold still counts as scrolled
        assert!(tracker.observe(60.0).scrolled);
        assert!(tracker.observe(55.0).scrolled);
        assert!(!tracker.observe(10.0).scrolled);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold() {
        let mut tracker = HeaderTracker::default();
        assert!(!tracker.observe(90.0).hidden);
        assert!(!tracker.observe(100.0).hidden);
        assert!(tracker.observe(150.0).hidden);
        assert!(tracker.observe(400.0).hidden);
        assert!(!tracker.observe(390.0).hidden);
        assert!(!tracker.observe(390.0).hidden);
        assert!(tracker.observe(391.0).hidden);
    }

    #[test]
    fn last_offset_updates_every_sample() {
        let mut tracker = HeaderTracker::default();
        tracker.observe(500.0);
        tracker.observe(20.0);
        // 120 is above the previous sample (20), not the earlier 500
        assert!(tracker.observe(120.0).hidden);
    }

    #[test]
    fn header_style_reflects_state() {
        let style = HeaderState { scrolled: true, hidden: true }.style();
        assert!(style.contains("0.98"));
        assert!(style.contains("translateY(-100%)"));

        let style = HeaderState::default().style();
        assert!(style.contains("0.95"));
        assert!(style.contains("translateY(0)"));
    }

    #[test]
    fn active_section_uses_lookahead() {
        let sections = sections();
        assert_eq!(active_section(&sections, 750.0), Some("about"));
        assert_eq!(active_section(&sections, 1150.0), Some("contact"));
        assert_eq!(active_section(&sections, 0.0), None);
        assert_eq!(active_section(&sections, 1500.0), None);
    }

    #[test]
    fn section_range_is_half_open() {
        let sections = sections();
        assert_eq!(active_section(&sections, 700.0), Some("about"));
        assert_eq!(active_section(&sections, 1100.0), Some("contact"));
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            SectionBounds { id: "hero".into(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "services".into(), top: 500.0, height: 500.0 },
        ];
        assert_eq!(active_section(&sections, 450.0), Some("services"));
        assert_eq!(active_section(&sections, 100.0), Some("hero"));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
    }
}
