use crate::config::{ACTIVE_SECTION_PROBE, HEADER_OFFSET, NAVBAR_HIDE_AFTER, NAVBAR_SCROLLED_AFTER};

/// Where to scroll so a section starting at `section_top` clears the header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section under `scroll_y + 100`. Overlapping sections resolve to the
/// last one in document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;
    sections
        .iter()
        .filter(|section| section.contains(probe))
        .last()
        .map(|section| section.id.as_str())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub hidden: bool,
    pub scrolled: bool,
}

impl NavbarAppearance {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Remembers the previous scroll sample to tell scroll direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarScroll {
    last_y: f64,
}

impl NavbarScroll {
    pub fn new(initial_y: f64) -> Self {
        Self { last_y: initial_y }
    }

    pub fn sample(&mut self, y: f64) -> NavbarAppearance {
        let appearance = NavbarAppearance {
            hidden: y > self.last_y && y > NAVBAR_HIDE_AFTER,
            scrolled: y > NAVBAR_SCROLLED_AFTER,
        };
        self.last_y = y;
        appearance
    }
}
