//! In-page navigation: section ids, link tables, the mobile menu state and
//! the smooth scroll to a section.
//!
//! The browser is reached only through [`SectionLookup`] and [`Viewport`], so
//! everything here runs under plain `cargo test`.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Explore,
    Features,
    About,
    Team,
    Subscribe,
}

impl Section {
    /// Every section the landing page renders.
    #[cfg(test)]
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Explore,
        Section::Features,
        Section::About,
        Section::Team,
        Section::Subscribe,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Explore => "explore",
            Section::Features => "features",
            Section::About => "about",
            Section::Team => "team",
            Section::Subscribe => "subscribe",
        }
    }

    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

impl NavLink {
    const fn new(label: &'static str, target: Section) -> Self {
        Self { label, target }
    }
}

/// Header links, desktop and mobile. The last one is rendered as the call to action.
pub const HEADER_LINKS: [NavLink; 4] = [
    NavLink::new("About", Section::About),
    NavLink::new("Features", Section::Features),
    NavLink::new("Explore", Section::Explore),
    NavLink::new("Get Started", Section::Subscribe),
];

pub const FOOTER_COMPANY_LINKS: [NavLink; 4] = [
    NavLink::new("About Us", Section::About),
    NavLink::new("Our Team", Section::Team),
    NavLink::new("Features", Section::Features),
    NavLink::new("Subscribe", Section::Subscribe),
];

/// Returns the section id named by a same-document fragment href (`#about`).
///
/// Bare `#`, paths and absolute URLs are not fragments and keep the
/// browser's default handling.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

pub trait SectionLookup {
    /// Top offset of the element with this id, or `None` when it is not in the document.
    fn section_top(&self, id: &str) -> Option<f64>;
}

pub trait Viewport {
    fn smooth_scroll_to(&self, top: f64);
}

/// Smooth-scrolls to the section with `id`, leaving room for the fixed header.
///
/// Unknown ids are ignored. Returns the scroll position that was requested.
pub fn scroll_to_section<L, V>(lookup: &L, viewport: &V, id: &str) -> Option<f64>
where
    L: SectionLookup + ?Sized,
    V: Viewport + ?Sized,
{
    let Some(top) = lookup.section_top(id) else {
        debug!("No section with id {:?}, skipping scroll", id);
        return None;
    };
    let target = scroll_target(top, config::HEADER_OFFSET);
    debug!("Scrolling to #{} at {}", id, target);
    viewport.smooth_scroll_to(target);
    Some(target)
}

/// Closes the menu and scrolls to `id`. The menu closes even when the id is unknown.
pub fn navigate<L, V>(
    lookup: &L,
    viewport: &V,
    id: &str,
    set_menu: impl FnOnce(MenuState),
) -> Option<f64>
where
    L: SectionLookup + ?Sized,
    V: Viewport + ?Sized,
{
    set_menu(MenuState::Closed);
    scroll_to_section(lookup, viewport, id)
}

/// The live document and window.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl SectionLookup for DomPage {
    fn section_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
}

impl Viewport for DomPage {
    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Navigates within the current document, if there is one.
pub fn navigate_in_page(id: &str, set_menu: impl FnOnce(MenuState)) {
    match DomPage::current() {
        Some(page) => {
            navigate(&page, &page, id, set_menu);
        }
        None => set_menu(MenuState::Closed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeDocument {
        tops: HashMap<&'static str, f64>,
    }

    impl FakeDocument {
        fn with_all_sections() -> Self {
            let tops = Section::ALL
                .iter()
                .enumerate()
                .map(|(i, section)| (section.id(), 64.0 + 600.0 * i as f64))
                .collect();
            Self { tops }
        }
    }

    impl SectionLookup for FakeDocument {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }
    }

    #[derive(Default)]
    struct RecordingViewport {
        scrolls: RefCell<Vec<f64>>,
    }

    impl Viewport for RecordingViewport {
        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn link_tables_target_header_and_footer_sections() {
        let header: Vec<_> = HEADER_LINKS.iter().map(|link| link.target.href()).collect();
        assert_eq!(header, ["#about", "#features", "#explore", "#subscribe"]);

        let footer: Vec<_> = FOOTER_COMPANY_LINKS.iter().map(|link| link.target.href()).collect();
        assert_eq!(footer, ["#about", "#team", "#features", "#subscribe"]);
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("pricing"), None);
    }

    #[test]
    fn fragment_target_only_accepts_named_fragments() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/blog"), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
    }

    #[test]
    fn toggle_twice_returns_to_closed() {
        let menu = MenuState::default();
        assert_eq!(menu, MenuState::Closed);
        let opened = menu.toggle();
        assert!(opened.is_open());
        assert_eq!(opened.toggle(), MenuState::Closed);
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(1000.0, 80.0), 920.0);
        assert_eq!(scroll_target(0.0, config::HEADER_OFFSET), -80.0);
    }

    #[test]
    fn navigate_closes_menu_from_either_state() {
        let document = FakeDocument::with_all_sections();
        let viewport = RecordingViewport::default();

        for initial in [MenuState::Open, MenuState::Closed] {
            let mut menu = initial;
            navigate(&document, &viewport, "about", |state| menu = state);
            assert_eq!(menu, MenuState::Closed);
        }
    }

    #[test]
    fn navigate_scrolls_to_section_minus_header() {
        let document = FakeDocument::with_all_sections();
        let viewport = RecordingViewport::default();

        let target = navigate(&document, &viewport, "features", |_| {});

        let features_top = document.tops["features"];
        assert_eq!(target, Some(features_top - 80.0));
        assert_eq!(*viewport.scrolls.borrow(), vec![features_top - 80.0]);
    }

    #[test]
    fn navigate_to_missing_section_is_a_no_op() {
        let document = FakeDocument::with_all_sections();
        let viewport = RecordingViewport::default();
        let mut menu = MenuState::Open;

        let target = navigate(&document, &viewport, "pricing", |state| menu = state);

        assert_eq!(target, None);
        assert!(viewport.scrolls.borrow().is_empty());
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn repeated_navigation_retargets_to_latest() {
        let document = FakeDocument::with_all_sections();
        let viewport = RecordingViewport::default();

        navigate(&document, &viewport, "team", |_| {});
        navigate(&document, &viewport, "hero", |_| {});
        navigate(&document, &viewport, "hero", |_| {});

        let scrolls = viewport.scrolls.borrow();
        assert_eq!(scrolls.len(), 3);
        assert_eq!(scrolls.last().copied(), Some(document.tops["hero"] - 80.0));
    }
}
