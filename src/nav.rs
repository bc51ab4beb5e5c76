//! Navigation behaviour: navbar and back-to-top state driven by scroll
//! position, the mobile menu toggle and its overlay, and highlighting the
//! link of the section currently under the navbar.

use crate::config::{ACTIVE_SECTION_OFFSET, BACK_TO_TOP_AFTER, NAVBAR_SCROLLED_AFTER};
use crate::dom_helpers::{self, Listener};
use crate::error::SetupError;
use crate::reveal;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, HtmlElement, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffects {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollEffects {
    pub fn at(scroll_y: f64) -> Self {
        ScrollEffects {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_AFTER,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section whose span holds `scroll_y` plus the navbar offset.
/// When spans overlap the later section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Page scrolling is locked while the menu covers it.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

struct NavMenu {
    document: Document,
    toggle: HtmlElement,
    links: HtmlElement,
    overlay: Option<HtmlElement>,
    state: MenuState,
}

impl NavMenu {
    fn apply(&self) -> Result<(), SetupError> {
        let open = self.state.is_open();
        self.toggle.class_list().toggle_with_force("active", open)?;
        self.links.class_list().toggle_with_force("open", open)?;
        if let Some(overlay) = &self.overlay {
            overlay.class_list().toggle_with_force("active", open)?;
        }
        if let Some(body) = self.document.body() {
            body.style()
                .set_property("overflow", self.state.body_overflow())?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), SetupError> {
        self.state.close();
        self.apply()
    }
}

fn ensure_overlay(menu: &Rc<RefCell<NavMenu>>) -> Result<(), SetupError> {
    if menu.borrow().overlay.is_some() {
        return Ok(());
    }
    let document = menu.borrow().document.clone();
    let overlay = dom_helpers::create_html(&document, "div")?;
    overlay.class_list().add_1("nav-overlay")?;
    if let Some(body) = document.body() {
        body.append_child(&overlay)?;
    }
    let close_menu = Rc::clone(menu);
    Listener::new(&overlay, "click", move |_| {
        if let Err(err) = close_menu.borrow_mut().close() {
            log::warn!("closing nav menu: {}", err);
        }
    })?
    .forget();
    menu.borrow_mut().overlay = Some(overlay);
    Ok(())
}

fn setup_menu(document: &Document) -> Result<(), SetupError> {
    let toggle = dom_helpers::element_by_id::<HtmlElement>(document, "navToggle")?;
    let links = dom_helpers::element_by_id::<HtmlElement>(document, "navLinks")?;
    let menu = Rc::new(RefCell::new(NavMenu {
        document: document.clone(),
        toggle: toggle.clone(),
        links,
        overlay: None,
        state: MenuState::default(),
    }));

    {
        let menu = Rc::clone(&menu);
        Listener::new(&toggle, "click", move |_| {
            let result = ensure_overlay(&menu).and_then(|_| {
                let mut menu = menu.borrow_mut();
                menu.state.toggle();
                menu.apply()
            });
            if let Err(err) = result {
                log::warn!("toggling nav menu: {}", err);
            }
        })?
        .forget();
    }

    for link in dom_helpers::query_all_in_document(document, ".nav-link")? {
        let menu = Rc::clone(&menu);
        Listener::new(&link, "click", move |_| {
            if let Err(err) = menu.borrow_mut().close() {
                log::warn!("closing nav menu: {}", err);
            }
        })?
        .forget();
    }
    Ok(())
}

fn setup_scroll_effects(window: &Window, document: &Document) -> Result<(), SetupError> {
    let navbar = dom_helpers::element_by_id::<HtmlElement>(document, "navbar").ok();
    let back_to_top = dom_helpers::element_by_id::<HtmlElement>(document, "backToTop").ok();
    if navbar.is_none() && back_to_top.is_none() {
        return Err(SetupError::MissingElement("#navbar".to_owned()));
    }

    if let Some(button) = &back_to_top {
        let scroll_window = window.clone();
        Listener::new(button, "click", move |_| {
            reveal::smooth_scroll_to(&scroll_window, 0.0);
        })?
        .forget();
    }

    let scroll_window = window.clone();
    Listener::new(window, "scroll", move |_| {
        let effects = ScrollEffects::at(scroll_window.scroll_y().unwrap_or(0.0));
        if let Some(navbar) = &navbar {
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", effects.navbar_scrolled);
        }
        if let Some(button) = &back_to_top {
            let _ = button
                .class_list()
                .toggle_with_force("visible", effects.back_to_top_visible);
        }
    })?
    .forget();
    Ok(())
}

fn setup_active_link(window: &Window, document: &Document) -> Result<(), SetupError> {
    let sections = dom_helpers::query_all_in_document(document, "section[id]")?;
    let links = dom_helpers::query_all_in_document(document, ".nav-link")?;

    let scroll_window = window.clone();
    Listener::new(window, "scroll", move |_| {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|section| SectionBounds {
                id: section.id(),
                top: section.offset_top() as f64,
                height: section.offset_height() as f64,
            })
            .collect();
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Some(id) = active_section(scroll_y, &bounds) {
            let href = format!("#{}", id);
            for link in &links {
                let is_active = link.get_attribute("href").as_deref() == Some(href.as_str());
                let _ = link.class_list().toggle_with_force("active", is_active);
            }
        }
    })?
    .forget();
    Ok(())
}

/// Wire every navigation behaviour whose elements are on the page.
pub fn setup(window: &Window, document: &Document) -> Vec<SetupError> {
    let mut errors = Vec::new();
    if let Err(err) = setup_scroll_effects(window, document) {
        errors.push(err);
    }
    if let Err(err) = setup_menu(document) {
        errors.push(err);
    }
    if let Err(err) = setup_active_link(window, document) {
        errors.push(err);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_owned(),
            top,
            height,
        }
    }

    #[test]
    fn scroll_thresholds_are_strict() {
        assert_eq!(
            ScrollEffects::at(50.0),
            ScrollEffects {
                navbar_scrolled: false,
                back_to_top_visible: false
            }
        );
        assert!(ScrollEffects::at(51.0).navbar_scrolled);
        assert!(!ScrollEffects::at(500.0).back_to_top_visible);
        assert!(ScrollEffects::at(500.5).back_to_top_visible);
    }

    #[test]
    fn active_section_uses_navbar_offset() {
        let sections = vec![
            section("hero", 0.0, 700.0),
            section("about", 700.0, 500.0),
            section("contact", 1200.0, 400.0),
        ];
        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(599.0, &sections), Some("hero"));
        assert_eq!(active_section(600.0, &sections), Some("about"));
        assert_eq!(active_section(1150.0, &sections), Some("contact"));
        assert_eq!(active_section(1500.0, &sections), None);
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let sections = vec![section("outer", 0.0, 1000.0), section("inner", 200.0, 100.0)];
        assert_eq!(active_section(150.0, &sections), Some("inner"));
        assert_eq!(active_section(50.0, &sections), Some("outer"));
    }

    #[test]
    fn nothing_above_first_section() {
        let sections = vec![section("about", 400.0, 300.0)];
        assert_eq!(active_section(0.0, &sections), None);
    }

    #[test]
    fn menu_toggle_locks_scrolling() {
        let mut menu = MenuState::default();
        assert_eq!(menu.body_overflow(), "");
        assert!(menu.toggle());
        assert_eq!(menu.body_overflow(), "hidden");
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
        menu.close();
        assert!(!menu.is_open());
    }
}
