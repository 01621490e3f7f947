//! Smooth scrolling between the page sections
//!
//! Scrolls are fire-and-forget. A second request before the first animation
//! finishes simply wins; the browser owns the animation.

/// Anchored sections of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Services,
    Packages,
    Contact,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Packages => "packages",
            Section::Contact => "contact",
        }
    }
}

/// Something that can bring an element into view by id
pub trait SectionHost {
    /// Start a smooth scroll to the element with `id`.
    /// Returns `false` when the element does not exist.
    fn smooth_scroll_to(&self, id: &str) -> bool;

    fn smooth_scroll_to_top(&self);
}

/// Scroll to `section_id`; a missing section is silently ignored.
pub fn go_to(host: &impl SectionHost, section_id: &str) {
    let _ = host.smooth_scroll_to(section_id);
}

pub fn go_to_section(host: &impl SectionHost, section: Section) {
    go_to(host, section.id());
}

pub fn scroll_to_top(host: &impl SectionHost) {
    host.smooth_scroll_to_top();
}

/// The live browser document
#[derive(Debug, Clone, Copy, Default)]
pub struct Document;

#[cfg(feature = "hydrate")]
impl SectionHost for Document {
    fn smooth_scroll_to(&self, id: &str) -> bool {
        use leptos::web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = leptos::web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn smooth_scroll_to_top(&self) {
        use leptos::web_sys::{ScrollBehavior, ScrollToOptions};

        if let Some(window) = leptos::web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

// Rendering on the server has no viewport.
#[cfg(not(feature = "hydrate"))]
impl SectionHost for Document {
    fn smooth_scroll_to(&self, _id: &str) -> bool {
        false
    }

    fn smooth_scroll_to_top(&self) {}
}
