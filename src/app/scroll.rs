use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::portfolio::SectionId;

pub enum ScrollTarget {
    /// A page section, looked up by its anchor id.
    Section(SectionId),
    /// An element the caller already holds.
    Element(Element),
}

/// Smoothly scrolls `target` to the top of the viewport. Unknown sections are ignored.
pub fn scroll_to(target: ScrollTarget) {
    let element = match target {
        ScrollTarget::Section(section) => match document().get_element_by_id(section.as_str()) {
            Some(el) => el,
            None => {
                log::debug!("no element for section {section}");
                return;
            }
        },
        ScrollTarget::Element(el) => el,
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
