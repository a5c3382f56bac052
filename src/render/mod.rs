//! HTML views, built with maud so every interpolated value is escaped.

pub mod card;
pub mod icons;
pub mod layout;
pub mod timeline;

use icons::Icon;
use maud::{html, Markup};

/// Link that opens in a new browsing context with no handle back to the page.
pub fn external_link(href: &str, label: &str, icon: Icon, class: &str) -> Markup {
    html! {
        a class=(class) href=(href) target="_blank" rel="noopener noreferrer" aria-label=(label) {
            (icon.render(20))
        }
    }
}
