use crate::constants::{DARK_CLASS, SECTION_IDS};
use crate::use_cases::navigation::NavigationSnapshot;
use crate::use_cases::theme::ThemeMode;
use crate::utils::icons::IconId;
use crate::utils::palette::{CONTAINER, TEXT};
use crate::views::common::icon;
use crate::web::markup::{Element, Node};

pub fn nav_label(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn nav_links(class: &str) -> Vec<Element> {
    SECTION_IDS
        .iter()
        .map(|id| {
            Element::new("a")
                .class(class)
                .attr("href", format!("#{}", id))
                .attr("data-action", "close-menu")
                .text(nav_label(id))
        })
        .collect()
}

pub fn render_nav(nav: NavigationSnapshot, brand: &str, mode: ThemeMode) -> Element {
    let theme_icon = if mode.is_dark() { IconId::Sun } else { IconId::Moon };
    let menu_icon = if nav.mobile_menu_open { IconId::Close } else { IconId::Menu };
    let mobile_menu = nav.mobile_menu_open.then(|| {
        Element::new("div")
            .class("md:hidden px-4 pt-2 pb-3 space-y-1")
            .attr("data-menu", "mobile")
            .children(nav_links("block px-3 py-2 rounded-md hover:text-neon-blue"))
    });

    Element::new("nav")
        .class(format!(
            "fixed w-full z-50 transition-all duration-300 {}",
            if nav.scrolled { "glass-effect py-2" } else { "py-4" }
        ))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center")
                .child(Element::new("div").class("text-2xl font-bold gradient-text").text(brand))
                .child(
                    Element::new("div")
                        .class("hidden md:flex items-center space-x-8")
                        .children(nav_links("hover:text-neon-blue transition-colors duration-200"))
                        .child(
                            Element::new("button")
                                .class("p-2 rounded-full")
                                .attr("data-action", "toggle-theme")
                                .attr("aria-label", "Toggle dark mode")
                                .child(icon(theme_icon, "h-6 w-6")),
                        ),
                )
                .child(
                    Element::new("button")
                        .class("md:hidden p-2")
                        .attr("data-action", "toggle-menu")
                        .attr("aria-expanded", nav.mobile_menu_open.to_string())
                        .child(icon(menu_icon, "h-6 w-6")),
                ),
        )
        .child_if(mobile_menu)
}

/// The whole page. The root carries the `dark` class when the dark theme is active.
pub fn render_page(
    mode: ThemeMode,
    nav: Element,
    hero: Element,
    sections: Vec<(&'static str, Element)>,
    footer: Element,
) -> Node {
    let root_class = match mode {
        ThemeMode::Dark => format!("{} min-h-screen {} {}", DARK_CLASS, CONTAINER.dark, TEXT.dark),
        ThemeMode::Light => format!("min-h-screen {} {}", CONTAINER.light, TEXT.light),
    };

    Element::new("div")
        .class(root_class)
        .attr("data-theme", if mode.is_dark() { "dark" } else { "light" })
        .child(nav)
        .child(
            Element::new("main")
                .child(Element::new("header").child(hero))
                .children(
                    sections
                        .into_iter()
                        .map(|(id, content)| Element::new("section").attr("id", id).child(content)),
                ),
        )
        .child(footer)
        .into()
}
