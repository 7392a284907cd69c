use crate::settings::AppConfig;
use crate::use_cases::theme::ThemeMode;
use crate::utils::palette::{BUTTON, CONTAINER, OUTLINE_LINK};
use crate::web::markup::Element;

pub fn render_hero(config: &AppConfig, mode: ThemeMode) -> Element {
    let (subtitle, button_text) = match mode {
        ThemeMode::Dark => ("text-gray-300", "text-white"),
        ThemeMode::Light => ("text-gray-700", "text-gray-800"),
    };

    Element::new("div")
        .class(format!("min-h-screen flex items-center justify-center {}", CONTAINER.pick(mode)))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center")
                .child(
                    Element::new("h1").class("text-4xl sm:text-5xl md:text-6xl font-bold mb-6").child(
                        Element::new("span")
                            .class("text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-600")
                            .text(&config.owner_name),
                    ),
                )
                .child(
                    Element::new("p")
                        .class(format!("text-xl sm:text-2xl mb-8 {}", subtitle))
                        .text(&config.headline),
                )
                .child(
                    Element::new("div")
                        .class("flex justify-center space-x-4")
                        .child(
                            Element::new("a")
                                .class(format!("px-6 py-3 rounded-lg font-medium {} {}", BUTTON.pick(mode), button_text))
                                .attr("href", "#projects")
                                .text("View Projects"),
                        )
                        .child(
                            Element::new("a")
                                .class(format!("px-6 py-3 rounded-lg border-2 font-medium {}", OUTLINE_LINK.pick(mode)))
                                .attr("href", "#contact")
                                .text("Contact Me"),
                        ),
                ),
        )
}
