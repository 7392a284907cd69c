use crate::entities::contact_me::SocialMediaLink;
use crate::use_cases::resource::FetchState;
use crate::use_cases::theme::ThemeMode;
use crate::utils::palette::{BORDER, ERROR_TEXT, MUTED};
use crate::views::contact::social_icons;
use crate::web::markup::Element;

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

/// Footer with the copyright line and one icon per social platform.
///
/// The link row shows a pulse placeholder while loading and the error text if the links failed to load.
pub fn render_footer(links: &FetchState<Vec<SocialMediaLink>>, brand: &str, year: i32, mode: ThemeMode) -> Element {
    let link_row = match links {
        FetchState::Loading => Element::new("div")
            .class("flex space-x-6 animate-pulse")
            .attr("role", "status")
            .children((0..3).map(|_| Element::new("div").class("w-6 h-6 rounded-full bg-gray-300"))),
        FetchState::Failed(message) => Element::new("div")
            .class("flex space-x-6")
            .child(Element::new("p").class(ERROR_TEXT).text(message.as_str())),
        FetchState::Loaded(links) => Element::new("div")
            .class("flex space-x-6")
            .children(social_icons(links, format!("{} hover:text-blue-500", MUTED.pick(mode)).as_str())),
    };

    Element::new("footer")
        .class(format!("border-t py-8 {}", BORDER.pick(mode)))
        .child(
            Element::new("div")
                .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row justify-between items-center")
                .child(
                    Element::new("div").child(
                        Element::new("p")
                            .class(MUTED.pick(mode))
                            .text(copyright_line(year, brand)),
                    ),
                )
                .child(link_row),
        )
}
