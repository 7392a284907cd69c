use crate::settings::AppConfig;
use crate::use_cases::theme::ThemeMode;
use crate::utils::icons::IconId;
use crate::utils::palette::{MUTED, OUTLINE_LINK};
use crate::views::common::{external_link, icon};
use crate::web::markup::Element;

pub fn terminal_lines(config: &AppConfig) -> Vec<String> {
    vec![
        format!("> Hello, I'm {}", config.owner_name),
        format!("> {}", config.headline),
        "> Specializing in Web Development".to_string(),
        "> Let's build something amazing together!".to_string(),
    ]
}

pub fn render_about(config: &AppConfig, mode: ThemeMode) -> Element {
    let intro = Element::new("div")
        .class("space-y-6")
        .child(
            Element::new("h1")
                .class("text-4xl md:text-5xl font-bold")
                .text("Hi, I'm ")
                .child(Element::new("span").class("gradient-text").text(&config.owner_name)),
        )
        .child(Element::new("p").class(format!("text-lg {}", MUTED.pick(mode))).text(format!(
            "A passionate {} with expertise in building modern web applications. \
             I love creating elegant solutions to complex problems and turning ideas into reality.",
            config.headline
        )))
        .child(
            Element::new("div")
                .class("flex space-x-4")
                .child(Element::new("a").class("btn-primary").attr("href", "#contact").text("Get in Touch"))
                .child(
                    external_link(&config.resume_url)
                        .class(format!("border font-mono font-medium py-2 px-4 rounded-lg {}", OUTLINE_LINK.pick(mode)))
                        .text("View Resume"),
                ),
        );

    let terminal = Element::new("div")
        .class("terminal")
        .attr("data-terminal", "about")
        .child(
            Element::new("div")
                .class("flex items-center space-x-2 mb-4")
                .child(icon(IconId::Terminal, "h-5 w-5 text-neon-green"))
                .child(Element::new("span").class("text-neon-green").text("~/portfolio")),
        )
        .children(
            terminal_lines(config)
                .into_iter()
                .map(|line| Element::new("div").class("text-neon-green font-mono").text(line)),
        );

    Element::new("div")
        .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20")
        .child(
            Element::new("div")
                .class("grid grid-cols-1 md:grid-cols-2 gap-12 items-center")
                .child(intro)
                .child(Element::new("div").class("relative").child(terminal)),
        )
}
