use crate::entities::project::Project;
use crate::use_cases::theme::ThemeMode;
use crate::utils::icons::IconId;
use crate::utils::palette::{BUTTON, CONTAINER, HEADING, MUTED, OUTLINE_LINK, TAG, TEXT};
use crate::views::common::{external_link, icon, safe_href, tag};
use crate::web::markup::Element;

pub const VIEW_CODE: &str = "View Code";
pub const LIVE_DEMO: &str = "Live Demo";

pub fn render_project_popup(project: &Project, mode: ThemeMode) -> Element {
    let code_link = project
        .github_link
        .as_deref()
        .and_then(safe_href)
        .map(|href| {
            external_link(&href)
                .class(format!("px-4 py-2 rounded-lg font-medium {} {}", BUTTON.pick(mode), TEXT.pick(mode)))
                .attr("data-link", "code")
                .text(VIEW_CODE)
        });
    let demo_link = project
        .live_link
        .as_deref()
        .and_then(safe_href)
        .map(|href| {
            external_link(&href)
                .class(format!("px-4 py-2 rounded-lg border-2 font-medium {}", OUTLINE_LINK.pick(mode)))
                .attr("data-link", "demo")
                .text(LIVE_DEMO)
        });

    let details = Element::new("div")
        .class("space-y-6")
        .child(
            Element::new("div")
                .child(
                    Element::new("h2")
                        .class(format!("text-2xl font-bold mb-2 {}", HEADING.pick(mode)))
                        .text(&project.title),
                )
                .child(
                    Element::new("p")
                        .class(format!("text-sm {}", MUTED.pick(mode)))
                        .text(&project.description),
                ),
        )
        .child(
            Element::new("div")
                .child(
                    Element::new("h3")
                        .class(format!("text-lg font-semibold mb-3 {}", HEADING.pick(mode)))
                        .text("Technologies Used"),
                )
                .child(
                    Element::new("div")
                        .class("flex flex-wrap gap-2")
                        .children(project.tech_stack.iter().map(|t| tag(t, TAG.pick(mode)))),
                ),
        )
        .child(
            Element::new("div")
                .class("flex flex-col sm:flex-row gap-4")
                .child_if(code_link)
                .child_if(demo_link),
        );

    Element::new("div")
        .class("fixed inset-0 z-50 flex items-center justify-center p-4")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("data-popup", "project")
        .child(
            Element::new("div")
                .class("fixed inset-0 bg-black bg-opacity-50")
                .attr("data-action", "close-popup"),
        )
        .child(
            Element::new("div")
                .class(format!("relative w-full lg:max-w-4xl rounded-xl overflow-hidden {}", CONTAINER.pick(mode)))
                .child(
                    Element::new("button")
                        .class(format!("absolute top-4 right-4 p-2 rounded-full {}", BUTTON.pick(mode)))
                        .attr("data-action", "close-popup")
                        .attr("aria-label", "Close")
                        .child(icon(IconId::Close, "w-6 h-6")),
                )
                .child(
                    Element::new("div")
                        .class("grid grid-cols-1 md:grid-cols-2 gap-6 p-6")
                        .child(details)
                        .child(
                            Element::new("div")
                                .class("relative h-64 md:h-full rounded-lg overflow-hidden")
                                .child(
                                    Element::new("img")
                                        .class("absolute inset-0 w-full h-full object-cover")
                                        .attr("src", &project.image)
                                        .attr("alt", &project.title),
                                ),
                        ),
                ),
        )
}
