use crate::constants::CARD_TECH_PREVIEW;
use crate::entities::project::Project;
use crate::use_cases::project_gallery::GalleryState;
use crate::use_cases::resource::FetchState;
use crate::use_cases::theme::ThemeMode;
use crate::utils::palette::{CONTAINER, ERROR_TEXT, MUTED};
use crate::views::common::{spinner, tag};
use crate::views::project_popup::render_project_popup;
use crate::web::markup::Element;

const CARD_TAG: &str = "bg-gray-700 text-gray-200";

fn project_card(project: &Project, mode: ThemeMode) -> Element {
    let (shown, hidden) = project.tech_preview(CARD_TECH_PREVIEW);
    let card_bg = match mode {
        ThemeMode::Dark => CONTAINER.dark,
        ThemeMode::Light => "bg-black",
    };

    let overflow = (hidden > 0).then(|| tag(&format!("+{}", hidden), CARD_TAG));

    Element::new("div")
        .class("cursor-pointer")
        .attr("data-project-id", project.id.to_string())
        .attr("data-action", "open-project")
        .child(
            Element::new("div")
                .class(format!("rounded-xl overflow-hidden {}", card_bg))
                .child(
                    Element::new("div").class("relative h-48").child(
                        Element::new("img")
                            .class("absolute inset-0 w-full h-full object-cover")
                            .attr("src", &project.image)
                            .attr("alt", &project.title),
                    ),
                )
                .child(
                    Element::new("div")
                        .class("p-6")
                        .child(Element::new("h3").class("text-xl font-bold mb-2 text-white").text(&project.title))
                        .child(Element::new("p").class("text-sm mb-4 text-gray-300").text(&project.description))
                        .child(
                            Element::new("div")
                                .class("flex flex-wrap gap-2")
                                .children(shown.iter().map(|t| tag(t, CARD_TAG)))
                                .child_if(overflow),
                        ),
                ),
        )
}

/// The projects section: spinner, error, or the card grid plus the popup when a detail is showing.
pub fn render_projects(state: &FetchState<Vec<Project>>, gallery: &GalleryState, mode: ThemeMode) -> Element {
    let projects = match state {
        FetchState::Loading => return spinner(),
        FetchState::Failed(message) => {
            return Element::new("div")
                .class("flex justify-center items-center min-h-[16rem]")
                .attr("role", "alert")
                .child(
                    Element::new("div")
                        .class(format!("{} text-center", ERROR_TEXT))
                        .child(Element::new("p").class("text-xl font-bold mb-2").text("Error"))
                        .child(Element::new("p").text(message)),
                );
        }
        FetchState::Loaded(projects) => projects,
    };

    let popup = match gallery {
        GalleryState::ShowingDetail(project) => Some(render_project_popup(project, mode)),
        _ => None,
    };

    Element::new("div")
        .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20")
        .attr_if(matches!(gallery, GalleryState::LoadingDetail { .. }), "aria-busy", "true")
        .child(
            Element::new("div")
                .class("text-center mb-12")
                .child(Element::new("h2").class("text-3xl font-bold mb-4").text("My Projects"))
                .child(
                    Element::new("p")
                        .class(MUTED.pick(mode))
                        .text("Click on a project to view more details"),
                ),
        )
        .child(
            Element::new("div")
                .class("grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6")
                .children(projects.iter().map(|p| project_card(p, mode))),
        )
        .child_if(popup)
}
