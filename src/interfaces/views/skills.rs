use crate::entities::skill::Skill;
use crate::use_cases::resource::FetchState;
use crate::use_cases::theme::ThemeMode;
use crate::utils::icons::skill_icon;
use crate::utils::palette::{CARD, MUTED};
use crate::views::common::{error_panel, icon};
use crate::web::markup::Element;

fn facts(skill: &Skill, class: &str) -> Vec<Element> {
    vec![
        Element::new("p").class(class).text(format!("Proficiency: {}", skill.proficiency_label())),
        Element::new("p").class(class).text(format!("Years of Experience: {}", skill.years)),
        Element::new("p").class(class).text(format!("Category: {}", skill.category)),
    ]
}

fn skill_card(skill: &Skill, mode: ThemeMode) -> Element {
    Element::new("div")
        .class(format!("p-6 rounded-lg shadow-lg cursor-pointer transition-colors {}", CARD.pick(mode)))
        .attr("data-skill-id", skill.id.to_string())
        .attr("data-action", "select-skill")
        .child(
            Element::new("div")
                .class("flex flex-col items-center")
                .child(
                    Element::new("div")
                        .class("text-4xl mb-4")
                        .child(icon(skill_icon(&skill.name), "text-primary-500")),
                )
                .child(Element::new("h3").class("text-xl font-semibold mb-2").text(&skill.name))
                .child(Element::new("div").class("text-sm").children(facts(skill, MUTED.pick(mode)))),
        )
}

fn skill_overlay(skill: &Skill, mode: ThemeMode) -> Element {
    let panel_bg = match mode {
        ThemeMode::Dark => "bg-gray-800",
        ThemeMode::Light => "bg-white",
    };

    Element::new("div")
        .class("fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4")
        .attr("data-popup", "skill")
        .attr("data-action", "close-overlay")
        .child(
            Element::new("div")
                .class(format!("max-w-md w-full p-6 rounded-lg {}", panel_bg))
                .child(
                    Element::new("div")
                        .class("flex justify-between items-start mb-4")
                        .child(
                            Element::new("div")
                                .class("flex items-center")
                                .child(
                                    Element::new("div")
                                        .class("text-4xl mr-4")
                                        .child(icon(skill_icon(&skill.name), "text-primary-500")),
                                )
                                .child(Element::new("h3").class("text-2xl font-bold").text(&skill.name)),
                        )
                        .child(
                            Element::new("button")
                                .class("text-gray-500 hover:text-gray-700")
                                .attr("data-action", "close-overlay")
                                .attr("aria-label", "Close")
                                .text("✕"),
                        ),
                )
                .child(
                    Element::new("div")
                        .class("mt-4")
                        .child(Element::new("h4").class("text-lg font-semibold mb-2").text("Details"))
                        .children(facts(skill, "text-gray-600"))
                        .child(Element::new("p").class("text-gray-600 mt-2").text(&skill.description)),
                ),
        )
}

pub fn render_skills(state: &FetchState<Vec<Skill>>, selected: Option<&Skill>, mode: ThemeMode) -> Element {
    let skills = match state {
        FetchState::Loading => {
            return Element::new("div")
                .class("flex justify-center items-center h-64")
                .attr("role", "status")
                .text("Loading...");
        }
        FetchState::Failed(message) => return error_panel(message, "skills"),
        FetchState::Loaded(skills) => skills,
    };

    Element::new("div")
        .class("container mx-auto px-4 py-8")
        .child(Element::new("h2").class("text-3xl font-bold mb-8 text-center").text("Skills"))
        .child(
            Element::new("div")
                .class("grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6")
                .children(skills.iter().map(|s| skill_card(s, mode))),
        )
        .child_if(selected.map(|s| skill_overlay(s, mode)))
}
