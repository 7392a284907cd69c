use std::cmp::Reverse;

use crate::entities::experience::{ExperienceItem, ExperienceKind};
use crate::use_cases::resource::FetchState;
use crate::use_cases::theme::ThemeMode;
use crate::utils::dates::{format_date, parse_date};
use crate::utils::icons::IconId;
use crate::utils::palette::{CARD, ERROR_TEXT, HEADING, MUTED, TAG};
use crate::views::common::{icon, tag};
use crate::web::markup::Element;

/// Most recent start first. Entries whose start date cannot be parsed sink to the end in API order.
pub fn timeline_order(items: &[ExperienceItem]) -> Vec<&ExperienceItem> {
    let mut ordered: Vec<&ExperienceItem> = items.iter().collect();
    ordered.sort_by_key(|item| Reverse(parse_date(&item.start_date)));
    ordered
}

fn skeleton() -> Element {
    Element::new("div")
        .class("space-y-8 animate-pulse")
        .attr("role", "status")
        .children((0..3).map(|_| {
            Element::new("div")
                .class("flex space-x-4")
                .child(Element::new("div").class("rounded-full bg-gray-300 h-12 w-12"))
                .child(
                    Element::new("div")
                        .class("flex-1 space-y-3 py-1")
                        .child(Element::new("div").class("h-4 bg-gray-300 rounded w-3/4"))
                        .child(Element::new("div").class("h-4 bg-gray-300 rounded w-1/2")),
                )
        }))
}

fn timeline_entry(item: &ExperienceItem, mode: ThemeMode) -> Element {
    let marker = match item.kind {
        ExperienceKind::Work => IconId::Briefcase,
        ExperienceKind::Education => IconId::AcademicCap,
    };
    let dates = format!(
        "{} - {}",
        format_date(Some(&item.start_date)),
        format_date(item.end_date.as_deref())
    );
    let skills = (!item.skills.is_empty()).then(|| {
        Element::new("div")
            .class("flex flex-wrap gap-2 mt-4")
            .children(item.skills.iter().map(|s| tag(s, TAG.pick(mode))))
    });

    Element::new("div")
        .class("relative pl-12")
        .attr("data-experience-id", item.id.to_string())
        .child(
            Element::new("div")
                .class("absolute left-0 top-1 flex items-center justify-center w-8 h-8 rounded-full bg-blue-500")
                .child(icon(marker, "w-5 h-5 text-white")),
        )
        .child(
            Element::new("div")
                .class(format!("p-6 rounded-lg shadow-md {}", CARD.pick(mode)))
                .child(
                    Element::new("div")
                        .class("flex flex-wrap justify-between items-center mb-2")
                        .child(
                            Element::new("h3")
                                .class(format!("text-xl font-bold {}", HEADING.pick(mode)))
                                .text(item.heading()),
                        )
                        .child(Element::new("span").class(format!("text-sm {}", MUTED.pick(mode))).text(dates)),
                )
                .child(Element::new("p").class("text-blue-500 font-medium mb-2").text(item.employer()))
                .child(Element::new("p").class(MUTED.pick(mode)).text(&item.description))
                .child_if(skills),
        )
}

pub fn render_experience(state: &FetchState<Vec<ExperienceItem>>, mode: ThemeMode) -> Element {
    let items = match state {
        FetchState::Loading => return skeleton(),
        FetchState::Failed(message) => {
            tracing::error!(error = %message, "API Error");
            return Element::new("div")
                .class("max-w-7xl mx-auto px-4 py-20")
                .attr("role", "alert")
                .child(
                    Element::new("div")
                        .class(format!("{} text-center", ERROR_TEXT))
                        .text(format!("Error loading experiences: {}", message)),
                );
        }
        FetchState::Loaded(items) => items,
    };

    Element::new("div")
        .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20")
        .child(
            Element::new("div")
                .class("text-center mb-12")
                .child(Element::new("h2").class("text-3xl font-bold mb-4").text("Experience"))
                .child(Element::new("p").class(MUTED.pick(mode)).text("Professional journey and education")),
        )
        .child(
            Element::new("div")
                .class("relative space-y-8")
                .children(timeline_order(items).into_iter().map(|item| timeline_entry(item, mode))),
        )
}
