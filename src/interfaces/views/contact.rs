use crate::entities::contact_me::{ContactFormSubmission, SocialMediaLink};
use crate::use_cases::contact::SubmitStatus;
use crate::use_cases::resource::FetchState;
use crate::use_cases::social_media::ContactDetails;
use crate::use_cases::theme::ThemeMode;
use crate::utils::icons::{platform_icon, IconId};
use crate::utils::palette::{CONTAINER, FAILURE_BANNER, HEADING, INPUT, MUTED, SUCCESS_BANNER};
use crate::views::common::{error_panel, external_link, icon, safe_href, spinner};
use crate::web::markup::Element;

pub const SENDING_LABEL: &str = "Sending...";
pub const SEND_LABEL: &str = "Send Message";

/// Icon links for each social profile with a usable URL.
pub fn social_icons(links: &[SocialMediaLink], class: &str) -> Vec<Element> {
    links
        .iter()
        .filter_map(|link| {
            let href = safe_href(&link.link)?;
            Some(
                external_link(&href)
                    .class(class)
                    .attr("title", &link.platform)
                    .attr("data-platform", link.platform.to_lowercase())
                    .child(icon(platform_icon(&link.platform), "w-6 h-6")),
            )
        })
        .collect()
}

fn contact_line(id: IconId, value: &str, mode: ThemeMode) -> Element {
    Element::new("div")
        .class("flex items-center space-x-4")
        .child(
            Element::new("div")
                .class("p-3 rounded-full bg-blue-500")
                .child(icon(id, "w-6 h-6 text-white")),
        )
        .child(Element::new("p").class(MUTED.pick(mode)).text(value))
}

fn field(id: &'static str, label: &str, control: Element, mode: ThemeMode) -> Element {
    Element::new("div")
        .child(
            Element::new("label")
                .class(format!("block mb-2 font-medium {}", HEADING.pick(mode)))
                .attr("for", id)
                .text(label),
        )
        .child(
            control
                .class(format!(
                    "w-full px-4 py-2 rounded-lg border {} focus:outline-none focus:ring-2 focus:ring-blue-500/20",
                    INPUT.pick(mode)
                ))
                .attr("id", id)
                .attr("name", id)
                .attr("required", "required"),
        )
}

fn contact_form(fields: &ContactFormSubmission, status: SubmitStatus, mode: ThemeMode) -> Element {
    let submitting = status == SubmitStatus::Submitting;
    let button_tone = match mode {
        ThemeMode::Dark => "bg-blue-600 text-white hover:bg-blue-700",
        ThemeMode::Light => "bg-blue-500 text-white hover:bg-blue-600",
    };
    let banner = status.banner().map(|text| {
        let class = if status == SubmitStatus::Sent { SUCCESS_BANNER } else { FAILURE_BANNER };
        Element::new("div")
            .class(class)
            .attr("role", "status")
            .attr("data-banner", if status == SubmitStatus::Sent { "success" } else { "error" })
            .text(text)
    });

    Element::new("form")
        .class("space-y-6")
        .attr("data-form", "contact")
        .child(field("name", "Name", Element::new("input").attr("type", "text").attr("value", &fields.name), mode))
        .child(field("email", "Email", Element::new("input").attr("type", "email").attr("value", &fields.email), mode))
        .child(field(
            "message",
            "Message",
            Element::new("textarea").attr("rows", "4").text(&fields.message),
            mode,
        ))
        .child(
            Element::new("button")
                .class(format!("w-full py-3 px-6 rounded-lg font-medium {}", button_tone))
                .attr("type", "submit")
                .attr_if(submitting, "disabled", "disabled")
                .text(if submitting { SENDING_LABEL } else { SEND_LABEL }),
        )
        .child_if(banner)
}

pub fn render_contact(
    details: &FetchState<ContactDetails>,
    fields: &ContactFormSubmission,
    status: SubmitStatus,
    mode: ThemeMode,
) -> Element {
    let details = match details {
        FetchState::Loading => return spinner(),
        FetchState::Failed(message) => return error_panel(message, "contact"),
        FetchState::Loaded(details) => details,
    };

    let panel = format!("p-8 rounded-xl shadow-lg {}", CONTAINER.pick(mode));

    Element::new("div")
        .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20")
        .child(
            Element::new("div")
                .class("text-center mb-12")
                .child(Element::new("h2").class("text-3xl font-bold mb-4").text("Get in Touch"))
                .child(
                    Element::new("p")
                        .class(MUTED.pick(mode))
                        .text("Let's connect and discuss how we can work together"),
                ),
        )
        .child(
            Element::new("div")
                .class("grid grid-cols-1 md:grid-cols-2 gap-12")
                .child(
                    Element::new("div")
                        .class(panel.as_str())
                        .child(
                            Element::new("h3")
                                .class(format!("text-2xl font-bold mb-6 {}", HEADING.pick(mode)))
                                .text("Contact Information"),
                        )
                        .child(contact_line(IconId::Mail, &details.contact.email, mode))
                        .child(contact_line(IconId::Phone, &details.contact.phone, mode))
                        .child(
                            Element::new("div")
                                .class("mt-8")
                                .child(
                                    Element::new("h4")
                                        .class(format!("text-lg font-semibold mb-4 {}", HEADING.pick(mode)))
                                        .text("Connect on Social Media"),
                                )
                                .child(
                                    Element::new("div")
                                        .class("flex space-x-4")
                                        .children(social_icons(&details.links, "p-3 rounded-full bg-blue-500 text-white")),
                                ),
                        ),
                )
                .child(
                    Element::new("div")
                        .class(panel.as_str())
                        .child(
                            Element::new("h3")
                                .class(format!("text-2xl font-bold mb-6 {}", HEADING.pick(mode)))
                                .text("Send a Message"),
                        )
                        .child(contact_form(fields, status, mode)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::contact::{FAILED_MESSAGE, SENT_MESSAGE};
    use crate::use_cases::test_fixtures::{admin_contact, social};
    use crate::web::markup::Node;

    fn loaded() -> FetchState<ContactDetails> {
        FetchState::Loaded(ContactDetails {
            links: vec![social(1, "GitHub"), social(2, "mastodon")],
            contact: admin_contact(),
        })
    }

    #[test]
    fn shows_contact_details_and_platform_icons() {
        let node: Node =
            render_contact(&loaded(), &ContactFormSubmission::default(), SubmitStatus::Idle, ThemeMode::Light).into();

        assert!(node.contains_text("dev@example.com"));
        assert!(node.contains_text("+1 555 0100"));
        let github = Node::from(node.find_by_attr("data-platform", "github").unwrap().clone());
        assert!(github.find_by_attr("data-icon", "github").is_some());
        let mastodon = Node::from(node.find_by_attr("data-platform", "mastodon").unwrap().clone());
        assert!(mastodon.find_by_attr("data-icon", "globe").is_some());
    }

    #[test]
    fn form_reflects_fields_and_submission_state() {
        let fields = ContactFormSubmission::new("Ada", "ada@example.com", "Hi there");

        let sending: Node = render_contact(&loaded(), &fields, SubmitStatus::Submitting, ThemeMode::Dark).into();
        let button = sending.find_by_attr("type", "submit").unwrap();
        assert_eq!(button.get_attr("disabled"), Some("disabled"));
        assert!(sending.contains_text(SENDING_LABEL));
        assert_eq!(
            sending.find_by_attr("id", "email").and_then(|e| e.get_attr("value")),
            Some("ada@example.com")
        );
        assert!(sending.contains_text("Hi there"));

        let failed: Node = render_contact(&loaded(), &fields, SubmitStatus::Failed, ThemeMode::Dark).into();
        assert!(failed.contains_text(FAILED_MESSAGE));
        assert!(failed.find_by_attr("type", "submit").unwrap().get_attr("disabled").is_none());

        let sent: Node =
            render_contact(&loaded(), &ContactFormSubmission::default(), SubmitStatus::Sent, ThemeMode::Dark).into();
        assert!(sent.contains_text(SENT_MESSAGE));
        assert!(sent.find_by_attr("data-banner", "success").is_some());
    }

    #[test]
    fn load_failure_offers_retry() {
        let node: Node = render_contact(
            &FetchState::Failed("Failed to load contact information".into()),
            &ContactFormSubmission::default(),
            SubmitStatus::Idle,
            ThemeMode::Light,
        )
        .into();

        assert!(node.contains_text("Failed to load contact information"));
        assert!(node.find_by_attr("data-resource", "contact").is_some());
        assert!(node.find_by_attr("data-form", "contact").is_none());
    }
}
