use url::Url;

use crate::utils::icons::IconId;
use crate::utils::palette::ERROR_TEXT;
use crate::web::markup::Element;

pub const RETRY_LABEL: &str = "Retry";

/// An icon placeholder; the page's icon font picks it up through `data-icon`.
pub fn icon(id: IconId, class: &str) -> Element {
    Element::new("span")
        .class(class)
        .attr("data-icon", id.name())
        .attr("aria-hidden", "true")
}

pub fn spinner() -> Element {
    Element::new("div")
        .class("flex justify-center items-center min-h-[16rem]")
        .attr("role", "status")
        .child(
            Element::new("div")
                .class("animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-neon-blue"),
        )
}

/// Error message with a Retry button that re-runs `resource`'s fetch.
pub fn error_panel(message: &str, resource: &str) -> Element {
    Element::new("div")
        .class("flex flex-col justify-center items-center h-64")
        .attr("role", "alert")
        .child(Element::new("p").class(format!("{} mb-4", ERROR_TEXT)).text(message))
        .child(
            Element::new("button")
                .class("px-4 py-2 bg-primary-500 text-white rounded hover:bg-primary-600")
                .attr("data-action", "retry")
                .attr("data-resource", resource)
                .text(RETRY_LABEL),
        )
}

pub fn tag(text: &str, class: &str) -> Element {
    Element::new("span")
        .class(format!("px-2 py-1 rounded-full text-xs {}", class))
        .text(text)
}

/// External link opening in a new tab.
pub fn external_link(href: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

/// Only absolute `http`/`https` URLs are linked; anything else is dropped.
pub fn safe_href(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed.to_string()),
        other => {
            tracing::warn!(scheme = other, "Refusing to link non-http URL");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::markup::Node;

    #[test]
    fn safe_href_accepts_only_http_schemes() {
        assert_eq!(
            safe_href("https://github.com/dev/atlas").as_deref(),
            Some("https://github.com/dev/atlas")
        );
        assert!(safe_href(" http://example.com ").is_some());
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("ftp://example.com/file"), None);
        assert_eq!(safe_href("not a url"), None);
    }

    #[test]
    fn error_panel_offers_retry() {
        let node: Node = error_panel("Failed to load skills", "skills").into();

        assert!(node.contains_text("Failed to load skills"));
        let button = node.find_by_attr("data-action", "retry").unwrap();
        assert_eq!(button.get_attr("data-resource"), Some("skills"));
        assert!(Node::from(button.clone()).contains_text(RETRY_LABEL));
    }
}
