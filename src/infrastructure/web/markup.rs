use std::fmt::Write;

use ammonia::clean_text;

const VOID_TAGS: [&str; 4] = ["img", "input", "br", "hr"];

/// A rendered view: a tree of elements and text that can be inspected or serialized to HTML.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn attr_if(self, condition: bool, name: &'static str, value: impl Into<String>) -> Self {
        if condition { self.attr(name, value) } else { self }
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn child_if(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Serializes the tree to HTML. Text and attribute values are escaped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&clean_text(text)),
            Node::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                for (name, value) in &el.attrs {
                    let _ = write!(out, " {}=\"{}\"", name, clean_text(value));
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// All text in document order, one entry per text node.
    pub fn texts(&self) -> Vec<&str> {
        let mut acc = Vec::new();
        self.collect_texts(&mut acc);
        acc
    }

    fn collect_texts<'a>(&'a self, acc: &mut Vec<&'a str>) {
        match self {
            Node::Text(t) => acc.push(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_texts(acc)),
        }
    }

    pub fn text_content(&self) -> String {
        self.texts().join(" ")
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Depth-first search for every element matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut acc = Vec::new();
        self.collect_elements(pred, &mut acc);
        acc
    }

    fn collect_elements<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, acc: &mut Vec<&'a Element>) {
        if let Node::Element(el) = self {
            if pred(el) {
                acc.push(el);
            }
            for child in &el.children {
                child.collect_elements(pred, acc);
            }
        }
    }

    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find_all(&|el| el.get_attr(name) == Some(value)).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements_with_escaping() {
        let node: Node = Element::new("p")
            .class("note")
            .text("<b>&</b>")
            .into();

        let html = node.render();
        assert!(html.starts_with("<p class=\"note\">"));
        assert!(html.contains("&lt;b&gt;&amp;&lt;&#47;b&gt;"));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let node: Node = Element::new("img").attr("src", "a.png").into();
        assert_eq!(node.render(), "<img src=\"a.png\">");
    }

    #[test]
    fn attr_replaces_existing_value() {
        let el = Element::new("div").class("a").class("b");
        assert_eq!(el.get_attr("class"), Some("b"));
        assert_eq!(el.attrs.len(), 1);
    }

    #[test]
    fn queries_walk_the_tree() {
        let node: Node = Element::new("ul")
            .children(["one", "two"].iter().map(|t| {
                Element::new("li").attr("data-item", *t).text(*t)
            }))
            .into();

        assert_eq!(node.texts(), vec!["one", "two"]);
        assert!(node.contains_text("two"));
        assert_eq!(node.find_all(&|el| el.tag == "li").len(), 2);
        assert!(node.find_by_attr("data-item", "two").is_some());
        assert!(node.find_by_attr("data-item", "three").is_none());
    }
}
