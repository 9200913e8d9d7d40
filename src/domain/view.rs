// View tree domain model - an in-memory element tree
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of `add_class`.
    pub fn class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    /// Adds a class token; duplicates are ignored like `classList.add`.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first, pre-order search including `self`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if pred(el) {
                found.push(el);
            }
        });
        found
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el| el.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|el| el.tag == tag)
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(el) => el.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .class("outer")
            .attr("id", "root")
            .child(Element::new("span").class("inner").text("Hello"))
            .text(", ")
            .child(Element::new("span").class("inner").text("world"))
    }

    #[test]
    fn test_add_class_ignores_duplicates() {
        let mut el = Element::new("li").class("sidebar-nav-item");
        el.add_class("active");
        el.add_class("active");
        assert_eq!(el.classes, vec!["sidebar-nav-item", "active"]);
    }

    #[test]
    fn test_set_attribute_replaces_existing() {
        let mut el = Element::new("a").attr("href", "/");
        el.set_attribute("href", "/logs");
        assert_eq!(el.attribute("href"), Some("/logs"));
        assert_eq!(el.attributes.len(), 1);
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "Hello, world");
    }

    #[test]
    fn test_find_by_class_and_id() {
        let mut root = sample();
        assert_eq!(root.find_by_class("inner").len(), 2);
        assert_eq!(root.find_by_tag("span").len(), 2);
        assert!(root.find_by_id_mut("root").is_some());
        assert!(root.find_by_id_mut("missing").is_none());
    }
}
