// HTML serialization for view trees and host documents
use crate::domain::document::HostDocument;
use crate::domain::view::{Element, Node};
use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub fn document_to_html(document: &HostDocument) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
    let _ = write!(out, "<title>{}</title>", escape_text(&document.title));
    for element in &document.head {
        write_element(&mut out, element);
    }
    out.push_str("</head>");
    write_element(&mut out, &document.body);
    out.push_str("</html>\n");
    out
}

pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
    }
    for (name, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        match child {
            Node::Element(el) => write_element(out, el),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_with_classes_and_attributes() {
        let el = Element::new("li")
            .class("sidebar-nav-item")
            .class("active")
            .child(Element::new("a").attr("href", "/metrics").text("Metrics"));

        assert_eq!(
            element_to_html(&el),
            r#"<li class="sidebar-nav-item active"><a href="/metrics">Metrics</a></li>"#
        );
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("p")
            .attr("title", "say \"hi\" & <bye>")
            .text("1 < 2 && 3 > 2");

        assert_eq!(
            element_to_html(&el),
            r#"<p title="say &quot;hi&quot; &amp; &lt;bye&gt;">1 &lt; 2 &amp;&amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn test_empty_element_gets_close_tag() {
        let el = Element::new("span").class("status-dot");
        assert_eq!(element_to_html(&el), r#"<span class="status-dot"></span>"#);
    }

    #[test]
    fn test_document_shell() {
        let doc = HostDocument::shell("A & B", "main")
            .with_head(Element::new("link").attr("rel", "stylesheet").attr("href", "/x.css"));
        let html = document_to_html(&doc);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/x.css"></head>"#));
        assert!(html.contains(r#"<body><div id="main"></div></body>"#));
    }
}
