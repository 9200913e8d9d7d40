// View renderer - Builds the dashboard view tree and mounts it
use crate::domain::dashboard::{DashboardContent, NavEntry, StatusCard};
use crate::domain::document::{HostDocument, ViewError};
use crate::domain::view::Element;
use std::sync::Arc;

#[derive(Clone)]
pub struct ViewRenderer {
    content: Arc<DashboardContent>,
}

impl ViewRenderer {
    pub fn new(content: DashboardContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn content(&self) -> &DashboardContent {
        &self.content
    }

    pub fn render(&self, current_path: &str) -> Element {
        render_dashboard(current_path, &self.content)
    }

    /// Renders for `current_path` and appends the result under `#mount_id`.
    pub fn mount(
        &self,
        document: &mut HostDocument,
        mount_id: &str,
        current_path: &str,
    ) -> Result<(), ViewError> {
        let view = self.render(current_path);
        document.attach(mount_id, view)?;
        tracing::debug!(
            "Mounted dashboard view for {} under #{}",
            current_path,
            mount_id
        );
        Ok(())
    }
}

pub fn render_dashboard(current_path: &str, content: &DashboardContent) -> Element {
    let body = Element::new("div")
        .class("dashboard-content")
        .child(sidebar(current_path, &content.nav))
        .child(main_content(content));

    Element::new("div")
        .class("dashboard-container")
        .child(header(&content.brand))
        .child(body)
}

fn header(brand: &str) -> Element {
    Element::new("header")
        .class("dashboard-header")
        .child(Element::new("div").class("logo").text(brand))
}

fn sidebar(current_path: &str, nav: &[NavEntry]) -> Element {
    let items = nav.iter().map(|entry| {
        let mut item = Element::new("li").class("sidebar-nav-item");
        if entry.is_active(current_path) {
            item.add_class("active");
        }
        item.child(Element::new("a").attr("href", &entry.path).text(&entry.name))
    });

    Element::new("aside")
        .class("dashboard-sidebar")
        .child(Element::new("ul").class("sidebar-nav-list").children(items))
}

fn main_content(content: &DashboardContent) -> Element {
    let status_section = Element::new("section")
        .child(Element::new("h2").text(&content.status_heading))
        .child(
            Element::new("div")
                .class("status-overview")
                .children(content.cards.iter().map(status_card)),
        );

    Element::new("main")
        .class("main-content")
        .child(Element::new("h1").text(&content.heading))
        .child(Element::new("p").text(&content.welcome))
        .child(status_section)
}

fn status_card(card: &StatusCard) -> Element {
    let header = Element::new("div")
        .class("card-header")
        .child(Element::new("h3").class("card-title").text(&card.title));

    let indicator = Element::new("div")
        .class("status-indicator")
        .child(
            Element::new("span")
                .class("status-dot")
                .class(card.level().class_name()),
        )
        .child(Element::new("span").class("status-label").text(&card.status));

    let body = Element::new("div")
        .class("card-content")
        .child(indicator)
        .child(Element::new("div").class("metric-value").text(&card.value));

    Element::new("div")
        .class("dashboard-card")
        .child(header)
        .child(body)
}
