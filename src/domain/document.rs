// Host document - the element tree a view is mounted into
use super::view::Element;
use thiserror::Error;

/// Id of the host element every dashboard page is mounted under.
pub const MOUNT_ID: &str = "main";

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("mount point `#{0}` not found in host document")]
    MissingMountPoint(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostDocument {
    pub title: String,
    pub head: Vec<Element>,
    pub body: Element,
}

impl HostDocument {
    pub fn new(title: &str, body: Element) -> Self {
        Self {
            title: title.to_string(),
            head: Vec::new(),
            body,
        }
    }

    /// Page shell with a single empty `<div id="{mount_id}">` in the body.
    pub fn shell(title: &str, mount_id: &str) -> Self {
        Self::new(
            title,
            Element::new("body").child(Element::new("div").attr("id", mount_id)),
        )
    }

    pub fn with_head(mut self, element: Element) -> Self {
        self.head.push(element);
        self
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// Appends `subtree` under the element with `mount_id`. The document is
    /// left untouched when the mount point is absent.
    pub fn attach(&mut self, mount_id: &str, subtree: Element) -> Result<(), ViewError> {
        let mount = self
            .element_by_id_mut(mount_id)
            .ok_or_else(|| ViewError::MissingMountPoint(mount_id.to_string()))?;
        mount.append_child(subtree);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_appends_under_mount() {
        let mut doc = HostDocument::shell("t", "main");
        doc.attach("main", Element::new("p").text("hi")).unwrap();

        let mount = doc.element_by_id_mut("main").unwrap();
        assert_eq!(mount.child_elements().count(), 1);
        assert_eq!(mount.text_content(), "hi");
    }

    #[test]
    fn test_attach_missing_mount_leaves_document_unchanged() {
        let mut doc = HostDocument::shell("t", "app");
        let before = doc.clone();

        let err = doc.attach("main", Element::new("p")).unwrap_err();

        assert_eq!(err, ViewError::MissingMountPoint("main".to_string()));
        assert_eq!(doc, before);
    }
}
