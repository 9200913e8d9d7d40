// Dashboard domain model - navigation and status card tables
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub name: String,
    pub path: String,
}

impl NavEntry {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    /// Exact string comparison; `/metrics/` does not match `/metrics`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCard {
    pub title: String,
    pub status: String,
    pub value: String,
}

impl StatusCard {
    pub fn new(title: &str, status: &str, value: &str) -> Self {
        Self {
            title: title.to_string(),
            status: status.to_string(),
            value: value.to_string(),
        }
    }

    pub fn level(&self) -> StatusLevel {
        StatusLevel::from_label(&self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Online,
    Offline,
    Warning,
    Maintenance,
    Unknown,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 5] = [
        StatusLevel::Online,
        StatusLevel::Offline,
        StatusLevel::Warning,
        StatusLevel::Maintenance,
        StatusLevel::Unknown,
    ];

    pub fn from_label(label: &str) -> Self {
        match label {
            "Online" => StatusLevel::Online,
            "Offline" => StatusLevel::Offline,
            "Warning" => StatusLevel::Warning,
            "Maintenance" => StatusLevel::Maintenance,
            _ => StatusLevel::Unknown,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatusLevel::Online => "#2ecc71",
            StatusLevel::Offline => "#e74c3c",
            StatusLevel::Warning => "#f39c12",
            StatusLevel::Maintenance => "#3498db",
            StatusLevel::Unknown => "#95a5a6",
        }
    }

    /// Modifier class placed on the status dot.
    pub fn class_name(self) -> &'static str {
        match self {
            StatusLevel::Online => "status-online",
            StatusLevel::Offline => "status-offline",
            StatusLevel::Warning => "status-warning",
            StatusLevel::Maintenance => "status-maintenance",
            StatusLevel::Unknown => "status-unknown",
        }
    }
}

/// Everything the dashboard view displays. Status values are fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub brand: String,
    pub heading: String,
    pub welcome: String,
    pub status_heading: String,
    pub nav: Vec<NavEntry>,
    pub cards: Vec<StatusCard>,
}

impl Default for DashboardContent {
    fn default() -> Self {
        Self {
            brand: "Nexa Gateway".to_string(),
            heading: "Nexa Gateway Dashboard".to_string(),
            welcome: "Welcome to the Nexa Gateway control dashboard. This interface allows you to monitor and manage your gateway services.".to_string(),
            status_heading: "System Status".to_string(),
            nav: vec![
                NavEntry::new("Dashboard", "/"),
                NavEntry::new("Metrics", "/metrics"),
                NavEntry::new("Settings", "/settings"),
                NavEntry::new("Logs", "/logs"),
            ],
            cards: vec![
                StatusCard::new("API Server", "Online", "100%"),
                StatusCard::new("Database", "Online", "99.8%"),
                StatusCard::new("Vector DB", "Online", "99.5%"),
                StatusCard::new("Auth Service", "Online", "100%"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_entry_exact_match() {
        let entry = NavEntry::new("Metrics", "/metrics");
        assert!(entry.is_active("/metrics"));
        assert!(!entry.is_active("/metrics/"));
        assert!(!entry.is_active("/Metrics"));
        assert!(!entry.is_active("/metrics/cpu"));
    }

    #[test]
    fn test_status_level_lookup() {
        assert_eq!(StatusLevel::from_label("Online").color(), "#2ecc71");
        assert_eq!(StatusLevel::from_label("Offline"), StatusLevel::Offline);
        assert_eq!(StatusLevel::from_label("online"), StatusLevel::Unknown);
        assert_ne!(StatusLevel::Offline.color(), StatusLevel::Online.color());
    }

    #[test]
    fn test_default_content_tables() {
        let content = DashboardContent::default();
        let paths: Vec<&str> = content.nav.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/metrics", "/settings", "/logs"]);

        let titles: Vec<&str> = content.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["API Server", "Database", "Vector DB", "Auth Service"]);
        assert!(content.cards.iter().all(|c| c.level() == StatusLevel::Online));
    }
}
