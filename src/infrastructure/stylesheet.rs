// Dashboard stylesheet - layout rules plus status colors from the level table
use crate::domain::dashboard::StatusLevel;
use std::fmt::Write;

const BASE_STYLES: &str = "\
body{margin:0;font-family:'Segoe UI',sans-serif;background:#f5f6fa;color:#2c3e50;}
.dashboard-container{display:flex;flex-direction:column;min-height:100vh;}
.dashboard-header{display:flex;align-items:center;height:56px;padding:0 24px;background:#2c3e50;color:#fff;}
.logo{font-size:20px;font-weight:600;}
.dashboard-content{display:flex;flex:1;}
.dashboard-sidebar{width:220px;background:#34495e;}
.sidebar-nav-list{list-style:none;margin:0;padding:16px 0;}
.sidebar-nav-item a{display:block;padding:10px 24px;color:#ecf0f1;text-decoration:none;}
.sidebar-nav-item.active a,.sidebar-nav-item a:hover{background:#3498db;}
.main-content{flex:1;padding:24px 32px;}
.status-overview{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:16px;}
.dashboard-card{background:#fff;border-radius:6px;box-shadow:0 1px 3px rgba(0,0,0,.12);padding:16px;}
.card-title{margin:0 0 12px;font-size:16px;}
.status-indicator{display:flex;align-items:center;gap:8px;}
.status-dot{display:inline-block;width:10px;height:10px;border-radius:50%;}
.metric-value{margin-top:12px;font-size:28px;font-weight:700;}
";

pub fn dashboard_css() -> String {
    let mut css = String::from(BASE_STYLES);
    for level in StatusLevel::ALL {
        let _ = writeln!(
            css,
            ".status-dot.{}{{background-color:{};}}",
            level.class_name(),
            level.color()
        );
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_a_color_rule() {
        let css = dashboard_css();
        assert!(css.contains(".status-dot.status-online{background-color:#2ecc71;}"));
        assert!(css.contains(".status-dot.status-offline{background-color:#e74c3c;}"));
        assert_eq!(css.matches(".status-dot.status-").count(), StatusLevel::ALL.len());
    }
}
