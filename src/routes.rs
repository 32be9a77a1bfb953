use std::fmt;

use crate::config::DisplayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Analysis,
    Trading,
    History,
    Settings,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analysis => "Analysis",
            Page::Trading => "Trading",
            Page::History => "History",
            Page::Settings => "Settings",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub title: &'static str,
    /// bootstrap-icons 图标名
    pub icon: &'static str,
}

impl Route {
    pub fn name(&self) -> &'static str {
        self.page.as_str()
    }
}

static ROUTES: [Route; 5] = [
    Route {
        path: "/",
        page: Page::Dashboard,
        title: "实时仪表板",
        icon: "speedometer2",
    },
    Route {
        path: "/analysis",
        page: Page::Analysis,
        title: "深度分析",
        icon: "graph-up",
    },
    Route {
        path: "/trading",
        page: Page::Trading,
        title: "交易策略",
        icon: "currency-exchange",
    },
    Route {
        path: "/history",
        page: Page::History,
        title: "历史数据",
        icon: "clock-history",
    },
    Route {
        path: "/settings",
        page: Page::Settings,
        title: "系统设置",
        icon: "gear",
    },
];

pub fn routes() -> &'static [Route] {
    &ROUTES
}

/// 按路径查找路由，忽略查询串、片段和末尾的 `/`。
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES.iter().find(|route| route.path == path)
}

pub fn page_title(route: Option<&Route>, display: &DisplayConfig) -> String {
    let title = route
        .map(|route| route.title)
        .filter(|title| !title.is_empty())
        .unwrap_or(display.default_title.as_str());
    format!("{} - {}", title, display.site_name)
}
