use std::fmt;
use std::str::FromStr;

/// Navigable pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Properties,
    PropertyDetail,
    Contact,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Properties => "properties",
            Page::PropertyDetail => "property",
            Page::Contact => "contact",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "properties" | "listings" => Ok(Page::Properties),
            "property" | "detail" => Ok(Page::PropertyDetail),
            "contact" => Ok(Page::Contact),
            other => Err(format!("unknown page '{}'", other)),
        }
    }
}

/// A navigation action: go to `page`, optionally selecting a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEvent {
    pub page: Page,
    pub property_id: Option<String>,
}

impl NavEvent {
    pub fn to(page: Page) -> Self {
        Self {
            page,
            property_id: None,
        }
    }

    pub fn property(id: impl Into<String>) -> Self {
        Self {
            page: Page::PropertyDetail,
            property_id: Some(id.into()),
        }
    }
}

/// What should be on screen for the current navigation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Home,
    Properties,
    PropertyDetail(String),
    Contact,
    /// Detail page requested with no property selected
    Blank,
}

/// Top-level navigation state: active page plus the selected property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    page: Page,
    selected_property: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_property(&self) -> Option<&str> {
        self.selected_property.as_deref()
    }

    /// Apply a navigation action. A missing id keeps the previous selection.
    pub fn dispatch(&mut self, event: NavEvent) -> ActiveView {
        self.page = event.page;
        if let Some(id) = event.property_id.filter(|id| !id.is_empty()) {
            self.selected_property = Some(id);
        }
        self.active_view()
    }

    pub fn active_view(&self) -> ActiveView {
        match self.page {
            Page::Home => ActiveView::Home,
            Page::Properties => ActiveView::Properties,
            Page::Contact => ActiveView::Contact,
            Page::PropertyDetail => match &self.selected_property {
                Some(id) => ActiveView::PropertyDetail(id.clone()),
                None => ActiveView::Blank,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.page(), Page::Home);
        assert_eq!(nav.active_view(), ActiveView::Home);
        assert!(nav.selected_property().is_none());
    }

    #[test]
    fn test_detail_requires_selection() {
        let mut nav = Navigator::new();
        assert_eq!(nav.dispatch(NavEvent::to(Page::PropertyDetail)), ActiveView::Blank);
        assert_eq!(
            nav.dispatch(NavEvent::property("p-9")),
            ActiveView::PropertyDetail("p-9".to_string())
        );
    }

    #[test]
    fn test_selection_survives_navigation_without_id() {
        let mut nav = Navigator::new();
        nav.dispatch(NavEvent::property("p-1"));
        nav.dispatch(NavEvent::to(Page::Properties));
        assert_eq!(nav.selected_property(), Some("p-1"));
        assert_eq!(
            nav.dispatch(NavEvent::to(Page::PropertyDetail)),
            ActiveView::PropertyDetail("p-1".to_string())
        );
    }

    #[test]
    fn test_empty_id_is_ignored() {
        let mut nav = Navigator::new();
        nav.dispatch(NavEvent::property(""));
        assert_eq!(nav.active_view(), ActiveView::Blank);
    }

    #[test]
    fn test_page_names() {
        assert_eq!("detail".parse::<Page>(), Ok(Page::PropertyDetail));
        assert_eq!("Contact".parse::<Page>(), Ok(Page::Contact));
        assert!("admin".parse::<Page>().is_err());
        assert_eq!(Page::PropertyDetail.to_string(), "property");
    }
}
