//! Pages and the top-level controller that switches between them.

pub mod contact;
pub mod detail;
pub mod home;
pub mod properties;

pub use contact::ContactPage;
pub use detail::{DetailPage, DetailState, SubmitOutcome, INQUIRY_FAILED};
pub use home::HomePage;
pub use properties::PropertiesPage;

use crate::filter::FilterField;
use crate::gateway::PropertyStore;
use crate::models::Property;
use crate::navigation::{ActiveView, NavEvent, Navigator, Page};
use crate::shell::{Command, HELP};
use crate::views::layout::{render_footer, render_navbar};
use crate::views::FormField;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// The page currently on screen, with its local state
#[derive(Debug, Clone)]
pub enum MountedPage {
    Home(HomePage),
    Properties(PropertiesPage),
    Detail(DetailPage),
    Contact(ContactPage),
    /// Detail requested without a selected property
    Blank,
}

/// What the shell should show after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Full redraw
    Screen(String),
    /// Short one-line message
    Notice(String),
    /// Blocking error the user must acknowledge
    Alert(String),
    Quit,
}

/// Page controller: owns navigation state and the mounted page
pub struct App {
    store: Arc<dyn PropertyStore>,
    navigator: Navigator,
    page: MountedPage,
}

impl App {
    /// Start on the home page
    pub async fn start(store: Arc<dyn PropertyStore>) -> Self {
        info!("Using {} backend", store.backend_name());
        let page = MountedPage::Home(HomePage::mount(store.as_ref()).await);
        Self {
            store,
            navigator: Navigator::new(),
            page,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn page(&self) -> &MountedPage {
        &self.page
    }

    /// Dispatch a navigation event and mount the resulting page.
    /// The page's fetch has finished by the time this returns.
    pub async fn navigate(&mut self, event: NavEvent) -> &MountedPage {
        let view = self.navigator.dispatch(event);
        debug!("Navigating to {:?}", view);

        let store = self.store.as_ref();
        self.page = match view {
            ActiveView::Home => MountedPage::Home(HomePage::mount(store).await),
            ActiveView::Properties => {
                MountedPage::Properties(PropertiesPage::mount(store).await)
            }
            ActiveView::PropertyDetail(id) => {
                MountedPage::Detail(DetailPage::mount(store, &id).await)
            }
            ActiveView::Contact => MountedPage::Contact(ContactPage::default()),
            ActiveView::Blank => MountedPage::Blank,
        };
        &self.page
    }

    /// Navbar, page body and footer
    pub fn render(&self) -> String {
        let now = Utc::now();
        let body = match &self.page {
            MountedPage::Home(page) => page.render(),
            MountedPage::Properties(page) => page.render(),
            MountedPage::Detail(page) => page.render(now),
            MountedPage::Contact(page) => page.render(now),
            MountedPage::Blank => String::new(),
        };
        format!(
            "{}\n{}\n{}",
            render_navbar(self.navigator.page()),
            body,
            render_footer()
        )
    }

    /// Listings currently shown as numbered cards
    fn visible_listings(&self) -> &[Property] {
        match &self.page {
            MountedPage::Home(page) => &page.featured,
            MountedPage::Properties(page) => &page.filtered,
            _ => &[],
        }
    }

    /// Resolve `open <n|id>` to a property id
    fn resolve_listing(&self, target: &str) -> Result<String, String> {
        let listings = self.visible_listings();
        match target.parse::<usize>() {
            Ok(n) if !listings.is_empty() => listings
                .get(n.wrapping_sub(1))
                .map(|p| p.id.clone())
                .ok_or_else(|| format!("No listing numbered {}", n)),
            _ => Ok(target.to_string()),
        }
    }

    pub async fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Go(event) => {
                self.navigate(event).await;
                Outcome::Screen(self.render())
            }
            Command::Open(target) => match self.resolve_listing(&target) {
                Ok(id) => {
                    self.navigate(NavEvent::property(id)).await;
                    Outcome::Screen(self.render())
                }
                Err(message) => Outcome::Notice(message),
            },
            Command::Back => {
                if matches!(self.page, MountedPage::Detail(_) | MountedPage::Blank) {
                    self.navigate(NavEvent::to(Page::Properties)).await;
                    Outcome::Screen(self.render())
                } else {
                    Outcome::Notice("Nothing to go back to".to_string())
                }
            }
            Command::ToggleFilters => match &mut self.page {
                MountedPage::Properties(page) => {
                    page.toggle_filters();
                    Outcome::Screen(self.render())
                }
                _ => Outcome::Notice("Filters are on the properties page".to_string()),
            },
            Command::Set { field, value } => self.set_field(&field, value),
            Command::Search => match &mut self.page {
                MountedPage::Properties(page) => {
                    page.search();
                    Outcome::Screen(self.render())
                }
                _ => Outcome::Notice("Search is on the properties page".to_string()),
            },
            Command::Reset => match &mut self.page {
                MountedPage::Properties(page) => {
                    page.reset();
                    Outcome::Screen(self.render())
                }
                _ => Outcome::Notice("Search is on the properties page".to_string()),
            },
            Command::Send => self.send().await,
            Command::Show => Outcome::Screen(self.render()),
            Command::Help => Outcome::Notice(HELP.to_string()),
            Command::Quit => Outcome::Quit,
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Outcome {
        let result = match &mut self.page {
            MountedPage::Properties(page) => field
                .parse::<FilterField>()
                .map(|field| page.set_filter(field, value)),
            MountedPage::Detail(page) if page.listing().is_some() => field
                .parse::<FormField>()
                .map(|field| page.set_field(field, value)),
            MountedPage::Contact(page) => field
                .parse::<FormField>()
                .map(|field| page.set_field(field, value)),
            _ => Err("Nothing to edit on this page".to_string()),
        };

        match result {
            Ok(()) => Outcome::Screen(self.render()),
            Err(message) => Outcome::Notice(message),
        }
    }

    async fn send(&mut self) -> Outcome {
        let now = Utc::now();
        let store = Arc::clone(&self.store);

        match &mut self.page {
            MountedPage::Detail(page) => match page.submit(store.as_ref(), now).await {
                SubmitOutcome::Sent => Outcome::Screen(self.render()),
                SubmitOutcome::Invalid(e) => Outcome::Notice(e.to_string()),
                SubmitOutcome::Failed => Outcome::Alert(INQUIRY_FAILED.to_string()),
                SubmitOutcome::Unavailable => {
                    Outcome::Notice("There is no property to inquire about".to_string())
                }
            },
            MountedPage::Contact(page) => match page.submit(now) {
                Ok(()) => Outcome::Screen(self.render()),
                Err(e) => Outcome::Notice(e.to_string()),
            },
            _ => Outcome::Notice("There is no form on this page".to_string()),
        }
    }
}
