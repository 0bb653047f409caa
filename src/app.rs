// src/app.rs

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::modules::admin::adapter::outgoing::{StaticConfirmation, UuidIdGenerator};
use crate::modules::admin::application::ports::outgoing::{Confirmation, IdGenerator};
use crate::modules::admin::application::services::{
    AdminConsole, AdminCredential, AdminView, CredentialSessionService,
};
use crate::modules::chat::adapter::outgoing::OfflineConnector;
use crate::modules::chat::application::ports::outgoing::ChatConnector;
use crate::modules::chat::application::services::ChatWidget;
use crate::modules::content::adapter::outgoing::ComrakFormatter;
use crate::modules::content::application::ports::outgoing::ContentFormatter;
use crate::modules::content::application::services::blog_index_page::BlogIndexView;
use crate::modules::content::application::services::blog_post_page::BlogPostView;
use crate::modules::content::application::services::contact_form::ContactForm;
use crate::modules::content::application::services::home_page::HomeView;
use crate::modules::content::application::ContentStore;
use crate::modules::preferences::application::services::ThemePreference;
use crate::modules::routing::adapter::outgoing::HeadlessDocument;
use crate::modules::routing::application::domain::{Page, RouteTable};
use crate::modules::routing::application::ports::outgoing::Document;
use crate::modules::routing::application::{HashRouter, RouteChange};
use crate::modules::storage::adapter::outgoing::InMemoryStorage;
use crate::modules::storage::application::ports::outgoing::KeyValueStorage;

/// Everything the site talks to outside its own state.
pub struct SiteDeps {
    pub durable: Arc<dyn KeyValueStorage>,
    pub session: Arc<dyn KeyValueStorage>,
    pub formatter: Arc<dyn ContentFormatter>,
    pub ids: Arc<dyn IdGenerator>,
    pub confirmation: Arc<dyn Confirmation>,
    pub chat: Arc<dyn ChatConnector>,
}

impl SiteDeps {
    /// Defaults for a host without a browser: a fresh session store, comrak,
    /// UUID ids, every delete confirmed, and no assistant backend.
    pub fn headless(durable: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            durable,
            session: Arc::new(InMemoryStorage::session()),
            formatter: Arc::new(ComrakFormatter::new()),
            ids: Arc::new(UuidIdGenerator),
            confirmation: Arc::new(StaticConfirmation(true)),
            chat: Arc::new(OfflineConnector),
        }
    }
}

/// The page the router selected, rendered against the current store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "view", rename_all = "snake_case")]
pub enum RenderedPage {
    Home(HomeView),
    BlogIndex(BlogIndexView),
    BlogPost(BlogPostView),
    Admin(AdminView),
}

/// What the host prints for one navigation.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub fragment: String,
    pub title: String,
    pub description: Option<String>,
    pub scrolled_to: Option<String>,
    pub page: RenderedPage,
}

/// Composition root: one store, one router, one document, and the widgets
/// that live on every page.
pub struct Site {
    owner: String,
    store: Arc<ContentStore>,
    formatter: Arc<dyn ContentFormatter>,
    router: HashRouter,
    document: HeadlessDocument,
    admin: AdminConsole,
    contact: ContactForm,
    theme: ThemePreference,
    chat: ChatWidget,
}

impl Site {
    pub fn new(config: &SiteConfig, deps: SiteDeps) -> Self {
        let store = Arc::new(ContentStore::open(Arc::clone(&deps.durable)));
        let session = CredentialSessionService::new(
            AdminCredential::from_plaintext(&config.admin_password),
            deps.session,
        );
        let admin = AdminConsole::new(
            Arc::clone(&store),
            Arc::new(session),
            deps.ids,
            deps.confirmation,
            config.owner.clone(),
        );

        info!(owner = %config.owner, "Site initialized");

        Self {
            owner: config.owner.clone(),
            store,
            formatter: deps.formatter,
            router: HashRouter::new(RouteTable::portfolio(&config.owner)),
            document: HeadlessDocument::new(),
            admin,
            contact: ContactForm::default(),
            theme: ThemePreference::open(deps.durable),
            chat: ChatWidget::new(config.chat.clone(), deps.chat),
        }
    }

    /// First render, from the fragment the page was loaded with.
    pub fn boot(&mut self, fragment: &str) -> PageSnapshot {
        self.navigate(fragment)
    }

    /// Apply a fragment change and render the resulting page.
    pub fn navigate(&mut self, fragment: &str) -> PageSnapshot {
        let change = self.router.handle_fragment_change(fragment, &mut self.document);

        if change == RouteChange::Navigated(Page::Admin) {
            self.admin.restore_session();
        }

        let page = self.render_current();
        let scrolled_to = self.router.after_render(&mut self.document);
        if let Some(id) = &scrolled_to {
            debug!(element = %id, "Scrolled into view");
        }

        PageSnapshot {
            fragment: fragment.to_string(),
            title: self.document.title().to_string(),
            description: self.document.meta_description().map(str::to_string),
            scrolled_to,
            page,
        }
    }

    /// Render the active page and mount its element ids.
    pub fn render_current(&mut self) -> RenderedPage {
        match self.router.current() {
            Page::Home => {
                let view = HomeView::render(&self.store, &self.owner);
                self.document.mount(view.element_ids());
                RenderedPage::Home(view)
            }
            Page::BlogIndex => {
                self.document.mount(Vec::<String>::new());
                RenderedPage::BlogIndex(BlogIndexView::render(&self.store))
            }
            Page::BlogPost { id } => {
                let view =
                    BlogPostView::render(&self.store, self.formatter.as_ref(), &self.owner, id);
                if let Some(meta) = view.meta() {
                    self.document.apply_meta(meta);
                }
                self.document.mount(Vec::<String>::new());
                RenderedPage::BlogPost(view)
            }
            Page::Admin => {
                self.document.mount(Vec::<String>::new());
                RenderedPage::Admin(self.admin.view())
            }
        }
    }

    pub fn current_page(&self) -> &Page {
        self.router.current()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn document(&self) -> &HeadlessDocument {
        &self.document
    }

    pub fn admin(&mut self) -> &mut AdminConsole {
        &mut self.admin
    }

    pub fn contact(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("owner", &self.owner)
            .field("page", self.router.current())
            .field("admin", &self.admin)
            .finish_non_exhaustive()
    }
}
