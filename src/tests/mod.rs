pub mod support;

mod site_flow {
    use std::sync::Arc;

    use crate::app::{RenderedPage, Site, SiteDeps};
    use crate::config::SiteConfig;
    use crate::modules::admin::application::domain::{RecordDraft, RecordKind};
    use crate::modules::admin::application::services::{AdminView, DeleteOutcome};
    use crate::modules::content::application::services::blog_post_page::BlogPostView;
    use crate::modules::routing::application::domain::Page;
    use crate::modules::storage::adapter::outgoing::InMemoryStorage;
    use crate::modules::storage::application::ports::outgoing::KeyValueStorage;
    use crate::tests::support::stubs::SequentialIdGenerator;

    fn site_on(durable: Arc<dyn KeyValueStorage>, session: Arc<dyn KeyValueStorage>) -> Site {
        let mut deps = SiteDeps::headless(durable);
        deps.session = session;
        deps.ids = Arc::new(SequentialIdGenerator::default());
        Site::new(&SiteConfig::default(), deps)
    }

    fn fresh_site() -> Site {
        site_on(
            Arc::new(InMemoryStorage::durable()),
            Arc::new(InMemoryStorage::session()),
        )
    }

    #[test]
    fn test_boot_on_home_applies_metadata() {
        let mut site = fresh_site();

        let snapshot = site.boot("");

        assert_eq!(snapshot.title, "Inicio | Tu Nombre");
        assert!(matches!(snapshot.page, RenderedPage::Home(_)));
    }

    #[test]
    fn test_deep_link_to_post_sets_post_metadata() {
        let mut site = fresh_site();

        let snapshot = site.boot("#!/blog/typescript-para-principiantes");

        assert_eq!(
            site.current_page(),
            &Page::BlogPost {
                id: "typescript-para-principiantes".into()
            }
        );
        assert_eq!(snapshot.title, "TypeScript para Principiantes | Tu Nombre");
        let RenderedPage::BlogPost(BlogPostView::Found(detail)) = snapshot.page else {
            panic!("expected the post page");
        };
        assert!(detail.body.as_html().contains("<h1>"));
    }

    #[test]
    fn test_unknown_route_renders_home() {
        let mut site = fresh_site();
        site.boot("#!/blog");

        let snapshot = site.navigate("#!/unknown");

        assert_eq!(site.current_page(), &Page::Home);
        assert_eq!(snapshot.title, "Inicio | Tu Nombre");
    }

    #[test]
    fn test_anchor_scrolls_after_home_render() {
        let mut site = fresh_site();
        site.boot("#!/");

        let snapshot = site.navigate("#about");

        assert_eq!(site.current_page(), &Page::Home);
        assert_eq!(snapshot.scrolled_to.as_deref(), Some("about"));
        assert_eq!(site.document().scrolled_to(), &["about".to_string()]);
    }

    #[test]
    fn test_missing_post_keeps_previous_metadata() {
        let mut site = fresh_site();
        site.boot("#!/blog");

        let snapshot = site.navigate("#!/blog/no-existe");

        assert_eq!(snapshot.title, "Blog | Tu Nombre");
        assert!(matches!(
            snapshot.page,
            RenderedPage::BlogPost(BlogPostView::NotFound(_))
        ));
    }

    #[test]
    fn test_admin_session_survives_reload_in_same_session_only() {
        let durable: Arc<dyn KeyValueStorage> = Arc::new(InMemoryStorage::durable());
        let session: Arc<dyn KeyValueStorage> = Arc::new(InMemoryStorage::session());

        let mut site = site_on(durable.clone(), session.clone());
        site.boot("#!/admin");
        site.admin().login("admin123").unwrap();

        // Reload within the same browsing session.
        let mut reloaded = site_on(durable.clone(), session.clone());
        let snapshot = reloaded.boot("#!/admin");
        assert!(matches!(
            snapshot.page,
            RenderedPage::Admin(AdminView::Dashboard(_))
        ));

        reloaded.admin().logout().unwrap();
        let mut after_logout = site_on(durable.clone(), session);
        assert!(matches!(
            after_logout.boot("#!/admin").page,
            RenderedPage::Admin(AdminView::Login { error: None })
        ));

        // New browsing session.
        let mut new_session = site_on(durable, Arc::new(InMemoryStorage::session()));
        assert!(matches!(
            new_session.boot("#!/admin").page,
            RenderedPage::Admin(AdminView::Login { .. })
        ));
    }

    #[test]
    fn test_admin_changes_show_up_on_content_pages() {
        let durable: Arc<dyn KeyValueStorage> = Arc::new(InMemoryStorage::durable());
        let mut site = site_on(durable.clone(), Arc::new(InMemoryStorage::session()));
        site.boot("#!/admin");
        site.admin().login("admin123").unwrap();

        site.admin().select_tab(RecordKind::Blog);
        let Ok(RecordDraft::BlogPost(form)) = site.admin().open_new() else {
            panic!("expected a blog form");
        };
        form.title = "Rust en el Navegador".into();
        form.excerpt = "WebAssembly sin miedo.".into();
        form.content = "## Intro\n\nTexto.".into();
        let id = site.admin().save().unwrap();
        assert_eq!(id, "rust-en-el-navegador");

        site.admin().select_tab(RecordKind::Projects);
        assert_eq!(site.admin().delete("1"), Ok(DeleteOutcome::Deleted));

        let RenderedPage::BlogIndex(index) = site.navigate("#!/blog").page else {
            panic!("expected the blog index");
        };
        assert_eq!(index.posts.last().unwrap().href, "#!/blog/rust-en-el-navegador");

        // A fresh load reads the same collections back.
        let mut reloaded = site_on(durable, Arc::new(InMemoryStorage::session()));
        let RenderedPage::Home(home) = reloaded.boot("#!/").page else {
            panic!("expected home");
        };
        let ids: Vec<&str> = home.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
        assert!(reloaded.store().find_post("rust-en-el-navegador").is_some());
    }

    #[test]
    fn test_project_tags_round_trip_through_admin() {
        let mut site = fresh_site();
        site.boot("#!/admin");
        site.admin().login("admin123").unwrap();

        let Ok(RecordDraft::Project(form)) = site.admin().open_new() else {
            panic!("expected a project form");
        };
        form.title = "Chat en Tiempo Real".into();
        form.description = "WebSockets".into();
        form.tags = "React, Node.js".into();
        let id = site.admin().save().unwrap();

        site.admin().open_existing(&id).unwrap();
        site.admin().save().unwrap();

        let tags = site
            .store()
            .projects()
            .with(|ps| ps.iter().find(|p| p.id == id).map(|p| p.tags.clone()))
            .unwrap();
        assert_eq!(tags, vec!["React".to_string(), "Node.js".to_string()]);
    }

    #[tokio::test]
    async fn test_chat_without_key_reports_missing_configuration() {
        let site = fresh_site();

        site.chat().toggle().await;

        let messages = site.chat().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "La clave de API no está configurada.");
    }
}
