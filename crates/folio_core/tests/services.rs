use folio_core::{
    locale_options, BlogError, BlogService, Category, ContentCatalog, HandoffSlot, Item, ItemId,
    ItemKind, KindSelection, LoadPolicy, LocaleSettings, LocalizedContent, ProjectGallery,
    ResumeDocument, ResumeShelf, SelectionEvent, SupportedLocale,
};

fn supported(code: &str, label: &str) -> SupportedLocale {
    SupportedLocale {
        code: code.to_string(),
        label: label.to_string(),
    }
}

fn locales() -> LocaleSettings {
    LocaleSettings {
        default: "en".to_string(),
        supported: vec![
            supported("en", "English"),
            supported("ua", "Українська"),
            supported("ru", "Русский"),
        ],
    }
}

fn post(id: &str, tags: &[&str], en_body: &str) -> Item {
    let mut content = LocalizedContent::new(format!("{id} (en)"), en_body);
    content.date = Some("2025-05-22".to_string());
    content.read_time = Some("4 min".to_string());
    content.tags = tags.iter().map(|tag| tag.to_string()).collect();
    Item::new(ItemId::parse(id).unwrap(), ItemKind::Post)
        .with_skills(tags.iter().copied())
        .with_content("en", content)
}

fn sample_catalog() -> ContentCatalog {
    let nginx = Item::new(ItemId::parse("nginx").unwrap(), ItemKind::Project)
        .with_skills(["SSL/TLS", "Nginx"])
        .with_content("en", LocalizedContent::new("Nginx and SSL", "  Reverse proxy.  "))
        .with_content("ua", LocalizedContent::new("Nginx та SSL", "Зворотний проксі."));
    let chess = Item::new(ItemId::parse("chess").unwrap(), ItemKind::Project)
        .with_skills(["React", "TypeScript"])
        .with_content("en", LocalizedContent::new("Chess", "Board game."));
    let gym = post(
        "devops-is-my-gym",
        &["DevOps", "Discipline"],
        "Discipline.\n\nReps.\n\n\nLoad.",
    )
    .with_content("ru", LocalizedContent::new("DevOps, мой спортзал", "Дисциплина."));
    let ai = post("ai-driven-engineer", &["DevOps", "AI"], "Obsessed.");

    ContentCatalog::from_parts(
        locales(),
        vec![
            Category::new("category_security", ["Security", "SSL/TLS"]),
            Category::new("category_web_development", ["React", "TypeScript"]),
        ],
        vec![nginx, chess, gym, ai],
        vec![
            ResumeDocument {
                locale: "en".to_string(),
                path: "assets/CV_Koshelenko.pdf".to_string(),
            },
            ResumeDocument {
                locale: "ua".to_string(),
                path: "assets/Koshelenko.pdf".to_string(),
            },
        ],
        LoadPolicy::Strict,
    )
    .unwrap()
    .catalog
}

#[test]
fn gallery_lists_every_kind_until_narrowed() {
    let catalog = sample_catalog();
    let mut gallery = ProjectGallery::new(&catalog);

    let view = gallery.view("en").unwrap();
    assert_eq!(view.shown(), 4);
    assert_eq!(view.total, 4);

    gallery.apply(SelectionEvent::SetKind(KindSelection::Only(ItemKind::Project)));
    let view = gallery.view("en").unwrap();
    let titles: Vec<&str> = view.cards.iter().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, vec!["Nginx and SSL", "Chess"]);
    assert_eq!(view.cards[0].description, "Reverse proxy.");
}

#[test]
fn gallery_cards_flag_the_selected_skill() {
    let catalog = sample_catalog();
    let mut gallery = ProjectGallery::new(&catalog);
    gallery.apply(SelectionEvent::SelectSkill("nginx".to_string()));

    let view = gallery.view("ua").unwrap();
    assert_eq!(view.shown(), 1);
    let card = &view.cards[0];
    assert_eq!(card.title, "Nginx та SSL");
    let active: Vec<&str> = card
        .skills
        .iter()
        .filter(|chip| chip.active)
        .map(|chip| chip.label.as_str())
        .collect();
    assert_eq!(active, vec!["Nginx"]);
}

#[test]
fn gallery_empty_result_is_a_view() {
    let catalog = sample_catalog();
    let mut gallery = ProjectGallery::new(&catalog);
    gallery.apply(SelectionEvent::SelectSkill("COBOL".to_string()));

    let view = gallery.view("en").unwrap();
    assert!(view.is_empty());
    assert_eq!(view.total, 4);
    assert_eq!(view.selection.skill(), Some("COBOL"));
}

#[test]
fn gallery_category_buttons_reflect_selection() {
    let catalog = sample_catalog();
    let mut gallery = ProjectGallery::new(&catalog);
    gallery.apply(SelectionEvent::SelectCategory(
        "category_web_development".to_string(),
    ));

    let buttons = gallery.category_buttons();
    assert_eq!(buttons.len(), 2);
    assert!(!buttons[0].active);
    assert!(buttons[1].active);
    assert_eq!(gallery.items().len(), 1);
}

#[test]
fn gallery_consumes_handoff_once_with_authored_casing() {
    let catalog = sample_catalog();
    let mut slot = HandoffSlot::new();
    slot.put("react".to_string());

    let gallery = ProjectGallery::with_handoff(&catalog, &mut slot);
    assert_eq!(gallery.state().skill(), Some("React"));
    assert!(!slot.is_pending());

    let reopened = ProjectGallery::with_handoff(&catalog, &mut slot);
    assert!(!reopened.state().has_active_filters());
}

#[test]
fn blog_lists_posts_in_catalog_order_with_tag_filter() {
    let catalog = sample_catalog();
    let blog = BlogService::new(&catalog);

    let all = blog.list_posts("en", None).unwrap();
    let ids: Vec<&str> = all.iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, vec!["devops-is-my-gym", "ai-driven-engineer"]);
    assert_eq!(all[1].preview.as_deref(), Some("Obsessed."));

    let ai = blog.list_posts("en", Some("ai")).unwrap();
    assert_eq!(ai.len(), 1);
    assert_eq!(ai[0].id.as_str(), "ai-driven-engineer");

    let blank_tag = blog.list_posts("en", Some("  ")).unwrap();
    assert_eq!(blank_tag.len(), 2);
}

#[test]
fn blog_post_falls_back_to_default_locale() {
    let catalog = sample_catalog();
    let blog = BlogService::new(&catalog);

    let translated = blog.post("devops-is-my-gym", "ru").unwrap();
    assert!(!translated.fell_back);
    assert_eq!(translated.locale, "ru");

    let fallback = blog.post("devops-is-my-gym", "ua").unwrap();
    assert!(fallback.fell_back);
    assert_eq!(fallback.locale, "en");
    assert_eq!(fallback.paragraphs, vec!["Discipline.", "Reps.", "Load."]);
    assert_eq!(fallback.read_time.as_deref(), Some("4 min"));
}

#[test]
fn blog_post_rejects_unknown_ids_and_projects() {
    let catalog = sample_catalog();
    let blog = BlogService::new(&catalog);

    assert!(matches!(
        blog.post("missing", "en"),
        Err(BlogError::PostNotFound(ref id)) if id == "missing"
    ));
    assert!(matches!(
        blog.post("nginx", "en"),
        Err(BlogError::PostNotFound(_))
    ));
}

#[test]
fn resume_falls_back_to_default_document() {
    let catalog = sample_catalog();
    let shelf = ResumeShelf::new(&catalog);

    assert_eq!(shelf.select("ua").unwrap().path, "assets/Koshelenko.pdf");
    assert_eq!(shelf.select("ru").unwrap().path, "assets/CV_Koshelenko.pdf");
    assert_eq!(shelf.select("fr").unwrap().path, "assets/CV_Koshelenko.pdf");
}

#[test]
fn bundled_resume_and_locale_switcher() {
    let catalog = ContentCatalog::bundled(LoadPolicy::Strict).unwrap().catalog;
    let shelf = ResumeShelf::new(&catalog);
    assert_eq!(shelf.select("ua").unwrap().locale, "ua");
    assert_eq!(shelf.select("ru").unwrap().locale, "en");

    let options = locale_options(catalog.locales(), "fr");
    let active: Vec<&str> = options
        .iter()
        .filter(|option| option.active)
        .map(|option| option.code.as_str())
        .collect();
    assert_eq!(active, vec!["en"]);
}
