//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-wide catalog and the skill handoff slot.
//! - Flatten core types into plain mirror structs.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures travel as `ok=false` plus a human-readable `message`.
//! - The selection is owned by the caller and passed in on every call.

use folio_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    locale_options as locale_options_inner, ping as ping_inner, BlogService, ContentCatalog,
    FolioConfig, GalleryCard, GalleryView, HandoffSlot, KindSelection, PostSummary, PostView,
    ProjectGallery, ResumeShelf, SelectionEvent, SelectionState,
};
use log::{error, info, warn};
use std::sync::{Mutex, OnceLock, PoisonError};

static CATALOG: OnceLock<Result<ContentCatalog, String>> = OnceLock::new();
static SKILL_HANDOFF: Mutex<HandoffSlot<String>> = Mutex::new(HandoffSlot::new());

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Filter selection as held by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FfiSelection {
    /// `all|project|post`; blank means `all`.
    pub kind: String,
    pub category: Option<String>,
    pub skill: Option<String>,
}

/// Click events understood by [`selection_apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FfiSelectionEvent {
    SelectCategory { id: String },
    SelectSkill { label: String },
    SetKind { kind: String },
    Reset,
}

/// Selection transition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResponse {
    pub ok: bool,
    /// Next selection; the unchanged input when `ok` is false.
    pub selection: FfiSelection,
    pub message: String,
}

/// Skill label on a gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiSkillChip {
    pub label: String,
    pub active: bool,
}

/// One gallery card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiGalleryCard {
    pub id: String,
    /// `project|post`.
    pub kind: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<FfiSkillChip>,
    pub image: Option<String>,
    pub source_link: Option<String>,
    pub demo_link: Option<String>,
}

/// Category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiFilterButton {
    pub id: String,
    pub active: bool,
}

/// Gallery response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryResponse {
    pub ok: bool,
    pub cards: Vec<FfiGalleryCard>,
    pub buttons: Vec<FfiFilterButton>,
    /// Selection the cards were computed for.
    pub selection: FfiSelection,
    pub total: u32,
    /// `"No results."` for an empty but valid view, error text otherwise.
    pub message: String,
}

impl GalleryResponse {
    fn failure(selection: FfiSelection, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            cards: Vec::new(),
            buttons: Vec::new(),
            selection,
            total: 0,
            message: message.into(),
        }
    }
}

/// Locale switcher entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiLocaleOption {
    pub code: String,
    pub label: String,
    pub active: bool,
}

/// Blog list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiPostSummary {
    pub id: String,
    pub locale: String,
    pub title: String,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub preview: Option<String>,
}

/// Blog list response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListResponse {
    pub ok: bool,
    pub posts: Vec<FfiPostSummary>,
    pub message: String,
}

/// Full blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiPost {
    pub id: String,
    pub locale: String,
    pub fell_back: bool,
    pub title: String,
    pub date: Option<String>,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub paragraphs: Vec<String>,
}

/// Blog post response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub ok: bool,
    pub post: Option<FfiPost>,
    pub message: String,
}

/// Resolves the UI locale against the catalog's supported set.
///
/// # FFI contract
/// - Never panics.
/// - Returns `requested` unchanged when the catalog is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_locale(requested: String) -> String {
    match catalog() {
        Ok(catalog) => catalog.locales().resolve(&requested).to_string(),
        Err(_) => requested,
    }
}

/// Locale switcher entries; empty when the catalog is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn locale_options(current: String) -> Vec<FfiLocaleOption> {
    let Ok(catalog) = catalog() else {
        return Vec::new();
    };
    locale_options_inner(catalog.locales(), &current)
        .into_iter()
        .map(|option| FfiLocaleOption {
            code: option.code,
            label: option.label,
            active: option.active,
        })
        .collect()
}

/// Applies one click event to a selection.
///
/// # FFI contract
/// - Pure; no catalog access.
/// - Unknown kind labels or inconsistent input selections return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn selection_apply(selection: FfiSelection, event: FfiSelectionEvent) -> SelectionResponse {
    let result = to_state(&selection).and_then(|state| {
        let event = to_event(event)?;
        Ok(state.apply(event))
    });
    match result {
        Ok(next) => SelectionResponse {
            ok: true,
            selection: from_state(&next),
            message: String::new(),
        },
        Err(err) => SelectionResponse {
            ok: false,
            selection,
            message: format!("selection_apply failed: {err}"),
        },
    }
}

/// Builds the gallery for a caller-held selection.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_view(selection: FfiSelection, locale: String) -> GalleryResponse {
    let state = match to_state(&selection) {
        Ok(state) => state,
        Err(err) => {
            return GalleryResponse::failure(selection, format!("gallery_view failed: {err}"))
        }
    };
    match catalog() {
        Ok(catalog) => render_gallery(&ProjectGallery::with_state(catalog, state), &locale),
        Err(err) => GalleryResponse::failure(selection, format!("gallery_view failed: {err}")),
    }
}

/// Opens the gallery, consuming a skill published by [`handoff_put_skill`].
///
/// The returned `selection` is the starting point for later calls.
#[flutter_rust_bridge::frb(sync)]
pub fn gallery_open(locale: String) -> GalleryResponse {
    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            return GalleryResponse::failure(
                FfiSelection::default(),
                format!("gallery_open failed: {err}"),
            )
        }
    };
    let mut slot = SKILL_HANDOFF.lock().unwrap_or_else(PoisonError::into_inner);
    let gallery = ProjectGallery::with_handoff(catalog, &mut slot);
    drop(slot);
    render_gallery(&gallery, &locale)
}

/// Lists blog posts, optionally restricted to one tag.
#[flutter_rust_bridge::frb(sync)]
pub fn blog_list(locale: String, tag: Option<String>) -> BlogListResponse {
    let result = catalog().and_then(|catalog| {
        BlogService::new(catalog)
            .list_posts(&locale, tag.as_deref())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(posts) => BlogListResponse {
            ok: true,
            posts: posts.into_iter().map(to_ffi_summary).collect(),
            message: String::new(),
        },
        Err(err) => BlogListResponse {
            ok: false,
            posts: Vec::new(),
            message: format!("blog_list failed: {err}"),
        },
    }
}

/// Resolves one blog post for display.
#[flutter_rust_bridge::frb(sync)]
pub fn blog_post(id: String, locale: String) -> PostResponse {
    let result = catalog().and_then(|catalog| {
        BlogService::new(catalog)
            .post(id.trim(), &locale)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(post) => PostResponse {
            ok: true,
            post: Some(to_ffi_post(post)),
            message: String::new(),
        },
        Err(err) => PostResponse {
            ok: false,
            post: None,
            message: format!("blog_post failed: {err}"),
        },
    }
}

/// Asset path of the résumé for `locale`; `None` without any résumé.
#[flutter_rust_bridge::frb(sync)]
pub fn resume_path(locale: String) -> Option<String> {
    let catalog = catalog().ok()?;
    ResumeShelf::new(catalog)
        .select(&locale)
        .map(|resume| resume.path.clone())
}

/// Publishes the skill clicked on the About page.
///
/// # FFI contract
/// - Replaces an unconsumed skill.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn handoff_put_skill(skill: String) -> String {
    let skill = skill.trim();
    if skill.is_empty() {
        return "handoff_put_skill failed: skill must not be blank".to_string();
    }
    SKILL_HANDOFF
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .put(skill.to_string());
    info!("event=handoff_put module=ffi status=ok skill={}", skill);
    String::new()
}

/// Consumes the pending skill, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn handoff_take_skill() -> Option<String> {
    SKILL_HANDOFF
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

fn catalog() -> Result<&'static ContentCatalog, String> {
    CATALOG.get_or_init(load_catalog).as_ref().map_err(Clone::clone)
}

fn load_catalog() -> Result<ContentCatalog, String> {
    let config = FolioConfig::from_env();
    match config.load_catalog() {
        Ok(load) => {
            for dropped in &load.dropped {
                warn!(
                    "event=catalog_item_skipped module=ffi status=warn item_id={} reason={}",
                    dropped.id, dropped.reason
                );
            }
            Ok(load.catalog)
        }
        Err(err) => {
            error!("event=catalog_init module=ffi status=error error={}", err);
            Err(format!("catalog unavailable: {err}"))
        }
    }
}

fn render_gallery(gallery: &ProjectGallery<'_>, locale: &str) -> GalleryResponse {
    let selection = from_state(gallery.state());
    match gallery.view(locale) {
        Ok(view) => to_gallery_response(view, gallery),
        Err(err) => GalleryResponse::failure(selection, format!("gallery failed: {err}")),
    }
}

fn to_gallery_response(view: GalleryView, gallery: &ProjectGallery<'_>) -> GalleryResponse {
    let message = if view.is_empty() {
        "No results.".to_string()
    } else {
        format!("Showing {} of {}.", view.shown(), view.total)
    };
    GalleryResponse {
        ok: true,
        selection: from_state(&view.selection),
        total: u32::try_from(view.total).unwrap_or(u32::MAX),
        cards: view.cards.into_iter().map(to_ffi_card).collect(),
        buttons: gallery
            .category_buttons()
            .into_iter()
            .map(|button| FfiFilterButton {
                id: button.id,
                active: button.active,
            })
            .collect(),
        message,
    }
}

fn to_state(selection: &FfiSelection) -> Result<SelectionState, String> {
    let kind_label = selection.kind.trim();
    let kind = if kind_label.is_empty() {
        KindSelection::All
    } else {
        KindSelection::parse(kind_label)
            .ok_or_else(|| format!("unknown kind `{kind_label}`"))?
    };
    let category = non_blank(selection.category.as_deref());
    let skill = non_blank(selection.skill.as_deref());

    let state = SelectionState::new().apply(SelectionEvent::SetKind(kind));
    match (category, skill) {
        (Some(_), Some(_)) => Err("category and skill cannot both be active".to_string()),
        (Some(category), None) => {
            Ok(state.apply(SelectionEvent::SelectCategory(category.to_string())))
        }
        (None, Some(skill)) => Ok(state.apply(SelectionEvent::SelectSkill(skill.to_string()))),
        (None, None) => Ok(state),
    }
}

fn to_event(event: FfiSelectionEvent) -> Result<SelectionEvent, String> {
    Ok(match event {
        FfiSelectionEvent::SelectCategory { id } => SelectionEvent::SelectCategory(id),
        FfiSelectionEvent::SelectSkill { label } => SelectionEvent::SelectSkill(label),
        FfiSelectionEvent::SetKind { kind } => SelectionEvent::SetKind(
            KindSelection::parse(&kind).ok_or_else(|| format!("unknown kind `{kind}`"))?,
        ),
        FfiSelectionEvent::Reset => SelectionEvent::Reset,
    })
}

fn from_state(state: &SelectionState) -> FfiSelection {
    FfiSelection {
        kind: state.kind().as_str().to_string(),
        category: state.category().map(str::to_string),
        skill: state.skill().map(str::to_string),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn to_ffi_card(card: GalleryCard) -> FfiGalleryCard {
    FfiGalleryCard {
        id: card.id.to_string(),
        kind: card.kind.as_str().to_string(),
        title: card.title,
        description: card.description,
        skills: card
            .skills
            .into_iter()
            .map(|chip| FfiSkillChip {
                label: chip.label,
                active: chip.active,
            })
            .collect(),
        image: card.image,
        source_link: card.links.source,
        demo_link: card.links.demo,
    }
}

fn to_ffi_summary(summary: PostSummary) -> FfiPostSummary {
    FfiPostSummary {
        id: summary.id.to_string(),
        locale: summary.locale,
        title: summary.title,
        date: summary.date,
        read_time: summary.read_time,
        tags: summary.tags,
        preview: summary.preview,
    }
}

fn to_ffi_post(post: PostView) -> FfiPost {
    FfiPost {
        id: post.id.to_string(),
        locale: post.locale,
        fell_back: post.fell_back,
        title: post.title,
        date: post.date,
        read_time: post.read_time,
        tags: post.tags,
        paragraphs: post.paragraphs,
    }
}
