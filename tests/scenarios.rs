// End-to-end scenarios driven through the navigation shell with fake host services

use std::time::{Duration, Instant};

use folio::pages::{Page, ProjectDetailsPage};
use folio::preferences::{CERT_CATEGORY_KEY, CERT_ISSUER_KEY, THEME_KEY};
use folio::{
    App, Catalog, Config, Input, KeyValueStore, Location, MemoryClipboard, MemoryStore,
    Preferences, RecordingOpener, Route, Services, SqliteStore, Theme,
};

struct Harness {
    app: App,
    clipboard: MemoryClipboard,
    opener: RecordingOpener,
}

fn harness_with(path: &str, prefs: Preferences, clipboard: MemoryClipboard) -> Harness {
    let opener = RecordingOpener::new();
    let services = Services {
        prefs,
        clipboard: Box::new(clipboard.clone()),
        opener: Box::new(opener.clone()),
    };
    let app = App::new(
        Catalog::sample(),
        services,
        Config::default(),
        Location::parse(path),
    );
    Harness {
        app,
        clipboard,
        opener,
    }
}

fn harness(path: &str) -> Harness {
    harness_with(path, Preferences::in_memory(), MemoryClipboard::new())
}

impl Harness {
    fn press(&mut self, inputs: &[Input]) {
        for input in inputs {
            self.app.handle(*input, Instant::now());
        }
    }

    fn type_text(&mut self, text: &str) {
        self.press(&[Input::Char('/')]);
        for c in text.chars() {
            self.press(&[Input::Char(c)]);
        }
        self.press(&[Input::Enter]);
    }

    fn certification_ids(&self) -> Vec<u32> {
        match self.app.page() {
            Page::Certifications(page) => page.listing.results().iter().map(|c| c.id).collect(),
            _ => panic!("not on the certifications page"),
        }
    }
}

#[test]
fn test_scenario_a_issuer_filter() {
    let mut h = harness("/certifications");
    assert_eq!(h.certification_ids(), vec![1, 2, 3, 4]);

    // All -> Udemy -> freeCodeCamp
    h.press(&[Input::Char('i'), Input::Char('i')]);
    assert_eq!(h.certification_ids(), vec![2, 4]);
}

#[test]
fn test_scenario_b_blog_search() {
    let mut h = harness("/blog");
    h.type_text("react hooks");
    match h.app.page() {
        Page::Blog(page) => {
            let results = page.listing.results();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].title, "Getting Started with React Hooks");
        }
        _ => panic!("expected blog page"),
    }
}

#[test]
fn test_scenario_c_unknown_project() {
    let mut h = harness("/projects/does-not-exist");
    assert!(matches!(
        h.app.page(),
        Page::ProjectDetails(ProjectDetailsPage::NotFound { .. })
    ));
    assert_eq!(h.app.page().title(), "Project Not Found");

    // "Back to Projects"
    h.press(&[Input::Enter]);
    assert_eq!(h.app.route(), Route::Projects);
}

#[test]
fn test_scenario_d_reset_restores_full_list() {
    let mut h = harness("/projects");
    let original: Vec<String> = Catalog::sample().projects.iter().map(|p| p.id.clone()).collect();

    // All -> web -> mobile
    h.press(&[Input::Char('c'), Input::Char('c')]);
    h.type_text("recipe");
    let filtered = match h.app.page() {
        Page::Projects(page) => page.listing.results().len(),
        _ => panic!("expected projects page"),
    };
    assert_eq!(filtered, 1);

    h.press(&[Input::Char('r')]);
    match h.app.page() {
        Page::Projects(page) => {
            let ids: Vec<String> = page.listing.results().iter().map(|p| p.id.clone()).collect();
            assert_eq!(ids, original);
            assert_eq!(page.listing.engine().query(), "");
        }
        _ => panic!("expected projects page"),
    }
}

#[test]
fn test_filters_survive_restart() {
    let store = MemoryStore::new();
    let mut h = harness_with(
        "/certifications",
        Preferences::new(Box::new(store.clone())),
        MemoryClipboard::new(),
    );
    h.press(&[Input::Char('i'), Input::Char('c')]);
    assert_eq!(store.get(CERT_ISSUER_KEY).unwrap(), Some("Udemy".to_string()));
    assert_eq!(
        store.get(CERT_CATEGORY_KEY).unwrap(),
        Some("Web Development".to_string())
    );

    let h = harness_with(
        "/certifications",
        Preferences::new(Box::new(store)),
        MemoryClipboard::new(),
    );
    assert_eq!(h.certification_ids(), vec![1, 3]);
}

#[test]
fn test_sqlite_store_persists_theme() {
    let store = SqliteStore::in_memory().unwrap();
    let mut h = harness_with("/", Preferences::new(Box::new(store)), MemoryClipboard::new());
    assert_eq!(h.app.theme(), Theme::Dark);
    h.press(&[Input::Char('t')]);
    assert_eq!(h.app.theme(), Theme::Light);
    assert_eq!(h.app.status(), Some("Theme: light"));
}

#[test]
fn test_theme_toggle_persists() {
    let store = MemoryStore::new();
    let mut h = harness_with("/", Preferences::new(Box::new(store.clone())), MemoryClipboard::new());
    h.press(&[Input::Char('t')]);
    assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));

    let h = harness_with("/about", Preferences::new(Box::new(store)), MemoryClipboard::new());
    assert_eq!(h.app.theme(), Theme::Light);
}

#[test]
fn test_unavailable_storage_degrades_gracefully() {
    let mut h = harness_with("/certifications", Preferences::unavailable(), MemoryClipboard::new());
    assert_eq!(h.app.theme(), Theme::Dark);

    h.press(&[Input::Char('i'), Input::Char('t')]);
    assert_eq!(h.certification_ids(), vec![1, 3]);
    assert_eq!(h.app.theme(), Theme::Light);
}

#[test]
fn test_deep_link_and_share() {
    let mut h = harness("/certifications?cert=3");
    match h.app.page() {
        Page::Certifications(page) => assert_eq!(page.listing.active(), Some(2)),
        _ => panic!("expected certifications page"),
    }

    let now = Instant::now();
    h.app.handle(Input::Char('s'), now);
    assert_eq!(
        h.clipboard.last(),
        Some("http://localhost:3000/certifications?cert=3".to_string())
    );
    assert_eq!(h.app.status(), Some("Link copied!"));

    h.app.tick(now + Duration::from_millis(500));
    match h.app.page() {
        Page::Certifications(page) => assert!(page.feedback.is_active()),
        _ => unreachable!(),
    }

    h.app.tick(now + Duration::from_secs(3));
    match h.app.page() {
        Page::Certifications(page) => assert!(!page.feedback.is_active()),
        _ => unreachable!(),
    }
}

#[test]
fn test_share_failure_shows_message() {
    let mut h = harness_with(
        "/certifications",
        Preferences::in_memory(),
        MemoryClipboard::failing(),
    );
    h.press(&[Input::Down, Input::Char('s')]);
    assert_eq!(h.app.status(), Some("Failed to copy"));
    assert!(h.app.status_is_error());
    assert_eq!(h.clipboard.writes(), 0);
}

#[test]
fn test_share_status_clears_after_feedback_window() {
    let mut h = harness_with(
        "/certifications",
        Preferences::in_memory(),
        MemoryClipboard::failing(),
    );
    let now = Instant::now();
    h.app.handle(Input::Down, now);
    h.app.handle(Input::Char('s'), now);
    assert_eq!(h.app.status(), Some("Failed to copy"));

    h.app.tick(now + Duration::from_secs(1));
    assert_eq!(h.app.status(), Some("Failed to copy"));

    h.app.tick(now + Duration::from_secs(10));
    assert_eq!(h.app.status(), None);
    assert!(!h.app.status_is_error());
}

#[test]
fn test_end_then_enter_opens_last_certificate() {
    let mut h = harness("/certifications");
    h.press(&[Input::Char('i'), Input::End, Input::Enter]);
    let last = Catalog::sample().certification(3).unwrap().certificate_url.clone();
    assert_eq!(h.opener.opened(), vec![last]);

    h.press(&[Input::Home, Input::Char('o')]);
    let first = Catalog::sample().certification(1).unwrap().pdf_url.clone();
    assert_eq!(h.opener.opened()[1], first);
}

#[test]
fn test_enter_opens_certificate_and_escape_clears() {
    let mut h = harness("/certifications");
    h.press(&[Input::Down, Input::Down, Input::Enter]);
    assert_eq!(
        h.opener.opened(),
        vec!["https://certificates.example.com/javascript-algorithms-and-data-structures".to_string()]
    );

    h.press(&[Input::Esc, Input::Enter]);
    assert_eq!(h.opener.opened().len(), 1);
}

#[test]
fn test_listeners_released_on_navigation() {
    use folio::listeners::ListenerKind;

    let mut h = harness("/certifications");
    assert!(h.app.listeners().is_registered(ListenerKind::KeyDown));

    h.press(&[Input::Tab]);
    assert_eq!(h.app.route(), Route::Documentations);
    assert!(!h.app.listeners().is_registered(ListenerKind::KeyDown));

    h.app.navigate(Location::parse("/"));
    assert_eq!(h.app.listeners().count(ListenerKind::Resize), 1);
    h.app.navigate(Location::parse("/"));
    assert_eq!(h.app.listeners().count(ListenerKind::Resize), 1);
    h.app.navigate(Location::parse("/contact"));
    assert!(!h.app.listeners().is_registered(ListenerKind::Resize));
}

#[test]
fn test_blog_read_more_lands_on_not_found() {
    let mut h = harness("/blog");
    h.press(&[Input::Down, Input::Enter]);
    assert!(matches!(h.app.route(), Route::NotFound(_)));
    assert!(h.app.nav_item().is_none());

    h.press(&[Input::Enter]);
    assert_eq!(h.app.route(), Route::Home);
}
