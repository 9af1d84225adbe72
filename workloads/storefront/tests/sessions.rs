//! Full page sessions on the simulated host.

use std::time::Duration;

use leveling_core::DeferredConfig;
use leveling_deferred::{SectionStatus, SimulatedHost, Viewport};
use leveling_observability::{LogCapture, SessionId, StructuredLogger};
use leveling_storefront::{FormError, FormKind, PageForm, PageKind, PageSession, Router};

fn open(path: &str) -> (PageSession, LogCapture) {
    open_on(path, SimulatedHost::default(), false)
}

fn open_on(path: &str, host: SimulatedHost, record: bool) -> (PageSession, LogCapture) {
    let capture = LogCapture::new();
    let logger = StructuredLogger::new(SessionId::from_string("sess-test")).with_capture(capture.clone());
    let session = PageSession::open(
        &Router::default(),
        path,
        host,
        DeferredConfig::default(),
        logger,
        record,
    );
    (session, capture)
}

fn values(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn home_grid_shows_skeleton_then_each_product_once() {
    let (mut session, _) = open("/");
    session.load_modules();

    let html = session.render();
    assert_eq!(html.matches(r#"<div class="space-y-3">"#).count(), 6);
    assert!(!html.contains("data-product="));

    session.advance(Duration::from_millis(799));
    assert!(!session.render().contains("data-product="));

    session.advance(Duration::from_millis(1));
    let html = session.render();
    assert!(!html.contains(r#"<div class="space-y-3">"#));
    for id in 1..=6 {
        assert_eq!(html.matches(&format!(r#"data-product="{}""#, id)).count(), 1);
    }
}

#[test]
fn home_hero_loads_eagerly_and_cards_on_scroll() {
    let (mut session, _) = open("/");
    assert_eq!(session.host().pending_media().len(), 1);

    session.load_modules();
    session.advance(Duration::from_millis(800));

    // Cards sit below the fold: only the hero image is mounted.
    assert_eq!(session.render().matches("<img").count(), 1);
    assert_eq!(session.host().active_observations(), 6);

    // The first row comes within the proximity margin.
    session.scroll_to(200.0);
    assert_eq!(session.render().matches("<img").count(), 4);
    assert_eq!(session.host().active_observations(), 3);

    session.scroll_to(0.0);
    assert_eq!(session.render().matches("<img").count(), 4);

    session.scroll_to(1000.0);
    session.load_media();
    let html = session.render();
    assert_eq!(html.matches("<img").count(), 7);
    assert_eq!(html.matches(r#"data-media="loaded""#).count(), 7);
    assert_eq!(session.host().active_observations(), 0);
}

#[test]
fn home_sections_swap_independent_of_scroll() {
    let (mut session, _) = open("/");
    session.scroll_to(5000.0);

    assert_eq!(
        session.page().sections().status("footer"),
        Some(SectionStatus::Pending)
    );

    session.load_modules();
    assert!(session.page().sections().is_complete());
    assert!(session.render().contains("BE IN THE LOOP"));
}

#[test]
fn mobile_viewport_stacks_cards() {
    let host = SimulatedHost::new(Viewport::new(375.0, 667.0));
    let (mut session, _) = open_on("/", host, false);
    session.load_modules();
    session.advance(Duration::from_millis(800));

    // One column: the first card already reaches into the proximity margin.
    assert_eq!(session.render().matches("<img").count(), 2);

    session.scroll_to(300.0);
    assert_eq!(session.render().matches("<img").count(), 2);

    session.scroll_to(700.0);
    assert_eq!(session.render().matches("<img").count(), 3);
}

#[test]
fn scroll_to_top_button_follows_scroll() {
    let (mut session, _) = open("/");
    assert!(!session.render().contains("Scroll to top"));

    assert!(session.scroll_to(600.0));
    assert!(session.render().contains("Scroll to top"));

    session.scroll_to(100.0);
    assert!(!session.render().contains("Scroll to top"));
}

#[test]
fn unknown_path_renders_not_found() {
    let (session, _) = open("/cart?item=1");

    assert_eq!(session.route().kind, PageKind::NotFound);
    assert!(session.render().contains("Page Not Found"));
    assert!(session.render().contains("<code>/cart</code>"));
}

#[test]
fn help_form_confirms_then_resets() {
    let (mut session, capture) = open("/help");
    let filled = values(&[
        ("name", "Jane Doe"),
        ("email", "jane@example.com"),
        ("subject", "returns"),
        ("message", "Box arrived damaged"),
    ]);

    session.submit(FormKind::Help, &filled).unwrap();
    assert!(session.render().contains("Message Sent!"));

    let logged = capture.with_message("form submitted");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].route.as_deref(), Some("/help"));

    session.advance(Duration::from_millis(2999));
    assert!(session.render().contains("Message Sent!"));

    session.advance(Duration::from_millis(1));
    let html = session.render();
    assert!(!html.contains("Message Sent!"));
    assert!(!html.contains("Box arrived damaged"));
}

#[test]
fn help_page_breadcrumbs() {
    let (session, _) = open("/help");
    let html = session.render();

    assert!(html.contains(r#"<a href="/" class="text-gray-600 hover:text-black transition cursor-pointer">Home</a>"#));
    assert!(html.contains(r#"<span class="text-black font-medium">Help</span>"#));
}

#[test]
fn missing_field_rejected_and_logged() {
    let (mut session, capture) = open("/signup");
    let partial = values(&[("firstName", "Jane"), ("email", "jane@example.com")]);

    let err = session.submit(FormKind::Signup, &partial).unwrap_err();

    assert_eq!(err, FormError::MissingField("Last Name".to_string()));
    assert!(capture.with_message("form submitted").is_empty());
    assert_eq!(capture.with_message("form rejected").len(), 1);
    assert!(session.render().contains(r#"value="Jane""#));
}

#[test]
fn login_page_submission_keeps_values() {
    let (mut session, capture) = open("/login");
    assert_eq!(
        session.page().sections().status("header"),
        Some(SectionStatus::Pending)
    );

    session
        .submit(
            FormKind::Login,
            &values(&[("email", "jane@example.com"), ("password", "hunter22")]),
        )
        .unwrap();

    let Some(PageForm::Account(account)) = session.page().form() else {
        panic!("login page has an account form");
    };
    assert_eq!(account.borrow().form().get("email"), "jane@example.com");
    assert_eq!(account.borrow().submissions(), 1);
    assert!(session.render().contains(r#"value="jane@example.com""#));
    assert!(!session.render().contains("hunter22"));
    assert!(!capture.entries().iter().any(|e| e.to_json().contains("hunter22")));
}

#[test]
fn header_signup_modal_accepts_six_fields() {
    let (mut session, capture) = open("/");
    let fields = values(&[
        ("firstName", "Jane"),
        ("lastName", "Doe"),
        ("email", "jane@example.com"),
        ("password", "secret123"),
        ("confirmPassword", "secret123"),
        ("birthDate", "1990-04-12"),
    ]);

    let submission = session.submit(FormKind::Signup, &fields).unwrap();

    assert_eq!(submission.values.len(), 6);
    assert!(!session.page().header().borrow().modals().is_signup_open());
    assert_eq!(capture.with_message("form submitted").len(), 1);
}

#[test]
fn recording_captures_events_and_phases() {
    let (mut session, _) = open_on("/", SimulatedHost::default(), true);
    session.load_modules();
    session.advance(Duration::from_millis(800));
    session.scroll_to(200.0);

    let recording = session.finish().unwrap();

    assert_eq!(recording.route, "/");
    assert_eq!(recording.count_events("module_ready"), 2);
    assert_eq!(recording.count_events("timer_fired"), 1);
    assert!(recording.phases.iter().any(|p| p.phase == "swapped"));
    assert!(recording.phases.iter().any(|p| p.phase == "ready"));
    assert_eq!(recording.finished_at_ms, 800);
}

#[test]
fn long_advance_handles_timer_at_its_deadline() {
    let (mut session, _) = open_on("/", SimulatedHost::default(), true);
    session.load_modules();
    session.advance(Duration::from_millis(1000));

    assert_eq!(session.now(), Duration::from_millis(1000));
    let recording = session.finish().unwrap();
    let ready: Vec<u64> = recording
        .phases
        .iter()
        .filter(|p| p.phase == "ready")
        .map(|p| p.at_ms)
        .collect();
    assert_eq!(ready, vec![800]);
    let fired = recording.events.iter().find(|e| e.kind == "timer_fired").unwrap();
    assert_eq!(fired.at_ms, 800);
    assert_eq!(recording.finished_at_ms, 1000);
}

#[test]
fn closing_session_releases_host_resources() {
    let host = SimulatedHost::default();
    let (mut session, _) = open_on("/", host.clone(), false);
    session.load_modules();
    session.advance(Duration::from_millis(100));

    assert!(session.finish().is_none());

    assert_eq!(host.active_timers(), 0);
    assert_eq!(host.stats().timers_cancelled, 1);
    assert!(host.advance(Duration::from_secs(1)).is_empty());
}
