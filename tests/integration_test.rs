//! Integration tests for recipients
//!
//! These tests drive the library the way the CLI does: candidate lists
//! loaded from temporary files, the composer fed through terminal events,
//! and frames rendered to a test backend.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};
use recipients::{
    candidates::CandidateList,
    composer::{Composer, Outcome, Visibility},
    config::{RecipientsConfig, ThemeName},
    email::Email,
    suggest::{MAX_SUGGESTIONS, suggest},
    tags::TagStore,
    ui::ratatui_adapter::{AppState, EventResult, Hit, Theme, handle_event, render},
    validation::validate_email,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

/// Helper function to write a candidate file
fn candidate_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn xyz_candidates() -> CandidateList {
    CandidateList::from_json(
        r#"[
            {"text": "alice@x.com", "isValid": true},
            {"text": "bob@x.com", "isValid": true},
            {"text": "carol@x.com", "isValid": true}
        ]"#,
    )
    .unwrap()
}

fn texts(emails: &[Email]) -> Vec<&str> {
    emails.iter().map(|e| e.text.as_str()).collect()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render one frame so the layout used for hit-testing is current
fn draw(terminal: &mut Terminal<TestBackend>, state: &mut AppState) {
    let theme = Theme::dark();
    terminal.draw(|frame| render(frame, state, &theme)).unwrap();
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_typing_a_filters_and_sorts() {
    let mut field = Composer::new(xyz_candidates());
    field.activate();
    field.input_char('a');

    assert_eq!(texts(field.suggestions()), vec!["alice@x.com", "carol@x.com"]);
}

#[test]
fn test_commit_marks_validity() {
    let mut tags = TagStore::new();
    tags.commit("not-an-email");
    tags.commit("user@test.com");

    assert!(!tags.entries()[0].is_valid);
    assert!(tags.entries()[1].is_valid);
}

#[test]
fn test_tagged_candidate_is_excluded() {
    let candidates =
        CandidateList::from_json(r#"[{"text": "a@x.com"}, {"text": "ab@x.com"}]"#).unwrap();
    let mut tags = TagStore::new();
    tags.commit("a@x.com");

    let found = suggest("a", &tags, candidates.as_slice(), Visibility::Expanded);
    assert_eq!(texts(&found), vec!["ab@x.com"]);
}

#[test]
fn test_commit_remove_round_trip() {
    let mut tags = TagStore::new();
    tags.commit("a@x.com");
    tags.commit("b@x.com");
    let before = tags.clone();

    assert!(tags.commit("c@x.com"));
    tags.remove("c@x.com");
    assert_eq!(tags, before);

    assert!(!tags.commit(""));
    assert!(!tags.commit("a@x.com"));
    assert_eq!(tags.len(), 2);
}

#[test]
fn test_suggestions_cap_and_order_over_bundled_list() {
    let candidates = CandidateList::bundled().unwrap();
    let found = suggest("", &TagStore::new(), candidates.as_slice(), Visibility::Expanded);

    assert!(found.len() <= MAX_SUGGESTIONS);
    for pair in found.windows(2) {
        assert!(pair[0].text.to_uppercase() <= pair[1].text.to_uppercase());
    }
}

#[test]
fn test_candidate_file_overrides_bundled() {
    let file =
        candidate_file(r#"[{"text": "ops@corp.io"}, {"text": "legacy-list", "isValid": false}]"#);

    let list = CandidateList::resolve(Some(file.path())).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.as_slice()[0].is_valid);
    assert!(!list.as_slice()[1].is_valid);
}

#[test]
fn test_malformed_candidate_file_fails() {
    let file = candidate_file("not json");
    assert!(CandidateList::load(file.path()).is_err());
}

#[test]
fn test_config_round_trip_in_temp_dir() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipients").join("config.toml");

    let mut config = RecipientsConfig::load_from(&path).unwrap();
    config.set("theme", "light").unwrap();
    config.set("log_file", "/tmp/recipients.log").unwrap();
    config.save_to(&path).unwrap();

    let reloaded = RecipientsConfig::load_from(&path).unwrap();
    assert_eq!(reloaded.theme, ThemeName::Light);
    assert_eq!(reloaded.get("log_file").unwrap(), "/tmp/recipients.log");
}

#[test]
fn test_keyboard_session() {
    let mut state = AppState::new(Composer::new(xyz_candidates()));

    handle_event(&mut state, key(KeyCode::Enter));
    for c in "car".chars() {
        handle_event(&mut state, key(KeyCode::Char(c)));
    }
    assert_eq!(texts(state.composer.suggestions()), vec!["carol@x.com"]);

    handle_event(&mut state, key(KeyCode::Down));
    handle_event(&mut state, key(KeyCode::Enter));
    assert_eq!(state.composer.tags().texts(), vec!["carol@x.com"]);
    assert_eq!(state.composer.visibility(), Visibility::Collapsed);

    handle_event(&mut state, key(KeyCode::Enter));
    for c in "bogus".chars() {
        handle_event(&mut state, key(KeyCode::Char(c)));
    }
    handle_event(&mut state, key(KeyCode::Tab));
    assert_eq!(state.composer.tags().texts(), vec!["carol@x.com", "bogus"]);
    assert_eq!(state.invalid_count(), 1);

    assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), EventResult::Quit);
    let tags = state.composer.into_tags();
    assert_eq!(tags.len(), 2);
}

#[test]
fn test_mouse_session_hover_suppresses_blur() {
    let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
    let mut state = AppState::new(Composer::new(xyz_candidates()));

    draw(&mut terminal, &mut state);
    handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 10, 3));
    assert!(state.composer.is_expanded());

    handle_event(&mut state, key(KeyCode::Char('b')));
    draw(&mut terminal, &mut state);
    assert!(screen(&terminal).contains("bob@x.com"));

    // input on row 1, panel border on row 2, first suggestion on row 3
    assert_eq!(state.layout.hit(5, 3), Hit::Suggestion(0));
    handle_event(&mut state, mouse(MouseEventKind::Moved, 5, 3));
    handle_event(&mut state, Event::FocusLost);
    assert!(state.composer.is_expanded());
    assert_eq!(state.composer.draft(), "b");

    handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    assert_eq!(state.composer.tags().texts(), vec!["bob@x.com"]);

    draw(&mut terminal, &mut state);
    let text = screen(&terminal);
    assert!(text.contains("bob@x.com ×"));
    assert!(text.contains("Added bob@x.com"));
}

#[test]
fn test_mouse_click_on_chip_removes_it() {
    let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
    let composer = Composer::new(xyz_candidates()).with_tags(["alice@x.com", "bob@x.com"]);
    let mut state = AppState::new(composer);
    draw(&mut terminal, &mut state);

    let chip = state
        .layout
        .chips
        .iter()
        .find(|chip| chip.text == "bob@x.com")
        .map(|chip| chip.area)
        .unwrap();
    handle_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), chip.x, chip.y));

    assert_eq!(state.composer.tags().texts(), vec!["alice@x.com"]);
}

#[test]
fn test_empty_state_and_placeholder() {
    let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
    let mut state = AppState::new(Composer::new(xyz_candidates()));
    draw(&mut terminal, &mut state);
    assert!(screen(&terminal).contains("Enter recipients..."));

    state.composer.activate();
    draw(&mut terminal, &mut state);
    assert!(!screen(&terminal).contains("Enter recipients..."));
}

#[test]
fn test_blur_discards_draft_but_keeps_tags() {
    let mut field = Composer::new(xyz_candidates()).with_tags(["alice@x.com"]);
    field.activate();
    field.set_draft("half-typed");

    assert_eq!(field.blur(), Outcome::Collapsed);
    assert_eq!(field.draft(), "");
    assert_eq!(field.tags().texts(), vec!["alice@x.com"]);
}

#[test]
fn test_validate_email_cases() {
    assert!(validate_email("user@test.com"));
    assert!(validate_email("first.last@sub.example.org"));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a b@c.com"));
    assert!(!validate_email(""));
}
