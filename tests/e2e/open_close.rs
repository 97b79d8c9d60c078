use crate::common::harness::ViewerTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_esc_closes_and_o_reopens_same_session() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();

    // Open lib and select b.ts
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(!harness.app().viewer().is_visible());
    harness.assert_screen_contains("Press o to reopen, q to quit.");
    harness.assert_screen_contains("Viewer closed");
    harness.assert_screen_not_contains("SRC");

    // Closing keeps the session
    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));

    harness.send_key(KeyCode::Char('o'), KeyModifiers::NONE).unwrap();
    assert!(harness.app().viewer().is_visible());
    harness.assert_screen_contains("b.ts");
    harness.assert_screen_contains("1 │ Y");
    harness.assert_screen_not_contains("Viewer closed");
}

#[test]
fn test_keys_are_ignored_while_closed() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.app().viewer().is_visible());
    assert!(!harness.should_quit());
    assert_eq!(harness.cursor_name().as_deref(), Some("SRC"));
    assert_eq!(harness.active_file_name(), None);
}

#[test]
fn test_q_quits_open_or_closed() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
    assert!(harness.should_quit());

    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('q'), KeyModifiers::NONE).unwrap();
    assert!(harness.should_quit());
}

#[test]
fn test_ctrl_c_quits() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}
