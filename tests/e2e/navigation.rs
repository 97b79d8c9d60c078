use crate::common::fixtures::flat_tree;
use crate::common::harness::ViewerTestHarness;
use codeview::app::Focus;
use codeview::config::{Config, InitialSelection};
use codeview::file_tree::{FileTree, Node};
use crossterm::event::{KeyCode, KeyModifiers};

/// Browse the scenario tree with the keyboard only
#[test]
fn test_scenario_with_keyboard() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();

    harness.assert_screen_contains("Test Project");
    harness.assert_screen_contains("SRC");
    harness.assert_screen_contains("a.ts");
    harness.assert_screen_contains("lib");
    harness.assert_screen_not_contains("b.ts");
    harness.assert_screen_contains("Select a file to view its contents");

    // SRC -> a.ts -> lib, then open lib
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 2)
        .unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("lib"));
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("b.ts");
    assert_eq!(harness.active_file_name(), None);

    // Back up to a.ts and open it
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.active_file_name().as_deref(), Some("a.ts"));
    harness.assert_screen_contains("SRC/a.ts [typescript]");
    harness.assert_screen_contains("1 │ X");

    // Down to b.ts and open it with Space
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 2)
        .unwrap();
    harness.send_key(KeyCode::Char(' '), KeyModifiers::NONE).unwrap();
    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));
    harness.assert_screen_contains("SRC/lib/b.ts");
    harness.assert_screen_contains("1 │ Y");
    harness.assert_screen_not_contains("1 │ X");
}

/// Closing a folder that holds the active file keeps the file open
#[test]
fn test_collapsing_parent_keeps_active_file() {
    let mut config = Config::default();
    config.viewer.initial_selection = InitialSelection::Path("SRC/lib/b.ts".to_string());
    let mut harness = ViewerTestHarness::with_config(config, 80, 24).unwrap();

    harness.assert_screen_contains("b.ts");
    harness.assert_screen_contains("1 │ Y");
    assert_eq!(harness.cursor_name().as_deref(), Some("b.ts"));

    // Left from a file goes to its folder, Left again closes it
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("lib"));
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));
    harness.assert_screen_contains("1 │ Y");
    let tree_rows: Vec<String> = (2..6).map(|y| harness.screen_row_text(y)).collect();
    assert!(!tree_rows.iter().any(|row| row.contains(" b.ts")));
}

#[test]
fn test_right_opens_then_steps_into_folder() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("lib"));

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("b.ts");
    assert_eq!(harness.cursor_name().as_deref(), Some("lib"));

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("b.ts"));
    assert_eq!(harness.active_file_name(), None);
}

/// The tree scrolls only when the cursor passes an edge of the pane
#[test]
fn test_tree_scrolls_with_cursor() {
    // 12 rows: title, status and two borders leave 8 tree rows
    let mut harness = ViewerTestHarness::with_tree(flat_tree(30), Config::default(), 80, 12)
        .unwrap();
    harness.assert_screen_contains("file00.rs");
    harness.assert_screen_contains("file07.rs");
    harness.assert_screen_not_contains("file08.rs");

    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 7)
        .unwrap();
    harness.assert_screen_contains("file00.rs");

    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("file08.rs");
    harness.assert_screen_not_contains("file00.rs");

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("file29.rs"));
    harness.assert_screen_contains("file29.rs");
    harness.assert_screen_not_contains("file21.rs");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("file00.rs");
}

#[test]
fn test_page_keys_move_by_viewport() {
    let mut harness = ViewerTestHarness::with_tree(flat_tree(30), Config::default(), 80, 12)
        .unwrap();

    harness.send_key(KeyCode::PageDown, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("file08.rs"));

    harness.send_key(KeyCode::PageDown, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::PageDown, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::PageDown, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("file29.rs"));

    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor_name().as_deref(), Some("file21.rs"));
}

#[test]
fn test_content_pane_scrolls_when_focused() {
    let content: String = (1..=50).map(|n| format!("line {}\n", n)).collect();
    let tree = FileTree::from_nodes(vec![Node::file("long.txt", "plaintext", content)]);
    let mut config = Config::default();
    config.viewer.initial_selection = InitialSelection::FirstFile;
    let mut harness = ViewerTestHarness::with_tree(tree, config, 80, 12).unwrap();
    harness.assert_screen_contains(" 1 │ line 1");

    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().focus(), Focus::Content);
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 5)
        .unwrap();
    assert_eq!(harness.app().content_scroll(), 5);
    assert!(harness.screen_row_text(2).contains(" 6 │ line 6"));

    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("50 │ line 50");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().content_scroll(), 0);

    // Tree keys are back once focus returns
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().focus(), Focus::Tree);
}
