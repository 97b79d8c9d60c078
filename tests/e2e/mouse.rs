use crate::common::harness::ViewerTestHarness;
use codeview::app::Focus;

/// Column inside the tree pane, right of its border
const TREE_COLUMN: u16 = 4;

#[test]
fn test_click_folder_then_file() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();

    let lib_row = harness.find_row("lib").unwrap();
    harness.mouse_click(TREE_COLUMN, lib_row).unwrap();
    harness.assert_screen_contains("b.ts");
    assert_eq!(harness.cursor_name().as_deref(), Some("lib"));
    assert_eq!(harness.active_file_name(), None);

    let file_row = harness.find_row("b.ts").unwrap();
    harness.mouse_click(TREE_COLUMN, file_row).unwrap();
    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));
    harness.assert_screen_contains("1 │ Y");

    // Clicking the folder again hides b.ts in the tree but keeps it active
    harness.mouse_click(TREE_COLUMN, lib_row).unwrap();
    assert_eq!(harness.active_file_name().as_deref(), Some("b.ts"));
    harness.assert_screen_contains("1 │ Y");
}

#[test]
fn test_click_content_pane_moves_focus() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    harness.mouse_click(60, 10).unwrap();
    assert_eq!(harness.app().focus(), Focus::Content);

    let src_row = harness.find_row("SRC").unwrap();
    harness.mouse_click(TREE_COLUMN, src_row).unwrap();
    assert_eq!(harness.app().focus(), Focus::Tree);
    // SRC was open, the click closed it
    harness.assert_screen_not_contains("a.ts");
}

#[test]
fn test_click_on_border_does_nothing() {
    let mut harness = ViewerTestHarness::new(80, 24).unwrap();
    let lib_row = harness.find_row("lib").unwrap();
    harness.mouse_click(0, lib_row).unwrap();
    harness.assert_screen_not_contains("b.ts");
}
