// =====
// TESTS: 15
// =====
//
// Message box flows: typing, dropdown navigation, submit and command dispatch.

use chat_slash::app::commands::COMPACT_PREAMBLE;
use chat_slash::app::{AppEvent, SlashCommand, handle_terminal_event};
use chat_slash::chat::{ChatStore, MessageRole};
use crossterm::event::{Event, KeyCode};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::helpers::{CHAT, MEMORIES, deliver, harness, harness_with_store, msg, press, settle, type_text};

fn offered(app: &chat_slash::app::App) -> Vec<SlashCommand> {
    app.suggestions.iter().map(|entry| entry.command).collect()
}

#[test]
fn typing_slash_opens_suggestions() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "/");

    assert!(h.app.is_suggesting());
    assert_eq!(offered(&h.app), vec![SlashCommand::Clear, SlashCommand::Compact]);
    assert_eq!(h.app.slash.state().selected_index(), 0);
    assert_eq!(h.app.store.draft(CHAT), "/");

    type_text(&mut h.app, "co");
    assert_eq!(offered(&h.app), vec![SlashCommand::Compact]);

    type_text(&mut h.app, "x");
    assert!(!h.app.is_suggesting());
    assert!(h.app.suggestions.is_empty());
}

#[test]
fn arrows_wrap_through_suggestions() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "/");

    press(&mut h.app, KeyCode::Up);
    assert_eq!(h.app.slash.state().selected_index(), 1);
    press(&mut h.app, KeyCode::Down);
    assert_eq!(h.app.slash.state().selected_index(), 0);
}

#[test]
fn escape_dismisses_dropdown() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "/");
    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Esc);

    assert!(!h.app.is_suggesting());
    assert_eq!(h.app.slash.state().selected_index(), 0);
    assert_eq!(h.app.slash.state().anchor, None);
    assert_eq!(h.app.input.text(), "/");
}

#[test]
fn confirming_selection_fills_input_without_running() {
    let mut h = harness(vec![msg("a", MessageRole::User, "hi")]);
    type_text(&mut h.app, "/");
    press(&mut h.app, KeyCode::Down);
    press(&mut h.app, KeyCode::Tab);

    assert_eq!(h.app.input.text(), "/compact");
    assert_eq!(h.app.store.draft(CHAT), "/compact");
    assert!(!h.app.is_suggesting());
    assert!(h.sender.sent.borrow().is_empty());
}

#[test]
fn compact_flow_sends_summary_request() {
    let mut h = harness(vec![
        msg("a", MessageRole::User, "hi"),
        msg("b", MessageRole::Assistant, "hello"),
    ]);
    type_text(&mut h.app, "/compact");
    assert!(h.app.is_suggesting());
    press(&mut h.app, KeyCode::Enter);

    let sent = h.sender.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.starts_with(COMPACT_PREAMBLE));
    assert!(sent[0].text.contains("user: hi\nassistant: hello"));
    assert!(h.app.conversation.is_submitting);
    assert!(h.app.input.is_empty());
    assert_eq!(h.app.store.draft(CHAT), "");
    assert_eq!(h.app.conversation.messages.len(), 2);
    assert!(!h.app.is_suggesting());
}

#[test]
fn enter_on_partial_trigger_only_picks_it() {
    let mut h = harness(vec![msg("a", MessageRole::User, "hi")]);
    type_text(&mut h.app, "/co");
    press(&mut h.app, KeyCode::Enter);

    assert_eq!(h.app.input.text(), "/compact");
    assert!(h.sender.sent.borrow().is_empty());

    press(&mut h.app, KeyCode::Enter);
    assert_eq!(h.sender.sent.borrow().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn clear_flow_keeps_memories_and_deletes_remotely() {
    tokio::task::LocalSet::new()
        .run_until(async {
            let mut h = harness(vec![
                msg(MEMORIES, MessageRole::System, "likes rust"),
                msg("a", MessageRole::User, "hi"),
                msg("b", MessageRole::Assistant, "hello"),
            ]);
            type_text(&mut h.app, "/cl");
            press(&mut h.app, KeyCode::Tab);
            press(&mut h.app, KeyCode::Enter);

            let kept: Vec<&str> =
                h.app.conversation.messages.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(kept, vec![MEMORIES]);
            assert_eq!(h.app.store.messages(CHAT).len(), 1);
            assert_eq!(h.app.store.draft(CHAT), "");
            assert!(h.app.input.is_empty());
            assert!(h.sender.sent.borrow().is_empty());

            settle().await;
            let deleted: Vec<String> =
                h.remote.deleted.borrow().iter().map(ToString::to_string).collect();
            assert_eq!(deleted, vec!["a".to_owned(), "b".to_owned()]);
        })
        .await;
}

#[test]
fn clear_on_memories_only_changes_nothing() {
    let mut h = harness(vec![msg(MEMORIES, MessageRole::System, "likes rust")]);
    type_text(&mut h.app, "/clear");
    press(&mut h.app, KeyCode::Enter);

    assert_eq!(h.app.conversation.messages.len(), 1);
    assert!(h.remote.deleted.borrow().is_empty());
    // Consumed as a command either way, so the box is emptied.
    assert!(h.app.input.is_empty());
}

#[test]
fn plain_text_is_sent_and_blocks_until_reply() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "hello there");
    press(&mut h.app, KeyCode::Enter);

    assert_eq!(h.sender.sent.borrow().len(), 1);
    assert_eq!(h.sender.sent.borrow()[0].text, "hello there");
    assert!(h.app.conversation.is_submitting);
    assert_eq!(h.app.store.draft(CHAT), "");

    type_text(&mut h.app, "again");
    press(&mut h.app, KeyCode::Enter);
    assert_eq!(h.sender.sent.borrow().len(), 1);
    assert_eq!(h.app.input.text(), "again");

    deliver(&mut h.app, AppEvent::MessageAppended(msg("u1", MessageRole::User, "hello there")));
    assert!(!h.app.conversation.is_submitting);
    assert_eq!(h.app.conversation.messages.len(), 1);
    assert_eq!(h.app.store.messages(CHAT).len(), 1);
}

#[test]
fn unknown_slash_command_goes_out_as_a_message() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "/foo bar");
    press(&mut h.app, KeyCode::Enter);

    assert_eq!(h.sender.sent.borrow().len(), 1);
    assert_eq!(h.sender.sent.borrow()[0].text, "/foo bar");
}

#[test]
fn blank_input_is_not_submitted() {
    let mut h = harness(Vec::new());
    type_text(&mut h.app, "   ");
    press(&mut h.app, KeyCode::Enter);
    assert!(h.sender.sent.borrow().is_empty());
    assert!(!h.app.conversation.is_submitting);
}

#[test]
fn draft_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("chats.json");

    let mut h = harness_with_store(ChatStore::load(&path).expect("load"), Vec::new());
    type_text(&mut h.app, "/comp");
    h.app.persist();

    let reopened = harness_with_store(ChatStore::load(&path).expect("reload"), Vec::new());
    assert_eq!(reopened.app.input.text(), "/comp");
    assert!(reopened.app.is_suggesting());
    assert_eq!(offered(&reopened.app), vec![SlashCommand::Compact]);
}

#[test]
fn restored_plain_draft_keeps_dropdown_closed() {
    let mut store = ChatStore::in_memory();
    store.save_draft(CHAT, "half a thought");
    let h = harness_with_store(store, Vec::new());
    assert_eq!(h.app.input.text(), "half a thought");
    assert!(!h.app.is_suggesting());
}

#[test]
fn very_long_pasted_line_renders() {
    let mut h = harness(Vec::new());
    handle_terminal_event(&mut h.app, Event::Paste("a".repeat(65_534)));
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
    terminal.draw(|f| chat_slash::ui::render(f, &mut h.app)).expect("draw");

    let input_area = h.app.rendered_input_area;
    let cursor = terminal.get_cursor_position().expect("cursor");
    assert_eq!(cursor.x, input_area.right() - 1);
    assert_eq!(cursor.y, input_area.y);
}

#[test]
fn rendered_dropdown_anchors_on_input_box() {
    let mut h = harness(vec![msg("a", MessageRole::User, "hi")]);
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
    terminal.draw(|f| chat_slash::ui::render(f, &mut h.app)).expect("draw");
    let input_area = h.app.rendered_input_area;
    assert!(input_area.width > 0);

    type_text(&mut h.app, "/");
    assert_eq!(h.app.slash.state().anchor, Some(input_area));

    terminal.draw(|f| chat_slash::ui::render(f, &mut h.app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = buffer
        .content
        .chunks(100)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect();
    let clear_row = rows.iter().position(|r| r.contains("/clear")).expect("clear row");
    let compact_row = rows.iter().position(|r| r.contains("/compact")).expect("compact row");
    assert_eq!(compact_row, clear_row + 1);
    assert!(compact_row < usize::from(input_area.y));
}
