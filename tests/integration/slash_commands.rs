// =====
// TESTS: 5
// =====
//
// Command registry and parser behaviour through the public API.

use chat_slash::app::{SlashCommand, is_complete_command, parse_slash_command, suggestions};
use pretty_assertions::assert_eq;

fn triggers(input: &str) -> Vec<&'static str> {
    suggestions(input).iter().map(|entry| entry.command.trigger()).collect()
}

#[test]
fn non_slash_text_never_classifies_or_suggests() {
    for input in ["hello", "what is /clear", " x/", "\t\n", "／clear"] {
        assert!(!parse_slash_command(input).is_slash_command, "{input:?}");
        assert!(suggestions(input).is_empty(), "{input:?}");
    }
}

#[test]
fn slash_alone_lists_registry_in_declaration_order() {
    assert_eq!(triggers("/"), SlashCommand::ALL.map(SlashCommand::trigger).to_vec());
}

#[test]
fn prefix_narrows_to_clear() {
    assert_eq!(triggers("/cl"), vec!["/clear"]);
}

#[test]
fn trailing_arguments_are_ignored_for_recognition() {
    let parsed = parse_slash_command("/clear now");
    assert!(parsed.is_slash_command);
    assert!(parsed.is_recognized);
    assert_eq!(parsed.matched_token.as_deref(), Some("/clear"));
    assert_eq!(parsed.full_text.as_deref(), Some("/clear now"));
    assert!(!is_complete_command("/clear now"));
}

#[test]
fn unknown_command_is_an_unrecognized_attempt() {
    let parsed = parse_slash_command("/foo");
    assert!(parsed.is_slash_command);
    assert!(!parsed.is_recognized);
    assert_eq!(parsed.command(), None);
}
