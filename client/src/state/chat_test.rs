use super::*;

use crate::state::shortcuts::CONTACT_REPLY;

// =============================================================
// seed state
// =============================================================

#[test]
fn conversation_starts_with_one_bot_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert_eq!(state.messages[0].text, GREETING);
    assert!(state.messages[0].pending.is_none());
    assert!(!state.open);
    assert!(state.input.is_empty());
}

// =============================================================
// blank input
// =============================================================

#[test]
fn empty_input_is_a_no_op() {
    let mut state = ChatState::default();
    assert_eq!(state.send(None), SendOutcome::Ignored);
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn whitespace_input_is_a_no_op() {
    let mut state = ChatState::default();
    state.input = "   \t ".to_owned();
    assert_eq!(state.send(None), SendOutcome::Ignored);
    assert_eq!(state.messages.len(), 1);
    // Buffer is kept as-is on a no-op.
    assert_eq!(state.input, "   \t ");
}

#[test]
fn blank_explicit_text_is_a_no_op() {
    let mut state = ChatState::default();
    assert_eq!(state.send(Some("  ")), SendOutcome::Ignored);
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// shortcut resolution
// =============================================================

#[test]
fn shortcut_appends_user_and_canned_bot_message() {
    let mut state = ChatState::default();
    state.input = "services".to_owned();
    assert_eq!(state.send(None), SendOutcome::Shortcut);

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[1].sender, Sender::User);
    assert_eq!(state.messages[1].text, "services");
    assert_eq!(state.messages[2].sender, Sender::Bot);
    assert_eq!(state.messages[2].text, crate::state::shortcuts::SERVICES_REPLY);
    assert!(state.messages[2].pending.is_none());
    assert!(state.input.is_empty());
}

#[test]
fn shortcut_matches_case_insensitively() {
    let mut state = ChatState::default();
    state.input = "  TELECARE ".to_owned();
    assert_eq!(state.send(None), SendOutcome::Shortcut);
    // The user entry keeps the raw text, only matching normalizes.
    assert_eq!(state.messages[1].text, "  TELECARE ");
}

#[test]
fn contact_quick_action_yields_exact_literal() {
    let mut state = ChatState::default();
    assert_eq!(state.send(Some("Contact")), SendOutcome::Shortcut);
    assert_eq!(
        state.messages[2].text,
        "📞 Phone: +250 791 231 993\n✉️ Email: contact@baho.com\n📍 Address: Kigali, Rwanda"
    );
    assert_eq!(state.messages[2].text, CONTACT_REPLY);
}

// =============================================================
// pending placeholder flow
// =============================================================

#[test]
fn non_shortcut_appends_exactly_one_placeholder() {
    let mut state = ChatState::default();
    state.input = "do you treat malaria?".to_owned();
    let outcome = state.send(None);

    let SendOutcome::Pending { id, message } = outcome else {
        panic!("expected Pending outcome");
    };
    assert_eq!(message, "do you treat malaria?");
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].sender, Sender::Bot);
    assert_eq!(state.messages[2].text, TYPING_PLACEHOLDER);
    assert_eq!(state.messages[2].pending, Some(id));
    assert!(state.input.is_empty());
}

#[test]
fn resolve_replaces_placeholder_in_place() {
    let mut state = ChatState::default();
    state.input = "hello there".to_owned();
    let SendOutcome::Pending { id, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };

    state.resolve_pending(id, "Hi! How can I help?");
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].text, "Hi! How can I help?");
    assert!(state.messages[2].pending.is_none());
}

#[test]
fn fail_replaces_placeholder_with_apology() {
    let mut state = ChatState::default();
    state.input = "hello there".to_owned();
    let SendOutcome::Pending { id, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };

    state.fail_pending(id);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].text, UNREACHABLE_REPLY);
    assert!(state.messages[2].pending.is_none());
}

#[test]
fn resolve_unknown_id_is_a_no_op() {
    let mut state = ChatState::default();
    state.input = "hello".to_owned();
    let SendOutcome::Pending { id, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };

    state.resolve_pending(id + 1, "stray reply");
    assert_eq!(state.messages[2].text, TYPING_PLACEHOLDER);
    assert_eq!(state.messages[2].pending, Some(id));
}

#[test]
fn resolve_does_not_fire_twice() {
    let mut state = ChatState::default();
    state.input = "hello".to_owned();
    let SendOutcome::Pending { id, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };

    state.resolve_pending(id, "first");
    state.resolve_pending(id, "second");
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].text, "first");
}

// =============================================================
// overlapping sends resolve by correlation id, not position
// =============================================================

#[test]
fn out_of_order_replies_hit_the_right_placeholders() {
    let mut state = ChatState::default();

    state.input = "first question".to_owned();
    let SendOutcome::Pending { id: first, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };
    state.input = "second question".to_owned();
    let SendOutcome::Pending { id: second, .. } = state.send(None) else {
        panic!("expected Pending outcome");
    };

    // Four new entries after the greeting; the first placeholder is no
    // longer last.
    assert_eq!(state.messages.len(), 5);

    state.resolve_pending(first, "answer one");
    assert_eq!(state.messages[2].text, "answer one");
    assert_eq!(state.messages[4].text, TYPING_PLACEHOLDER);
    assert_eq!(state.messages[4].pending, Some(second));

    state.fail_pending(second);
    assert_eq!(state.messages[4].text, UNREACHABLE_REPLY);
}

#[test]
fn each_send_adds_exactly_one_bot_entry() {
    let mut state = ChatState::default();
    for (i, text) in ["services", "anything else", "contact"].into_iter().enumerate() {
        let before = state.messages.len();
        state.send(Some(text));
        assert_eq!(state.messages.len(), before + 2, "send #{i} must add one user + one bot entry");
    }
}

// =============================================================
// bot reply line splitting
// =============================================================

#[test]
fn reply_lines_split_on_newlines() {
    let lines = bot_reply_lines(CONTACT_REPLY);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "📞 Phone: +250 791 231 993");
    assert_eq!(lines[2], "📍 Address: Kigali, Rwanda");
}

#[test]
fn reply_lines_split_on_asterisks_and_drop_blanks() {
    let lines = bot_reply_lines("Tips: * drink water * sleep well\n\n");
    assert_eq!(lines, vec!["Tips:", "drink water", "sleep well"]);
}

#[test]
fn plain_reply_is_a_single_line() {
    assert_eq!(bot_reply_lines("Hello!"), vec!["Hello!"]);
}
