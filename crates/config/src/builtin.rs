//! The application's built-in key-binding table.
//!
//! Responsibilities:
//! - Declare every bindable action with its help text, category and keys.
//! - Declare category titles in the order they appear in the hot keys document.
//!
//! Does NOT handle:
//! - Rendering or linting (see the docs crate).
//!
//! Invariants:
//! - Declaration order is the document order; keep related actions together.
//! - Help text sticks to letters, spaces and the default allowed punctuation.

use crate::types::{Action, CategoryTitle, KeyBindingTable, TableError};

/// Build the built-in key-binding table.
pub fn key_table() -> Result<KeyBindingTable, TableError> {
    KeyBindingTable::new(categories(), actions())
}

fn categories() -> Vec<CategoryTitle> {
    vec![
        CategoryTitle::new("general", "General"),
        CategoryTitle::new("navigation", "Navigation"),
        CategoryTitle::new("searching", "Searching"),
        CategoryTitle::new("msg_actions", "Message actions"),
        CategoryTitle::new("stream_list", "Stream list actions"),
        CategoryTitle::new("msg_compose", "Composing a Message"),
        CategoryTitle::new("editor_navigation", "Editor: Navigation"),
        CategoryTitle::new("editor_text_manipulation", "Editor: Text Manipulation"),
    ]
}

fn actions() -> Vec<Action> {
    vec![
        // General
        Action::new("HELP", "Show/hide help menu", "general", &["?"]),
        Action::new("MARKDOWN_HELP", "Show/hide markdown help menu", "general", &["meta m"]),
        Action::new("ABOUT", "Show/hide about menu", "general", &["meta ?"]),
        Action::new("GO_BACK", "Go back", "general", &["esc"]),
        Action::new("OPEN_DRAFT", "Open draft message saved in this session", "general", &["d"]),
        Action::new("USER_INFO", "View user information (from users list)", "general", &["i"]),
        Action::new("REDRAW", "Redraw screen", "general", &["ctrl l"]),
        Action::new("QUIT", "Quit", "general", &["ctrl c"]),
        // Navigation
        Action::new("GO_UP", "Go up / Previous message", "navigation", &["up", "k"]),
        Action::new("GO_DOWN", "Go down / Next message", "navigation", &["down", "j"]),
        Action::new("GO_LEFT", "Go left", "navigation", &["left", "h"]),
        Action::new("GO_RIGHT", "Go right", "navigation", &["right", "l"]),
        Action::new("SCROLL_UP", "Scroll up", "navigation", &["page up", "K"]),
        Action::new("SCROLL_DOWN", "Scroll down", "navigation", &["page down", "J"]),
        Action::new("GO_TO_BOTTOM", "Go to bottom / Last message", "navigation", &["end", "G"]),
        Action::new("ALL_MESSAGES", "Narrow to all messages", "navigation", &["a", "esc"]),
        Action::new("ALL_PM", "Narrow to all private messages", "navigation", &["P"]),
        Action::new("ALL_STARRED", "Narrow to all starred messages", "navigation", &["f"]),
        Action::new(
            "ALL_MENTIONS",
            "Narrow to messages in which you're mentioned",
            "navigation",
            &["#"],
        ),
        Action::new("NEXT_UNREAD_TOPIC", "Next unread topic", "navigation", &["n"]),
        Action::new("NEXT_UNREAD_PM", "Next unread private message", "navigation", &["p"]),
        // Searching
        Action::new("SEARCH_PEOPLE", "Search users", "searching", &["w"]),
        Action::new("SEARCH_MESSAGES", "Search messages", "searching", &["/"]),
        Action::new("SEARCH_STREAMS", "Search streams", "searching", &["q"]),
        Action::new("SEARCH_TOPICS", "Search topics in a stream", "searching", &["q"]),
        Action::new("SEARCH_EMOJIS", "Search emojis from emoji picker", "searching", &["p"]),
        Action::new("EXECUTE_SEARCH", "Submit search and browse results", "searching", &["enter"]),
        Action::new("CLEAR_SEARCH", "Clear search in current panel", "searching", &["esc"]),
        // Message actions
        Action::new(
            "REPLY_MESSAGE",
            "Reply to the current message",
            "msg_actions",
            &["r", "enter"],
        ),
        Action::new(
            "MENTION_REPLY",
            "Reply mentioning the sender of the current message",
            "msg_actions",
            &["@"],
        ),
        Action::new("QUOTE_REPLY", "Reply quoting the current message text", "msg_actions", &[">"]),
        Action::new(
            "REPLY_AUTHOR",
            "Reply directly to the sender of the current message",
            "msg_actions",
            &["R"],
        ),
        Action::new("EDIT_MESSAGE", "Edit message's content or topic", "msg_actions", &["e"]),
        Action::new("STREAM_MESSAGE", "New message to a stream", "msg_actions", &["c"]),
        Action::new(
            "PRIVATE_MESSAGE",
            "New message to a person or group of people",
            "msg_actions",
            &["x"],
        ),
        Action::new(
            "STREAM_NARROW",
            "Narrow to the stream of the current message",
            "msg_actions",
            &["s"],
        ),
        Action::new(
            "TOPIC_NARROW",
            "Narrow to the topic of the current message",
            "msg_actions",
            &["S"],
        ),
        Action::new(
            "TOGGLE_NARROW",
            "Narrow to a topic/private-chat, or stream/all-private-messages",
            "msg_actions",
            &["z"],
        ),
        Action::new("TOGGLE_TOPIC", "Toggle topics in a stream", "msg_actions", &["t"]),
        Action::new(
            "REACTION_AGREEMENT",
            "Toggle first emoji reaction on selected message",
            "msg_actions",
            &["="],
        ),
        Action::new(
            "THUMBS_UP",
            "Add/remove thumbs-up reaction to the current message",
            "msg_actions",
            &["+"],
        ),
        Action::new(
            "TOGGLE_STAR_STATUS",
            "Add/remove star status of the current message",
            "msg_actions",
            &["ctrl s", "*"],
        ),
        Action::new("MSG_INFO", "Show/hide message information", "msg_actions", &["i"]),
        Action::new(
            "EDIT_HISTORY",
            "Show/hide edit history (from message information)",
            "msg_actions",
            &["e"],
        ),
        Action::new(
            "VIEW_IN_BROWSER",
            "View current message in browser (from message information)",
            "msg_actions",
            &["v"],
        ),
        Action::new(
            "FULL_RENDERED_MESSAGE",
            "Show/hide full rendered message (from message information)",
            "msg_actions",
            &["f"],
        ),
        Action::new(
            "FULL_RAW_MESSAGE",
            "Show/hide full raw message (from message information)",
            "msg_actions",
            &["r"],
        ),
        // Stream list actions
        Action::new("TOGGLE_MUTE_STREAM", "Mute/unmute streams", "stream_list", &["m"]),
        Action::new(
            "STREAM_DESC",
            "Show/hide stream information & modify settings",
            "stream_list",
            &["i"],
        ),
        Action::new(
            "STREAM_MEMBERS",
            "Show/hide stream members (from stream information)",
            "stream_list",
            &["m"],
        ),
        Action::new(
            "COPY_STREAM_EMAIL",
            "Copy stream email to clipboard (from stream information)",
            "stream_list",
            &["c"],
        ),
        // Composing a Message
        Action::new(
            "CYCLE_COMPOSE_FOCUS",
            "Cycle through recipient and content boxes",
            "msg_compose",
            &["tab"],
        ),
        Action::new("SEND_MESSAGE", "Send a message", "msg_compose", &["ctrl d", "meta enter"]),
        Action::new("SAVE_AS_DRAFT", "Save current message as a draft", "msg_compose", &["meta s"]),
        Action::new(
            "AUTOCOMPLETE",
            "Autocomplete @mentions, #stream_names, :emoji: and topics",
            "msg_compose",
            &["ctrl f"],
        ),
        Action::new(
            "AUTOCOMPLETE_REVERSE",
            "Cycle through autocomplete suggestions in reverse",
            "msg_compose",
            &["ctrl r"],
        ),
        Action::new("NEW_LINE", "Insert new line", "msg_compose", &["enter"]),
        Action::new(
            "OPEN_EXTERNAL_EDITOR",
            "Open an external editor to edit the message content",
            "msg_compose",
            &["ctrl o"],
        ),
        // Editor: Navigation
        Action::new(
            "BEGINNING_OF_LINE",
            "Jump to the beginning of line",
            "editor_navigation",
            &["ctrl a"],
        ),
        Action::new("END_OF_LINE", "Jump to the end of line", "editor_navigation", &["ctrl e"]),
        Action::new(
            "ONE_WORD_BACKWARD",
            "Jump backward one word",
            "editor_navigation",
            &["meta b"],
        ),
        Action::new("ONE_WORD_FORWARD", "Jump forward one word", "editor_navigation", &["meta f"]),
        Action::new(
            "PREV_LINE",
            "Jump to the previous line",
            "editor_navigation",
            &["up", "ctrl p"],
        ),
        Action::new("NEXT_LINE", "Jump to the next line", "editor_navigation", &["down", "ctrl n"]),
        // Editor: Text Manipulation
        Action::new(
            "UNDO_LAST_ACTION",
            "Undo last action",
            "editor_text_manipulation",
            &["ctrl _"],
        ),
        Action::new("CLEAR_MESSAGE", "Clear text box", "editor_text_manipulation", &["ctrl l"]),
        Action::new(
            "CUT_TO_END_OF_LINE",
            "Cut forwards to the end of the line",
            "editor_text_manipulation",
            &["ctrl k"],
        ),
        Action::new(
            "CUT_TO_START_OF_LINE",
            "Cut backwards to the start of the line",
            "editor_text_manipulation",
            &["ctrl u"],
        ),
        Action::new(
            "CUT_TO_END_OF_WORD",
            "Cut forwards to the end of the current word",
            "editor_text_manipulation",
            &["meta d"],
        ),
        Action::new(
            "CUT_TO_START_OF_WORD",
            "Cut backwards to the start of the current word",
            "editor_text_manipulation",
            &["ctrl w"],
        ),
        Action::new(
            "PASTE_LAST_CUT",
            "Paste last cut section",
            "editor_text_manipulation",
            &["ctrl y"],
        ),
        Action::new(
            "DELETE_LAST_CHARACTER",
            "Delete previous character",
            "editor_text_manipulation",
            &["ctrl h"],
        ),
        Action::new(
            "TRANSPOSE_CHARACTERS",
            "Swap with previous character",
            "editor_text_manipulation",
            &["ctrl t"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        let table = key_table().unwrap();
        assert_eq!(table.categories().len(), 8);
        assert!(!table.actions().is_empty());
    }

    #[test]
    fn every_action_references_a_declared_category() {
        let table = key_table().unwrap();
        for action in table.actions() {
            assert!(
                table.category_title(&action.key_category).is_some(),
                "{} references unknown category {}",
                action.id,
                action.key_category
            );
        }
    }

    #[test]
    fn category_order_starts_with_general() {
        let table = key_table().unwrap();
        let titles: Vec<_> = table.categories().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"General"));
        assert_eq!(titles.last(), Some(&"Editor: Text Manipulation"));
    }
}
