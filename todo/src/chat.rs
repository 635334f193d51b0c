//! Keyword chat responder.
//!
//! Maps a free-form message to one canned reply. The message is lower-cased
//! and tested against [`RULES`] in order; the first rule with a keyword that
//! occurs as a substring wins. Nothing matched means the echo fallback.
//!
//! The responder keeps no memory between calls and never touches the store;
//! callers pass in the current todo count.

use crate::error::TodoError;

/// Which rule produced a reply
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// "add" / "create"
    Create,
    /// "list" / "show"
    List,
    /// "delete" / "remove"
    Delete,
    /// "update" / "edit"
    Update,
    /// "hello" / "hi"
    Greeting,
    /// No keyword matched
    Unknown,
}

/// How a rule builds its reply text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reply {
    /// Constant text
    Fixed(&'static str),
    /// Mentions how many todos exist
    TodoCount,
    /// Repeats the caller's message verbatim
    Echo,
}

impl Reply {
    fn render(self, message: &str, todo_count: usize) -> String {
        match self {
            Self::Fixed(text) => text.to_string(),
            Self::TodoCount => format!(
                "You have {todo_count} todos. Use the Get Todos button to see them all."
            ),
            Self::Echo => format!(
                "I understand you want to: {message}. How can I help you manage your todos?"
            ),
        }
    }
}

/// One entry of the dispatch table
#[derive(Debug)]
struct Rule {
    intent: Intent,
    keywords: &'static [&'static str],
    reply: Reply,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Reply for the greeting rule
pub const GREETING: &str =
    "Hello! I am your Todo Chatbot. I can help you manage your tasks. What would you like to do?";

/// Dispatch table, highest precedence first
const RULES: &[Rule] = &[
    Rule {
        intent: Intent::Create,
        keywords: &["add", "create"],
        reply: Reply::Fixed("I can help you create a todo. Use the form to add a new task!"),
    },
    Rule {
        intent: Intent::List,
        keywords: &["list", "show"],
        reply: Reply::TodoCount,
    },
    Rule {
        intent: Intent::Delete,
        keywords: &["delete", "remove"],
        reply: Reply::Fixed(
            "I can help you delete a todo. Select a todo and click the delete button.",
        ),
    },
    Rule {
        intent: Intent::Update,
        keywords: &["update", "edit"],
        reply: Reply::Fixed("I can help you update a todo. Click the edit button on any todo."),
    },
    Rule {
        intent: Intent::Greeting,
        keywords: &["hello", "hi"],
        reply: Reply::Fixed(GREETING),
    },
];

const FALLBACK: Reply = Reply::Echo;

/// A computed chat reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    /// Rule that fired
    pub intent: Intent,
    /// Text to show the user
    pub text: String,
}

/// Compute the reply for `message` given the current number of todos.
///
/// # Errors
///
/// Returns [`TodoError::Validation`] when `message` is empty.
pub fn respond(message: &str, todo_count: usize) -> Result<ChatReply, TodoError> {
    if message.is_empty() {
        return Err(TodoError::validation("Message is required"));
    }

    let lowered = message.to_lowercase();
    let (intent, reply) = RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or((Intent::Unknown, FALLBACK), |rule| (rule.intent, rule.reply));

    Ok(ChatReply {
        intent,
        text: reply.render(message, todo_count),
    })
}
