//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of todo items that can be listed,
//! created, patched, and deleted. Iteration order is insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_chat_core::reducer::Action;

/// Unique identifier for a todo item
///
/// Allocated by the environment's `IdGenerator`; opaque to everything else.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps an identifier string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO-8601 timestamps with millisecond precision (`2025-01-01T00:00:00.000Z`).
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        #[allow(clippy::ref_option)] // serde's `serialize_with` hands us `&Option<T>`
        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| {
                    DateTime::parse_from_rfc3339(&raw)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(serde::de::Error::custom)
                })
                .transpose()
        }
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Short title, never empty
    pub title: String,
    /// Free-form details, empty by default
    pub description: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    /// When the todo was last updated (absent until the first update)
    #[serde(
        default,
        with = "iso8601::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(
        id: TodoId,
        title: String,
        description: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at,
            updated_at: None,
        }
    }

    /// Applies a patch and stamps `updated_at`
    ///
    /// An empty title in the patch is ignored rather than rejected, so a
    /// stored title can never become empty through an update.
    pub fn apply(&mut self, patch: TodoPatch, updated_at: DateTime<Utc>) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = Some(updated_at);
    }
}

/// Partial update for a todo item
///
/// `None` means "not supplied" (a missing field or JSON `null`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// Replacement title; ignored when empty
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; an empty string clears it
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement completion flag
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only sets the completion flag
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            title: None,
            description: None,
            completed: Some(completed),
        }
    }
}

/// State of the todo list
///
/// Items are kept in insertion order; deleting one never reorders the rest.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, oldest first
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Index of a todo in insertion order
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }
}

/// Actions the todo store accepts
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Return every todo in insertion order
    List,

    /// Create a new todo
    Create {
        /// Title; required and non-empty
        title: Option<String>,
        /// Description; defaults to empty
        description: Option<String>,
    },

    /// Patch an existing todo
    Update {
        /// Todo to patch
        id: TodoId,
        /// Fields to replace
        patch: TodoPatch,
    },

    /// Delete a todo
    Delete {
        /// Todo to delete
        id: TodoId,
    },
}

impl TodoAction {
    /// Shorthand for creating a todo with only a title
    #[must_use]
    pub fn create(title: impl Into<String>) -> Self {
        Self::Create {
            title: Some(title.into()),
            description: None,
        }
    }
}

impl Action for TodoAction {
    fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create { .. } => "create",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// What a successful action hands back
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoOutcome {
    /// Snapshot of the list
    Listed {
        /// All todos in insertion order
        todos: Vec<TodoItem>,
        /// Number of todos
        count: usize,
    },
    /// The newly created todo
    Created(TodoItem),
    /// The todo after the patch was applied
    Updated(TodoItem),
    /// The todo that was removed
    Deleted(TodoItem),
}
