//! Reducer logic for the todo list.
//!
//! Validate the action, mutate state only when validation passes, and hand
//! the caller either the affected item or the error.

use crate::error::TodoError;
use crate::types::{TodoAction, TodoId, TodoItem, TodoOutcome, TodoPatch, TodoState};
use std::sync::Arc;
use todo_chat_core::{
    environment::{Clock, IdGenerator},
    reducer::Reducer,
};
use todo_chat_runtime::Store;

/// The todo store as served over HTTP
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Environment dependencies for the Todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for generating timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a `Create` action, returning the title to store
    fn validate_create(title: Option<String>) -> Result<String, TodoError> {
        match title {
            Some(title) if !title.is_empty() => Ok(title),
            _ => Err(TodoError::validation("Title is required")),
        }
    }

    fn create(
        state: &mut TodoState,
        title: Option<String>,
        description: Option<String>,
        env: &TodoEnvironment,
    ) -> Result<TodoOutcome, TodoError> {
        let title = Self::validate_create(title)?;

        let item = TodoItem::new(
            TodoId::new(env.ids.next_id()),
            title,
            description.unwrap_or_default(),
            env.clock.now(),
        );
        state.todos.push(item.clone());

        Ok(TodoOutcome::Created(item))
    }

    fn update(
        state: &mut TodoState,
        id: TodoId,
        patch: TodoPatch,
        env: &TodoEnvironment,
    ) -> Result<TodoOutcome, TodoError> {
        let Some(item) = state.todos.iter_mut().find(|t| t.id == id) else {
            return Err(TodoError::NotFound(id));
        };

        item.apply(patch, env.clock.now());

        Ok(TodoOutcome::Updated(item.clone()))
    }

    fn delete(state: &mut TodoState, id: TodoId) -> Result<TodoOutcome, TodoError> {
        let Some(index) = state.position(&id) else {
            return Err(TodoError::NotFound(id));
        };

        // `remove` shifts the tail down, keeping insertion order intact
        Ok(TodoOutcome::Deleted(state.todos.remove(index)))
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Output = Result<TodoOutcome, TodoError>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Self::Output {
        match action {
            TodoAction::List => Ok(TodoOutcome::Listed {
                todos: state.todos.clone(),
                count: state.count(),
            }),
            TodoAction::Create { title, description } => {
                Self::create(state, title, description, env)
            }
            TodoAction::Update { id, patch } => Self::update(state, id, patch, env),
            TodoAction::Delete { id } => Self::delete(state, id),
        }
    }
}
