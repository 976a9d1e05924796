//! Single-operation use cases over the todo repository.
//!
//! Each use case exposes exactly one capability so the state container can
//! depend on "can add a todo" rather than on the whole repository surface.

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryResult, TodoStream},
};
use std::sync::Arc;

macro_rules! use_case {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<R>
        where
            R: TodoRepository,
        {
            repository: Arc<R>,
        }

        impl<R> $name<R>
        where
            R: TodoRepository,
        {
            /// Creates the use case over a shared repository.
            #[must_use]
            pub const fn new(repository: Arc<R>) -> Self {
                Self { repository }
            }
        }

        impl<R> Clone for $name<R>
        where
            R: TodoRepository,
        {
            fn clone(&self) -> Self {
                Self::new(Arc::clone(&self.repository))
            }
        }
    };
}

use_case! {
    /// Observes the live todo list.
    GetTodosUseCase
}

use_case! {
    /// Persists a new todo.
    AddTodoUseCase
}

use_case! {
    /// Replaces an existing todo.
    UpdateTodoUseCase
}

use_case! {
    /// Removes a todo by identifier.
    DeleteTodoUseCase
}

impl<R> GetTodosUseCase<R>
where
    R: TodoRepository,
{
    /// Returns the live list, newest first.
    #[must_use]
    pub fn execute(&self) -> TodoStream {
        self.repository.get_all_todos()
    }
}

impl<R> AddTodoUseCase<R>
where
    R: TodoRepository,
{
    /// Persists `todo` and returns the identifier storage assigned.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn execute(&self, todo: &Todo) -> TodoRepositoryResult<TodoId> {
        self.repository.add_todo(todo).await
    }
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    /// Replaces the stored copy of `todo`.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn execute(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        self.repository.update_todo(todo).await
    }
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    /// Removes the todo with `id`, if it exists.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn execute(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.repository.delete_todo(id).await
    }
}

/// The four use cases the todo screen depends on.
pub struct TodoUseCases<R>
where
    R: TodoRepository,
{
    /// Live list observation.
    pub get_todos: GetTodosUseCase<R>,
    /// Todo creation.
    pub add_todo: AddTodoUseCase<R>,
    /// Todo replacement.
    pub update_todo: UpdateTodoUseCase<R>,
    /// Todo removal.
    pub delete_todo: DeleteTodoUseCase<R>,
}

impl<R> TodoUseCases<R>
where
    R: TodoRepository,
{
    /// Builds all four use cases over one repository.
    #[must_use]
    pub fn from_repository(repository: Arc<R>) -> Self {
        Self {
            get_todos: GetTodosUseCase::new(Arc::clone(&repository)),
            add_todo: AddTodoUseCase::new(Arc::clone(&repository)),
            update_todo: UpdateTodoUseCase::new(Arc::clone(&repository)),
            delete_todo: DeleteTodoUseCase::new(repository),
        }
    }
}

impl<R> Clone for TodoUseCases<R>
where
    R: TodoRepository,
{
    fn clone(&self) -> Self {
        Self {
            get_todos: self.get_todos.clone(),
            add_todo: self.add_todo.clone(),
            update_todo: self.update_todo.clone(),
            delete_todo: self.delete_todo.clone(),
        }
    }
}
