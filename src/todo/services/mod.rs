//! Application services for the to-do list.

mod use_cases;

pub use use_cases::{
    AddTodoUseCase, DeleteTodoUseCase, GetTodosUseCase, TodoUseCases, UpdateTodoUseCase,
};
