//! Diesel row models for todo persistence.

use super::schema::todos;
use crate::todo::ports::TodoRecord;
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

impl From<TodoRow> for TodoRecord {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            is_completed: row.is_completed,
            created_at: row.created_at,
        }
    }
}

/// Insert model for rows that still need an identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow<'a> {
    /// Display title.
    pub title: &'a str,
    /// Free-text description.
    pub description: &'a str,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

impl<'a> From<&'a TodoRecord> for NewTodoRow<'a> {
    fn from(record: &'a TodoRecord) -> Self {
        Self {
            title: &record.title,
            description: &record.description,
            is_completed: record.is_completed,
            created_at: record.created_at,
        }
    }
}

/// Insert model for rows that replace an existing identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct ReplaceTodoRow<'a> {
    /// Identifier to create or overwrite.
    pub id: i64,
    /// Display title.
    pub title: &'a str,
    /// Free-text description.
    pub description: &'a str,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
}

impl<'a> From<&'a TodoRecord> for ReplaceTodoRow<'a> {
    fn from(record: &'a TodoRecord) -> Self {
        Self {
            id: record.id,
            title: &record.title,
            description: &record.description,
            is_completed: record.is_completed,
            created_at: record.created_at,
        }
    }
}

/// Changeset for the mutable columns; `created_at` is never rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TodoChanges<'a> {
    /// Display title.
    pub title: &'a str,
    /// Free-text description.
    pub description: &'a str,
    /// Completion flag.
    pub is_completed: bool,
}

impl<'a> From<&'a TodoRecord> for TodoChanges<'a> {
    fn from(record: &'a TodoRecord) -> Self {
        Self {
            title: &record.title,
            description: &record.description,
            is_completed: record.is_completed,
        }
    }
}
