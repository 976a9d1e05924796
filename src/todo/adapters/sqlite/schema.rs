//! Diesel schema for todo persistence.

diesel::table! {
    /// To-do items, one row per todo.
    todos (id) {
        /// Storage-assigned identifier.
        id -> BigInt,
        /// Display title.
        title -> Text,
        /// Free-text description.
        description -> Text,
        /// Completion flag.
        is_completed -> Bool,
        /// Creation time in Unix milliseconds.
        created_at -> BigInt,
    }
}
