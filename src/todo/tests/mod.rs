//! Unit tests for the to-do list.


use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second on every reading.
///
/// Gives each todo a distinct creation time so ordering is observable.
#[derive(Debug)]
pub(crate) struct SteppingClock {
    next_ms: AtomicI64,
}

impl SteppingClock {
    pub(crate) const fn starting_at(start_ms: i64) -> Self {
        Self {
            next_ms: AtomicI64::new(start_ms),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(1_700_000_000_000)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let ms = self.next_ms.fetch_add(1_000, Ordering::SeqCst);
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
}

// Repository double for failure injection and call verification.
mockall::mock! {
    pub Repository {}

    #[async_trait::async_trait]
    impl crate::todo::ports::TodoRepository for Repository {
        fn get_all_todos(&self) -> crate::todo::ports::TodoStream;
        async fn get_todo_by_id(
            &self,
            id: crate::todo::domain::TodoId,
        ) -> crate::todo::ports::TodoRepositoryResult<Option<crate::todo::domain::Todo>>;
        async fn add_todo(
            &self,
            todo: &crate::todo::domain::Todo,
        ) -> crate::todo::ports::TodoRepositoryResult<crate::todo::domain::TodoId>;
        async fn update_todo(
            &self,
            todo: &crate::todo::domain::Todo,
        ) -> crate::todo::ports::TodoRepositoryResult<()>;
        async fn delete_todo(
            &self,
            id: crate::todo::domain::TodoId,
        ) -> crate::todo::ports::TodoRepositoryResult<()>;
    }
}

/// Builds a store failure the way a broken disk would surface it.
pub(crate) fn storage_failure(message: &str) -> crate::todo::ports::TodoRepositoryError {
    crate::todo::ports::TodoStoreError::persistence(std::io::Error::other(message.to_owned()))
        .into()
}
