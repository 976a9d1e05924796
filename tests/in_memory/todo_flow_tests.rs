//! In-memory integration tests for todo mutations through the view model.

use super::helpers::{TestViewModel, add, app, apply, wait_for};
use rstest::rstest;
use todos::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{Todo, TodoId},
    ports::TodoRepository,
    presentation::TodoEvent,
};
use todos::app::TodoApp;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_todo_is_persisted_and_shown(
    app: TodoApp<InMemoryTodoStore>,
) -> Result<(), eyre::Report> {
    let view_model: TestViewModel = app.view_model();
    let mut states = view_model.subscribe();

    apply(
        &view_model,
        TodoEvent::Add {
            title: "Buy milk".to_owned(),
            description: "semi-skimmed".to_owned(),
        },
    )
    .await?;
    let state = wait_for(&mut states, |state| state.tasks.len() == 1).await?;

    let shown = state
        .tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected one todo"))?;
    let stored = app
        .repository()
        .get_todo_by_id(shown.id())
        .await?
        .ok_or_else(|| eyre::eyre!("todo missing from storage"))?;
    eyre::ensure!(&stored == shown, "screen and storage disagree");
    eyre::ensure!(shown.description() == "semi-skimmed", "description lost");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_fields_but_keeps_identity(
    app: TodoApp<InMemoryTodoStore>,
) -> Result<(), eyre::Report> {
    let view_model = app.view_model();
    let mut states = view_model.subscribe();
    apply(&view_model, add("Draft title")).await?;
    let state = wait_for(&mut states, |state| state.tasks.len() == 1).await?;
    let original = state
        .tasks
        .first()
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected one todo"))?;

    let edited = original
        .clone()
        .with_title("Final title")
        .with_description("now with notes");
    apply(&view_model, TodoEvent::Update(edited.clone())).await?;
    let state = wait_for(&mut states, |state| {
        state
            .task(original.id())
            .is_some_and(|todo| todo.title() == "Final title")
    })
    .await?;

    eyre::ensure!(state.tasks == vec![edited], "edit not applied wholesale");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn toggling_twice_restores_the_original(
    app: TodoApp<InMemoryTodoStore>,
) -> Result<(), eyre::Report> {
    let view_model = app.view_model();
    let mut states = view_model.subscribe();
    apply(&view_model, add("Stretch")).await?;
    let state = wait_for(&mut states, |state| state.tasks.len() == 1).await?;
    let original = state
        .tasks
        .first()
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected one todo"))?;

    apply(&view_model, TodoEvent::Update(original.clone().toggled())).await?;
    wait_for(&mut states, |state| state.tasks.first().is_some_and(Todo::is_completed)).await?;
    apply(&view_model, TodoEvent::Update(original.clone())).await?;
    let state = wait_for(&mut states, |state| {
        state.tasks.first().is_some_and(|todo| !todo.is_completed())
    })
    .await?;

    eyre::ensure!(state.tasks == vec![original], "round trip changed the todo");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_an_unknown_id_changes_nothing(
    app: TodoApp<InMemoryTodoStore>,
) -> Result<(), eyre::Report> {
    let view_model = app.view_model();
    let mut states = view_model.subscribe();
    apply(&view_model, add("Keep me")).await?;
    let before = wait_for(&mut states, |state| state.tasks.len() == 1).await?;

    apply(&view_model, TodoEvent::Delete(TodoId::new(999)?)).await?;

    let after = view_model.state();
    eyre::ensure!(after.tasks == before.tasks, "unknown delete changed the list");
    eyre::ensure!(after.error.is_none(), "unknown delete reported an error");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_screens_share_one_store(app: TodoApp<InMemoryTodoStore>) -> Result<(), eyre::Report> {
    let writer = app.view_model();
    let reader = app.view_model();
    let mut reader_states = reader.subscribe();

    apply(&writer, add("Seen everywhere")).await?;
    let state = wait_for(&mut reader_states, |state| state.tasks.len() == 1).await?;

    eyre::ensure!(
        state.tasks.first().map(Todo::title) == Some("Seen everywhere"),
        "second screen missed the write"
    );
    Ok(())
}
