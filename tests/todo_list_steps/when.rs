//! When steps for todo list BDD scenarios.

use super::world::TodoListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todos::todo::presentation::TodoEvent;

#[when(r#"the user adds a todo titled "{title}""#)]
fn user_adds_todo(world: &mut TodoListWorld, title: String) -> Result<(), eyre::Report> {
    let before = world.view_model()?.state().tasks.len();
    world.type_line("add")?;
    world.type_line(&title)?;
    world.type_line("")?;
    world
        .settle(|state| state.tasks.len() == before + 1)
        .wrap_err("wait for added todo")?;
    Ok(())
}

#[when("an add event arrives with a blank title")]
fn blank_add_event(world: &mut TodoListWorld) -> Result<(), eyre::Report> {
    let handle = world.view_model()?.handle_event(TodoEvent::Add {
        title: "   ".to_owned(),
        description: "ignored".to_owned(),
    });
    eyre::ensure!(handle.is_none(), "blank add should not start a mutation");
    Ok(())
}

#[when(r#"the user toggles "{title}""#)]
fn user_toggles(world: &mut TodoListWorld, title: String) -> Result<(), eyre::Report> {
    let todo = world.todo_titled(&title)?;
    let expected = !todo.is_completed();
    world.type_line(&format!("toggle {}", todo.id()))?;
    world
        .settle(|state| {
            state
                .task(todo.id())
                .is_some_and(|current| current.is_completed() == expected)
        })
        .wrap_err("wait for toggled todo")?;
    Ok(())
}

#[when(r#"the user renames "{title}" to "{new_title}""#)]
fn user_renames(
    world: &mut TodoListWorld,
    title: String,
    new_title: String,
) -> Result<(), eyre::Report> {
    let todo = world.todo_titled(&title)?;
    world.type_line(&format!("edit #{}", todo.id()))?;
    world.type_line(&new_title)?;
    world.type_line("")?;
    world
        .settle(|state| {
            state
                .task(todo.id())
                .is_some_and(|current| current.title() == new_title)
        })
        .wrap_err("wait for renamed todo")?;
    Ok(())
}

#[when(r#"the user deletes "{title}""#)]
fn user_deletes(world: &mut TodoListWorld, title: String) -> Result<(), eyre::Report> {
    let todo = world.todo_titled(&title)?;
    world.type_line(&format!("delete {}", todo.id()))?;
    world
        .settle(|state| state.task(todo.id()).is_none())
        .wrap_err("wait for deleted todo")?;
    Ok(())
}
