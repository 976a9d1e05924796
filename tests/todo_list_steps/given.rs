//! Given steps for todo list BDD scenarios.

use super::world::TodoListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty todo list")]
fn empty_todo_list(world: &mut TodoListWorld) -> Result<(), eyre::Report> {
    world.open().wrap_err("open todo screen")
}

#[given(r#"a todo list containing "{first}" and "{second}""#)]
fn todo_list_containing(
    world: &mut TodoListWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    world.open().wrap_err("open todo screen")?;
    for title in [first, second] {
        world.type_line("add")?;
        world.type_line(&title)?;
        world.type_line("")?;
    }
    world
        .settle(|state| state.tasks.len() == 2)
        .wrap_err("wait for seeded todos")?;
    Ok(())
}
