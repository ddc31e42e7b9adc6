//! When steps for task board BDD scenarios.

use almanac::task::domain::CalendarDay;
use rstest_bdd_macros::when;

use super::world::BoardWorld;

#[when("the filter is cleared")]
fn filter_cleared(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.session_mut()?.show_all();
    Ok(())
}

#[when(r#"the filter day "{date}" is selected"#)]
fn filter_day_selected(world: &mut BoardWorld, date: String) -> Result<(), eyre::Report> {
    let day: CalendarDay = date.parse()?;
    world.session_mut()?.select_filter_day(Some(day));
    Ok(())
}

#[when(r#"a task "{text}" is added without a deadline"#)]
fn task_added_without_deadline(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    world.session_mut()?.add_task(&text, None);
    Ok(())
}

#[when(r#"task "{text}" is toggled"#)]
fn task_toggled(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    world
        .session_mut()?
        .toggle_task(id)
        .ok_or_else(|| eyre::eyre!("toggle found no task {text:?}"))?;
    Ok(())
}

#[when(r#"task "{text}" is deleted"#)]
fn task_deleted(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&text)?;
    world
        .session_mut()?
        .delete_task(id)
        .ok_or_else(|| eyre::eyre!("delete found no task {text:?}"))?;
    Ok(())
}

#[when("the board is reloaded")]
fn board_reloaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.session = None;
    world.session_mut()?;
    Ok(())
}
