//! Given steps for task board BDD scenarios.

use almanac::task::domain::CalendarDay;
use eyre::WrapErr;
use rstest_bdd_macros::given;

use super::world::BoardWorld;
use crate::test_helpers::at_hour;

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut BoardWorld, date: String) -> Result<(), eyre::Report> {
    world.set_today(&date).wrap_err("set scenario clock")
}

#[given(r#"a task "{text}" due "{date}""#)]
fn task_due(world: &mut BoardWorld, text: String, date: String) -> Result<(), eyre::Report> {
    let day: CalendarDay = date.parse()?;
    world
        .session_mut()?
        .add_task(&text, Some(at_hour(day, 12)?))
        .ok_or_else(|| eyre::eyre!("task {text:?} was not added"))?;
    Ok(())
}

#[given(r#"an undated task "{text}""#)]
fn undated_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    world
        .session_mut()?
        .add_task(&text, None)
        .ok_or_else(|| eyre::eyre!("task {text:?} was not added"))?;
    Ok(())
}

#[given(r#"a completed task "{text}" due "{date}""#)]
fn completed_task_due(
    world: &mut BoardWorld,
    text: String,
    date: String,
) -> Result<(), eyre::Report> {
    let day: CalendarDay = date.parse()?;
    let session = world.session_mut()?;
    let task = session
        .add_task(&text, Some(at_hour(day, 12)?))
        .ok_or_else(|| eyre::eyre!("task {text:?} was not added"))?;
    session
        .toggle_task(task.id())
        .ok_or_else(|| eyre::eyre!("task {text:?} vanished before toggling"))?;
    Ok(())
}
