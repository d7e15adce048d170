//! Tick driver: два явных входа вместо engine lifecycle hooks
//!
//! - `tick_variable`: кадр: input, facing, fire cooldown (Update)
//! - `tick_fixed`: физический шаг: AI, движение, снаряды, контакты (FixedUpdate)
//!
//! Общие часы симуляции: `Time<Fixed>::elapsed`, их двигает только `tick_fixed`.
//!
//! Event buffers меняются местами только после fixed step'а (как в TimePlugin):
//! `ContactBegan` от хоста доживает до FixedUpdate при любом frame rate.

use std::time::Duration;

use bevy::ecs::event::{EventRegistry, ShouldUpdateEvents};
use bevy::prelude::*;

/// Один fixed step длиной `delta`.
pub fn tick_fixed(app: &mut App, delta: Duration) {
    let world = app.world_mut();
    world.resource_mut::<Time<Fixed>>().advance_by(delta);
    world.run_schedule(FixedUpdate);

    // Следующий `app.update()` может очистить то, что FixedUpdate уже прочитал
    if let Some(mut registry) = world.get_resource_mut::<EventRegistry>() {
        if matches!(registry.should_update, ShouldUpdateEvents::Waiting) {
            registry.should_update = ShouldUpdateEvents::Ready;
        }
    }
}

/// Events переживают variable кадры до ближайшего `tick_fixed`.
pub fn hold_events_for_fixed_step(app: &mut App) {
    app.world_mut()
        .get_resource_or_init::<EventRegistry>()
        .should_update = ShouldUpdateEvents::Waiting;
}

/// Один variable кадр длиной `delta` (полный `app.update()`).
pub fn tick_variable(app: &mut App, delta: Duration) {
    app.world_mut().resource_mut::<Time<Virtual>>().advance_by(delta);
    app.update();
}

/// Кадр + fixed steps, накопившиеся за `frame`.
///
/// Returns the number of fixed steps run.
pub fn tick_frame(app: &mut App, frame: Duration, accumulator: &mut Duration) -> u32 {
    tick_variable(app, frame);

    let step = app.world().resource::<Time<Fixed>>().timestep();
    *accumulator += frame;

    let mut steps = 0;
    while *accumulator >= step {
        *accumulator -= step;
        tick_fixed(app, step);
        steps += 1;
    }

    steps
}
