use super::SceneCore;

// Backlog beyond this many steps is dropped instead of replayed.
const MAX_STEPS_PER_ADVANCE: u32 = 5;

/// Step the engine forward one fixed tick.
///
/// Runs from the animation frame loop whether or not the pressing wall is
/// sweeping; start/pause only gate the wall and the timer.
pub(super) fn step(scene: &mut SceneCore) {
    scene.drag.apply(&mut scene.physics);
    scene.physics.step();
    scene.frame += 1;
}

/// Feed `elapsed_ms` of wall-clock time and take as many fixed steps as fit.
///
/// The remainder carries into the next call, so the engine runs at its own
/// rate whatever the display refresh rate is.
pub(super) fn advance(scene: &mut SceneCore, elapsed_ms: f64) -> u32 {
    let dt_ms = scene.physics.dt() as f64 * 1000.0;
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        scene.step_backlog_ms += elapsed_ms;
    }

    let mut steps = 0;
    while scene.step_backlog_ms >= dt_ms && steps < MAX_STEPS_PER_ADVANCE {
        step(scene);
        scene.step_backlog_ms -= dt_ms;
        steps += 1;
    }

    if scene.step_backlog_ms >= dt_ms {
        log::debug!("dropping {:.1} ms of physics backlog", scene.step_backlog_ms);
        scene.step_backlog_ms %= dt_ms;
    }
    steps
}
