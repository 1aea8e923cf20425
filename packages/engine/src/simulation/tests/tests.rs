use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;

use super::schedule::{ManualScheduler, Scheduler};
use super::*;
use crate::rigid_body::BodyShape;

// 1000x700 viewport: box spans x 250..750, y 200..500
fn scene() -> SceneCore {
    scene_with(Settings {
        rng_seed: Some(7),
        ..Settings::default()
    })
}

fn scene_with(settings: Settings) -> SceneCore {
    SceneCore::new(settings, 1000.0, 700.0).unwrap()
}

fn body_pos(scene: &SceneCore, id: BodyId) -> Vec2 {
    scene.physics().position(id).unwrap()
}

#[test]
fn new_scene_has_four_boundaries_and_no_bodies() {
    let scene = scene();
    assert_eq!(scene.boundary_count(), 4);
    assert_eq!(scene.dynamic_body_count(), 0);

    let g = scene.geometry();
    assert_eq!((g.box_x, g.box_y), (250.0, 200.0));
}

#[test]
fn classic_layout_places_boundaries() {
    let scene = scene();
    let b = *scene.boundaries();
    let physics = scene.physics();

    assert_eq!(physics.position(b.left_wall), Some(Vec2::new(237.5, 350.0)));
    assert_eq!(physics.position(b.right_wall), Some(Vec2::new(762.5, 350.0)));
    assert_eq!(physics.shape(b.right_wall), Some(BodyShape::Rect { width: 25.0, height: 340.0 }));
    assert_eq!(physics.position(b.ground), Some(Vec2::new(500.0, 512.5)));
    assert_eq!(physics.shape(b.ground), Some(BodyShape::Rect { width: 1125.0, height: 25.0 }));
    assert_eq!(physics.position(b.pressing_wall), Some(Vec2::new(255.5, 335.0)));
    assert_eq!(physics.shape(b.pressing_wall), Some(BodyShape::Rect { width: 25.0, height: 370.0 }));
    assert_eq!(physics.fill(b.pressing_wall), Some("#FF0000"));
    assert_eq!(scene.pressing_wall_x(), 255.5);
}

#[test]
fn symmetric_layout_parks_pressing_wall_on_the_right() {
    let scene = scene_with(Settings {
        boundary_layout: BoundaryLayout::Symmetric,
        ..Settings::default()
    });
    let b = *scene.boundaries();
    let physics = scene.physics();

    assert_eq!(physics.shape(b.right_wall), Some(BodyShape::Rect { width: 25.0, height: 300.0 }));
    assert_eq!(physics.shape(b.ground), Some(BodyShape::Rect { width: 500.0, height: 25.0 }));
    assert_eq!(physics.position(b.pressing_wall), Some(Vec2::new(762.5, 350.0)));
}

#[test]
fn circle_spawns_above_the_box_with_its_fill() {
    let mut scene = scene();
    let id = scene.add_circle("20", "#0000FF").unwrap();

    assert_eq!(scene.dynamic_body_count(), 1);
    assert_eq!(scene.physics().shape(id), Some(BodyShape::Circle { radius: 20.0 }));
    assert_eq!(scene.physics().fill(id), Some("#0000FF"));

    let pos = body_pos(&scene, id);
    assert_eq!(pos.y, 180.0);
    assert!((270.0..=730.0).contains(&pos.x), "x={}", pos.x);
}

#[test]
fn rectangle_spawn_is_a_square_of_the_given_side() {
    let mut scene = scene();
    let id = scene.add_rectangle("40", "#FFA500").unwrap();

    assert_eq!(scene.physics().shape(id), Some(BodyShape::Rect { width: 40.0, height: 40.0 }));
    let pos = body_pos(&scene, id);
    assert_eq!(pos.y, 180.0);
    assert!((270.0..=730.0).contains(&pos.x), "x={}", pos.x);
}

#[test]
fn spawned_bodies_always_fit_across_the_box() {
    let mut scene = scene();
    for i in 0..200 {
        let (shape, size, half) = if i % 2 == 0 {
            (ShapeKind::Circle, "50", 50.0)
        } else {
            (ShapeKind::Rectangle, "120", 60.0)
        };
        let id = scene.add_body_from_palette(shape, size).unwrap();
        let x = body_pos(&scene, id).x;
        assert!(x >= 250.0 + half && x <= 750.0 - half, "{shape} at x={x}");

        let fill = scene.physics().fill(id).unwrap();
        assert!(fill == "#0000FF" || fill == "#FFA500", "fill {fill}");
    }
    assert_eq!(scene.dynamic_body_count(), 200);
}

#[test]
fn largest_allowed_body_spawns_at_box_center() {
    let mut scene = scene();
    let id = scene.add_circle("250", "#0000FF").unwrap();
    assert_abs_diff_eq!(body_pos(&scene, id).x, 500.0, epsilon = 1e-3);
}

#[test]
fn rejected_input_adds_nothing() {
    let mut scene = scene();
    for raw in ["", "abc", "0", "-3", "251", "2.5"] {
        assert!(scene.add_circle(raw, "#0000FF").is_err(), "{raw:?}");
    }
    assert!(scene.add_rectangle("501", "#0000FF").is_err());
    assert!(scene.add_rectangle("10", "blue").is_err());
    assert_eq!(scene.dynamic_body_count(), 0);
}

#[test]
fn same_seed_gives_same_spawn_positions() {
    let mut a = scene();
    let mut b = scene();
    for _ in 0..10 {
        let ia = a.add_circle("10", "#abc").unwrap();
        let ib = b.add_circle("10", "#abc").unwrap();
        assert_eq!(body_pos(&a, ia), body_pos(&b, ib));
    }
}

#[test]
fn ticks_move_pressing_wall_one_pixel_each() {
    let mut scene = scene();
    let x0 = scene.pressing_wall_x();
    for _ in 0..100 {
        scene.advance_pressing_wall();
    }
    assert_eq!(scene.pressing_wall_x(), x0 + 100.0);
    assert_eq!(scene.wraps(), 0);
}

#[test]
fn pressing_wall_wraps_past_the_right_wall() {
    let mut scene = scene();
    // 255.5 + 519 = 774.5, still within the 775 limit
    for _ in 0..519 {
        scene.advance_pressing_wall();
    }
    assert_eq!(scene.pressing_wall_x(), 774.5);

    let x = scene.advance_pressing_wall();
    assert_eq!(x, 237.5);
    assert_eq!(scene.wraps(), 1);

    let wall = scene.boundaries().pressing_wall;
    assert_eq!(body_pos(&scene, wall).x, 237.5);
}

#[test]
fn next_wall_x_is_monotonic_until_wrap() {
    let g = *scene().geometry();
    assert_eq!(next_wall_x(300.0, 1.0, &g), (301.0, false));
    assert_eq!(next_wall_x(775.0, 0.0, &g), (775.0, false));
    assert_eq!(next_wall_x(774.5, 1.0, &g), (237.5, true));
}

#[test]
fn resize_replaces_boundaries_and_keeps_bodies() {
    let mut scene = scene();
    let ball = scene.add_circle("15", "#0000FF").unwrap();
    let before_ball = body_pos(&scene, ball);
    for _ in 0..30 {
        scene.advance_pressing_wall();
    }
    let old = scene.boundaries().ids();

    scene.resize(1280.0, 800.0);

    assert_eq!(scene.viewport(), (1280.0, 800.0));
    assert_eq!(scene.boundary_count(), 4);
    assert_eq!(scene.dynamic_body_count(), 1);
    assert_eq!(body_pos(&scene, ball), before_ball);
    for id in old {
        assert!(!scene.physics().contains(id));
    }

    // geometry is fixed at load; the pressing wall resumes where it was
    assert_eq!(scene.geometry().box_x, 250.0);
    assert_eq!(scene.pressing_wall_x(), 285.5);
    let wall = scene.boundaries().pressing_wall;
    assert_eq!(body_pos(&scene, wall).x, 285.5);
}

#[test]
fn repeated_resizes_never_accumulate_walls() {
    let mut scene = scene();
    for i in 0..20 {
        scene.resize(900.0 + i as f32, 600.0);
    }
    assert_eq!(scene.boundary_count(), 4);
    assert_eq!(scene.physics().body_count(), 4);
}

#[test]
fn switching_layout_rebuilds_once() {
    let mut scene = scene();
    let old = scene.boundaries().ids();
    scene.set_boundary_layout(BoundaryLayout::Classic);
    assert_eq!(scene.boundaries().ids(), old);

    scene.set_boundary_layout(BoundaryLayout::Symmetric);
    assert_eq!(scene.layout(), BoundaryLayout::Symmetric);
    assert_eq!(scene.boundary_count(), 4);
    let right = scene.boundaries().right_wall;
    assert_eq!(
        scene.physics().shape(right),
        Some(BodyShape::Rect { width: 25.0, height: 300.0 })
    );
}

#[test]
fn dropped_ball_lands_inside_the_box() {
    let mut scene = scene();
    let ball = scene.add_circle("20", "#0000FF").unwrap();
    for _ in 0..300 {
        scene.step();
    }
    assert_eq!(scene.frame(), 300);

    let pos = body_pos(&scene, ball);
    assert!(pos.y > 200.0 && pos.y < 500.0, "ball at {pos:?}");
    assert!(pos.x > 250.0 && pos.x < 750.0, "ball at {pos:?}");
}

fn step_ms(scene: &SceneCore) -> f64 {
    scene.physics().dt() as f64 * 1000.0
}

#[test]
fn advance_carries_leftover_time_into_the_next_frame() {
    let mut scene = scene();
    let dt = step_ms(&scene);

    assert_eq!(scene.advance(0.0), 0);
    assert_eq!(scene.advance(dt * 2.5), 2);
    // 0.5 step left over plus 0.6 makes one more
    assert_eq!(scene.advance(dt * 0.6), 1);
    assert_eq!(scene.frame(), 3);
}

#[test]
fn physics_rate_does_not_follow_display_refresh() {
    for hz in [60u32, 120, 144] {
        let mut scene = scene();
        let frame_ms = 1000.0 / hz as f64;
        let mut steps = 0;
        for _ in 0..hz {
            let taken = scene.advance(frame_ms);
            assert!(taken <= 1, "{hz} Hz frame took {taken} steps");
            steps += taken;
        }
        assert!((59..=60).contains(&steps), "{hz} Hz display gave {steps} steps in one second");
    }
}

#[test]
fn long_stall_is_capped_and_forgotten() {
    let mut scene = scene();
    assert_eq!(scene.advance(1000.0), 5);
    assert_eq!(scene.advance(0.0), 0);
    assert_eq!(scene.frame(), 5);
}

#[test]
fn advance_ignores_bogus_elapsed_time() {
    let mut scene = scene();
    assert_eq!(scene.advance(-50.0), 0);
    assert_eq!(scene.advance(f64::NAN), 0);
    assert_eq!(scene.frame(), 0);
}

#[test]
fn zero_gravity_keeps_bodies_floating() {
    let mut scene = scene();
    scene.set_gravity(0.0);
    let ball = scene.add_circle("20", "#0000FF").unwrap();
    let before = body_pos(&scene, ball);
    for _ in 0..60 {
        scene.step();
    }
    assert_abs_diff_eq!(body_pos(&scene, ball).y, before.y, epsilon = 1e-3);
}

#[test]
fn drag_pulls_a_body_toward_the_pointer() {
    let mut scene = scene();
    scene.set_gravity(0.0);
    let ball = scene.add_circle("20", "#0000FF").unwrap();
    let start = body_pos(&scene, ball);

    assert_eq!(scene.pointer_down(start), Some(ball));
    let target = start + Vec2::new(0.0, 100.0);
    scene.pointer_move(target);
    for _ in 0..30 {
        scene.step();
    }
    let pos = body_pos(&scene, ball);
    assert!(pos.y > start.y + 50.0, "ball at {pos:?}");

    scene.pointer_up();
    assert_eq!(scene.dragged_body(), None);
}

#[test]
fn pointer_on_a_wall_grabs_nothing() {
    let mut scene = scene();
    let ground = scene.boundaries().ground;
    let at = body_pos(&scene, ground);
    assert_eq!(scene.pointer_down(at), None);
    assert_eq!(scene.dragged_body(), None);
}

#[test]
fn render_frame_draws_bodies_over_walls() {
    let mut scene = scene();
    scene.add_circle("10", "#0000FF").unwrap();
    scene.add_rectangle("10", "#FFA500").unwrap();

    let frame = scene.render_frame();
    assert_eq!((frame.width, frame.height), (1000.0, 700.0));
    assert_eq!(frame.background, "#f0f0f0");
    assert_eq!(frame.bodies.len(), 6);
    assert!(frame.bodies[..4].iter().all(|b| !b.dynamic));
    assert!(frame.bodies[4..].iter().all(|b| b.dynamic));
}

// === CONTROLLERS ===

fn running_parts() -> (ManualScheduler, Rc<dyn Scheduler>, Rc<RefCell<SceneCore>>) {
    let manual = ManualScheduler::new();
    let scheduler: Rc<dyn Scheduler> = Rc::new(manual.clone());
    (manual, scheduler, Rc::new(RefCell::new(scene())))
}

#[test]
fn oscillator_ticks_at_its_period() {
    let (clock, scheduler, scene) = running_parts();
    let x0 = scene.borrow().pressing_wall_x();
    let mut osc = Oscillator::new();

    assert!(osc.start(&scheduler, &scene, 1000.0 / 60.0).unwrap());
    clock.advance(500.0);
    assert_eq!(scene.borrow().pressing_wall_x(), x0 + 30.0);
}

#[test]
fn oscillator_start_twice_keeps_one_task() {
    let (clock, scheduler, scene) = running_parts();
    let x0 = scene.borrow().pressing_wall_x();
    let mut osc = Oscillator::new();

    assert!(osc.start(&scheduler, &scene, 10.0).unwrap());
    assert!(!osc.start(&scheduler, &scene, 10.0).unwrap());
    assert_eq!(clock.active_tasks(), 1);

    clock.advance(100.0);
    assert_eq!(scene.borrow().pressing_wall_x(), x0 + 10.0);
}

#[test]
fn oscillator_pause_stops_the_wall() {
    let (clock, scheduler, scene) = running_parts();
    let mut osc = Oscillator::new();
    osc.start(&scheduler, &scene, 10.0).unwrap();
    clock.advance(50.0);

    assert!(osc.pause());
    assert!(!osc.pause());
    let x = scene.borrow().pressing_wall_x();
    clock.advance(1000.0);
    assert_eq!(scene.borrow().pressing_wall_x(), x);
    assert_eq!(clock.active_tasks(), 0);
}

#[test]
fn timer_shows_elapsed_with_two_decimals() {
    let clock = ManualScheduler::new();
    let scheduler: Rc<dyn Scheduler> = Rc::new(clock.clone());
    let text = Rc::new(RefCell::new(String::new()));
    let mut timer = SessionTimer::new(text.clone());

    assert!(timer.start(&scheduler, 100.0).unwrap());
    assert_eq!(text.borrow().as_str(), "Time: 0.00s");

    clock.advance(500.0);
    assert_eq!(text.borrow().as_str(), "Time: 0.50s");

    timer.pause();
    clock.advance(2000.0);
    assert_eq!(text.borrow().as_str(), "Time: 0.50s");
    assert_eq!(timer.elapsed_label(clock.now_ms()), None);

    // a new start counts from zero again
    timer.start(&scheduler, 100.0).unwrap();
    clock.advance(1230.0);
    assert_eq!(text.borrow().as_str(), "Time: 1.20s");
    assert_eq!(timer.elapsed_label(clock.now_ms()).as_deref(), Some("Time: 1.23s"));
}

#[test]
fn session_clock_formats_labels() {
    let clock = SessionClock::started_at(1_000.0);
    assert_eq!(clock.label(1_000.0), "Time: 0.00s");
    assert_eq!(clock.label(13_456.0), "Time: 12.46s");
    assert_eq!(clock.label(500.0), "Time: 0.00s");
    assert_eq!(format_elapsed(3.0), "Time: 3.00s");
}
