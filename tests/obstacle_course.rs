use rocket_playground::core::{Rect, Size};
use rocket_playground::systems::{ManualScheduler, StaticLayout};
use rocket_playground::{ControllerCore, Key, MoveOutcome, Position};

const VIEWPORT: Size = Size { width: 1440.0, height: 900.0 };
const ROCKET_PX: f64 = 80.0;

/// The demo page laid out on a 1440x900 screen.
fn demo_page() -> (StaticLayout, usize, Vec<usize>, Vec<Rect>) {
    let obstacles = vec![
        Rect::from_edges(90.0, 0.0, 630.0, 40.0),
        Rect::from_edges(810.0, 266.0, 1350.0, 346.0),
        Rect::from_edges(810.0, 442.0, 1350.0, 634.0),
    ];
    let mut layout = StaticLayout::new(VIEWPORT);
    let rocket = layout.insert(Rect::new(0.0, 0.0, ROCKET_PX, ROCKET_PX));
    let handles = obstacles.iter().map(|r| layout.insert(*r)).collect();
    (layout, rocket, handles, obstacles)
}

fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[test]
fn random_walk_never_enters_obstacles_or_leaves_viewport() {
    let (layout, rocket, handles, obstacles) = demo_page();
    let mut ctrl = ControllerCore::new(layout, ManualScheduler::new(), rocket, handles);
    assert_eq!(ctrl.obstacle_count(), 3);
    let mut rng = 0x2545_F491;

    for _ in 0..5000 {
        let key = match xorshift32(&mut rng) % 9 {
            0 | 1 => Key::Up,
            2 | 3 => Key::Down,
            4 | 5 => Key::Left,
            6 | 7 => Key::Right,
            _ => {
                let x = (xorshift32(&mut rng) % 1600) as f64 - 80.0;
                let y = (xorshift32(&mut rng) % 1000) as f64 - 50.0;
                ctrl.pointer_moved(x, y);
                Key::Attract
            }
        };

        let before = ctrl.position();
        match ctrl.handle_key(key) {
            MoveOutcome::Blocked { .. } => assert_eq!(ctrl.position(), before),
            MoveOutcome::Committed(p) => assert_eq!(ctrl.position(), p),
            other => panic!("unexpected outcome {:?}", other),
        }

        // Keep the measured rectangle where the renderer would put it.
        let Position { top, left } = ctrl.position();
        let rect = Rect::new(left, top, ROCKET_PX, ROCKET_PX);
        ctrl.layout_mut().set(rocket, Some(rect));

        assert!(top >= 0.0 && top <= VIEWPORT.height - ROCKET_PX, "top out of range: {}", top);
        assert!(left >= 0.0 && left <= VIEWPORT.width - ROCKET_PX, "left out of range: {}", left);
        for obstacle in &obstacles {
            assert!(!rect.overlaps(obstacle), "{:?} overlaps {:?}", rect, obstacle);
        }
    }
}

#[test]
fn sliding_along_the_top_bar() {
    let (layout, rocket, handles, _) = demo_page();
    let mut ctrl = ControllerCore::new(layout, ManualScheduler::new(), rocket, handles);

    // The bar starts at left=90; the rocket is 80 wide, so one step right is fine
    assert_eq!(ctrl.handle_key(Key::Right), MoveOutcome::Committed(Position::new(0.0, 10.0)));
    // the next one would put its right edge at 100 > 90
    assert_eq!(ctrl.handle_key(Key::Right), MoveOutcome::Blocked { obstacle: 0 });

    // Drop below the bar, then the path right is clear
    for _ in 0..4 {
        ctrl.handle_key(Key::Down);
    }
    assert_eq!(ctrl.position(), Position::new(40.0, 10.0));
    assert_eq!(ctrl.handle_key(Key::Right), MoveOutcome::Committed(Position::new(40.0, 20.0)));
}

#[test]
fn settings_from_json_drive_the_controller() {
    let (layout, rocket, handles, _) = demo_page();
    let settings = rocket_playground::ControllerSettings::from_json(r#"{"step_px": 5}"#).unwrap();
    let mut ctrl = ControllerCore::with_settings(layout, ManualScheduler::new(), rocket, handles, settings);
    assert_eq!(ctrl.handle_key_name("ArrowDown"), MoveOutcome::Committed(Position::new(5.0, 0.0)));
}
