use sim::{boatspecs::harbor_launch_spec, BoatController, ControlInputs, StartTransform, WaveField};

fn launch() -> BoatController {
    BoatController::initialize(harbor_launch_spec(), &StartTransform::default()).unwrap()
}

const UP: ControlInputs = ControlInputs { throttle_up: true, throttle_down: false, rudder_left: false, rudder_right: false };
const DOWN: ControlInputs = ControlInputs { throttle_up: false, throttle_down: true, rudder_left: false, rudder_right: false };
const IDLE: ControlInputs = ControlInputs { throttle_up: false, throttle_down: false, rudder_left: false, rudder_right: false };

#[test]
fn holding_throttle_up_never_exceeds_max() {
    let mut boat = launch();
    let water = WaveField::flat();
    let max = boat.spec().max_throttle;
    let mut t = 0.0;
    for dt in [0.1_f32, 0.5, 1.0 / 60.0, 3.0] {
        for _ in 0..200 {
            t += dt;
            let pose = boat.step(UP, &water, t, dt);
            assert!(pose.throttle <= max, "throttle {} > max {}", pose.throttle, max);
            assert!(pose.speed <= boat.spec().max_forward_speed);
        }
    }
    assert_eq!(boat.pose().throttle, max);
}

#[test]
fn holding_throttle_down_reaches_reverse_limit() {
    let mut boat = launch();
    let water = WaveField::flat();
    for _ in 0..400 {
        boat.step(DOWN, &water, 0.0, 0.05);
        assert!(boat.pose().throttle >= boat.spec().min_throttle);
    }
    assert_eq!(boat.pose().throttle, boat.spec().min_throttle);
    assert!(boat.pose().speed < 0.0, "boat should be reversing");
    assert!(boat.pose().speed >= -boat.spec().max_reverse_speed);
}

#[test]
fn released_throttle_decays_to_zero_in_bounded_steps() {
    let mut boat = launch();
    let water = WaveField::flat();
    let dt = 0.1;
    for _ in 0..100 {
        boat.step(UP, &water, 0.0, dt);
    }
    let spec = boat.spec().clone();
    // Full throttle decays at `throttle_decay` per second.
    let bound = (spec.max_throttle / (spec.throttle_decay * dt)).ceil() as usize + 1;
    let mut steps = 0;
    while boat.pose().throttle != 0.0 {
        boat.step(IDLE, &water, 0.0, dt);
        steps += 1;
        assert!(steps <= bound, "throttle still {} after {steps} steps", boat.pose().throttle);
    }
    // Drag then brings the hull to rest.
    for _ in 0..600 {
        boat.step(IDLE, &water, 0.0, dt);
    }
    assert!(boat.pose().speed.abs() < 1e-3, "speed = {}", boat.pose().speed);
}

#[test]
fn opposing_throttle_keys_cancel() {
    let mut boat = launch();
    let water = WaveField::flat();
    for _ in 0..10 {
        boat.step(UP, &water, 0.0, 0.1);
    }
    let before = boat.pose().throttle;
    let both = ControlInputs { throttle_up: true, throttle_down: true, ..IDLE };
    boat.step(both, &water, 0.0, 0.1);
    assert!(boat.pose().throttle < before, "both held should behave like released");
}
