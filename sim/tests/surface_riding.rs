use sim::{
    boatspecs::harbor_launch_spec, builtins, tilt_angle, BoatController, BoatStepDebug,
    ControlInputs, SimClock, StartTransform, Vec2f, Vec3f, WaveField, WaveFieldSpec, WaveSpec,
    BODY_FWD,
};

fn run(field: &WaveField, inputs: ControlInputs, seconds: f32, mut check: impl FnMut(&BoatController, &BoatStepDebug)) {
    let mut boat = BoatController::initialize(harbor_launch_spec(), &StartTransform::default()).unwrap();
    let mut clock = SimClock::new();
    let dt = 1.0 / 60.0;
    let mut dbg = BoatStepDebug::default();
    for _ in 0..(seconds / dt) as usize {
        clock.advance(dt);
        boat.step_dbg(inputs, field, clock.current_time(), dt, Some(&mut dbg));
        check(&boat, &dbg);
    }
}

#[test]
fn hull_sits_on_surface_plus_draft() {
    let field = WaveField::new(&builtins::harbor_swell()).unwrap();
    let full_ahead = ControlInputs { throttle_up: true, rudder_left: true, ..Default::default() };
    run(&field, full_ahead, 10.0, |boat, dbg| {
        let p = boat.pose().position;
        let expected = field.height(p.x, p.z, dbg.time) + boat.spec().draft_offset;
        assert!((p.y - expected).abs() < 1e-5, "y={} expected {}", p.y, expected);
    });
}

#[test]
fn tilt_never_exceeds_limit_on_steep_sea() {
    let field = WaveField::new(&builtins::choppy_sea()).unwrap();
    let max_tilt = harbor_launch_spec().max_tilt;
    let mut saw_clamp = false;
    run(&field, ControlInputs { throttle_up: true, ..Default::default() }, 20.0, |boat, dbg| {
        let tilt = tilt_angle(boat.pose().orientation);
        assert!(tilt <= max_tilt + 1e-4, "tilt {tilt} > {max_tilt}");
        // Surface is steeper than the hull is allowed to follow.
        let surface_tilt = dbg.surface.normal.dot(Vec3f::Y).clamp(-1.0, 1.0).acos();
        if surface_tilt > max_tilt + 0.05 {
            saw_clamp = true;
            assert!(dbg.tilt_target <= max_tilt + 1e-4);
        }
    });
    assert!(saw_clamp, "choppy sea should exceed the tilt limit somewhere");
}

#[test]
fn hull_follows_long_swell() {
    let swell = WaveFieldSpec {
        components: vec![WaveSpec::deep_water(0.3, 30.0, Vec2f::new(1.0, 0.5), 0.0)],
    };
    let field = WaveField::new(&swell).unwrap();
    let mut worst = 0.0_f32;
    let mut steps = 0;
    run(&field, ControlInputs::default(), 8.0, |boat, dbg| {
        steps += 1;
        // After settling, the hull up vector tracks the moving normal closely.
        if steps > 120 {
            let err = boat.pose().up().angle_between(dbg.surface.normal);
            worst = worst.max(err);
        }
    });
    assert!(worst < 0.05, "hull lags the surface by {worst} rad");
}

#[test]
fn orientation_keeps_heading_under_tilt() {
    let field = WaveField::new(&builtins::choppy_sea()).unwrap();
    let start = StartTransform { heading: 1.0, ..Default::default() };
    let mut boat = BoatController::initialize(harbor_launch_spec(), &start).unwrap();
    let pose = *boat.step(ControlInputs::default(), &field, 0.3, 0.1);
    let fwd = pose.orientation * BODY_FWD;
    let flat = Vec3f::new(fwd.x, 0.0, fwd.z).normalize();
    // Tilting the hull only drifts the projected bow by about the tilt angle.
    let tolerance = 2.0 * tilt_angle(pose.tilt) + 1e-3;
    assert!(flat.angle_between(pose.forward()) < tolerance);
}
