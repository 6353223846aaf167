#[cfg(test)]
mod integration {
    use std::time::Duration;

    use anyhow::Result;
    use bevy_app::App;
    use bevy_time::TimeUpdateStrategy;
    use host::input::{Key, KeyAction, ScriptEvent};
    use host::{build_host_app, Config, HostSection, HostTelemetry, LatestFrame, SceneRes};
    use sim::{TimeOfDay, WaveFieldSpec};
    use tracing::info;

    const TICK_HZ: f32 = 50.0;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn test_config(duration_secs: f32, script: Vec<ScriptEvent>) -> Config {
        Config {
            host: HostSection {
                tick_hz: TICK_HZ,
                duration_secs,
                report_every_steps: 25,
                ..HostSection::default()
            },
            script,
            ..Config::default()
        }
    }

    fn manual_app(cfg: Config) -> Result<App> {
        let step = Duration::from_secs_f32(cfg.step_secs());
        let mut app = build_host_app(cfg, false)?;
        app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
        Ok(app)
    }

    fn sim_time(app: &App) -> f32 {
        app.world().resource::<SceneRes>().clock().current_time()
    }

    fn press(at: f32, key: Key) -> ScriptEvent {
        ScriptEvent { at, key, action: KeyAction::Press }
    }

    fn release(at: f32, key: Key) -> ScriptEvent {
        ScriptEvent { at, key, action: KeyAction::Release }
    }

    #[test]
    fn one_fixed_step_per_frame() -> Result<()> {
        init_tracing();
        let mut app = manual_app(test_config(0.0, Vec::new()))?;
        // The first update only primes the frame clock.
        app.update();
        assert!(app.world().resource::<LatestFrame>().0.is_none());
        for _ in 0..100 {
            app.update();
        }
        let t = sim_time(&app);
        let telemetry = app.world().resource::<HostTelemetry>();
        info!(t, steps = telemetry.steps, speed = telemetry.last.speed, "fixed-step run finished");
        assert!((t - 100.0 / TICK_HZ).abs() < 1e-3, "t={t}");
        assert_eq!(telemetry.steps, 100);
        let frame = app.world().resource::<LatestFrame>().0.expect("frame published");
        assert_eq!(frame.time, t);
        Ok(())
    }

    #[test]
    fn scripted_throttle_moves_the_boat() -> Result<()> {
        init_tracing();
        let script = vec![press(0.1, Key::W), release(2.0, Key::W), press(2.0, Key::A)];
        let cfg = Config { waves: WaveFieldSpec::default(), ..test_config(0.0, script) };
        let mut app = manual_app(cfg)?;
        for _ in 0..(4.0 * TICK_HZ) as usize + 1 {
            app.update();
        }
        let scene = app.world().resource::<SceneRes>();
        let pose = scene.boat().pose();
        assert!(pose.position.z > 2.0, "boat should have moved forward, z={}", pose.position.z);
        assert!(pose.heading > 0.0, "left rudder should turn left, heading={}", pose.heading);
        assert!(scene.keys().rudder_left && !scene.keys().throttle_up);
        let frame = app.world().resource::<LatestFrame>().0.expect("frame published");
        assert_eq!(frame.camera_look_at, pose.position);
        Ok(())
    }

    #[test]
    fn night_key_switches_published_light() -> Result<()> {
        init_tracing();
        let script = vec![press(0.5, Key::Digit4), release(0.6, Key::Digit4)];
        let mut app = manual_app(test_config(0.0, script))?;
        for _ in 0..(TICK_HZ as usize + 1) {
            app.update();
        }
        let frame = app.world().resource::<LatestFrame>().0.expect("frame published");
        assert_eq!(frame.time_of_day, TimeOfDay::Night);
        Ok(())
    }

    #[test]
    fn exits_after_configured_duration() -> Result<()> {
        init_tracing();
        let mut app = manual_app(test_config(1.0, Vec::new()))?;
        let mut frames = 0;
        while app.should_exit().is_none() {
            app.update();
            frames += 1;
            assert!(frames < 500, "host never requested exit");
        }
        assert!(sim_time(&app) >= 1.0 - 1e-4);
        assert!(sim_time(&app) < 1.0 + 2.0 / TICK_HZ);
        Ok(())
    }

    #[test]
    fn escape_key_requests_exit() -> Result<()> {
        init_tracing();
        let mut app = manual_app(test_config(0.0, vec![press(0.2, Key::Escape)]))?;
        for _ in 0..30 {
            app.update();
            if app.should_exit().is_some() {
                break;
            }
        }
        assert!(app.should_exit().is_some());
        assert!(sim_time(&app) < 0.5);
        Ok(())
    }
}
