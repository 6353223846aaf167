use std::ops::{Deref, DerefMut};
use std::time::Duration;

use anyhow::{Context, Result};
use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use tracing::{info, warn};

pub mod args;
pub mod camera;
pub mod config;
pub mod input;
pub mod scene;

pub use args::Args;
pub use config::{load_config, parse_config, Config, HostSection};
pub use scene::{RenderFrame, Scene};

use input::InputScript;
use sim::BoatStepDebug;

#[derive(Resource)]
pub struct SceneRes(pub Scene);

impl Deref for SceneRes {
    type Target = Scene;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SceneRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Resource, Debug, Default)]
pub struct ScriptRes(pub InputScript);

/// Fixed-step accumulator between the frame clock and the simulation.
#[derive(Resource, Debug, Clone, Copy)]
pub struct StepTiming {
    pub acc: f32,
    pub dt: f32,
    pub max_steps: u32,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LatestFrame(pub Option<RenderFrame>);

#[derive(Resource, Debug, Clone)]
pub struct HostSettings {
    pub duration_secs: f32,
    pub report_every_steps: u32,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HostTelemetry {
    pub steps: u64,
    pub last: BoatStepDebug,
}

pub fn build_host_app(cfg: Config, fast: bool) -> Result<App> {
    cfg.validate().context("validating host config")?;
    let scene = Scene::from_config(&cfg).context("building scene")?;
    let step = Duration::from_secs_f32(cfg.step_secs());

    let mut app = App::new();
    // Fast mode spins without sleeping and feeds the clock exactly one step per frame.
    let wait = if fast { Duration::ZERO } else { step };
    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(wait)));
    if fast {
        app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    }

    let script = InputScript::new(cfg.script.clone());
    let script_events = script.len();
    app.insert_resource(SceneRes(scene))
        .insert_resource(ScriptRes(script))
        .insert_resource(StepTiming {
            acc: 0.0,
            dt: step.as_secs_f32(),
            max_steps: cfg.host.max_catch_up_steps.max(1),
        })
        .insert_resource(HostSettings {
            duration_secs: cfg.host.duration_secs,
            report_every_steps: cfg.host.report_every_steps,
        })
        .init_resource::<LatestFrame>()
        .init_resource::<HostTelemetry>()
        .add_systems(
            Update,
            (run_fixed_steps, report_telemetry, exit_after_duration).chain(),
        );

    info!(
        tick_hz = cfg.host.tick_hz,
        fast,
        script_events,
        "host app built"
    );
    Ok(app)
}

fn run_fixed_steps(
    time: Res<Time>,
    mut scene: ResMut<SceneRes>,
    mut script: ResMut<ScriptRes>,
    mut timing: ResMut<StepTiming>,
    mut latest: ResMut<LatestFrame>,
    mut telemetry: ResMut<HostTelemetry>,
) {
    let frame_dt = time.delta_secs();
    if frame_dt <= 0.0 {
        return;
    }
    timing.acc += frame_dt;
    let step_dt = timing.dt.max(1e-4);
    let mut steps: u32 = 0;
    while timing.acc >= step_dt && steps < timing.max_steps {
        timing.acc -= step_dt;
        steps += 1;
    }
    if timing.acc >= step_dt {
        let dropped = (timing.acc / step_dt).floor() as u32;
        warn!(dropped, "simulation fell behind; dropping steps");
        timing.acc -= dropped as f32 * step_dt;
    }

    for _ in 0..steps {
        // Keys due at the current time are applied before the step that follows them.
        let now = scene.clock().current_time();
        for ev in script.0.due(now) {
            scene.handle_key(ev.key, ev.action);
        }
        telemetry.last = scene.update(step_dt);
        telemetry.steps += 1;
    }
    if steps > 0 {
        latest.0 = Some(scene.frame());
    }
}

fn report_telemetry(
    settings: Res<HostSettings>,
    telemetry: Res<HostTelemetry>,
    scene: Res<SceneRes>,
    mut last_reported: Local<u64>,
) {
    let every = settings.report_every_steps as u64;
    if every == 0 || telemetry.steps < *last_reported + every {
        return;
    }
    *last_reported = telemetry.steps;
    let d = &telemetry.last;
    let pos = scene.boat().pose().position;
    info!(
        t = d.time,
        steps = telemetry.steps,
        x = pos.x,
        y = pos.y,
        z = pos.z,
        heading = d.heading,
        speed = d.speed,
        throttle = d.throttle,
        rudder = d.rudder,
        tilt = d.tilt,
        time_of_day = ?scene.lighting().time_of_day(),
        "boat"
    );
}

fn exit_after_duration(
    settings: Res<HostSettings>,
    scene: Res<SceneRes>,
    mut exit: EventWriter<AppExit>,
    mut sent: Local<bool>,
) {
    if *sent {
        return;
    }
    let t = scene.clock().current_time();
    let timed_out = settings.duration_secs > 0.0 && t >= settings.duration_secs;
    if timed_out || scene.keys().quit_requested {
        info!(t, timed_out, "host exiting");
        exit.write(AppExit::Success);
        *sent = true;
    }
}
