//! Headless driver.
//!
//! Runs the simulation without a window, either from a recorded replay at
//! its fixed delta or as a real-time attract run paced by the frame clock.
//! Optionally prints the last frame as JSON (draw commands plus HUD).
//!
//!   plat_game [--config <path>] [--replay <path>] [--seconds <n>] [--dump-frame]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use plat_core::input::{Action, InputState};
use plat_core::time::FrameClock;
use plat_game::config::load_config_from_path;
use plat_game::hud::Hud;
use plat_game::replay::load_replay_from_path;
use plat_game::{FrameReport, GameConfig, World};
use plat_render::{DrawCommand, DrawList};
use serde::Serialize;

const DEFAULT_ATTRACT_SECONDS: f32 = 10.0;

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    replay: Option<PathBuf>,
    seconds: Option<f32>,
    dump_frame: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--replay" => {
                let value = args.next().ok_or("--replay needs a path")?;
                parsed.replay = Some(PathBuf::from(value));
            }
            "--seconds" => {
                let value = args.next().ok_or("--seconds needs a number")?;
                let seconds: f32 = value
                    .parse()
                    .map_err(|e| format!("Invalid --seconds '{value}': {e}"))?;
                if seconds <= 0.0 {
                    return Err("--seconds must be > 0".to_string());
                }
                parsed.seconds = Some(seconds);
            }
            "--dump-frame" => parsed.dump_frame = true,
            other => return Err(format!("Unknown argument '{other}'")),
        }
    }
    Ok(parsed)
}

/// Walk right, hop and throw on a loop; restart whenever the game ends.
fn attract_script(input: &mut InputState, world: &World, t: f64) {
    input.press(Action::Right);
    set_held(input, Action::Jump, t % 1.5 < 0.3);
    set_held(input, Action::Fire, t % 0.5 < 0.1);
    set_held(input, Action::Restart, world.state().is_terminal());
}

fn set_held(input: &mut InputState, action: Action, held: bool) {
    if held {
        input.press(action);
    } else {
        input.release(action);
    }
}

fn log_events(report: &FrameReport) {
    for event in &report.events {
        log::debug!("frame {}: {}", report.frame, event.label());
    }
}

fn run_replay(world: &mut World, path: &Path) -> Result<(), String> {
    let replay = load_replay_from_path(path)?;
    let inputs = replay.expanded_inputs();
    log::info!(
        "Replaying {} frames ({:.1}s) from {}",
        inputs.len(),
        replay.duration_secs(),
        path.display()
    );
    for input in &inputs {
        let report = world.step(input, replay.fixed_dt);
        log_events(&report);
    }
    Ok(())
}

fn run_attract(world: &mut World, seconds: f32) {
    let mut clock = FrameClock::new();
    let mut input = InputState::new();
    log::info!("Attract run for {seconds:.1}s");

    while clock.total_time < seconds as f64 {
        let dt = clock.begin_frame();
        attract_script(&mut input, world, clock.total_time);
        let report = world.step(&input.snapshot(), dt);
        log_events(&report);
        input.end_frame();
        std::thread::sleep(clock.remaining_budget());
    }
    log::info!(
        "Attract run done: {} frames, {:.1} fps",
        clock.frame_count,
        clock.smoothed_fps
    );
}

#[derive(Serialize)]
struct FrameDump<'a> {
    frame: u64,
    hud: Hud,
    commands: &'a [DrawCommand],
}

fn dump_frame(world: &World) -> Result<String, String> {
    let mut list = DrawList::new();
    world.draw(&mut list);
    let dump = FrameDump {
        frame: world.frame(),
        hud: Hud::from_world(world),
        commands: list.commands(),
    };
    serde_json::to_string_pretty(&dump).map_err(|e| format!("Failed to encode frame: {e}"))
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let config = load_config_from_path(path)?;
            log::info!("Loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };
    let mut world = World::new(config);

    match &args.replay {
        Some(path) => run_replay(&mut world, path)?,
        None => run_attract(
            &mut world,
            args.seconds.unwrap_or(DEFAULT_ATTRACT_SECONDS),
        ),
    }

    log::info!(
        "Final: score {}, lives {}, time {:.1}, state {:?}, power {}",
        world.score(),
        world.lives(),
        world.timer(),
        world.state(),
        world.player().power().label()
    );

    if args.dump_frame {
        println!("{}", dump_frame(&world)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Platformer headless driver starting...");

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_all_flags() {
        let parsed = args(&[
            "--config",
            "cfg.json",
            "--replay",
            "run.json",
            "--seconds",
            "2.5",
            "--dump-frame",
        ])
        .expect("valid args");
        assert_eq!(parsed.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(parsed.replay, Some(PathBuf::from("run.json")));
        assert_eq!(parsed.seconds, Some(2.5));
        assert!(parsed.dump_frame);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(args(&["--config"]).is_err());
        assert!(args(&["--seconds", "soon"]).is_err());
        assert!(args(&["--seconds", "0"]).is_err());
        assert!(args(&["--fullscreen"]).is_err());
        assert_eq!(args(&[]).expect("empty is fine"), Args::default());
    }

    #[test]
    fn attract_script_restarts_finished_games() {
        let mut world = World::new(GameConfig::default());
        let mut input = InputState::new();
        attract_script(&mut input, &world, 0.0);
        assert!(input.is_held(Action::Right));
        assert!(input.is_held(Action::Jump));
        assert!(!input.is_held(Action::Restart));

        world.step(&input.snapshot(), 100.0);
        assert!(world.state().is_terminal());
        attract_script(&mut input, &world, 1.0);
        assert!(input.is_held(Action::Restart));
        assert!(!input.is_held(Action::Jump));
    }

    #[test]
    fn dumped_frame_is_json_with_hud() {
        let world = World::new(GameConfig::default());
        let json = dump_frame(&world).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["hud"]["score"], "000000");
        assert_eq!(value["commands"][0]["op"], "fill_rect");
    }
}
