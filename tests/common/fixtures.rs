use std::cell::RefCell;
use std::rc::Rc;

use hazard_world::{
    EnvConfig, EnvError, Frame, Observation, RenderMode, ResetOptions, TargetHazardEnv, Viewer,
    ViewerFactory,
};

/// Headless config with a fixed seed
pub fn test_config() -> EnvConfig {
    EnvConfig {
        location_precision: 0.1,
        seed: Some(7),
        ..Default::default()
    }
}

pub fn rgb_config() -> EnvConfig {
    EnvConfig {
        render_mode: RenderMode::RgbArray,
        window_size: 100,
        ..test_config()
    }
}

pub fn make_env(config: EnvConfig) -> TargetHazardEnv {
    TargetHazardEnv::new(config).expect("Failed to create environment")
}

/// Reset with every object placed explicitly
pub fn reset_at(
    env: &mut TargetHazardEnv,
    agent: [f64; 2],
    target: [f64; 2],
    hazard: [f64; 2],
) -> Observation {
    let options = ResetOptions::new()
        .agent_location(agent[0], agent[1])
        .target_location(target[0], target[1])
        .hazard_location(hazard[0], hazard[1]);
    env.reset(None, Some(&options))
        .expect("Failed to reset environment")
        .0
}

/// What a [`RecordingViewer`] has seen
#[derive(Debug, Default)]
pub struct ViewerLog {
    pub opened: usize,
    pub released: usize,
    pub frames: Vec<Frame>,
}

pub struct RecordingViewer {
    log: Rc<RefCell<ViewerLog>>,
}

impl Viewer for RecordingViewer {
    fn show(&mut self, frame: &Frame) -> Result<(), EnvError> {
        self.log.borrow_mut().frames.push(frame.clone());
        Ok(())
    }
}

impl Drop for RecordingViewer {
    fn drop(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

/// A viewer factory that records into the returned log instead of opening a window
pub fn recording_factory() -> (ViewerFactory, Rc<RefCell<ViewerLog>>) {
    let log = Rc::new(RefCell::new(ViewerLog::default()));
    let shared = Rc::clone(&log);
    let factory: ViewerFactory = Box::new(move |_size| {
        shared.borrow_mut().opened += 1;
        Ok(Box::new(RecordingViewer {
            log: Rc::clone(&shared),
        }) as Box<dyn Viewer>)
    });
    (factory, log)
}

/// Human-mode env wired to a [`RecordingViewer`]
pub fn make_human_env(config: EnvConfig) -> (TargetHazardEnv, Rc<RefCell<ViewerLog>>) {
    let (factory, log) = recording_factory();
    let config = EnvConfig {
        render_mode: RenderMode::Human,
        ..config
    };
    let env = TargetHazardEnv::with_viewer_factory(config, factory)
        .expect("Failed to create human-mode environment");
    (env, log)
}

/// Human-mode env whose viewer can never be opened
pub fn make_headless_human_env(config: EnvConfig) -> TargetHazardEnv {
    let factory: ViewerFactory =
        Box::new(|_size| Err(EnvError::Display("no display available".into())));
    let config = EnvConfig {
        render_mode: RenderMode::Human,
        ..config
    };
    TargetHazardEnv::with_viewer_factory(config, factory)
        .expect("Failed to create human-mode environment")
}
