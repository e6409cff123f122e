use nalgebra::Vector2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::components::Bounds;
use crate::env::{Action, Info, Observation, StepResult};
use crate::rendering::{default_viewer_factory, Display, Frame, Renderer, Traces, ViewerFactory};
use crate::resources::{EnvConfig, RenderMode, ResetOptions};
use crate::utils::{
    clamp_symmetric, ConfigError, EnvError, Result, RngManager, POLICY_STREAM, SPAWN_STREAM,
};
use crate::world::WorldState;

/// Single-agent target/hazard environment.
///
/// The usual lifecycle is `reset`, any number of `step`s, optionally
/// `render`, and finally `close`. Calling `reset`, `step` or `render` after
/// `close` fails with [`EnvError::Closed`].
pub struct TargetHazardEnv {
    config: EnvConfig,
    bounds: Bounds,
    dt: f64,

    rng_manager: RngManager,
    spawn_rng: ChaCha8Rng,
    policy_rng: ChaCha8Rng,

    world: Option<WorldState>,
    traces: Option<Traces>,
    renderer: Option<Renderer>,
    display: Option<Display>,

    step_count: u32,
    episode_count: u32,
    episode_over: bool,
    closed: bool,
}

impl TargetHazardEnv {
    /// Build an environment, opening the native window backend for
    /// [`RenderMode::Human`].
    pub fn new(config: EnvConfig) -> Result<Self> {
        let factory = match config.render_mode {
            RenderMode::Human => {
                Some(default_viewer_factory().ok_or(ConfigError::MissingWindowBackend)?)
            }
            _ => None,
        };
        Self::build(config, factory)
    }

    /// Build an environment whose human-mode frames go to viewers created by
    /// `factory`.
    pub fn with_viewer_factory(config: EnvConfig, factory: ViewerFactory) -> Result<Self> {
        Self::build(config, Some(factory))
    }

    fn build(config: EnvConfig, factory: Option<ViewerFactory>) -> Result<Self> {
        config.validate()?;

        let renderer = match config.render_mode {
            RenderMode::None => None,
            RenderMode::RgbArray | RenderMode::Human => Some(Renderer::new(
                config.window_size,
                config.max_absolute_location,
            )?),
        };
        let display = match (config.render_mode, factory) {
            (RenderMode::Human, Some(factory)) => Some(Display::new(
                factory,
                config.window_size,
                config.render_fps,
            )),
            (RenderMode::Human, None) => return Err(ConfigError::MissingWindowBackend.into()),
            _ => None,
        };
        let traces = config
            .show_observation_traces
            .then(|| Traces::new(config.trace_capacity));

        let rng_manager = config
            .seed
            .map(RngManager::new)
            .unwrap_or_else(RngManager::from_entropy);

        info!(
            "Created environment: render_mode={}, window_size={}, dt={:.4}",
            config.render_mode,
            config.window_size,
            config.dt()
        );

        Ok(Self {
            bounds: config.bounds(),
            dt: config.dt(),
            spawn_rng: rng_manager.get_rng(SPAWN_STREAM),
            policy_rng: rng_manager.get_rng(POLICY_STREAM),
            rng_manager,
            world: None,
            traces,
            renderer,
            display,
            step_count: 0,
            episode_count: 0,
            episode_over: false,
            closed: false,
            config,
        })
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn world(&self) -> Option<&WorldState> {
        self.world.as_ref()
    }

    pub fn traces(&self) -> Option<&Traces> {
        self.traces.as_ref()
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn episode_count(&self) -> u32 {
        self.episode_count
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Start a new episode.
    ///
    /// With `seed`, every RNG stream is re-derived from it, so the same seed
    /// reproduces the same initial state and, for the same actions, the same
    /// trajectory. Without it the current streams continue.
    pub fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&ResetOptions>,
    ) -> Result<(Observation, Info)> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        if let Some(options) = options {
            options.validate(self.bounds.location)?;
        }

        if let Some(seed) = seed {
            debug!("Reseeding with {}", seed);
            self.rng_manager = RngManager::new(seed);
            self.spawn_rng = self.rng_manager.get_rng(SPAWN_STREAM);
            self.policy_rng = self.rng_manager.get_rng(POLICY_STREAM);
        }

        // Always draw all three so overrides do not shift the stream
        let mut agent = self.sample_location();
        let mut target = self.sample_location();
        let mut hazard = self.sample_location();
        if let Some(options) = options {
            if let Some(location) = options.agent_location {
                agent = Vector2::from(location);
            }
            if let Some(location) = options.target_location {
                target = Vector2::from(location);
            }
            if let Some(location) = options.hazard_location {
                hazard = Vector2::from(location);
            }
        }

        let world = WorldState::new(agent, target, hazard);
        let outcome = world.evaluate(self.config.location_precision);
        let observation = Observation::from_world(&world);
        let info = Info::from_world(&world, outcome, 0);

        if let Some(traces) = self.traces.as_mut() {
            traces.clear();
            traces.record(&world);
        }

        self.world = Some(world);
        self.step_count = 0;
        self.episode_over = false;
        self.episode_count += 1;
        info!(
            "Episode {} started: target_distance={:.3}, hazard_distance={:.3}",
            self.episode_count, info.target_distance, info.hazard_distance
        );

        self.present_frame();
        Ok((observation, info))
    }

    fn sample_location(&mut self) -> Vector2<f64> {
        let bound = self.bounds.location;
        Vector2::new(
            self.spawn_rng.gen_range(-bound..bound),
            self.spawn_rng.gen_range(-bound..bound),
        )
    }

    /// Advance the simulation by one tick.
    ///
    /// Non-finite action components are treated as zero (NaN) or saturated
    /// (infinite). In human mode a frame is presented afterwards; a display
    /// error is logged and the step still counts.
    pub fn step(&mut self, action: &Action) -> Result<StepResult> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        if self.world.is_none() {
            return Err(EnvError::ResetNeeded);
        }
        if self.episode_over {
            warn!("step() called after the episode ended; call reset() to start a new one");
        }

        let max_acceleration = self.bounds.acceleration;
        let agent_acc = clamp_symmetric(Vector2::from(action.agent), max_acceleration);
        let target_acc = clamp_symmetric(
            self.config.target_policy.acceleration(
                action.target.map(Vector2::from),
                max_acceleration,
                &mut self.policy_rng,
            ),
            max_acceleration,
        );
        let hazard_acc = clamp_symmetric(
            self.config.hazard_policy.acceleration(
                action.hazard.map(Vector2::from),
                max_acceleration,
                &mut self.policy_rng,
            ),
            max_acceleration,
        );

        let Some(world) = self.world.as_mut() else {
            return Err(EnvError::ResetNeeded);
        };
        world.advance(agent_acc, target_acc, hazard_acc, self.dt, &self.bounds);

        let outcome = world.evaluate(self.config.location_precision);
        self.step_count += 1;

        let info = Info::from_world(world, outcome, self.step_count);
        let reward = self
            .config
            .reward
            .reward(outcome, info.target_distance, self.dt);
        let terminated = outcome.is_terminal();
        let truncated = self
            .config
            .max_episode_steps
            .map_or(false, |limit| self.step_count >= limit);
        let observation = Observation::from_world(world);

        if let Some(traces) = self.traces.as_mut() {
            traces.record(world);
        }

        if terminated || truncated {
            self.episode_over = true;
            info!(
                "Episode {} ended after {} steps: outcome={:?}, truncated={}",
                self.episode_count, self.step_count, outcome, truncated
            );
        }

        let result = StepResult {
            observation,
            reward,
            terminated,
            truncated,
            info,
        };
        self.present_frame();
        Ok(result)
    }

    /// Draw the current state.
    ///
    /// Returns the frame in [`RenderMode::RgbArray`]; `None` in the other
    /// modes, where this does no work.
    pub fn render(&mut self) -> Result<Option<Frame>> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        if self.config.render_mode != RenderMode::RgbArray {
            return Ok(None);
        }

        let world = self.world.as_ref().ok_or(EnvError::ResetNeeded)?;
        Ok(self
            .renderer
            .as_mut()
            .map(|renderer| renderer.render(world, self.traces.as_ref())))
    }

    // Human mode only. The transition is already applied, so a display
    // failure is logged rather than returned.
    fn present_frame(&mut self) {
        let (Some(renderer), Some(display), Some(world)) = (
            self.renderer.as_mut(),
            self.display.as_mut(),
            self.world.as_ref(),
        ) else {
            return;
        };
        let frame = renderer.render(world, self.traces.as_ref());
        if let Err(e) = display.present(&frame) {
            warn!("Failed to present frame: {}", e);
        }
    }

    /// Release display resources. Safe to call any number of times.
    pub fn close(&mut self) {
        if let Some(display) = self.display.as_mut() {
            display.release();
        }
        if !self.closed {
            info!("Environment closed after {} episodes", self.episode_count);
        }
        self.closed = true;
    }
}

impl Drop for TargetHazardEnv {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ObjectPolicy;

    fn config() -> EnvConfig {
        EnvConfig {
            location_precision: 0.1,
            seed: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_step_before_reset() {
        let mut env = TargetHazardEnv::new(config()).unwrap();
        assert!(matches!(
            env.step(&Action::default()),
            Err(EnvError::ResetNeeded)
        ));
    }

    #[test]
    fn test_human_mode_needs_backend() {
        if default_viewer_factory().is_some() {
            return;
        }
        let result = TargetHazardEnv::new(EnvConfig {
            render_mode: RenderMode::Human,
            ..config()
        });
        assert!(matches!(
            result,
            Err(EnvError::Config(ConfigError::MissingWindowBackend))
        ));
    }

    #[test]
    fn test_reset_zeroes_velocity_and_counter() {
        let mut env = TargetHazardEnv::new(config()).unwrap();
        env.reset(Some(3), None).unwrap();
        for _ in 0..5 {
            env.step(&Action::new([1.0, 1.0])).unwrap();
        }
        assert_eq!(env.step_count(), 5);

        let (obs, info) = env.reset(None, None).unwrap();
        assert_eq!(env.step_count(), 0);
        assert_eq!(info.step, 0);
        assert_eq!(obs.agent.velocity, [0.0, 0.0]);
        assert_eq!(obs.target.velocity, [0.0, 0.0]);
        assert_eq!(obs.hazard.velocity, [0.0, 0.0]);
        assert_eq!(env.episode_count(), 2);
    }

    #[test]
    fn test_sampled_locations_within_bounds() {
        let mut env = TargetHazardEnv::new(EnvConfig {
            max_absolute_location: 3.0,
            ..config()
        })
        .unwrap();
        for seed in 0..50 {
            let (obs, _) = env.reset(Some(seed), None).unwrap();
            for pos in [obs.agent.position, obs.target.position, obs.hazard.position] {
                assert!(pos.iter().all(|c| c.abs() <= 3.0));
            }
        }
    }

    #[test]
    fn test_invalid_reset_option_leaves_env_unstarted() {
        let mut env = TargetHazardEnv::new(config()).unwrap();
        let options = ResetOptions::new().target_location(2.0, 0.0);
        assert!(matches!(
            env.reset(None, Some(&options)),
            Err(EnvError::InvalidResetOption { .. })
        ));
        assert!(env.world().is_none());
        assert!(matches!(
            env.step(&Action::default()),
            Err(EnvError::ResetNeeded)
        ));
    }

    #[test]
    fn test_overrides_do_not_shift_rng() {
        let mut a = TargetHazardEnv::new(config()).unwrap();
        let mut b = TargetHazardEnv::new(config()).unwrap();

        let (plain, _) = a.reset(Some(11), None).unwrap();
        let options = ResetOptions::new().agent_location(0.0, 0.0);
        let (overridden, _) = b.reset(Some(11), Some(&options)).unwrap();

        assert_eq!(overridden.agent.position, [0.0, 0.0]);
        assert_eq!(plain.target, overridden.target);
        assert_eq!(plain.hazard, overridden.hazard);
    }

    #[test]
    fn test_stationary_policy_ignores_actions() {
        let mut env = TargetHazardEnv::new(EnvConfig {
            target_policy: ObjectPolicy::Stationary,
            ..config()
        })
        .unwrap();
        let (start, _) = env.reset(Some(5), None).unwrap();
        let action = Action::new([0.0, 0.0]).with_target([1.0, 1.0]).with_hazard([1.0, 0.0]);
        let result = env.step(&action).unwrap();

        assert_eq!(result.observation.target, start.target);
        assert!(result.observation.hazard.velocity[0] > 0.0);
    }

    #[test]
    fn test_render_none_mode_returns_nothing() {
        let mut env = TargetHazardEnv::new(config()).unwrap();
        env.reset(Some(1), None).unwrap();
        assert!(env.render().unwrap().is_none());
        assert!(env.renderer.is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut env = TargetHazardEnv::new(config()).unwrap();
        env.close();
        env.close();
        assert!(env.is_closed());
        assert!(matches!(env.reset(None, None), Err(EnvError::Closed)));
        assert!(matches!(env.step(&Action::default()), Err(EnvError::Closed)));
        assert!(matches!(env.render(), Err(EnvError::Closed)));
    }
}
