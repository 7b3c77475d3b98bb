use speedcube_core::{
    CubeState, Face, NotationError, ScrambleError, ScrambleParams, ScrambledCube, Twist,
    format_twists,
};
use speedcube_prefs::AnimationPreferences;
use web_time::Duration;

use crate::{TwistAnimation, TwistAnimationState};

/// Scramble that was applied to the cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleRecord {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Twists applied.
    pub twists: Vec<Twist>,
}
impl ScrambleRecord {
    /// Returns the scramble in move notation.
    pub fn notation(&self) -> String {
        format_twists(&self.twists)
    }
}

/// Cube simulation, which owns the cube state and the twist animation.
///
/// The cube state only changes when an animation finishes, so anything that
/// draws the cube should combine [`Self::state()`] with [`Self::animation()`].
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest cube state, not including the twist being animated.
    state: CubeState,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
    /// Animation preferences.
    prefs: AnimationPreferences,

    /// Scramble applied to the cube, if any.
    scramble: Option<ScrambleRecord>,
    /// Number of twists committed since the last reset or scramble.
    twist_count: u32,
    /// Whether the cube has been solved since it was scrambled.
    solved: bool,
    /// Whether the solved state has been handled by the UI.
    solved_state_handled: bool,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(prefs: AnimationPreferences) -> Self {
        Self {
            state: CubeState::new(),
            twist_anim: TwistAnimationState::default(),
            prefs,

            scramble: None,
            twist_count: 0,
            solved: false,
            solved_state_handled: true,
        }
    }

    /// Returns the latest cube state, not including any twist that is still
    /// being animated.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns whether the latest cube state is solved.
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Returns the animation preferences.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }

    /// Returns the twist being animated, if any.
    pub fn animation(&self) -> Option<&TwistAnimation> {
        self.twist_anim.current()
    }
    /// Returns whether a twist is being animated.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_animating()
    }
    /// Returns whether `face` is being animated.
    pub fn is_face_sweeping(&self, face: Face) -> bool {
        self.twist_anim.is_face_sweeping(face)
    }
    /// Returns the signed angle at which to draw the animated face, in
    /// degrees, after easing. Returns 0.0 if nothing is animating.
    pub fn visual_angle(&self) -> f32 {
        self.animation().map_or(0.0, |anim| {
            anim.target_angle() * self.prefs.interpolation.interpolate(anim.progress())
        })
    }

    /// Returns the scramble applied to the cube, or `None` if it has not been
    /// scrambled since the last reset.
    pub fn scramble_record(&self) -> Option<&ScrambleRecord> {
        self.scramble.as_ref()
    }
    /// Returns the number of twists committed since the last reset or
    /// scramble.
    pub fn twist_count(&self) -> u32 {
        self.twist_count
    }
    /// Returns `true` exactly once after a scrambled cube becomes solved.
    pub fn take_solved_event(&mut self) -> bool {
        let ret = self.solved && !self.solved_state_handled;
        self.solved_state_handled = true;
        ret
    }

    /// Requests a twist. Returns whether the animation started; requests made
    /// while another twist is animating are ignored.
    pub fn request_twist(&mut self, twist: Twist) -> bool {
        self.twist_anim.start(twist)
    }
    /// Parses a move such as `R` or `U'` and requests it. Returns whether the
    /// animation started.
    pub fn request_move(&mut self, token: &str) -> Result<bool, NotationError> {
        let twist = token.parse()?;
        Ok(self.request_twist(twist))
    }

    /// Advances the animation by `delta` and commits the twist if the
    /// animation finished. Returns whether the cube must be redrawn.
    pub fn step(&mut self, delta: Duration) -> bool {
        if !self.twist_anim.is_animating() {
            return false;
        }
        if let Some(finished) = self.twist_anim.proceed(delta, self.prefs.twist_speed) {
            self.commit_twist(finished.twist);
        }
        true
    }

    fn commit_twist(&mut self, twist: Twist) {
        self.state.twist(twist);
        self.twist_count += 1;
        log::debug!("committed twist {twist} (#{})", self.twist_count);

        if self.scramble.is_some() && !self.solved && self.state.is_solved() {
            log::info!("solved in {} twists", self.twist_count);
            self.solved = true;
            self.solved_state_handled = false;
        }
    }

    /// Resets the cube to the solved state. Returns `false` and does nothing if
    /// a twist is being animated.
    pub fn reset(&mut self) -> bool {
        if self.is_animating() {
            log::warn!("ignoring reset request during twist animation");
            return false;
        }
        *self = Self::new(self.prefs.clone());
        true
    }

    /// Resets and scrambles the cube. Returns `Ok(false)` and does nothing if a
    /// twist is being animated.
    pub fn scramble(&mut self, params: ScrambleParams) -> Result<bool, ScrambleError> {
        if self.is_animating() {
            log::warn!("ignoring scramble request during twist animation");
            return Ok(false);
        }
        let ScrambledCube {
            params,
            twists,
            state,
        } = params.generate()?;

        *self = Self::new(self.prefs.clone());
        self.state = state;
        self.scramble = Some(ScrambleRecord { params, twists });
        Ok(true)
    }
}
