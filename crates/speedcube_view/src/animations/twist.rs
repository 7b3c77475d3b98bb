use speedcube_core::{Face, Twist};
use web_time::Duration;

/// Twist that is currently being animated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Twist to animate.
    pub twist: Twist,
    /// Current signed angle in degrees. Its magnitude grows from 0 to 90, and
    /// its sign matches [`Twist::angle()`].
    pub angle: f32,
}
impl TwistAnimation {
    /// Returns the signed angle at which the animation completes.
    pub fn target_angle(&self) -> f32 {
        self.twist.angle()
    }
    /// Returns the progress of the animation, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (self.angle / self.target_angle()).clamp(0.0, 1.0)
    }
}

/// State of the twist animation.
///
/// At most one twist is animated at a time. Requests made while a twist is in
/// flight are dropped rather than queued.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    current: Option<TwistAnimation>,
}
impl TwistAnimationState {
    /// Starts animating `twist`. Returns `false` and does nothing if another
    /// twist is already being animated.
    pub fn start(&mut self, twist: Twist) -> bool {
        if let Some(current) = &self.current {
            log::trace!("dropping {twist} while {} is animating", current.twist);
            return false;
        }
        self.current = Some(TwistAnimation { twist, angle: 0.0 });
        true
    }

    /// Steps the animation forward by `delta` at `speed` degrees per second.
    ///
    /// Returns the finished animation, with its angle exactly at the target,
    /// on the step that completes it. That twist is no longer animating
    /// afterwards, so each twist is returned exactly once.
    pub fn proceed(&mut self, delta: Duration, speed: f32) -> Option<TwistAnimation> {
        let anim = self.current.as_mut()?;
        let target = anim.target_angle();

        let step = delta.as_secs_f32() * speed;
        // Handle the case where something is wrong with the speed (e.g., zero
        // or NaN) by completing the twist instantly.
        let done = !(speed > 0.0) || anim.angle.abs() + step >= target.abs();

        if done {
            anim.angle = target;
            self.current.take()
        } else {
            anim.angle += step * target.signum();
            log::trace!("{} at {:.1} degrees", anim.twist, anim.angle);
            None
        }
    }

    /// Returns the twist being animated, if any.
    pub fn current(&self) -> Option<&TwistAnimation> {
        self.current.as_ref()
    }
    /// Returns the current signed angle, or 0.0 if nothing is animating.
    pub fn angle(&self) -> f32 {
        self.current.map_or(0.0, |anim| anim.angle)
    }
    /// Returns whether a twist is being animated.
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }
    /// Returns whether `face` is the face being animated.
    pub fn is_face_sweeping(&self, face: Face) -> bool {
        self.current.is_some_and(|anim| anim.twist.face == face)
    }
}
