mod twist;

pub use twist::{TwistAnimation, TwistAnimationState};
