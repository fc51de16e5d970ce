//! Time-bounded property interpolation.
//!
//! A tween is plain data advanced by elapsed time: start and end value,
//! optional delay, duration, and an easing curve. There are no completion
//! callbacks; callers poll [`Tween::finished`] after advancing.

use glam::Vec3;

/// Easing curves used by the particle profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic acceleration from rest.
    QuadIn,
    /// Quadratic deceleration to rest.
    QuadOut,
    /// Quadratic ease on both ends.
    QuadInOut,
    /// Cubic deceleration to rest.
    CubicOut,
    /// Exponential deceleration, very fast start.
    ExpoOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Values a tween can interpolate.
pub trait Lerp: Copy {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp_between(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

/// A single in-flight interpolation.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    start: T,
    end: T,
    delay: f32,
    duration: f32,
    easing: Easing,
    elapsed: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, end: T, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            delay: 0.0,
            duration: duration.max(0.0),
            easing,
            elapsed: 0.0,
        }
    }

    /// Hold the start value for `delay` seconds before interpolating.
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> T {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    /// Current interpolated value.
    pub fn value(&self) -> T {
        T::lerp_between(self.start, self.end, self.easing.apply(self.progress()))
    }

    /// Linear progress in [0, 1], delay excluded.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed >= self.delay {
                1.0
            } else {
                0.0
            }
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        }
    }

    /// True once delay plus duration has fully elapsed.
    pub fn finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}
