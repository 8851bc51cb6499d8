//! Per-frame values fed into shader uniforms.

use glam::Vec4;

/// Time-driven color and offset used by the shaders exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCycle {
    pub color: Vec4,
    pub x_offset: f32,
}

impl ColorCycle {
    /// Evaluates the cycle at `seconds` since startup.
    pub fn at(seconds: f32) -> Self {
        let green = seconds.sin() / 2.0 + 0.5;
        let blue = seconds.cos() / 2.0 + 0.5;
        Self {
            color: Vec4::new(0.0, green, blue, 1.0),
            x_offset: seconds.sin(),
        }
    }
}

/// Weight between the two textures of the textured quad, held in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixFactor {
    value: f32,
    /// Change per second while a key is held.
    rate: f32,
}

impl MixFactor {
    pub const INITIAL: f32 = 0.2;

    pub fn new(rate: f32) -> Self {
        Self {
            value: Self::INITIAL,
            rate: rate.abs(),
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn raise(&mut self, delta_time: f32) {
        self.set(self.value + self.rate * delta_time);
    }

    pub fn lower(&mut self, delta_time: f32) {
        self.set(self.value - self.rate * delta_time);
    }

    pub fn set(&mut self, value: f32) {
        // NaN would otherwise stick forever
        self.value = if value.is_nan() {
            Self::INITIAL
        } else {
            value.clamp(0.0, 1.0)
        };
    }
}

impl Default for MixFactor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cycle_at_zero() {
        let cycle = ColorCycle::at(0.0);
        assert_eq!(cycle.color, Vec4::new(0.0, 0.5, 1.0, 1.0));
        assert_eq!(cycle.x_offset, 0.0);
    }

    #[test]
    fn color_cycle_stays_in_range() {
        for step in 0..1000 {
            let cycle = ColorCycle::at(step as f32 * 0.037);
            for c in cycle.color.to_array() {
                assert!((0.0..=1.0).contains(&c), "component {c} out of range");
            }
            assert!((-1.0..=1.0).contains(&cycle.x_offset));
        }
    }

    #[test]
    fn mix_factor_clamps() {
        let mut mix = MixFactor::new(1.0);
        assert_eq!(mix.value(), MixFactor::INITIAL);
        mix.raise(0.5);
        assert!((mix.value() - 0.7).abs() < 1e-6);
        mix.raise(10.0);
        assert_eq!(mix.value(), 1.0);
        mix.lower(0.25);
        assert!((mix.value() - 0.75).abs() < 1e-6);
        mix.lower(100.0);
        assert_eq!(mix.value(), 0.0);
    }

    #[test]
    fn mix_factor_ignores_rate_sign_and_nan() {
        let mut mix = MixFactor::new(-2.0);
        mix.raise(0.1);
        assert!((mix.value() - 0.4).abs() < 1e-6);
        mix.set(f32::NAN);
        assert_eq!(mix.value(), MixFactor::INITIAL);
    }
}
