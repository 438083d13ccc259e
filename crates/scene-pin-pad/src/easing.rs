/// Easing curves for key glow animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
}

impl Easing {
    /// Sample the curve at `t`, clamped to 0.0..=1.0
    pub fn sample(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Interpolate between `from` and `to` at `t`
    pub fn interpolate(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(Easing::EaseOutCubic.sample(0.0), 0.0);
        assert_eq!(Easing::EaseOutCubic.sample(1.0), 1.0);
        assert_eq!(Easing::EaseOutCubic.sample(0.5), 0.875);
    }

    #[test]
    fn test_interpolate_fades_out() {
        let ease = Easing::EaseOutCubic;
        assert_eq!(ease.interpolate(1.0, 0.0, 0.0), 1.0);
        assert_eq!(ease.interpolate(1.0, 0.0, 1.0), 0.0);
        assert!(ease.interpolate(1.0, 0.0, 0.5) < 0.5);
        assert_eq!(ease.interpolate(1.0, 0.0, 7.0), 0.0);
    }

    #[test]
    fn test_linear() {
        assert_eq!(Easing::Linear.sample(0.25), 0.25);
    }
}
