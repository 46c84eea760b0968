use crate::constants::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreathingShape {
    #[default]
    Triangle,
    Sine,
}

/// Idle scale oscillation for the ring and hotspot markers.
///
/// The clock only runs while the scene is idle; when a transition is busy
/// the scale holds at its last value.
#[derive(Clone, Copy, Debug)]
pub struct Breathing {
    pub min: f32,
    pub max: f32,
    pub period_sec: f32,
    pub shape: BreathingShape,
    elapsed_sec: f32,
}

impl Default for Breathing {
    fn default() -> Self {
        Self::new(BREATHING_MIN, BREATHING_MAX, BREATHING_PERIOD_SEC, BreathingShape::Triangle)
    }
}

impl Breathing {
    pub fn new(min: f32, max: f32, period_sec: f32, shape: BreathingShape) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            period_sec: period_sec.max(1e-3),
            shape,
            elapsed_sec: 0.0,
        }
    }

    /// Scale at an absolute time. Starts at the midpoint and rises.
    pub fn scale_at(&self, t_sec: f32) -> f32 {
        let phase = (t_sec / self.period_sec).rem_euclid(1.0);
        let wave = match self.shape {
            // 0 → 1 → -1 → 0 over one period
            BreathingShape::Triangle => {
                if phase < 0.25 {
                    phase * 4.0
                } else if phase < 0.75 {
                    2.0 - phase * 4.0
                } else {
                    phase * 4.0 - 4.0
                }
            }
            BreathingShape::Sine => (phase * std::f32::consts::TAU).sin(),
        };
        let mid = 0.5 * (self.min + self.max);
        let amp = 0.5 * (self.max - self.min);
        (mid + amp * wave).clamp(self.min, self.max)
    }

    pub fn advance(&mut self, dt_sec: f32, idle: bool) -> f32 {
        if idle && dt_sec.is_finite() {
            self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)) % (self.period_sec * 1024.0);
        }
        self.scale()
    }

    pub fn scale(&self) -> f32 {
        self.scale_at(self.elapsed_sec)
    }
}
