//! Frame timing: a fixed step derived from the target frame rate, or a
//! measured wall-clock delta clamped so a stall cannot explode the solver.

use crate::float::Float;

/// How much simulated time one frame advances.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep<F: Float> {
    /// Target frames per second.
    pub fps: u32,
    /// Simulated seconds per wall-clock second.
    pub time_scale: F,
    /// Upper bound on one measured frame, in wall-clock seconds.
    pub max_frame_time: F,
}

impl<F: Float> Timestep<F> {
    pub fn new(fps: u32) -> Self {
        Timestep {
            fps,
            time_scale: F::one(),
            max_frame_time: F::from_f32(0.25),
        }
    }

    pub fn with_time_scale(mut self, time_scale: F) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_max_frame_time(mut self, max_frame_time: F) -> Self {
        self.max_frame_time = max_frame_time;
        self
    }

    /// Simulated time of one frame at the target rate.
    pub fn fixed_dt(&self) -> F {
        if self.fps == 0 {
            return F::zero();
        }
        self.time_scale / F::from_f32(self.fps as f32)
    }

    /// Simulated time for a frame that actually took `elapsed` seconds.
    /// Negative or non-finite input yields zero.
    pub fn measured_dt(&self, elapsed: F) -> F {
        if !elapsed.is_finite() || !(elapsed > F::zero()) {
            return F::zero();
        }
        elapsed.min(self.max_frame_time) * self.time_scale
    }
}

impl<F: Float> Default for Timestep<F> {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_step_at_sixty_fps() {
        let t = Timestep::<f64>::new(60);
        assert!((t.fixed_dt() - 1.0 / 60.0).abs() < 1e-12);
        let scaled = t.with_time_scale(10.0);
        assert!((scaled.fixed_dt() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn measured_step_is_clamped() {
        let t = Timestep::<f32>::new(60);
        assert_eq!(t.measured_dt(5.0), 0.25);
        assert_eq!(t.measured_dt(-1.0), 0.0);
        assert_eq!(t.measured_dt(f32::NAN), 0.0);
    }

    #[test]
    fn zero_fps_means_no_time() {
        assert_eq!(Timestep::<f32>::new(0).fixed_dt(), 0.0);
    }
}
