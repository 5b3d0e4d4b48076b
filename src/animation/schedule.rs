//! Per-frame angle increments
//!
//! Every plane advances by a fixed delta each frame. Gated planes stay
//! frozen for a number of frames before they join in, so the tesseract first
//! tumbles like an ordinary cube and only later starts turning through W.

use hypercube_math::AngleSet;

/// Fixed per-plane angle deltas, optionally gated by frame count
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSchedule<const P: usize> {
    deltas: [f64; P],
    gated: [bool; P],
    frozen_frames: u64,
}

impl<const P: usize> RotationSchedule<P> {
    /// Every plane advances from the first frame
    pub const fn new(deltas: [f64; P]) -> Self {
        Self {
            deltas,
            gated: [false; P],
            frozen_frames: 0,
        }
    }

    /// Hold the `gated` planes still for the first `frozen_frames` frames
    pub const fn with_gate(mut self, gated: [bool; P], frozen_frames: u64) -> Self {
        self.gated = gated;
        self.frozen_frames = frozen_frames;
        self
    }

    pub fn deltas(&self) -> &[f64; P] {
        &self.deltas
    }

    pub fn frozen_frames(&self) -> u64 {
        self.frozen_frames
    }

    /// Whether plane `i` is held back by the gate
    pub fn is_gated(&self, plane_index: usize) -> bool {
        self.gated[plane_index]
    }

    /// True once gated planes advance; `frame` counts completed frames
    pub fn gate_open(&self, frame: u64) -> bool {
        frame >= self.frozen_frames
    }

    /// Advance `angles` for the frame numbered `frame` (starting at 0)
    pub fn advance(&self, angles: &mut AngleSet<P>, frame: u64) {
        let open = self.gate_open(frame);
        for (i, &delta) in self.deltas.iter().enumerate() {
            if open || !self.gated[i] {
                angles.advance(i, delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ungated_advances_every_frame() {
        let schedule = RotationSchedule::new([0.07, -0.04, 0.01]);
        let mut angles = AngleSet::zero();
        for frame in 0..10 {
            schedule.advance(&mut angles, frame);
        }
        assert!((angles.get(0) - 0.7).abs() < 1e-12);
        assert!((angles.get(1) + 0.4).abs() < 1e-12);
        assert!((angles.get(2) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_gate_holds_planes_for_frozen_frames() {
        let schedule = RotationSchedule::new([1.0, 1.0]).with_gate([false, true], 3);
        let mut angles = AngleSet::zero();

        for frame in 0..3 {
            schedule.advance(&mut angles, frame);
        }
        assert_eq!(angles.get(0), 3.0);
        assert_eq!(angles.get(1), 0.0);

        schedule.advance(&mut angles, 3);
        assert_eq!(angles.get(0), 4.0);
        assert_eq!(angles.get(1), 1.0);
    }

    #[test]
    fn test_gate_open() {
        let schedule = RotationSchedule::new([0.0; 6]).with_gate([true; 6], 200);
        assert!(!schedule.gate_open(0));
        assert!(!schedule.gate_open(199));
        assert!(schedule.gate_open(200));
        assert!(schedule.is_gated(5));
        assert_eq!(schedule.frozen_frames(), 200);
    }
}
