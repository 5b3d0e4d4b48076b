//! Per-frame hypercube animation state
//!
//! One tick runs the whole pipeline: advance the angles, rotate a fresh copy
//! of every canonical vertex, project it down to the plane, map it to pixels
//! and draw the edges band by band. Vertices are always rebuilt from the
//! canonical cube so rounding error never accumulates across frames.

use hypercube_math::rotation::rotate;
use hypercube_math::{
    AngleSet, Dimension, EdgeBand, Hypercube, Perspective, PerspectiveError, RotationPlane,
    ScreenPoint, Viewport, PLANES_3D, PLANES_4D,
};
use hypercube_raster::{draw_line, draw_line_unchecked, PixelBuffer};

use super::palette::Palette;
use super::schedule::RotationSchedule;

/// Distance of the eye from the origin along every projected axis
pub const EYE_DISTANCE: f64 = 4.0;

/// Frames the tesseract spends rotating like a plain cube
pub const FROZEN_FRAMES: u64 = 200;

/// Cube deltas for planes XY, XZ, YZ
pub const CUBE_SCHEDULE: RotationSchedule<3> = RotationSchedule::new([0.07, -0.04, 0.01]);

/// Tesseract deltas for planes XY, XZ, XW, YZ, YW, ZW
///
/// The three planes through W are held still for [`FROZEN_FRAMES`].
pub const TESSERACT_SCHEDULE: RotationSchedule<6> =
    RotationSchedule::new([0.003, -0.006, 0.001, 0.009, -0.005, 0.008])
        .with_gate([false, false, true, false, true, true], FROZEN_FRAMES);

/// A running wireframe animation, independent of its dimension
pub trait Wireframe {
    fn dimension(&self) -> Dimension;

    /// Frames completed so far
    fn frame(&self) -> u64;

    /// Run one full frame into `buffer`
    fn tick(&mut self, buffer: &mut PixelBuffer, palette: &Palette);

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

/// Animation state for an `N`-dimensional hypercube rotating in `P` planes
#[derive(Clone, Debug)]
pub struct AnimationState<const N: usize, const P: usize> {
    cube: Hypercube<N>,
    planes: [RotationPlane; P],
    schedule: RotationSchedule<P>,
    angles: AngleSet<P>,
    perspective: Perspective<N>,
    viewport: Viewport,
    screen_points: Vec<ScreenPoint>,
    frame: u64,
}

pub type CubeAnimation = AnimationState<3, 3>;
pub type TesseractAnimation = AnimationState<4, 6>;

impl<const N: usize, const P: usize> AnimationState<N, P> {
    pub fn new(
        planes: [RotationPlane; P],
        schedule: RotationSchedule<P>,
        perspective: Perspective<N>,
        viewport: Viewport,
    ) -> Self {
        let cube = Hypercube::new();
        let screen_points = vec![ScreenPoint::default(); cube.vertex_count()];
        Self {
            cube,
            planes,
            schedule,
            angles: AngleSet::zero(),
            perspective,
            viewport,
            screen_points,
            frame: 0,
        }
    }

    pub fn cube(&self) -> &Hypercube<N> {
        &self.cube
    }

    pub fn angles(&self) -> &AngleSet<P> {
        &self.angles
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pixel positions from the last projection, one per vertex
    pub fn screen_points(&self) -> &[ScreenPoint] {
        &self.screen_points
    }

    /// Step every plane angle by its delta
    pub fn advance(&mut self) {
        self.schedule.advance(&mut self.angles, self.frame);
        if self.frame == self.schedule.frozen_frames()
            && (0..P).any(|i| self.schedule.is_gated(i))
        {
            let released: Vec<&str> = (0..P)
                .filter(|&i| self.schedule.is_gated(i))
                .map(|i| self.planes[i].name())
                .collect();
            log::info!(
                "Frame {}: releasing rotation planes {}",
                self.frame,
                released.join(", ")
            );
        }
        self.frame += 1;
    }

    /// Rotate, project and map every canonical vertex to the screen
    pub fn project_vertices(&mut self) {
        for (vertex, point) in self.cube.vertices().iter().zip(self.screen_points.iter_mut()) {
            let mut v = *vertex;
            rotate(&mut v, &self.planes, &self.angles);
            *point = self.viewport.transform(self.perspective.project(&v));
        }
    }

    /// Clear the buffer and draw every edge in band order
    pub fn draw(&self, buffer: &mut PixelBuffer, palette: &Palette) {
        buffer.clear(palette.background);

        for band in EdgeBand::ALL {
            let color = palette.band(band);
            for edge in self.cube.band(band) {
                let a = self.screen_points[edge.start()];
                let b = self.screen_points[edge.end()];
                if buffer.in_bounds(a.x, a.y) && buffer.in_bounds(b.x, b.y) {
                    // SAFETY: both endpoints are inside the buffer, so every
                    // point of the line between them is too
                    unsafe { draw_line_unchecked(buffer, a.x, a.y, b.x, b.y, color) };
                } else {
                    draw_line(buffer, a.x, a.y, b.x, b.y, color);
                }
            }
        }
    }

    /// Advance, project and draw one frame
    pub fn tick(&mut self, buffer: &mut PixelBuffer, palette: &Palette) {
        self.advance();
        self.project_vertices();
        self.draw(buffer, palette);
        log::trace!("Frame {} angles {:?}", self.frame, self.angles.as_array());
    }
}

impl CubeAnimation {
    /// Tumbling 3D cube for a `width` x `height` viewport
    pub fn cube_for(width: u32, height: u32) -> Result<Self, PerspectiveError> {
        Ok(Self::new(
            PLANES_3D,
            CUBE_SCHEDULE,
            Perspective::uniform(EYE_DISTANCE)?,
            Viewport::new(width, height, Dimension::Three.scale_factor()),
        ))
    }
}

impl TesseractAnimation {
    /// Tumbling 4D tesseract for a `width` x `height` viewport
    pub fn tesseract_for(width: u32, height: u32) -> Result<Self, PerspectiveError> {
        Ok(Self::new(
            PLANES_4D,
            TESSERACT_SCHEDULE,
            Perspective::uniform(EYE_DISTANCE)?,
            Viewport::new(width, height, Dimension::Four.scale_factor()),
        ))
    }
}

impl<const N: usize, const P: usize> Wireframe for AnimationState<N, P> {
    fn dimension(&self) -> Dimension {
        if N == 3 {
            Dimension::Three
        } else {
            Dimension::Four
        }
    }

    fn frame(&self) -> u64 {
        self.frame
    }

    fn tick(&mut self, buffer: &mut PixelBuffer, palette: &Palette) {
        AnimationState::tick(self, buffer, palette);
    }

    fn vertex_count(&self) -> usize {
        self.cube.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.cube.edge_count()
    }
}

/// Build the animation for `dimension`
pub fn for_dimension(
    dimension: Dimension,
    width: u32,
    height: u32,
) -> Result<Box<dyn Wireframe>, PerspectiveError> {
    let wireframe: Box<dyn Wireframe> = match dimension {
        Dimension::Three => Box::new(CubeAnimation::cube_for(width, height)?),
        Dimension::Four => Box::new(TesseractAnimation::tesseract_for(width, height)?),
    };
    Ok(wireframe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_raster::PixelFormat;

    fn palette() -> Palette {
        Palette::map(PixelFormat::Rgb565)
    }

    #[test]
    fn test_cube_first_frame_angles() {
        let mut anim = CubeAnimation::cube_for(600, 600).unwrap();
        anim.advance();
        let angles = anim.angles().as_array();
        assert!((angles[0] - 0.07).abs() < 1e-12);
        assert!((angles[1] + 0.04).abs() < 1e-12);
        assert!((angles[2] - 0.01).abs() < 1e-12);
        assert_eq!(anim.frame(), 1);
    }

    #[test]
    fn test_tesseract_gate_holds_for_200_frames() {
        let mut anim = TesseractAnimation::tesseract_for(600, 600).unwrap();
        for _ in 0..FROZEN_FRAMES {
            anim.advance();
        }
        let angles = *anim.angles().as_array();
        // XW, YW, ZW untouched
        assert_eq!(angles[2], 0.0);
        assert_eq!(angles[4], 0.0);
        assert_eq!(angles[5], 0.0);
        assert!((angles[0] - 200.0 * 0.003).abs() < 1e-9);
        assert!((angles[3] - 200.0 * 0.009).abs() < 1e-9);

        anim.advance();
        let angles = anim.angles().as_array();
        assert!((angles[2] - 0.001).abs() < 1e-12);
        assert!((angles[4] + 0.005).abs() < 1e-12);
        assert!((angles[5] - 0.008).abs() < 1e-12);
    }

    #[test]
    fn test_unrotated_cube_projection() {
        let mut anim = CubeAnimation::cube_for(600, 600).unwrap();
        anim.project_vertices();
        // Vertex 1 is (1, 1, 1): factor 5/4, scale 600/6.5
        let p = anim.screen_points()[1];
        let expected: f64 = 300.0 + 1.25 * (600.0 / 6.5);
        assert_eq!(p.x, expected.round() as i32);
        assert_eq!(p.y, expected.round() as i32);
    }

    #[test]
    fn test_tick_draws_every_band() {
        let mut anim = TesseractAnimation::tesseract_for(600, 600).unwrap();
        let mut buffer = PixelBuffer::new(600, 600);
        let palette = palette();
        anim.tick(&mut buffer, &palette);

        assert!(buffer.count_color(palette.primary) > 0);
        assert!(buffer.count_color(palette.secondary) > 0);
        assert!(buffer.count_color(palette.bridge) > 0);
        assert!(buffer.count_color(palette.background) > 0);
    }

    #[test]
    fn test_draw_clears_previous_frame() {
        let mut anim = CubeAnimation::cube_for(600, 600).unwrap();
        let mut buffer = PixelBuffer::new(600, 600);
        let palette = palette();
        buffer.clear(0xffff);

        anim.tick(&mut buffer, &palette);
        assert_eq!(buffer.count_color(0xffff), 0);
        // Square edges, their z-offset copies and the four z bridges
        assert!(buffer.count_color(palette.primary) > 0);
        assert!(buffer.count_color(palette.secondary) > 0);
        assert!(buffer.count_color(palette.bridge) > 0);
    }

    #[test]
    fn test_offscreen_edges_are_clipped() {
        // A viewport much smaller than the projected cube
        let mut anim = CubeAnimation::new(
            PLANES_3D,
            CUBE_SCHEDULE,
            Perspective::uniform(EYE_DISTANCE).unwrap(),
            Viewport::new(40, 40, 1.0),
        );
        let mut buffer = PixelBuffer::new(40, 40);
        anim.tick(&mut buffer, &palette());
        assert_eq!(anim.screen_points().len(), 8);
    }

    #[test]
    fn test_canonical_vertices_unchanged_by_ticks() {
        let mut anim = TesseractAnimation::tesseract_for(600, 600).unwrap();
        let before = anim.cube().vertices().to_vec();
        let mut buffer = PixelBuffer::new(600, 600);
        for _ in 0..50 {
            anim.tick(&mut buffer, &palette());
        }
        assert_eq!(anim.cube().vertices(), before.as_slice());
    }

    #[test]
    fn test_for_dimension() {
        let cube = for_dimension(Dimension::Three, 600, 600).unwrap();
        assert_eq!(cube.dimension(), Dimension::Three);
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.edge_count(), 12);

        let tesseract = for_dimension(Dimension::Four, 600, 600).unwrap();
        assert_eq!(tesseract.dimension(), Dimension::Four);
        assert_eq!(tesseract.vertex_count(), 16);
        assert_eq!(tesseract.edge_count(), 32);
    }
}
