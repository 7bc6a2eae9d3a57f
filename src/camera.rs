//! Camera, viewport mapping, and the per-pixel render loop.

use glam::Vec3A;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::canvas::{centered_to_raster, PixelSink};
use crate::color::Color;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::trace_ray;

/// Pinhole camera casting one primary ray per output pixel.
///
/// The projection is axis-aligned: every ray leaves `position` toward a
/// virtual viewport plane at `projection_plane_distance` along +z. There is
/// no camera rotation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Origin of all primary rays.
    pub position: Vec3A,
    /// Edge length of the square viewport plane in world units.
    pub viewport_size: f32,
    /// Distance from the camera to the viewport plane along +z.
    pub projection_plane_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3A::ZERO,
            viewport_size: 10.0,
            projection_plane_distance: 1.0,
        }
    }
}

impl Camera {
    /// Map a center-origin pixel coordinate onto the viewport plane.
    ///
    /// Both axes divide by the grid width, which assumes square output. The
    /// returned direction is not normalized; downstream math tolerates that.
    pub fn viewport_direction(&self, x: i32, y: i32, width: u32) -> Vec3A {
        Vec3A::new(
            x as f32 * self.viewport_size / width as f32,
            y as f32 * self.viewport_size / width as f32,
            self.projection_plane_distance,
        )
    }

    /// Render the scene into the pixel sink, one ray per pixel.
    ///
    /// Rows are shaded in parallel; each row is a pure computation over the
    /// immutable scene, and the collected results are written afterwards in
    /// a single ordered pass. Colors are clamped exactly once, here, before
    /// the write.
    pub fn render<S: PixelSink>(&self, scene: &Scene, sink: &mut S) {
        let width = sink.width();
        let height = sink.height();
        let half_w = width as i32 / 2;
        let half_h = height as i32 / 2;

        info!(
            "Rendering {}x{} using {} CPU cores...",
            width,
            height,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(height as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

        let rows: Vec<Vec<Color>> = (-half_h..half_h)
            .into_par_iter()
            .map(|y| {
                let row = (-half_w..half_w)
                    .map(|x| {
                        let ray = Ray::new(self.position, self.viewport_direction(x, y, width));
                        trace_ray(scene, &ray).clamp()
                    })
                    .collect();
                pb.inc(1);
                row
            })
            .collect();

        for (row, y) in rows.iter().zip(-half_h..half_h) {
            for (color, x) in row.iter().zip(-half_w..half_w) {
                let (raster_x, raster_y) = centered_to_raster(x, y, width, height);
                sink.set_pixel(raster_x, raster_y, *color);
            }
        }

        pb.finish();
        info!("Frame rendered in {:.2?}", generation_start.elapsed());
    }
}
