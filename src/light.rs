//! Light sources and local lighting evaluation.
//!
//! Implements the local model only: direct ambient, point, and directional
//! contributions, no shadows or secondary bounces.

use glam::Vec3A;

/// Light source variants for the local lighting model.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    /// Constant illumination applied to every surface point.
    Ambient {
        /// Light intensity.
        intensity: f32,
    },

    /// Light radiating from a fixed position in the scene.
    Point {
        /// Light intensity.
        intensity: f32,
        /// World-space position of the emitter.
        position: Vec3A,
    },

    /// Light arriving from a fixed direction, as from a distant emitter.
    Directional {
        /// Light intensity.
        intensity: f32,
        /// To-light direction, identical for every surface point.
        direction: Vec3A,
    },
}

/// Sum the scalar light intensity at a surface point.
///
/// `normal` must be unit length. Diffuse contributions scale with the angle
/// between the normal and the to-light vector; a surface facing away from a
/// light receives nothing from it, so the result is never negative. The sum
/// may exceed 1.0 when several lights overlap.
pub fn compute_lighting(point: Vec3A, normal: Vec3A, lights: &[Light]) -> f32 {
    let length_n = normal.length();
    let mut intensity = 0.0;

    for light in lights {
        match *light {
            Light::Ambient { intensity: i } => intensity += i,
            Light::Point { intensity: i, position } => {
                intensity += diffuse(normal, length_n, position - point, i);
            }
            Light::Directional { intensity: i, direction } => {
                intensity += diffuse(normal, length_n, direction, i);
            }
        }
    }

    intensity
}

/// Diffuse contribution of a single light arriving along `to_light`.
fn diffuse(normal: Vec3A, length_n: f32, to_light: Vec3A, intensity: f32) -> f32 {
    let n_dot_l = normal.dot(to_light);
    if n_dot_l > 0.0 {
        intensity * n_dot_l / (length_n * to_light.length())
    } else {
        0.0
    }
}
