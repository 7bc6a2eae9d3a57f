//! Sphere primitive and ray-sphere intersection.
//!
//! Solves the full quadratic for the two ray parameters where a ray meets
//! the sphere surface.

use glam::Vec3A;

use crate::color::Color;
use crate::ray::Ray;

/// Root pair reported when a ray misses a sphere.
///
/// Infinity is larger than any valid parameter, so misses compare as "never
/// closer" in the nearest-hit search.
pub const NO_HIT: (f32, f32) = (f32::INFINITY, f32::INFINITY);

/// Solid-colored sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Surface color before lighting is applied.
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            color,
        }
    }

    /// Solve for the ray parameters where the ray meets the sphere surface.
    ///
    /// Returns both roots of the quadratic, far root first; misses report
    /// [`NO_HIT`]. A degenerate zero-length direction divides to a non-finite
    /// value, which the nearest-hit search rejects by ordinary comparison.
    pub fn intersect(&self, ray: &Ray) -> (f32, f32) {
        let oc = ray.origin - self.center;

        // Quadratic equation coefficients
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);
        (t1, t2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_center_yields_both_surface_distances() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        let (t1, t2) = sphere.intersect(&ray);
        assert!((t1 - 6.0).abs() < 1e-4, "far root was {}", t1);
        assert!((t2 - 4.0).abs() < 1e-4, "near root was {}", t2);
    }

    #[test]
    fn passing_ray_misses() {
        // Closest approach is 3 units from the center, well past the radius
        let sphere = Sphere::new(Vec3A::new(0.0, 3.0, 5.0), 1.0, Color::new(255, 0, 0));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        assert_eq!(sphere.intersect(&ray), NO_HIT);
    }

    #[test]
    fn tangent_ray_reports_equal_roots() {
        let sphere = Sphere::new(Vec3A::new(0.0, 1.0, 5.0), 1.0, Color::new(255, 0, 0));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0));

        let (t1, t2) = sphere.intersect(&ray);
        assert!((t1 - 5.0).abs() < 1e-3);
        assert!((t2 - 5.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_direction_yields_non_finite_roots() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0));
        let ray = Ray::new(Vec3A::ZERO, Vec3A::ZERO);

        let (t1, t2) = sphere.intersect(&ray);
        assert!(!t1.is_finite());
        assert!(!t2.is_finite());
    }
}
