//! Nearest-hit resolution and shading for a single ray.

use crate::color::Color;
use crate::interval::Interval;
use crate::light::compute_lighting;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Color returned for rays that hit no sphere.
pub const BACKGROUND: Color = Color::WHITE;

/// Near-plane clip: a hit must lie strictly beyond the projection plane.
///
/// Excludes the plane itself and anything behind the camera.
pub const T_MIN: f32 = 1.0;

/// Trace a single ray against every sphere and shade the nearest hit.
///
/// A root qualifies only when the window (near-plane clip, closest so far)
/// strictly surrounds it, so equal parameters keep the first sphere in scene
/// order and non-finite roots never qualify. Returns the unclamped shaded
/// color, or the background color when nothing qualifies.
pub fn trace_ray(scene: &Scene, ray: &Ray) -> Color {
    let mut closest_t = f32::INFINITY;
    let mut closest_sphere: Option<&Sphere> = None;

    for sphere in &scene.spheres {
        let (t1, t2) = sphere.intersect(ray);
        if Interval::new(T_MIN, closest_t).surrounds(t1) {
            closest_t = t1;
            closest_sphere = Some(sphere);
        }
        if Interval::new(T_MIN, closest_t).surrounds(t2) {
            closest_t = t2;
            closest_sphere = Some(sphere);
        }
    }

    match closest_sphere {
        Some(sphere) => {
            let point = ray.at(closest_t);
            let normal = (point - sphere.center).normalize();
            let intensity = compute_lighting(point, normal, &scene.lights);
            sphere.color.scale(intensity)
        }
        None => BACKGROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::sphere::Sphere;
    use glam::Vec3A;

    fn center_ray() -> Ray {
        Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn empty_scene_resolves_to_background() {
        let scene = Scene::new();
        assert_eq!(trace_ray(&scene, &center_ray()), BACKGROUND);
    }

    #[test]
    fn ambient_lit_sphere_is_shaded_by_its_intensity() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, -1.0, 3.0), 1.0, Color::new(255, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 0.2 });

        // The center ray grazes the red sphere at (0, 0, 3)
        let color = trace_ray(&scene, &center_ray());
        assert_eq!(color, Color::new(51, 0, 0));
    }

    #[test]
    fn sphere_inside_near_plane_is_clipped() {
        let mut scene = Scene::new();
        // Both roots fall at or below t = 1, between camera and plane
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 0.5), 0.3, Color::new(255, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        assert_eq!(trace_ray(&scene, &center_ray()), BACKGROUND);
    }

    #[test]
    fn nearest_sphere_wins() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 10.0), 1.0, Color::new(0, 0, 255)));
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        assert_eq!(trace_ray(&scene, &center_ray()), Color::new(255, 0, 0));
    }

    #[test]
    fn equal_hits_keep_the_first_sphere_in_scene_order() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(0, 255, 0)));
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        assert_eq!(trace_ray(&scene, &center_ray()), Color::new(0, 255, 0));
    }

    #[test]
    fn zero_length_direction_resolves_to_background() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 1.0 });

        let degenerate = Ray::new(Vec3A::ZERO, Vec3A::ZERO);
        assert_eq!(trace_ray(&scene, &degenerate), BACKGROUND);
    }

    #[test]
    fn shading_result_may_exceed_the_display_range() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 5.0), 1.0, Color::new(200, 0, 0)));
        scene.add_light(Light::Ambient { intensity: 2.0 });

        let color = trace_ray(&scene, &center_ray());
        assert_eq!(color.r, 400);
        assert_eq!(color.clamp(), Color::new(255, 0, 0));
    }
}
