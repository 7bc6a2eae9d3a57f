use clap::Parser;
use glam::Vec3A;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_canvas_as_png;
use spherecast::camera::Camera;
use spherecast::canvas::Canvas;
use spherecast::color::Color;
use spherecast::light::Light;
use spherecast::scene::Scene;
use spherecast::sphere::Sphere;

/// Create the demo scene: three unit spheres under three light sources.
fn create_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(Sphere::new(Vec3A::new(0.0, -1.0, 3.0), 1.0, Color::new(255, 0, 0)));
    scene.add_sphere(Sphere::new(Vec3A::new(-2.0, 0.0, 4.0), 1.0, Color::new(0, 0, 255)));
    scene.add_sphere(Sphere::new(Vec3A::new(0.0, 0.0, 4.0), 1.0, Color::new(0, 255, 0)));

    scene.add_light(Light::Ambient { intensity: 0.2 });
    scene.add_light(Light::Point {
        intensity: 0.6,
        position: Vec3A::new(2.0, 1.0, 0.0),
    });
    scene.add_light(Light::Directional {
        intensity: 0.2,
        direction: Vec3A::new(1.0, 4.0, 4.0),
    });

    scene
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if !args.output.ends_with(".png") {
        log::error!(
            "Unsupported file extension '{}'. Only .png output is supported.",
            args.output
        );
        std::process::exit(1);
    }

    info!("Image resolution: {}x{}", args.width, args.height);

    let scene = create_scene();
    let camera = Camera {
        viewport_size: args.viewport_size,
        ..Camera::default()
    };

    let mut canvas = Canvas::new(args.width, args.height);
    camera.render(&scene, &mut canvas);

    save_canvas_as_png(&canvas, &args.output);
}
