//! Single sphere example.
//!
//! Renders one red sphere lit from above and saves it as a binary PPM.

use lancer_renderer::{
    color_to_rgb, colors, render_parallel, save_image, Camera, ImageFormat, Light, Material,
    Object, RenderConfig, Scene, Sphere, Vec3,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lancer - Single Sphere Example");
    println!("==============================");

    let light = Light::new(Vec3::new(500.0, -1000.0, 255.0), Vec3::splat(5.0e7))?;
    let scene = Scene::new(light).with_object(Object::new(
        Sphere::new(Vec3::new(500.0, 500.0, 500.0), 200.0)?,
        Material::diffuse(colors::RED),
    ));

    let camera = Camera::new(1000, 1000)?;
    let config = RenderConfig::default();
    let workers = std::thread::available_parallelism().map_or(4, |n| n.get());

    println!("Rendering {}x{} on {} workers...", camera.image_width, camera.image_height, workers);

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &scene, &config, workers, &|_: u32| {})?;
    println!("Rendered in {:?}", start.elapsed());

    let center = image.get(camera.image_width / 2, camera.image_height / 2);
    println!("Center pixel: {:?}", color_to_rgb(center));

    let filename = Path::new("single_sphere.ppm");
    save_image(&image, filename, ImageFormat::PpmBinary)?;
    println!("Saved to {}", filename.display());

    Ok(())
}
