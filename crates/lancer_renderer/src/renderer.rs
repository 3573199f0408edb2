//! Frame rendering.
//!
//! - Sequential reference path (`render`)
//! - Row-partitioned parallel path on a fixed rayon pool (`render_parallel`)
//!
//! Both produce identical pixels: every pixel depends only on its own
//! primary ray and the read-only scene.

use crate::error::{RenderError, RenderResult};
use crate::rows::{partition_rows, RowRange};
use crate::shading::radiance;
use crate::Camera;
use lancer_core::{colors, Color, Scene};
use lancer_math::Interval;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Background color when the primary ray doesn't hit anything
    pub background: Color,
    /// Offset along the light direction where shadow rays start
    pub shadow_bias: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: colors::MAGENTA,
            shadow_bias: 0.1,
        }
    }
}

impl RenderConfig {
    /// Check the settings before rendering.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.shadow_bias >= 0.0 && self.shadow_bias.is_finite()) {
            return Err(RenderError::InvalidShadowBias(self.shadow_bias));
        }
        Ok(())
    }
}

/// Quantize one channel: clamp to [0, 255], round to nearest. NaN maps to 0.
#[inline]
pub fn channel_to_u8(c: f32) -> u8 {
    if c.is_nan() {
        return 0;
    }
    Interval::CHANNEL.clamp(c).round() as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Render a single pixel.
#[inline]
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    radiance(&camera.get_ray(x, y), scene, config)
}

/// Row-major image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the rows of `range` into `out`.
///
/// `out` holds exactly those rows, row-major. `on_row` is called with the
/// row index after each completed row.
pub fn render_rows(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    range: RowRange,
    out: &mut [Color],
    on_row: &(dyn Fn(u32) + Sync),
) {
    let width = camera.image_width as usize;
    debug_assert_eq!(out.len(), range.len() as usize * width);

    for (y, row) in range.rows().zip(out.chunks_exact_mut(width)) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(camera, scene, x as u32, y, config);
        }
        on_row(y);
    }
}

/// Render the entire scene on the calling thread.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<FrameBuffer> {
    config.validate()?;

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);
    let all_rows = RowRange::new(0, camera.image_height, 0);
    render_rows(camera, scene, config, all_rows, &mut image.pixels, &|_: u32| {});

    Ok(image)
}

/// Render the scene with `workers` threads, one contiguous band of rows each.
///
/// The frame buffer is split into disjoint slices up front; the call
/// returns once every worker has finished.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    workers: usize,
    on_row: &(dyn Fn(u32) + Sync),
) -> RenderResult<FrameBuffer> {
    config.validate()?;
    let ranges = partition_rows(camera.image_height, workers)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("lancer-worker-{}", i))
        .build()
        .map_err(|e| RenderError::ThreadPool(e.to_string()))?;

    log::debug!(
        "Rendering {}x{} on {} workers: {:?}",
        camera.image_width,
        camera.image_height,
        workers,
        ranges.iter().map(|r| r.rows()).collect::<Vec<_>>()
    );

    let mut image = FrameBuffer::new(camera.image_width, camera.image_height);
    let width = camera.image_width;

    let mut bands = Vec::with_capacity(ranges.len());
    let mut remaining: &mut [Color] = &mut image.pixels;
    for range in &ranges {
        let band_len = range.pixel_range(width).len();
        let (band, rest) = std::mem::take(&mut remaining).split_at_mut(band_len);
        bands.push(band);
        remaining = rest;
    }

    // Scope end is the join barrier
    pool.scope(|s| {
        for (range, band) in ranges.iter().copied().zip(bands) {
            s.spawn(move |_| render_rows(camera, scene, config, range, band, on_row));
        }
    });

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{write_ppm, ImageFormat};
    use lancer_core::{Light, Material, Object, Sphere};
    use lancer_math::Vec3;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// A scene framed for a 64x48 image.
    fn small_scene() -> Scene {
        let light = Light::new(Vec3::new(30.0, -20.0, 20.0), Vec3::splat(50_000.0)).unwrap();
        let sphere = |center: Vec3, radius: f32, color: Color| {
            Object::new(Sphere::new(center, radius).unwrap(), Material::diffuse(color))
        };

        Scene::new(light)
            .with_object(sphere(Vec3::new(32.0, 24.0, 60.0), 15.0, colors::WHITE))
            .with_object(sphere(Vec3::new(14.0, 20.0, 35.0), 6.0, colors::RED))
            .with_object(sphere(Vec3::new(32.0, 1040.0, 60.0), 1000.0, colors::BLUE))
    }

    fn small_camera() -> Camera {
        Camera::new(64, 48).unwrap().with_lens(1.1, 50.0).unwrap()
    }

    #[test]
    fn test_frame_buffer_row_major() {
        let mut image = FrameBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);
        assert_eq!(image.get(3, 2), colors::BLACK);

        image.pixels[11] = colors::RED;
        image.pixels[4] = colors::BLUE;
        assert_eq!(image.get(3, 2), colors::RED);
        assert_eq!(image.get(0, 1), colors::BLUE);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::new(0.0, 127.5, 255.0)), [0, 128, 255]);
        assert_eq!(color_to_rgb(Color::new(-20.0, 300.0, 12.4)), [0, 255, 12]);
        assert_eq!(color_to_rgb(Color::new(f32::NAN, f32::INFINITY, 0.49)), [0, 255, 0]);
    }

    #[test]
    fn test_render_pixel_matches_radiance() {
        let camera = small_camera();
        let scene = small_scene();
        let config = RenderConfig::default();

        let color = render_pixel(&camera, &scene, 32, 24, &config);
        assert_eq!(color, radiance(&camera.get_ray(32, 24), &scene, &config));
        assert_ne!(color, config.background);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let camera = small_camera();
        let scene = small_scene();
        let config = RenderConfig::default();

        let sequential = render(&camera, &scene, &config).unwrap();
        let mut reference = Vec::new();
        write_ppm(&sequential, ImageFormat::PpmBinary, &mut reference).unwrap();

        // 64 workers > 48 rows exercises empty bands
        for workers in [1, 2, 3, 7, 64] {
            let parallel =
                render_parallel(&camera, &scene, &config, workers, &|_: u32| {}).unwrap();
            assert_eq!(parallel, sequential, "workers = {}", workers);

            let mut bytes = Vec::new();
            write_ppm(&parallel, ImageFormat::PpmBinary, &mut bytes).unwrap();
            assert_eq!(bytes, reference);
        }
    }

    #[test]
    fn test_every_row_reported_once() {
        let camera = small_camera();
        let counts: Vec<AtomicU32> = (0..camera.image_height).map(|_| AtomicU32::new(0)).collect();

        render_parallel(&camera, &small_scene(), &RenderConfig::default(), 5, &|y: u32| {
            counts[y as usize].fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert!(counts.iter().all(|c| c.load(Ordering::Relaxed) == 1));
    }

    #[test]
    fn test_render_rejects_bad_config() {
        let camera = small_camera();
        let scene = small_scene();

        assert_eq!(
            render_parallel(&camera, &scene, &RenderConfig::default(), 0, &|_: u32| {}),
            Err(RenderError::NoWorkers)
        );

        let config = RenderConfig {
            shadow_bias: -1.0,
            ..Default::default()
        };
        assert_eq!(
            render(&camera, &scene, &config),
            Err(RenderError::InvalidShadowBias(-1.0))
        );
    }
}
