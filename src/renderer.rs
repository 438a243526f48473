//! Tile-parallel dispatch: partitions the image, spawns worker threads that
//! pull tiles from a shared atomic queue, and joins them before handing
//! back the finished film.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::film::Film;
use crate::rng::Pcg32;
use crate::scene::Scene;
use crate::tile::TileQueue;
use crate::tracer;
use crate::vec3::Color;

pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub tile_size: u32,
    pub worker_count: usize,
    pub global_seed: u64,
}

impl RenderConfig {
    /// `worker_count = 0` is resolved to `std::thread::available_parallelism()`.
    pub fn resolved_worker_count(&self) -> usize {
        if self.worker_count == 0 {
            std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        } else {
            self.worker_count
        }
    }
}

/// Raw-pointer wrapper granting cross-thread write access to disjoint tiles
/// of the same `Film`. Safe only because the tile partition guarantees no
/// two workers ever touch the same pixel; that invariant is not checked by
/// the type system and must be preserved by every caller of `write`.
struct FilmSlice(*mut Film);

unsafe impl Send for FilmSlice {}
unsafe impl Sync for FilmSlice {}

impl FilmSlice {
    unsafe fn write(&self, x: u32, y: u32, color: Color) {
        (*self.0).pixel(x, y, color);
    }
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders `scene` as seen by `camera`, returning the completed film.
    pub fn render(&self, camera: &Camera, scene: &Scene) -> Film {
        let config = &self.config;
        let mut film = Film::new(config.width, config.height);
        let queue = TileQueue::new(config.width, config.height, config.tile_size);
        let worker_count = config.resolved_worker_count();

        info!(
            "render start: {}x{} spp={} max_depth={} workers={} seed={}",
            config.width, config.height, config.samples_per_pixel, config.max_depth, worker_count, config.global_seed
        );
        let started = Instant::now();

        let film_slice = FilmSlice(&mut film as *mut Film);
        std::thread::scope(|scope| {
            for worker_id in 0..worker_count {
                let film_slice = &film_slice;
                let queue = &queue;
                scope.spawn(move || {
                    let mut rng = Pcg32::new(config.global_seed, worker_id as u64);
                    while let Some(tile) = queue.next() {
                        for y in tile.y0..tile.y1 {
                            for x in tile.x0..tile.x1 {
                                let mut accum = Color::zero();
                                for _ in 0..config.samples_per_pixel {
                                    let ray = camera.shoot_ray(x, y, &mut rng);
                                    accum += tracer::trace_ray(ray, scene, &mut rng, config.max_depth);
                                }
                                let color = accum / config.samples_per_pixel as f32;
                                unsafe { film_slice.write(x, y, color) };
                            }
                        }
                    }
                });
            }
        });

        let elapsed = started.elapsed();
        let total_rays = config.width as u64 * config.height as u64 * config.samples_per_pixel as u64;
        let mrays_per_sec = total_rays as f64 / elapsed.as_secs_f64().max(1e-9) / 1e6;
        info!("render done in {:.2?} ({:.2} Mrays/s)", elapsed, mrays_per_sec);

        film
    }

    /// Renders and writes the result to `path` as a PPM file.
    pub fn render_to_file(&self, camera: &Camera, scene: &Scene, path: &Path) -> Result<(), RenderError> {
        let film = self.render(camera, scene);
        film.write_ppm(path)?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;
    use crate::vec3::{Point3, Vec3};

    fn test_camera(width: u32, height: u32) -> Camera {
        Camera::new(CameraConfig {
            look_from: Point3::new(0.0, 0.0, 0.0),
            look_at: Point3::new(0.0, 0.0, -1.0),
            v_up: Vec3::unit_y(),
            image_width: width,
            image_height: height,
            v_fov_degrees: 60.0,
            aperture: 0.0,
            focus_distance: 1.0,
        })
    }

    #[test]
    fn render_produces_a_film_of_the_requested_size() {
        let mut scene = Scene::new();
        let mat = scene.add_diffuse(Color::splat(0.5));
        scene.add_sphere(Point3::new(0.0, 0.0, -5.0), 1.0, mat);
        scene.build();

        let camera = test_camera(16, 12);
        let renderer = Renderer::new(RenderConfig {
            width: 16,
            height: 12,
            samples_per_pixel: 2,
            max_depth: 4,
            tile_size: 8,
            worker_count: 2,
            global_seed: 7,
        });

        let film = renderer.render(&camera, &scene);
        assert_eq!(film.width(), 16);
        assert_eq!(film.height(), 12);
    }

    #[test]
    fn same_seed_and_worker_count_is_deterministic() {
        let mut scene = Scene::new();
        let mat = scene.add_diffuse(Color::splat(0.5));
        scene.add_sphere(Point3::new(0.0, 0.0, -5.0), 1.0, mat);
        scene.build();

        let camera = test_camera(16, 12);
        let make_renderer = || {
            Renderer::new(RenderConfig {
                width: 16,
                height: 12,
                samples_per_pixel: 4,
                max_depth: 4,
                tile_size: 4,
                worker_count: 1,
                global_seed: 42,
            })
        };

        let a = make_renderer().render(&camera, &scene);
        let b = make_renderer().render(&camera, &scene);
        for y in 0..12 {
            for x in 0..16 {
                assert_eq!(a.get(x, y), b.get(x, y));
            }
        }
    }
}
