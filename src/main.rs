use sdl2::image::LoadTexture;
use std::time::Instant;

mod alien;
mod animation;
mod collision;
mod game;
mod input_system;
mod laser;
mod render;
mod ship;

use animation::AnimationConfig;
use game::{FrameTime, GameWorld};
use input_system::InputSystem;

// Logical screen size; the canvas scales it to the window
pub const SCREEN_WIDTH: f32 = 312.0;
pub const SCREEN_HEIGHT: f32 = 256.0;
/// Horizontal margin the ship and the alien formation stay inside.
pub const PADDING: f32 = 20.0;

const MUS_PER_SEC: i64 = 1_000_000;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let max_scale_w = usable_w / SCREEN_WIDTH as i32;
            let max_scale_h = usable_h / SCREEN_HEIGHT as i32;

            // Use smaller scale to ensure both dimensions fit
            let scale = max_scale_w.min(max_scale_h);

            // Clamp to reasonable range (2x minimum, 6x maximum)
            scale.clamp(2, 6) as u32
        }
        Err(_) => {
            // Fallback to 2x if monitor detection fails
            println!("Warning: Could not detect monitor size, using 2x scale");
            2
        }
    }
}

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Calculate window scale based on monitor size
    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = SCREEN_WIDTH as u32 * window_scale;
    let window_height = SCREEN_HEIGHT as u32 * window_scale;

    println!(
        "Monitor scale: {}x (window: {}x{})",
        window_scale, window_width, window_height
    );

    let window = video_subsystem
        .window("Galactic Assault", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic pixel-perfect scaling
    canvas
        .set_logical_size(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Load animation configuration
    let animation_config = AnimationConfig::load_from_file("assets/config/animations.json")
        .map_err(|e| format!("Failed to load animation config: {}", e))?;

    // Load the shared sprite sheet; nothing can be drawn without it
    let sprites = load_texture(&texture_creator, "assets/sprites.png")?;

    let mut input_system = InputSystem::new();
    let mut world = GameWorld::new(animation_config.explosion);
    let mut rng = rand::thread_rng();

    println!("Controls:");
    println!("A/D or Left/Right - Move ship");
    println!("Space - Fire");

    // Frame clock bookkeeping
    let clock = Instant::now();
    let mut last_frame: i64 = 0;
    let mut last_second: i64 = 0;
    let mut frames: u32 = 0;

    'running: loop {
        // Sample the monotonic clock once per iteration
        let now = clock.elapsed().as_micros() as i64;
        let delta_mus = now - last_frame;
        last_frame = now;
        let time = FrameTime {
            now_mus: now,
            delta_mus,
            delta: delta_mus as f32 / MUS_PER_SEC as f32,
        };
        frames += 1;

        // Once-per-second FPS sample
        let report_frame = now - last_second > MUS_PER_SEC;
        if report_frame {
            last_second = now;
            println!("FPS: {}  Delta: {}mus", frames, time.delta_mus);
            frames = 0;
        }

        // Input
        if input_system.poll_events(&mut event_pump) {
            break 'running;
        }

        // Simulation step
        let update_start = clock.elapsed().as_micros() as i64;
        world.update(&mut input_system.input, &time, &mut rng);
        let update_time = clock.elapsed().as_micros() as i64 - update_start;

        // Render
        let render_start = clock.elapsed().as_micros() as i64;
        render::render(&mut canvas, &sprites, &world)?;
        canvas.present();
        let render_time = clock.elapsed().as_micros() as i64 - render_start;

        if report_frame {
            println!("  Update: {}mus", update_time);
            println!("  Render: {}mus", render_time);
        }

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }

    Ok(())
}
