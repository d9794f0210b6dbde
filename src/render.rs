/// Rendering for Galactic Assault
///
/// The renderer is a thin adapter: it reads the world after the
/// simulation step and blits one sprite-sheet tile per entity. All
/// sprites live on a single shared sheet and are addressed by integer
/// (column, row) tile coordinates.
use crate::game::GameWorld;
use crate::ship::SHIP_TILE;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Side length of one sprite-sheet cell in pixels.
pub const TILE_SIZE: u32 = 16;

/// Blit a single 16x16 tile from the sprite sheet.
///
/// `tile` addresses the cell on the sheet; `x`/`y` are the destination in
/// logical screen units (the canvas scales them to the window).
pub fn draw_sprite(
    canvas: &mut Canvas<Window>,
    sprites: &Texture,
    tile: (i32, i32),
    x: f32,
    y: f32,
) -> Result<(), String> {
    let src = Rect::new(
        tile.0 * TILE_SIZE as i32,
        tile.1 * TILE_SIZE as i32,
        TILE_SIZE,
        TILE_SIZE,
    );
    let dest = Rect::new(x as i32, y as i32, TILE_SIZE, TILE_SIZE);

    canvas.copy(sprites, Some(src), Some(dest))
}

/// Draw the whole frame from the world's current state.
///
/// The world is read-only here; every gameplay decision already happened
/// in the simulation step.
pub fn render(
    canvas: &mut Canvas<Window>,
    sprites: &Texture,
    world: &GameWorld,
) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();

    // Ship
    draw_sprite(canvas, sprites, SHIP_TILE, world.ship.x, world.ship.y)?;

    // Remaining lives as ship icons in the top-left corner
    for i in 0..world.lives {
        draw_sprite(canvas, sprites, SHIP_TILE, 4.0 + 16.0 * i as f32, 4.0)?;
    }

    // Lasers
    for laser in &world.lasers {
        draw_sprite(canvas, sprites, laser.sprite_tile, laser.x, laser.y)?;
    }

    // Aliens and their shots
    for alien in &world.aliens {
        draw_sprite(canvas, sprites, alien.kind.sprite_tile(), alien.x, alien.y)?;
    }
    for shot in &world.alien_lasers {
        draw_sprite(canvas, sprites, shot.sprite_tile, shot.x, shot.y)?;
    }

    // Animations
    for animation in &world.animations {
        draw_sprite(
            canvas,
            sprites,
            animation.current_tile(),
            animation.x,
            animation.y,
        )?;
    }

    Ok(())
}
