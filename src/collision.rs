/// Collision detection for Galactic Assault
///
/// This module provides AABB (Axis-Aligned Bounding Box) detection over
/// floating-point rectangles. Every entity that can be hit exposes a
/// `hitbox()` built from its position and size, and all hit tests go
/// through the single `overlaps()` function.
///
/// # Architecture
///
/// - `Hitbox`: position + size rectangle in screen units
/// - `overlaps()`: pure function for rectangle intersection detection

/// An axis-aligned bounding box in screen units.
///
/// Positions are floats because entity movement is integrated from frame
/// delta time; the box matches the entity exactly as drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Hitbox {
            x,
            y,
            width,
            height,
        }
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// The comparisons are strict, so rectangles that merely touch along an
/// edge do NOT count as overlapping (zero-area contact is not a hit).
///
/// # Example
///
/// ```rust
/// let laser_box = Hitbox::new(102.0, 101.0, 2.0, 7.0);
/// let alien_box = Hitbox::new(100.0, 100.0, 12.0, 8.0);
///
/// if overlaps(&laser_box, &alien_box) {
///     // mark both for removal
/// }
/// ```
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    // Check for intersection on both axes
    let x_overlap = a.x < b.x + b.width && a.x + a.width > b.x;
    let y_overlap = a.y < b.y + b.height && a.y + a.height > b.y;

    x_overlap && y_overlap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_intersecting() {
        let box_a = Hitbox::new(0.0, 0.0, 32.0, 32.0);
        let box_b = Hitbox::new(16.0, 16.0, 32.0, 32.0);

        assert!(overlaps(&box_a, &box_b));
        assert!(overlaps(&box_b, &box_a)); // Symmetric
    }

    #[test]
    fn test_overlaps_touching_edges() {
        // Rectangles touching at edges should NOT overlap (boundary case)
        let box_a = Hitbox::new(0.0, 0.0, 32.0, 32.0);
        let box_b = Hitbox::new(32.0, 0.0, 32.0, 32.0); // Touching right edge

        assert!(!overlaps(&box_a, &box_b));
    }

    #[test]
    fn test_overlaps_separated() {
        let box_a = Hitbox::new(0.0, 0.0, 32.0, 32.0);
        let box_b = Hitbox::new(100.0, 100.0, 32.0, 32.0);

        assert!(!overlaps(&box_a, &box_b));
    }

    #[test]
    fn test_overlaps_contained() {
        // Small rectangle completely inside larger one
        let large = Hitbox::new(0.0, 0.0, 100.0, 100.0);
        let small = Hitbox::new(25.0, 25.0, 50.0, 50.0);

        assert!(overlaps(&large, &small));
        assert!(overlaps(&small, &large));
    }
}
