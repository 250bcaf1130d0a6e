use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws attempted before giving up on sampling.
const MAX_SAMPLE_ATTEMPTS: u32 = 32;

/// Picks a cell for new food that the snake does not occupy.
///
/// While the snake covers less than half the grid, cells are drawn uniformly
/// at random and re-drawn on a hit, bounded by [`MAX_SAMPLE_ATTEMPTS`]. On a
/// denser board (or when sampling runs out of attempts) every free cell is
/// enumerated and one is picked uniformly, so placement terminates no matter
/// how full the board is. Returns `None` only when no free cell exists.
#[must_use]
pub fn place<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Position> {
    let total = bounds.total_cells();
    if snake.len() * 2 < total {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }
    }

    free_cell(rng, bounds, snake)
}

/// Enumerates all unoccupied cells and picks one uniformly.
fn free_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    Some(candidates[rng.gen_range(0..candidates.len())])
}
