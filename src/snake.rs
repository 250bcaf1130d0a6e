use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// One cell of the logical grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        (0..i32::from(bounds.width)).contains(&self.x)
            && (0..i32::from(bounds.height)).contains(&self.y)
    }

    /// Returns the neighboring cell one step away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wraps both coordinates back onto the torus.
    ///
    /// Movement off one edge reappears on the opposite edge, so coordinates
    /// never drift outside `0..width` / `0..height`.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }
}

/// Snake body plus its current and pending heading.
///
/// The pending heading is what the controller last requested; it becomes the
/// current heading only when the body advances, so a burst of requests between
/// ticks can never turn the snake back onto its own neck.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates the empty snake of a session that has not started.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            body: VecDeque::new(),
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Creates a `length`-segment snake with its head at `head`, the body
    /// trailing opposite to `direction`.
    #[must_use]
    pub fn spawn(head: Position, length: usize, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(length);
        body.push_back(head);
        for _ in 1..length {
            let trailing = body
                .back()
                .copied()
                .expect("body starts with the head segment");
            body.push_back(trailing.stepped(direction.opposite()));
        }

        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Builds a snake out of explicit segments, head first.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending: direction,
        }
    }

    /// Requests a heading change for the next advance.
    ///
    /// The exact opposite of the current heading is ignored; any other value
    /// overwrites the pending slot, last request wins.
    pub fn steer(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending = direction;
    }

    /// Returns the wrapped cell the head will occupy on the next advance.
    #[must_use]
    pub fn next_head(&self, bounds: GridSize) -> Position {
        self.head().stepped(self.pending).wrapped(bounds)
    }

    /// Makes the pending heading the current one.
    pub fn commit_heading(&mut self) {
        self.direction = self.pending;
    }

    /// Advances the body one cell along the pending heading.
    ///
    /// The tail is kept when `grow` is set, which is the only way the snake
    /// ever gets longer.
    pub fn advance(&mut self, bounds: GridSize, grow: bool) {
        debug_assert!(bounds.width > 0 && bounds.height > 0);

        self.commit_heading();
        let next = self.next_head(bounds);
        self.body.push_front(next);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Drops all segments and restores the default heading.
    pub fn clear(&mut self) {
        self.body.clear();
        self.direction = Direction::Right;
        self.pending = Direction::Right;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self.body.front().expect("an active snake has a head")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns the segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the heading applied on the last advance.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading the next advance will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Iterates over the body from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    #[test]
    fn wrapped_position_reenters_on_the_opposite_edge() {
        assert_eq!(
            Position { x: -1, y: 3 }.wrapped(BOUNDS),
            Position { x: 9, y: 3 }
        );
        assert_eq!(
            Position { x: 4, y: 8 }.wrapped(BOUNDS),
            Position { x: 4, y: 0 }
        );
        assert_eq!(
            Position { x: 10, y: -1 }.wrapped(BOUNDS),
            Position { x: 0, y: 7 }
        );
    }

    #[test]
    fn spawn_trails_body_behind_the_head() {
        let snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        let segments: Vec<_> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position { x: 5, y: 4 },
                Position { x: 4, y: 4 },
                Position { x: 3, y: 4 },
            ]
        );
    }

    #[test]
    fn advance_shifts_the_body_one_cell() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position { x: 6, y: 4 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position { x: 3, y: 4 }));
    }

    #[test]
    fn advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        snake.advance(BOUNDS, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position { x: 3, y: 4 }));
    }

    #[test]
    fn steer_rejects_reversal_of_current_heading() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        snake.steer(Direction::Left);
        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position { x: 6, y: 4 });
    }

    #[test]
    fn steer_is_last_request_wins() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        snake.advance(BOUNDS, false);

        assert_eq!(snake.head(), Position { x: 5, y: 5 });
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn reversal_guard_compares_against_current_not_pending() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Right);

        // Up is queued but has not been applied; Left still reverses the
        // current Right heading and must be dropped.
        snake.steer(Direction::Up);
        snake.steer(Direction::Left);

        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn next_head_wraps_across_the_edge() {
        let snake = Snake::spawn(Position { x: 0, y: 4 }, 1, Direction::Left);

        assert_eq!(snake.next_head(BOUNDS), Position { x: 9, y: 4 });
    }

    #[test]
    fn clear_empties_the_body_and_resets_heading() {
        let mut snake = Snake::spawn(Position { x: 5, y: 4 }, 3, Direction::Up);
        snake.steer(Direction::Left);

        snake.clear();

        assert!(snake.is_empty());
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }
}
