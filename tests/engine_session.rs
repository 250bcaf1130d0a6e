use std::time::Duration;

use torus_snake::config::{EngineConfig, GridSize};
use torus_snake::game::{GameEngine, GameStatus, StepOutcome};
use torus_snake::input::Direction;
use torus_snake::snake::{Position, Snake};

#[test]
fn scripted_session_from_start_screen_to_reset() {
    let config = EngineConfig {
        grid: GridSize {
            width: 6,
            height: 4,
        },
        ..EngineConfig::default()
    };
    let mut engine = GameEngine::new_with_seed(config, 42);

    // Start screen: empty snake, no food, stepping does nothing.
    assert_eq!(engine.status, GameStatus::NotStarted);
    assert!(engine.snake.is_empty());
    assert_eq!(engine.step(), StepOutcome::Idle);

    engine.start();
    assert_eq!(engine.status, GameStatus::Running);
    assert_eq!(engine.snake.len(), 3);
    let food = engine.food.expect("a running session always has food");
    assert!(!engine.snake.occupies(food));

    // Swap in a scripted board so the rest of the run is deterministic.
    engine.snake = Snake::from_segments(
        vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
        Direction::Right,
    );
    engine.food = Some(Position { x: 2, y: 1 });

    assert_eq!(engine.step(), StepOutcome::AteFood);
    assert_eq!(engine.score, 1);
    assert_eq!(engine.snake.len(), 3);
    assert_eq!(engine.snake.head(), Position { x: 2, y: 1 });
    assert_eq!(engine.speed, Duration::from_millis(180));

    // Park the respawned food out of the scripted path.
    engine.food = Some(Position { x: 5, y: 2 });

    engine.request_direction(Direction::Up);
    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.snake.head(), Position { x: 2, y: 0 });

    // Crossing the top edge reappears at the bottom.
    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.snake.head(), Position { x: 2, y: 3 });
    assert_eq!(engine.status, GameStatus::Running);

    // Pausing gates stepping but keeps a queued turn ready.
    engine.toggle_pause();
    assert_eq!(engine.step(), StepOutcome::Idle);
    engine.request_direction(Direction::Left);
    engine.toggle_pause();
    assert_eq!(engine.step(), StepOutcome::Moved);
    assert_eq!(engine.snake.head(), Position { x: 1, y: 3 });

    engine.reset();
    assert_eq!(engine.status, GameStatus::NotStarted);
    assert!(engine.snake.is_empty());
    assert_eq!(engine.food, None);
    assert_eq!(engine.high_score, 1);

    engine.reset();
    assert_eq!(engine.high_score, 1);
}
