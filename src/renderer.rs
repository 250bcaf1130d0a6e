use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GridSize, Theme,
};
use crate::game::{GameEngine, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders one full frame from immutable engine state.
pub fn render(frame: &mut Frame<'_>, engine: &GameEngine, info: &HudInfo<'_>) {
    let theme = info.theme;
    let area = frame.area();
    let play_area = render_hud(frame, area, engine, info);
    let viewport = grid_viewport(play_area, engine.bounds());

    let block = Block::bordered().border_style(Style::new().fg(theme.border));
    let inner = block.inner(viewport);
    frame.render_widget(block, viewport);
    frame
        .buffer_mut()
        .set_style(inner, Style::new().bg(theme.play_bg));

    render_food(frame, inner, engine, theme);
    render_snake(frame, inner, engine, theme);

    match engine.status {
        GameStatus::NotStarted => {
            render_start_menu(frame, play_area, engine.high_score, theme);
        }
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => {
            let board_cleared = engine.snake.len() == engine.bounds().total_cells();
            render_game_over_menu(
                frame,
                play_area,
                engine.score,
                engine.high_score,
                board_cleared,
                theme,
            );
        }
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, engine: &GameEngine, theme: &Theme) {
    let Some(food) = engine.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, engine.bounds(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, engine: &GameEngine, theme: &Theme) {
    if engine.snake.is_empty() {
        return;
    }

    let head = engine.snake.head();
    let tail = engine.snake.segments().last().copied();
    let bounds = engine.bounds();

    let buffer = frame.buffer_mut();
    for segment in engine.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(engine.snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers a bordered viewport for the logical grid inside `area`, clipping
/// when the terminal is smaller than the grid.
fn grid_viewport(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_add(2).min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
}

fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x = inner.x.checked_add(u16::try_from(position.x).ok()?)?;
    let y = inner.y.checked_add(u16::try_from(position.y).ok()?)?;

    (x < inner.right() && y < inner.bottom()).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{cell_to_terminal, grid_viewport};

    const BOUNDS: GridSize = GridSize {
        width: 28,
        height: 16,
    };

    #[test]
    fn viewport_is_centered_and_grid_sized() {
        let area = Rect::new(0, 0, 80, 24);
        let viewport = grid_viewport(area, BOUNDS);

        assert_eq!(viewport.width, 30);
        assert_eq!(viewport.height, 18);
        assert_eq!(viewport.x, 25);
        assert_eq!(viewport.y, 3);
    }

    #[test]
    fn viewport_clips_to_small_terminals() {
        let area = Rect::new(0, 0, 20, 10);
        let viewport = grid_viewport(area, BOUNDS);

        assert_eq!(viewport.width, 20);
        assert_eq!(viewport.height, 10);
    }

    #[test]
    fn cells_outside_the_visible_window_are_skipped() {
        let inner = Rect::new(1, 1, 10, 5);

        assert_eq!(
            cell_to_terminal(inner, BOUNDS, Position { x: 0, y: 0 }),
            Some((1, 1))
        );
        assert_eq!(cell_to_terminal(inner, BOUNDS, Position { x: 20, y: 2 }), None);
        assert_eq!(cell_to_terminal(inner, BOUNDS, Position { x: -1, y: 2 }), None);
    }
}
