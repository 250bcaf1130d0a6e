use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the start screen over the play field.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32, theme: &Theme) {
    let lines = vec![
        Line::styled(
            "TORUS SNAKE",
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("High score: {high_score}")),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q] Quit"),
        Line::from(""),
        Line::styled(
            "Arrows/WASD steer; the edges wrap around",
            Style::new().fg(theme.menu_footer),
        ),
    ];

    render_popup(frame, area, " start ", lines, theme);
}

/// Draws the pause overlay.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over overlay with the final session numbers.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    board_cleared: bool,
    theme: &Theme,
) {
    let is_new_high = score > high_score;
    let title = if board_cleared {
        "YOU FILLED THE BOARD"
    } else {
        "GAME OVER"
    };

    let mut lines = vec![
        Line::styled(
            title,
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {}", high_score.max(score))),
    ];
    if is_new_high {
        lines.push(Line::from("New high score!"));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter]/[Space] Play Again"));
    lines.push(Line::from("[Q] Quit"));

    render_popup(frame, area, " game over ", lines, theme);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    theme: &Theme,
) {
    let popup = popup_rect(area, &lines);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_title))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(theme.border)),
            ),
        popup,
    );
}

/// Centers a popup sized to its content, clamped to the available area.
fn popup_rect(area: Rect, lines: &[Line<'_>]) -> Rect {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(area.width);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::text::Line;

    use super::popup_rect;

    #[test]
    fn popup_is_sized_by_its_widest_line_and_centered() {
        let lines = [Line::from("PAUSED"), Line::from("[P] Resume")];
        let popup = popup_rect(Rect::new(0, 0, 40, 20), &lines);

        // Widest line is 10 columns; 2 columns padding plus the border each side.
        assert_eq!(popup.width, 14);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 13);
        assert_eq!(popup.y, 8);
    }

    #[test]
    fn popup_never_exceeds_the_available_area() {
        let lines = [Line::from("a line wider than the whole terminal area")];
        let popup = popup_rect(Rect::new(0, 0, 12, 3), &lines);

        assert_eq!(popup.width, 12);
        assert_eq!(popup.height, 3);
    }
}
