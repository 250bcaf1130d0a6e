use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::GameEngine;

/// How long an updated score stays highlighted after food was eaten.
pub const SCORE_FLASH_DURATION: Duration = Duration::from_millis(900);

/// Frame-level values the HUD needs beyond engine state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub theme: &'a Theme,
    /// When the last food was eaten; drives the score highlight.
    pub score_flash: Option<Instant>,
    /// Wall-clock instant of this frame render.
    pub now: Instant,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    engine: &GameEngine,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let flashing = info
        .score_flash
        .is_some_and(|at| info.now.duration_since(at) < SCORE_FLASH_DURATION);

    frame.render_widget(
        Paragraph::new(hud_line(engine, flashing, usize::from(hud_area.width), info.theme))
            .alignment(Alignment::Right)
            .style(Style::new().fg(info.theme.hud_fg)),
        hud_area,
    );

    play_area
}

/// Builds the status line, dropping the leading fields when the terminal is
/// too narrow to show all of them.
fn hud_line(engine: &GameEngine, flashing: bool, max_width: usize, theme: &Theme) -> Line<'static> {
    let score_style = if flashing {
        Style::new().fg(theme.food).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(theme.hud_fg)
    };

    let score = Span::styled(format!("Score {}", engine.score), score_style);
    let high = Span::raw(format!("Hi {}", engine.high_score));

    let full = vec![
        Span::raw(format!("Len {}", engine.snake.len())),
        Span::raw("  "),
        Span::raw(format!("Speed {} ms", engine.speed.as_millis())),
        Span::raw("  "),
        score.clone(),
        Span::raw("  "),
        high.clone(),
        Span::raw(" "),
    ];
    if line_width(&full) <= max_width {
        return Line::from(full);
    }

    Line::from(vec![score, Span::raw("  "), high, Span::raw(" ")])
}

fn line_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|span| span.content.as_ref().width()).sum()
}

#[cfg(test)]
mod tests {
    use ratatui::text::Span;

    use crate::config::{EngineConfig, THEME_CLASSIC};
    use crate::game::GameEngine;

    use super::{hud_line, line_width};

    #[test]
    fn line_width_counts_display_columns() {
        let spans = [Span::raw("Score 12"), Span::raw("  "), Span::raw("Hi 40")];
        assert_eq!(line_width(&spans), 15);
    }

    #[test]
    fn narrow_terminals_fall_back_to_score_fields() {
        let mut engine = GameEngine::new_with_seed(EngineConfig::default(), 1);
        engine.start();

        let wide = hud_line(&engine, false, 80, &THEME_CLASSIC);
        let narrow = hud_line(&engine, false, 18, &THEME_CLASSIC);

        assert!(wide.spans.len() > narrow.spans.len());
        assert!(
            narrow
                .spans
                .iter()
                .any(|span| span.content.as_ref().starts_with("Score"))
        );
    }
}
