use std::time::Duration;

use ratatui::style::Color;
use thiserror::Error;

/// Grid dimensions of one session, fixed at construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns how many cells the grid holds in total.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 28;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 16;

/// Base milliseconds between movement steps.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 200;

/// Hard floor on the step interval, in milliseconds.
pub const MIN_STEP_INTERVAL_MS: u64 = 50;

/// Step-interval multiplier applied each time food is eaten.
pub const SPEED_DECAY_FACTOR: f64 = 0.90;

/// Segment count of a freshly spawned snake.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Smallest playable grid side.
pub const MIN_GRID_SIDE: u16 = 5;

/// Construction-time parameters of one game session.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub grid: GridSize,
    /// Step interval a new session starts from.
    pub base_step_interval: Duration,
    /// Multiplier in `(0, 1]` applied to the interval per food eaten.
    pub speed_decay: f64,
    /// The interval never drops below this floor.
    pub min_step_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            base_step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            speed_decay: SPEED_DECAY_FACTOR,
            min_step_interval: Duration::from_millis(MIN_STEP_INTERVAL_MS),
        }
    }
}

impl EngineConfig {
    /// Checks the parameter ranges a session can actually be played with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width < MIN_GRID_SIDE || self.grid.height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
            });
        }

        if !(self.speed_decay > 0.0 && self.speed_decay <= 1.0) {
            return Err(ConfigError::DecayOutOfRange(self.speed_decay));
        }

        if self.min_step_interval > self.base_step_interval {
            return Err(ConfigError::FloorAboveBase {
                min_ms: self.min_step_interval.as_millis(),
                base_ms: self.base_step_interval.as_millis(),
            });
        }

        Ok(())
    }
}

/// Rejected construction parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small (both sides must be at least 5)")]
    GridTooSmall { width: u16, height: u16 },
    #[error("speed decay factor must be within (0.0, 1.0], got {0}")]
    DecayOutOfRange(f64),
    #[error("minimum step interval {min_ms} ms exceeds the base interval {base_ms} ms")]
    FloorAboveBase { min_ms: u128, base_ms: u128 },
    #[error("unknown theme {name:?} (available: classic, nokia, neon)")]
    UnknownTheme { name: String },
}

/// Color set applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub border: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-black theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border: Color::White,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Monochrome green LCD look of old handset snake games.
pub const THEME_NOKIA: Theme = Theme {
    name: "nokia",
    snake_head: Color::Rgb(0x32, 0x38, 0x3e),
    snake_body: Color::Rgb(0x32, 0x38, 0x3e),
    snake_tail: Color::Rgb(0x32, 0x38, 0x3e),
    food: Color::Rgb(0x32, 0x38, 0x3e),
    play_bg: Color::Rgb(0xc7, 0xf0, 0xd8),
    border: Color::Rgb(0x32, 0x38, 0x3e),
    hud_fg: Color::Rgb(0xc7, 0xf0, 0xd8),
    menu_title: Color::Rgb(0xc7, 0xf0, 0xd8),
    menu_footer: Color::DarkGray,
};

/// High-contrast magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::LightYellow,
    snake_body: Color::Magenta,
    snake_tail: Color::Gray,
    food: Color::LightCyan,
    play_bg: Color::Black,
    border: Color::Magenta,
    hud_fg: Color::Magenta,
    menu_title: Color::LightMagenta,
    menu_footer: Color::DarkGray,
};

/// Themes selectable from the CLI.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_NOKIA, THEME_NEON];

/// Looks a theme up by its name, case-insensitively.
pub fn theme_by_name(name: &str) -> Result<&'static Theme, ConfigError> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::UnknownTheme {
            name: name.to_owned(),
        })
}

/// Directional head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▒";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{ConfigError, EngineConfig, GridSize, theme_by_name};

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn undersized_grid_is_rejected() {
        let config = EngineConfig {
            grid: GridSize {
                width: 4,
                height: 16,
            },
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { width: 4, .. })
        ));
    }

    #[test]
    fn decay_factor_must_stay_in_range() {
        for decay in [0.0, -0.5, 1.5, f64::NAN] {
            let config = EngineConfig {
                speed_decay: decay,
                ..EngineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DecayOutOfRange(_))
            ));
        }
    }

    #[test]
    fn floor_above_base_interval_is_rejected() {
        let config = EngineConfig {
            base_step_interval: Duration::from_millis(40),
            ..EngineConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveBase { .. })
        ));
    }

    #[test]
    fn themes_resolve_by_name_case_insensitively() {
        assert_eq!(theme_by_name("classic").unwrap().name, "classic");
        assert_eq!(theme_by_name("Nokia").unwrap().name, "nokia");
        assert!(matches!(
            theme_by_name("plasma"),
            Err(ConfigError::UnknownTheme { .. })
        ));
    }
}
