use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 24, 20);
    pub const BG_SURFACE: Color = Color::Rgb(28, 36, 30);
    pub const BORDER_DIM: Color = Color::Rgb(60, 72, 64);
    pub const TEXT_PRIMARY: Color = Color::Rgb(225, 232, 226);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 172, 164);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 122, 114);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_RED: Color = Color::Rgb(230, 100, 100);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn strong() -> Style {
        Self::text().add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn positive() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn negative() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn input_focused() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .bg(Self::BORDER_DIM)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chip() -> Style {
        Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_GREEN)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_SURFACE)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .bg(Self::BG_SURFACE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn toast(error: bool) -> Style {
        let fg = if error {
            Self::ACCENT_RED
        } else {
            Self::ACCENT_GREEN
        };
        Style::default().fg(fg).bg(Self::BG_SURFACE)
    }
}
