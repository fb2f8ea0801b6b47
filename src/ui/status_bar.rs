use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::view::format::format_coins;
use crate::view::node::Tag;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Top line: brand, user and balance on the left, screen name on the right.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.store.profile;
    let mut parts = vec![
        Span::styled(
            " ♻ EcoCoins ",
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", profile.name), Theme::header()),
        Span::styled(
            format!("· {} EcoCoins ", format_coins(profile.coins)),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_SURFACE),
        ),
    ];
    let title = format!(" {} ", state.screen_title());
    push_right_aligned(&mut parts, area.width, Span::styled(title, Theme::header()));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Bottom line: key help for the focused element.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let on_input = state.focused_node().is_some_and(|n| n.tag == Tag::Input);
    let hints: &[(&str, &str)] = if on_input {
        &[("Tab", "próximo"), ("Enter", "enviar"), ("Ctrl+C", "sair")]
    } else {
        &[
            ("Tab/↓", "próximo"),
            ("Shift+Tab/↑", "anterior"),
            ("Enter", "selecionar"),
            ("PgUp/PgDn", "rolar"),
            ("q", "sair"),
        ]
    };

    let mut parts: Vec<Span> = Vec::new();
    for (key, label) in hints {
        parts.push(Span::styled(format!(" {}", key), Theme::key_hint()));
        parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
    }
    let position = format!(
        " {}/{} ",
        (state.focus + 1).min(state.focusable_count()),
        state.focusable_count()
    );
    push_right_aligned(&mut parts, area.width, Span::styled(position, Theme::status_bar()));
    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Pad with the bar style so `right` ends at the right edge.
fn push_right_aligned(parts: &mut Vec<Span<'static>>, width: u16, right: Span<'static>) {
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (width as usize).saturating_sub(used + right.content.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(right);
}
