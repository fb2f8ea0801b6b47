//! Draws the live element tree of the current screen.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::view::node::{Node, Tag, Tone};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const INPUT_WIDTH: usize = 24;

/// The tree flattened to terminal lines.
pub struct Painted {
    pub lines: Vec<Line<'static>>,
    /// Line holding the focused element.
    pub focus_line: Option<usize>,
}

pub fn paint(root: &Node, focus: Option<&[usize]>) -> Painted {
    let mut painter = Painter {
        focus,
        lines: Vec::new(),
        focus_line: None,
    };
    painter.block(root, &mut Vec::new(), 0);
    while painter.lines.last().is_some_and(|l| l.spans.is_empty()) {
        painter.lines.pop();
    }
    Painted {
        lines: painter.lines,
        focus_line: painter.focus_line,
    }
}

struct Painter<'a> {
    focus: Option<&'a [usize]>,
    lines: Vec<Line<'static>>,
    focus_line: Option<usize>,
}

impl Painter<'_> {
    fn is_focused(&self, path: &[usize]) -> bool {
        self.focus == Some(path)
    }

    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| !l.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn block(&mut self, node: &Node, path: &mut Vec<usize>, indent: usize) {
        match node.tag {
            Tag::Root | Tag::Form => self.children(node, path, indent),
            Tag::Section => {
                self.children(node, path, indent);
                self.blank();
            }
            Tag::List => self.children(node, path, indent),
            Tag::Item => {
                let start = self.lines.len();
                self.children(node, path, indent + 2);
                if let Some(first) = self.lines.get_mut(start) {
                    if let Some(lead) = first.spans.first_mut() {
                        *lead = Span::styled(format!("{}• ", " ".repeat(indent)), Theme::muted());
                    }
                }
                if self.lines.len() - start > 1 {
                    self.blank();
                }
            }
            Tag::Heading => {
                self.blank();
                self.line(node, path, indent);
            }
            _ => self.line(node, path, indent),
        }
    }

    fn children(&mut self, node: &Node, path: &mut Vec<usize>, indent: usize) {
        for (i, child) in node.children.iter().enumerate() {
            path.push(i);
            self.block(child, path, indent);
            path.pop();
        }
    }

    /// One terminal line for `node`, its descendants laid out inline.
    fn line(&mut self, node: &Node, path: &mut Vec<usize>, indent: usize) {
        let mut spans = vec![Span::raw(" ".repeat(indent))];
        let focused = self.inline(node, path, &mut spans);
        if spans.len() == 1 {
            return;
        }
        if focused {
            self.focus_line = Some(self.lines.len());
        }
        self.lines.push(Line::from(spans));
    }

    fn inline(&self, node: &Node, path: &mut Vec<usize>, spans: &mut Vec<Span<'static>>) -> bool {
        let focused = self.is_focused(path);
        match node.tag {
            Tag::Button | Tag::Submit => {
                let style = if node.disabled {
                    Theme::button_disabled()
                } else if focused {
                    Theme::button_focused()
                } else {
                    Theme::button()
                };
                spans.push(Span::styled(format!("[ {} ]", node.text), style));
            }
            Tag::Input => {
                spans.push(Span::styled(format!("{}: ", node.text), Theme::muted()));
                let mut value = if node.masked {
                    "•".repeat(node.value.chars().count())
                } else {
                    node.value.clone()
                };
                if focused {
                    value.push('▏');
                }
                let style = if focused {
                    Theme::input_focused()
                } else {
                    Theme::input()
                };
                spans.push(Span::styled(format!("{:<width$}", value, width = INPUT_WIDTH), style));
            }
            Tag::Chip => spans.push(Span::styled(format!(" {} ", node.text), Theme::chip())),
            _ => {
                let mut contains_focus = focused;
                if !node.text.is_empty() {
                    spans.push(Span::styled(node.text.clone(), text_style(node)));
                }
                for (i, child) in node.children.iter().enumerate() {
                    if spans.len() > 1 {
                        spans.push(Span::raw(" "));
                    }
                    path.push(i);
                    contains_focus |= self.inline(child, path, spans);
                    path.pop();
                }
                if spans.last().is_some_and(|s| s.content == " ") {
                    spans.pop();
                }
                return contains_focus;
            }
        }
        focused
    }
}

fn text_style(node: &Node) -> Style {
    match (node.tag, node.tone) {
        (_, Tone::Muted) => Theme::muted(),
        (_, Tone::Accent) => Theme::accent(),
        (_, Tone::Positive) => Theme::positive(),
        (_, Tone::Negative) => Theme::negative(),
        (Tag::Heading, Tone::Normal) => Theme::heading(),
        (Tag::Strong, Tone::Normal) => Theme::strong(),
        _ => Theme::text(),
    }
}

/// First line to show so `focus_line` stays visible in `height` rows, with
/// one row of margin below it when there is room for one.
pub fn scroll_offset(focus_line: Option<usize>, height: usize) -> usize {
    let margin = usize::from(height > 1);
    match focus_line {
        Some(line) if height > 0 => (line + 1 + margin).saturating_sub(height),
        _ => 0,
    }
}

/// First line to show: the manual `scroll` if any, else the focus-following
/// offset, clamped so the last line never rises above the bottom row.
pub fn body_offset(painted: &Painted, scroll: Option<usize>, height: usize) -> usize {
    let max = painted.lines.len().saturating_sub(height);
    scroll
        .unwrap_or_else(|| scroll_offset(painted.focus_line, height))
        .min(max)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_DARK));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = state.focused_path();
    let painted = paint(&state.view, focus.as_deref());
    let offset = body_offset(&painted, state.scroll, inner.height as usize);

    let paragraph = Paragraph::new(painted.lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, inner);
}
