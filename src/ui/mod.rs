pub mod layout;
pub mod screen;
mod status_bar;
mod theme;
mod toast;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Rows left for the screen body inside a terminal of size `area`.
pub fn body_height(area: Rect) -> usize {
    layout::compute_layout(area).screen.height.saturating_sub(2) as usize
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    status_bar::render_header(frame, app_layout.header, state);
    screen::render(frame, app_layout.screen, state);
    status_bar::render(frame, app_layout.status_bar, state);
    toast::render(frame, app_layout.screen, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_height_excludes_chrome() {
        assert_eq!(body_height(Rect::new(0, 0, 80, 24)), 20);
        assert_eq!(body_height(Rect::new(0, 0, 80, 10)), 6);
    }
}
