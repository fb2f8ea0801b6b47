use crate::app::action::{Action, AuthForm};
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::app::store::{HistoryEntry, RedeemError, Store};
use crate::app::toast::ToastVariant;
use crate::ui::screen::{body_offset, paint};
use crate::view::node::{DataAttrs, Tag};
use chrono::Local;
use ratatui::layout::Rect;
use std::fmt::Write;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::RngExt;
use std::collections::HashMap;
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.toast.tick(Instant::now()) {
                state.dirty = true;
            }
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(width, height) => state.set_viewport(Rect::new(0, 0, width, height)),
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let on_input = state.focused_node().is_some_and(|n| n.tag == Tag::Input);
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Enter => activate_focused(state),
        KeyCode::PageUp => scroll_page(state, false),
        KeyCode::PageDown => scroll_page(state, true),
        KeyCode::Backspace if on_input => {
            if let Some(input) = state.focused_input_mut() {
                input.value.pop();
                state.dirty = true;
            }
        }
        KeyCode::Char(_) if !plain => {}
        KeyCode::Char(c) if on_input => {
            if let Some(input) = state.focused_input_mut() {
                input.value.push(c);
                state.dirty = true;
            }
        }
        KeyCode::Char(' ') => activate_focused(state),
        KeyCode::Char('j') => state.focus_next(),
        KeyCode::Char('k') => state.focus_prev(),
        KeyCode::Char('q') => state.should_quit = true,
        _ => {}
    }
}

/// Move the body a page up or down, leaving focus where it is.
fn scroll_page(state: &mut AppState, down: bool) {
    let height = state.viewport_height;
    if height == 0 {
        return;
    }
    let focus = state.focused_path();
    let painted = paint(&state.view, focus.as_deref());
    let current = body_offset(&painted, state.scroll, height);
    let page = height.saturating_sub(1).max(1);
    let next = if down {
        current + page
    } else {
        current.saturating_sub(page)
    };
    state.scroll = Some(next.min(painted.lines.len().saturating_sub(height)));
    state.dirty = true;
}

fn activate_focused(state: &mut AppState) {
    if let Some(path) = state.focused_path() {
        activate(state, &path);
    }
}

/// Route activation of the element at `path`: navigation first, then
/// actions, then auth form submission.
pub fn activate(state: &mut AppState, path: &[usize]) {
    let target = state
        .view
        .closest(path, |n| n.data.screen_trigger.is_some())
        .and_then(|n| n.data.screen_trigger.clone());
    if let Some(screen) = target {
        state.load_screen(&screen);
        return;
    }

    let element = state
        .view
        .closest(path, |n| n.data.action.is_some())
        .map(|n| n.data.clone());
    if let Some(element) = element {
        if let Some(name) = element.action.as_deref() {
            handle_action(state, name, &element);
        }
        return;
    }

    let submits = state
        .view
        .at(path)
        .is_some_and(|n| matches!(n.tag, Tag::Submit | Tag::Input));
    if submits {
        submit_form(state, path);
    }
}

fn submit_form(state: &mut AppState, path: &[usize]) {
    let Some((form, fields)) = state
        .view
        .closest(path, |n| n.tag == Tag::Form)
        .and_then(|form| Some((form.data.auth_form.clone()?, form.form_data())))
    else {
        return;
    };
    if let Some(form) = AuthForm::from_name(&form) {
        handle_auth(state, form, &fields);
    }
}

/// Dispatch an action name read from `element`. Unknown names are ignored.
pub fn handle_action(state: &mut AppState, name: &str, element: &DataAttrs) {
    let Some(action) = Action::from_name(name) else {
        tracing::debug!(action = name, "ignoring unknown action");
        return;
    };
    match action {
        Action::SimulateDeposit => {
            let point_id = resolve_point_id(&state.store, element);
            simulate_deposit(state, point_id.as_deref());
        }
        Action::FocusPoint => {
            if let Some(point_id) = resolve_point_id(&state.store, element) {
                focus_point(state, &point_id);
            }
        }
        Action::OpenPoint => {
            if let Some(point_id) = resolve_point_id(&state.store, element) {
                open_point(state, &point_id);
            }
        }
        Action::RedeemProduct => {
            if let Some(product_id) = element.product_id.as_deref() {
                redeem_product(state, product_id);
            }
        }
    }
}

/// Explicit point id, else the selection when the element asks for it.
fn resolve_point_id(store: &Store, element: &DataAttrs) -> Option<String> {
    element.point_id.clone().or_else(|| {
        (element.point_source.as_deref() == Some("selected"))
            .then(|| store.selected_point_id.clone())
    })
}

const FALLBACK_DATE_FORMAT: &str = "%d/%m";

fn today(state: &AppState) -> String {
    let now = Local::now();
    let mut date = String::new();
    if write!(date, "{}", now.format(&state.config.ui.date_format)).is_err() {
        tracing::warn!(format = %state.config.ui.date_format, "bad date format");
        date.clear();
        let _ = write!(date, "{}", now.format(FALLBACK_DATE_FORMAT));
    }
    date
}

pub fn simulate_deposit(state: &mut AppState, point_id: Option<&str>) {
    let Some(point) = point_id
        .and_then(|id| state.store.point(id))
        .or_else(|| state.store.selected_point())
    else {
        return;
    };
    let point_name = point.name.clone();
    let bonus = rand::rng().random_range(state.bonus_range.clone());

    state.store.credit(bonus);
    let entry = HistoryEntry {
        id: format!("dep-{}", Local::now().timestamp_millis()),
        date: today(state),
        description: format!("{} - coleta registrada", point_name),
        value: bonus,
    };
    tracing::info!(id = %entry.id, point = %point_name, bonus, balance = state.store.profile.coins, "deposit simulated");
    state.store.push_history(entry);

    state.show_toast(format!("+{} EcoCoins adicionados.", bonus), ToastVariant::Success);
    state.refresh_current_screen();
}

pub fn focus_point(state: &mut AppState, point_id: &str) {
    let Some(point) = state.store.select_point(point_id) else {
        return;
    };
    let message = format!("{} atualizado no mapa.", point.name);
    tracing::info!(point = point_id, "point selected");
    state.show_toast(message, ToastVariant::Success);
    state.refresh_current_screen();
}

pub fn open_point(state: &mut AppState, point_id: &str) {
    if state.store.select_point(point_id).is_some() {
        tracing::info!(point = point_id, "point opened");
        state.load_screen("point-details");
    }
}

pub fn redeem_product(state: &mut AppState, product_id: &str) {
    let Some(product) = state.store.product(product_id).cloned() else {
        return;
    };

    if let Err(RedeemError::InsufficientBalance { balance, cost }) = state.store.debit(product.cost) {
        tracing::info!(product = product_id, balance, cost, "redemption rejected");
        state.show_toast("Saldo insuficiente para este resgate.", ToastVariant::Error);
        return;
    }

    let entry = HistoryEntry {
        id: format!("redeem-{}-{}", product.id, Local::now().timestamp_millis()),
        date: today(state),
        description: format!("Resgate {}", product.name),
        value: -product.cost,
    };
    tracing::info!(id = %entry.id, product = product_id, cost = product.cost, balance = state.store.profile.coins, "product redeemed");
    state.store.push_history(entry);

    state.show_toast(format!("Resgate de {} confirmado.", product.name), ToastVariant::Success);
    state.refresh_current_screen();
}

pub fn handle_auth(state: &mut AppState, form: AuthForm, fields: &HashMap<String, String>) {
    let raw_name = fields.get("name").map(|s| s.trim()).unwrap_or("");
    if let Some(first_name) = raw_name.split_whitespace().next() {
        state.store.profile.name = first_name.to_string();
    }
    tracing::info!(?form, user = %state.store.profile.name, "auth form submitted");

    let message = match form {
        AuthForm::Signup => "Cadastro simulado com sucesso.",
        AuthForm::Login => "Login confirmado.",
    };
    state.show_toast(message, ToastVariant::Success);
    state.load_screen("home");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::view::node::{button, section, Node};

    fn state_on(screen: &str) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.load_screen(screen);
        state
    }

    fn product(id: &str) -> DataAttrs {
        DataAttrs {
            product_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn point(id: &str) -> DataAttrs {
        DataAttrs {
            point_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        );
    }

    fn focus_on(state: &mut AppState, label: &str) {
        let paths = state.view.focusable_paths();
        let idx = paths
            .iter()
            .position(|p| state.view.at(p).is_some_and(|n| n.text == label))
            .unwrap_or_else(|| panic!("no focusable element labelled {label}"));
        state.focus = idx;
    }

    #[test]
    fn test_redeem_insufficient_balance_changes_nothing() {
        let mut state = state_on("store");
        let history_len = state.store.history.len();

        handle_action(&mut state, "redeem-product", &product("composteira"));

        assert_eq!(state.store.profile.coins, 2750);
        assert_eq!(state.store.history.len(), history_len);
        assert!(state.toast.visible);
        assert!(state.toast.is_error());
        assert_eq!(state.toast.message, "Saldo insuficiente para este resgate.");
    }

    #[test]
    fn test_redeem_debits_and_prepends_history() {
        let mut state = state_on("store");

        handle_action(&mut state, "redeem-product", &product("squeeze"));

        assert_eq!(state.store.profile.coins, 2150);
        let first = &state.store.history[0];
        assert_eq!(first.value, -600);
        assert_eq!(first.description, "Resgate Squeeze inox");
        assert!(first.id.starts_with("redeem-squeeze-"));
        assert!(!state.toast.is_error());
        assert_eq!(state.current_screen, "store");
    }

    #[test]
    fn test_redeem_unknown_product_is_ignored() {
        let mut state = state_on("store");
        handle_action(&mut state, "redeem-product", &product("unicorn"));
        assert_eq!(state.store.profile.coins, 2750);
        assert!(!state.toast.visible);
    }

    #[test]
    fn test_deposit_at_explicit_point() {
        let mut state = state_on("home");
        let history_len = state.store.history.len();

        handle_action(&mut state, "simulateDeposit", &point("bairro-x"));

        let bonus = state.store.profile.coins - 2750;
        assert!((120..=420).contains(&bonus), "bonus {bonus} out of range");
        assert_eq!(state.store.profile.monthly_gain, 350 + bonus);
        assert_eq!(state.store.history.len(), history_len + 1);
        let first = &state.store.history[0];
        assert_eq!(first.value, bonus);
        assert!(first.description.contains("Ponto Bairro X"));
        assert!(first.id.starts_with("dep-"));
        assert_eq!(state.toast.message, format!("+{} EcoCoins adicionados.", bonus));
    }

    #[test]
    fn test_deposit_bonus_always_in_range() {
        let mut state = state_on("home");
        for _ in 0..200 {
            let before = state.store.profile.coins;
            simulate_deposit(&mut state, None);
            let bonus = state.store.profile.coins - before;
            assert!((120..=420).contains(&bonus));
        }
    }

    #[test]
    fn test_deposit_uses_selected_point_marker() {
        let mut state = state_on("home");
        state.store.select_point("bairro-y");
        let element = DataAttrs {
            point_source: Some("selected".to_string()),
            ..Default::default()
        };

        handle_action(&mut state, "simulateDeposit", &element);

        assert!(state.store.history[0].description.starts_with("Estação Bairro Y"));
    }

    #[test]
    fn test_deposit_unknown_point_falls_back_to_selection() {
        let mut state = state_on("home");
        simulate_deposit(&mut state, Some("nowhere"));
        assert!(state.store.history[0].description.starts_with("Eco Ambiental"));
    }

    #[test]
    fn test_focus_point() {
        let mut state = state_on("map");

        handle_action(&mut state, "focus-point", &point("bairro-x"));
        assert_eq!(state.store.selected_point_id, "bairro-x");
        assert_eq!(state.toast.message, "Ponto Bairro X atualizado no mapa.");
        assert_eq!(state.current_screen, "map");

        state.toast.visible = false;
        handle_action(&mut state, "focus-point", &point("nowhere"));
        assert_eq!(state.store.selected_point_id, "bairro-x");
        assert!(!state.toast.visible);
    }

    #[test]
    fn test_open_point_navigates_to_details() {
        let mut state = state_on("map");

        handle_action(&mut state, "open-point", &point("bairro-y"));
        assert_eq!(state.store.selected_point_id, "bairro-y");
        assert_eq!(state.current_screen, "point-details");
        assert_eq!(state.view.children[0].text, "Estação Bairro Y");

        handle_action(&mut state, "open-point", &point("nowhere"));
        assert_eq!(state.current_screen, "point-details");
        assert_eq!(state.store.selected_point_id, "bairro-y");
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        let mut state = state_on("home");
        handle_action(&mut state, "launch-rocket", &point("bairro-x"));
        assert_eq!(state.store.profile.coins, 2750);
        assert_eq!(state.store.selected_point_id, "eco-ambiental");
        assert!(!state.toast.visible);
    }

    #[test]
    fn test_auth_takes_first_name_token() {
        let mut state = state_on("login");
        let fields = HashMap::from([("name".to_string(), "  Maria  Silva ".to_string())]);

        handle_auth(&mut state, AuthForm::Signup, &fields);

        assert_eq!(state.store.profile.name, "Maria");
        assert_eq!(state.toast.message, "Cadastro simulado com sucesso.");
        assert_eq!(state.current_screen, "home");
    }

    #[test]
    fn test_auth_blank_name_keeps_previous() {
        let mut state = state_on("login");
        let fields = HashMap::from([("name".to_string(), "   ".to_string())]);

        handle_auth(&mut state, AuthForm::Login, &fields);

        assert_eq!(state.store.profile.name, "Eco Lover");
        assert_eq!(state.toast.message, "Login confirmado.");
        assert_eq!(state.current_screen, "home");
    }

    #[test]
    fn test_keyboard_navigation_triggers_screen() {
        let mut state = state_on("welcome");
        focus_on(&mut state, "Explorar como visitante");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_screen, "home");
    }

    #[test]
    fn test_typing_and_submitting_login_form() {
        let mut state = state_on("login");
        focus_on(&mut state, "Nome");
        for c in "Joana Prado".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.current_screen, "home");
        assert_eq!(state.store.profile.name, "Joana");
        let greeting = &state.view.children[0].children[1];
        assert_eq!(greeting.text, "Joana");
    }

    #[test]
    fn test_q_inside_input_is_typed_not_quit() {
        let mut state = state_on("login");
        focus_on(&mut state, "Nome");
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.should_quit);
        assert_eq!(state.focused_node().map(|n| n.value.as_str()), Some("q"));

        focus_on(&mut state, "Voltar");
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_store_button_redeems_through_activation() {
        let mut state = state_on("store");
        focus_on(&mut state, "Resgatar");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.store.profile.coins, 1750);
        assert_eq!(state.store.history[0].description, "Resgate Ecobag reforçada");
    }

    #[test]
    fn test_map_detail_button_opens_point() {
        let mut state = state_on("map");
        let paths = state.view.focusable_paths();
        let idx = paths
            .iter()
            .position(|p| {
                state.view.at(p).is_some_and(|n| {
                    n.data.action.as_deref() == Some("open-point")
                        && n.data.point_id.as_deref() == Some("bairro-x")
                })
            })
            .unwrap();
        state.focus = idx;
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.current_screen, "point-details");
        assert_eq!(state.store.selected_point_id, "bairro-x");
    }

    #[test]
    fn test_repeated_enter_never_redeems_unchosen_product() {
        let mut state = state_on("store");
        focus_on(&mut state, "Resgatar");
        for _ in 0..3 {
            press(&mut state, KeyCode::Enter);
        }

        assert_eq!(state.store.profile.coins, 750);
        let redeemed: Vec<_> = state
            .store
            .history
            .iter()
            .filter(|e| e.id.starts_with("redeem-"))
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(redeemed, vec!["Resgate Ecobag reforçada", "Resgate Ecobag reforçada"]);
    }

    #[test]
    fn test_page_up_reveals_top_of_long_history() {
        let mut state = state_on("history");
        for _ in 0..30 {
            simulate_deposit(&mut state, None);
        }
        state.viewport_height = 20;

        let focus = state.focused_path();
        let painted = paint(&state.view, focus.as_deref());
        assert!(body_offset(&painted, state.scroll, 20) > 0);

        for _ in 0..5 {
            press(&mut state, KeyCode::PageUp);
        }
        assert_eq!(state.scroll, Some(0));
        assert_eq!(body_offset(&painted, state.scroll, 20), 0);

        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.scroll, Some(19.min(painted.lines.len() - 20)));

        press(&mut state, KeyCode::Tab);
        assert_eq!(state.scroll, None);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = state_on("home");
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(80, 24)));
        assert_eq!(state.viewport_height, 20);
        assert!(state.dirty);
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut state = state_on("login");
        focus_on(&mut state, "Nome");
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            handle_event(
                &mut state,
                AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char('a'), modifiers))),
            );
        }
        press(&mut state, KeyCode::Char('b'));
        assert_eq!(state.focused_node().map(|n| n.value.as_str()), Some("b"));
        assert!(!state.should_quit);
    }

    #[test]
    fn test_bad_date_format_falls_back() {
        let mut config = AppConfig::default();
        config.ui.date_format = "%Q".to_string();
        let mut state = AppState::new(config);
        state.load_screen("home");

        simulate_deposit(&mut state, None);

        let date = &state.store.history[0].date;
        assert_eq!(date.len(), 5);
        assert_eq!(&date[2..3], "/");
    }

    fn auth_test_form(kind: Option<&str>) -> Node {
        let mut form = Node::new(Tag::Form);
        if let Some(kind) = kind {
            form = form.auth_form(kind);
        }
        let mut name = Node::new(Tag::Input).text("Nome").field("name");
        name.value = "Zé Ninguém".to_string();
        Node::root().child(form.child(name).child(Node::new(Tag::Submit).text("Enviar")))
    }

    #[test]
    fn test_unrecognized_auth_form_is_ignored() {
        for kind in [Some("other"), None] {
            let mut state = state_on("login");
            state.view = auth_test_form(kind);

            activate(&mut state, &[0, 1]);
            activate(&mut state, &[0, 0]);

            assert_eq!(state.store.profile.name, "Eco Lover");
            assert_eq!(state.current_screen, "login");
            assert!(!state.toast.visible);
        }
    }

    #[test]
    fn test_recognized_auth_form_submits_from_input() {
        let mut state = state_on("login");
        state.view = auth_test_form(Some("signup"));

        activate(&mut state, &[0, 0]);

        assert_eq!(state.store.profile.name, "Zé");
        assert_eq!(state.current_screen, "home");
    }

    #[test]
    fn test_screen_trigger_ancestor_wins_over_action() {
        let mut state = state_on("store");
        state.view = Node::root().child(
            section([button("Resgatar")
                .action("redeem-product")
                .product_id("squeeze")])
            .screen_trigger("wallet"),
        );

        activate(&mut state, &[0, 0]);

        assert_eq!(state.current_screen, "wallet");
        assert_eq!(state.store.profile.coins, 2750);
        assert!(!state.toast.visible);
    }

    #[test]
    fn test_tick_dismisses_toast() {
        let mut state = state_on("home");
        state.toast = crate::app::toast::Toast::new(std::time::Duration::ZERO);
        state.show_toast("hi", ToastVariant::Success);
        state.dirty = false;

        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.toast.visible);
        assert!(state.dirty);
    }
}
