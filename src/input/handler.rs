use crate::app::AppState;
use crate::domain::{PostponeTarget, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingTask | UiMode::Substituting => handle_input_form_mode(app, key),
        UiMode::ChoosingPostpone => handle_postpone_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
        UiMode::ConfirmRegenerate => handle_confirm_regenerate_mode(app, key),
        // Keys are ignored while the planner call is in flight
        UiMode::Planning => Ok(false),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Any key clears the last status message
    app.status = None;

    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_up();
            } else {
                app.move_selection_up();
            }
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_task_down();
            } else {
                app.move_selection_down();
            }
        }
        KeyCode::Left => app.previous_day(),
        KeyCode::Right => app.next_day(),
        KeyCode::Char('[') => app.previous_week(),
        KeyCode::Char(']') => app.next_week(),
        KeyCode::Char('t') => app.go_to_today(),

        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_complete(),
        KeyCode::Char('r') => app.start_substitute(),
        KeyCode::Char('p') => app.request_postpone(),
        KeyCode::Char('e') => app.start_edit(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('g') => app.request_regenerate(),
        KeyCode::Char('v') => app.toggle_summary(),
        KeyCode::Char('E') => app.export_day(),

        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the edit or substitute form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_form_add_char(c)
        }
        _ => {}
    }
    Ok(false)
}

fn handle_postpone_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') => app.choose_postpone(PostponeTarget::LaterToday),
        KeyCode::Char('n') | KeyCode::Char('N') => app.choose_postpone(PostponeTarget::NextDay),
        KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_delete_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_regenerate_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_regenerate(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
        _ => {}
    }
    Ok(false)
}
