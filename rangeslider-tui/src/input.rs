//! Input dispatch — global keys, then slider keys and mouse clicks.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::AppState;

/// Steps moved by the coarse keys.
const COARSE_STEPS: i32 = 10;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('r') => app.reset(),
        KeyCode::Tab | KeyCode::BackTab => app.surface.toggle_handle(),
        KeyCode::Char('1') => app.surface.select_handle(0),
        KeyCode::Char('2') => app.surface.select_handle(1),
        KeyCode::Left | KeyCode::Char('h') => move_handle(app, -1),
        KeyCode::Right | KeyCode::Char('l') => move_handle(app, 1),
        KeyCode::Char('H') => move_handle(app, -COARSE_STEPS),
        KeyCode::Char('L') => move_handle(app, COARSE_STEPS),
        KeyCode::Home => move_handle(app, i32::MIN / 2),
        KeyCode::End => move_handle(app, i32::MAX / 2),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.surface.click(mouse.column, mouse.row);
    }
}

fn move_handle(app: &mut AppState, steps: i32) {
    if app.surface.is_disabled() {
        app.set_warning("Slider disabled: the range has a single value");
        return;
    }
    app.surface.nudge(steps);
}
