//! Keyboard input handling for the browser.
//!
//! Maps key presses in normal mode to [`KeyAction`]s. Text entry in the
//! file prompt is handled by the app, not here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the browser to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ToggleHelp,
    TogglePlayback,
    /// Seek back by the configured step
    StepBack,
    /// Seek forward by the configured step
    StepForward,
    JumpToStart,
    JumpToEnd,
    /// Move focus between the timeline and the moments list
    CycleFocus,
    SelectPrev,
    SelectNext,
    /// Jump to the selected key moment
    ActivateSelected,
    /// Open the file prompt
    OpenFile,
    LoadSample,
    /// Close an overlay or prompt
    Cancel,
}

/// Map a key event in normal mode to an action.
///
/// Key releases and repeats reported by some terminals are ignored.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let action = match key.code {
        // === Quit ===
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Cancel,

        // === Overlays ===
        KeyCode::Char('?') => KeyAction::ToggleHelp,

        // === Playback ===
        KeyCode::Char(' ') | KeyCode::Char('k') => KeyAction::TogglePlayback,
        KeyCode::Left | KeyCode::Char('h') => KeyAction::StepBack,
        KeyCode::Right | KeyCode::Char('l') => KeyAction::StepForward,
        KeyCode::Home | KeyCode::Char('0') => KeyAction::JumpToStart,
        KeyCode::End | KeyCode::Char('$') => KeyAction::JumpToEnd,

        // === Key moments ===
        KeyCode::Tab | KeyCode::BackTab => KeyAction::CycleFocus,
        KeyCode::Up => KeyAction::SelectPrev,
        KeyCode::Down => KeyAction::SelectNext,
        KeyCode::Enter => KeyAction::ActivateSelected,

        // === Sources ===
        KeyCode::Char('o') => KeyAction::OpenFile,
        KeyCode::Char('s') => KeyAction::LoadSample,

        _ => return None,
    };
    Some(action)
}
