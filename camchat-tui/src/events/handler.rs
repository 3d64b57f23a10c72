use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    InsertChar(char),
    Paste(String),
    Backspace,
    ClearInput,
    NextMedia,
    PrevMedia,
    OpenMedia,
    ConnectStream,
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToBottom,
    CycleTheme,
    ToggleHelp,
    CheckHealth,
    Resize { width: u16, height: u16 },
}

pub const PAGE_SCROLL: u16 = 10;
const MOUSE_SCROLL: u16 = 3;

/// Maps raw terminal events to [`Action`]s. Holds no app state, so the same
/// key always means the same thing; the app decides what is allowed.
#[derive(Debug, Default)]
pub struct EventHandler {
    terminal_size: Option<(u16, u16)>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_size
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => Some(Action::Paste(text)),
            Event::Resize(width, height) => self.handle_resize(width, height),
            Event::FocusGained | Event::FocusLost => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) | (KeyCode::Esc, _) => Some(Action::Quit),
            (KeyCode::Char('o'), true) => Some(Action::OpenMedia),
            (KeyCode::Char('k'), true) => Some(Action::ConnectStream),
            (KeyCode::Char('t'), true) => Some(Action::CycleTheme),
            (KeyCode::Char('r'), true) => Some(Action::CheckHealth),
            (KeyCode::Char('u'), true) => Some(Action::ClearInput),
            (KeyCode::Char(_), true) => None,
            (KeyCode::Char(c), false) => Some(Action::InsertChar(c)),
            (KeyCode::Enter, _) => Some(Action::Submit),
            (KeyCode::Backspace, _) => Some(Action::Backspace),
            (KeyCode::Tab, _) => Some(Action::NextMedia),
            (KeyCode::BackTab, _) => Some(Action::PrevMedia),
            (KeyCode::Up, _) => Some(Action::ScrollUp(1)),
            (KeyCode::Down, _) => Some(Action::ScrollDown(1)),
            (KeyCode::PageUp, _) => Some(Action::ScrollUp(PAGE_SCROLL)),
            (KeyCode::PageDown, _) => Some(Action::ScrollDown(PAGE_SCROLL)),
            (KeyCode::End, _) => Some(Action::ScrollToBottom),
            (KeyCode::F(1), _) => Some(Action::ToggleHelp),
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp(MOUSE_SCROLL)),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown(MOUSE_SCROLL)),
            _ => None,
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.terminal_size = Some((width, height));
        Some(Action::Resize { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys() {
        let mut handler = EventHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_typing_goes_to_input() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            Some(Action::InsertChar('q'))
        );
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::InsertChar('A'))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), Some(Action::Submit));
    }

    #[test]
    fn test_control_shortcuts() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('o'))),
            Some(Action::OpenMedia)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('k'))),
            Some(Action::ConnectStream)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('t'))),
            Some(Action::CycleTheme)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('r'))),
            Some(Action::CheckHealth)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('u'))),
            Some(Action::ClearInput)
        );
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_media_selection_and_scrolling() {
        let mut handler = EventHandler::new();

        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), Some(Action::NextMedia));
        assert_eq!(
            handler.handle_key(key_event(KeyCode::BackTab)),
            Some(Action::PrevMedia)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::PageUp)),
            Some(Action::ScrollUp(PAGE_SCROLL))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::PageDown)),
            Some(Action::ScrollDown(PAGE_SCROLL))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::End)),
            Some(Action::ScrollToBottom)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::F(1))),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut handler = EventHandler::new();
        let mut release = key_event(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(release), None);
    }

    #[test]
    fn test_mouse_scroll() {
        let mut handler = EventHandler::new();

        let scroll_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handler.handle_mouse(scroll_up), Some(Action::ScrollUp(3)));
    }

    #[test]
    fn test_paste_and_resize() {
        let mut handler = EventHandler::new();

        assert_eq!(
            handler.handle_event(Event::Paste("rtsp://cam".to_string())),
            Some(Action::Paste("rtsp://cam".to_string()))
        );

        assert_eq!(handler.terminal_size(), None);
        assert_eq!(
            handler.handle_event(Event::Resize(120, 40)),
            Some(Action::Resize {
                width: 120,
                height: 40
            })
        );
        assert_eq!(handler.terminal_size(), Some((120, 40)));
    }
}
