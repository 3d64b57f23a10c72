use std::cell::Cell;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use camchat_core::{
    CamchatConfig, CamchatError, CamchatResult, ChatResponse, ChatSession, ChatTransport,
    MediaItem, MediaKind, RtspPlaceholder,
};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::events::{Action, EventHandler};
use crate::theme::{Theme, ThemeManager};
use crate::ui::layout::MainLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Unknown,
    Checking,
    Online,
    Offline,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "unknown",
            ConnectionStatus::Checking => "checking",
            ConnectionStatus::Online => "online",
            ConnectionStatus::Offline => "offline",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "?",
            ConnectionStatus::Checking => "◌",
            ConnectionStatus::Online | ConnectionStatus::Offline => "●",
        }
    }
}

/// Results coming back from spawned request tasks.
#[derive(Debug)]
pub enum AppMessage {
    Reply(CamchatResult<ChatResponse>),
    Health(bool),
}

/// Position of one media candidate: the message it belongs to and its index
/// in that message's extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaRef {
    pub message_id: u64,
    pub index: usize,
}

pub type UrlOpener = fn(&str) -> std::io::Result<()>;

fn open_with_system(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub theme: String,
    pub show_welcome: bool,
    pub tick_rate: Duration,
    pub base_url: String,
}

impl AppOptions {
    pub fn from_config(config: &CamchatConfig) -> Self {
        Self {
            theme: config.tui.theme.clone(),
            show_welcome: config.tui.show_welcome,
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
            base_url: config.api.base_url.clone(),
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&CamchatConfig::default())
    }
}

enum Step {
    Tick,
    Message(AppMessage),
    Terminal(Option<std::io::Result<Event>>),
}

pub struct App {
    pub should_quit: bool,
    pub session: ChatSession,
    pub theme_manager: ThemeManager,
    pub event_handler: EventHandler,
    pub connection: ConnectionStatus,
    pub base_url: String,
    pub selected_media: Option<MediaRef>,
    pub rtsp_panels: HashMap<MediaRef, RtspPlaceholder>,
    /// Lines scrolled up from the newest message.
    pub scroll_offset: u16,
    /// Highest useful `scroll_offset`, written by the conversation view on
    /// every draw. Unbounded until the first frame.
    pub scroll_limit: Cell<u16>,
    pub show_help: bool,
    pub status_message: Option<String>,
    pub animation_tick: u64,
    tick_rate: Duration,
    transport: Arc<dyn ChatTransport>,
    opener: UrlOpener,
    tx: mpsc::UnboundedSender<AppMessage>,
    rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new(transport: Arc<dyn ChatTransport>, options: AppOptions) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let theme_manager = ThemeManager::with_theme(&options.theme);
        let session = if options.show_welcome {
            ChatSession::with_welcome()
        } else {
            ChatSession::new()
        };

        Self {
            should_quit: false,
            session,
            status_message: Some(format!(
                "Theme: {}. Press F1 for help.",
                theme_manager.current_theme_name()
            )),
            theme_manager,
            event_handler: EventHandler::new(),
            connection: ConnectionStatus::Unknown,
            base_url: options.base_url,
            selected_media: None,
            rtsp_panels: HashMap::new(),
            scroll_offset: 0,
            scroll_limit: Cell::new(u16::MAX),
            show_help: false,
            animation_tick: 0,
            tick_rate: options.tick_rate,
            transport,
            opener: open_with_system,
            tx,
            rx,
        }
    }

    pub fn with_opener(mut self, opener: UrlOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.tick_rate);

        self.request_health_check();

        loop {
            terminal.draw(|frame| MainLayout::render(frame, self))?;

            let step = tokio::select! {
                _ = ticker.tick() => Step::Tick,
                Some(message) = self.rx.recv() => Step::Message(message),
                event = events.next() => Step::Terminal(event),
            };

            match step {
                Step::Tick => self.on_tick(),
                Step::Message(message) => self.handle_message(message),
                Step::Terminal(Some(Ok(event))) => self.handle_event(event),
                Step::Terminal(Some(Err(e))) => return Err(e.into()),
                Step::Terminal(None) => self.should_quit = true,
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn handle_event(&mut self, event: Event) {
        if let Some(action) = self.event_handler.handle_event(event) {
            self.apply_action(action);
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit | Action::ToggleHelp => self.show_help = false,
                Action::CycleTheme => self.cycle_theme(),
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Submit => self.submit(),
            Action::InsertChar(c) => {
                if !self.is_loading() {
                    self.session.push_char(c);
                }
            }
            Action::Paste(text) => {
                if !self.is_loading() {
                    for c in text.chars() {
                        self.session.push_char(if c == '\n' || c == '\r' { ' ' } else { c });
                    }
                }
            }
            Action::Backspace => {
                if !self.is_loading() {
                    self.session.pop_char();
                }
            }
            Action::ClearInput => {
                if !self.is_loading() {
                    self.session.clear_input();
                }
            }
            Action::NextMedia => self.select_media(true),
            Action::PrevMedia => self.select_media(false),
            Action::OpenMedia => self.open_selected(),
            Action::ConnectStream => self.connect_selected(),
            Action::ScrollUp(lines) => {
                self.scroll_offset = self
                    .scroll_offset
                    .saturating_add(lines)
                    .min(self.scroll_limit.get());
            }
            Action::ScrollDown(lines) => {
                self.scroll_offset = self
                    .scroll_offset
                    .min(self.scroll_limit.get())
                    .saturating_sub(lines);
            }
            Action::ScrollToBottom => self.scroll_offset = 0,
            Action::CycleTheme => self.cycle_theme(),
            Action::ToggleHelp => self.show_help = true,
            Action::CheckHealth => self.request_health_check(),
            Action::Resize { .. } => {}
        }
    }

    /// Starts a request for the current input. The reply comes back through
    /// the channel; if the app is gone by then it is dropped.
    fn submit(&mut self) {
        let Some(pending) = self.session.begin_submit() else {
            return;
        };

        self.scroll_offset = 0;
        self.status_message = Some("Waiting for the assistant...".to_string());

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = transport.ask(&pending.message, &pending.thread_id).await;
            if tx.send(AppMessage::Reply(result)).is_err() {
                debug!("Reply arrived after the UI closed; dropping it");
            }
        });
    }

    pub fn request_health_check(&mut self) {
        self.connection = ConnectionStatus::Checking;

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let healthy = transport.health_check().await;
            let _ = tx.send(AppMessage::Health(healthy));
        });
    }

    pub async fn next_message(&mut self) -> Option<AppMessage> {
        self.rx.recv().await
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Reply(result) => {
                match &result {
                    Err(CamchatError::Network(_)) => self.connection = ConnectionStatus::Offline,
                    Ok(_) => self.connection = ConnectionStatus::Online,
                    Err(_) => {}
                }

                let failed = result.is_err();
                let reply = self.session.complete(result);
                let media_count = reply.media().len();

                self.status_message = if failed {
                    Some("Request failed".to_string())
                } else if media_count > 0 {
                    Some(format!(
                        "{} media item(s) attached. Tab selects, Ctrl-O opens.",
                        media_count
                    ))
                } else {
                    None
                };
                self.scroll_offset = 0;
            }
            AppMessage::Health(healthy) => {
                self.connection = if healthy {
                    ConnectionStatus::Online
                } else {
                    ConnectionStatus::Offline
                };
                info!(healthy, "Assistant health checked");
            }
        }
    }

    /// Every media candidate in the conversation, oldest first.
    pub fn media_refs(&self) -> Vec<MediaRef> {
        self.session
            .messages()
            .iter()
            .flat_map(|message| {
                (0..message.media().len()).map(move |index| MediaRef {
                    message_id: message.id,
                    index,
                })
            })
            .collect()
    }

    pub fn media_item(&self, media_ref: MediaRef) -> Option<MediaItem> {
        self.session
            .conversation()
            .get(media_ref.message_id)?
            .media()
            .into_iter()
            .nth(media_ref.index)
    }

    pub fn selected_item(&self) -> Option<(MediaRef, MediaItem)> {
        let media_ref = self.selected_media?;
        self.media_item(media_ref).map(|item| (media_ref, item))
    }

    fn select_media(&mut self, forward: bool) {
        let refs = self.media_refs();
        if refs.is_empty() {
            self.status_message = Some("No media in this conversation yet".to_string());
            return;
        }

        let len = refs.len();
        let current = self
            .selected_media
            .and_then(|selected| refs.iter().position(|r| *r == selected));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };

        self.selected_media = Some(refs[next]);
        if let Some((_, item)) = self.selected_item() {
            self.status_message = Some(format!("{} {}", item.kind.icon(), item.url));
        }
    }

    fn open_selected(&mut self) {
        let Some((media_ref, item)) = self.selected_item() else {
            self.status_message = Some("Select a media item with Tab first".to_string());
            return;
        };

        let url = match item.kind {
            MediaKind::RtspStream => self
                .rtsp_panels
                .entry(media_ref)
                .or_insert_with(|| RtspPlaceholder::new(&item.url))
                .external_url()
                .to_string(),
            MediaKind::Video | MediaKind::Link => item.url.clone(),
        };

        match (self.opener)(&url) {
            Ok(()) => {
                info!(%url, kind = %item.kind, "Opened media externally");
                self.status_message = Some(format!("Opened {}", url));
            }
            Err(e) => {
                warn!(%url, "Failed to open media: {}", e);
                self.status_message = Some(format!("Could not open {}: {}", url, e));
            }
        }
    }

    fn connect_selected(&mut self) {
        match self.selected_item() {
            Some((media_ref, item)) if item.kind == MediaKind::RtspStream => {
                let panel = self
                    .rtsp_panels
                    .entry(media_ref)
                    .or_insert_with(|| RtspPlaceholder::new(&item.url));
                panel.connect();
                self.status_message = Some(panel.status_message().to_string());
            }
            Some(_) => {
                self.status_message = Some("Only RTSP streams can be connected".to_string());
            }
            None => {
                self.status_message = Some("Select an RTSP stream with Tab first".to_string());
            }
        }
    }

    fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.status_message = Some(format!(
            "Theme: {}",
            self.theme_manager.current_theme_name()
        ));
    }
}
