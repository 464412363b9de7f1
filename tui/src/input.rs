//! Input handling for the Meridian TUI.
//!
//! A blocking reader thread feeds crossterm events into a bounded channel;
//! the frame loop drains it non-blocking with a per-frame cap so a key flood
//! can never starve rendering.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use meridian_engine::{App, Section};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to the app. Returns true when the user
/// asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        let Event::Key(key) = ev else { continue };
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            continue;
        }
        if handle_key(app, key) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

/// Returns true on quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl-C quits from anywhere, including filter editing.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    if app.is_editing_filter() {
        handle_filter_key(app, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return true;
        }
        KeyCode::Tab | KeyCode::Char(']') => app.next_section(),
        KeyCode::BackTab | KeyCode::Char('[') => app.prev_section(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(section) = Section::from_digit(c) {
                app.goto_section(section);
            }
        }
        _ => handle_section_key(app, key),
    }
    false
}

/// Keys with a meaning that depends on the active tab.
fn handle_section_key(app: &mut App, key: KeyEvent) {
    match app.store().active_section() {
        Section::Workflows => match key.code {
            KeyCode::Char('s' | ' ') => app.toggle_playback(),
            KeyCode::Char('r') => app.reset_playback(),
            KeyCode::Char('w') => app.cycle_workflow(),
            _ => {}
        },
        Section::Architecture => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_agent(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_agent(),
            KeyCode::Char('v') => app.toggle_view_mode(),
            KeyCode::Esc => app.clear_agent_selection(),
            _ => {}
        },
        Section::Documents => match key.code {
            KeyCode::Char('e') => app.start_extraction(),
            KeyCode::Char('r') => app.reset_extraction(),
            _ => {}
        },
        Section::Compliance => match key.code {
            KeyCode::Char('/') => app.begin_filter_edit(),
            KeyCode::Esc => app.clear_filter(),
            _ => {}
        },
        Section::Overview | Section::Dashboard => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.end_filter_edit(),
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_filter();
        }
        KeyCode::Char(c) => app.push_filter_char(c),
        _ => {}
    }
}
