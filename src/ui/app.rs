//! Main TUI application state and logic

use crate::algorithms::AlgorithmKind;
use crate::input::{generate, parse_values, ArrayPattern};
use crate::session::constants::{MAX_TICK_MS, MIN_TICK_MS, TICK_STEP_MS};
use crate::session::{Playback, Session};
use crate::stepper::StepOutcome;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest the event loop blocks waiting for a key
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// The main application state
pub struct App {
    /// The session being visualized
    pub session: Session,

    /// Source of generated arrays
    pub rng: StdRng,

    /// Length of generated arrays
    pub array_size: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected request
    pub status_is_error: bool,

    /// Custom array text being typed (`None` when not editing)
    pub input_buffer: Option<String>,
}

impl App {
    /// Create a new app around `session`; `rng` and `array_size` drive the generate keys
    pub fn new(session: Session, rng: StdRng, array_size: usize) -> Self {
        App {
            session,
            rng,
            array_size,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            input_buffer: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Deliver the cooperative tick
            if let Some(StepOutcome::Done) = self.session.tick(Instant::now()) {
                self.set_status("Sort complete!");
            }

            // Use poll with timeout so ticks keep flowing without input
            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let snapshot = self.session.snapshot();

        // Bars on top, dashboard and description below, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(10),
                Constraint::Length(1),
            ])
            .split(size);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1]);

        super::panes::render_bars_pane(frame, main_chunks[0], &snapshot, true);

        super::panes::render_dashboard_pane(
            frame,
            bottom[0],
            &super::panes::DashboardRenderData {
                snapshot: &snapshot,
                playback: self.session.playback(),
                tick_interval: self.session.tick_interval(),
                pending_tasks: self.session.pending_tasks(),
                max_pending_tasks: self.session.max_pending_tasks(),
            },
        );

        super::panes::render_description_pane(frame, bottom[1], snapshot.kind);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                playback: self.session.playback(),
                input: self.input_buffer.as_deref(),
                is_error: self.status_is_error,
            },
        );
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_buffer.is_some() {
            self.handle_input_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('b') => self.start(AlgorithmKind::Bubble),
            KeyCode::Char('i') => self.start(AlgorithmKind::Insertion),
            KeyCode::Char('s') => self.start(AlgorithmKind::Selection),
            KeyCode::Char('k') => self.start(AlgorithmKind::Quick),
            KeyCode::Char('m') => self.start(AlgorithmKind::Merge),
            KeyCode::Char(' ') => {
                self.session.toggle_pause();
                match self.session.playback() {
                    Playback::Playing => self.set_status("Playing..."),
                    Playback::Paused => self.set_status("Paused"),
                    Playback::Idle => self.set_status("Pick an algorithm first"),
                    Playback::Finished => self.set_status("Sort complete!"),
                }
            }
            KeyCode::Right | KeyCode::Char('.') => self.step_forward(1),
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                self.step_forward(n);
            }
            KeyCode::Enter => {
                let steps = self.session.run_to_completion();
                if self.session.kind().is_some() {
                    self.set_status(format!("Ran {} step(s) to completion", steps));
                }
            }
            KeyCode::Backspace | KeyCode::Char('r') => match self.session.restart() {
                Ok(kind) => self.set_status(format!("Restarted {}", kind)),
                Err(e) => self.set_error(e.to_string()),
            },
            KeyCode::Char('g') => self.regenerate(ArrayPattern::Random),
            KeyCode::Char('o') => self.regenerate(ArrayPattern::Sorted),
            KeyCode::Char('v') => self.regenerate(ArrayPattern::Reverse),
            KeyCode::Char('e') => {
                self.session.pause();
                self.input_buffer = Some(String::new());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_interval(true),
            KeyCode::Char('-') | KeyCode::Char('_') => self.adjust_interval(false),
            _ => {}
        }
    }

    /// Keys while the custom array line is open
    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.input_buffer.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.input_buffer = None;
                self.set_status("Custom array cancelled");
            }
            KeyCode::Enter => {
                let text = std::mem::take(buffer);
                self.input_buffer = None;
                match parse_values(&text) {
                    Ok(values) => {
                        self.session.load_initial_array(values);
                        self.set_status("Custom array set");
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | '-' | ' ') => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    fn start(&mut self, kind: AlgorithmKind) {
        self.session.select_algorithm(kind);
        if self.session.is_terminal() {
            self.set_status(format!("{}: nothing to sort", kind));
        } else {
            self.set_status(format!("Running {}", kind));
        }
    }

    fn step_forward(&mut self, n: usize) {
        if self.session.kind().is_none() {
            self.set_status("Pick an algorithm first");
            return;
        }
        let mut stepped = 0;
        for _ in 0..n {
            if self.session.is_terminal() {
                break;
            }
            self.session.step();
            stepped += 1;
        }
        if self.session.is_terminal() {
            self.set_status("Sort complete!");
        } else {
            self.set_status(format!("Stepped forward {} step(s)", stepped));
        }
    }

    fn regenerate(&mut self, pattern: ArrayPattern) {
        let values = generate(pattern, self.array_size, &mut self.rng);
        self.session.load_initial_array(values);
        debug!(%pattern, size = self.array_size, "array regenerated");
        self.set_status(format!("{} array generated", capitalize(pattern.name())));
    }

    fn adjust_interval(&mut self, slower: bool) {
        let current = u64::try_from(self.session.tick_interval().as_millis()).unwrap_or(MAX_TICK_MS);
        let next = if slower {
            current.saturating_add(TICK_STEP_MS)
        } else {
            current.saturating_sub(TICK_STEP_MS)
        }
        .clamp(MIN_TICK_MS, MAX_TICK_MS);
        match self.session.set_tick_interval(next) {
            Ok(()) => self.set_status(format!("Interval {} ms", next)),
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn app(values: Vec<i32>) -> App {
        App::new(Session::new(values), StdRng::seed_from_u64(5), 12)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn algorithm_keys_start_sessions() {
        let mut app = app(vec![3, 1, 2]);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.session.kind(), Some(AlgorithmKind::Quick));
        assert_eq!(app.session.playback(), Playback::Playing);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.playback(), Playback::Paused);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.values(), &[1, 2, 3]);
        assert_eq!(app.session.playback(), Playback::Finished);
    }

    #[test]
    fn number_keys_step_and_pause() {
        let mut app = app(vec![4, 3, 2, 1]);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.steps(), 3);
        assert_eq!(app.session.playback(), Playback::Paused);
    }

    #[test]
    fn custom_array_is_applied_or_rejected() {
        let mut app = app(vec![1]);
        press(&mut app, KeyCode::Char('e'));
        for c in "5,3,8,1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.values(), &[5, 3, 8, 1]);
        assert!(!app.status_is_error);

        press(&mut app, KeyCode::Char('e'));
        for c in "5,,1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.values(), &[5, 3, 8, 1], "bad input leaves the array alone");
        assert!(app.status_is_error);
    }

    #[test]
    fn generate_keys_replace_the_array() {
        let mut app = app(vec![1, 2]);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.session.values(), &[12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.session.values()[0], 1);
        assert_eq!(app.session.playback(), Playback::Idle);
    }

    #[test]
    fn speed_keys_stay_in_range() {
        let mut app = app(vec![1, 2]);
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.session.tick_interval(), Duration::from_millis(MIN_TICK_MS));
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.session.tick_interval(), Duration::from_millis(MAX_TICK_MS));
    }

    #[test]
    fn renders_every_pane() {
        let mut app = app(vec![5, 3, 8, 1]);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Right);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        terminal.draw(|f| app.render(f)).expect("draw");

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Analysis Dashboard"));
        assert!(text.contains("Merge Sort"));
        assert!(text.contains("Comparisons"));
        assert_eq!(app.session.playback(), Playback::Paused);
    }
}
