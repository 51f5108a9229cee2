use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameEngine, MoveOutcome, MAX_PLAYERS, MIN_PLAYERS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

/// The "start new game" form: how many players, and one color per seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    colors: Vec<String>,
    player_count: usize,
    focused: usize,
}

impl SetupForm {
    /// Build the form from the configured suggestions, one per seat.
    pub fn new(config: &GameConfig) -> Self {
        let mut colors: Vec<String> = config
            .default_colors
            .iter()
            .take(MAX_PLAYERS)
            .cloned()
            .collect();
        colors.resize(MAX_PLAYERS, String::new());

        SetupForm {
            colors,
            player_count: config.default_player_count.clamp(MIN_PLAYERS, MAX_PLAYERS),
            focused: 0,
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Get the colors of the seats in play
    pub fn colors(&self) -> &[String] {
        &self.colors[..self.player_count]
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    fn add_player(&mut self) {
        self.player_count = (self.player_count + 1).min(MAX_PLAYERS);
    }

    fn remove_player(&mut self) {
        self.player_count = self.player_count.saturating_sub(1).max(MIN_PLAYERS);
        self.focused = self.focused.min(self.player_count - 1);
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.player_count;
    }

    fn focus_prev(&mut self) {
        self.focused = (self.focused + self.player_count - 1) % self.player_count;
    }

    fn push_char(&mut self, c: char) {
        self.colors[self.focused].push(c);
    }

    fn pop_char(&mut self) {
        self.colors[self.focused].pop();
    }
}

pub struct App {
    form: SetupForm,
    /// `None` until a game is started from the setup form.
    engine: Option<GameEngine>,
    height: usize,
    width: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &GameConfig) -> Self {
        App {
            form: SetupForm::new(config),
            engine: None,
            height: config.height,
            width: config.width,
            selected_column: config.width / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Skip the setup screen and start straight away with `colors`.
    pub fn with_players<S: AsRef<str>>(
        config: &GameConfig,
        colors: &[S],
    ) -> Result<Self, GameError> {
        let engine = GameEngine::start_with_dimensions(colors, config.height, config.width)?;

        let mut app = Self::new(config);
        app.form.player_count = engine.players().len();
        for (slot, player) in app.form.colors.iter_mut().zip(engine.players()) {
            *slot = player.color().to_string();
        }
        app.begin(engine);
        Ok(app)
    }

    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if self.engine.is_some() {
            self.handle_game_key(key);
        } else {
            self.handle_setup_key(key);
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Left => self.form.remove_player(),
            KeyCode::Right => self.form.add_player(),
            KeyCode::Down | KeyCode::Tab => self.form.focus_next(),
            KeyCode::Up | KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Backspace => self.form.pop_char(),
            KeyCode::Enter => self.start_game(),
            KeyCode::Char(c) => self.form.push_char(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.width {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                // Same players, fresh board
                self.start_game();
            }
            KeyCode::Char('n') => {
                self.engine = None;
                self.message = Some("Choose players for a new game".to_string());
            }
            _ => {}
        }
    }

    /// Replace any running game with a new one built from the setup form
    fn start_game(&mut self) {
        match GameEngine::start_with_dimensions(self.form.colors(), self.height, self.width) {
            Ok(engine) => self.begin(engine),
            Err(err) => {
                debug!(%err, "setup rejected");
                self.message = Some(format!("Please choose valid colors: {err}"));
            }
        }
    }

    fn begin(&mut self, engine: GameEngine) {
        self.message = Some(format!(
            "New game started! {} goes first",
            engine.current_player_color()
        ));
        self.engine = Some(engine);
        self.selected_column = self.width / 2;
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        self.message = match engine.drop_piece(self.selected_column) {
            Ok(MoveOutcome::Accepted { .. }) => None,
            Ok(MoveOutcome::ColumnFull) => Some("Column is full!".to_string()),
            Ok(MoveOutcome::Won { color, .. }) => Some(format!(
                "Player {color} won! Press 'r' to restart or 'n' for a new setup."
            )),
            Ok(MoveOutcome::Tied { .. }) => {
                Some("Tie! Press 'r' to restart or 'n' for a new setup.".to_string())
            }
            Ok(MoveOutcome::GameAlreadyOver) => {
                Some("Game over! Press 'r' to restart.".to_string())
            }
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.engine {
            Some(engine) => {
                super::game_view::render(frame, engine, self.selected_column, &self.message)
            }
            None => super::setup_view::render(frame, &self.form, &self.message),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn clear_field(app: &mut App) {
        for _ in 0..32 {
            press(app, KeyCode::Backspace);
        }
    }

    #[test]
    fn test_setup_form_prefills_defaults() {
        let app = App::default();
        assert!(app.engine().is_none());
        assert_eq!(app.form().colors(), ["red", "blue"]);
        assert_eq!(app.form().focused(), 0);
    }

    #[test]
    fn test_player_count_changes_within_bounds() {
        let mut app = App::default();
        for _ in 0..5 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.form().colors(), ["red", "blue", "green", "orange"]);

        press(&mut app, KeyCode::Up); // focus wraps to the last seat
        assert_eq!(app.form().focused(), 3);

        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.form().player_count(), 2);
        assert_eq!(app.form().focused(), 1);
    }

    #[test]
    fn test_enter_starts_game_with_form_colors() {
        let mut app = App::default();
        press(&mut app, KeyCode::Tab);
        clear_field(&mut app);
        type_text(&mut app, "yellow");
        press(&mut app, KeyCode::Enter);

        let engine = app.engine().expect("game should start");
        let colors: Vec<&str> = engine.players().iter().map(|p| p.color()).collect();
        assert_eq!(colors, vec!["red", "yellow"]);
        assert_eq!(app.message(), Some("New game started! red goes first"));
    }

    #[test]
    fn test_duplicate_colors_stay_on_setup() {
        let mut app = App::default();
        press(&mut app, KeyCode::Down);
        clear_field(&mut app);
        type_text(&mut app, "red");
        press(&mut app, KeyCode::Enter);

        assert!(app.engine().is_none());
        assert!(app
            .message()
            .unwrap()
            .starts_with("Please choose valid colors"));
    }

    #[test]
    fn test_q_is_typed_during_setup_but_quits_in_game() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        assert_eq!(app.form().colors()[0], "redq");

        let mut app = App::with_players(&GameConfig::default(), &["red", "blue"]).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_drop_and_column_keys() {
        let mut app = App::with_players(&GameConfig::default(), &["red", "blue"]).unwrap();
        press(&mut app, KeyCode::Enter); // middle column
        press(&mut app, KeyCode::Char('1'));

        let engine = app.engine().unwrap();
        assert_eq!(engine.cell_at(5, 3).unwrap().map(|p| p.color()), Some("red"));
        assert_eq!(engine.cell_at(5, 0).unwrap().map(|p| p.color()), Some("blue"));
        assert_eq!(engine.current_player_color(), "red");
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::with_players(&GameConfig::default(), &["red", "blue", "green"]).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('2'));
        }
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().unwrap().moves_played(), 6);
    }

    #[test]
    fn test_win_restart_and_new_setup() {
        let mut app = App::with_players(&GameConfig::default(), &["red", "blue"]).unwrap();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert!(app.engine().unwrap().is_over());
        assert!(app.message().unwrap().starts_with("Player red won!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        let engine = app.engine().unwrap();
        assert!(!engine.is_over());
        assert_eq!(engine.moves_played(), 0);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.engine().is_none());
        assert_eq!(app.form().colors(), ["red", "blue"]);
    }

    #[test]
    fn test_renders_both_screens() {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        let mut app = App::default();

        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Player 1 Color: red"));

        press(&mut app, KeyCode::Enter);
        terminal.draw(|f| app.render(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Current Player: red"));
    }
}
