//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: turning messages into state changes, driving the
//! mouse drag gesture, persisting the board after every change, and
//! rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use swimlane_config::{BoardStorage, Config, DragConfig, FileStore, KeyValueStore, Theme};
use swimlane_protocol::{
    CardId, ColumnId, Distribution, DropOutcome, HoverTarget, InsertionPoint, Message, discard_drop,
    handle_drop,
};
use tracing::{debug, info, warn};

use crate::{
    AppState, Focus,
    event::{event_to_message, poll_event},
    geometry::{BoardGeometry, BoardHit},
    layout::{MIN_HEIGHT, MIN_WIDTH, ScreenLayout},
    palette::Palette,
    state::Press,
    terminal::AppTerminal,
    widgets::{
        BoardView, StatusMode, render_board, render_burn_barrel, render_card_form,
        render_distribution, render_help_overlay, render_status_bar,
    },
};

/// The main application struct.
///
/// Owns the application state and the storage the board is saved to.
#[derive(Debug)]
pub struct App<S = FileStore> {
    state: AppState,
    storage: BoardStorage<S>,
    drag_config: DragConfig,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Creates the application, loading the saved board and theme.
    ///
    /// The starting theme is the saved preference, else the configured
    /// default, else dark.
    ///
    /// # Examples
    ///
    /// ```
    /// use swimlane_config::{BoardStorage, Config, MemoryStore};
    /// use swimlane_tui::App;
    ///
    /// let app = App::new(BoardStorage::new(MemoryStore::new()), &Config::default());
    /// assert!(app.state().store.is_empty());
    /// ```
    #[must_use]
    pub fn new(storage: BoardStorage<S>, config: &Config) -> Self {
        let store = storage.load_cards();
        let theme = Theme::resolve(storage.load_theme(), config.theme);
        info!(cards = store.len(), theme = %theme, "board loaded");

        Self {
            state: AppState::new(store, theme),
            storage,
            drag_config: config.drag,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the storage the board is saved to.
    #[must_use]
    pub fn storage(&self) -> &BoardStorage<S> {
        &self.storage
    }

    /// Returns whether the app has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the terminal area used for mouse hit-testing.
    ///
    /// [`App::view`] keeps it current; this is for driving the app without
    /// rendering.
    pub fn resize(&mut self, area: Rect) {
        self.last_area = area;
    }

    /// Computes the screen layout and board geometry for the last known
    /// area, exactly as the last frame drew them.
    fn geometry(&self) -> Option<(ScreenLayout, BoardGeometry)> {
        let layout = ScreenLayout::compute(self.last_area)?;
        let geometry = BoardGeometry::compute(&self.state.store, layout.board, self.state.selection());
        Some((layout, geometry))
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Opening help abandons
    /// any drag in progress. While the add form
    /// is open, only form messages are handled.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::ToggleHelp if self.state.focus == Focus::Board => {
                self.cancel_drag();
                self.state.press = None;
                self.state.toggle_help();
                return;
            }
            Message::FocusLost => {
                self.cancel_drag();
                self.state.press = None;
                return;
            }
            _ => {}
        }

        if self.state.dismiss_help() {
            return;
        }

        if self.state.focus == Focus::Form {
            self.update_form(msg);
            return;
        }

        match msg {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Escape => {
                if self.state.drag.is_active() {
                    self.cancel_drag();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::AddCard => {
                let column = self.state.selected_column_id();
                self.state.open_form(column);
            }
            Message::DeleteCard => self.delete_selected(),
            Message::AdvanceCard => self.advance_selected(),
            Message::FinishCard => self.finish_selected(),
            Message::ToggleTheme => {
                self.state.theme = self.state.theme.toggle();
                self.storage.save_theme(self.state.theme);
                self.state.set_status(format!("Theme: {}", self.state.theme));
            }
            Message::PointerDown { column, row } => self.pointer_down(column, row),
            Message::PointerDrag { column, row } => self.pointer_drag(column, row),
            Message::PointerUp { column, row } => self.pointer_up(column, row),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message) {
        match msg {
            Message::FormInput { ch } => {
                if let Some(form) = self.state.form.as_mut() {
                    form.input(ch);
                }
            }
            Message::FormBackspace => {
                if let Some(form) = self.state.form.as_mut() {
                    form.backspace();
                }
            }
            Message::FormSwitchField => {
                if let Some(form) = self.state.form.as_mut() {
                    form.switch_field();
                }
            }
            Message::FormSubmit => self.submit_form(),
            Message::FormCancel => self.state.close_form(),
            _ => {}
        }
    }

    /// Adds the form's card; a blank title keeps the form open.
    fn submit_form(&mut self) {
        let Some(form) = self.state.form.take() else {
            return;
        };
        if form.is_blank() {
            self.state.form = Some(form);
            self.state.set_status("A card needs a title");
            return;
        }

        let added = self.state.store.add_with_description(
            &form.title,
            Some(&form.description),
            form.column,
        );
        self.state.close_form();

        if let Some(id) = added {
            self.persist();
            self.state.select_card(&id);
            self.state.set_status(format!("Added to {}", form.column.display_name()));
        }
    }

    fn persist(&mut self) {
        self.storage.save_cards(&self.state.store);
    }

    fn delete_selected(&mut self) {
        let Some(card) = self.state.selected_card().cloned() else {
            return;
        };
        if self.state.store.remove(&card.id) {
            self.persist();
            self.state.clamp_card_selection();
            self.state.set_status(format!("Deleted \"{}\"", card.title));
        }
    }

    fn advance_selected(&mut self) {
        let Some(card) = self.state.selected_card().cloned() else {
            return;
        };
        let Some(next) = card.column.next_stage() else {
            self.state.set_status("Already done");
            return;
        };
        self.set_selected_column(&card.id, next);
    }

    fn finish_selected(&mut self) {
        let Some(card) = self.state.selected_card().cloned() else {
            return;
        };
        if card.column == ColumnId::Done {
            self.state.set_status("Already done");
            return;
        }
        self.set_selected_column(&card.id, ColumnId::Done);
    }

    fn set_selected_column(&mut self, id: &CardId, column: ColumnId) {
        if self.state.store.set_column(id, column) {
            self.persist();
            self.state.select_card(id);
            self.state.set_status(format!("Moved to {}", column.display_name()));
        }
    }

    fn cancel_drag(&mut self) {
        if self.state.drag.is_active() {
            self.state.drag.cancel();
            self.state.payload.clear();
            self.state.set_status("Drag cancelled");
        }
    }

    /// Records a press; it becomes a click or a drag on what follows.
    fn pointer_down(&mut self, x: u16, y: u16) {
        self.state.press = None;
        let Some((_, geometry)) = self.geometry() else {
            return;
        };

        match geometry.hit(x, y) {
            Some(BoardHit::Card { column, index, id }) => {
                self.state.press = Some(Press::Card { id, column, index });
            }
            Some(BoardHit::AddCard(column)) => {
                self.state.press = Some(Press::AddCard(column));
            }
            Some(BoardHit::Column(column)) => {
                self.state.selected_column = column.index();
                self.state.clear_selection();
            }
            None => {}
        }
    }

    /// Starts the drag on the first movement after pressing a card, then
    /// tracks what the pointer hovers.
    fn pointer_drag(&mut self, x: u16, y: u16) {
        if !self.state.drag.is_active() {
            match self.state.press.take() {
                Some(Press::Card { id, column, index }) => {
                    self.state.selected_column = column.index();
                    self.state.selected_card = Some(index);
                    self.state.drag.start(id, &mut self.state.payload);
                    self.state.status = None;
                }
                other => {
                    self.state.press = other;
                    return;
                }
            }
        }

        let Some((layout, geometry)) = self.geometry() else {
            self.state.drag.leave();
            return;
        };

        if layout.burn_barrel.contains(Position::new(x, y)) {
            self.state.drag.hover_over(HoverTarget::BurnBarrel);
            return;
        }

        let hover = geometry.column_at(x, y).and_then(|column| {
            column
                .locate(y, self.drag_config.highlight_radius)
                .map(|choice| HoverTarget::Column {
                    column: column.column,
                    slot: choice.index,
                    emphasized: choice.emphasized,
                })
        });
        match hover {
            Some(target) => self.state.drag.hover_over(target),
            None => self.state.drag.leave(),
        }
    }

    /// Finishes a click or a drag.
    fn pointer_up(&mut self, x: u16, y: u16) {
        let press = self.state.press.take();

        if !self.state.drag.is_active() {
            match press {
                Some(Press::Card { id, .. }) => {
                    self.state.select_card(&id);
                }
                Some(Press::AddCard(column)) => self.state.open_form(column),
                None => {}
            }
            return;
        }

        let Some((layout, geometry)) = self.geometry() else {
            self.cancel_drag();
            return;
        };

        if layout.burn_barrel.contains(Position::new(x, y)) {
            self.drop_on_burn_barrel();
            return;
        }

        let Some(column) = geometry.column_at(x, y) else {
            self.cancel_drag();
            return;
        };
        let target = column
            .locate(y, self.drag_config.highlight_radius)
            .map_or(InsertionPoint::End, |choice| choice.target);
        let column = column.column;

        let state = &mut self.state;
        let outcome = handle_drop(
            &mut state.store,
            &mut state.drag,
            &mut state.payload,
            column,
            &target,
        );
        debug!(?outcome, column = %column, target = %target.as_marker(), "drop handled");

        match outcome {
            DropOutcome::Moved(id) => {
                self.persist();
                self.state.select_card(&id);
                self.state.set_status(format!("Moved to {}", column.display_name()));
            }
            DropOutcome::OwnSlot => self.state.set_status("Card left in place"),
            DropOutcome::NoDraggedCard => {}
            DropOutcome::CardMissing(id) => {
                warn!(card_id = %id, "dropped card is no longer on the board");
                self.state.set_status("Card no longer exists");
            }
        }
    }

    fn drop_on_burn_barrel(&mut self) {
        let title = self
            .state
            .drag
            .dragged()
            .and_then(|id| self.state.store.get(id))
            .map(|card| card.title.clone());

        let state = &mut self.state;
        match discard_drop(&mut state.store, &mut state.drag, &mut state.payload) {
            Some(id) => {
                debug!(card_id = %id, "card burned");
                self.persist();
                self.state.clamp_card_selection();
                self.state.set_status(format!("Deleted \"{}\"", title.unwrap_or_default()));
            }
            None => self.state.set_status("Nothing deleted"),
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight, hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let palette = Palette::for_theme(self.state.theme);
        frame.buffer_mut().set_style(
            area,
            Style::default().bg(palette.background).fg(palette.text),
        );

        let Some((layout, geometry)) = self.geometry() else {
            self.header_visible = false;
            Self::render_terminal_too_small(frame, area, &palette);
            return;
        };

        self.header_visible = layout.header.is_some();
        if let Some(header) = layout.header {
            self.render_header(frame, header, &palette);
        }

        let state = &self.state;
        let buf = frame.buffer_mut();

        let board = BoardView {
            store: &state.store,
            palette: &palette,
            selected_column: state.selected_column_id(),
            selected_card: state.selected_card,
            dragged: state.drag.dragged(),
            hover: state.drag.hover(),
        };
        render_board(&geometry, &board, buf);

        let distribution = Distribution::from_cards(state.store.snapshot(), &ColumnId::all());
        render_distribution(&distribution, &palette, layout.distribution, buf);

        let barrel_active = matches!(state.drag.hover(), Some(HoverTarget::BurnBarrel));
        render_burn_barrel(barrel_active, &palette, layout.burn_barrel, buf);

        let mode = if state.form.is_some() {
            StatusMode::Form
        } else if state.drag.is_active() {
            StatusMode::Dragging
        } else {
            StatusMode::Board
        };
        render_status_bar(state.status.as_deref(), mode, &palette, layout.status, buf);

        if let Some(form) = &state.form {
            render_card_form(form, &palette, area, buf);
        }

        if state.help_visible {
            render_help_overlay(&palette, area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect, palette: &Palette) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(palette.accent))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, theme and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, theme_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(10),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "swimlane",
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" - ", Style::default().fg(palette.muted)),
            Span::styled("Kanban Board", Style::default().fg(palette.text)),
        ]));
        frame.render_widget(title, title_area);

        let theme = match self.state.theme {
            Theme::Dark => "☾ dark",
            Theme::Light => "☀ light",
        };
        let theme_cue = Paragraph::new(Line::from(vec![
            Span::styled("t ", Style::default().fg(palette.accent)),
            Span::styled(theme, Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(theme_cue, theme_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(palette.muted)),
            Span::styled("?", Style::default().fg(palette.accent)),
            Span::styled(" for help", Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swimlane_config::{BoardStorage, Config, FileStore};
    /// use swimlane_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let config = Config::load().await?;
    ///     let storage = BoardStorage::new(FileStore::new(config.resolve_data_dir()?));
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(storage, &config);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let form_open = self.state.focus == Focus::Form;
                if let Some(msg) = event_to_message(&event, form_open) {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(cards = self.state.store.len(), "quitting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use swimlane_config::MemoryStore;
    use swimlane_protocol::{Card, CardStore};

    const AREA: Rect = Rect::new(0, 0, 120, 40);

    fn app_with(cards: &[(&str, ColumnId)]) -> App<MemoryStore> {
        let store = CardStore::from_cards(
            cards
                .iter()
                .map(|(id, column)| Card::with_id(*id, format!("Card {id}"), *column))
                .collect(),
        );
        let mut storage = BoardStorage::new(MemoryStore::new());
        storage.save_cards(&store);
        let mut app = App::new(storage, &Config::default());
        app.resize(AREA);
        app
    }

    fn ids(app: &App<MemoryStore>, column: ColumnId) -> Vec<String> {
        app.state
            .store
            .cards_in(column)
            .map(|c| c.id.to_string())
            .collect()
    }

    fn saved(app: &App<MemoryStore>) -> CardStore {
        app.storage.load_cards()
    }

    /// Center of the card `id` on screen.
    fn card_point(app: &App<MemoryStore>, id: &str) -> (u16, u16) {
        let (_, geometry) = app.geometry().unwrap();
        let card = geometry
            .columns
            .iter()
            .flat_map(|c| &c.cards)
            .find(|c| c.id.as_str() == id)
            .unwrap();
        (card.area.x + 2, card.area.y + 1)
    }

    fn slot_point(app: &App<MemoryStore>, column: ColumnId, slot: usize) -> (u16, u16) {
        let (_, geometry) = app.geometry().unwrap();
        let slot = &geometry.column(column).unwrap().slots[slot];
        (slot.area.x + 2, slot.area.y)
    }

    fn down((column, row): (u16, u16)) -> Message {
        Message::PointerDown { column, row }
    }

    fn moved((column, row): (u16, u16)) -> Message {
        Message::PointerDrag { column, row }
    }

    fn up((column, row): (u16, u16)) -> Message {
        Message::PointerUp { column, row }
    }

    fn drag(app: &mut App<MemoryStore>, from: (u16, u16), to: (u16, u16)) {
        app.update(down(from));
        app.update(moved(to));
        app.update(up(to));
    }

    fn render(app: &mut App<MemoryStore>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn app_new_loads_saved_board_and_theme() {
        let mut storage = BoardStorage::new(MemoryStore::new());
        let mut store = CardStore::new();
        store.add("Saved", ColumnId::Todo);
        storage.save_cards(&store);
        storage.save_theme(Theme::Light);

        let config = Config {
            theme: Some(Theme::Dark),
            ..Config::default()
        };
        let app = App::new(storage, &config);

        assert_eq!(app.state().store, store);
        assert_eq!(app.state().theme, Theme::Light);
    }

    #[test]
    fn configured_theme_used_without_saved_preference() {
        let config = Config {
            theme: Some(Theme::Light),
            ..Config::default()
        };
        let app = App::new(BoardStorage::new(MemoryStore::new()), &config);
        assert_eq!(app.state().theme, Theme::Light);
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = app_with(&[]);
        assert!(!app.should_quit());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let mut app = app_with(&[]);
        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        app.update(Message::NavigateRight);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_column, 0, "navigation swallowed");
    }

    #[test]
    fn drag_reorders_within_column() {
        let mut app = app_with(&[
            ("a", ColumnId::Todo),
            ("b", ColumnId::Todo),
            ("c", ColumnId::Todo),
        ]);

        let from = card_point(&app, "c");
        let to = slot_point(&app, ColumnId::Todo, 0);
        drag(&mut app, from, to);

        assert_eq!(ids(&app, ColumnId::Todo), ["c", "a", "b"]);
        assert_eq!(saved(&app), app.state.store);
        assert!(!app.state.drag.is_active());
        assert!(app.state.payload.is_empty());
        assert_eq!(app.state.selected_card().map(|c| c.id.as_str()), Some("c"));
    }

    #[test]
    fn drag_moves_to_end_of_other_column() {
        let mut app = app_with(&[("a", ColumnId::Backlog), ("b", ColumnId::Done)]);

        let from = card_point(&app, "a");
        let to = slot_point(&app, ColumnId::Done, 1);
        drag(&mut app, from, to);

        assert!(ids(&app, ColumnId::Backlog).is_empty());
        assert_eq!(ids(&app, ColumnId::Done), ["b", "a"]);
        assert_eq!(app.state.status.as_deref(), Some("Moved to Done"));
    }

    #[test]
    fn drop_on_own_slot_changes_nothing() {
        let mut app = app_with(&[("a", ColumnId::Todo), ("b", ColumnId::Todo)]);
        let before = app.state.store.clone();

        let from = card_point(&app, "b");
        let to = slot_point(&app, ColumnId::Todo, 1);
        drag(&mut app, from, to);

        assert_eq!(app.state.store, before);
        assert!(!app.state.drag.is_active());
    }

    #[test]
    fn drag_over_column_tracks_nearest_slot() {
        let mut app = app_with(&[("a", ColumnId::Todo), ("b", ColumnId::Doing)]);

        let from = card_point(&app, "a");
        let over = slot_point(&app, ColumnId::Doing, 1);
        app.update(down(from));
        app.update(moved(over));

        assert_eq!(app.state.drag.dragged(), Some(&CardId::new("a")));
        assert_eq!(
            app.state.drag.hover(),
            Some(HoverTarget::Column {
                column: ColumnId::Doing,
                slot: 1,
                emphasized: true,
            })
        );
        assert_eq!(app.state.payload.card_id(), Some(CardId::new("a")));
    }

    #[test]
    fn drop_on_burn_barrel_deletes() {
        let mut app = app_with(&[("a", ColumnId::Todo), ("b", ColumnId::Todo)]);
        let (layout, _) = app.geometry().unwrap();
        let barrel = (layout.burn_barrel.x + 2, layout.burn_barrel.y + 1);

        let from = card_point(&app, "a");
        app.update(down(from));
        app.update(moved(barrel));
        assert_eq!(app.state.drag.hover(), Some(HoverTarget::BurnBarrel));
        app.update(up(barrel));

        assert_eq!(ids(&app, ColumnId::Todo), ["b"]);
        assert_eq!(saved(&app).len(), 1);
        assert_eq!(app.state.status.as_deref(), Some("Deleted \"Card a\""));
    }

    #[test]
    fn release_outside_targets_cancels() {
        let mut app = app_with(&[("a", ColumnId::Todo)]);
        let before = app.state.store.clone();
        let (layout, _) = app.geometry().unwrap();

        let from = card_point(&app, "a");
        drag(&mut app, from, (layout.status.x + 1, layout.status.y));

        assert_eq!(app.state.store, before);
        assert!(!app.state.drag.is_active());
        assert!(app.state.payload.is_empty());
        assert_eq!(app.state.status.as_deref(), Some("Drag cancelled"));
    }

    #[test]
    fn escape_and_focus_loss_cancel_drag() {
        let mut app = app_with(&[("a", ColumnId::Todo)]);
        let from = card_point(&app, "a");
        let over = slot_point(&app, ColumnId::Done, 0);

        app.update(down(from));
        app.update(moved(over));
        app.update(Message::Escape);
        assert!(!app.state.drag.is_active());

        app.update(down(from));
        app.update(moved(over));
        app.update(Message::FocusLost);
        assert!(!app.state.drag.is_active());

        // A release after cancelling is a no-op.
        app.update(up(over));
        assert_eq!(ids(&app, ColumnId::Todo), ["a"]);
    }

    #[test]
    fn opening_help_abandons_drag() {
        let mut app = app_with(&[
            ("x", ColumnId::Todo),
            ("y", ColumnId::Todo),
            ("z", ColumnId::Done),
        ]);
        let x = card_point(&app, "x");
        let y = card_point(&app, "y");
        let done_end = slot_point(&app, ColumnId::Done, 1);

        app.update(down(x));
        app.update(moved(done_end));
        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);
        assert!(!app.state.drag.is_active());
        assert!(app.state.payload.is_empty());

        // The release only closes the help.
        app.update(up(done_end));
        assert!(!app.state.help_visible);
        assert_eq!(ids(&app, ColumnId::Todo), ["x", "y"]);

        // The next gesture drags the newly pressed card.
        drag(&mut app, y, done_end);
        assert_eq!(ids(&app, ColumnId::Todo), ["x"]);
        assert_eq!(ids(&app, ColumnId::Done), ["z", "y"]);
    }

    #[test]
    fn click_selects_card() {
        let mut app = app_with(&[("a", ColumnId::Backlog), ("b", ColumnId::Doing)]);
        let (x, y) = card_point(&app, "b");

        app.update(down((x, y)));
        app.update(up((x, y)));

        assert_eq!(app.state.selected_column_id(), ColumnId::Doing);
        assert_eq!(app.state.selected_card().map(|c| c.id.as_str()), Some("b"));
        assert!(!app.state.drag.is_active());
    }

    #[test]
    fn click_add_row_opens_form_and_submit_adds() {
        let mut app = app_with(&[]);
        let (_, geometry) = app.geometry().unwrap();
        let add = geometry.column(ColumnId::Active).unwrap().add_row.unwrap();

        app.update(down((add.x, add.y)));
        app.update(up((add.x, add.y)));
        assert_eq!(app.state.focus, Focus::Form);

        for ch in "New card".chars() {
            app.update(Message::FormInput { ch });
        }
        app.update(Message::FormSwitchField);
        for ch in "details".chars() {
            app.update(Message::FormInput { ch });
        }
        app.update(Message::FormSubmit);

        assert_eq!(app.state.focus, Focus::Board);
        let cards: Vec<_> = app.state.store.cards_in(ColumnId::Active).collect();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "New card");
        assert_eq!(cards[0].description.as_deref(), Some("details"));
        assert_eq!(saved(&app).len(), 1);
    }

    #[test]
    fn blank_title_keeps_form_open() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        app.update(Message::FormInput { ch: ' ' });
        app.update(Message::FormSubmit);

        assert_eq!(app.state.focus, Focus::Form);
        assert!(app.state.store.is_empty());

        app.update(Message::FormCancel);
        assert_eq!(app.state.focus, Focus::Board);
        assert!(app.state.form.is_none());
    }

    #[test]
    fn form_swallows_board_messages() {
        let mut app = app_with(&[("a", ColumnId::Backlog)]);
        app.update(Message::AddCard);
        app.update(Message::DeleteCard);
        app.update(Message::NavigateRight);

        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.state.selected_column, 0);
    }

    #[test]
    fn keyboard_card_actions() {
        let mut app = app_with(&[("a", ColumnId::Backlog), ("b", ColumnId::Backlog)]);
        app.update(Message::NavigateDown);

        app.update(Message::AdvanceCard);
        assert_eq!(ids(&app, ColumnId::Todo), ["a"]);
        assert_eq!(app.state.selected_column_id(), ColumnId::Todo);

        app.update(Message::FinishCard);
        assert_eq!(ids(&app, ColumnId::Done), ["a"]);

        app.update(Message::AdvanceCard);
        assert_eq!(app.state.status.as_deref(), Some("Already done"));

        app.update(Message::DeleteCard);
        assert!(ids(&app, ColumnId::Done).is_empty());
        assert_eq!(saved(&app), app.state.store);
        assert_eq!(ids(&app, ColumnId::Backlog), ["b"]);
    }

    #[test]
    fn toggle_theme_persists() {
        let mut app = app_with(&[]);
        app.update(Message::ToggleTheme);
        assert_eq!(app.state.theme, Theme::Light);
        assert_eq!(app.storage.load_theme(), Some(Theme::Light));
    }

    #[test]
    fn escape_clears_selection_without_drag() {
        let mut app = app_with(&[("a", ColumnId::Backlog)]);
        app.update(Message::NavigateDown);
        assert!(app.state.selected_card.is_some());
        app.update(Message::Escape);
        assert!(app.state.selected_card.is_none());
    }

    // --- Graceful degradation tests ---

    #[test]
    fn app_view_shows_too_small_message() {
        let mut app = app_with(&[]);
        let content = render(&mut app, 40, 10);

        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = app_with(&[]);
        let content = render(&mut app, 120, MIN_HEIGHT);

        assert!(!app.header_visible);
        assert!(content.contains("Backlog (0)"));
    }

    #[test]
    fn app_view_full_screen() {
        let mut app = app_with(&[("a", ColumnId::Todo)]);
        let content = render(&mut app, 120, 40);

        assert!(app.header_visible);
        assert!(content.contains("swimlane - Kanban Board"));
        assert!(content.contains("Press ? for help"));
        assert!(content.contains("Todo (1)"));
        assert!(content.contains("Card a"));
        assert!(content.contains("Distribution (1 card)"));
        assert!(content.contains("Burn barrel"));
    }

    #[test]
    fn app_view_overlays() {
        let mut app = app_with(&[]);
        app.update(Message::AddCard);
        assert!(render(&mut app, 120, 40).contains("Add card to Backlog"));

        app.update(Message::FormCancel);
        app.update(Message::ToggleHelp);
        assert!(render(&mut app, 120, 40).contains("Press any key to close"));
    }

    #[test]
    fn view_keeps_hit_testing_in_sync() {
        let mut app = app_with(&[("a", ColumnId::Todo)]);
        render(&mut app, 100, 30);
        assert_eq!(app.last_area, Rect::new(0, 0, 100, 30));

        let (x, y) = card_point(&app, "a");
        app.update(down((x, y)));
        app.update(up((x, y)));
        assert_eq!(app.state.selected_column_id(), ColumnId::Todo);
    }
}
