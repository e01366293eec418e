use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

use weekly_ledger::{Clock, KeyValueStore, Ledger, Status};

pub struct App<S: KeyValueStore, C: Clock> {
    pub ledger: Ledger<S, C>,
    pub state: TableState,
    pub should_quit: bool,
}

impl<S: KeyValueStore, C: Clock> App<S, C> {
    /// Wrap an already mounted ledger.
    pub fn new(ledger: Ledger<S, C>) -> Self {
        let mut app = Self {
            ledger,
            state: TableState::default(),
            should_quit: false,
        };
        app.clamp_selection();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('r') if ctrl => {
                self.ledger.reload();
                self.clamp_selection();
            }
            KeyCode::Down => self.next(),
            KeyCode::Char('j') if ctrl => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Char('k') if ctrl => self.previous(),
            KeyCode::Enter => {
                self.ledger.submit();
                self.clamp_selection();
            }
            KeyCode::Delete => self.delete_selected(),
            KeyCode::Backspace => {
                let mut input = self.ledger.state().input.clone();
                input.pop();
                self.ledger.set_input(input);
            }
            KeyCode::Char(c) if !ctrl => {
                let mut input = self.ledger.state().input.clone();
                input.push(c);
                self.ledger.set_input(input);
            }
            _ => {}
        }
    }

    pub fn delete_selected(&mut self) {
        let id = self
            .state
            .selected()
            .and_then(|i| self.ledger.state().entries.get(i))
            .map(|e| e.id.clone());

        if let Some(id) = id {
            self.ledger.delete(&id);
            self.clamp_selection();
        }
    }

    pub fn next(&mut self) {
        let len = self.ledger.state().entries.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.ledger.state().entries.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    fn clamp_selection(&mut self) {
        let len = self.ledger.state().entries.len();
        let selected = match (len, self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
    }
}

pub fn run_ui<S: KeyValueStore, C: Clock>(app: &mut App<S, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<S, C>,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

pub fn ui<S: KeyValueStore, C: Clock>(f: &mut Frame, app: &mut App<S, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error line
            Constraint::Length(1), // Decimal note
            Constraint::Min(0),    // Entries
            Constraint::Length(3), // Total
            Constraint::Length(1), // Key help
        ])
        .split(f.size());

    let title = Paragraph::new(Line::from(Span::styled(
        "Bem-Vindo",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_input(f, chunks[1], app);

    let state = app.ledger.state();
    let message = match (state.status(), &state.error) {
        (Status::Error, Some(message)) => {
            Span::styled(message.as_str(), Style::default().fg(Color::Red))
        }
        (Status::Empty, _) => Span::styled(
            "Nenhum valor registrado.",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ),
        _ => Span::raw(""),
    };
    f.render_widget(Paragraph::new(message), chunks[2]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "OBS: Para inserir valores quebrados, use ponto e não vírgula",
            Style::default().fg(Color::Red),
        )),
        chunks[3],
    );

    render_table(f, chunks[4], app);
    render_total(f, chunks[5], app);
    render_status_bar(f, chunks[6]);
}

fn render_input<S: KeyValueStore, C: Clock>(f: &mut Frame, area: Rect, app: &App<S, C>) {
    let input = &app.ledger.state().input;
    let symbol = &app.ledger.locale().currency_symbol;

    let content = if input.is_empty() {
        Span::styled(
            format!("Valor {}:", symbol),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(input.as_str())
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Insira o valor da semana: "),
    );
    f.render_widget(paragraph, area);

    // stay inside the box however long the pasted text is
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    let offset = typed.min(area.width.saturating_sub(2));
    f.set_cursor(area.x.saturating_add(1).saturating_add(offset), area.y.saturating_add(1));
}

fn render_table<S: KeyValueStore, C: Clock>(f: &mut Frame, area: Rect, app: &mut App<S, C>) {
    let header = Row::new(vec!["Id:", "Data:", "Valor:", "Ação:"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let symbol = app.ledger.locale().currency_symbol.clone();
    let rows: Vec<Row> = app
        .ledger
        .state()
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                Cell::from((i + 1).to_string()),
                Cell::from(entry.date.clone()),
                Cell::from(format!("{}: {}", symbol, entry.value))
                    .style(Style::default().fg(Color::Green)),
                Cell::from("[Del] Excluir").style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Min(12),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_total<S: KeyValueStore, C: Clock>(f: &mut Frame, area: Rect, app: &App<S, C>) {
    let text = format!(
        "TOTAL: {} {}",
        app.ledger.locale().currency_symbol,
        app.ledger.total_display()
    );

    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).style(Style::default().bg(Color::Blue)));

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let help = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("Enter", key),
        Span::styled(" enviar  ", help),
        Span::styled("↑/↓", key),
        Span::styled(" selecionar  ", help),
        Span::styled("Del", key),
        Span::styled(" excluir  ", help),
        Span::styled("Ctrl-r", key),
        Span::styled(" recarregar  ", help),
        Span::styled("Esc", key),
        Span::styled(" sair", help),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
