//! Watch command implementation - Interactive TUI viewer.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::stdout;
use std::path::Path;
use std::time::{Duration, Instant};
use warlife::{GameConfig, GameRunner, Grid, Team, games};

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the game fails to load or the TUI fails.
pub(crate) fn execute(dir: &Path, speed: u64) -> Result<(), CliError> {
    let (grid, config) = games::load_dir(dir)?;
    let name = dir
        .file_name()
        .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().to_string());

    run_tui(App::new(name, grid, config, speed))
}

/// App state for the TUI.
struct App {
    name: String,
    config: GameConfig,
    initial: Grid,
    runner: GameRunner,
    /// Teams in census order of the initial grid; fixes color assignment
    /// for the whole run.
    teams: Vec<Team>,
    paused: bool,
    speed_ms: u64,
    last_step: Instant,
}

impl App {
    fn new(name: String, grid: Grid, config: GameConfig, speed_ms: u64) -> Self {
        let runner = GameRunner::new(grid.clone(), config);
        let teams = runner.census().iter().map(|(team, _)| team).collect();
        Self {
            name,
            config,
            initial: grid,
            runner,
            teams,
            paused: true, // Start paused
            speed_ms,
            last_step: Instant::now(),
        }
    }

    fn step_forward(&mut self) {
        if self.runner.advance() {
            self.last_step = Instant::now();
        }
    }

    fn restart(&mut self) {
        self.runner = GameRunner::new(self.initial.clone(), self.config);
        self.paused = true;
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn increase_speed(&mut self) {
        self.speed_ms = self.speed_ms.saturating_sub(50).max(25);
    }

    fn decrease_speed(&mut self) {
        self.speed_ms = (self.speed_ms + 50).min(2000);
    }

    fn should_auto_step(&self) -> bool {
        !self.paused
            && !self.runner.is_over()
            && self.last_step.elapsed() >= Duration::from_millis(self.speed_ms)
    }

    fn team_color(&self, team: Team) -> Color {
        let index = self.teams.iter().position(|&t| t == team).unwrap_or(0);
        tui_palette(index)
    }
}

fn tui_palette(index: usize) -> Color {
    const PALETTE: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::LightRed,
        Color::LightBlue,
    ];
    PALETTE[index % PALETTE.len()]
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        // Draw
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Auto-step if needed
        if app.should_auto_step() {
            app.step_forward();
        }

        // Handle input with timeout
        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char(' ') => app.toggle_pause(),
                KeyCode::Right | KeyCode::Char('l') => {
                    app.paused = true;
                    app.step_forward();
                }
                KeyCode::Char('+' | '=') => app.increase_speed(),
                KeyCode::Char('-') => app.decrease_speed(),
                KeyCode::Char('r') => app.restart(),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0], app);

    // Main content - grid and census
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_grid(f, main_chunks[0], app);
    render_census(f, main_chunks[1], app);

    // Footer
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.runner.is_over() {
        "GAME OVER"
    } else if app.paused {
        "PAUSED"
    } else {
        "RUNNING"
    };

    let title = format!(
        " Warlife | {} | Round {}/{} | {} | Speed: {}ms ",
        app.name,
        app.runner.round(),
        app.config.win_round,
        status,
        app.speed_ms
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let grid = app.runner.grid();

    // Show the portion of the grid that fits the panel
    let visible_width = usize::from(area.width).saturating_sub(2).min(usize::from(grid.width()));
    let visible_height = usize::from(area.height)
        .saturating_sub(2)
        .min(usize::from(grid.height()));

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for y in 0..visible_height {
        let mut spans = Vec::with_capacity(visible_width);
        #[allow(clippy::cast_possible_truncation)]
        for cell in &grid.row(y as u16)[..visible_width] {
            match cell.team() {
                Some(team) => spans.push(Span::styled(
                    team.symbol().to_string(),
                    Style::default().fg(app.team_color(team)),
                )),
                None => spans.push(Span::styled(
                    ".",
                    Style::default().fg(Color::DarkGray),
                )),
            }
        }
        lines.push(Line::from(spans));
    }

    let grid_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));

    f.render_widget(grid_widget, area);
}

fn render_census(f: &mut Frame, area: Rect, app: &App) {
    let census = app.runner.census();
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    for (team, count) in census.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Team {team} "),
                Style::default()
                    .fg(app.team_color(team))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{count} alive")),
        ]));
    }
    if census.teams_alive() == 0 {
        lines.push(Line::from("no cells alive"));
    }

    if let Some(verdict) = app.runner.verdict() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("End: {}", verdict.reason)));
        match verdict.winner {
            Some(team) => lines.push(Line::from(vec![
                Span::raw("Winner: "),
                Span::styled(
                    team.symbol().to_string(),
                    Style::default()
                        .fg(app.team_color(team))
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            None => lines.push(Line::from("Winner: none")),
        }
    }

    let census_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Teams "))
        .wrap(Wrap { trim: false });

    f.render_widget(census_widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.runner.is_over() {
        " [q] Quit  [r] Restart  [→] Step "
    } else {
        " [q] Quit  [Space] Pause  [→] Step  [+/-] Speed  [r] Restart "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
