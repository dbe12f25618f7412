//! Terminal Shell
//!
//! One input line, one results pane: type a sentence, press Enter, read the
//! nonsense. Each result shows its text, its toxicity percentage, and the
//! template it was built from.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::runtime::Runtime;

use crate::core::generator::{NonsenseGenerator, SentenceResult};

/// TUI state: the pipeline, the pending input line, and the last outcome.
pub struct App {
    generator: NonsenseGenerator,
    runtime: Runtime,
    input: String,
    results: Vec<SentenceResult>,
    status: Option<String>,
}

impl App {
    pub fn new(generator: NonsenseGenerator, runtime: Runtime) -> Self {
        Self {
            generator,
            runtime,
            input: String::new(),
            results: Vec::new(),
            status: None,
        }
    }

    /// Run the pipeline on the current input line. Errors land in the
    /// status line; the user fixes their input or retries.
    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input);
        match self.runtime.block_on(self.generator.generate(&input)) {
            Ok(results) => {
                self.status = if results.is_empty() {
                    Some("Nothing could be generated from that input.".to_string())
                } else {
                    None
                };
                self.results = results;
            }
            Err(e) => {
                log::error!("Generation failed: {e}");
                self.status = Some(format!("Error: {e}"));
                self.results.clear();
            }
        }
    }
}

/// Event loop: draw, poll, mutate. Esc leaves.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => app.submit(),
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => app.input.push(c),
                    _ => {}
                }
            }
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .split(area);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Jabberwock ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("- Nonsense Generator"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // Input line
    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().title(" Sentence ").borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    // Results
    let mut lines = Vec::new();
    if let Some(status) = &app.status {
        lines.push(Line::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        ));
    }
    for (i, result) in app.results.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::raw(format!(" {}. ", i + 1)),
            Span::styled(
                result.text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!(
                "    toxicity {:.1}%  ({})",
                result.toxicity * 100.0,
                result.structure
            ),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::raw(""));
    }
    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Nonsense ").borders(Borders::ALL));
    frame.render_widget(results, chunks[2]);

    // Footer
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("Generate  "),
        Span::styled(
            " Esc ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[3]);
}
