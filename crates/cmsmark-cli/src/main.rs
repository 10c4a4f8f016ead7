use anyhow::Result;
use cmsmark_config::Config;
use cmsmark_engine::{RenderOptions, parse_document, render_html};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod files;
mod preview;

struct App {
    content_path: PathBuf,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
    scroll: u16,
    render_options: RenderOptions,
}

impl App {
    fn new(content_path: PathBuf, render_options: RenderOptions) -> Result<Self> {
        let files = files::scan_markdown_files(&content_path)?;

        let mut app = Self {
            content_path,
            files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
            scroll: 0,
            render_options,
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        self.current_content = match files::read_file(path) {
            Ok(content) => {
                let document = parse_document(&content);
                log::debug!("{}: {} blocks", path.display(), document.blocks.len());
                preview::document_lines(&document, &self.render_options)
            }
            Err(e) => vec![Line::from(format!("Error reading file: {e}"))],
        };
    }
}

enum Mode {
    Preview(PathBuf),
    Html(PathBuf),
    Init(PathBuf),
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} [content-path]");
    eprintln!("       {program} --html <file>");
    eprintln!("       {program} --init <content-path>");
    process::exit(1);
}

fn render_options(config: Option<&Config>) -> RenderOptions {
    match config {
        Some(config) => RenderOptions {
            cards: config.render.cards,
            lazy_images: config.render.lazy_images,
        },
        None => RenderOptions::default(),
    }
}

/// Writes a config pointing at `content_path` (made absolute), keeping the
/// render settings of `existing` when there is one.
fn write_config(
    content_path: &Path,
    existing: Option<&Config>,
    config_file: &Path,
) -> Result<Config> {
    let mut config = Config::new(std::path::absolute(content_path)?);
    if let Some(existing) = existing {
        config.render = existing.render;
    }
    config.save_to_path(config_file)?;
    log::info!("wrote {}", config_file.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("cmsmark-cli");
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring config file: {e}");
            None
        }
    };
    let options = render_options(config.as_ref());

    let (mode, from_config) = match args.get(1..).unwrap_or_default() {
        [flag, file] if flag == "--html" => (Mode::Html(PathBuf::from(file)), false),
        [flag, path] if flag == "--init" => (Mode::Init(PathBuf::from(path)), false),
        [flag, ..] if flag.starts_with("--") => usage(program),
        [path] => (Mode::Preview(PathBuf::from(path)), false),
        [] => match &config {
            Some(config) => (Mode::Preview(config.content_path.clone()), true),
            None => {
                eprintln!("Error: No content path provided and no usable config file found");
                eprintln!("Or create a config file at {}", config_path.display());
                usage(program);
            }
        },
        _ => usage(program),
    };

    let content_path = match mode {
        Mode::Html(file) => {
            let content = match files::read_file(&file) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            };
            print!("{}", render_html(&parse_document(&content), &options));
            return Ok(());
        }
        Mode::Init(path) => {
            write_config(&path, config.as_ref(), &config_path)?;
            println!("Saved config to {}", config_path.display());
            return Ok(());
        }
        Mode::Preview(path) => path,
    };

    if !content_path.exists() {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} does not exist",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    // Create app before touching the terminal so scan errors print normally
    let mut app = App::new(content_path, options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('b') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| {
            let name = files::display_name(path, &app.content_path);
            ListItem::new(vec![Line::from(vec![Span::raw(format!("📄 {name}"))])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgDn/Space, PgUp/b: Scroll"),
    ]);

    f.render_widget(Paragraph::new(vec![help_text]), rows[1]);
}
