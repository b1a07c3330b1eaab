//! Interactive list console.
//!
//! Owns the page state the table and pager are controlled by. Controls report
//! requests through callbacks that push [`ConsoleEvent`]s into a channel; the
//! loop drains the channel, refetches and redraws.

use std::io::{self, Write};
use std::path::PathBuf;

use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::{cursor, queue, terminal};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use voltdesk_lib::model::Record;
use voltdesk_lib::pagination::{ButtonKind, PageMeta, Pager};
use voltdesk_lib::table::{Table, TableView};
use voltdesk_lib::text::TextRenderer;
use voltdesk_lib::Column;

use crate::screens::Screen;
use crate::settings::{ConsoleSettings, SettingsError};
use crate::source::{PageSource, SourceError};

/// Width of the row number gutter, separator included.
const GUTTER: usize = 5;

const HELP: &str = "n next  p previous  f first  l last  <page> jump  s <size> page size  o <row> open  r reload  q quit";

/// Console error type.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Requests raised by the table and pager callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum ConsoleEvent {
    PageChange(u32),
    PageSizeChange(u32),
    RowOpen(Record),
}

/// A line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    Page(u32),
    PageSize(u32),
    /// 1-based row number as shown in the gutter.
    Open(usize),
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. Returns `None` for blank or unknown input.
    pub fn parse(input: &str) -> Option<Self> {
        let mut words = input.split_whitespace();
        let head = words.next()?;
        let arg = words.next();
        if words.next().is_some() {
            return None;
        }

        match (head, arg) {
            ("n" | "next", None) => Some(Command::Next),
            ("p" | "prev", None) => Some(Command::Previous),
            ("f" | "first", None) => Some(Command::First),
            ("l" | "last", None) => Some(Command::Last),
            ("r" | "reload", None) => Some(Command::Reload),
            ("h" | "?" | "help", None) => Some(Command::Help),
            ("q" | "quit", None) => Some(Command::Quit),
            ("s" | "size", Some(size)) => size.parse().ok().map(Command::PageSize),
            ("o" | "open", Some(row)) => row.parse().ok().map(Command::Open),
            (page, None) => page.parse().ok().map(Command::Page),
            _ => None,
        }
    }
}

/// The console for one list screen.
pub struct Console<S> {
    source: S,
    screen: Screen,
    settings: ConsoleSettings,
    settings_path: Option<PathBuf>,
    columns: Vec<Column<Record>>,
    page: u32,
    page_size: u32,
    records: Vec<Record>,
    meta: PageMeta,
    is_loading: bool,
    detail: Option<Record>,
    notice: Option<String>,
    events_tx: mpsc::UnboundedSender<ConsoleEvent>,
    events_rx: mpsc::UnboundedReceiver<ConsoleEvent>,
}

impl<S: PageSource> Console<S> {
    pub fn new(source: S, screen: Screen, settings: ConsoleSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            source,
            screen,
            page_size: settings.page_size,
            settings,
            settings_path: None,
            columns: screen.columns(),
            page: 1,
            records: Vec::new(),
            meta: PageMeta::new(1, 1),
            is_loading: false,
            detail: None,
            notice: None,
            events_tx,
            events_rx,
        }
    }

    /// Persist page size changes to `path`.
    pub fn settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// Page to show first.
    pub fn start_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Run the interactive loop until `q` or end of input.
    pub async fn run(mut self) -> Result<(), ConsoleError> {
        log::info!("console started on {:?}", self.screen);
        let mut stdout = io::stdout();
        self.fetch(Some(&mut stdout)).await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.draw(&mut stdout, true)?;
            queue!(stdout, Print("> "))?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let Some(command) = Command::parse(&line) else {
                if !line.trim().is_empty() {
                    self.notice = Some(format!("unknown command {:?}, h for help", line.trim()));
                }
                continue;
            };
            log::debug!("command: {command:?}");

            match command {
                Command::Quit => break,
                Command::Help => self.notice = Some(HELP.to_string()),
                Command::Reload => self.fetch(Some(&mut stdout)).await?,
                command => {
                    self.apply(command);
                    if self.drain_events()? {
                        self.fetch(Some(&mut stdout)).await?;
                    }
                }
            }
        }

        log::info!("console closed");
        Ok(())
    }

    /// Fetch and print a single page without prompting.
    pub async fn run_once(mut self) -> Result<(), ConsoleError> {
        self.fetch(None).await?;
        let mut stdout = io::stdout();
        self.draw(&mut stdout, false)?;
        stdout.flush()?;
        Ok(())
    }

    /// Load the current page. While the request is in flight the table shows
    /// its loading state, drawn to `out` when given.
    pub async fn fetch(&mut self, out: Option<&mut io::Stdout>) -> Result<(), ConsoleError> {
        self.is_loading = true;
        if let Some(out) = out {
            self.draw(out, true)?;
            out.flush()?;
        }

        let result = self.source.fetch(self.page, self.page_size).await;
        self.is_loading = false;
        let page = result?;

        self.page = page.meta.current_page;
        self.meta = page.meta;
        self.records = page.records;
        Ok(())
    }

    /// Translate a navigation command into a control interaction.
    ///
    /// Returns `false` when the control refused it, e.g. a disabled button or
    /// a row that is not on the page.
    pub fn apply(&mut self, command: Command) -> bool {
        let kind = match command {
            Command::Next => Some(ButtonKind::Next),
            Command::Previous => Some(ButtonKind::Previous),
            Command::First => Some(ButtonKind::First),
            Command::Last => Some(ButtonKind::Last),
            _ => None,
        };

        let accepted = {
            let table = self.table(false);
            let Some(pager) = table.pager() else {
                return false;
            };
            match (command, kind) {
                (_, Some(kind)) => {
                    let view = pager.render();
                    view.button(kind).is_some_and(|button| pager.press(button))
                }
                (Command::Page(page), None) => pager.go_to(page),
                (Command::PageSize(size), None) => pager.select_page_size(size),
                (Command::Open(row), None) => row.checked_sub(1).is_some_and(|index| table.click_row(index)),
                _ => false,
            }
        };

        if !accepted {
            self.notice = Some(match command {
                Command::Next | Command::Last => "already on the last page".to_string(),
                Command::Previous | Command::First => "already on the first page".to_string(),
                Command::PageSize(size) => format!(
                    "page size {size} not offered, choose from {:?}",
                    self.settings.page_size_options
                ),
                Command::Open(row) => format!("no row {row} on this page"),
                _ => "nothing to do".to_string(),
            });
        }
        accepted
    }

    /// Apply queued control events. Returns `true` when the page must be
    /// refetched.
    pub fn drain_events(&mut self) -> Result<bool, ConsoleError> {
        let mut refetch = false;
        while let Ok(event) = self.events_rx.try_recv() {
            log::debug!("event: {event:?}");
            match event {
                ConsoleEvent::PageChange(page) => {
                    if page != self.page {
                        self.page = page;
                        self.detail = None;
                        refetch = true;
                    }
                }
                ConsoleEvent::PageSizeChange(size) => {
                    self.page_size = size;
                    self.page = 1;
                    self.detail = None;
                    self.settings.page_size = size;
                    if let Some(path) = &self.settings_path {
                        self.settings.save(path)?;
                    }
                    refetch = true;
                }
                ConsoleEvent::RowOpen(record) => self.detail = Some(record),
            }
        }
        Ok(refetch)
    }

    /// Build the table for the current state, wired to the event channel.
    pub fn table(&self, compact: bool) -> Table<'_, Record> {
        let screen = self.screen;
        let page_tx = self.events_tx.clone();
        let size_tx = self.events_tx.clone();
        let row_tx = self.events_tx.clone();

        let pager = Pager::new(self.meta, move |page| {
            let _ = page_tx.send(ConsoleEvent::PageChange(page));
        })
        .sibling_count(self.settings.sibling_count)
        .show_edges(self.settings.show_edges)
        .compact(compact)
        .page_size_options(self.settings.page_size_options.clone())
        .on_page_size_change(move |size| {
            let _ = size_tx.send(ConsoleEvent::PageSizeChange(size));
        });

        Table::new(&self.columns, &self.records)
            .loading(self.is_loading)
            .empty_message(screen.empty_message())
            .key_field(screen.key_field())
            .row_class_with(move |row, index| screen.row_class(row, index))
            .on_row_click(move |row| {
                let _ = row_tx.send(ConsoleEvent::RowOpen(row.clone()));
            })
            .pagination(pager)
    }

    fn draw(&self, out: &mut impl Write, clear: bool) -> io::Result<()> {
        let width = terminal::size().map(|(w, _)| w).unwrap_or(120);
        let compact = width < self.settings.compact_below;
        let renderer = TextRenderer::new(usize::from(width).saturating_sub(GUTTER));
        let view = self.table(compact).render();

        if clear {
            queue!(
                out,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }
        queue!(
            out,
            PrintStyledContent(self.screen.title().bold()),
            Print("\n\n")
        )?;

        for (index, line) in self.lines(&renderer, &view).into_iter().enumerate() {
            let styled = match (index, line.class.as_deref()) {
                (0, _) => line.text.bold(),
                (1, _) => line.text.with(Color::DarkGrey),
                (_, Some("row-error")) => line.text.with(Color::Red),
                (_, Some("row-muted")) => line.text.with(Color::DarkGrey),
                (_, Some("row-active")) => line.text.with(Color::Green),
                _ => line.text.stylize(),
            };
            queue!(out, PrintStyledContent(styled), Print("\n"))?;
        }

        if let Some(record) = &self.detail {
            let json = serde_json::to_string_pretty(record).unwrap_or_default();
            queue!(out, Print("\n"), PrintStyledContent("Details".bold()), Print("\n"))?;
            queue!(out, Print(json), Print("\n"))?;
        }
        if let Some(notice) = &self.notice {
            queue!(out, Print("\n"), PrintStyledContent(notice.as_str().with(Color::Yellow)), Print("\n"))?;
        }
        Ok(())
    }

    /// Rendered lines with a row number gutter and the row class, if any.
    fn lines(&self, renderer: &TextRenderer, view: &TableView) -> Vec<StyledLine> {
        let rows = view.rows();
        renderer
            .render_table(view)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let row = index.checked_sub(2).and_then(|i| rows.get(i));
                match row {
                    Some(row) => StyledLine {
                        text: format!("{:>3}  {text}", row.index + 1),
                        class: row.class_name.clone(),
                    },
                    None if text.is_empty() => StyledLine { text, class: None },
                    None => StyledLine {
                        text: format!("{}{text}", " ".repeat(GUTTER)),
                        class: None,
                    },
                }
            })
            .collect()
    }
}

struct StyledLine {
    text: String,
    class: Option<String>,
}
