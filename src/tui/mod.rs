pub mod widgets;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use ratatui::DefaultTerminal;
use tokio::runtime::Handle;

use crate::controller::{ControllerState, PaletteReader, ThemeController};
use crate::pipeline::load::ImageSource;
use widgets::{to_color, PaletteWidget};

const TICK: Duration = Duration::from_millis(50);

/// Ordered list of images with a wrapping cursor.
#[derive(Debug, Clone)]
pub struct Slideshow {
    images: Vec<PathBuf>,
    index: usize,
}

impl Slideshow {
    /// Returns `None` for an empty list.
    pub fn new(images: Vec<PathBuf>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self { images, index: 0 })
    }

    pub fn current(&self) -> &Path {
        &self.images[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn next_image(&mut self) -> &Path {
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    pub fn prev_image(&mut self) -> &Path {
        self.index = self.index.checked_sub(1).unwrap_or(self.images.len() - 1);
        self.current()
    }

    /// Jump to `index`; out-of-range indices leave the cursor alone.
    pub fn go_to(&mut self, index: usize) -> Option<&Path> {
        if index >= self.images.len() {
            return None;
        }
        self.index = index;
        Some(self.current())
    }
}

/// State for the interactive slideshow.
pub struct TuiApp {
    controller: Arc<ThemeController>,
    reader: PaletteReader,
    slideshow: Slideshow,
    runtime: Handle,
}

impl TuiApp {
    pub fn new(
        controller: Arc<ThemeController>,
        images: Vec<PathBuf>,
        runtime: Handle,
    ) -> Result<Self> {
        let Some(slideshow) = Slideshow::new(images) else {
            bail!("no images to show");
        };
        let reader = controller.subscribe();
        Ok(Self {
            controller,
            reader,
            slideshow,
            runtime,
        })
    }

    /// Ask the controller for the palette of the image now on screen.
    fn show_current(&self) {
        let source = ImageSource::from(self.slideshow.current());
        let controller = Arc::clone(&self.controller);
        self.runtime.spawn(async move {
            controller.update_palette(&source).await;
        });
    }

    fn toggle_preference(&self) {
        let preference = self.controller.preference().toggled();
        self.controller.set_preference(preference);
        self.show_current();
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(TICK)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Right | KeyCode::Char('l') => {
                    self.slideshow.next_image();
                    self.show_current();
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    self.slideshow.prev_image();
                    self.show_current();
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if self.slideshow.go_to(index).is_some() {
                        self.show_current();
                    }
                }
                KeyCode::Char('t') => self.toggle_preference(),
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let palette = self.reader.current();
        let name = self
            .slideshow
            .current()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let outer = Block::bordered()
            .title(format!(
                " {name} ({}/{}) ",
                self.slideshow.index() + 1,
                self.slideshow.len()
            ))
            .border_style(Style::default().fg(to_color(palette.accent)))
            .style(
                Style::default()
                    .bg(to_color(palette.background))
                    .fg(to_color(palette.text)),
            );
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let [status, swatches, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(9),
            Constraint::Length(1),
        ])
        .areas(inner);

        let state = match self.controller.state() {
            ControllerState::Idle => "ready",
            ControllerState::Extracting => "extracting...",
        };
        let polarity = if palette.is_dark { "dark" } else { "light" };
        frame.render_widget(
            Paragraph::new(format!(
                " preference: {}   palette: {polarity}   {state}",
                self.controller.preference()
            )),
            status,
        );
        frame.render_widget(PaletteWidget::new(&palette), swatches);
        frame.render_widget(
            Paragraph::new(" \u{2190}/\u{2192} image   1-9 jump   t theme   q quit")
                .style(Style::default().fg(to_color(palette.text_secondary))),
            help,
        );
    }
}

/// Launch the slideshow and block until the user quits.
pub fn run(mut app: TuiApp) -> Result<()> {
    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    app.show_current();
    let result = app.event_loop(&mut terminal);
    ratatui::try_restore().context("failed to restore terminal")?;
    result
}
