//! Interactive terminal browser.
//!
//! A single event loop owns the [`Listing`]; the input thread forwards
//! keys and the debouncer forwards fired queries over one channel, so
//! visibility state is only ever written from this loop. Edits reach the
//! filter through [`Debouncer::schedule`], never directly.

use crate::catalog::Catalog;
use crate::debounce::{DEBOUNCE_INTERVAL, Debouncer};
use crate::detail::{self, DetailView};
use crate::search::suggest;
use crate::ui::listing::Listing;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use console::{Key, Term};
use crossbeam_channel::Sender;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

const HELP_LINE: &str =
    "type to filter · Tab/Enter search now · ↑/↓ select · → open page · Esc quit";

/// Events draining into the browse loop.
enum BrowseMsg {
    KeyPressed(Key),
    /// The debounce interval elapsed for this query.
    FilterFired(String),
    /// The input thread hit EOF or an error.
    InputClosed,
}

pub struct BrowseOptions {
    /// Directory detail pages are written into when a card is opened.
    pub out_dir: PathBuf,
}

/// Run the interactive browser until Esc.
pub fn run(catalog: Arc<Catalog>, options: BrowseOptions) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("browse mode needs an interactive terminal");
    }

    let (tx, rx) = crossbeam_channel::unbounded();

    let debounce_tx = tx.clone();
    let debouncer = Debouncer::new(DEBOUNCE_INTERVAL, move |query: String| {
        let _ = debounce_tx.send(BrowseMsg::FilterFired(query));
    });

    spawn_input_thread(term.clone(), tx);

    let mut app = BrowseApp::new(catalog, options, debouncer);
    app.redraw(&term)?;
    while let Ok(msg) = rx.recv() {
        if !app.update(msg) {
            break;
        }
        app.redraw(&term)?;
    }
    term.clear_screen().context("terminal reset")?;
    Ok(())
}

fn spawn_input_thread(term: Term, tx: Sender<BrowseMsg>) {
    std::thread::spawn(move || {
        loop {
            match term.read_key() {
                Ok(key) => {
                    if tx.send(BrowseMsg::KeyPressed(key)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(
                        component = "browse",
                        operation = "read_key",
                        error = %err,
                        "Input thread stopping"
                    );
                    let _ = tx.send(BrowseMsg::InputClosed);
                    break;
                }
            }
        }
    });
}

struct BrowseApp {
    listing: Listing,
    query: String,
    cursor: usize,
    status: String,
    suggestions: Vec<String>,
    debouncer: Debouncer<String>,
    out_dir: PathBuf,
}

impl BrowseApp {
    fn new(catalog: Arc<Catalog>, options: BrowseOptions, debouncer: Debouncer<String>) -> Self {
        Self {
            listing: Listing::new(catalog),
            query: String::new(),
            cursor: 0,
            status: "type to filter".to_string(),
            suggestions: Vec::new(),
            debouncer,
            out_dir: options.out_dir,
        }
    }

    /// Route one event; false ends the loop.
    fn update(&mut self, msg: BrowseMsg) -> bool {
        match msg {
            BrowseMsg::KeyPressed(key) => self.on_key(key),
            BrowseMsg::FilterFired(query) => {
                self.listing.apply_query(&query);
                self.suggestions = if self.listing.no_results_message().is_some() {
                    suggest::closest_titles(self.listing.catalog(), &query)
                } else {
                    Vec::new()
                };
                self.clamp_cursor();
                true
            }
            BrowseMsg::InputClosed => false,
        }
    }

    fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => return false,
            Key::Char(c) if !c.is_control() => {
                self.query.push(c);
                self.debouncer.schedule(self.query.clone());
            }
            Key::Backspace => {
                self.query.pop();
                self.debouncer.schedule(self.query.clone());
            }
            // The search button analog: shares the debounced entry point
            // with edits, so rapid alternation still collapses to one run.
            Key::Enter | Key::Tab => {
                self.debouncer.schedule(self.query.clone());
            }
            Key::ArrowUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Key::ArrowDown => {
                let count = self.listing.visible_movies().len();
                if count > 0 && self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            Key::ArrowRight => self.open_selected(),
            _ => {}
        }
        true
    }

    fn clamp_cursor(&mut self) {
        let count = self.listing.visible_movies().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    fn open_selected(&mut self) {
        let selected = self
            .listing
            .visible_movies()
            .get(self.cursor)
            .map(|m| m.id.clone());
        let Some(id) = selected else {
            self.status = "nothing selected".to_string();
            return;
        };
        match DetailView::build(self.listing.catalog(), &id) {
            Ok(view) => match detail::write_page(&view, &self.out_dir) {
                Ok(path) => {
                    self.status = format!("wrote {}", path.display());
                }
                Err(err) => {
                    self.status = format!("failed to write page: {err}");
                }
            },
            // The alert text, shown in the status line.
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn redraw(&self, term: &Term) -> Result<()> {
        term.clear_screen().context("terminal clear")?;
        let mut frame = String::new();
        frame.push_str(&format!("{} {}\n\n", "search:".bold(), self.query));
        frame.push_str(&self.listing.render_with_selection(Some(self.cursor)));
        if let Some(banner) = self.listing.no_results_message() {
            frame.push_str(&format!("{}\n", banner.red()));
            for suggestion in &self.suggestions {
                frame.push_str(&format!("  did you mean {}?\n", suggestion.yellow()));
            }
        }
        frame.push_str(&format!("\n{}\n", HELP_LINE.dimmed()));
        frame.push_str(&format!("{}\n", self.status));
        term.write_str(&frame).context("terminal write")?;
        Ok(())
    }
}
