//! Owner of the palette currently shown to the user.
//!
//! A [`ThemeController`] is created once per view and handed to whatever
//! needs to read or drive the palette. It publishes whole [`ColorPalette`]
//! values through a watch channel, so readers never see a half-updated
//! palette.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::watch;
use tracing::{debug, info};

use crate::cli::ThemePreference;
use crate::pipeline::extract::PaletteExtractor;
use crate::pipeline::load::{FsImageLoader, ImageLoader, ImageSource};
use crate::pipeline::reconcile::reconcile;
use crate::theme::ColorPalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Holding a published palette, nothing in flight.
    Idle,
    /// At least one extraction has not completed yet.
    Extracting,
}

/// What happened to the result of one [`ThemeController::update_palette`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Published(ColorPalette),
    /// A later update had already published; this result was dropped.
    Superseded,
}

/// Read-only view of the published palette.
#[derive(Debug, Clone)]
pub struct PaletteReader {
    rx: watch::Receiver<ColorPalette>,
}

impl PaletteReader {
    /// The palette published most recently.
    pub fn current(&self) -> ColorPalette {
        *self.rx.borrow()
    }

    /// Whether a palette was published since the last `current`/`changed`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next publish. Returns `None` once the controller is gone.
    pub async fn changed(&mut self) -> Option<ColorPalette> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

/// Decrements the in-flight counter even if the update future is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Mediates between image-driven palettes and the light/dark preference.
#[derive(Debug)]
pub struct ThemeController<L = FsImageLoader> {
    extractor: PaletteExtractor<L>,
    preference: watch::Sender<ThemePreference>,
    palette: watch::Sender<ColorPalette>,
    next_ticket: AtomicU64,
    published_ticket: AtomicU64,
    in_flight: AtomicUsize,
}

impl<L: ImageLoader> ThemeController<L> {
    /// Create a controller that starts out with the neutral palette for
    /// `preference`.
    pub fn new(extractor: PaletteExtractor<L>, preference: ThemePreference) -> Self {
        let (palette, _) = watch::channel(ColorPalette::neutral(preference));
        let (preference, _) = watch::channel(preference);
        Self {
            extractor,
            preference,
            palette,
            next_ticket: AtomicU64::new(0),
            published_ticket: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// The palette published most recently.
    pub fn palette(&self) -> ColorPalette {
        *self.palette.borrow()
    }

    /// A handle that observes every publish.
    pub fn subscribe(&self) -> PaletteReader {
        PaletteReader {
            rx: self.palette.subscribe(),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        *self.preference.borrow()
    }

    pub fn state(&self) -> ControllerState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            ControllerState::Extracting
        } else {
            ControllerState::Idle
        }
    }

    /// Record a new preference. If it differs from the current one the
    /// neutral palette for it is published right away, before any image
    /// update arrives.
    pub fn set_preference(&self, preference: ThemePreference) {
        let changed = self.preference.send_if_modified(|current| {
            if *current == preference {
                return false;
            }
            *current = preference;
            true
        });
        if changed {
            info!(%preference, "theme preference changed");
            self.reset_palette();
        }
    }

    /// Publish the neutral palette for the current preference. Never touches
    /// the extractor.
    pub fn reset_palette(&self) {
        let palette = ColorPalette::neutral(self.preference());
        self.palette.send_replace(palette);
        debug!(is_dark = palette.is_dark, "palette reset");
    }

    /// Extract a palette from `source`, reconcile it with the preference in
    /// effect when extraction finishes, and publish it.
    ///
    /// Extraction failures publish the (reconciled) default palette. When
    /// several updates overlap, the most recently started one wins: a result
    /// that arrives after a newer update has already published is dropped.
    pub async fn update_palette(&self, source: &ImageSource) -> UpdateOutcome {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let extracted = {
            let _guard = InFlight::enter(&self.in_flight);
            self.extractor.extract(source).await
        };

        let preference = self.preference();
        let palette = reconcile(extracted, preference);

        let published = self.palette.send_if_modified(|current| {
            if self.published_ticket.load(Ordering::SeqCst) > ticket {
                return false;
            }
            self.published_ticket.store(ticket, Ordering::SeqCst);
            *current = palette;
            true
        });

        if published {
            info!(
                %source,
                %preference,
                primary = %palette.primary,
                is_dark = palette.is_dark,
                "palette published"
            );
            UpdateOutcome::Published(palette)
        } else {
            debug!(%source, ticket, "dropping superseded palette");
            UpdateOutcome::Superseded
        }
    }
}
