//! Title state machine.
//!
//! [`TitleManager`] owns the requested-title history, the notification
//! counter and the composition options, and pushes every recomposed display
//! title into a [`TitleSink`]. All mutating operations funnel through
//! [`TitleManager::set_title`] so the displayed string is recomputed from
//! one place.

use crate::compose::compose_title;
use crate::history::TitleHistory;
use crate::options::TitleOptions;
use crate::routes::{RouteEntry, RouteTitle, resolve_route_title};
use crate::sink::TitleSink;

/// Central coordinator for the displayed title.
pub struct TitleManager<S: TitleSink> {
    options: TitleOptions,
    history: TitleHistory,
    /// The requested value currently in effect (`None` shows the fallback).
    current: Option<String>,
    notifications: u32,
    /// Display title captured from the sink before the first write.
    original_title: String,
    /// Last composed display title pushed to the sink.
    display: String,
    sink: S,
}

impl<S: TitleSink> TitleManager<S> {
    /// Take over title management for `sink`.
    ///
    /// Captures the title currently displayed by the sink as the fallback of
    /// last resort, then immediately composes and writes the startup title
    /// (prefix or suffix alone when configured, the captured title
    /// otherwise).
    pub fn new(options: TitleOptions, sink: S) -> Self {
        let original_title = sink.read_display_title();
        log::info!(
            "Title manager taking over (original title {:?})",
            original_title
        );

        let mut manager = Self {
            options,
            history: TitleHistory::new(),
            current: None,
            notifications: 0,
            original_title,
            display: String::new(),
            sink,
        };
        manager.set_title(None);
        manager
    }

    /// Request a new title.
    ///
    /// `Some(value)` records the value in the history (unless it is empty or
    /// already present) and makes it the active requested value; `None` and
    /// empty strings clear the active value so the fallback shows. The
    /// display title is recomposed and written either way.
    ///
    /// Returns `true` when the value was appended to the history, `false`
    /// when nothing was recorded. Callers that intend to later restore the
    /// previous title must only do so when this returned `true`.
    pub fn set_title(&mut self, value: Option<&str>) -> bool {
        let pushed = match value {
            Some(value) => self.history.push(value),
            None => false,
        };
        self.current = value.filter(|v| !v.is_empty()).map(str::to_string);
        self.recompose();
        pushed
    }

    /// Drop the most recent history entry and re-apply the one before it.
    ///
    /// The restored value goes back through [`TitleManager::set_title`], so
    /// it stays recorded in the history. With one or no entries the history
    /// empties and the fallback shows.
    pub fn set_previous_title(&mut self) {
        self.history.pop();
        let previous = self.history.pop();
        log::debug!("Restoring previous title {:?}", previous);
        self.set_title(previous.as_deref());
    }

    /// Update the notification counter and re-render.
    ///
    /// Re-renders against the top of the history: a counter change arriving
    /// after a restore must decorate the title that is actually displayed,
    /// not a value that has since been popped.
    pub fn set_notifications_counter(&mut self, count: u32) {
        log::debug!("Notification counter set to {count}");
        self.notifications = count;
        let top = self.history.peek_last().map(str::to_string);
        self.set_title(top.as_deref());
    }

    /// Replace the composition options and recompose with the active
    /// requested value.
    pub fn configure(&mut self, options: TitleOptions) {
        log::info!("Applying new title options");
        self.options = options;
        self.recompose();
    }

    /// Apply the title resolved from a matched route chain.
    ///
    /// Returns `false` when the chain carries an inherit marker and the
    /// displayed title was left alone, `true` when a resolved value (or the
    /// fallback, for a chain declaring no titles) was applied.
    pub fn navigate(&mut self, chain: &[RouteEntry]) -> bool {
        match resolve_route_title(chain) {
            RouteTitle::Inherit => {
                log::debug!("Route chain inherits the current title");
                false
            }
            RouteTitle::Declared(title) => {
                self.set_title(title.as_deref());
                true
            }
        }
    }

    /// Remove a buried history entry without touching the display.
    ///
    /// Counterpart of [`TitleManager::set_previous_title`] for out-of-order
    /// teardown: when the unit that recorded `value` goes away while some
    /// later title is on top, the entry is deleted in place and the display
    /// is left alone. Removing the entry on top goes through
    /// [`TitleManager::set_previous_title`] instead so the display follows.
    /// Returns whether an entry was removed.
    pub fn release_title(&mut self, value: &str) -> bool {
        let removed = self.history.remove(value);
        if removed {
            log::debug!("Released buried title {:?}", value);
        }
        removed
    }

    /// Forget all recorded titles. The active requested value and the
    /// display are left untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The requested value currently in effect, if any.
    pub fn current_title(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The display title most recently written to the sink.
    pub fn display_title(&self) -> &str {
        &self.display
    }

    /// The display title captured from the sink at startup.
    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    /// The composition options currently in effect.
    pub fn options(&self) -> &TitleOptions {
        &self.options
    }

    /// The current notification counter value.
    pub fn notifications_counter(&self) -> u32 {
        self.notifications
    }

    /// The requested-title history.
    pub fn history(&self) -> &TitleHistory {
        &self.history
    }

    /// The sink display titles are written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Recompose the display title and write it to the sink.
    fn recompose(&mut self) {
        let display = compose_title(
            self.current.as_deref(),
            &self.options,
            self.notifications,
            &self.original_title,
        );
        if display != self.display {
            log::debug!("Title changed from {:?} to {:?}", self.display, display);
        }
        self.sink.write_display_title(&display);
        self.display = display;
    }
}
