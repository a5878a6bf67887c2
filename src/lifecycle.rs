//! Unit lifecycle adapter.
//!
//! A unit is anything with an activation span that declares a title while it
//! is on screen (a view, a tab, a pane). [`activate`] resolves the unit's
//! declared title exactly once and applies it, returning an
//! [`ActivationHandle`] that records whether the unit now owns a history
//! entry. [`deactivate`] consumes the handle and undoes exactly what the
//! activation did: restore the previous title when the unit's entry is still
//! on top, delete the entry in place when later activations buried it, and
//! nothing at all when the activation never recorded one. Units declaring no
//! title simply never activate.

use crate::manager::TitleManager;
use crate::sink::TitleSink;

/// Identifies a display unit across its activation span.
pub type UnitId = u64;

/// A unit's declared title.
pub enum TitleRequest {
    /// Fixed value known up front.
    Static(String),
    /// Value produced at activation time. Returning `None` clears the
    /// requested value, so the fallback shows while the unit is active.
    Computed(Box<dyn FnOnce() -> Option<String>>),
}

impl TitleRequest {
    /// A fixed title value.
    pub fn fixed(value: impl Into<String>) -> Self {
        Self::Static(value.into())
    }

    /// A title computed when the unit activates.
    pub fn computed(produce: impl FnOnce() -> Option<String> + 'static) -> Self {
        Self::Computed(Box::new(produce))
    }

    /// Resolve the request to a concrete value, running the producer for
    /// computed titles.
    pub fn resolve(self) -> Option<String> {
        match self {
            Self::Static(value) => Some(value),
            Self::Computed(produce) => produce(),
        }
    }
}

impl std::fmt::Debug for TitleRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Proof that a unit went through [`activate`].
///
/// The handle is move-only and must be passed back to [`deactivate`] when
/// the unit goes away. It remembers the history entry the activation
/// recorded, so a deduplicated activation (same title as an entry already in
/// the history) carries no restore obligation.
#[derive(Debug)]
#[must_use = "pass the handle to deactivate() when the unit goes away"]
pub struct ActivationHandle {
    unit: UnitId,
    entry: Option<String>,
}

impl ActivationHandle {
    /// The unit this handle belongs to.
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    /// The history entry recorded by the activation, if any.
    pub fn recorded_title(&self) -> Option<&str> {
        self.entry.as_deref()
    }
}

/// Activate a unit: resolve its declared title and apply it.
///
/// The resolved value always goes through [`TitleManager::set_title`], so a
/// request resolving to `None` still recomposes and shows the fallback. The
/// returned handle records the history entry only when the push actually
/// appended one, so repeated activations of the same title leave the single
/// entry owned by its first activation.
pub fn activate<S: TitleSink>(
    manager: &mut TitleManager<S>,
    unit: UnitId,
    request: TitleRequest,
) -> ActivationHandle {
    let value = request.resolve();
    log::debug!("Unit {unit} activated with title {:?}", value);
    let pushed = manager.set_title(value.as_deref());
    let entry = if pushed { value } else { None };
    ActivationHandle { unit, entry }
}

/// Deactivate a unit, undoing what its activation did to the history.
pub fn deactivate<S: TitleSink>(manager: &mut TitleManager<S>, handle: ActivationHandle) {
    let ActivationHandle { unit, entry } = handle;
    let Some(entry) = entry else {
        log::debug!("Unit {unit} deactivated without a recorded title");
        return;
    };

    if manager.history().peek_last() == Some(entry.as_str()) {
        log::debug!("Unit {unit} deactivated, restoring the previous title");
        manager.set_previous_title();
    } else {
        log::debug!("Unit {unit} deactivated, dropping buried title {:?}", entry);
        manager.release_title(&entry);
    }
}
