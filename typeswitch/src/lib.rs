//! User-selectable display fonts applied live to a rendered page.
//!
//! The crate is split into pure building blocks and the stateful pieces
//! that drive them:
//! - [`catalog`] and [`stack`] hold the fixed font list and resolve an id
//!   into a CSS font stack plus an optional fallback reference,
//! - [`rules`] keeps the selector tables shared by the override stylesheet
//!   and the element sweeps,
//! - [`FontApplier`] forces a stack onto a [`Document`], including content
//!   mounted after the call (via a [`FrameScheduler`] follow-up pass),
//! - [`preference`] persists the selection and notifies other tabs.
//!
//! Pages reach the browser through a [`Host`]. [`FontLoader`] applies the
//! persisted font on mount and follows later changes; [`FontSettings`] is
//! the model behind the selection page.
//!
//! [`Page`] and [`Tab`] are in-memory hosts for tests and tooling.

pub mod catalog;
pub mod preference;
pub mod rules;
pub mod settings;
pub mod stack;

mod applier;
mod broadcast;
mod document;
mod frame;
mod host;
mod loader;
mod page;
mod tab;

pub use applier::FontApplier;
pub use broadcast::{Broadcast, FONT_CHANGED_EVENT, SubscriptionId};
pub use catalog::{DEFAULT_FONT_ID, FontCategory, FontEntry, GenericFamily};
pub use document::Document;
pub use frame::{FrameCallback, FrameQueue, FrameScheduler};
pub use host::Host;
pub use loader::FontLoader;
pub use page::{NodeId, Page};
pub use settings::{
    FontSettings, FontSettingsEvent, FontSettingsView, Locale, select_font,
};
pub use stack::{
    FontFamily, FontStack, resolve_fallback_reference, resolve_stack,
};
pub use tab::{Tab, TabListener};
