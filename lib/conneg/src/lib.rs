//! The negotiation core of the Linked Data front end.
//!
//! A request is classified twice, independently: its path is resolved into a [`ResourceLocator`]
//! and its `Accept` header is ranked into a [`PreferenceTable`] from which the preferred
//! [`RepresentationClass`] is picked. The [`NegotiationDispatcher`] combines both into a
//! [`NegotiationOutcome`] that the transport layer executes.

mod config;
mod dispatch;
mod locator;
mod media_range;
mod preference;
mod representation;

pub use config::*;
pub use dispatch::*;
pub use locator::*;
pub use media_range::*;
pub use preference::*;
pub use representation::*;
