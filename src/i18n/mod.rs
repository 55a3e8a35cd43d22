//! Country naming and user-facing text.
//!
//! # Architecture
//!
//! - `countries`: canonical <-> display country name translation
//! - `normalize`: accent- and case-folding used by the display -> canonical lookup
//! - `strings`: fixed user-facing messages
//!
//! # Example
//!
//! ```rust
//! use covid_reports::i18n::{to_canonical, to_display};
//!
//! assert_eq!(to_display("Brazil"), "Brasil");
//! assert_eq!(to_canonical("nova zelandia"), "New Zealand");
//! assert_eq!(to_canonical("Atlantis"), "Atlantis");
//! ```

mod countries;
mod normalize;
mod strings;

pub use countries::{to_canonical, to_display, CountryTranslator};
pub use normalize::normalize_text;
pub use strings::MessageStrings;
