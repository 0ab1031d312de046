//! # zmb-ui
//!
//! Front-end state for the Zumbara storefront, independent of any renderer.
//!
//! - [`navigator`]: category drill-down with stale-response protection
//! - [`pager`]: infinite-scroll accumulation for order history
//! - [`carousel`]: home page banner rotation
//! - [`otp`]: one-time-code entry
//! - [`notice`]: toast queue fed by failed requests
//!
//! Every state machine reports failures through [`Notices`] instead of
//! panicking or leaving partial state behind.

pub mod carousel;
pub mod navigator;
pub mod notice;
pub mod otp;
pub mod pager;
pub mod source;

pub use carousel::Carousel;
pub use navigator::{Level, NavigationPath, Navigator, NavigatorError, Outcome, Snapshot};
pub use notice::{Notice, NoticeLevel, Notices};
pub use otp::OtpInput;
pub use pager::{Keyed, PageOutcome, PageRequest, Pager};
pub use source::CatalogSource;
