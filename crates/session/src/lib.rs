//! Session-token lifecycle for the veriwork client core.
//!
//! [`TokenRefresher`] keeps the stored credential usable, coalescing
//! concurrent renewals into a single backend call. [`AuthorizedRequestGuard`]
//! is the checkpoint every authenticated call path passes through before
//! building its request.

pub mod guard;
pub mod refresher;
pub mod renewer;

pub use guard::AuthorizedRequestGuard;
pub use refresher::{DEFAULT_REFRESH_MARGIN, TokenRefresher};
pub use renewer::HttpTokenRenewer;
