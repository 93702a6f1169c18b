//! Shopper caches
//!
//! Browser-local conveniences kept in the [`LocalStore`](crate::remote::LocalStore)
//! collaborator: recently viewed products, the comparison set, price
//! alerts, and per-product reviews. All of it is cache, never the source
//! of truth for priced transactions; store failures are reported and never
//! corrupt in-memory state.

mod comparison;
mod price_alerts;
mod recently_viewed;
mod reviews;

pub use comparison::{ComparisonError, ComparisonSet};
pub use price_alerts::{PriceAlert, PriceAlerts};
pub use recently_viewed::RecentlyViewed;
pub use reviews::{Review, ReviewError, Reviews};
