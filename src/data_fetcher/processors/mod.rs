pub mod fallback;
pub mod transform;

pub use fallback::fallback_matches;
pub use transform::{format_date_time, transform_event, transform_events};
