pub mod block;
pub mod event;
pub mod gap;
pub mod geo;
pub mod range;
pub mod suggestion;
pub mod working_hours;

pub use block::BusyBlock;
pub use event::{CalendarEvent, LocatedEvent};
pub use gap::FreeGap;
pub use geo::GeoPoint;
pub use range::DateRange;
pub use suggestion::TimeSuggestion;
pub use working_hours::WorkingHours;
