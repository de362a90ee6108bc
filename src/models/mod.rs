pub mod clock_time;
pub mod entry;
pub mod meridiem;

pub use clock_time::ClockTime;
pub use entry::TimeEntry;
pub use meridiem::Meridiem;
