mod time_range;

pub use time_range::{merge_time_ranges, ParseTimeRangeError, TimeRange};
