/// A half-open span of time `[start, end)`, endpoints in milliseconds.
///
/// Nothing here enforces `start <= end`; the merge arithmetic is applied to
/// whatever endpoints it is given.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

impl TimeRange {
    pub fn new(start: i64, end: i64) -> Self {
        TimeRange { start, end }
    }
}

impl From<(i64, i64)> for TimeRange {
    fn from((start, end): (i64, i64)) -> Self {
        TimeRange { start, end }
    }
}

impl From<TimeRange> for (i64, i64) {
    fn from(range: TimeRange) -> Self {
        (range.start, range.end)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseTimeRangeError {
    MissingSeparator,
    BadEndpoint(std::num::ParseIntError),
}

impl From<std::num::ParseIntError> for ParseTimeRangeError {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::BadEndpoint(value)
    }
}

impl std::fmt::Display for ParseTimeRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected START..END"),
            Self::BadEndpoint(e) => write!(f, "bad endpoint: {}", e),
        }
    }
}

impl std::error::Error for ParseTimeRangeError {}

impl std::str::FromStr for TimeRange {
    type Err = ParseTimeRangeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or(ParseTimeRangeError::MissingSeparator)?;
        Ok(TimeRange {
            start: start.trim().parse()?,
            end: end.trim().parse()?,
        })
    }
}

/// Merge ranges that overlap, touch, or sit within `threshold` ms of each
/// other, returning a new list sorted ascending by start.
///
/// A gap exactly equal to `threshold` merges. A zero threshold merges only
/// overlapping or touching ranges; a negative one requires overlap deeper
/// than its magnitude. The input is left as-is.
pub fn merge_time_ranges(ranges: &[TimeRange], threshold: i64) -> Vec<TimeRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(|range| range.start);

    let mut ranges = sorted.into_iter();
    let Some(mut current) = ranges.next() else {
        return Vec::new();
    };
    let mut merged = Vec::new();
    for range in ranges {
        if range.start <= current.end + threshold {
            // current.start stays put: starts are non-decreasing after the sort
            current.end = current.end.max(range.end);
        } else {
            merged.push(current);
            current = range;
        }
    }
    merged.push(current);
    merged
}
