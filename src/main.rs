mod time_range;

use time_range::TimeRange;

// The sample set the tool was first written against: three clusters at a
// 200 ms gap tolerance.
const SAMPLE_RANGES: [(i64, i64); 5] = [
    (1000, 2000),
    (2500, 4000),
    (3900, 4100),
    (8000, 9000),
    (9050, 9500),
];

#[derive(clap::Parser, Debug)]
/// timegaps: merge discontinuous time ranges within a gap threshold.
struct Cli {
    /// Ranges to merge, as START..END pairs in milliseconds
    /// (default: a built-in sample set).
    ranges: Vec<TimeRange>,

    /// Maximum gap in milliseconds between two ranges for them to still be
    /// merged; zero merges only touching ranges, negative requires overlap.
    #[arg(short, long, default_value_t = 200, allow_negative_numbers = true)]
    threshold: i64,
}

fn format_ranges(ranges: &[TimeRange]) -> String {
    let formatted: Vec<String> = ranges.iter().map(TimeRange::to_string).collect();
    format!("[{}]", formatted.join(", "))
}

fn main() {
    use clap::Parser;

    env_logger::init();

    let cli = Cli::parse();
    let input: Vec<TimeRange> = if cli.ranges.is_empty() {
        SAMPLE_RANGES.map(TimeRange::from).to_vec()
    } else {
        cli.ranges
    };

    let merged = time_range::merge_time_ranges(&input, cli.threshold);
    log::debug!("merged {} ranges into {}", input.len(), merged.len());

    println!("input: {}", format_ranges(&input));
    println!("threshold: {}", cli.threshold);
    println!("output: {}", format_ranges(&merged));
}
