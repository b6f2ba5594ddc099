use std::collections::BTreeSet;
use tracing::warn;

pub fn display_total(total: u64) {
    println!("{total}");
}

pub fn display_ifm_credits(credits: &BTreeSet<u32>) {
    println!("{credits:?}");
}

pub fn display_sample(sample: &[u32]) {
    println!("{sample:?}");
}

/// Print the filtered lines, or an empty line when the resource could not be read.
pub fn display_lines(resource: &str, lines: Option<&str>) {
    if lines.is_none() {
        warn!("nothing to display for unreadable resource {resource}");
    }
    println!("{}", shown_lines(lines));
}

fn shown_lines(lines: Option<&str>) -> &str {
    lines.unwrap_or_default()
}

#[test]
fn test_shown_lines() {
    assert_eq!(shown_lines(Some("apple\nan")), "apple\nan");
    assert_eq!(shown_lines(Some("")), "");
    assert_eq!(shown_lines(None), "");
}
