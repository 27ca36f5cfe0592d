//! Human-readable rationale shown next to the rating.
//!
//! Latitude bands and recommendation thresholds here only drive the wording.
//! They are not shared with `factors` or `classifier`.

const RECOMMENDATIONS: [(f64, &str); 3] = [
    (3.0, " High probability of successful tasking."),
    (2.0, " Good probability of successful tasking."),
    (1.0, " Consider extending date range for better results."),
];
const FALLBACK_RECOMMENDATION: &str = " Consider longer date range or different sensor type.";

pub fn explain(sensor_label: &str, expected_passes: u32, days: i64, latitude: f64) -> String {
    let passes_per_day = expected_passes as f64 / days as f64;

    let mut text = format!(
        "{} avg passes/day for {} sensors. ",
        one_decimal(passes_per_day),
        sensor_label
    );
    text.push_str(latitude_description(latitude));
    text.push_str(recommendation(passes_per_day));
    text
}

pub fn latitude_description(latitude: f64) -> &'static str {
    let abs_lat = latitude.abs();

    if abs_lat < 30.0 {
        "Equatorial location has moderate pass frequency."
    } else if abs_lat < 45.0 {
        "Mid-latitude location provides good coverage."
    } else if abs_lat < 60.0 {
        "Higher latitude increases pass frequency."
    } else {
        "Polar location offers excellent pass frequency."
    }
}

fn recommendation(passes_per_day: f64) -> &'static str {
    RECOMMENDATIONS
        .iter()
        .find(|(min, _)| passes_per_day >= *min)
        .map(|(_, text)| *text)
        .unwrap_or(FALLBACK_RECOMMENDATION)
}

/// `{:.1}` rounds ties to even; the rationale text rounds them up.
fn one_decimal(v: f64) -> String {
    format!("{:.1}", (v * 10.0).round() / 10.0)
}
