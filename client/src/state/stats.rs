//! Impact counter targets and count-up projection helpers.
//!
//! The animation is a bounded linear count from zero to each target over a
//! fixed duration; the projection is pure (elapsed time in, displayed value
//! out) so the timer loop in the component stays trivial and the math is
//! testable without a browser.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

pub const ANIMATION_DURATION_MS: f64 = 2000.0;

/// One impact statistic card.
pub struct ImpactStat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const IMPACT_STATS: [ImpactStat; 4] = [
    ImpactStat { target: 5000, suffix: "+", label: "Patients impacted in 2024" },
    ImpactStat { target: 298, suffix: "", label: "Projects with Telemedicine access" },
    ImpactStat { target: 56, suffix: "", label: "Countries with Telemedicine access" },
    ImpactStat { target: 465, suffix: "", label: "Specialists in our network" },
];

/// Displayed counter value at `elapsed_ms` into the count-up. Clamps to the
/// target once the duration has passed, so the loop self-terminates cleanly.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn projected_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let alpha = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (f64::from(target) * alpha).floor() as u32
}

/// Whether the count-up has reached its end.
#[must_use]
pub fn is_complete(elapsed_ms: f64, duration_ms: f64) -> bool {
    elapsed_ms >= duration_ms
}
