//! Canned replies for common questions, answered without a network call.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Labels for the quick-action buttons pinned above the input. Each one is
/// sent exactly like typed text and resolves through the shortcut table.
pub const QUICK_ACTIONS: [&str; 4] = ["Services", "Contact", "TeleCare", "Mental Health"];

pub const CONTACT_REPLY: &str =
    "📞 Phone: +250 791 231 993\n✉️ Email: contact@baho.com\n📍 Address: Kigali, Rwanda";

pub const SERVICES_REPLY: &str = "We provide TeleCare, e-Pharmacy, Diagnostics, ChronicCare, LifeTrack, \
Mental Health, Preventive Programs, and GlobalCare.";

pub const TELECARE_REPLY: &str =
    "TeleCare allows video consultations and online appointments with our specialists.";

pub const PHARMACY_REPLY: &str =
    "BAHO Meds: Order prescriptions and chronic medications online, delivered to your home.";

pub const MENTAL_HEALTH_REPLY: &str =
    "Tele-counseling and therapy services for mental health and stress management.";

/// Look up a canned reply by exact normalized (trimmed, lowercased) match.
#[must_use]
pub fn reply_for(input: &str) -> Option<&'static str> {
    match input.trim().to_lowercase().as_str() {
        "contact" => Some(CONTACT_REPLY),
        "services" => Some(SERVICES_REPLY),
        "telecare" => Some(TELECARE_REPLY),
        "pharmacy" => Some(PHARMACY_REPLY),
        "mental health" => Some(MENTAL_HEALTH_REPLY),
        _ => None,
    }
}
