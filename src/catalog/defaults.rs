//! Bundled reference data used when nothing better is available: the static service
//! list merged into every catalog, and the fallback providers searched offline.

use super::types::ProviderSnapshot;
use serde_json::json;

/// Services surfaced as quick-search chips.
pub const POPULAR_SERVICES: &[&str] = &[
    "plumbing",
    "cleaning",
    "tutoring",
    "electrician",
    "gardening",
    "handyman",
    "beauty",
    "fitness",
    "catering",
    "photography",
];

const REFERENCE_SERVICES: &[&str] = &[
    "plumbing",
    "electrical",
    "electrician",
    "carpentry",
    "painting",
    "cleaning",
    "house cleaning",
    "gardening",
    "landscaping",
    "handyman",
    "moving help",
    "tutoring",
    "arabic tutoring",
    "quran teaching",
    "translation",
    "babysitting",
    "elderly care",
    "cooking",
    "catering",
    "event setup",
    "photography",
    "graphic design",
    "web development",
    "computer repair",
    "phone repair",
    "car repair",
    "generator repair",
    "tailoring",
    "beauty",
    "barber",
    "fitness",
    "driving lessons",
];

/// The static reference list, fixed for the life of the process.
pub fn static_services() -> Vec<String> {
    REFERENCE_SERVICES.iter().map(|s| s.to_string()).collect()
}

/// Providers bundled with the application for offline search.
pub fn fallback_snapshot() -> ProviderSnapshot {
    ProviderSnapshot::from_json(&json!({
        "users": {
            "user1": {
                "id": "user1",
                "name": "Ahmed Hassan",
                "phone": "+1234567890",
                "email": "1234567890@mosque.app",
                "services": ["plumbing", "electrical", "generator repair"],
                "profileViews": 15,
                "contactsReceived": 8
            },
            "user2": {
                "id": "user2",
                "name": "Fatima Al-Zahra",
                "phone": "+1234567891",
                "email": "1234567891@mosque.app",
                "services": ["tutoring", "translation", "arabic tutoring"],
                "profileViews": 22,
                "contactsReceived": 12
            },
            "user3": {
                "id": "user3",
                "name": "Omar Abdullah",
                "phone": "+1234567892",
                "email": "1234567892@mosque.app",
                "services": ["catering", "event setup", "cooking"],
                "profileViews": 31,
                "contactsReceived": 18
            }
        }
    }))
}
