// src/content/mod.rs
pub mod lifecycle;
pub mod links;

pub use lifecycle::LIFECYCLE_STAGES;
pub use links::ExternalLink;

/// Sidebar figures; static text, not counters.
pub const PLATFORM_STATS: [(&str, &str); 3] = [
    ("Models Audited", "1,247"),
    ("Certified Models", "892"),
    ("Issues Detected", "355"),
];
