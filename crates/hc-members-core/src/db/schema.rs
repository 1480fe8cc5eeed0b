//! SQLite schema definition.

/// Complete database schema for the member system.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS members (
    hc_number TEXT PRIMARY KEY,
    forename TEXT NOT NULL,
    surname TEXT NOT NULL,
    gender TEXT NOT NULL,                         -- single character, 'M' or 'F'
    age INTEGER NOT NULL,
    weight_kg REAL NOT NULL,
    address TEXT NOT NULL,
    blood_pressure TEXT NOT NULL DEFAULT 'Unset', -- classification label
    visit_tally INTEGER NOT NULL DEFAULT 0,
    consultation_done INTEGER NOT NULL DEFAULT 0
);
"#;
