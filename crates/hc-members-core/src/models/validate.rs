//! Field validation and blood-pressure classification rules.
//!
//! All domain bounds live here as named, overridable values so the intake
//! layer and the record mutators can never disagree about what is valid.

use thiserror::Error;

use super::member::BpCategory;

/// A blood-pressure reading outside the accepted physiological range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid blood pressure reading {systolic}/{diastolic}")]
pub struct InvalidReading {
    pub systolic: u32,
    pub diastolic: u32,
}

/// Accepted ranges for every validated member field.
///
/// `Limits::DEFAULT` carries the health-centre defaults; construct a custom
/// value to override any bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits {
    /// Minimum age in years (inclusive)
    pub min_age: u32,
    /// Maximum age in years (inclusive)
    pub max_age: u32,
    /// Minimum weight in kg (inclusive)
    pub min_weight: f64,
    /// Maximum weight in kg (inclusive)
    pub max_weight: f64,
    /// Minimum name length after trimming
    pub min_name_len: usize,
    /// Minimum address length
    pub min_address_len: usize,
    /// Maximum address length
    pub max_address_len: usize,
    /// Lowest accepted systolic reading in mmHg
    pub min_systolic: u32,
    /// Highest accepted systolic reading in mmHg
    pub max_systolic: u32,
    /// Lowest accepted diastolic reading in mmHg
    pub min_diastolic: u32,
    /// Highest accepted diastolic reading in mmHg
    pub max_diastolic: u32,
}

impl Limits {
    /// Health-centre default bounds.
    pub const DEFAULT: Self = Self {
        min_age: 0,
        max_age: 120,
        min_weight: 1.0,
        max_weight: 300.0,
        min_name_len: 2,
        min_address_len: 5,
        max_address_len: 100,
        min_systolic: 50,
        max_systolic: 250,
        min_diastolic: 30,
        max_diastolic: 150,
    };

    /// Check an age in years.
    pub fn valid_age(&self, years: u32) -> bool {
        years >= self.min_age && years <= self.max_age
    }

    /// Check a weight in kg.
    pub fn valid_weight(&self, kg: f64) -> bool {
        kg >= self.min_weight && kg <= self.max_weight
    }

    /// Check a forename or surname. Leading/trailing whitespace does not
    /// count towards the minimum length.
    pub fn valid_name(&self, name: &str) -> bool {
        name.trim().len() >= self.min_name_len
    }

    /// Check an address string.
    pub fn valid_address(&self, address: &str) -> bool {
        let len = address.trim().len();
        len >= self.min_address_len && len <= self.max_address_len
    }

    /// Check a systolic reading in mmHg.
    pub fn valid_systolic(&self, mm_hg: u32) -> bool {
        mm_hg >= self.min_systolic && mm_hg <= self.max_systolic
    }

    /// Check a diastolic reading in mmHg.
    pub fn valid_diastolic(&self, mm_hg: u32) -> bool {
        mm_hg >= self.min_diastolic && mm_hg <= self.max_diastolic
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classification cut-offs for a systolic/diastolic reading pair.
///
/// The high rule wins over the low rule: a reading that is high on either
/// channel is High even if the other channel sits below the low cut-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpThresholds {
    /// Systolic at or above this is High
    pub high_systolic: u32,
    /// Diastolic at or above this is High
    pub high_diastolic: u32,
    /// Systolic below this (together with low diastolic) is Low
    pub low_systolic: u32,
    /// Diastolic below this (together with low systolic) is Low
    pub low_diastolic: u32,
}

impl BpThresholds {
    /// Standard clinical cut-offs: 140/90 for High, below 90/60 for Low.
    pub const DEFAULT: Self = Self {
        high_systolic: 140,
        high_diastolic: 90,
        low_systolic: 90,
        low_diastolic: 60,
    };

    /// Classify a range-checked reading pair into exactly one category.
    pub fn classify(&self, systolic: u32, diastolic: u32) -> BpCategory {
        if systolic >= self.high_systolic || diastolic >= self.high_diastolic {
            BpCategory::High
        } else if systolic < self.low_systolic && diastolic < self.low_diastolic {
            BpCategory::Low
        } else {
            BpCategory::Normal
        }
    }
}

impl Default for BpThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
