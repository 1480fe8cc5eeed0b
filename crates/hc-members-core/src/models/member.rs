//! Member record model.

use serde::{Deserialize, Serialize};

use super::validate::{BpThresholds, InvalidReading, Limits};

/// Member gender, persisted as a single character (`M`/`F`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse from the persisted single-character form.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(Gender::Male),
            'F' => Some(Gender::Female),
            _ => None,
        }
    }

    /// Single-character form used by the persistence layer.
    pub fn as_char(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Derived blood-pressure classification.
///
/// Values are only ever produced by [`BpThresholds::classify`] or carried
/// over from a persisted row; callers never set one from raw readings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BpCategory {
    /// No reading recorded yet
    #[default]
    Unset,
    Low,
    Normal,
    High,
}

impl BpCategory {
    /// Label used for display and persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            BpCategory::Unset => "Unset",
            BpCategory::Low => "Low",
            BpCategory::Normal => "Normal",
            BpCategory::High => "High",
        }
    }

    /// Parse a persisted label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "unset" => Some(BpCategory::Unset),
            "low" => Some(BpCategory::Low),
            "normal" => Some(BpCategory::Normal),
            "high" => Some(BpCategory::High),
            _ => None,
        }
    }
}

/// One registered health-centre member.
///
/// Fields are private so every mutation goes through a validated mutator;
/// after any call the bounds in [`Limits`] still hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberRecord {
    /// Health-centre number, string form of a sequential integer
    id: String,
    forename: String,
    surname: String,
    gender: Gender,
    /// Age in years
    age: u32,
    /// Weight in kg
    weight: f64,
    address: String,
    blood_pressure: BpCategory,
    /// Count of recorded centre visits
    visit_tally: u32,
    /// Whether the yearly face-to-face consultation has been completed
    consultation_done: bool,
}

impl MemberRecord {
    /// Create a freshly registered member with default clinical state.
    ///
    /// The caller (the registry intake path) is responsible for having
    /// validated the fields against [`Limits`] already.
    pub fn new(
        id: String,
        forename: String,
        surname: String,
        gender: Gender,
        age: u32,
        weight: f64,
        address: String,
    ) -> Self {
        Self {
            id,
            forename,
            surname,
            gender,
            age,
            weight,
            address,
            blood_pressure: BpCategory::Unset,
            visit_tally: 0,
            consultation_done: false,
        }
    }

    /// Reconstruct a member from a persisted row, all ten fields given.
    #[allow(clippy::too_many_arguments)]
    pub fn from_stored(
        id: String,
        forename: String,
        surname: String,
        gender: Gender,
        age: u32,
        weight: f64,
        address: String,
        blood_pressure: BpCategory,
        visit_tally: u32,
        consultation_done: bool,
    ) -> Self {
        Self {
            id,
            forename,
            surname,
            gender,
            age,
            weight,
            address,
            blood_pressure,
            visit_tally,
            consultation_done,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn forename(&self) -> &str {
        &self.forename
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn blood_pressure(&self) -> BpCategory {
        self.blood_pressure
    }

    pub fn visit_tally(&self) -> u32 {
        self.visit_tally
    }

    pub fn consultation_done(&self) -> bool {
        self.consultation_done
    }

    /// Record one centre visit. Cannot fail and has no upper bound.
    pub fn record_visit(&mut self) {
        self.visit_tally += 1;
    }

    /// Update weight if valid. Returns whether the mutation was applied.
    pub fn set_weight(&mut self, kg: f64) -> bool {
        self.set_weight_with(&Limits::DEFAULT, kg)
    }

    /// Update weight against custom bounds.
    pub fn set_weight_with(&mut self, limits: &Limits, kg: f64) -> bool {
        if limits.valid_weight(kg) {
            self.weight = kg;
            true
        } else {
            false
        }
    }

    /// Update age if valid. Returns whether the mutation was applied.
    pub fn set_age(&mut self, years: u32) -> bool {
        self.set_age_with(&Limits::DEFAULT, years)
    }

    /// Update age against custom bounds.
    pub fn set_age_with(&mut self, limits: &Limits, years: u32) -> bool {
        if limits.valid_age(years) {
            self.age = years;
            true
        } else {
            false
        }
    }

    /// Mark the yearly face-to-face consultation as done (or reset it).
    pub fn set_consultation_done(&mut self, done: bool) {
        self.consultation_done = done;
    }

    /// Classify a new reading and store the result.
    ///
    /// Fails with [`InvalidReading`] when either channel is outside its
    /// accepted range, in which case the stored classification is untouched.
    pub fn update_blood_pressure(
        &mut self,
        systolic: u32,
        diastolic: u32,
    ) -> Result<BpCategory, InvalidReading> {
        self.update_blood_pressure_with(&Limits::DEFAULT, &BpThresholds::DEFAULT, systolic, diastolic)
    }

    /// Classify a new reading against custom bounds and cut-offs.
    pub fn update_blood_pressure_with(
        &mut self,
        limits: &Limits,
        thresholds: &BpThresholds,
        systolic: u32,
        diastolic: u32,
    ) -> Result<BpCategory, InvalidReading> {
        if !limits.valid_systolic(systolic) || !limits.valid_diastolic(diastolic) {
            return Err(InvalidReading { systolic, diastolic });
        }
        let category = thresholds.classify(systolic, diastolic);
        self.blood_pressure = category;
        Ok(category)
    }

    /// One fixed-width line for tabular listings: id, forename, surname,
    /// gender label, age, blood-pressure label.
    pub fn summary_line(&self) -> String {
        format!(
            "{:<10} {:<15} {:<15} {:<6} {:<5} {:<10}",
            self.id,
            self.forename,
            self.surname,
            self.gender.label(),
            self.age,
            self.blood_pressure.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_member() -> MemberRecord {
        MemberRecord::new(
            "100001".into(),
            "Anna".into(),
            "Lee".into(),
            Gender::Female,
            30,
            65.0,
            "1 Main St".into(),
        )
    }

    #[test]
    fn test_new_member_defaults() {
        let member = make_member();
        assert_eq!(member.id(), "100001");
        assert_eq!(member.blood_pressure(), BpCategory::Unset);
        assert_eq!(member.visit_tally(), 0);
        assert!(!member.consultation_done());
    }

    #[test]
    fn test_record_visit() {
        let mut member = make_member();
        member.record_visit();
        member.record_visit();
        assert_eq!(member.visit_tally(), 2);
    }

    #[test]
    fn test_set_weight_rejects_out_of_range() {
        let mut member = make_member();
        assert!(!member.set_weight(0.5));
        assert_eq!(member.weight(), 65.0);
        assert!(member.set_weight(72.5));
        assert_eq!(member.weight(), 72.5);
    }

    #[test]
    fn test_set_age_rejects_out_of_range() {
        let mut member = make_member();
        assert!(!member.set_age(121));
        assert_eq!(member.age(), 30);
        assert!(member.set_age(31));
        assert_eq!(member.age(), 31);
    }

    #[test]
    fn test_update_blood_pressure_writes_category() {
        let mut member = make_member();
        let category = member.update_blood_pressure(150, 95).unwrap();
        assert_eq!(category, BpCategory::High);
        assert_eq!(member.blood_pressure(), BpCategory::High);
    }

    #[test]
    fn test_invalid_reading_leaves_record_unchanged() {
        let mut member = make_member();
        member.update_blood_pressure(120, 80).unwrap();

        let err = member.update_blood_pressure(300, 80).unwrap_err();
        assert_eq!(err, InvalidReading { systolic: 300, diastolic: 80 });
        assert_eq!(member.blood_pressure(), BpCategory::Normal);
    }

    #[test]
    fn test_gender_round_trip() {
        assert_eq!(Gender::from_char('m'), Some(Gender::Male));
        assert_eq!(Gender::from_char('F'), Some(Gender::Female));
        assert_eq!(Gender::from_char('x'), None);
        assert_eq!(Gender::Male.as_char(), 'M');
    }

    #[test]
    fn test_bp_category_parse_is_case_insensitive() {
        assert_eq!(BpCategory::parse("HIGH"), Some(BpCategory::High));
        assert_eq!(BpCategory::parse("normal"), Some(BpCategory::Normal));
        assert_eq!(BpCategory::parse(" Low "), Some(BpCategory::Low));
        assert_eq!(BpCategory::parse("elevated"), None);
    }

    #[test]
    fn test_summary_line_columns() {
        let member = make_member();
        let line = member.summary_line();
        assert!(line.starts_with("100001     Anna"));
        // Fixed column widths keep later fields at stable offsets
        assert_eq!(&line[27..30], "Lee");
        assert_eq!(&line[43..49], "Female");
    }
}
