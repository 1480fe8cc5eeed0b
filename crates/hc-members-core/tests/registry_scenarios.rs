//! End-to-end registry scenarios over a real SQLite store.

use hc_members_core::{
    BpCategory, Database, Gender, MemberRegistry, NewMember,
};

fn anna() -> NewMember {
    NewMember {
        forename: "Anna".into(),
        surname: "Lee".into(),
        gender: Gender::Female,
        age: 30,
        weight: 65.0,
        address: "1 Main St".into(),
    }
}

fn ben() -> NewMember {
    NewMember {
        forename: "Ben".into(),
        surname: "Okafor".into(),
        gender: Gender::Male,
        age: 45,
        weight: 82.3,
        address: "14 Hill Road".into(),
    }
}

#[test]
fn first_registration_scenario() {
    let db = Database::open_in_memory().unwrap();
    let mut registry = MemberRegistry::open(db);

    let added = registry.add_member(anna());
    assert!(added.write_error.is_none());
    assert_eq!(added.record.id(), "100001");
    assert_eq!(added.record.visit_tally(), 0);
    assert!(!added.record.consultation_done());
    assert_eq!(added.record.blood_pressure(), BpCategory::Unset);

    registry
        .find_by_id_mut("100001")
        .unwrap()
        .update_blood_pressure(150, 95)
        .unwrap();

    let high = registry.filter_high_blood_pressure();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].id(), "100001");
}

#[test]
fn registrations_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.db");

    {
        let db = Database::open(&path).unwrap();
        let mut registry = MemberRegistry::open(db);
        assert_eq!(registry.add_member(anna()).record.id(), "100001");
        assert_eq!(registry.add_member(ben()).record.id(), "100002");
    }

    // A fresh registry over the same file sees the stored members and
    // carries on allocating after the highest stored id.
    let db = Database::open(&path).unwrap();
    let mut registry = MemberRegistry::open(db);

    assert_eq!(registry.count(), 2);
    let anna_back = registry.find_by_id("100001").unwrap();
    assert_eq!(anna_back.forename(), "Anna");
    assert_eq!(anna_back.weight(), 65.0);

    assert_eq!(registry.add_member(ben()).record.id(), "100003");
}

#[test]
fn clinical_review_filters_over_a_mixed_roster() {
    let db = Database::open_in_memory().unwrap();
    let mut registry = MemberRegistry::open(db);

    let anna_id = registry.add_member(anna()).record.id().to_string();
    let ben_id = registry.add_member(ben()).record.id().to_string();

    {
        let anna = registry.find_by_id_mut(&anna_id).unwrap();
        anna.update_blood_pressure(118, 76).unwrap();
        anna.set_consultation_done(true);
        for _ in 0..6 {
            anna.record_visit();
        }
    }
    {
        let ben = registry.find_by_id_mut(&ben_id).unwrap();
        ben.update_blood_pressure(162, 101).unwrap();
        ben.record_visit();
    }

    assert_eq!(registry.filter_by_gender(Gender::Male).len(), 1);

    let high = registry.filter_high_blood_pressure();
    assert_eq!(high.len(), 1);
    assert_eq!(high[0].id(), ben_id);

    let due = registry.filter_due_for_consultation();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id(), ben_id);

    let low_visits = registry.filter_low_visits(5);
    assert_eq!(low_visits.len(), 1);
    assert_eq!(low_visits[0].id(), ben_id);

    registry.reset_all_consultations();
    assert_eq!(registry.filter_due_for_consultation().len(), 2);
}
