//! Member table operations.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::{BpCategory, Gender, MemberRecord};
use crate::registry::{MemberStore, StoreError};

fn map_member_row(row: &Row<'_>) -> rusqlite::Result<MemberRecord> {
    let gender_raw: String = row.get(3)?;
    let gender = gender_raw
        .chars()
        .next()
        .and_then(Gender::from_char)
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                format!("unrecognised gender {gender_raw:?}").into(),
            )
        })?;
    // Unknown labels degrade to the unset sentinel rather than failing the row
    let bp_raw: String = row.get(7)?;
    let blood_pressure = BpCategory::parse(&bp_raw).unwrap_or_default();

    Ok(MemberRecord::from_stored(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        gender,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        blood_pressure,
        row.get(8)?,
        row.get(9)?,
    ))
}

impl Database {
    /// Insert a new member row.
    pub fn insert_member(&self, member: &MemberRecord) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO members (
                hc_number, forename, surname, gender, age, weight_kg,
                address, blood_pressure, visit_tally, consultation_done
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                member.id(),
                member.forename(),
                member.surname(),
                member.gender().as_char().to_string(),
                member.age(),
                member.weight(),
                member.address(),
                member.blood_pressure().as_str(),
                member.visit_tally(),
                member.consultation_done(),
            ],
        )?;
        Ok(())
    }

    /// Load all members in insertion order.
    pub fn load_members(&self) -> DbResult<Vec<MemberRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT hc_number, forename, surname, gender, age, weight_kg,
                   address, blood_pressure, visit_tally, consultation_done
            FROM members
            ORDER BY rowid
            "#,
        )?;

        let rows = stmt.query_map([], map_member_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

impl MemberStore for Database {
    fn load_all(&self) -> Result<Vec<MemberRecord>, StoreError> {
        self.load_members()
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn insert_one(&self, member: &MemberRecord) -> Result<(), StoreError> {
        self.insert_member(member)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}
