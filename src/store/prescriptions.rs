//! Owner-partitioned prescription persistence.
//!
//! Records are created or deleted, never mutated: there is no update path,
//! and `id`/`created_at` are assigned here exclusively. Listing returns
//! newest-first, with ties broken by insertion order.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::models::{Medication, Prescription};
use crate::pipeline::frequency::normalize_frequency;

use super::StoreError;

pub struct PrescriptionStore {
    conn: Mutex<Connection>,
}

impl PrescriptionStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Store a record under the owner's partition and return the assigned id.
    ///
    /// Any client-supplied `id` on the input record is discarded; the id
    /// and timestamp are assigned here. Medication frequencies are
    /// re-normalized so raw shorthand can never reach storage, even when a
    /// record is posted directly rather than produced by a scan.
    pub fn create(&self, owner_id: &str, record: &Prescription) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let medications: Vec<Medication> = record
            .medications
            .iter()
            .cloned()
            .map(|mut m| {
                if let Some(token) = m.frequency.take() {
                    m.frequency = Some(normalize_frequency(&token));
                }
                m
            })
            .collect();
        let medications_json = serde_json::to_string(&medications)?;

        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        conn.execute(
            "INSERT INTO prescriptions
             (id, owner_id, doctor_name, patient_name, prescription_date, medications, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                owner_id,
                record.doctor_name,
                record.patient_name,
                record.prescription_date,
                medications_json,
                created_at,
            ],
        )?;

        tracing::info!(owner = %owner_id, id = %id, "prescription stored");
        Ok(id)
    }

    /// All records under the owner's partition, ordered by creation time
    /// descending (insertion order breaks ties). The timestamp itself is
    /// an ordering key, not payload, and is not returned.
    pub fn list(&self, owner_id: &str) -> Result<Vec<Prescription>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut stmt = conn.prepare(
            "SELECT id, doctor_name, patient_name, prescription_date, medications
             FROM prescriptions
             WHERE owner_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let rows = stmt.query_map(params![owner_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut prescriptions = Vec::new();
        for row in rows {
            let (id, doctor_name, patient_name, prescription_date, medications_json) = row?;
            prescriptions.push(Prescription {
                id: Some(id),
                doctor_name,
                patient_name,
                prescription_date,
                medications: serde_json::from_str(&medications_json)?,
            });
        }
        Ok(prescriptions)
    }

    /// Remove a record from the owner's partition.
    ///
    /// Idempotent: deleting an id that does not exist (or belongs to
    /// another owner) reports success.
    pub fn delete(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        let affected = conn.execute(
            "DELETE FROM prescriptions WHERE owner_id = ?1 AND id = ?2",
            params![owner_id, id],
        )?;

        if affected == 0 {
            tracing::debug!(owner = %owner_id, id = %id, "delete of unknown prescription id");
        } else {
            tracing::info!(owner = %owner_id, id = %id, "prescription deleted");
        }
        Ok(())
    }
}
