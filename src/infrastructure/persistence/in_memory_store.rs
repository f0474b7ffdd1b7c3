use std::sync::Mutex;

use crate::domain::entities::personnel::Personnel;
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::ports::store::{NewPersonnel, NewVitals, RecordStore, StoreError};

/// In-memory store for testing purposes.
pub struct InMemoryStore {
    personnel: Mutex<Vec<Personnel>>,
    vitals: Mutex<Vec<VitalsReading>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            personnel: Mutex::new(Vec::new()),
            vitals: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::cast_possible_wrap)]
fn next_id(len: usize) -> i64 {
    len as i64 + 1
}

impl RecordStore for InMemoryStore {
    fn create_personnel(&self, person: &NewPersonnel) -> Result<i64, StoreError> {
        let mut people = self
            .personnel
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let id = next_id(people.len());
        people.push(Personnel {
            id,
            name: person.name.clone(),
            role: person.role.clone(),
            agency: person.agency.clone(),
            dob: person.dob,
        });
        drop(people);
        Ok(id)
    }

    fn create_personnel_batch(&self, people: &[NewPersonnel]) -> Result<usize, StoreError> {
        let mut stored = self
            .personnel
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        for person in people {
            let id = next_id(stored.len());
            stored.push(Personnel {
                id,
                name: person.name.clone(),
                role: person.role.clone(),
                agency: person.agency.clone(),
                dob: person.dob,
            });
        }
        drop(stored);
        Ok(people.len())
    }

    fn create_vitals(&self, reading: &NewVitals) -> Result<i64, StoreError> {
        let mut readings = self
            .vitals
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let id = next_id(readings.len());
        readings.push(VitalsReading {
            id,
            personnel_id: reading.personnel_id,
            timestamp: reading.timestamp,
            heart_rate: reading.heart_rate,
            blood_pressure: reading.blood_pressure.clone(),
            temperature: reading.temperature,
            spo2: reading.spo2,
            carboxyhemoglobin: reading.carboxyhemoglobin,
        });
        drop(readings);
        Ok(id)
    }

    fn create_vitals_batch(&self, batch: &[NewVitals]) -> Result<usize, StoreError> {
        let mut readings = self
            .vitals
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        for reading in batch {
            let id = next_id(readings.len());
            readings.push(VitalsReading {
                id,
                personnel_id: reading.personnel_id,
                timestamp: reading.timestamp,
                heart_rate: reading.heart_rate,
                blood_pressure: reading.blood_pressure.clone(),
                temperature: reading.temperature,
                spo2: reading.spo2,
                carboxyhemoglobin: reading.carboxyhemoglobin,
            });
        }
        drop(readings);
        Ok(batch.len())
    }

    fn get_personnel(&self, id: i64) -> Result<Option<Personnel>, StoreError> {
        Ok(self
            .personnel
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn find_personnel_by_name(&self, name: &str) -> Result<Vec<Personnel>, StoreError> {
        Ok(self
            .personnel
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|p| p.name == name)
            .cloned()
            .collect())
    }

    fn list_personnel(&self) -> Result<Vec<Personnel>, StoreError> {
        Ok(self
            .personnel
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .clone())
    }

    fn list_vitals_for(&self, personnel_id: i64) -> Result<Vec<VitalsReading>, StoreError> {
        let mut readings: Vec<VitalsReading> = self
            .vitals
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .filter(|v| v.personnel_id == personnel_id)
            .cloned()
            .collect();
        readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(readings)
    }

    fn latest_vitals_for(&self, personnel_id: i64) -> Result<Option<VitalsReading>, StoreError> {
        Ok(self.list_vitals_for(personnel_id)?.into_iter().next())
    }
}
