use serde::Serialize;

use crate::domain::entities::evaluation::Evaluation;
use crate::domain::entities::personnel::Personnel;
use crate::domain::entities::vitals::VitalsReading;
use crate::domain::ports::store::{RecordStore, StoreError};
use crate::domain::rules::Evaluator;
use crate::domain::value_objects::thresholds::ThresholdSet;

/// One person on the roster with their latest reading and its evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub person: Personnel,
    pub latest: Option<VitalsReading>,
    pub evaluation: Evaluation,
}

/// One reading in a person's history, classified on its own.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub reading: VitalsReading,
    pub evaluation: Evaluation,
}

/// A person's full reading history, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct PersonHistory {
    pub person: Personnel,
    pub entries: Vec<HistoryEntry>,
}

/// Read-side assembly of the dashboard, alerts and history views. Every
/// evaluation is computed against a single reading in isolation.
pub struct RosterService<'a> {
    store: &'a dyn RecordStore,
    evaluator: &'a Evaluator,
    thresholds: &'a ThresholdSet,
}

impl<'a> RosterService<'a> {
    #[must_use]
    pub fn new(
        store: &'a dyn RecordStore,
        evaluator: &'a Evaluator,
        thresholds: &'a ThresholdSet,
    ) -> Self {
        Self {
            store,
            evaluator,
            thresholds,
        }
    }

    /// Every person with their latest reading (people without readings
    /// evaluate to normal).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a read operation fails.
    pub fn dashboard(&self) -> Result<Vec<RosterEntry>, StoreError> {
        let mut entries = Vec::new();
        for person in self.store.list_personnel()? {
            let latest = self.store.latest_vitals_for(person.id)?;
            let evaluation = self.evaluator.evaluate(latest.as_ref(), self.thresholds);
            entries.push(RosterEntry {
                person,
                latest,
                evaluation,
            });
        }
        Ok(entries)
    }

    /// Only people whose latest reading triggered at least one rule. People
    /// with no readings are excluded, not reported as normal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a read operation fails.
    pub fn alerts(&self) -> Result<Vec<RosterEntry>, StoreError> {
        let entries = self.dashboard()?;
        Ok(entries
            .into_iter()
            .filter(|e| e.latest.is_some() && e.evaluation.is_flagged())
            .collect())
    }

    /// A person's full history, newest first, each reading re-classified
    /// independently. `None` when the person does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a read operation fails.
    pub fn history(&self, personnel_id: i64) -> Result<Option<PersonHistory>, StoreError> {
        let Some(person) = self.store.get_personnel(personnel_id)? else {
            return Ok(None);
        };
        let entries = self
            .store
            .list_vitals_for(personnel_id)?
            .into_iter()
            .map(|reading| {
                let evaluation = self.evaluator.evaluate(Some(&reading), self.thresholds);
                HistoryEntry { reading, evaluation }
            })
            .collect();
        Ok(Some(PersonHistory { person, entries }))
    }
}
