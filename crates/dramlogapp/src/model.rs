//! # Domain Model: the Drink record
//!
//! A [`Drink`] is one logged consumption event. Records are immutable once
//! created: there is no update operation, and corrections are modeled as
//! delete + re-add by the caller. The derived `pure_alcohol` quantity is
//! computed exactly once, at creation, and stored alongside the inputs so it
//! can never drift from what was shown when the drink was logged.
//!
//! ## Wire format
//!
//! Drinks serialize with camelCase keys; the persistence slot holds a JSON
//! array of these objects:
//!
//! ```json
//! [{"id": "…", "name": "IPA", "strengthPercent": 6.5,
//!   "volumeMl": 330.0, "pureAlcohol": 17.2, "createdAt": "…"}]
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc;
use crate::validate::ValidDrink;

/// One logged drink-consumption event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: Uuid,
    pub name: String,
    pub strength_percent: f64,
    pub volume_ml: f64,
    /// Derived quantity (grams with the default factor), fixed at creation.
    pub pure_alcohol: f64,
    pub created_at: DateTime<Utc>,
}

impl Drink {
    /// Builds a drink from validated input. Only the ledger's add path calls
    /// this; the ledger owns id uniqueness and timestamp ordering.
    pub(crate) fn new(
        input: ValidDrink,
        absorption_factor: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let pure_alcohol =
            calc::pure_alcohol(input.volume_ml, input.strength_percent, absorption_factor);
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            strength_percent: input.strength_percent,
            volume_ml: input.volume_ml,
            pure_alcohol,
            created_at,
        }
    }
}
