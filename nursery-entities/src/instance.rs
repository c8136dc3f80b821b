use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;
use time::Date;

use crate::id::Id;

/// One physically owned specimen of a catalog entry.
///
/// The `id` is an opaque, globally unique token. `nickname` is unique
/// per customer, not globally. `plant_id` and `location_id` reference
/// existing rows; deleting the referenced rows is restricted, never
/// cascaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantInstance {
    pub id: Id,
    pub plant_id: Id,
    pub customer: Option<Id>,
    pub location_id: Id,
    pub nickname: String,
    pub purchased_on: Date,
    pub due_watered_on: Option<Date>,
    pub status: WateringStatus,
}

impl PlantInstance {
    /// A due date has been set and has passed (or is today).
    pub fn is_overdue_watered(&self, today: Date) -> bool {
        self.due_watered_on.map_or(false, |due| today >= due)
    }

    pub fn is_not_watered(&self) -> bool {
        self.status == WateringStatus::NotWatered
    }
}

pub type WateringStatusPrimitive = i16;

/// `Purchased` only occurs in rows imported from the legacy schema;
/// new records start as `Watered`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WateringStatus {
    Purchased  = 0,
    #[default]
    Watered    = 1,
    NotWatered = 2,
}

#[derive(Debug, Error)]
#[error("Invalid watering status primitive: {0}")]
pub struct InvalidWateringStatusPrimitive(WateringStatusPrimitive);

impl TryFrom<WateringStatusPrimitive> for WateringStatus {
    type Error = InvalidWateringStatusPrimitive;
    fn try_from(from: WateringStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidWateringStatusPrimitive(from))
    }
}

impl From<WateringStatus> for WateringStatusPrimitive {
    fn from(from: WateringStatus) -> Self {
        from.to_i16().expect("watering status primitive")
    }
}
