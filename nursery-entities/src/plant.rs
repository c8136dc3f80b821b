use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::id::Id;

/// A species-level catalog entry, not a physical object.
///
/// `owner = None` marks a staff-authored entry that is globally
/// visible. `(owner, scientific_name)` is unique: a user cannot
/// register the same species twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    pub id: Id,
    pub owner: Option<Id>,
    pub scientific_name: String,
    pub common_name: String,
    pub water_frequency: WaterFrequency,
    pub sun_exposure: SunExposure,
    pub description: String,
    pub care_tips: String,
}

pub type WaterFrequencyPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WaterFrequency {
    Frequent   = 0,
    Regular    = 1,
    Infrequent = 2,
}

#[derive(Debug, Error)]
#[error("Invalid water frequency primitive: {0}")]
pub struct InvalidWaterFrequencyPrimitive(WaterFrequencyPrimitive);

impl TryFrom<WaterFrequencyPrimitive> for WaterFrequency {
    type Error = InvalidWaterFrequencyPrimitive;
    fn try_from(from: WaterFrequencyPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidWaterFrequencyPrimitive(from))
    }
}

impl From<WaterFrequency> for WaterFrequencyPrimitive {
    fn from(from: WaterFrequency) -> Self {
        from.to_i16().expect("water frequency primitive")
    }
}

pub type SunExposurePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SunExposure {
    FullSun            = 0,
    FullSunPartShade   = 1,
    PartShade          = 2,
    PartShadeFullShade = 3,
    FullShade          = 4,
}

#[derive(Debug, Error)]
#[error("Invalid sun exposure primitive: {0}")]
pub struct InvalidSunExposurePrimitive(SunExposurePrimitive);

impl TryFrom<SunExposurePrimitive> for SunExposure {
    type Error = InvalidSunExposurePrimitive;
    fn try_from(from: SunExposurePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidSunExposurePrimitive(from))
    }
}

impl From<SunExposure> for SunExposurePrimitive {
    fn from(from: SunExposure) -> Self {
        from.to_i16().expect("sun exposure primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_water_frequency() {
        assert_eq!("regular".parse(), Ok(WaterFrequency::Regular));
        assert_eq!("Frequent".parse(), Ok(WaterFrequency::Frequent));
        assert!("daily".parse::<WaterFrequency>().is_err());
    }

    #[test]
    fn parse_sun_exposure() {
        assert_eq!("full_sun_part_shade".parse(), Ok(SunExposure::FullSunPartShade));
        assert!("shade".parse::<SunExposure>().is_err());
    }
}
