use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named permissions checked by the external permission layer before
/// any mutating operation body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Permission {
    AddPlant,
    ChangePlant,
    DeletePlant,
    AddLocation,
    ChangeLocation,
    DeleteLocation,
    AddPlantInstance,
    ChangePlantInstance,
    DeletePlantInstance,
}
