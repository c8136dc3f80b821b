use nursery_core::entities::*;

use super::{schema::*, util};

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub role: i16,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User { id, email, role } = from;
        Self {
            id: id.as_str(),
            email,
            role: RolePrimitive::from(*role),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub role: i16,
}

impl TryFrom<UserEntity> for User {
    type Error = anyhow::Error;
    fn try_from(from: UserEntity) -> Result<Self, Self::Error> {
        let UserEntity { id, email, role } = from;
        Ok(Self {
            id: id.into(),
            email,
            role: Role::try_from(role)?,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = common_names)]
pub struct NewCommonName<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a CommonName> for NewCommonName<'a> {
    fn from(from: &'a CommonName) -> Self {
        let CommonName { id, name } = from;
        Self {
            id: id.as_str(),
            name,
        }
    }
}

#[derive(Queryable)]
pub struct CommonNameEntity {
    pub id: String,
    pub name: String,
}

impl From<CommonNameEntity> for CommonName {
    fn from(from: CommonNameEntity) -> Self {
        let CommonNameEntity { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

// `treat_none_as_null` lets an update clear the nullable owner
// column instead of silently skipping it.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = plants, treat_none_as_null = true)]
pub struct NewPlant<'a> {
    pub id: &'a str,
    pub owner: Option<&'a str>,
    pub scientific_name: &'a str,
    pub common_name: &'a str,
    pub water_frequency: i16,
    pub sun_exposure: i16,
    pub description: &'a str,
    pub care_tips: &'a str,
}

impl<'a> From<&'a Plant> for NewPlant<'a> {
    fn from(from: &'a Plant) -> Self {
        let Plant {
            id,
            owner,
            scientific_name,
            common_name,
            water_frequency,
            sun_exposure,
            description,
            care_tips,
        } = from;
        Self {
            id: id.as_str(),
            owner: owner.as_ref().map(Id::as_str),
            scientific_name,
            common_name,
            water_frequency: WaterFrequencyPrimitive::from(*water_frequency),
            sun_exposure: SunExposurePrimitive::from(*sun_exposure),
            description,
            care_tips,
        }
    }
}

#[derive(Queryable)]
pub struct PlantEntity {
    pub id: String,
    pub owner: Option<String>,
    pub scientific_name: String,
    pub common_name: String,
    pub water_frequency: i16,
    pub sun_exposure: i16,
    pub description: String,
    pub care_tips: String,
}

impl TryFrom<PlantEntity> for Plant {
    type Error = anyhow::Error;
    fn try_from(from: PlantEntity) -> Result<Self, Self::Error> {
        let PlantEntity {
            id,
            owner,
            scientific_name,
            common_name,
            water_frequency,
            sun_exposure,
            description,
            care_tips,
        } = from;
        Ok(Self {
            id: id.into(),
            owner: owner.map(Into::into),
            scientific_name,
            common_name,
            water_frequency: WaterFrequency::try_from(water_frequency)?,
            sun_exposure: SunExposure::try_from(sun_exposure)?,
            description,
            care_tips,
        })
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = locations)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub owner: &'a str,
    pub name: &'a str,
}

impl<'a> From<&'a Location> for NewLocation<'a> {
    fn from(from: &'a Location) -> Self {
        let Location { id, owner, name } = from;
        Self {
            id: id.as_str(),
            owner: owner.as_str(),
            name,
        }
    }
}

#[derive(Queryable)]
pub struct LocationEntity {
    pub id: String,
    pub owner: String,
    pub name: String,
}

impl From<LocationEntity> for Location {
    fn from(from: LocationEntity) -> Self {
        let LocationEntity { id, owner, name } = from;
        Self {
            id: id.into(),
            owner: owner.into(),
            name,
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = plant_instances, treat_none_as_null = true)]
pub struct NewPlantInstance {
    pub id: String,
    pub plant_id: String,
    pub customer: Option<String>,
    pub location_id: String,
    pub nickname: String,
    pub purchased_on: String,
    pub due_watered_on: Option<String>,
    pub status: i16,
}

impl TryFrom<&PlantInstance> for NewPlantInstance {
    type Error = anyhow::Error;
    fn try_from(from: &PlantInstance) -> Result<Self, Self::Error> {
        let PlantInstance {
            id,
            plant_id,
            customer,
            location_id,
            nickname,
            purchased_on,
            due_watered_on,
            status,
        } = from;
        Ok(Self {
            id: id.to_string(),
            plant_id: plant_id.to_string(),
            customer: customer.as_ref().map(ToString::to_string),
            location_id: location_id.to_string(),
            nickname: nickname.clone(),
            purchased_on: util::date_to_text(*purchased_on)?,
            due_watered_on: due_watered_on.map(util::date_to_text).transpose()?,
            status: WateringStatusPrimitive::from(*status),
        })
    }
}

#[derive(Queryable)]
pub struct PlantInstanceEntity {
    pub id: String,
    pub plant_id: String,
    pub customer: Option<String>,
    pub location_id: String,
    pub nickname: String,
    pub purchased_on: String,
    pub due_watered_on: Option<String>,
    pub status: i16,
}

impl TryFrom<PlantInstanceEntity> for PlantInstance {
    type Error = anyhow::Error;
    fn try_from(from: PlantInstanceEntity) -> Result<Self, Self::Error> {
        let PlantInstanceEntity {
            id,
            plant_id,
            customer,
            location_id,
            nickname,
            purchased_on,
            due_watered_on,
            status,
        } = from;
        Ok(Self {
            id: id.into(),
            plant_id: plant_id.into(),
            customer: customer.map(Into::into),
            location_id: location_id.into(),
            nickname,
            purchased_on: util::date_from_text(&purchased_on)?,
            due_watered_on: due_watered_on.as_deref().map(util::date_from_text).transpose()?,
            status: WateringStatus::try_from(status)?,
        })
    }
}
