// In-memory repository fake shared by the use case unit tests.
// It mimics the store-level semantics: uniqueness constraints fail
// with `AlreadyExists` and restricted references with
// `StillReferenced`, like their SQLite counterparts.

use std::cell::RefCell;

use nursery_entities::builders::Builder as _;
use time::{macros::date, Date};

use super::*;
use crate::{
    repositories::{Error as RepoError, *},
    PermissionGateway,
};

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub plants: RefCell<Vec<Plant>>,
    pub locations: RefCell<Vec<Location>>,
    pub common_names: RefCell<Vec<CommonName>>,
    pub instances: RefCell<Vec<PlantInstance>>,
}

type RepoResult<T> = std::result::Result<T, RepoError>;

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.id == user.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: &Id) -> RepoResult<User> {
        self.try_get_user(id)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user(&self, id: &Id) -> RepoResult<Option<User>> {
        Ok(self.users.borrow().iter().find(|u| &u.id == id).cloned())
    }
}

impl PlantRepo for MockDb {
    fn create_plant(&self, plant: &Plant) -> RepoResult<()> {
        if self.plants.borrow().iter().any(|p| {
            p.id == plant.id
                || (p.owner == plant.owner
                    && p.owner.is_some()
                    && p.scientific_name == plant.scientific_name)
        }) {
            return Err(RepoError::AlreadyExists);
        }
        self.plants.borrow_mut().push(plant.clone());
        Ok(())
    }

    fn update_plant(&self, plant: &Plant) -> RepoResult<()> {
        let mut plants = self.plants.borrow_mut();
        let existing = plants
            .iter_mut()
            .find(|p| p.id == plant.id)
            .ok_or(RepoError::NotFound)?;
        *existing = plant.clone();
        Ok(())
    }

    fn delete_plant(&self, id: &Id) -> RepoResult<()> {
        if self
            .instances
            .borrow()
            .iter()
            .any(|i| &i.plant_id == id)
        {
            return Err(RepoError::StillReferenced);
        }
        let mut plants = self.plants.borrow_mut();
        let i = plants
            .iter()
            .position(|p| &p.id == id)
            .ok_or(RepoError::NotFound)?;
        plants.remove(i);
        Ok(())
    }

    fn get_plant(&self, id: &Id) -> RepoResult<Plant> {
        self.plants
            .borrow()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_plants(&self) -> RepoResult<Vec<Plant>> {
        let mut plants = self.plants.borrow().clone();
        plants.sort_by(|a, b| a.scientific_name.cmp(&b.scientific_name));
        Ok(plants)
    }

    fn plants_by_owner(&self, owner: &Id) -> RepoResult<Vec<Plant>> {
        let mut plants: Vec<_> = self
            .plants
            .borrow()
            .iter()
            .filter(|p| p.owner.as_ref() == Some(owner))
            .cloned()
            .collect();
        plants.sort_by(|a, b| a.scientific_name.cmp(&b.scientific_name));
        Ok(plants)
    }

    fn try_get_plant_by_owner_and_scientific_name(
        &self,
        owner: Option<&Id>,
        scientific_name: &str,
    ) -> RepoResult<Option<Plant>> {
        Ok(self
            .plants
            .borrow()
            .iter()
            .find(|p| p.owner.as_ref() == owner && p.scientific_name == scientific_name)
            .cloned())
    }

    fn count_plants(&self) -> RepoResult<usize> {
        Ok(self.plants.borrow().len())
    }

    fn count_plants_with_common_name(&self, name: &str) -> RepoResult<usize> {
        Ok(self
            .plants
            .borrow()
            .iter()
            .filter(|p| p.common_name.eq_ignore_ascii_case(name))
            .count())
    }
}

impl LocationRepo for MockDb {
    fn create_location(&self, location: &Location) -> RepoResult<()> {
        if self
            .locations
            .borrow()
            .iter()
            .any(|l| l.id == location.id || l.name.eq_ignore_ascii_case(&location.name))
        {
            return Err(RepoError::AlreadyExists);
        }
        self.locations.borrow_mut().push(location.clone());
        Ok(())
    }

    fn update_location(&self, location: &Location) -> RepoResult<()> {
        let mut locations = self.locations.borrow_mut();
        let existing = locations
            .iter_mut()
            .find(|l| l.id == location.id)
            .ok_or(RepoError::NotFound)?;
        *existing = location.clone();
        Ok(())
    }

    fn delete_location(&self, id: &Id) -> RepoResult<()> {
        if self
            .instances
            .borrow()
            .iter()
            .any(|i| &i.location_id == id)
        {
            return Err(RepoError::StillReferenced);
        }
        let mut locations = self.locations.borrow_mut();
        let i = locations
            .iter()
            .position(|l| &l.id == id)
            .ok_or(RepoError::NotFound)?;
        locations.remove(i);
        Ok(())
    }

    fn get_location(&self, id: &Id) -> RepoResult<Location> {
        self.locations
            .borrow()
            .iter()
            .find(|l| &l.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_locations(&self) -> RepoResult<Vec<Location>> {
        let mut locations = self.locations.borrow().clone();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    fn locations_by_owner(&self, owner: &Id) -> RepoResult<Vec<Location>> {
        let mut locations: Vec<_> = self
            .locations
            .borrow()
            .iter()
            .filter(|l| &l.owner == owner)
            .cloned()
            .collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(locations)
    }

    fn try_get_location_by_name(&self, name: &str) -> RepoResult<Option<Location>> {
        Ok(self
            .locations
            .borrow()
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    fn count_locations(&self) -> RepoResult<usize> {
        Ok(self.locations.borrow().len())
    }
}

impl CommonNameRepo for MockDb {
    fn create_common_name(&self, common_name: &CommonName) -> RepoResult<()> {
        if self
            .common_names
            .borrow()
            .iter()
            .any(|c| c.id == common_name.id || c.name.eq_ignore_ascii_case(&common_name.name))
        {
            return Err(RepoError::AlreadyExists);
        }
        self.common_names.borrow_mut().push(common_name.clone());
        Ok(())
    }

    fn delete_common_name(&self, id: &Id) -> RepoResult<()> {
        let mut common_names = self.common_names.borrow_mut();
        let i = common_names
            .iter()
            .position(|c| &c.id == id)
            .ok_or(RepoError::NotFound)?;
        common_names.remove(i);
        Ok(())
    }

    fn get_common_name(&self, id: &Id) -> RepoResult<CommonName> {
        self.common_names
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_common_names(&self) -> RepoResult<Vec<CommonName>> {
        let mut common_names = self.common_names.borrow().clone();
        common_names.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(common_names)
    }

    fn try_get_common_name_by_name(&self, name: &str) -> RepoResult<Option<CommonName>> {
        Ok(self
            .common_names
            .borrow()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}

impl PlantInstanceRepo for MockDb {
    fn create_instance(&self, instance: &PlantInstance) -> RepoResult<()> {
        if self.instances.borrow().iter().any(|i| {
            i.id == instance.id
                || (i.customer == instance.customer && i.nickname == instance.nickname)
        }) {
            return Err(RepoError::AlreadyExists);
        }
        self.instances.borrow_mut().push(instance.clone());
        Ok(())
    }

    fn update_instance(&self, instance: &PlantInstance) -> RepoResult<()> {
        let mut instances = self.instances.borrow_mut();
        let existing = instances
            .iter_mut()
            .find(|i| i.id == instance.id)
            .ok_or(RepoError::NotFound)?;
        *existing = instance.clone();
        Ok(())
    }

    fn delete_instance(&self, id: &Id) -> RepoResult<()> {
        let mut instances = self.instances.borrow_mut();
        let i = instances
            .iter()
            .position(|instance| &instance.id == id)
            .ok_or(RepoError::NotFound)?;
        instances.remove(i);
        Ok(())
    }

    fn get_instance(&self, id: &Id) -> RepoResult<PlantInstance> {
        self.instances
            .borrow()
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_instances(&self) -> RepoResult<Vec<PlantInstance>> {
        let mut instances = self.instances.borrow().clone();
        instances.sort_by(|a, b| {
            (a.customer.clone(), a.nickname.clone()).cmp(&(b.customer.clone(), b.nickname.clone()))
        });
        Ok(instances)
    }

    fn instances_by_customer(&self, customer: &Id) -> RepoResult<Vec<PlantInstance>> {
        let mut instances: Vec<_> = self
            .instances
            .borrow()
            .iter()
            .filter(|i| i.customer.as_ref() == Some(customer))
            .cloned()
            .collect();
        instances.sort_by_key(|i| i.due_watered_on);
        Ok(instances)
    }

    fn instances_due_by(&self, customer: &Id, due_by: Date) -> RepoResult<Vec<PlantInstance>> {
        Ok(self
            .instances_by_customer(customer)?
            .into_iter()
            .filter(|i| i.due_watered_on.map_or(false, |due| due <= due_by))
            .collect())
    }

    fn instances_by_customer_with_status(
        &self,
        customer: &Id,
        status: WateringStatus,
    ) -> RepoResult<Vec<PlantInstance>> {
        Ok(self
            .instances_by_customer(customer)?
            .into_iter()
            .filter(|i| i.status == status)
            .collect())
    }

    fn instances_of_plant(&self, plant_id: &Id) -> RepoResult<Vec<PlantInstance>> {
        Ok(self
            .instances
            .borrow()
            .iter()
            .filter(|i| &i.plant_id == plant_id)
            .cloned()
            .collect())
    }

    fn try_get_instance_by_customer_and_nickname(
        &self,
        customer: Option<&Id>,
        nickname: &str,
    ) -> RepoResult<Option<PlantInstance>> {
        Ok(self
            .instances
            .borrow()
            .iter()
            .find(|i| i.customer.as_ref() == customer && i.nickname == nickname)
            .cloned())
    }

    fn count_instances(&self) -> RepoResult<usize> {
        Ok(self.instances.borrow().len())
    }

    fn count_instances_with_status(&self, status: WateringStatus) -> RepoResult<usize> {
        Ok(self
            .instances
            .borrow()
            .iter()
            .filter(|i| i.status == status)
            .count())
    }

    fn count_instances_of_plant(&self, plant_id: &Id) -> RepoResult<usize> {
        Ok(self
            .instances
            .borrow()
            .iter()
            .filter(|i| &i.plant_id == plant_id)
            .count())
    }

    fn count_instances_of_location(&self, location_id: &Id) -> RepoResult<usize> {
        Ok(self
            .instances
            .borrow()
            .iter()
            .filter(|i| &i.location_id == location_id)
            .count())
    }
}

pub struct MockPermissions {
    granted: bool,
}

impl MockPermissions {
    pub fn grant_all() -> Self {
        Self { granted: true }
    }

    pub fn deny_all() -> Self {
        Self { granted: false }
    }
}

impl PermissionGateway for MockPermissions {
    fn has_permission(&self, _: &User, _: Permission) -> bool {
        self.granted
    }
}

pub struct TestUsers {
    pub customer: User,
    pub other_customer: User,
    pub staff: User,
}

impl Default for TestUsers {
    fn default() -> Self {
        Self {
            customer: User {
                id: "customer".into(),
                email: "customer@example.org".into(),
                role: Role::Customer,
            },
            other_customer: User {
                id: "other-customer".into(),
                email: "other@example.org".into(),
                role: Role::Customer,
            },
            staff: User {
                id: "staff".into(),
                email: "staff@example.org".into(),
                role: Role::Staff,
            },
        }
    }
}

pub fn guest_user() -> User {
    User {
        id: "guest".into(),
        email: "guest@example.org".into(),
        role: Role::Guest,
    }
}

pub fn new_ficus() -> NewPlant {
    NewPlant {
        scientific_name: "Ficus lyrata".into(),
        common_name: "Fiddle-leaf fig".into(),
        water_frequency: WaterFrequency::Regular,
        sun_exposure: SunExposure::PartShade,
        description: "Large glossy leaves".into(),
        care_tips: "Avoid draughts".into(),
    }
}

pub fn create_default_plant(db: &MockDb, owner: &User) -> Plant {
    let plant = Plant::build()
        .owner(Some(owner.id.as_str()))
        .scientific_name("Ficus lyrata")
        .common_name("Fiddle-leaf fig")
        .finish();
    db.create_plant(&plant).unwrap();
    plant
}

pub fn create_default_location(db: &MockDb, owner: &User) -> Location {
    let location = Location {
        id: Id::new(),
        owner: owner.id.clone(),
        name: "Kitchen window".into(),
    };
    db.create_location(&location).unwrap();
    location
}

pub fn create_default_instance(
    db: &MockDb,
    customer: &User,
) -> (Plant, Location, PlantInstance) {
    let plant = create_default_plant(db, customer);
    let location = create_default_location(db, customer);
    let instance = PlantInstance::build()
        .plant_id(plant.id.as_str())
        .customer(Some(customer.id.as_str()))
        .location_id(location.id.as_str())
        .nickname("Fred")
        .purchased_on(date!(2024 - 06 - 01))
        .due_watered_on(Some(date!(2024 - 06 - 29)))
        .status(WateringStatus::Watered)
        .finish();
    db.create_instance(&instance).unwrap();
    (plant, location, instance)
}
