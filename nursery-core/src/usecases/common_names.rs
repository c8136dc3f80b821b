use super::prelude::*;

/// Common names form a shared registry of aliasing labels. They are
/// maintained by staff and referenced by catalog entries via their
/// label.
pub fn create_common_name<R: CommonNameRepo>(
    repo: &R,
    requester: &User,
    name: String,
) -> Result<CommonName> {
    if !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    if repo.try_get_common_name_by_name(&name)?.is_some() {
        return Err(Error::DuplicateCommonName);
    }
    let common_name = CommonName {
        id: Id::new(),
        name,
    };
    repo.create_common_name(&common_name)?;
    Ok(common_name)
}

/// A label can only be removed while no plant carries it.
pub fn delete_common_name<R: CommonNameRepo + PlantRepo>(
    repo: &R,
    requester: &User,
    id: &Id,
) -> Result<()> {
    if !requester.is_staff() {
        return Err(Error::Forbidden);
    }
    let common_name = repo.get_common_name(id)?;
    if repo.count_plants_with_common_name(&common_name.name)? > 0 {
        return Err(Error::StillReferenced);
    }
    repo.delete_common_name(id)?;
    Ok(())
}

pub fn all_common_names<R: CommonNameRepo>(repo: &R) -> Result<Vec<CommonName>> {
    Ok(repo.all_common_names()?)
}
