use crate::EntityReference;

/// Derives the human-readable label of an entity.
///
/// Implementations must tolerate partially populated references.
pub trait NameResolver {
    fn display_name(&self, entity: &EntityReference) -> String;
}

impl<F> NameResolver for F
where
    F: Fn(&EntityReference) -> String,
{
    fn display_name(&self, entity: &EntityReference) -> String {
        self(entity)
    }
}

/// `displayName` when it is non-empty, otherwise `name`, otherwise `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNameResolver;

impl NameResolver for DefaultNameResolver {
    fn display_name(&self, entity: &EntityReference) -> String {
        entity
            .display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(entity.name.as_deref())
            .unwrap_or_default()
            .to_owned()
    }
}
