use crate::EntityType;

/// Builds the navigable path of an entity from its type tag and
/// fully-qualified name. Both inputs may be empty.
pub trait LinkBuilder {
    fn entity_link(&self, type_tag: &str, fqn: &str) -> String;
}

impl<F> LinkBuilder for F
where
    F: Fn(&str, &str) -> String,
{
    fn entity_link(&self, type_tag: &str, fqn: &str) -> String {
        self(type_tag, fqn)
    }
}

/// Catalog detail-page paths: `/{segment}/{percent-encoded fqn}`.
///
/// Unknown or empty type tags link to `/`. An empty fqn links to the
/// segment root.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLinkBuilder;

impl LinkBuilder for CatalogLinkBuilder {
    fn entity_link(&self, type_tag: &str, fqn: &str) -> String {
        let Some(entity_type) = EntityType::from_tag(type_tag) else {
            log::trace!("No route for entity type {type_tag:?}");
            return "/".to_owned();
        };

        let segment = entity_type.route_segment();
        if fqn.is_empty() {
            format!("/{segment}")
        } else {
            format!("/{segment}/{}", urlencoding::encode(fqn))
        }
    }
}
