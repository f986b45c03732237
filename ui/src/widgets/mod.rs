mod entity_icon;
mod entity_list;
mod routable_link;
mod skeleton;

pub use entity_icon::{DefaultIconResolver, EntityIcon, IconResolver};
pub use entity_list::{EntityList, EntityListOutput, NameWidths, Resolvers};
pub use routable_link::RoutableLink;
pub use skeleton::SkeletonLoader;
