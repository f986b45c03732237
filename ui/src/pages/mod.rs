//! Pages module for the application.
//!
//! - `home_page`: recently viewed and owned entity lists
//! - `following_panel`: followed entities, shown beside the home page
//! - `entity_page`: detail page reached by activating an entity row

mod entity_page;
mod following_panel;
mod home_page;

pub use entity_page::entity_page;
pub use following_panel::following_panel;
pub use home_page::home_page;
