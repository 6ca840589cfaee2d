pub mod completion;
pub mod handlers;
pub mod ids;
pub mod profile_store;
pub mod projection;
pub mod search;
pub mod section_store;
pub mod session;
pub mod skills;
pub mod snapshot;
pub mod suggestions;
