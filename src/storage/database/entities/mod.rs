/// Forum head entity module
pub mod forum_head;
/// Super admin entity module
pub mod super_admin;
/// User entity module
pub mod user;

pub use forum_head::Entity as ForumHead;
pub use super_admin::Entity as SuperAdmin;
pub use user::Entity as User;
