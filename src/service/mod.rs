pub mod items;
pub mod password;
pub mod users;

pub use items::ItemService;
pub use users::UserService;
