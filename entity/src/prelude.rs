pub use super::artist::Entity as Artist;
pub use super::issue::Entity as Issue;
pub use super::series::Entity as Series;
