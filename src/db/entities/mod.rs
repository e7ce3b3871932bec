#[allow(unused_imports)]
pub mod prelude {
    pub use super::person::Entity as Person;
    pub use super::zombie::Entity as Zombie;
}

pub mod person;
pub mod zombie;
