pub mod connection;
pub mod entities;
pub mod person_repo;
pub mod providers;
pub mod seed;
pub mod zombie_repo;
