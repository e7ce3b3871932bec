mod entry;
pub mod people;

pub use entry::router;
