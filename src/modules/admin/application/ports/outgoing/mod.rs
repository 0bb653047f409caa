pub mod confirmation;
pub mod id_generator;

pub use confirmation::Confirmation;
pub use id_generator::IdGenerator;
