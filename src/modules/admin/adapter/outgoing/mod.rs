pub mod static_confirmation;
pub mod uuid_id_generator;

pub use static_confirmation::StaticConfirmation;
pub use uuid_id_generator::UuidIdGenerator;
