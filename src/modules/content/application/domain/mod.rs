pub mod entities;
pub mod seed;

pub use entities::{BlogPost, Project, Record, Testimonial};
