/// Source of fresh record ids for projects and testimonials.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
