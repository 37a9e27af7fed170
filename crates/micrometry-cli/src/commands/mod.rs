pub mod info;
pub mod lenses;
pub mod measure;
