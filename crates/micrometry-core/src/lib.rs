pub mod error;
pub mod consts;
pub mod geometry;
pub mod subject;
pub mod provider;
pub mod view;
pub mod marking;
pub mod measure;
pub mod calibrate;
pub mod labels;
pub mod session;
