pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod projector;
pub mod render;
pub mod selector;
pub mod skin_types;
pub mod template;

pub use crate::domain::model::{
    OutputRecord, RawRecord, RunReport, SkinTypeSet, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SkinTypeChooser, Storage};
pub use crate::utils::error::Result;
