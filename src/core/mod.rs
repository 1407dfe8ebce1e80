pub mod etl;
pub mod generator;
pub mod loader;
pub mod pipeline;
pub mod route_file;
pub mod writer;

pub use crate::domain::model::{BatchSpec, CodeList, LoadResult, Route, RouteBatch};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
