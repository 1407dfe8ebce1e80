use crate::domain::model::{BatchSpec, CodeList, LoadResult};
use crate::utils::error::Result;
use std::io::Write;
use std::ops::RangeInclusive;

pub trait Storage {
    type Writer: Write;

    fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Opens `path` for writing, truncating any existing content.
    fn create_file(&self, path: &str) -> Result<Self::Writer>;

    /// Human-readable location of `path`, used in logs and the final report.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn batches(&self) -> &[BatchSpec];
    fn stop_range(&self) -> RangeInclusive<usize>;
    fn seed(&self) -> Option<u64>;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<CodeList>;

    /// Truncates the output, then writes each batch header followed by its
    /// generated routes.
    fn load(&mut self, codes: &CodeList) -> Result<LoadResult>;
}
