use crate::core::loader::load_codes;
use crate::core::writer::{write_header, write_routes};
use crate::core::{CodeList, ConfigProvider, LoadResult, Pipeline, Result, Storage};
use crate::utils::error::RouteGenError;
use rand::Rng;
use std::io::Write;

/// Loads airport codes and streams the configured batches into the route
/// file through `storage`.
pub struct RoutePipeline<S: Storage, C: ConfigProvider, R: Rng> {
    storage: S,
    config: C,
    rng: R,
}

impl<S: Storage, C: ConfigProvider, R: Rng> RoutePipeline<S, C, R> {
    pub fn new(storage: S, config: C, rng: R) -> Self {
        Self {
            storage,
            config,
            rng,
        }
    }
}

impl<S: Storage, C: ConfigProvider, R: Rng> Pipeline for RoutePipeline<S, C, R> {
    fn extract(&mut self) -> Result<CodeList> {
        load_codes(&self.storage, self.config.input_path())
    }

    fn load(&mut self, codes: &CodeList) -> Result<LoadResult> {
        let path = self.config.output_path();
        let output_path = self.storage.location(path);
        let range = self.config.stop_range();

        // 先截斷輸出檔，再逐批寫入標頭與路線
        let mut out = self.storage.create_file(path)?;
        let mut batches = Vec::new();
        let written = self.config.batches().iter().try_for_each(|spec| -> Result<()> {
            write_header(&mut out, &spec.origin, spec.count)?;
            let batch =
                write_routes(&mut out, codes, spec.count, &spec.origin, &range, &mut self.rng)?;
            tracing::debug!("Wrote {} routes for {}", batch.count(), batch.origin);
            batches.push(batch);
            Ok(())
        });

        // flush on every path so a failed run leaves what was written
        let flushed = out.flush().map_err(RouteGenError::from);
        drop(out);

        written.and(flushed).map_err(|e| match e {
            RouteGenError::IoError(source) => RouteGenError::OutputWriteError {
                path: output_path.clone(),
                source,
            },
            other => other,
        })?;

        Ok(LoadResult {
            output_path,
            batches,
        })
    }
}
