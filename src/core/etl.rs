use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RouteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RouteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<String> {
        tracing::info!("Starting route generation...");

        // Extract
        tracing::info!("Loading airport codes...");
        let codes = self.pipeline.extract()?;
        tracing::info!("Loaded {} airport codes", codes.len());

        // Generate and write
        tracing::info!("Generating and writing routes...");
        let result = self.pipeline.load(&codes)?;
        tracing::info!(
            "Wrote {} routes in {} batches",
            result.total_routes(),
            result.batches.len()
        );
        tracing::info!("Output saved to: {}", result.output_path);

        Ok(result.output_path)
    }

    /// Loads the codes without generating or writing anything.
    pub fn dry_run(&mut self) -> Result<usize> {
        let codes = self.pipeline.extract()?;
        tracing::info!("Dry run: {} airport codes available", codes.len());
        Ok(codes.len())
    }
}
