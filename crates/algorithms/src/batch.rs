//! Batch generation
//!
//! Validates a whole batch, then synthesizes ramps a chunk at a time and
//! hands each chunk's buffers to an [`AssetSink`] in list order.

use crate::ramp::{synthesize, validate, RampSpec};
use rampgen_core::io::AssetSink;
use rampgen_core::{Error, PixelBuffer, Result};
use rampgen_parallel::{num_threads, ParallelStrategy, ProcessingMode};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Options for [`generate_batch`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// How ramps are spread over worker threads
    pub mode: ProcessingMode,
}

impl BatchOptions {
    pub fn sequential() -> Self {
        Self {
            mode: ProcessingMode::Sequential,
        }
    }

    pub fn with_threads(threads: usize) -> Self {
        Self {
            mode: ProcessingMode::ParallelWith(threads),
        }
    }
}

/// One persisted ramp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampReport {
    pub name: String,
    pub width: usize,
    pub height: usize,
    /// More than one gradient was blended
    pub blended: bool,
}

impl RampReport {
    fn new(spec: &RampSpec, buffer: &PixelBuffer) -> Self {
        Self {
            name: spec.name.clone(),
            width: buffer.width(),
            height: buffer.height(),
            blended: spec.is_blended(),
        }
    }
}

/// Outcome of a successful batch, in list order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub ramps: Vec<RampReport>,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    /// Total number of pixels written
    pub fn pixel_count(&self) -> usize {
        self.ramps.iter().map(|r| r.width * r.height).sum()
    }
}

/// Synthesize every ramp of an already validated batch.
///
/// Buffers come back in batch order whatever the processing mode. All
/// buffers are held at once; [`generate_batch`] hands them off chunk by chunk
/// instead.
///
/// # Panics
///
/// Panics on entries [`validate`] would reject.
pub fn synthesize_batch(batch: &[RampSpec], mode: ProcessingMode) -> Result<Vec<PixelBuffer>> {
    render_all(batch, mode, &synthesize)
}

fn render_all<F>(specs: &[RampSpec], mode: ProcessingMode, render: &F) -> Result<Vec<PixelBuffer>>
where
    F: Fn(&RampSpec) -> PixelBuffer + Sync,
{
    mode.par_map(0..specs.len(), |i| {
        let spec = &specs[i];
        let buffer = render(spec);
        debug!(
            name = %spec.name,
            width = buffer.width(),
            height = buffer.height(),
            gradients = spec.gradients.len(),
            "synthesized ramp"
        );
        buffer
    })
}

/// Ramps synthesized ahead of persistence: one per worker.
fn chunk_len(mode: ProcessingMode) -> usize {
    let len = match mode {
        ProcessingMode::Sequential => 1,
        ProcessingMode::Parallel => num_threads(),
        ProcessingMode::ParallelWith(threads) => threads,
    };
    len.max(1)
}

/// Validate, synthesize and persist a batch of ramps.
///
/// Nothing is synthesized or persisted when validation fails. Ramps are
/// synthesized in chunks of one per worker, and each chunk is persisted on
/// the calling thread, in list order, before the next one starts, so at most
/// one chunk of buffers is alive at a time. The first sink failure stops the
/// batch and is returned as [`Error::Persist`]; later entries are never
/// synthesized. Entries persisted before the failure stay persisted.
pub fn generate_batch<S>(batch: &[RampSpec], sink: &mut S, options: &BatchOptions) -> Result<BatchReport>
where
    S: AssetSink + ?Sized,
{
    generate_with(batch, sink, options, &synthesize)
}

fn generate_with<S, F>(
    batch: &[RampSpec],
    sink: &mut S,
    options: &BatchOptions,
    render: &F,
) -> Result<BatchReport>
where
    S: AssetSink + ?Sized,
    F: Fn(&RampSpec) -> PixelBuffer + Sync,
{
    if let Err(err) = validate(batch) {
        warn!(%err, "batch rejected");
        return Err(err.into());
    }

    let mut report = BatchReport::default();
    for chunk in batch.chunks(chunk_len(options.mode)) {
        let buffers = render_all(chunk, options.mode, render)?;

        for (spec, buffer) in chunk.iter().zip(buffers) {
            sink.persist(&spec.name, &buffer).map_err(|source| Error::Persist {
                name: spec.name.clone(),
                source,
            })?;
            info!(
                name = %spec.name,
                width = buffer.width(),
                height = buffer.height(),
                "persisted ramp"
            );
            report.ramps.push(RampReport::new(spec, &buffer));
        }
    }

    Ok(report)
}
