use crate::error::Result;
use futures::FutureExt;
use scout_core::{
    pipeline::{Directive, Pipeline, RunSummary},
    playlist::{Playlist, PlaylistWriter, WriteOutcome},
};
use std::{any::Any, future::Future, panic::AssertUnwindSafe};
use tracing::{error, info, warn};

/// How the channel loop ended.
#[derive(Debug)]
pub enum RunEnd {
    Completed(RunSummary),
    Panicked(String),
    Interrupted,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Runs the pipeline until it finishes, panics or `shutdown` resolves.
///
/// Whatever was accepted before the loop stopped stays in `playlist`.
pub async fn run_pipeline<F>(
    pipeline: &Pipeline,
    directives: &[Directive],
    playlist: &mut Playlist,
    shutdown: F,
) -> RunEnd
where
    F: Future<Output = ()>,
{
    let run = AssertUnwindSafe(pipeline.run(directives, playlist)).catch_unwind();

    let end = tokio::select! {
        result = run => match result {
            Ok(summary) => RunEnd::Completed(summary),
            Err(payload) => RunEnd::Panicked(panic_message(payload.as_ref())),
        },
        _ = shutdown => RunEnd::Interrupted,
    };

    match &end {
        RunEnd::Completed(summary) => info!("Run completed: {}", summary),
        RunEnd::Panicked(message) => error!("An unexpected error occurred: {}", message),
        RunEnd::Interrupted => warn!("Interrupted, keeping streams validated so far"),
    }
    end
}

/// Hands the accumulated playlist to the writer and reports the result.
pub async fn finalize(writer: &PlaylistWriter, playlist: &Playlist) -> Result<WriteOutcome> {
    let outcome = writer.write(playlist).await?;
    match &outcome {
        WriteOutcome::Written { path, entries } => {
            info!(
                "Successfully created {} with {} entries",
                path.display(),
                entries
            );
        }
        WriteOutcome::NothingToWrite => {
            info!("No valid streams were found to create a playlist.");
        }
    }
    Ok(outcome)
}
