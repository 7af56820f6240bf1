use std::sync::mpsc;

use eframe::egui;
use tracing::{debug, warn};

use polgallery_render::{decode_batch, AssetRequest, RgbaImage};

/// A batch of images for the worker to decode.
pub(crate) struct AssetJob {
    /// Asset-root generation the batch was issued for. Responses carry it
    /// back so the UI can drop results from a previous root.
    pub(crate) generation: u64,
    pub(crate) requests: Vec<AssetRequest>,
}

/// Result for one requested image.
pub(crate) enum AssetResponse {
    Loaded {
        generation: u64,
        id: String,
        image: RgbaImage,
    },
    Failed {
        generation: u64,
        id: String,
    },
}

/// Spawn the asset decoding thread.
///
/// Returns the send-side for jobs and the receive-side for responses. The
/// thread runs until the job sender is dropped. Each batch is decoded in
/// parallel and the UI is asked to repaint once it has been delivered.
pub(crate) fn spawn_asset_worker(
    ctx: egui::Context,
) -> (mpsc::Sender<AssetJob>, mpsc::Receiver<AssetResponse>) {
    let (job_tx, job_rx) = mpsc::channel::<AssetJob>();
    let (resp_tx, resp_rx) = mpsc::channel::<AssetResponse>();

    let spawned = std::thread::Builder::new()
        .name("asset-worker".into())
        .spawn(move || {
            debug!("Asset worker thread started");
            while let Ok(job) = job_rx.recv() {
                let generation = job.generation;
                debug!("Asset worker: decoding {} images", job.requests.len());
                for (id, result) in decode_batch(&job.requests) {
                    let response = match result {
                        Ok(image) => AssetResponse::Loaded {
                            generation,
                            id,
                            image,
                        },
                        Err(e) => {
                            warn!("Asset worker: {e}");
                            AssetResponse::Failed { generation, id }
                        }
                    };
                    if resp_tx.send(response).is_err() {
                        return;
                    }
                }
                ctx.request_repaint();
            }
            debug!("Asset worker thread exiting");
        });
    if let Err(e) = spawned {
        // Without the worker every card falls back to its placeholder.
        warn!("Failed to spawn asset worker thread: {e}");
    }

    (job_tx, resp_rx)
}
