use crate::wire::{CompletionRequest, CompletionResponse};
use fs_err as fs;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// stderr logging; `RUST_LOG` wins over the built-in filter.
pub fn init_logger(debug: bool) {
    let default = if debug { "namecraft=debug,warn" } else { "namecraft=info,warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

pub fn tx_dir(out_dir: &Path, tx: Uuid) -> PathBuf {
    out_dir.join("tx").join(tx.to_string())
}

pub fn save_exchange(
    out_dir: &Path,
    req: &CompletionRequest,
    resp: Option<&CompletionResponse>,
    save_request: bool,
    save_response: bool,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(out_dir, req.transaction.id);
    fs::create_dir_all(&dir)?;

    let mut request_path = None;
    let mut response_path = None;

    if save_request {
        let p = dir.join("request.json");
        fs::write(&p, to_string_pretty(req)?)?;
        request_path = Some(p);
    }

    if save_response {
        if let Some(resp) = resp {
            let p = dir.join("response.json");
            fs::write(&p, to_string_pretty(resp)?)?;
            response_path = Some(p);
        }
    }

    tracing::debug!(dir = %dir.display(), "saved exchange artifacts");
    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

/// Diagnostic lines only; callers pass stderr so stdout stays payload-only.
pub fn print_saved_paths<W: Write>(w: &mut W, saved: &SavedPaths) -> std::io::Result<()> {
    writeln!(w, "debug: artifacts directory: {}", saved.dir.display())?;
    match &saved.request {
        Some(p) => writeln!(w, "debug: request saved at: {}", p.display())?,
        None => writeln!(w, "debug: request not saved (flag off)")?,
    }
    match &saved.response {
        Some(p) => writeln!(w, "debug: response saved at: {}", p.display())?,
        None => writeln!(w, "debug: response not saved")?,
    }
    w.flush()
}
