use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::{Args, OutputFormat};
use crate::config::Config;
use crate::errors::{self, NamerError};
use crate::generator::Generator;
use crate::log;
use crate::provider::DynProvider;
use crate::ux;
use crate::wire::{Category, GenerationRequest};

/// One invocation: config, form, generate, render. Returns the process exit status.
///
/// Only the rendered result is written to `out` for `html`/`json`; prompts,
/// warnings and debug lines go to `diag`.
pub async fn run<L, P, R, W, E>(
    args: &Args,
    load_config: L,
    make_provider: P,
    input: &mut R,
    out: &mut W,
    diag: &mut E,
) -> anyhow::Result<i32>
where
    L: FnOnce(&Args) -> errors::Result<Config>,
    P: FnOnce(&Config) -> anyhow::Result<DynProvider>,
    R: BufRead,
    W: Write,
    E: Write,
{
    // Credential problems stop us before any input is read.
    let cfg = match load_config(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            ux::error(diag, &e.to_string())?;
            return Ok(e.exit_code());
        }
    };
    tracing::debug!(config = ?cfg, "loaded configuration");

    let cards = args.format == OutputFormat::Cards;
    if args.business_type.is_none() && cards {
        ux::banner(out)?;
    }

    // flag-only runs never block on the category menu
    let category = match (&args.business_type, args.category) {
        (Some(_), None) => Some(Category::ALL[0]),
        (_, c) => c,
    };
    let form = if cards {
        ux::read_form(input, out, args.business_type.clone(), category)?
    } else {
        ux::read_form(input, diag, args.business_type.clone(), category)?
    };

    let req = match GenerationRequest::new(&form.business_type, form.category) {
        Ok(r) => r,
        Err(e @ NamerError::EmptyBusinessType) => {
            ux::warn(diag, &e.to_string())?;
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    let provider = match make_provider(&cfg) {
        Ok(p) => p,
        Err(e) => {
            let e = NamerError::InvalidConfig { message: format!("{e:#}") };
            ux::error(diag, &e.to_string())?;
            return Ok(e.exit_code());
        }
    };
    let gen = Generator::with_provider(&cfg, provider, args.debug);

    let pb = cards.then(|| ux::spinner("Generating names & taglines..."));
    let result = gen.run(&req).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let generation = match result {
        Ok(g) => g,
        Err(e) => {
            ux::error(diag, &e.to_string())?;
            return Ok(e.exit_code());
        }
    };

    if args.save_request || args.save_response {
        let response = generation.response();
        let saved = log::save_exchange(
            Path::new(&cfg.out_dir),
            &generation.request,
            Some(&response),
            args.save_request,
            args.save_response,
        )?;
        if args.debug {
            log::print_saved_paths(diag, &saved)?;
        }
    }

    let records = &generation.outcome.records;
    if records.is_empty() {
        ux::warn(diag, ux::EMPTY_RESULT_WARNING)?;
        return Ok(0);
    }

    match args.format {
        OutputFormat::Cards => write!(out, "{}", ux::render_cards(records))?,
        OutputFormat::Html => write!(out, "{}", ux::render_html(records))?,
        OutputFormat::Json => writeln!(out, "{}", ux::render_json(records)?)?,
    }
    out.flush()?;

    Ok(0)
}
