use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod job;
mod provenance;

#[derive(Parser)]
#[command(name = "polyslice")]
#[command(about = "Slice 2D sprite shapes into convex fragments")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run a slice job and write one mesh record per fragment
    Slice {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and code revision as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Slice { input, out } => slice(&input, &out),
        Action::Report => report(),
    }
}

fn slice(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "slice");
    let job = job::read_job(input)?;
    let (slicer, reports) = job::run_job(&job)?;
    for (i, r) in reports.iter().enumerate() {
        for (id, err) in r.errors() {
            tracing::warn!(cut = i, fragment = id.0, %err, "fragment not split");
        }
    }
    let records = job::mesh_records(&slicer);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "cuts_requested": job.cuts.len(),
        "cuts_applied": slicer.history().len(),
        "fragments": records.len(),
        "config": job.config,
        "default_quad": job.vertices.is_none(),
    });
    let sidecar = provenance::write_sidecar(out, Some(input), params)?;
    tracing::info!(
        fragments = records.len(),
        total_area = slicer.total_area(),
        sidecar = %sidecar.display(),
        "done"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "tool_version": polyslice::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
