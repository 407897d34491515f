use etiquette::{
    render_labels, DocumentMeta, EtiquetteError, LabelSurface, MemberStore, PdfSurface, Preferences,
};
use rusqlite::Connection;
use std::process::ExitCode;
use tracing::{error, info};

const OUTPUT_BASENAME: &str = "member_labels";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("usage: etiquette <members.db> <preferences.json> <member-id>...");
        return ExitCode::FAILURE;
    }

    let mut ids = Vec::new();
    for raw in &args[2..] {
        match raw.parse::<i64>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                eprintln!("not a member id: {raw}");
                return ExitCode::FAILURE;
            }
        }
    }

    match run(&args[0], &args[1], &ids) {
        Ok(path) => {
            info!(path, "labels written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "label generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: &str, prefs_path: &str, ids: &[i64]) -> Result<String, EtiquetteError> {
    let conn = Connection::open(db_path)?;
    let preferences = Preferences::from_path(prefs_path)?;
    let geometry = preferences.geometry();

    let members = MemberStore::new(&conn).select_labels(ids)?;
    if members.is_empty() {
        return Err(EtiquetteError::EmptySelection);
    }

    let meta = DocumentMeta {
        title: "Member's Labels".into(),
        subject: "Membership list".into(),
        keywords: "Labels".into(),
    };

    let mut surface = PdfSurface::new(&geometry, meta);
    render_labels(&mut surface, &members, &geometry)?;
    let bytes = surface.finalize()?;

    let path = format!("{OUTPUT_BASENAME}.pdf");
    std::fs::write(&path, bytes)?;
    Ok(path)
}
