// src/main.rs
//
// Calculatrice directe — point d’entrée NATIF
// -------------------------------------------
// - Journal : tracing-subscriber (RUST_LOG, défaut "info")
// - Réglages : --reglages <fichier.toml> (optionnel)
// - UI : eframe::run_native

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;

use calculatrice_directe::app::AppCalc;
use calculatrice_directe::noyau::Reglages;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice";

#[derive(Parser, Debug)]
#[command(version, about = "Calculatrice à évaluation immédiate")]
struct Args {
    /// Fichier TOML de réglages (chiffres_max, decimales, borne_affichage, seuil_zero)
    #[arg(long)]
    reglages: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let reglages = match &args.reglages {
        Some(chemin) => Reglages::charger(chemin)
            .with_context(|| format!("réglages: {}", chemin.display()))?,
        None => Reglages::default(),
    };
    info!(?reglages, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 460.0])
            .with_min_inner_size([300.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
