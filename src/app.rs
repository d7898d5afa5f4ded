// src/app.rs
//
// Module App (racine)
// -------------------
// - Déclare les sous-modules (etat.rs, vue.rs, clavier.rs)
// - Ré-exporte AppCalc (pour main.rs)
// - Fournit l’impl eframe::App

pub mod clavier;
pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier global : pas de champ texte, toutes les touches vont au noyau.
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
