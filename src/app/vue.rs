// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// - Écran : ligne d’expression (petite) + opérande (grand) + message d’erreur
// - Pavé 4 x 5 dans l’ordre de Jeton::TOUTES
// - Clavier : événements texte + Enter / Escape, traduits par clavier.rs
//
// Aucune logique de calcul ici : chaque clic devient un jeton.

use eframe::egui;

use crate::noyau::{Jeton, Operateur};

use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];
const TAILLE_ECRAN: f32 = 32.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Traduit les touches de la frame en jetons.
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let touches: Vec<String> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => Some(t.clone()),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => Some("enter".to_string()),
                    egui::Event::Key {
                        key: egui::Key::Escape,
                        pressed: true,
                        ..
                    } => Some("escape".to_string()),
                    _ => None,
                })
                .collect()
        });

        for t in touches {
            self.touche(&t);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let a = self.affichage();
        let ligne = self.ligne_expression();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(ligne);
                    ui.label(egui::RichText::new(a.ecran).monospace().size(TAILLE_ECRAN));
                });
            });

        if let Some(msg) = self.message_erreur() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, jeton) in Jeton::TOUTES.into_iter().enumerate() {
                    self.bouton(ui, jeton);
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, jeton: Jeton) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(libelle(jeton)))
            .on_hover_text(description(jeton));

        if resp.clicked() {
            self.appuyer(jeton);
        }
    }
}

/// Texte du bouton (√ plus lisible que "sqrt").
fn libelle(jeton: Jeton) -> &'static str {
    match jeton {
        Jeton::Racine => "√",
        autre => autre.texte(),
    }
}

/// Info-bulle (ce que fait la touche).
fn description(jeton: Jeton) -> &'static str {
    match jeton {
        Jeton::Chiffre(_) => "Chiffre",
        Jeton::Point => "Point décimal",
        Jeton::ToutEffacer => "Tout effacer",
        Jeton::Egal => "Égal",
        Jeton::Operateur(Operateur::Plus) => "Ajouter",
        Jeton::Operateur(Operateur::Moins) => "Soustraire",
        Jeton::Operateur(Operateur::Fois) => "Multiplier",
        Jeton::Operateur(Operateur::Divise) => "Diviser",
        Jeton::Pourcent => "Pourcentage",
        Jeton::Pi => "Pi",
        Jeton::Racine => "Racine carrée",
    }
}
