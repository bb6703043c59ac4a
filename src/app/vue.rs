// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - L'écran rend l'affichage du moteur tel quel, rien d'autre.
// - Chaque bouton émet une `Touche` : la vue n'interprète jamais les
//   actions elle-même.
// - Tactile : gros boutons, grille régulière.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{FonctionUnaire, Operateur, SensTemperature, Touche};

/// Largeur d'un bouton du pavé.
const LARGEUR_BOUTON: f32 = 64.0;
/// Hauteur d'un bouton du pavé.
const HAUTEUR_BOUTON: f32 = 36.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice Classique");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let libelle = if self.theme_sombre {
                            "Thème: Sombre"
                        } else {
                            "Thème: Clair"
                        };
                        if ui.button(libelle).clicked() {
                            self.basculer_theme();
                        }
                    });
                });
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave_scientifique(ui);

                ui.add_space(4.0);
                ui.separator();
                ui.add_space(4.0);

                self.ui_pave_numerique(ui);

                ui.add_space(4.0);
                self.ui_conversions(ui);
            });
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // indicateur d'état : opérateur en attente, sinon ligne vide
                let indicateur = self
                    .moteur
                    .operateur_en_attente()
                    .map(|op| op.symbole())
                    .unwrap_or(" ");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(indicateur).monospace().size(14.0));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    /* ------------------------ Pavés ------------------------ */

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        use FonctionUnaire::*;

        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", Touche::Unaire(Sin));
                self.bouton(ui, "cos", Touche::Unaire(Cos));
                self.bouton(ui, "tan", Touche::Unaire(Tan));
                self.bouton(ui, "ln", Touche::Unaire(LogNaturel));
                ui.end_row();

                self.bouton(ui, "log", Touche::Unaire(Log10));
                self.bouton(ui, "√", Touche::Unaire(Racine));
                self.bouton(ui, "x²", Touche::Unaire(Carre));
                self.bouton(ui, "x³", Touche::Unaire(Cube));
                ui.end_row();

                self.bouton(ui, "1/x", Touche::Unaire(Inverse));
                self.bouton(ui, "eˣ", Touche::Unaire(Exponentielle));
                self.bouton(ui, "n!", Touche::Unaire(Factorielle));
                self.bouton(ui, "xʸ", Touche::Binaire(Operateur::Puissance));
                ui.end_row();

                self.bouton(ui, "π", Touche::Unaire(ConstantePi));
                self.bouton(ui, "e", Touche::Unaire(ConstanteE));
                self.bouton(ui, "mod", Touche::Binaire(Operateur::Modulo));
                self.bouton(ui, "%", Touche::Pourcent);
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Effacer);
                self.bouton(ui, "±", Touche::Signe);
                self.bouton(ui, "DEL", Touche::Retour);
                self.bouton(ui, "÷", Touche::Binaire(Operateur::Division));
                ui.end_row();

                self.bouton_chiffre(ui, 7);
                self.bouton_chiffre(ui, 8);
                self.bouton_chiffre(ui, 9);
                self.bouton(ui, "×", Touche::Binaire(Operateur::Multiplication));
                ui.end_row();

                self.bouton_chiffre(ui, 4);
                self.bouton_chiffre(ui, 5);
                self.bouton_chiffre(ui, 6);
                self.bouton(ui, "−", Touche::Binaire(Operateur::Soustraction));
                ui.end_row();

                self.bouton_chiffre(ui, 1);
                self.bouton_chiffre(ui, 2);
                self.bouton_chiffre(ui, 3);
                self.bouton(ui, "+", Touche::Binaire(Operateur::Addition));
                ui.end_row();

                self.bouton_chiffre(ui, 0);
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_conversions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(
                ui,
                "°C→°F",
                Touche::Conversion(SensTemperature::CelsiusVersFahrenheit),
            );
            self.bouton(
                ui,
                "°F→°C",
                Touche::Conversion(SensTemperature::FahrenheitVersCelsius),
            );
        });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche) {
        let resp = ui.add_sized([LARGEUR_BOUTON, HAUTEUR_BOUTON], egui::Button::new(libelle));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: u8) {
        self.bouton(ui, &chiffre.to_string(), Touche::Chiffre(chiffre));
    }
}
