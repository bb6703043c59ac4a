// src/app.rs
//
// Calculatrice Classique — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Le clavier est routé ici, au niveau du contexte: chaque événement texte
// ou touche nommée devient une `Touche` via noyau::touches, puis part
// dans le moteur. La vue ne voit jamais le clavier.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        for touche in touches_du_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, stockage: &mut dyn eframe::Storage) {
        let valeur = if self.theme_sombre { "1" } else { "0" };
        stockage.set_string(etat::CLE_THEME, valeur.to_string());
    }
}

/// Collecte les touches de la frame courante.
///
/// - Événements texte: chiffres, '.', opérateurs, '=', 'c', 'n'
///   (carte dans Touche::depuis_clavier)
/// - Touches nommées: Enter évalue, Backspace efface un caractère,
///   Escape efface tout (même carte que l'application d'origine)
fn touches_du_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut touches = Vec::new();
        for evenement in &i.events {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(t) = Touche::depuis_clavier(c) {
                            touches.push(t);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => touches.push(Touche::Egal),
                    egui::Key::Backspace => touches.push(Touche::Retour),
                    egui::Key::Escape => touches.push(Touche::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
        touches
    })
}
