//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir le moteur de calcul et la préférence de thème.
//! Contrats :
//! - Aucune logique d'affichage ici.
//! - Le moteur n'est mutable qu'au travers de `appuyer` : la vue ne
//!   touche jamais à l'état du calcul directement.
//! - Une seule préférence persistée (thème), via eframe::Storage.

use crate::noyau::{Moteur, Touche};

/// Clé de la préférence de thème dans le stockage eframe.
pub const CLE_THEME: &str = "theme_sombre";

pub struct AppCalc {
    pub moteur: Moteur,
    pub theme_sombre: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            theme_sombre: true,
        }
    }
}

impl AppCalc {
    /// Construit l'application en relisant la préférence de thème si un
    /// stockage est disponible (natif: fichier ; web: localStorage).
    pub fn depuis_stockage(stockage: Option<&dyn eframe::Storage>) -> Self {
        let mut app = Self::default();
        if let Some(s) = stockage {
            if let Some(v) = s.get_string(CLE_THEME) {
                app.theme_sombre = v != "0";
            }
        }
        app
    }

    /// Route une pression de touche vers le moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    /// Bascule clair/sombre (persisté au prochain `save`).
    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }
}
