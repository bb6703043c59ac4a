//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touches.rs   : alphabet d'entrée fermé (Touche, Operateur, ...)
//! - moteur.rs    : état affiché + machine à états opérateur
//! - calcul.rs    : opérations binaires + erreurs de domaine
//! - fonctions.rs : fonctions unaires + conversion de température
//! - format.rs    : rendu des nombres + marqueur d'erreur

pub mod calcul;
pub mod fonctions;
pub mod format;
pub mod moteur;
pub mod touches;


#[cfg(test)]
mod tests_fuzz_touches;

// API publique minimale
pub use moteur::Moteur;
pub use touches::{FonctionUnaire, Operateur, SensTemperature, Touche};
