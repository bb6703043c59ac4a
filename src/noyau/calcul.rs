// src/noyau/calcul.rs
//
// Opérations binaires + taxonomie des erreurs de domaine.
// Les erreurs ne traversent jamais la frontière du noyau: le moteur les
// convertit en marqueur d'affichage.

use super::format::arrondir;
use super::touches::Operateur;

/// Nombre de décimales conservées sur un résultat de calcul.
pub const DECIMALES_RESULTAT: u32 = 9;

/// Entrée mathématiquement invalide pour l'opération demandée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurDomaine {
    DivisionParZero,
    ModuloParZero,
    RacineNegative,
    LogNonPositif,
    InverseDeZero,
    FactorielleInvalide,
    /// Résultat hors plage f64 (débordement de puissance, 171!, etc.).
    ResultatNonFini,
}

/// `a op b`, arrondi à 9 décimales.
///
/// Division et modulo par zéro sont des erreurs de domaine, pas des
/// exceptions. Un résultat non fini (débordement) en est une aussi: le
/// contrat d'affichage est "littéral numérique ou marqueur".
pub fn calculer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurDomaine> {
    let brut = match op {
        Operateur::Addition => a + b,
        Operateur::Soustraction => a - b,
        Operateur::Multiplication => a * b,
        Operateur::Division => {
            if b == 0.0 {
                return Err(ErreurDomaine::DivisionParZero);
            }
            a / b
        }
        Operateur::Modulo => {
            if b == 0.0 {
                return Err(ErreurDomaine::ModuloParZero);
            }
            a % b
        }
        Operateur::Puissance => a.powf(b),
    };

    // L'arrondi multiplie par 10^9: un résultat fini au-delà de ~1.8e299
    // y déborde. Le contrôle se fait donc sur la valeur arrondie (couvre
    // aussi les inf/NaN bruts).
    let arrondi = arrondir(brut, DECIMALES_RESULTAT);
    if !arrondi.is_finite() {
        return Err(ErreurDomaine::ResultatNonFini);
    }
    Ok(arrondi)
}
