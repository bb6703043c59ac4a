// src/noyau/fonctions.rs
//
// Fonctions unaires (scientifiques) + conversion de température.
// Mêmes contrats de domaine que calcul.rs: Err(ErreurDomaine) au lieu
// d'une exception, arrondi à 9 décimales sur succès.

use std::f64::consts::{E, PI};

use super::calcul::{ErreurDomaine, DECIMALES_RESULTAT};
use super::format::arrondir;
use super::touches::{FonctionUnaire, SensTemperature};

/// Décimales conservées sur une conversion de température.
const DECIMALES_TEMPERATURE: u32 = 6;

/// Applique une fonction unaire à `x` (radians pour la trigonométrie).
///
/// Domaines:
/// - racine: x >= 0
/// - ln / log10: x > 0
/// - inverse: x != 0
/// - factorielle: x entier >= 0 (et <= 170, sinon débordement f64)
///
/// π et e ignorent `x` et déposent la constante.
pub fn appliquer_fonction(fonction: FonctionUnaire, x: f64) -> Result<f64, ErreurDomaine> {
    let brut = match fonction {
        FonctionUnaire::Racine => {
            if x < 0.0 {
                return Err(ErreurDomaine::RacineNegative);
            }
            x.sqrt()
        }
        FonctionUnaire::LogNaturel => {
            if x <= 0.0 {
                return Err(ErreurDomaine::LogNonPositif);
            }
            x.ln()
        }
        FonctionUnaire::Log10 => {
            if x <= 0.0 {
                return Err(ErreurDomaine::LogNonPositif);
            }
            x.log10()
        }
        FonctionUnaire::Sin => x.sin(),
        FonctionUnaire::Cos => x.cos(),
        FonctionUnaire::Tan => x.tan(),
        FonctionUnaire::Carre => x * x,
        FonctionUnaire::Cube => x * x * x,
        FonctionUnaire::Inverse => {
            if x == 0.0 {
                return Err(ErreurDomaine::InverseDeZero);
            }
            1.0 / x
        }
        FonctionUnaire::Exponentielle => x.exp(),
        FonctionUnaire::Factorielle => {
            if x < 0.0 || x.fract() != 0.0 {
                return Err(ErreurDomaine::FactorielleInvalide);
            }
            factorielle(x)
        }
        FonctionUnaire::ConstantePi => PI,
        FonctionUnaire::ConstanteE => E,
    };

    // Contrôle sur la valeur arrondie: l'arrondi multiplie par 10^9 et
    // peut déborder sur un fini très grand (170! ~ 7.3e306).
    let arrondi = arrondir(brut, DECIMALES_RESULTAT);
    if !arrondi.is_finite() {
        return Err(ErreurDomaine::ResultatNonFini);
    }
    Ok(arrondi)
}

/// Factorielle itérative sur f64 (n entier >= 0 garanti par l'appelant).
fn factorielle(n: f64) -> f64 {
    // 171! déborde f64: inutile de boucler au-delà.
    if n > 170.0 {
        return f64::INFINITY;
    }
    let mut r = 1.0;
    let mut i = 2.0;
    while i <= n {
        r *= i;
        i += 1.0;
    }
    r
}

/// Conversion Celsius/Fahrenheit, arrondie à 6 décimales.
/// Même contrat de débordement que les autres calculs: Err si le
/// résultat (brut ou arrondi) sort de f64.
pub fn convertir_temperature(sens: SensTemperature, x: f64) -> Result<f64, ErreurDomaine> {
    let brut = match sens {
        SensTemperature::CelsiusVersFahrenheit => x * 9.0 / 5.0 + 32.0,
        SensTemperature::FahrenheitVersCelsius => (x - 32.0) * 5.0 / 9.0,
    };
    let arrondi = arrondir(brut, DECIMALES_TEMPERATURE);
    if !arrondi.is_finite() {
        return Err(ErreurDomaine::ResultatNonFini);
    }
    Ok(arrondi)
}
