// src/noyau/format.rs
//
// Rendu des nombres vers la chaîne d'affichage, et lecture inverse.
// L'affichage est à la fois le texte montré et la forme sérialisée de
// l'opérande en cours: tout passe par ici.

/// Marqueur littéral affiché sur erreur de domaine (division par zéro,
/// racine d'un négatif, etc.). Jamais levé comme exception: le moteur le
/// substitue dans l'affichage et continue.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Arrondit à `decimales` chiffres après la virgule.
///
/// Même recette que l'arrondi "anti-bruit flottant" classique:
/// (x + ε) * 10^d, arrondi, puis re-division. L'ε absorbe les queues
/// binaires du style 0.30000000000000004.
pub fn arrondir(x: f64, decimales: u32) -> f64 {
    let facteur = 10f64.powi(decimales as i32);
    ((x + f64::EPSILON) * facteur).round() / facteur
}

/// Rend un nombre fini en chaîne d'affichage.
///
/// On s'appuie sur le `Display` de f64: représentation la plus courte qui
/// reste fidèle (8.0 -> "8", 0.3 -> "0.3"), sans notation exponentielle.
/// Le zéro négatif se rend "0".
pub fn format_nombre(x: f64) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{x}")
}

/// Lit l'affichage comme nombre. None si ce n'est pas un littéral numérique
/// complet (marqueur d'erreur, "-" seul pendant la saisie d'un négatif).
pub fn lire_nombre(affichage: &str) -> Option<f64> {
    let v: f64 = affichage.parse().ok()?;
    v.is_finite().then_some(v)
}
