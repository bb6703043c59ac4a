// src/noyau/touches.rs
//
// Alphabet d'entrée fermé du moteur.
// ----------------------------------
// Toute interaction (bouton, clavier) devient une `Touche` avant d'entrer
// dans le noyau: le dispatch est un `match` exhaustif, pas un aiguillage
// sur des noms d'actions en chaînes.

/// Opérateur binaire en attente de son second opérande.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
}

impl Operateur {
    /// Symbole affichable (indicateur d'état + étiquettes de boutons).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
            Operateur::Modulo => "%",
            Operateur::Puissance => "^",
        }
    }
}

/// Fonction unaire appliquée à la valeur affichée.
/// Les constantes π et e ignorent la valeur courante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Racine,
    LogNaturel,
    Log10,
    Sin,
    Cos,
    Tan,
    Carre,
    Cube,
    Inverse,
    Exponentielle,
    Factorielle,
    ConstantePi,
    ConstanteE,
}

/// Sens de la conversion de température.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensTemperature {
    CelsiusVersFahrenheit,
    FahrenheitVersCelsius,
}

/// Une pression de touche, côté moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre 0..=9.
    Chiffre(u8),
    Point,
    Effacer,
    Signe,
    Pourcent,
    Unaire(FonctionUnaire),
    Binaire(Operateur),
    Egal,
    Retour,
    Conversion(SensTemperature),
}

impl Touche {
    /// Correspondance clavier -> touche.
    ///
    /// Même carte que l'application d'origine:
    /// - chiffres et '.'
    /// - '+' '-' '*' '/' '^' '%' opérateurs binaires
    ///   ('-' peut aussi démarrer un négatif, décision prise par le moteur)
    /// - '=' évalue, 'c' efface tout, 'n' bascule le signe
    ///
    /// Enter/Backspace/Escape sont des touches nommées, routées à part par
    /// la couche UI.
    pub fn depuis_clavier(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
            '.' => Some(Touche::Point),
            '+' => Some(Touche::Binaire(Operateur::Addition)),
            '-' => Some(Touche::Binaire(Operateur::Soustraction)),
            '*' => Some(Touche::Binaire(Operateur::Multiplication)),
            '/' => Some(Touche::Binaire(Operateur::Division)),
            '^' => Some(Touche::Binaire(Operateur::Puissance)),
            '%' => Some(Touche::Binaire(Operateur::Modulo)),
            '=' => Some(Touche::Egal),
            'c' | 'C' => Some(Touche::Effacer),
            'n' | 'N' => Some(Touche::Signe),
            _ => None,
        }
    }
}
