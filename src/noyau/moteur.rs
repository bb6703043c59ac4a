// src/noyau/moteur.rs
//
// Moteur de la calculatrice
// -------------------------
// Possède l'état complet (affichage + opérande capturé + opérateur en
// attente) et ne le mute qu'au travers d'opérations nommées. Pas de
// variables ambiantes: la couche de présentation tient une instance et
// lui envoie des `Touche`.
//
// Contrats:
// - L'affichage est toujours un littéral numérique (au plus un point,
//   signe en tête admis), le "-" transitoire d'un négatif en cours de
//   saisie, ou le marqueur d'erreur.
// - `attente_second == true` implique un opérateur en attente.
// - Les erreurs de domaine deviennent le marqueur, jamais un panic; la
//   saisie d'un chiffre ou un effacement repart sur un état sain.

use super::calcul::calculer;
use super::fonctions::{appliquer_fonction, convertir_temperature};
use super::format::{format_nombre, lire_nombre, MARQUEUR_ERREUR};
use super::touches::{FonctionUnaire, Operateur, SensTemperature, Touche};

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    premier_operande: Option<f64>,
    operateur: Option<Operateur>,
    attente_second: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            premier_operande: None,
            operateur: None,
            attente_second: false,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Affichage courant, à montrer tel quel par la présentation.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Opérateur en attente (indicateur d'état de la vue).
    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.operateur
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Point d'entrée unique: une pression de touche, une transition.
    ///
    /// Cas particulier hérité du clavier: '-' démarre la saisie d'un
    /// nombre négatif quand l'affichage est "0" ou que le moteur attend
    /// son second opérande; sinon c'est l'opérateur soustraction.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.saisir_chiffre(d),
            Touche::Point => self.saisir_point(),
            Touche::Effacer => self.tout_effacer(),
            Touche::Signe => self.basculer_signe(),
            Touche::Pourcent => self.pourcentage(),
            Touche::Unaire(f) => self.appliquer_unaire(f),
            Touche::Binaire(Operateur::Soustraction) if self.demarre_negatif() => {
                self.affichage = "-".to_string();
                self.attente_second = false;
            }
            Touche::Binaire(op) => self.appliquer_operateur(Some(op)),
            Touche::Egal => self.appliquer_operateur(None),
            Touche::Retour => self.retour_arriere(),
            Touche::Conversion(sens) => self.convertir(sens),
        }
    }

    fn demarre_negatif(&self) -> bool {
        self.affichage == "0" || self.attente_second
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre. Remplace l'affichage après un opérateur, sur
    /// "0", ou sur le marqueur d'erreur (reprise silencieuse).
    pub fn saisir_chiffre(&mut self, chiffre: u8) {
        debug_assert!(chiffre <= 9);
        let c = char::from(b'0' + chiffre.min(9));

        if self.attente_second {
            self.affichage.clear();
            self.affichage.push(c);
            self.attente_second = false;
        } else if self.affichage == "0" || self.affichage == MARQUEUR_ERREUR {
            self.affichage.clear();
            self.affichage.push(c);
        } else {
            self.affichage.push(c);
        }
    }

    /// Point décimal: au plus un par affichage (idempotent sinon).
    pub fn saisir_point(&mut self) {
        if self.attente_second {
            self.affichage = "0.".to_string();
            self.attente_second = false;
            return;
        }
        if self.affichage == MARQUEUR_ERREUR {
            return;
        }
        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Retour arrière: retire le dernier caractère, "0" s'il ne reste
    /// rien (ou un signe nu). Inactif entre opérateur et second opérande.
    pub fn retour_arriere(&mut self) {
        if self.attente_second {
            return;
        }
        if self.affichage == MARQUEUR_ERREUR {
            self.affichage = "0".to_string();
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
        }
    }

    /// Remise à zéro totale: état identique à un moteur neuf.
    pub fn tout_effacer(&mut self) {
        *self = Self::default();
    }

    /* ------------------------ Actions unaires ------------------------ */

    /// Bascule le signe. Inactif sur "0" et sur le marqueur d'erreur.
    pub fn basculer_signe(&mut self) {
        if self.affichage == "0" || self.affichage == MARQUEUR_ERREUR {
            return;
        }
        match self.affichage.strip_prefix('-') {
            Some("") => self.affichage = "0".to_string(),
            Some(reste) => self.affichage = reste.to_string(),
            None => self.affichage.insert(0, '-'),
        }
    }

    /// Divise la valeur affichée par 100. Inactif si elle ne se lit pas.
    pub fn pourcentage(&mut self) {
        let Some(v) = lire_nombre(&self.affichage) else {
            return;
        };
        self.affichage = format_nombre(v / 100.0);
    }

    /// Fonction unaire sur la valeur affichée. Erreur de domaine =>
    /// marqueur; affichage illisible => inactif. Les autres champs de
    /// l'état ne bougent pas.
    pub fn appliquer_unaire(&mut self, fonction: FonctionUnaire) {
        let Some(x) = lire_nombre(&self.affichage) else {
            return;
        };
        match appliquer_fonction(fonction, x) {
            Ok(res) => self.affichage = format_nombre(res),
            Err(_) => self.affichage = MARQUEUR_ERREUR.to_string(),
        }
    }

    /// Conversion de température sur la valeur affichée.
    pub fn convertir(&mut self, sens: SensTemperature) {
        let Some(x) = lire_nombre(&self.affichage) else {
            return;
        };
        match convertir_temperature(sens, x) {
            Ok(res) => self.affichage = format_nombre(res),
            Err(_) => self.affichage = MARQUEUR_ERREUR.to_string(),
        }
    }

    /* ------------------------ Machine à états opérateur ------------------------ */

    /// Transition centrale. `prochain == None` est l'action "évaluer".
    ///
    /// 1. Opérateur déjà en attente ET second opérande pas encore saisi:
    ///    on remplace l'opérateur, sans calcul.
    /// 2. Sinon, pas d'opérande capturé: l'affichage devient le premier
    ///    opérande.
    /// 3. Sinon, calcul en chaîne: le résultat devient l'affichage ET le
    ///    nouveau premier opérande.
    /// Puis `attente_second = true`, l'opérateur en attente devient
    /// `prochain`. Évaluer (None) ramène ensuite les trois champs de la
    /// machine à leur valeur de repos.
    pub fn appliquer_operateur(&mut self, prochain: Option<Operateur>) {
        let entree = lire_nombre(&self.affichage);

        if self.operateur.is_some() && self.attente_second {
            self.operateur = prochain;
            if prochain.is_none() {
                self.finaliser();
            }
            return;
        }

        match (self.premier_operande, self.operateur, entree) {
            (None, _, Some(v)) => self.premier_operande = Some(v),
            (Some(a), Some(op), Some(b)) => match calculer(a, b, op) {
                Ok(res) => {
                    self.affichage = format_nombre(res);
                    self.premier_operande = Some(res);
                }
                Err(_) => {
                    self.affichage = MARQUEUR_ERREUR.to_string();
                    self.premier_operande = None;
                }
            },
            // Affichage illisible (marqueur, "-" seul): pas de calcul.
            _ => {}
        }

        self.attente_second = true;
        self.operateur = prochain;
        if prochain.is_none() {
            self.finaliser();
        }
    }

    fn finaliser(&mut self) {
        self.operateur = None;
        self.attente_second = false;
        self.premier_operande = None;
    }
}

#[cfg(test)]
impl Moteur {
    /// Accès test: vrai entre le choix d'un opérateur et la saisie du
    /// second opérande.
    pub(crate) fn attente_second(&self) -> bool {
        self.attente_second
    }
}
