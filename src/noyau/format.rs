// src/noyau/format.rs

/// Affichage d’un résultat flottant.
///
/// - entier => sans partie décimale ("4", pas "4.0")
/// - sinon  => plus courte écriture décimale qui relit la même valeur
/// - -0 => "0"
/// - non fini (débordement) => "Infinity", "-Infinity", "NaN"
pub fn formater_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
