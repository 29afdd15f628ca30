//! Tests de propriétés (campagne) : précédence, associativité, parenthèses,
//! erreurs, idempotence.
//!
//! Les valeurs attendues sont exactes en binaire (petits entiers, moitiés,
//! quarts) : comparaison stricte.

use std::time::{Duration, Instant};

use super::eval::{calculer, Sortie};

fn eval_nombre(expr: &str) -> f64 {
    match calculer(expr) {
        Sortie::Nombre(v) => v,
        Sortie::Texte(t) => panic!("expr={expr:?} texte={t:?}"),
    }
}

fn assert_vaut(expr: &str, attendu: f64) {
    assert_eq!(eval_nombre(expr), attendu, "expr={expr:?}");
}

fn assert_renvoyee(expr: &str) {
    assert_eq!(calculer(expr), Sortie::Texte(expr.to_string()), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios concrets ------------------------ */

#[test]
fn prop_scenarios_concrets() {
    assert_vaut("2+2", 4.0);
    assert_vaut("2-1", 1.0);
    assert_vaut("3*4", 12.0);
    assert_vaut("10/2", 5.0);
    assert_vaut("2+(2*5)", 12.0);
    assert_vaut("2*(2+5)", 14.0);
    assert_vaut("(2+1)*(4-3)", 3.0);
}

/* ------------------------ a OP b exact ------------------------ */

#[test]
fn prop_binaires_exacts() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for a in 0..=12u32 {
        for b in 0..=12u32 {
            budget(t0, max);

            let (fa, fb) = (f64::from(a), f64::from(b));
            assert_vaut(&format!("{a}+{b}"), fa + fb);
            assert_vaut(&format!("{a}-{b}"), fa - fb);
            assert_vaut(&format!("{a}*{b}"), fa * fb);
            if b != 0 {
                assert_vaut(&format!("{a}/{b}"), fa / fb);
            }
        }
    }
}

/* ------------------------ Associativité / précédence ------------------------ */

#[test]
fn prop_associativite_gauche() {
    assert_vaut("10-2-3", 5.0);
    assert_vaut("20/2/5", 2.0);
    assert_vaut("100-50+25-5", 70.0);
    assert_vaut("64/4*2/8", 4.0);
}

#[test]
fn prop_precedence() {
    assert_vaut("2+2*5", 12.0);
    assert_vaut("2*2+5", 9.0);
    assert_vaut("8-6/2", 5.0);
    assert_vaut("1+2*3-4/2", 5.0);
    assert_vaut("(1+2)*(3-4)/2", -1.5);
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn prop_parentheses_interieur_d_abord() {
    assert_vaut("12*(12-(6+6))", 0.0);
    assert_vaut("12*(12-(6))", 72.0);
    assert_vaut("((2+3)*(4-(1+1)))/5", 2.0);
    assert_vaut("(1)+(2)+(3)", 6.0);
}

#[test]
fn prop_parentheses_redondantes_neutres() {
    for expr in ["7*3-1", "9/4+2", "1.5*4"] {
        let nu = eval_nombre(expr);
        assert_eq!(eval_nombre(&format!("({expr})")), nu, "expr={expr:?}");
        assert_eq!(eval_nombre(&format!("((({expr})))")), nu, "expr={expr:?}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn prop_division_par_zero_texte() {
    for expr in ["5/0", "0/0", "1+2/0", "(3-3)/(2-2)", "4/(1-1)*2"] {
        let s = calculer(expr);
        assert_eq!(s, Sortie::Texte("division par zéro".into()), "expr={expr:?}");
    }
}

#[test]
fn prop_entrees_mal_formees_renvoyees() {
    assert_renvoyee("2&3");
    assert_renvoyee("2^3");
    assert_renvoyee("-2+3");
    assert_renvoyee("2 + 3");
    assert_renvoyee("2**3");
    assert_renvoyee("1.2.3+1");
    assert_renvoyee("(2+3");
    assert_renvoyee("((1)");
    assert_renvoyee("2)");
    assert_renvoyee("");
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn prop_idempotence() {
    for expr in ["2+2*5", "12*(12-(6+6))", "5/0", "2&3", "0.1+0.2"] {
        assert_eq!(calculer(expr), calculer(expr), "expr={expr:?}");
        assert_eq!(
            calculer(expr).to_string(),
            calculer(expr).to_string(),
            "expr={expr:?}"
        );
    }
}
