//! Terminal card for a single assessment.

use santa_core::{Assessment, FeasibilityModel, Portrait};

/// Render an assessment as a vertical card, optionally with the model's
/// per-term breakdown.
pub fn assessment_card(assessment: &Assessment, explain: Option<&FeasibilityModel>) -> String {
    let mut out = String::new();
    let f = &assessment.features;

    out.push_str(&format!("=== {} ===\n", quoted(&assessment.wish)));
    out.push_str(&format!("{}\n\n", assessment.message));

    out.push_str("Verdict\n");
    row(&mut out, "approved", if assessment.approved { "yes" } else { "no" });
    row(&mut out, "feasibility_score", &format!("{:.1} / 100", assessment.score));
    row(&mut out, "tier", assessment.tier.as_str());
    row(&mut out, "commentary", assessment.tier.commentary());
    row(
        &mut out,
        "portrait",
        Portrait::for_outcome(Some(assessment.approved)).image,
    );
    out.push('\n');

    out.push_str("Features\n");
    row(&mut out, "word_count", &f.word_count.to_string());
    row(&mut out, "buzzword_count", &f.buzzword_count.to_string());
    row(&mut out, "fun_word_count", &f.fun_word_count.to_string());
    row(&mut out, "avg_word_length", &format!("{:.1}", f.avg_word_length));

    if let Some(model) = explain {
        out.push_str("\nModel terms\n");
        for term in model.explain(&assessment.features) {
            out.push_str(&format!(
                "  {:<26} {:>8.3} x {:>6.2} = {:>+8.3}\n",
                term.name,
                term.value,
                term.weight,
                term.contribution()
            ));
        }
        out.push_str(&format!(
            "  {:<26} {:>+8.3}\n",
            "z",
            model.logit(&assessment.features)
        ));
    }

    out
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<26} {}\n", label, value));
}

fn quoted(wish: &str) -> String {
    if wish.trim().is_empty() {
        "(empty wish)".to_string()
    } else {
        format!("\"{}\"", wish.trim())
    }
}
