use crate::types::{Criterion, ScoreReport};

/// Format a score report as human-readable markdown
pub fn format_report_readable(report: &ScoreReport) -> String {
    let mut output = String::new();

    // Title
    output.push_str("# Self-Introduction Score\n\n");

    // Overall
    let possible: u32 = Criterion::ALL.iter().map(|criterion| criterion.max_score()).sum();
    output.push_str(&format!(
        "**Overall:** {} / {} points\n\n",
        report.overall_score, possible
    ));

    // Criteria, in rubric order
    output.push_str("## Criteria\n\n");
    for criterion in Criterion::ALL {
        let Some(result) = report.criterion(criterion) else {
            continue;
        };
        let score = match result.score {
            Some(score) => format!("{}/{}", score, criterion.max_score()),
            None => "n/a".to_string(),
        };
        output.push_str(&format!(
            "• {} ({}): {}\n",
            criterion.display_name(),
            score,
            result.feedback
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::CriterionResult;

    fn sample_report() -> ScoreReport {
        ScoreReport {
            overall_score: 19,
            criteria: BTreeMap::from([
                (
                    Criterion::Salutation,
                    CriterionResult::scored(4, "Good salutation."),
                ),
                (
                    Criterion::Grammar,
                    CriterionResult::unavailable("Not scored: the grammar service was unavailable."),
                ),
                (
                    Criterion::Sentiment,
                    CriterionResult::scored(15, "Wonderfully positive."),
                ),
            ]),
        }
    }

    #[test]
    fn renders_scores_against_their_maxima() {
        let rendered = format_report_readable(&sample_report());
        assert!(rendered.contains("**Overall:** 19 / 82 points"));
        assert!(rendered.contains("• Salutation (4/5): Good salutation."));
        assert!(rendered.contains("• Sentiment (15/15): Wonderfully positive."));
    }

    #[test]
    fn renders_unavailable_criteria_without_a_score() {
        let rendered = format_report_readable(&sample_report());
        assert!(rendered.contains("• Grammar (n/a): Not scored"));
    }

    #[test]
    fn renders_criteria_in_rubric_order() {
        let rendered = format_report_readable(&sample_report());
        let salutation = rendered.find("• Salutation").unwrap();
        let grammar = rendered.find("• Grammar").unwrap();
        let sentiment = rendered.find("• Sentiment").unwrap();
        assert!(salutation < grammar && grammar < sentiment);
    }
}
