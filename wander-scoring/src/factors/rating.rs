use wander_core::config::ScoringConfig;

/// Stepwise rating score.
///
/// `None` scores 0. A rating below every step scores `poor_rating_score`
/// (-0.2 by default), a penalty distinct from having no rating at all.
pub fn calculate(rating: Option<f64>, scoring: &ScoringConfig) -> f64 {
    let Some(rating) = rating else {
        return 0.0;
    };
    scoring
        .sorted_rating_steps()
        .iter()
        .find(|step| rating >= step.min)
        .map(|step| step.score)
        .unwrap_or(scoring.poor_rating_score)
}
