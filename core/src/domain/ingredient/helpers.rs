use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::{ImageFailure, IngredientSet},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    pub ingredients: IngredientSet,
    pub failures: Vec<ImageFailure>,
}

/// Folds per-image recognition results into one [`IngredientSet`].
///
/// Labels are unioned individually, so overlapping images collapse to a single
/// entry per ingredient. Failed images are reported and skipped; if every image
/// failed there is nothing to recommend from and the whole request fails.
pub fn aggregate_recognitions<I>(outcomes: I) -> Result<Aggregation, CoreError>
where
    I: IntoIterator<Item = Result<Vec<String>, CoreError>>,
{
    let mut ingredients = IngredientSet::new();
    let mut failures = Vec::new();
    let mut total = 0;

    for (index, outcome) in outcomes.into_iter().enumerate() {
        total += 1;
        match outcome {
            Ok(labels) => ingredients.extend_labels(labels),
            Err(e) => failures.push(ImageFailure {
                index,
                reason: e.to_string(),
            }),
        }
    }

    if total > 0 && failures.len() == total {
        return Err(CoreError::AllRecognitionsFailed(total));
    }

    Ok(Aggregation {
        ingredients,
        failures,
    })
}
