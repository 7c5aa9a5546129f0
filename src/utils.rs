//! Utility functions for the PS agent crate

use rand::{Rng, distr::StandardUniform, prelude::IndexedRandom};

use crate::{Error, Result};

/// Temperature-scaled softmax over a row of h-values.
///
/// Computes `p_i = exp(β(x_i − max x)) / Σ_j exp(β(x_j − max x))`. Subtracting the
/// row maximum keeps every exponent at or below zero, so the largest term is
/// exactly 1 and the normaliser can neither overflow nor vanish.
///
/// # Errors
///
/// Returns [`Error::NumericalError`] if the row is empty, contains a non-finite
/// value, or `beta` is not finite.
///
/// # Examples
///
/// ```
/// use ps_agent::utils::softmax;
///
/// let probabilities = softmax(&[1.0, 1.0], 0.1).unwrap();
/// assert_eq!(probabilities, vec![0.5, 0.5]);
///
/// let sharpened = softmax(&[2.0, 1.0], 10.0).unwrap();
/// assert!(sharpened[0] > 0.99);
/// ```
pub fn softmax(values: &[f64], beta: f64) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::numerical("softmax over an empty row"));
    }
    if values.len() == 1 {
        return Ok(vec![1.0]);
    }
    if !beta.is_finite() {
        return Err(Error::numerical(format!("softmax beta {beta} is not finite")));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(Error::numerical(format!(
            "h-value {bad} is not finite; cannot build an action distribution"
        )));
    }

    let rescale = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp_values: Vec<f64> = values
        .iter()
        .map(|&x| (beta * (x - rescale)).exp())
        .collect();
    let norm: f64 = exp_values.iter().sum();

    if !norm.is_finite() || norm <= 0.0 {
        return Err(Error::numerical(format!(
            "softmax normaliser {norm} is not a positive finite number"
        )));
    }

    Ok(exp_values.into_iter().map(|e| e / norm).collect())
}

/// Draws one item with probability proportional to its weight.
///
/// Returns `None` for an empty slice. When no weight is positive every item is
/// equally likely; otherwise items with zero weight are never drawn.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use ps_agent::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let actions = vec![(0usize, 0.25), (1, 0.75), (2, 0.0)];
/// let action = weighted_sample(&mut rng, &actions).unwrap();
/// assert!(action < 2);
/// ```
pub fn weighted_sample<R, T, W>(rng: &mut R, items: &[(T, W)]) -> Option<T>
where
    R: Rng,
    T: Clone,
    W: Into<f64> + Copy,
{
    let total: f64 = items.iter().map(|(_, w)| (*w).into()).sum();
    if total <= 0.0 {
        return items.choose(rng).map(|(item, _)| item.clone());
    }
    let threshold = rng.sample::<f64, _>(StandardUniform) * total;
    select_at(items, threshold)
}

/// Item whose cumulative weight interval contains `threshold`.
///
/// Rounding can leave `threshold` at or past the summed weights; the last item
/// with positive weight is chosen then.
fn select_at<T, W>(items: &[(T, W)], mut threshold: f64) -> Option<T>
where
    T: Clone,
    W: Into<f64> + Copy,
{
    for (item, weight) in items {
        let w = (*weight).into();
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    items
        .iter()
        .rev()
        .find(|(_, w)| (*w).into() > 0.0)
        .map(|(item, _)| item.clone())
}

/// Arithmetic mean of a slice, `0.0` when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
