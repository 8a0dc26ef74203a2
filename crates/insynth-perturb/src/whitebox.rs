//! Hook for gradient-guided (whitebox) perturbation.
//!
//! Whitebox search perturbs an input along the gradient of the model under
//! test. Only the constraint step lives here: a transform applied to the raw
//! gradient before it is used as a perturbation direction. The search loop
//! itself belongs to the caller.

/// Transforms a raw gradient into an admissible perturbation direction.
pub trait GradientConstraint {
    /// Apply the constraint. The output has the same length as the input.
    fn apply_gradient_constraint(&self, gradients: &[f32]) -> Vec<f32>;
}

/// DeepXplore-style audio perturbation: any gradient direction is admissible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepXplorePerturbator;

impl DeepXplorePerturbator {
    /// Create the identity constraint.
    pub fn new() -> Self {
        Self
    }
}

impl GradientConstraint for DeepXplorePerturbator {
    fn apply_gradient_constraint(&self, gradients: &[f32]) -> Vec<f32> {
        gradients.to_vec()
    }
}
