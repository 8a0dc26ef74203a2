//! Mono audio signal container.

/// An ordered sequence of mono `f32` samples at a fixed sample rate.
///
/// Perturbators and effects treat the samples as read-only input and always
/// return a fresh buffer, so an `AudioSignal` can be reused as the source for
/// many perturbed variants.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Create a signal from samples and a sample rate in Hz.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Borrow the samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Replace the samples, keeping the sample rate.
    pub fn with_samples(&self, samples: Vec<f32>) -> Self {
        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    /// Consume the signal, returning the sample buffer.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}
