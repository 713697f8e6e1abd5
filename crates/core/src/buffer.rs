//! Sample buffer management

use crate::{CoreError, Result};
use std::ops::Index;

/// Generic sample buffer for audio data
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer<T> {
    data: Vec<T>,
    sample_rate: u32,
}

impl<T> SampleBuffer<T>
where
    T: Clone + Default,
{
    /// Create an empty buffer with room for `capacity` samples
    pub fn new(capacity: usize, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate });
        }

        Ok(Self {
            data: Vec::with_capacity(capacity),
            sample_rate,
        })
    }

    /// Create a buffer from existing data
    pub fn from_data(data: Vec<T>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: sample_rate });
        }

        Ok(Self { data, sample_rate })
    }

    /// Get the sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the buffer, returning the samples
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Append one sample
    pub fn push(&mut self, sample: T) {
        self.data.push(sample);
    }

    /// Append a run of samples
    pub fn extend_from_slice(&mut self, samples: &[T]) {
        self.data.extend_from_slice(samples);
    }

    /// Playback duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.data.len() as f64 / self.sample_rate as f64
    }
}

impl<T> Index<usize> for SampleBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

/// Signed 16-bit PCM samples, the only format AeroGame writes
pub type PcmBuffer = SampleBuffer<i16>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_buffer_creation() {
        let buffer = PcmBuffer::new(1024, 44100).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.sample_rate(), 44100);
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert!(PcmBuffer::new(16, 0).is_err());
        assert!(PcmBuffer::from_data(vec![0; 4], 0).is_err());
    }

    #[test]
    fn test_push_and_extend() {
        let mut buffer = PcmBuffer::new(0, 8000).unwrap();
        buffer.push(7);
        buffer.extend_from_slice(&[1, 2, 3]);
        assert_eq!(buffer.data(), &[7, 1, 2, 3]);
        assert_eq!(buffer[0], 7);
        assert_eq!(buffer.into_data(), vec![7, 1, 2, 3]);
    }

    #[test]
    fn test_duration() {
        let buffer = PcmBuffer::from_data(vec![0; 22050], 44100).unwrap();
        assert!((buffer.duration_seconds() - 0.5).abs() < 1e-12);
    }
}
