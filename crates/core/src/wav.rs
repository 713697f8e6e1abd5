//! Mono 16-bit PCM WAV container handling

use crate::{buffer::PcmBuffer, CoreError, Result};
use std::io::Cursor;
use tracing::debug;

/// Largest sample count whose data chunk still fits the RIFF u32 size fields.
pub const MAX_PCM16_SAMPLES: usize = ((u32::MAX - 44) / 2) as usize;

fn pcm16_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

fn check_len(buffer: &PcmBuffer) -> Result<()> {
    if buffer.len() > MAX_PCM16_SAMPLES {
        return Err(CoreError::ContainerOverflow {
            samples: buffer.len(),
            max: MAX_PCM16_SAMPLES,
        });
    }
    Ok(())
}

fn write_samples<W>(writer: W, buffer: &PcmBuffer) -> Result<()>
where
    W: std::io::Write + std::io::Seek,
{
    let mut writer = hound::WavWriter::new(writer, pcm16_spec(buffer.sample_rate()))?;
    for &sample in buffer.data() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Serialize a buffer into an in-memory WAV file
pub fn write_wav(buffer: &PcmBuffer) -> Result<Vec<u8>> {
    check_len(buffer)?;

    let mut cursor = Cursor::new(Vec::with_capacity(44 + buffer.len() * 2));
    write_samples(&mut cursor, buffer)?;

    let bytes = cursor.into_inner();
    debug!("Wrote {} samples into {} WAV bytes", buffer.len(), bytes.len());
    Ok(bytes)
}

/// Parse an in-memory WAV file back into samples
pub fn read_wav(bytes: &[u8]) -> Result<PcmBuffer> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(CoreError::UnsupportedFormat {
            msg: format!(
                "expected mono 16-bit PCM, got {} channel(s), {} bits, {:?}",
                spec.channels, spec.bits_per_sample, spec.sample_format
            ),
        });
    }

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    PcmBuffer::from_data(samples, spec.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_header_layout() {
        let buffer = PcmBuffer::from_data(vec![0, 1000, -1000], 44100).unwrap();
        let bytes = write_wav(&buffer).unwrap();

        assert_eq!(bytes.len(), 44 + 6);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // channels
        assert_eq!(u16::from_le_bytes([bytes[22], bytes[23]]), 1);
        // sample rate
        assert_eq!(
            u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            44100
        );
        // bits per sample
        assert_eq!(u16::from_le_bytes([bytes[34], bytes[35]]), 16);
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(
            u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
            6
        );
        assert_eq!(&bytes[44..46], &0i16.to_le_bytes());
        assert_eq!(&bytes[46..48], &1000i16.to_le_bytes());
        assert_eq!(&bytes[48..50], &(-1000i16).to_le_bytes());
    }

    #[test]
    fn test_read_back() {
        let buffer = PcmBuffer::from_data(vec![5, -5, i16::MAX, i16::MIN], 8000).unwrap();
        let decoded = read_wav(&write_wav(&buffer).unwrap()).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_rejects_stereo() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            writer.write_sample(0i16).unwrap();
            writer.write_sample(0i16).unwrap();
            writer.finalize().unwrap();
        }

        let result = read_wav(cursor.get_ref());
        assert!(matches!(result, Err(CoreError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(read_wav(b"not a wav file").is_err());
    }

    #[quickcheck]
    fn prop_byte_length_tracks_samples(samples: Vec<i16>) -> bool {
        let len = samples.len();
        let buffer = PcmBuffer::from_data(samples, 16000).unwrap();
        write_wav(&buffer).unwrap().len() == 44 + 2 * len
    }
}
