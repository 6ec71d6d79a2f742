//! Audio file decoding via Symphonia.
//!
//! Wraps Symphonia to provide a simple interface for decoding audio files
//! into f32 sample buffers, either interleaved per packet or fully
//! down-mixed to a single mono channel.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CodecType, DecoderOptions};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};
use w2p_common::{AudioCodec, AudioStreamInfo};

use crate::error::AudioError;

/// One decoded packet in f32 interleaved format.
#[derive(Clone, Debug)]
pub struct DecodedAudio {
    /// Interleaved f32 samples.
    pub data: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of channels.
    pub channels: u16,
}

impl DecodedAudio {
    /// Number of frames (samples per channel) in this packet.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.data.len() / self.channels as usize
    }
}

/// Audio file decoder backed by Symphonia.
///
/// Opens an audio file and decodes it packet-by-packet. The whole-file
/// helpers accumulate into memory; there is no streaming output.
pub struct AudioDecoder {
    reader: Box<dyn symphonia::core::formats::FormatReader>,
    decoder: Box<dyn symphonia::core::codecs::Decoder>,
    track_id: u32,
    stream_info: AudioStreamInfo,
}

impl AudioDecoder {
    /// Open an audio file for decoding.
    ///
    /// Probes the file to determine format and codec, then initializes
    /// the appropriate Symphonia decoder.
    pub fn open(path: &Path) -> Result<Self, AudioError> {
        let file =
            File::open(path).map_err(|e| AudioError::FileOpen(format!("{}: {e}", path.display())))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Build a hint from the file extension
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::UnsupportedFormat(format!("{e}")))?;

        let reader = probed.format;

        // Find the first audio track
        let track = reader
            .tracks()
            .iter()
            .find(|t| {
                t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL
                    && t.codec_params.channels.is_some()
            })
            .ok_or(AudioError::NoAudioTrack)?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let sample_rate = codec_params
            .sample_rate
            .ok_or_else(|| AudioError::Decode("No sample rate in codec params".to_string()))?;

        let channels = codec_params
            .channels
            .map(|c| c.count() as u16)
            .ok_or_else(|| AudioError::Decode("No channel info in codec params".to_string()))?;

        let stream_info = AudioStreamInfo {
            codec: symphonia_codec_to_audio_codec(codec_params.codec),
            sample_rate,
            channels,
            bits_per_sample: codec_params
                .bits_per_sample
                .or(codec_params.bits_per_coded_sample),
            frames: codec_params.n_frames,
        };

        let decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::UnsupportedFormat(format!("Codec init failed: {e}")))?;

        debug!(
            codec = ?stream_info.codec,
            sample_rate = sample_rate,
            channels = channels,
            frames = ?stream_info.frames,
            "Opened audio file"
        );

        Ok(Self {
            reader,
            decoder,
            track_id,
            stream_info,
        })
    }

    /// Get information about the audio stream.
    pub fn stream_info(&self) -> &AudioStreamInfo {
        &self.stream_info
    }

    /// Decode the next packet of audio, returning interleaved f32 samples.
    ///
    /// Returns `Ok(None)` when the end of the stream is reached.
    pub fn decode_next(&mut self) -> Result<Option<DecodedAudio>, AudioError> {
        loop {
            let packet = match self.reader.next_packet() {
                Ok(p) => p,
                Err(symphonia::core::errors::Error::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(e) => {
                    return Err(AudioError::Decode(format!("{e}")));
                }
            };

            // Skip packets that don't belong to our track
            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(d) => d,
                Err(symphonia::core::errors::Error::DecodeError(msg)) => {
                    warn!(error = %msg, "Skipping corrupted audio packet");
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::Decode(format!("{e}")));
                }
            };

            let spec = *decoded.spec();
            let num_frames = decoded.frames();

            if num_frames == 0 {
                continue;
            }

            let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);

            return Ok(Some(DecodedAudio {
                data: sample_buf.samples().to_vec(),
                sample_rate: spec.rate,
                channels: spec.channels.count() as u16,
            }));
        }
    }

    /// Decode the entire file and down-mix it to mono.
    pub fn decode_mono(&mut self) -> Result<Vec<f32>, AudioError> {
        self.decode_mono_with(|| false)
    }

    /// Decode the entire file to mono, polling `should_abort` before each
    /// packet.
    ///
    /// Returns [`AudioError::Aborted`] as soon as the callback returns `true`;
    /// samples decoded so far are discarded.
    pub fn decode_mono_with<F>(&mut self, mut should_abort: F) -> Result<Vec<f32>, AudioError>
    where
        F: FnMut() -> bool,
    {
        let capacity = self.stream_info.frames.unwrap_or(0) as usize;
        let mut mono = Vec::with_capacity(capacity);

        loop {
            if should_abort() {
                debug!(decoded_frames = mono.len(), "Audio decode aborted");
                return Err(AudioError::Aborted);
            }
            match self.decode_next()? {
                Some(decoded) => downmix_to_mono(&decoded.data, decoded.channels, &mut mono),
                None => break,
            }
        }

        debug!(total_frames = mono.len(), "Decoded entire audio file to mono");

        Ok(mono)
    }
}

/// Append the per-frame arithmetic mean of `interleaved` to `out`.
///
/// A trailing partial frame is ignored. `channels == 0` appends nothing.
pub fn downmix_to_mono(interleaved: &[f32], channels: u16, out: &mut Vec<f32>) {
    match channels {
        0 => {}
        1 => out.extend_from_slice(interleaved),
        ch => {
            let ch = ch as usize;
            out.extend(
                interleaved
                    .chunks_exact(ch)
                    .map(|frame| frame.iter().sum::<f32>() / ch as f32),
            );
        }
    }
}

/// Map a Symphonia codec type to our `AudioCodec` enum.
fn symphonia_codec_to_audio_codec(codec: CodecType) -> AudioCodec {
    use symphonia::core::codecs;

    if codec == codecs::CODEC_TYPE_AAC {
        AudioCodec::Aac
    } else if codec == codecs::CODEC_TYPE_MP3 {
        AudioCodec::Mp3
    } else if codec == codecs::CODEC_TYPE_FLAC {
        AudioCodec::Flac
    } else if codec == codecs::CODEC_TYPE_VORBIS {
        AudioCodec::Vorbis
    } else if codec == codecs::CODEC_TYPE_OPUS {
        AudioCodec::Opus
    } else if [
        codecs::CODEC_TYPE_PCM_U8,
        codecs::CODEC_TYPE_PCM_S16LE,
        codecs::CODEC_TYPE_PCM_S24LE,
        codecs::CODEC_TYPE_PCM_S32LE,
        codecs::CODEC_TYPE_PCM_F32LE,
        codecs::CODEC_TYPE_PCM_F64LE,
    ]
    .contains(&codec)
    {
        AudioCodec::Wav
    } else {
        AudioCodec::Other
    }
}
