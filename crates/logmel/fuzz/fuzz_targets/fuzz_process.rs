//! Fuzz target for filterbank construction and frame processing.
//!
//! The first bytes choose the parameters, the rest become the spectrum.
//! Construction may fail; when it succeeds, `process` must either succeed
//! with in-range outputs or report an error without panicking.
//!
//! Run with: `cargo +nightly fuzz run fuzz_process`

#![no_main]

use libfuzzer_sys::fuzz_target;
use melfix_logmel::{FilterNormalization, LogMel, LogMelParams, MelScale};
use melfix_math::{Complex, Q6_25};

const HEADER_LEN: usize = 16;

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < HEADER_LEN {
        return;
    }
    let (header, body) = data.split_at(HEADER_LEN);

    let flags = header[0];
    let params = LogMelParams {
        sample_rate: read_u32(&header[4..8]) % 96_001,
        fft_size: 1usize << (header[1] % 14),
        low_freq_q8: read_u32(&header[8..12]) % (48_000 * 256),
        upp_freq_q8: read_u32(&header[12..16]) % (48_000 * 256),
        band_num: header[2] as usize % 48,
        mel_scale: if flags & 1 == 0 {
            MelScale::Htk
        } else {
            MelScale::AuditoryToolbox
        },
        normalization: if flags & 2 == 0 {
            FilterNormalization::Unit
        } else {
            FilterNormalization::Area
        },
        base10: flags & 4 != 0,
    };
    let scale_exp = header[3] as i8 as i32;

    let Ok(logmel) = LogMel::new(params) else {
        return;
    };

    // Spectrum from the body, zero-filled to the expected length
    let mut spectrum = vec![Complex::new(0, 0); logmel.spectrum_len()];
    for (bin, chunk) in spectrum.iter_mut().zip(body.chunks_exact(8)) {
        *bin = Complex::new(read_u32(&chunk[..4]) as i32, read_u32(&chunk[4..]) as i32);
    }

    let mut scratch = vec![0u8; logmel.scratch_size()];
    let mut output = vec![Q6_25::ZERO; logmel.band_num()];
    if logmel
        .process(&mut scratch, &mut output, &spectrum, scale_exp)
        .is_ok()
    {
        assert!(output.iter().all(|v| *v >= Q6_25::ZERO));
    }

    // Undersized scratch must be rejected, never written past
    if let Some(short) = logmel.scratch_size().checked_sub(1) {
        let mut scratch = vec![0u8; short];
        assert!(logmel
            .process(&mut scratch, &mut output, &spectrum, scale_exp)
            .is_err());
    }
});
