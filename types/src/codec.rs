//! Canonical binary encoding of [`DposParams`].
//!
//! Layout: a version byte, then every raw field in declaration order.
//!
//! | kind | bytes |
//! |---|---|
//! | integer | 8, big-endian `u64` |
//! | amount | 4-byte big-endian length ++ minimal big-endian magnitude (zero is empty) |
//! | text | 4-byte big-endian length ++ UTF-8 |
//!
//! The layout is fixed by the routines below and nothing else, so the bytes
//! are identical across nodes and builds. Every record has exactly one
//! encoding: the decoder rejects non-minimal amounts and trailing input.

use crate::amount::Amount;
use crate::params::DposParams;
use thiserror::Error;

/// Format version written as the first byte.
pub const CODEC_VERSION: u8 = 1;

/// Longest amount magnitude accepted (512 bits).
pub const MAX_AMOUNT_BYTES: usize = 64;

/// Longest text field accepted.
pub const MAX_TEXT_BYTES: usize = 4096;

const LEN_PREFIX_BYTES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unsupported codec version {0}")]
    UnsupportedVersion(u8),

    #[error("truncated input reading {field}: need {needed} bytes, {remaining} remaining")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("length prefix {len} for {field} exceeds the maximum of {max}")]
    LengthOutOfRange {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("non-canonical encoding of {field}: leading zero byte")]
    NonCanonical { field: &'static str },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("{count} trailing bytes after the last field")]
    TrailingBytes { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("{field} is {len} bytes, the maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Encode the raw fields of `params`.
pub fn encode_params(params: &DposParams) -> Result<Vec<u8>, EncodeError> {
    let mut enc = Encoder::with_capacity(256);
    enc.buf.push(CODEC_VERSION);

    enc.u64(params.max_url_len);
    enc.amount("unit_stake", &params.unit_stake)?;
    enc.amount("producer_min_quantity", &params.producer_min_quantity)?;
    enc.amount("voter_min_quantity", &params.voter_min_quantity)?;
    enc.amount("activated_min_quantity", &params.activated_min_quantity)?;
    enc.u64(params.block_interval_ms);
    enc.u64(params.block_frequency);
    enc.u64(params.producer_schedule_size);
    enc.u64(params.delay_echo);
    enc.text("account_name", &params.account_name)?;
    enc.text("system_name", &params.system_name)?;
    enc.text("system_url", &params.system_url)?;
    enc.amount("extra_block_reward", &params.extra_block_reward)?;
    enc.amount("block_reward", &params.block_reward)?;
    enc.u64(params.decimals);

    Ok(enc.buf)
}

/// Decode bytes produced by [`encode_params`].
pub fn decode_params(bytes: &[u8]) -> Result<DposParams, DecodeError> {
    let mut dec = Decoder::new(bytes);

    let version = dec.take("version", 1)?[0];
    if version != CODEC_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }

    let params = DposParams {
        max_url_len: dec.u64("max_url_len")?,
        unit_stake: dec.amount("unit_stake")?,
        producer_min_quantity: dec.amount("producer_min_quantity")?,
        voter_min_quantity: dec.amount("voter_min_quantity")?,
        activated_min_quantity: dec.amount("activated_min_quantity")?,
        block_interval_ms: dec.u64("block_interval_ms")?,
        block_frequency: dec.u64("block_frequency")?,
        producer_schedule_size: dec.u64("producer_schedule_size")?,
        delay_echo: dec.u64("delay_echo")?,
        account_name: dec.text("account_name")?,
        system_name: dec.text("system_name")?,
        system_url: dec.text("system_url")?,
        extra_block_reward: dec.amount("extra_block_reward")?,
        block_reward: dec.amount("block_reward")?,
        decimals: dec.u64("decimals")?,
    };

    dec.finish()?;
    Ok(params)
}

struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    fn u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn prefixed(&mut self, field: &'static str, bytes: &[u8], max: usize) -> Result<(), EncodeError> {
        if bytes.len() > max {
            return Err(EncodeError::FieldTooLong {
                field,
                len: bytes.len(),
                max,
            });
        }
        // max is far below u32::MAX, so the cast is lossless.
        self.buf.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn amount(&mut self, field: &'static str, amount: &Amount) -> Result<(), EncodeError> {
        self.prefixed(field, &amount.to_bytes_be(), MAX_AMOUNT_BYTES)
    }

    fn text(&mut self, field: &'static str, text: &str) -> Result<(), EncodeError> {
        self.prefixed(field, text.as_bytes(), MAX_TEXT_BYTES)
    }
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::Truncated {
                field,
                needed,
                remaining,
            });
        }
        let slice = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }

    fn u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        let bytes = self.take(field, 8)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(bytes);
        Ok(u64::from_be_bytes(arr))
    }

    fn prefixed(&mut self, field: &'static str, max: usize) -> Result<&'a [u8], DecodeError> {
        let prefix = self.take(field, LEN_PREFIX_BYTES)?;
        let mut arr = [0u8; LEN_PREFIX_BYTES];
        arr.copy_from_slice(prefix);
        let len = u32::from_be_bytes(arr) as usize;
        if len > max {
            return Err(DecodeError::LengthOutOfRange { field, len, max });
        }
        self.take(field, len)
    }

    fn amount(&mut self, field: &'static str) -> Result<Amount, DecodeError> {
        let bytes = self.prefixed(field, MAX_AMOUNT_BYTES)?;
        if bytes.first() == Some(&0) {
            return Err(DecodeError::NonCanonical { field });
        }
        Ok(Amount::from_bytes_be(bytes))
    }

    fn text(&mut self, field: &'static str) -> Result<String, DecodeError> {
        let bytes = self.prefixed(field, MAX_TEXT_BYTES)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8 { field })
    }

    fn finish(self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(DecodeError::TrailingBytes { count }),
        }
    }
}
