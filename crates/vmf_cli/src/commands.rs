//! Command implementations. Each returns the text to print so it can be
//! tested without a terminal.

use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::ValueEnum;
use tracing::info;
use vmf_math::AnyVector;
use vmf_runtime::FrameworkHandle;

/// Output format of `vmf encode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Base64 of the MessagePack component array.
    #[default]
    Msgpack,
    /// JSON component array.
    Json,
    /// Base64 of a MessagePack record tagged with the vector type id.
    Record,
}

fn vector_from(components: &[f64]) -> Result<AnyVector> {
    match AnyVector::from_components(components) {
        Some(v) => Ok(v),
        None => bail!("expected 2, 3 or 4 components, got {}", components.len()),
    }
}

pub fn encode(handle: &FrameworkHandle, components: &[f64], format: Format) -> Result<String> {
    let vector = vector_from(components)?;
    info!(type_name = vector.type_name(), ?format, "encoding vector");
    let out = match format {
        Format::Msgpack => {
            let bytes = match &vector {
                AnyVector::Vec2(v) => handle.encode(v)?,
                AnyVector::Vec3(v) => handle.encode(v)?,
                AnyVector::Vec4(v) => handle.encode(v)?,
            };
            STANDARD.encode(bytes)
        }
        Format::Json => {
            handle.ensure_open()?;
            match &vector {
                AnyVector::Vec2(v) => vmf_codec::encode_json(v)?,
                AnyVector::Vec3(v) => vmf_codec::encode_json(v)?,
                AnyVector::Vec4(v) => vmf_codec::encode_json(v)?,
            }
        }
        Format::Record => STANDARD.encode(handle.encode_record(&vector)?),
    };
    Ok(out)
}

pub fn decode(handle: &FrameworkHandle, payload: &str, record: bool) -> Result<String> {
    let bytes = STANDARD
        .decode(payload.trim())
        .context("payload is not valid base64")?;
    let vector = if record {
        handle.decode_record(&bytes)?
    } else {
        handle.ensure_open()?;
        vmf_codec::decode_any(&bytes)?
    };
    Ok(format!("{} {}", vector.type_name(), vector))
}

pub fn show(text: &str) -> Result<String> {
    let vector: AnyVector = text.parse().context("cannot parse vector")?;
    let lines: Vec<String> = ["x", "y", "z", "w"]
        .iter()
        .zip(vector.to_vec())
        .map(|(name, value)| format!("{name} = {value}"))
        .collect();
    Ok(format!("{}\n{}", vector.type_name(), lines.join("\n")))
}
