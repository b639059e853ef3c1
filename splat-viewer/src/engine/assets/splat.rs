//! Splat capture payloads decoded from PLY files.
//!
//! Supports ascii and binary little-endian vertex elements. Colour comes
//! from `red/green/blue` bytes when present, otherwise from the `f_dc_*`
//! spherical-harmonic DC terms of Gaussian-splat exports.

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use std::io::Cursor;
use thiserror::Error;

/// Normalisation constant for the order-0 spherical-harmonic colour term.
const SH_C0: f32 = 0.282_094_8;

/// Decoded splat capture: one position and linear colour per point. The
/// scene layer treats this as an opaque payload to instantiate, not to edit.
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct SplatCloud {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl SplatCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum SplatLoadError {
    #[error("i/o error reading splat capture: {0}")]
    Io(#[from] std::io::Error),
    #[error("splat PLY has no vertex element")]
    MissingVertexElement,
    #[error("splat PLY vertex is missing property '{0}'")]
    MissingProperty(&'static str),
}

/// Parse a PLY capture into a point cloud.
pub fn parse_splat_ply(bytes: &[u8]) -> Result<SplatCloud, SplatLoadError> {
    let parser = Parser::<DefaultElement>::new();
    let ply = parser.read_ply(&mut Cursor::new(bytes))?;
    let vertices = ply
        .payload
        .get("vertex")
        .ok_or(SplatLoadError::MissingVertexElement)?;

    let mut cloud = SplatCloud {
        positions: Vec::with_capacity(vertices.len()),
        colors: Vec::with_capacity(vertices.len()),
    };

    for vertex in vertices {
        let x = scalar(vertex, "x")?;
        let y = scalar(vertex, "y")?;
        let z = scalar(vertex, "z")?;
        cloud.positions.push([x, y, z]);

        let color = if vertex.contains_key("red") {
            [
                scalar(vertex, "red")? / 255.0,
                scalar(vertex, "green")? / 255.0,
                scalar(vertex, "blue")? / 255.0,
                1.0,
            ]
        } else {
            [
                dc_to_linear(scalar(vertex, "f_dc_0")?),
                dc_to_linear(scalar(vertex, "f_dc_1")?),
                dc_to_linear(scalar(vertex, "f_dc_2")?),
                1.0,
            ]
        };
        cloud.colors.push(color);
    }

    Ok(cloud)
}

fn dc_to_linear(dc: f32) -> f32 {
    (0.5 + SH_C0 * dc).clamp(0.0, 1.0)
}

fn scalar(vertex: &DefaultElement, name: &'static str) -> Result<f32, SplatLoadError> {
    match vertex.get(name) {
        Some(Property::Float(v)) => Ok(*v),
        Some(Property::Double(v)) => Ok(*v as f32),
        Some(Property::UChar(v)) => Ok(*v as f32),
        Some(Property::Char(v)) => Ok(*v as f32),
        Some(Property::UShort(v)) => Ok(*v as f32),
        Some(Property::Short(v)) => Ok(*v as f32),
        Some(Property::UInt(v)) => Ok(*v as f32),
        Some(Property::Int(v)) => Ok(*v as f32),
        _ => Err(SplatLoadError::MissingProperty(name)),
    }
}

#[derive(Default)]
pub struct SplatCloudLoader;

impl AssetLoader for SplatCloudLoader {
    type Asset = SplatCloud;
    type Settings = ();
    type Error = SplatLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<SplatCloud, SplatLoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_splat_ply(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &["ply"]
    }
}

/// Registers the splat asset type and its loader.
pub struct SplatAssetPlugin;

impl Plugin for SplatAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<SplatCloud>()
            .init_asset_loader::<SplatCloudLoader>();
    }
}
