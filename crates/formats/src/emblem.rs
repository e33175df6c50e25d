//! Emblem model decoding.
//!
//! Accepts a binary GLB container or a JSON glTF document whose buffers are
//! embedded (`BIN` chunk or base64 `data:` URIs), walks the scene hierarchy
//! and flattens every triangle primitive into one [`Mesh`] in model space.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use foundation::math::{
    MAT4_IDENTITY, Mat4, Vec3, mat4_mul, mat4_transform_point, mat4_transform_vector,
};
use gltf::Gltf;
use gltf::buffer::Source;
use gltf::mesh::Mode;
use scene::components::Mesh;

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },
    #[error("invalid glTF: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("buffer {0} expects a GLB BIN chunk but none is present")]
    MissingBinChunk(usize),
    #[error("buffer {index} references external file {uri}; only embedded buffers are supported")]
    ExternalBuffer { index: usize, uri: String },
    #[error("buffer {index} has malformed data URI: {reason}")]
    DataUri { index: usize, reason: String },
    #[error("buffer {index} holds {actual} bytes, declared {expected}")]
    ShortBuffer {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("vertex index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("model has no scene")]
    NoScene,
    #[error("model contains no triangle meshes")]
    EmptyScene,
}

pub fn decode_emblem(bytes: &[u8]) -> Result<Mesh, ModelLoadError> {
    let gltf = Gltf::from_slice(bytes)?;
    let buffers = resolve_buffers(&gltf)?;

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or(ModelLoadError::NoScene)?;

    let mut mesh = Mesh::default();
    for node in scene.nodes() {
        append_node(&node, MAT4_IDENTITY, &buffers, &mut mesh)?;
    }

    if mesh.is_empty() {
        return Err(ModelLoadError::EmptyScene);
    }
    Ok(mesh)
}

fn resolve_buffers(gltf: &Gltf) -> Result<Vec<Vec<u8>>, ModelLoadError> {
    gltf.buffers()
        .map(|buffer| {
            let index = buffer.index();
            let data = match buffer.source() {
                Source::Bin => gltf
                    .blob
                    .clone()
                    .ok_or(ModelLoadError::MissingBinChunk(index))?,
                Source::Uri(uri) => decode_data_uri(index, uri)?,
            };
            if data.len() < buffer.length() {
                return Err(ModelLoadError::ShortBuffer {
                    index,
                    expected: buffer.length(),
                    actual: data.len(),
                });
            }
            Ok(data)
        })
        .collect()
}

fn decode_data_uri(index: usize, uri: &str) -> Result<Vec<u8>, ModelLoadError> {
    let Some(rest) = uri.strip_prefix("data:") else {
        return Err(ModelLoadError::ExternalBuffer {
            index,
            uri: uri.to_string(),
        });
    };
    let (header, payload) = rest.split_once(',').ok_or_else(|| ModelLoadError::DataUri {
        index,
        reason: "missing ','".to_string(),
    })?;
    if !header.ends_with(";base64") {
        return Err(ModelLoadError::DataUri {
            index,
            reason: format!("unsupported encoding {header:?}"),
        });
    }
    STANDARD
        .decode(payload)
        .map_err(|e| ModelLoadError::DataUri {
            index,
            reason: e.to_string(),
        })
}

fn append_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    buffers: &[Vec<u8>],
    out: &mut Mesh,
) -> Result<(), ModelLoadError> {
    let world = mat4_mul(parent, node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != Mode::Triangles {
                log::debug!(
                    "skipping {:?} primitive in mesh {}",
                    primitive.mode(),
                    mesh.index()
                );
                continue;
            }
            append_primitive(&primitive, world, buffers, out)?;
        }
    }

    for child in node.children() {
        append_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn append_primitive(
    primitive: &gltf::Primitive<'_>,
    world: Mat4,
    buffers: &[Vec<u8>],
    out: &mut Mesh,
) -> Result<(), ModelLoadError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
    let Some(positions) = reader.read_positions() else {
        return Ok(());
    };
    let positions: Vec<[f32; 3]> = positions
        .map(|p| mat4_transform_point(world, p))
        .collect();

    let mut indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    indices.truncate(indices.len() - indices.len() % 3);
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(ModelLoadError::IndexOutOfRange {
            index,
            vertices: positions.len(),
        });
    }

    // Upper 3x3 only; emblem nodes are expected to scale uniformly.
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(normals) => normals
            .map(|n| unit(mat4_transform_vector(world, n)))
            .collect(),
        None => Vec::new(),
    };
    let normals = if normals.len() == positions.len() {
        normals
    } else {
        vertex_normals(&positions, &indices)
    };

    let base = out.positions.len() as u32;
    out.positions.extend_from_slice(&positions);
    out.normals.extend_from_slice(&normals);
    out.indices.extend(indices.iter().map(|i| base + i));
    Ok(())
}

/// Area-weighted average of adjacent face normals.
fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut sums = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(positions[i as usize]));
        let face = (b - a).cross(c - a);
        for &i in tri {
            sums[i as usize] = sums[i as usize] + face;
        }
    }
    sums.into_iter().map(|n| n.normalize().to_f32()).collect()
}

fn unit(v: [f32; 3]) -> [f32; 3] {
    Vec3::from(v).normalize().to_f32()
}
