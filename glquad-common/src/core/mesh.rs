/// Components per vertex (x, y, z).
pub const QUAD_ITEM_SIZE: usize = 3;
/// Vertices in the strip.
pub const QUAD_ITEM_COUNT: usize = 4;

/// Full-canvas quad in clip space, ordered for a triangle strip.
pub const QUAD_VERTICES: [f32; QUAD_ITEM_SIZE * QUAD_ITEM_COUNT] = [
    1.0, 1.0, 0.0, //
    -1.0, 1.0, 0.0, //
    1.0, -1.0, 0.0, //
    -1.0, -1.0, 0.0,
];

/// Attribute layout handed to `vertexAttribPointer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub size: i32,
    pub stride: i32,
    pub offset: i32,
}

/// CPU side of the static quad.
#[derive(Clone, Copy, Debug)]
pub struct QuadMesh;

impl QuadMesh {
    pub fn vertices(&self) -> &'static [f32] {
        &QUAD_VERTICES
    }

    pub fn item_size(&self) -> usize {
        QUAD_ITEM_SIZE
    }

    pub fn item_count(&self) -> usize {
        QUAD_ITEM_COUNT
    }

    /// Tightly packed positions, no interleaving.
    pub fn position_layout(&self) -> VertexLayout {
        VertexLayout {
            size: QUAD_ITEM_SIZE as i32,
            stride: 0,
            offset: 0,
        }
    }

    /// Corner `i` as `[x, y, z]`.
    pub fn corner(&self, i: usize) -> [f32; 3] {
        let v = &QUAD_VERTICES[i * QUAD_ITEM_SIZE..(i + 1) * QUAD_ITEM_SIZE];
        [v[0], v[1], v[2]]
    }
}

/// Remap a clip-space position to a texture coordinate, `xy * 0.5 + 0.5`.
pub fn clip_to_uv(x: f32, y: f32) -> (f32, f32) {
    (x * 0.5 + 0.5, y * 0.5 + 0.5)
}
