/// Handle to a GPU-resident model drawn with instancing.
///
/// Model loading is a backend concern; the tiling core only needs the
/// name (for binding and logs) and the index count of one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstancedModel {
    pub name: String,
    pub index_count: u32,
    pub vertex_count: u32,
}

impl InstancedModel {
    pub fn new(name: impl Into<String>, index_count: u32, vertex_count: u32) -> Self {
        Self {
            name: name.into(),
            index_count,
            vertex_count,
        }
    }
}
