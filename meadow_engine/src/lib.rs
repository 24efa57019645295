/*!
# Meadow Engine

Tiled instancing and frustum culling for large vegetation fields.

Each species' instances (position, scale, rotation) are partitioned once at
load time into a square grid of ground tiles, each tile owning a contiguous
range of a reordered instance buffer. Every frame, whole tiles are tested
against the camera frustum and each surviving tile is drawn with a single
instanced draw call.

## Architecture

- **tiling**: instance buffers, tile grid construction, per-frame culling flags
- **camera**: camera matrices, bounding boxes, frustum tester, scripted camera paths
- **renderer**: the narrow command-list / shader surface draws go through
- **scene**: `VegetationField`, the per-field owner of every tiled species
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod tiling;
pub mod renderer;
pub mod scene;

// Main meadow namespace module
pub mod meadow {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Tiling sub-module
    pub mod tiling {
        pub use crate::tiling::*;
    }

    // Render sub-module with the draw surface and its recording mock
    pub mod render {
        pub use crate::renderer::*;
        pub use crate::renderer::mock_command_list::{MockCommandList, RecordedCommand};
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
