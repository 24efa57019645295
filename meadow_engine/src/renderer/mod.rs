/// Renderer module - the narrow graphics API surface the tiling core draws through

pub mod command_list;
pub mod instanced_model;
pub mod instance_texture;
pub mod shader;
pub mod mock_command_list;

pub use command_list::*;
pub use instanced_model::*;
pub use instance_texture::*;
pub use shader::*;
