/// Mock command list (no GPU required)
///
/// Records every command so culling and drawing can be verified in unit
/// and integration tests, or run headless.

use crate::error::{Error, Result};
use super::command_list::CommandList;
use super::instanced_model::InstancedModel;
use super::instance_texture::InstanceTexture;

/// One recorded command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCommand {
    BindModel(String),
    BindInstanceTexture { name: String, width: u32 },
    PushConstants { offset: u32, size: usize },
    SetInstanceOffset(u32),
    DrawIndexedInstanced { index_count: u32, instance_count: u32 },
}

/// Command list that records instead of submitting
#[derive(Debug, Default)]
pub struct MockCommandList {
    pub commands: Vec<RecordedCommand>,
    /// Fail every draw after this many successful ones
    fail_after_draws: Option<usize>,
    draws: usize,
}

impl MockCommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the list return `Error::BackendError` once `draws` draws were recorded.
    pub fn failing_after(draws: usize) -> Self {
        Self {
            fail_after_draws: Some(draws),
            ..Self::default()
        }
    }

    /// `(instance_offset, instance_count)` of every recorded draw, pairing
    /// each draw with the last instance offset set before it.
    pub fn draw_ranges(&self) -> Vec<(u32, u32)> {
        let mut offset = 0;
        let mut ranges = Vec::new();
        for command in &self.commands {
            match command {
                RecordedCommand::SetInstanceOffset(o) => offset = *o,
                RecordedCommand::DrawIndexedInstanced { instance_count, .. } => {
                    ranges.push((offset, *instance_count));
                }
                _ => {}
            }
        }
        ranges
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.draws = 0;
    }
}

impl CommandList for MockCommandList {
    fn bind_model(&mut self, model: &InstancedModel) -> Result<()> {
        self.commands.push(RecordedCommand::BindModel(model.name.clone()));
        Ok(())
    }

    fn bind_instance_texture(&mut self, texture: &InstanceTexture) -> Result<()> {
        self.commands.push(RecordedCommand::BindInstanceTexture {
            name: texture.name().to_string(),
            width: texture.width(),
        });
        Ok(())
    }

    fn push_constants(&mut self, offset: u32, data: &[u8]) -> Result<()> {
        self.commands.push(RecordedCommand::PushConstants { offset, size: data.len() });
        Ok(())
    }

    fn set_instance_offset(&mut self, offset: u32) -> Result<()> {
        self.commands.push(RecordedCommand::SetInstanceOffset(offset));
        Ok(())
    }

    fn draw_indexed_instanced(&mut self, index_count: u32, instance_count: u32) -> Result<()> {
        if self.fail_after_draws.is_some_and(|limit| self.draws >= limit) {
            return Err(Error::BackendError("mock draw failure".to_string()));
        }
        self.commands.push(RecordedCommand::DrawIndexedInstanced { index_count, instance_count });
        self.draws += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_command_list_tests.rs"]
mod tests;
