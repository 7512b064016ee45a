mod descriptor;

pub use descriptor::{OperationDescriptor, PropertyKind};

use crate::name::PluginName;

/// Everything a generator needs to emit a plugin: its name and its operations.
#[derive(Debug, Clone, PartialEq)]
pub struct IrPlugin {
    pub name: PluginName,
    pub operations: Vec<OperationDescriptor>,
}
