use log::debug;

use crate::ir::{IrPlugin, OperationDescriptor};
use crate::name::PluginName;
use crate::parse::OpenApiDocument;

/// Derive one descriptor per (path, method) entry, in document order.
///
/// Paths without operations contribute nothing.
pub fn derive_descriptors(doc: &OpenApiDocument) -> Vec<OperationDescriptor> {
    let mut descriptors = Vec::with_capacity(doc.operation_count());
    for (path, item) in &doc.paths {
        for (method, operation) in &item.operations {
            let descriptor = OperationDescriptor::new(method, path, operation.summary.as_deref());
            debug!("{method} {path} -> {}", descriptor.identifier);
            descriptors.push(descriptor);
        }
    }
    descriptors
}

/// Bundle a plugin name with the descriptors derived from `doc`.
pub fn transform(doc: &OpenApiDocument, name: PluginName) -> IrPlugin {
    IrPlugin {
        name,
        operations: derive_descriptors(doc),
    }
}
