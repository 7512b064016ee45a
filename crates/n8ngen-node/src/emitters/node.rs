use minijinja::context;
use n8ngen_core::GeneratorError;
use n8ngen_core::ir::OperationDescriptor;
use n8ngen_core::name::PluginName;

use super::properties::emit_properties;
use super::render_template;

/// Emit `<Name>.node.ts` with one property per descriptor.
pub fn emit_node(
    name: &PluginName,
    descriptors: &[OperationDescriptor],
) -> Result<String, GeneratorError> {
    render_template(
        "node.ts.j2",
        include_str!("../../templates/node.ts.j2"),
        context! {
            name => name.as_str(),
            properties => emit_properties(descriptors),
        },
    )
}

/// Path of the node source relative to the source directory.
pub fn node_file_path(name: &PluginName) -> String {
    format!("nodes/{name}/{name}.node.ts")
}
