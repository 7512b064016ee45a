use minijinja::context;
use n8ngen_core::GeneratorError;
use n8ngen_core::name::PluginName;

use super::render_template;

/// Emit `index.ts`, exporting the node class in `nodeTypes`.
pub fn emit_index(name: &PluginName) -> Result<String, GeneratorError> {
    render_template(
        "index.ts.j2",
        include_str!("../../templates/index.ts.j2"),
        context! { name => name.as_str() },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_index() {
        let name = PluginName::new("Petstore").unwrap();
        let output = emit_index(&name).unwrap();
        insta::assert_snapshot!(output, @r"
        import type { INodeType } from 'n8n-workflow';
        import { Petstore } from './nodes/Petstore/Petstore.node';

        export const nodeTypes: Array<new () => INodeType> = [Petstore];
        ");
    }
}
