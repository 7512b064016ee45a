use minijinja::context;
use n8ngen_core::GeneratorError;
use n8ngen_core::name::PluginName;

use super::render_template;

/// Emit `<Name>Api.credentials.ts`, declaring a single API key field.
pub fn emit_credentials(name: &PluginName) -> Result<String, GeneratorError> {
    render_template(
        "credentials.ts.j2",
        include_str!("../../templates/credentials.ts.j2"),
        context! { name => name.as_str() },
    )
}

/// File name of the credentials source for `name`.
pub fn credentials_file_name(name: &PluginName) -> String {
    format!("{name}Api.credentials.ts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_credentials() {
        let name = PluginName::new("Example").unwrap();
        let output = emit_credentials(&name).unwrap();
        assert_eq!(
            output,
            "import type { ICredentialType, INodeProperties } from 'n8n-workflow';\n\
             \n\
             export class ExampleApi implements ICredentialType {\n\
             \tname = 'ExampleApi';\n\
             \tdisplayName = 'Example API';\n\
             \tproperties: INodeProperties[] = [\n\
             \t\t{\n\
             \t\t\tdisplayName: 'API Key',\n\
             \t\t\tname: 'apiKey',\n\
             \t\t\ttype: 'string',\n\
             \t\t\ttypeOptions: { password: true },\n\
             \t\t\tdefault: '',\n\
             \t\t},\n\
             \t];\n\
             }\n"
        );
    }

    #[test]
    fn test_credentials_file_name() {
        let name = PluginName::new("Petstore").unwrap();
        assert_eq!(credentials_file_name(&name), "PetstoreApi.credentials.ts");
    }
}
