use log::warn;
use n8ngen_core::ir::OperationDescriptor;

/// Separator placed between property blocks.
pub const PROPERTY_SEPARATOR: &str = ",\n";

/// Render one descriptor as a node property block, indented for the
/// `properties` array of the node template.
///
/// The label is inserted verbatim; a `'` in it ends the string literal early.
pub fn emit_property(descriptor: &OperationDescriptor) -> String {
    if descriptor.label.contains('\'') {
        warn!(
            "label {:?} of {} contains a single quote; the generated node source will need a manual fix",
            descriptor.label, descriptor.identifier
        );
    }
    format!(
        "\t\t\t{{\n\
         \t\t\t\tdisplayName: '{label}',\n\
         \t\t\t\tname: '{identifier}',\n\
         \t\t\t\ttype: '{kind}',\n\
         \t\t\t\tdefault: '',\n\
         \t\t\t\toptions: [],\n\
         \t\t\t}}",
        label = descriptor.label,
        identifier = descriptor.identifier,
        kind = descriptor.kind,
    )
}

/// Render all descriptors, joined with [`PROPERTY_SEPARATOR`].
pub fn emit_properties(descriptors: &[OperationDescriptor]) -> String {
    descriptors
        .iter()
        .map(emit_property)
        .collect::<Vec<_>>()
        .join(PROPERTY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_property() {
        let descriptor = OperationDescriptor::new("get", "/ping", Some("Ping"));
        assert_eq!(
            emit_property(&descriptor),
            "\t\t\t{\n\
             \t\t\t\tdisplayName: 'Ping',\n\
             \t\t\t\tname: 'get__ping',\n\
             \t\t\t\ttype: 'operation',\n\
             \t\t\t\tdefault: '',\n\
             \t\t\t\toptions: [],\n\
             \t\t\t}"
        );
    }

    #[test]
    fn test_emit_properties_joins_in_order() {
        let descriptors = vec![
            OperationDescriptor::new("get", "/a", None),
            OperationDescriptor::new("post", "/b", None),
        ];
        let rendered = emit_properties(&descriptors);
        let blocks: Vec<&str> = rendered.split(PROPERTY_SEPARATOR).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("name: 'get__a'"));
        assert!(blocks[1].contains("displayName: 'POST /b'"));
    }

    #[test]
    fn test_emit_properties_empty() {
        assert_eq!(emit_properties(&[]), "");
    }

    #[test]
    fn test_quotes_in_labels_are_not_rewritten() {
        let descriptor = OperationDescriptor::new("get", "/me", Some("Get user's profile"));
        assert!(emit_property(&descriptor).contains("displayName: 'Get user's profile'"));
    }
}
