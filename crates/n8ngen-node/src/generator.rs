use log::info;
use n8ngen_core::config::N8ngenConfig;
use n8ngen_core::ir::IrPlugin;
use n8ngen_core::{CodeGenerator, GeneratedFile, GeneratorError};
use serde_json::Value;

use crate::emitters::credentials::credentials_file_name;
use crate::emitters::manifest::ManifestOptions;
use crate::emitters::node::node_file_path;
use crate::emitters::{RenderContext, TemplateKind, render, source_path};

/// Layout and manifest options for one generated plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginOptions {
    /// Directory holding `nodes/` and `credentials/`; empty for the output root.
    pub source_dir: String,
    /// Emit `<source_dir>/index.ts` registering the node type.
    pub index: bool,
    pub manifest: ManifestOptions,
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self::from_config(&N8ngenConfig::default(), None)
    }
}

impl PluginOptions {
    /// Build options from project config and the starter's `devDependencies`.
    pub fn from_config(config: &N8ngenConfig, dev_dependencies: Option<Value>) -> Self {
        Self {
            source_dir: config.source_dir.clone(),
            index: config.index,
            manifest: ManifestOptions::from_package(&config.package, dev_dependencies),
        }
    }
}

/// n8n community node plugin generator.
pub struct NodePluginGenerator;

impl CodeGenerator for NodePluginGenerator {
    type Config = PluginOptions;

    fn generate(
        &self,
        plugin: &IrPlugin,
        config: &PluginOptions,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let name = &plugin.name;
        let ctx = RenderContext {
            name,
            descriptors: &plugin.operations,
            manifest: &config.manifest,
        };
        let src = config.source_dir.as_str();

        let mut files = vec![
            GeneratedFile {
                path: "package.json".to_string(),
                content: render(TemplateKind::Manifest, &ctx)?,
            },
            GeneratedFile {
                path: source_path(src, &node_file_path(name)),
                content: render(TemplateKind::Node, &ctx)?,
            },
            GeneratedFile {
                path: source_path(src, &format!("credentials/{}", credentials_file_name(name))),
                content: render(TemplateKind::Credentials, &ctx)?,
            },
        ];

        if config.index {
            files.push(GeneratedFile {
                path: source_path(src, "index.ts"),
                content: render(TemplateKind::Index, &ctx)?,
            });
        }

        info!(
            "rendered {} files for {} ({} operations)",
            files.len(),
            name,
            plugin.operations.len()
        );
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use n8ngen_core::ir::OperationDescriptor;
    use n8ngen_core::name::PluginName;

    fn plugin() -> IrPlugin {
        IrPlugin {
            name: PluginName::new("Example").unwrap(),
            operations: vec![OperationDescriptor::new("get", "/ping", Some("Ping"))],
        }
    }

    fn paths(files: &[GeneratedFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_default_layout() {
        let files = NodePluginGenerator
            .generate(&plugin(), &PluginOptions::default())
            .unwrap();
        assert_eq!(
            paths(&files),
            vec![
                "package.json",
                "src/nodes/Example/Example.node.ts",
                "src/credentials/ExampleApi.credentials.ts",
                "src/index.ts",
            ]
        );
    }

    #[test]
    fn test_root_layout_without_index() {
        let options = PluginOptions {
            source_dir: String::new(),
            index: false,
            ..PluginOptions::default()
        };
        let files = NodePluginGenerator.generate(&plugin(), &options).unwrap();
        assert_eq!(
            paths(&files),
            vec![
                "package.json",
                "nodes/Example/Example.node.ts",
                "credentials/ExampleApi.credentials.ts",
            ]
        );
    }

    #[test]
    fn test_contents_match_render() {
        let options = PluginOptions::default();
        let plugin = plugin();
        let files = NodePluginGenerator.generate(&plugin, &options).unwrap();
        let ctx = RenderContext {
            name: &plugin.name,
            descriptors: &plugin.operations,
            manifest: &options.manifest,
        };
        assert_eq!(files[1].content, render(TemplateKind::Node, &ctx).unwrap());
        assert!(files[1].content.contains("name: 'get__ping'"));
        assert!(files[2].content.contains("class ExampleApi"));
    }
}
