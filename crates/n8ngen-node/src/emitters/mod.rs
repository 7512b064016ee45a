pub mod credentials;
pub mod index;
pub mod manifest;
pub mod node;
pub mod properties;

use minijinja::{AutoEscape, Environment};
use n8ngen_core::GeneratorError;
use n8ngen_core::ir::OperationDescriptor;
use n8ngen_core::name::PluginName;

use manifest::ManifestOptions;

/// The fixed templates a plugin is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// `package.json`
    Manifest,
    /// `nodes/<Name>/<Name>.node.ts`
    Node,
    /// `credentials/<Name>Api.credentials.ts`
    Credentials,
    /// `index.ts` registering the node type
    Index,
}

/// Inputs shared by every template.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub name: &'a PluginName,
    pub descriptors: &'a [OperationDescriptor],
    pub manifest: &'a ManifestOptions,
}

/// Render one template. Output depends only on `kind` and `ctx`.
pub fn render(kind: TemplateKind, ctx: &RenderContext<'_>) -> Result<String, GeneratorError> {
    match kind {
        TemplateKind::Manifest => manifest::emit_manifest(ctx.name, ctx.manifest),
        TemplateKind::Node => node::emit_node(ctx.name, ctx.descriptors),
        TemplateKind::Credentials => credentials::emit_credentials(ctx.name),
        TemplateKind::Index => index::emit_index(ctx.name),
    }
}

/// Build a file path under the configured source directory.
///
/// - `source_dir = "src"` → `"src/index.ts"`
/// - `source_dir = ""` → `"index.ts"`
/// - `source_dir = "lib/"` → `"lib/index.ts"`
pub fn source_path(source_dir: &str, file: &str) -> String {
    let source_dir = source_dir.trim_end_matches('/');
    if source_dir.is_empty() {
        file.to_string()
    } else {
        format!("{source_dir}/{file}")
    }
}

/// Render an embedded template with plain substitution (no escaping).
fn render_template(
    name: &str,
    source: &'static str,
    ctx: minijinja::Value,
) -> Result<String, GeneratorError> {
    let render_err = |e: minijinja::Error| GeneratorError::Render {
        template: name.to_string(),
        reason: e.to_string(),
    };

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_template(name, source).map_err(render_err)?;
    let tmpl = env.get_template(name).map_err(render_err)?;
    tmpl.render(ctx).map_err(render_err)
}
