pub mod emitters;
pub mod generator;

pub use emitters::manifest::ManifestOptions;
pub use emitters::{RenderContext, TemplateKind, render};
pub use generator::{NodePluginGenerator, PluginOptions};
