pub mod config;
pub mod error;
pub mod ir;
pub mod name;
pub mod parse;
pub mod scaffold;
pub mod starter;
pub mod transform;

pub use error::GeneratorError;

/// A generated file with path (relative to the output directory) and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that produce plugin files from a derived plugin description.
pub trait CodeGenerator {
    type Config;
    fn generate(
        &self,
        plugin: &ir::IrPlugin,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, GeneratorError>;
}
