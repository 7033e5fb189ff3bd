//! Export adapters - script file serialization

mod script_file;

pub use script_file::{
    build_script_file, export_script, ExportError, ScriptCharacter, ScriptFile, ScriptMeta,
};
