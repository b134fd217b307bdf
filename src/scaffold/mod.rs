//! Component scaffold generation
//!
//! Derives the three standard files for a new engine component (header,
//! implementation, scripting-binding stub) from a validated [`ComponentSpec`],
//! checks that none of the targets already exist, and writes them through a
//! rollback transaction so a failed run leaves nothing behind.

use std::fs;
use std::path::Path;

use crate::error::{self, Result};
use crate::transaction::Transaction;

pub mod templates;

/// Directory the binding stub always lands in, regardless of output prefix
const META_DIR: &str = "luaexport/";

/// A validated component name plus output directory prefix
#[derive(Debug, Clone)]
pub struct ComponentSpec {
    name: String,
    prefix: String,
}

impl ComponentSpec {
    /// Validate `name` and normalize `dir` into a `/`-terminated prefix.
    ///
    /// The name must be a valid C++ identifier so the generated class name
    /// and include guard are well-formed.
    pub fn new(name: &str, dir: &str) -> Result<Self> {
        validate_name(name)?;

        let mut prefix = dir.to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }

        Ok(Self {
            name: name.to_string(),
            prefix,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Include guard token, e.g. `WIDGET_HPP_INCLUDED` for `Widget`
    pub fn include_guard(&self) -> String {
        format!("{}_HPP_INCLUDED", self.name.to_uppercase())
    }

    pub fn header_path(&self) -> String {
        format!("{}{}.hpp", self.prefix, self.name)
    }

    pub fn source_path(&self) -> String {
        format!("{}{}.cpp", self.prefix, self.name)
    }

    pub fn meta_path(&self) -> String {
        format!("{}{}Meta.cpp", META_DIR, self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err(error::invalid_component_name(name, "must not be empty"));
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(error::invalid_component_name(
            name,
            "must start with a letter or underscore",
        ));
    }
    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(error::invalid_component_name(
            name,
            format!("contains invalid character '{bad}'"),
        ));
    }

    Ok(())
}

/// Which of the three generated files an entry is, tagged for build-file
/// integration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Header,
    Source,
    MetaBinding,
}

impl FileKind {
    /// Build-file variable the generated path should be appended to
    pub fn build_var(self) -> &'static str {
        match self {
            FileKind::Header => "COMP_HEADERS",
            FileKind::Source => "COMP_SOURCES",
            FileKind::MetaBinding => "LUAEXPORT_SOURCES",
        }
    }
}

/// One rendered output file: relative path plus full body
#[derive(Debug)]
pub struct GeneratedFile {
    pub kind: FileKind,
    pub path: String,
    pub body: String,
}

/// The three generated files for one component, in header/source/meta order
#[derive(Debug)]
pub struct ScaffoldPlan {
    files: Vec<GeneratedFile>,
}

impl ScaffoldPlan {
    pub fn for_spec(spec: &ComponentSpec) -> Self {
        let files = vec![
            GeneratedFile {
                kind: FileKind::Header,
                path: spec.header_path(),
                body: templates::render(templates::HEADER_TEMPLATE, spec),
            },
            GeneratedFile {
                kind: FileKind::Source,
                path: spec.source_path(),
                body: templates::render(templates::SOURCE_TEMPLATE, spec),
            },
            GeneratedFile {
                kind: FileKind::MetaBinding,
                path: spec.meta_path(),
                body: templates::render(templates::META_TEMPLATE, spec),
            },
        ];
        Self { files }
    }

    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Target paths that already exist under `base`
    fn existing_targets(&self, base: &Path) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| base.join(&f.path).exists())
            .map(|f| f.path.clone())
            .collect()
    }

    /// Write all three files under `base`, all-or-nothing.
    ///
    /// Aborts before touching the file system if any target exists. A write
    /// failure after that rolls back the files written so far.
    pub fn write(&self, base: &Path) -> Result<()> {
        let existing = self.existing_targets(base);
        if !existing.is_empty() {
            return Err(error::scaffold_targets_exist(&existing));
        }

        let mut transaction = Transaction::new();

        for file in &self.files {
            let target = base.join(&file.path);

            if let Some(parent) = target.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| {
                        error::file_write_failed(file.path.clone(), e.to_string())
                    })?;
                    transaction.track_dir_created(parent);
                }
            }

            fs::write(&target, &file.body)
                .map_err(|e| error::file_write_failed(file.path.clone(), e.to_string()))?;
            transaction.track_file_created(target);
        }

        transaction.commit();
        Ok(())
    }
}
