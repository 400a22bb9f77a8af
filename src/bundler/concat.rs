//! Built-in bundler: copy the project, then concatenate each unit's modules
//!
//! The output directory is rebuilt from scratch on every run:
//! 1. The base directory is copied, minus excluded paths and the output
//!    directory itself.
//! 2. Each unit's modules are read in include order, passed through the content
//!    filter, given an explicit module id when their `define(` is anonymous, and
//!    written to `<out>/<unit>.js` followed by a `require([...]);` entry call.
//! 3. With `remove_combined`, copies of the combined module files are deleted.
//! 4. A `build.txt` log is written next to the units.
//!
//! Dependencies between modules are not traced; only the listed modules are
//! combined.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use super::{BuildReport, Bundler, UnitReport};
use crate::assembler::BundleConfiguration;
use crate::domain::BundleDescriptor;
use crate::error::{
    Result,
    bundle::{bundler_failed, module_not_found},
    fs::{read_failed, write_failed},
};
use crate::scanner::lexer::Lexer;

/// Log file written into the output directory
pub const BUILD_LOG: &str = "build.txt";

#[derive(Debug, Default, Clone)]
pub struct ConcatBundler;

impl ConcatBundler {
    pub fn new() -> Self {
        Self
    }
}

impl Bundler for ConcatBundler {
    fn bundle(&self, config: &BundleConfiguration) -> Result<BuildReport> {
        let out_rel = prepare_out_dir(config)?;
        let copied = copy_tree(config, out_rel.as_deref())?;
        debug!("Copied {copied} file(s) to {}", config.out_dir.display());

        let mut report = BuildReport {
            units: Vec::with_capacity(config.modules.len()),
            copied,
        };

        for descriptor in &config.modules {
            let unit = write_unit(config, descriptor)?;
            info!("Bundled {} ({} file(s))", unit.name, unit.files.len());
            report.units.push(unit);
        }

        if config.remove_combined {
            remove_combined(config)?;
        }

        let log_path = config.out_dir.join(BUILD_LOG);
        fs::write(&log_path, report.to_log()).map_err(|e| write_failed(&log_path, e))?;

        Ok(report)
    }
}

/// Wipe and recreate the output directory. Returns the output directory
/// relative to the base directory when it lies inside it.
fn prepare_out_dir(config: &BundleConfiguration) -> Result<Option<PathBuf>> {
    let base = fs::canonicalize(&config.base_dir).map_err(|e| read_failed(&config.base_dir, e))?;

    if config.out_dir.exists() {
        let out = fs::canonicalize(&config.out_dir).map_err(|e| read_failed(&config.out_dir, e))?;
        if base.starts_with(&out) {
            return Err(bundler_failed(format!(
                "output directory {} contains the base directory",
                config.out_dir.display()
            )));
        }
        fs::remove_dir_all(&config.out_dir).map_err(|e| write_failed(&config.out_dir, e))?;
    }

    fs::create_dir_all(&config.out_dir).map_err(|e| write_failed(&config.out_dir, e))?;
    let out = fs::canonicalize(&config.out_dir).map_err(|e| read_failed(&config.out_dir, e))?;

    Ok(out.strip_prefix(&base).ok().map(Path::to_path_buf))
}

fn copy_tree(config: &BundleConfiguration, out_rel: Option<&Path>) -> Result<usize> {
    let base = &config.base_dir;
    let mut copied = 0;

    let walker = WalkDir::new(base)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let Ok(relative) = entry.path().strip_prefix(base) else {
                return false;
            };
            Some(relative) != out_rel && !config.is_excluded(relative)
        });

    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
        let target = config.out_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| write_failed(&target, e))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(|e| write_failed(&target, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

fn read_source(path: &Path, module: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            module_not_found(module, path.display().to_string())
        } else {
            read_failed(path, e)
        }
    })
}

fn relative_display(config: &BundleConfiguration, path: &Path) -> String {
    path.strip_prefix(&config.base_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn write_unit(config: &BundleConfiguration, descriptor: &BundleDescriptor) -> Result<UnitReport> {
    let mut parts = Vec::new();
    let mut files = Vec::new();

    for module in &descriptor.include {
        if descriptor.exclude.contains(module) {
            continue;
        }
        let path = config.module_file(module);
        let source = read_source(&path, module)?;
        let filtered = config.content_filter.filter(module, &path, &source);
        parts.push(name_anonymous_define(&filtered, module));
        files.push(relative_display(config, &path));
    }

    // The unit's own bootstrap script; the content filter normally blanks it
    let own_path = config.base_dir.join(descriptor.output_file_name());
    if own_path.is_file() {
        let source = read_source(&own_path, &descriptor.name)?;
        let filtered = config.content_filter.filter(&descriptor.name, &own_path, &source);
        if !filtered.trim().is_empty() {
            parts.push(filtered.into_owned());
        }
        files.push(relative_display(config, &own_path));
    }

    parts.push(entry_call(&descriptor.insert_require));

    let output = config.out_dir.join(descriptor.output_file_name());
    let mut content = parts
        .iter()
        .map(|part| part.trim_end())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    content.push('\n');
    fs::write(&output, content).map_err(|e| write_failed(&output, e))?;

    Ok(UnitReport {
        name: descriptor.name.clone(),
        output,
        files,
    })
}

fn remove_combined(config: &BundleConfiguration) -> Result<()> {
    for descriptor in &config.modules {
        for module in &descriptor.include {
            let copy = config
                .out_dir
                .join(format!("{}.js", config.resolve_module(module)));
            match fs::remove_file(&copy) {
                Ok(()) => debug!("Removed combined {}", copy.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(write_failed(&copy, e)),
            }
        }
    }
    Ok(())
}

/// `require([...]);` call that loads the unit's modules on entry
pub fn entry_call(modules: &[String]) -> String {
    let list = modules
        .iter()
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!("require([{list}]);")
}

/// Give the first anonymous top-level `define(` call an explicit module id.
///
/// Combined modules must carry their id, otherwise the loader cannot tell
/// them apart once they share a file.
pub fn name_anonymous_define(source: &str, module: &str) -> String {
    let tokens = Lexer::tokenize(source);
    let call = tokens.windows(3).enumerate().find(|(i, window)| {
        let standalone = *i == 0 || !tokens[i - 1].is_punct('.');
        standalone && window[0].is_ident("define") && window[1].is_punct('(')
    });

    match call {
        Some((_, window)) if window[2].as_str().is_none() => {
            let insert_at = window[1].end;
            format!(
                "{}'{}', {}",
                &source[..insert_at],
                module,
                &source[insert_at..]
            )
        }
        _ => source.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::assembler::assemble;
    use crate::config::ProjectConfig;
    use crate::error::AmdpackError;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &str) {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write file");
    }

    fn sample_project() -> TempDir {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path();
        write(root, "index.html", r#"<div data-component="hello"></div>"#);
        write(root, "bootstrap-index.js", "require(['app'], function(app) { app.use('mediator'); app.start(); });");
        write(root, "app.js", "define(['require'], function(require) { return {}; });");
        write(root, "components/hello/component.js", "define(function() { return { init: function() {} }; });");
        write(root, "extensions/mediator/extension.js", "define(function() { return {}; });");
        write(root, "README.md", "# docs");
        write(root, "node_modules/requirejs/r.js", "");
        temp
    }

    #[test]
    fn test_name_anonymous_define() {
        assert_eq!(
            name_anonymous_define("define(function() {});", "components/a/component"),
            "define('components/a/component', function() {});"
        );
        assert_eq!(
            name_anonymous_define("define(['jquery'], function($) {});", "x"),
            "define('x', ['jquery'], function($) {});"
        );
    }

    #[test]
    fn test_named_define_is_untouched() {
        let source = "define('named', function() {});";
        assert_eq!(name_anonymous_define(source, "other"), source);
    }

    #[test]
    fn test_member_define_is_not_a_module() {
        let source = "obj.define(function() {});";
        assert_eq!(name_anonymous_define(source, "x"), source);
    }

    #[test]
    fn test_entry_call() {
        assert_eq!(
            entry_call(&["a".to_string(), "b".to_string()]),
            r#"require(["a", "b"]);"#
        );
    }

    #[test]
    fn test_bundle_writes_units_and_log() {
        let temp = sample_project();
        let config = assemble(&ProjectConfig::default(), temp.path()).expect("assemble");

        let report = ConcatBundler::new().bundle(&config).expect("bundle");
        assert_eq!(report.units.len(), 1);
        assert_eq!(
            report.units[0].files,
            vec![
                "extensions/mediator/extension.js",
                "components/hello/component.js",
                "bootstrap-index.js"
            ]
        );

        let out = temp.path().join("release");
        let unit = fs::read_to_string(out.join("bootstrap-index.js")).expect("unit");
        assert!(unit.contains("define('extensions/mediator/extension', function()"));
        assert!(unit.contains("define('components/hello/component', function()"));
        assert!(!unit.contains("app.start()"));
        assert!(unit.ends_with(
            "require([\"extensions/mediator/extension\", \"components/hello/component\"]);\n"
        ));
        assert!(out.join(BUILD_LOG).exists());
    }

    #[test]
    fn test_bundle_excludes_and_removes_combined() {
        let temp = sample_project();
        let config = assemble(&ProjectConfig::default(), temp.path()).expect("assemble");
        ConcatBundler::new().bundle(&config).expect("bundle");

        let out = temp.path().join("release");
        assert!(out.join("app.js").exists());
        assert!(out.join("index.html").exists());
        assert!(!out.join("README.md").exists());
        assert!(!out.join("node_modules").exists());
        assert!(!out.join("components/hello/component.js").exists());
        assert!(!out.join("release").exists());
    }

    #[test]
    fn test_missing_module_fails() {
        let temp = sample_project();
        fs::remove_file(temp.path().join("components/hello/component.js"))
            .expect("Failed to remove component");
        let config = assemble(&ProjectConfig::default(), temp.path()).expect("assemble");

        let result = ConcatBundler::new().bundle(&config);
        assert!(matches!(
            result,
            Err(AmdpackError::ModuleSourceNotFound { .. })
        ));
    }

    #[test]
    fn test_out_dir_containing_base_is_rejected() {
        let temp = sample_project();
        let mut project = ProjectConfig::default();
        project.out_dir = PathBuf::from("./");
        let config = assemble(&project, temp.path()).expect("assemble");

        let result = ConcatBundler::new().bundle(&config);
        assert!(matches!(result, Err(AmdpackError::BundlerFailed { .. })));
        assert!(temp.path().join("index.html").exists());
    }

    #[test]
    fn test_bundle_is_deterministic() {
        let temp = sample_project();
        let config = assemble(&ProjectConfig::default(), temp.path()).expect("assemble");
        let out = temp.path().join("release/bootstrap-index.js");

        ConcatBundler::new().bundle(&config).expect("first bundle");
        let first = fs::read(&out).expect("first output");
        ConcatBundler::new().bundle(&config).expect("second bundle");
        let second = fs::read(&out).expect("second output");
        assert_eq!(first, second);
    }
}
