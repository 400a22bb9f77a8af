//! Post-bundle rewriting
//!
//! After the bundler has emitted one script per unit, each script's entry
//! `require([...])` call is regenerated so that every module from the first
//! component position onward has `.init()` invoked on it. Extensions occupy the
//! earlier positions and are setup-only. Once every unit is rewritten, the
//! intermediate artifacts left in the output directory are deleted.
//!
//! Files are rewritten one at a time with no rollback: a failure part way
//! leaves earlier units rewritten.

pub mod load_call;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

pub use load_call::{find_load_call, synthesize};

use crate::domain::BundleDescriptor;
use crate::error::{
    Result,
    bundle::too_many_modules,
    fs::{read_failed, write_failed},
};
use crate::progress::ProgressDisplay;

/// What happened to one emitted unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Entry call regenerated; `initialised` modules get `.init()`
    Rewritten { initialised: usize },
    /// No entry call with a literal module list was found
    NoLoadCall,
}

/// Rewrite the entry call of a unit's source text.
///
/// Returns the new text and the number of initialised modules, or `None` when
/// the source has no entry call.
pub fn rewrite_source(unit: &str, source: &str) -> Result<Option<(String, usize)>> {
    let Some(call) = find_load_call(source) else {
        return Ok(None);
    };

    let replacement =
        synthesize(source, &call).ok_or_else(|| too_many_modules(unit, call.modules.len()))?;
    let initialised = call
        .first_component()
        .map_or(0, |first| call.modules.len() - first);

    let mut rewritten = String::with_capacity(source.len() + replacement.len());
    rewritten.push_str(&source[..call.span.start]);
    rewritten.push_str(&replacement);
    rewritten.push_str(&source[call.span.end..]);

    Ok(Some((rewritten, initialised)))
}

/// Rewrite one emitted unit in place
pub fn rewrite_file(path: &Path, unit: &str) -> Result<RewriteOutcome> {
    let source = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;

    match rewrite_source(unit, &source)? {
        Some((rewritten, initialised)) => {
            if rewritten != source {
                fs::write(path, rewritten).map_err(|e| write_failed(path, e))?;
            }
            debug!("{unit}: {initialised} module(s) auto-initialised");
            Ok(RewriteOutcome::Rewritten { initialised })
        }
        None => {
            warn!("{unit}: no require([...]) entry call found, left unchanged");
            Ok(RewriteOutcome::NoLoadCall)
        }
    }
}

/// Rewrite every unit emitted into `out_dir`
pub fn rewrite_units(
    out_dir: &Path,
    descriptors: &[BundleDescriptor],
) -> Result<Vec<(String, RewriteOutcome)>> {
    let progress = ProgressDisplay::new(descriptors.len() as u64);
    let mut outcomes = Vec::with_capacity(descriptors.len());

    for descriptor in descriptors {
        progress.update_unit(&descriptor.name);
        let path = out_dir.join(descriptor.output_file_name());
        match rewrite_file(&path, &descriptor.name) {
            Ok(outcome) => outcomes.push((descriptor.name.clone(), outcome)),
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
        progress.inc_unit();
    }

    progress.finish();
    Ok(outcomes)
}

/// Delete named intermediate artifacts from the output directory. Missing
/// files are skipped. Returns the files actually removed.
pub fn remove_artifacts(out_dir: &Path, artifacts: &[String]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for artifact in artifacts {
        let path = out_dir.join(artifact);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                removed.push(path);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(write_failed(&path, e)),
        }
    }
    Ok(removed)
}
