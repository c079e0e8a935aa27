//! Batch validation
//!
//! The whole batch is checked before anything is generated. Entries are
//! scanned once, in order, and the first violated rule is reported.

use crate::ramp::spec::RampSpec;
use rampgen_core::ValidationError;
use std::collections::HashSet;

/// Check a batch of ramps before generation.
///
/// Per entry, in order:
/// 1. the name was not used by an earlier entry
/// 2. width and height are within `1..=2048`
/// 3. at least one gradient is present
/// 4. the name is not empty and is a plain file name (no `/` or `\`,
///    not `.` or `..`)
/// 5. every gradient has color keys and alpha keys
/// 6. a ramp with several gradients has a remap curve
///
/// The remap curve's domain is not checked against the scan range.
pub fn validate(batch: &[RampSpec]) -> Result<(), ValidationError> {
    let mut names = HashSet::with_capacity(batch.len());

    for (index, spec) in batch.iter().enumerate() {
        let name = || spec.name.clone();

        if !names.insert(spec.name.as_str()) {
            return Err(ValidationError::DuplicateName { index, name: name() });
        }

        if !spec.size.is_valid() {
            return Err(ValidationError::InvalidSize {
                index,
                name: name(),
                width: spec.size.width,
                height: spec.size.height,
            });
        }

        if spec.gradients.is_empty() {
            return Err(ValidationError::MissingGradients { index, name: name() });
        }

        if spec.name.is_empty() {
            return Err(ValidationError::EmptyName { index });
        }

        if !is_plain_file_name(&spec.name) {
            return Err(ValidationError::InvalidName { index, name: name() });
        }

        for (gradient, g) in spec.gradients.iter().enumerate() {
            let channel = if g.color_keys().is_empty() {
                "color"
            } else if g.alpha_keys().is_empty() {
                "alpha"
            } else {
                continue;
            };
            return Err(ValidationError::EmptyGradient {
                index,
                name: name(),
                gradient,
                channel,
            });
        }

        if spec.is_blended() && spec.remap_curve.is_none() {
            return Err(ValidationError::MissingRemapCurve {
                index,
                name: name(),
                count: spec.gradients.len(),
            });
        }
    }

    Ok(())
}

/// Names become `<name>.png` inside the output directory and must not leave it.
fn is_plain_file_name(name: &str) -> bool {
    !matches!(name, "." | "..") && !name.contains(['/', '\\'])
}
