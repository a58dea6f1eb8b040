// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Preview and apply over in-memory inputs.

use crate::error::CliError;
use crate::snapshot::RegistrySnapshot;
use serde::Serialize;
use staffsync::{
    ApplyContext, ApplySummary, CodeHints, DepartmentIndex, PreviewSummary, ReconciliationInput,
    SyncOutcome, SyncPreview, SyncSettings, apply, generate_preview,
};
use staffsync_hr::Directory;
use time::OffsetDateTime;

/// What `preview` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub summary: PreviewSummary,
    pub preview: SyncPreview,
}

/// What `apply` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub preview: PreviewSummary,
    pub applied: ApplySummary,
}

/// Computes the preview for `directory` against `snapshot`.
#[must_use]
pub fn run_preview(
    directory: &Directory,
    snapshot: &RegistrySnapshot,
    settings: &SyncSettings,
) -> SyncPreview {
    let department_index: DepartmentIndex = directory.department_index();
    let code_hints: CodeHints = directory.code_hints();
    let input: ReconciliationInput<'_> = ReconciliationInput {
        employees: &directory.employees,
        employment_filter: &settings.employment_type_filter,
        department_index: &department_index,
        department_mappings: &snapshot.department_mappings,
        qualification_mappings: &snapshot.qualification_mappings,
        offices: &snapshot.offices,
        qualification_masters: &snapshot.qualification_masters,
        code_hints: &code_hints,
        qualification_field: &settings.qualification_field,
        existing_staff: &snapshot.staff,
    };
    generate_preview(&input)
}

/// Previews and applies in one step, returning the new snapshot.
///
/// The preview is computed and applied against the same snapshot, so no
/// other write can interleave.
///
/// # Errors
///
/// Returns `CliError::Sync` if the apply step is rejected.
pub fn run_apply(
    directory: &Directory,
    snapshot: &RegistrySnapshot,
    settings: &SyncSettings,
    synced_at: OffsetDateTime,
) -> Result<(RegistrySnapshot, ApplyReport), CliError> {
    let preview: SyncPreview = run_preview(directory, snapshot, settings);
    let context: ApplyContext = ApplyContext::new(synced_at, settings.default_base_salary)?;
    let outcome: SyncOutcome = apply(&preview, &snapshot.staff, &context)?;
    let report: ApplyReport = ApplyReport {
        preview: preview.summary(),
        applied: outcome.summary,
    };
    Ok((snapshot.with_staff(outcome.staff), report))
}
