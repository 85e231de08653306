//! Non-interactive contractor registry run

use std::io::{self, Write};

use crate::application::{AccountService, AssignmentOutcome, BatchReport};
use crate::domain::{ContractorAssignment, IdentityProvider};

/// Apply `registry` and print one line per entry as it completes.
pub async fn run_contractor_batch<P, W>(
    service: &AccountService<P>,
    registry: &[ContractorAssignment],
    output: &mut W,
) -> io::Result<BatchReport>
where
    P: IdentityProvider,
    W: Write,
{
    let mut write_error: Option<io::Error> = None;

    let report = service
        .assign_contractors(registry, |outcome| {
            if write_error.is_none() {
                if let Err(e) = write_outcome(output, outcome) {
                    write_error = Some(e);
                }
            }
        })
        .await;

    match write_error {
        Some(e) => Err(e),
        None => Ok(report),
    }
}

pub fn write_outcome<W: Write>(output: &mut W, outcome: &AssignmentOutcome) -> io::Result<()> {
    let assignment = &outcome.assignment;
    match &outcome.result {
        Ok(()) => writeln!(
            output,
            "✅ Success: User {} is now a Contractor for {}",
            assignment.uid, assignment.department
        ),
        Err(e) => writeln!(
            output,
            "❌ Error: User {} ({}): {}",
            assignment.uid, assignment.department, e
        ),
    }
}

/// Dry-run listing of what a run would do.
pub fn write_plan<W: Write>(output: &mut W, registry: &[ContractorAssignment]) -> io::Result<()> {
    for assignment in registry {
        writeln!(
            output,
            "• {} → role=contractor, department={}",
            assignment.uid, assignment.department
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write>(output: &mut W, report: &BatchReport) -> io::Result<()> {
    writeln!(
        output,
        "{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    )
}
