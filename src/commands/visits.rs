use crate::services::output::{print_one, print_out, progress_line};
use crate::services::session::{Session, SessionEvent};

pub fn visited(json: bool, session: &Session) -> anyhow::Result<()> {
    print_out(json, &session.visited_items(), |v| {
        format!("{}\t{}", v.id, v.name.as_deref().unwrap_or("(unknown park)"))
    })
}

/// Applies one visited-set mutation and prints the resulting progress.
pub fn update(json: bool, session: &mut Session, event: SessionEvent) -> anyhow::Result<()> {
    let report = session.handle(event)?;
    print_one(json, report.summary, progress_line)
}
