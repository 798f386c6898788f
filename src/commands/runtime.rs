use crate::cli::QueryArgs;
use crate::domain::models::{JsonOut, ViewQuery, ViewRow};
use crate::services::output::{fmt_coord, print_one, print_out, progress_line};
use crate::services::session::{Session, SessionEvent};

fn row_line(r: &ViewRow) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        r.id,
        r.name,
        r.state,
        fmt_coord(r.lat),
        fmt_coord(r.lon),
        if r.visited { "visited" } else { "-" }
    )
}

pub fn view(json: bool, session: &mut Session, args: &QueryArgs) -> anyhow::Result<()> {
    let report = session.handle(SessionEvent::Query(ViewQuery {
        search_text: args.search.clone(),
        unvisited_only: args.unvisited_only,
    }))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: report
            })?
        );
    } else {
        for r in &report.rows {
            println!("{}", row_line(r));
        }
        println!("{}", progress_line(&report.summary));
    }
    Ok(())
}

pub fn table(json: bool, session: &Session) -> anyhow::Result<()> {
    print_out(json, &session.table(), row_line)
}

pub fn gaps(json: bool, session: &Session) -> anyhow::Result<()> {
    let gaps = session.gaps();
    if !json && gaps.is_empty() {
        println!("all parks have coordinates");
        return Ok(());
    }
    print_out(json, gaps, |g| format!("{}\t{}\t{}", g.id, g.name, g.state))
}

pub fn summary(json: bool, session: &Session) -> anyhow::Result<()> {
    print_one(json, session.summary(), progress_line)
}

pub fn check(json: bool, session: &Session) -> anyhow::Result<()> {
    print_one(json, session.check_report(), |c| {
        format!(
            "parks: {}\nwith coordinates: {}\njoin gaps: {}\nvisited: {} ({} unknown)",
            c.parks,
            c.with_coordinates,
            c.gaps,
            c.visited,
            c.unknown_visited.len()
        )
    })
}
