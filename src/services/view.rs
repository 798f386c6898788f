use crate::domain::models::{Park, Summary, ViewQuery, ViewReport, ViewRow};
use std::collections::HashSet;

/// Filtered subsequence of `parks` for one interaction. Order is preserved and
/// nothing is mutated.
pub fn recompute<'a>(
    parks: &'a [Park],
    visited: &HashSet<String>,
    query: &ViewQuery,
) -> Vec<&'a Park> {
    let needle = query.search_text.to_lowercase();
    parks
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.state.to_lowercase().contains(&needle)
        })
        .filter(|p| !(query.unvisited_only && visited.contains(&p.id)))
        .collect()
}

pub fn summarize(total_count: usize, visited: &HashSet<String>) -> Summary {
    let visited_count = visited.len();
    let percent = if total_count == 0 {
        0.0
    } else {
        visited_count as f64 / total_count as f64 * 100.0
    };
    Summary {
        visited_count,
        total_count,
        percent,
    }
}

pub fn to_row(park: &Park, visited: &HashSet<String>) -> ViewRow {
    ViewRow {
        id: park.id.clone(),
        name: park.name.clone(),
        state: park.state.clone(),
        lat: park.lat(),
        lon: park.lon(),
        visited: visited.contains(&park.id),
    }
}

pub fn build_view(parks: &[Park], visited: &HashSet<String>, query: &ViewQuery) -> ViewReport {
    let rows = recompute(parks, visited, query)
        .into_iter()
        .map(|p| to_row(p, visited))
        .collect();
    ViewReport {
        rows,
        summary: summarize(parks.len(), visited),
    }
}

pub fn table_rows(parks: &[Park], visited: &HashSet<String>) -> Vec<ViewRow> {
    parks.iter().map(|p| to_row(p, visited)).collect()
}
