//! Predicate evaluation of facet selections against the project catalog.

use crate::{
    facet::{FULL_REMOTE, price_threshold},
    project::Project,
    selection::{OrderedSelection, SelectionState},
};

/// Keeps the projects matching every facet that has a non-empty selection, in input order.
pub fn search(selection: &SelectionState, projects: &[Project]) -> Vec<Project> {
    projects.iter().filter(|project| matches(selection, project)).cloned().collect()
}

pub fn matches(selection: &SelectionState, project: &Project) -> bool {
    matches_all_of(&selection.skill, |skill| project.skills.contains(skill))
        && matches_all_of(&selection.position, |position| project.positions.contains(position))
        && matches_area(&selection.area, project)
        && matches_price(&selection.price, project)
}

fn matches_all_of(selected: &OrderedSelection, mut has: impl FnMut(&str) -> bool) -> bool {
    selected.iter().all(|value| has(value))
}

fn matches_area(selected: &OrderedSelection, project: &Project) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|area| {
        let field = if area == FULL_REMOTE { &project.work_style } else { &project.location };
        field.as_deref().is_some_and(|field| field.contains(area))
    })
}

// Every selected floor is tested, so several floors behave like the highest one.
fn matches_price(selected: &OrderedSelection, project: &Project) -> bool {
    let price = project.unit_price.unwrap_or(0.0);
    selected.iter().all(|option| match price_threshold(option) {
        Some(threshold) => price >= threshold,
        None => false,
    })
}

/// Keeps projects whose name or tags contain every whitespace-separated term of `keyword`.
pub fn filter_by_keyword(projects: Vec<Project>, keyword: &str) -> Vec<Project> {
    let terms: Vec<String> = keyword.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return projects;
    }
    projects
        .into_iter()
        .filter(|project| {
            let haystack = std::iter::once(project.name.as_str())
                .chain(project.skills.iter().map(String::as_str))
                .chain(project.positions.iter().map(String::as_str))
                .map(str::to_lowercase)
                .collect::<Vec<_>>();
            terms.iter().all(|term| haystack.iter().any(|text| text.contains(term.as_str())))
        })
        .collect()
}
