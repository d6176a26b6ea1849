//! Row shapes of the `projects` table and its joined skill/position tables.

use common::project::{Project, ProjectDetail};
use serde::Deserialize;

use crate::db_utils::row_query::{Join, RowQuery};

#[derive(Debug, Deserialize)]
struct NamedRow {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ProjectSkillRow {
    skills: Option<NamedRow>,
}

#[derive(Debug, Deserialize)]
struct ProjectPositionRow {
    positions: Option<NamedRow>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectRow {
    project_id: String,
    project_name: String,
    #[serde(default)]
    unit_price: Option<f64>,
    #[serde(default)]
    prefecture: Option<String>,
    #[serde(default)]
    work_style: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    project_skills: Vec<ProjectSkillRow>,
    #[serde(default)]
    project_positions: Vec<ProjectPositionRow>,
}

pub const PROJECT_TABLE: &str = "projects";
const LIST_COLUMNS: &[&str] = &["project_id", "project_name", "unit_price", "prefecture", "work_style"];

/// Projects with their skill and position names embedded.
pub fn project_query(with_description: bool) -> RowQuery {
    let mut query = RowQuery::new(PROJECT_TABLE).columns(LIST_COLUMNS.iter().copied());
    if with_description {
        query = query.columns(["description"]);
    }
    query
        .join(Join::new("project_skills").join(Join::new("skills").columns(["name"])))
        .join(Join::new("project_positions").join(Join::new("positions").columns(["name"])))
}

impl ProjectRow {
    fn skill_names(&self) -> impl Iterator<Item = String> + '_ {
        self.project_skills.iter().filter_map(|row| row.skills.as_ref().map(|s| s.name.clone()))
    }

    fn position_names(&self) -> impl Iterator<Item = String> + '_ {
        self.project_positions.iter().filter_map(|row| row.positions.as_ref().map(|p| p.name.clone()))
    }

    pub fn into_project(self) -> Project {
        Project {
            skills: self.skill_names().collect(),
            positions: self.position_names().collect(),
            id: self.project_id,
            name: self.project_name,
            unit_price: self.unit_price,
            location: self.prefecture,
            work_style: self.work_style,
        }
    }

    pub fn into_detail(self) -> ProjectDetail {
        let mut skills: Vec<String> = vec![];
        for name in self.skill_names() {
            if !skills.contains(&name) {
                skills.push(name);
            }
        }
        let mut positions: Vec<String> = vec![];
        for name in self.position_names() {
            if !positions.contains(&name) {
                positions.push(name);
            }
        }
        ProjectDetail {
            id: self.project_id,
            name: self.project_name,
            unit_price: self.unit_price,
            location: self.prefecture,
            work_style: self.work_style,
            description: self.description,
            skills,
            positions,
        }
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row() -> ProjectRow {
        serde_json::from_value(json!({
            "project_id": "p-1",
            "project_name": "電子決済サービス開発",
            "unit_price": 80,
            "prefecture": "東京都",
            "work_style": "フルリモート",
            "description": "決済APIの設計と実装",
            "project_skills": [
                { "skills": { "name": "PHP" } },
                { "skills": null },
                { "skills": { "name": "MySQL" } },
                { "skills": { "name": "PHP" } }
            ],
            "project_positions": [ { "positions": { "name": "バックエンド" } } ]
        }))
        .unwrap()
    }

    #[test]
    fn joined_names_become_tag_sets() {
        let project = row().into_project();
        assert_eq!(project.id, "p-1");
        assert_eq!(project.unit_price, Some(80.0));
        assert_eq!(project.location.as_deref(), Some("東京都"));
        assert_eq!(project.skills.iter().collect::<Vec<_>>(), vec!["PHP", "MySQL"]);
        assert!(project.positions.contains("バックエンド"));
    }

    #[test]
    fn detail_keeps_description_and_dedups_tags() {
        let detail = row().into_detail();
        assert_eq!(detail.description.as_deref(), Some("決済APIの設計と実装"));
        assert_eq!(detail.skills, vec!["PHP", "MySQL"]);
        assert_eq!(detail.positions, vec!["バックエンド"]);
    }

    #[test]
    fn missing_optional_columns_default() {
        let row: ProjectRow = serde_json::from_value(json!({ "project_id": "p-2", "project_name": "x", "unit_price": null })).unwrap();
        let project = row.into_project();
        assert_eq!(project.unit_price, None);
        assert!(project.skills.is_empty());
    }

    #[test]
    fn query_embeds_joins() {
        assert_eq!(
            project_query(true).select_param(),
            "project_id,project_name,unit_price,prefecture,work_style,description,project_skills(skills(name)),project_positions(positions(name))"
        );
    }
}
