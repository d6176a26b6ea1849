//! Shared project models.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A project listing as shown in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Monthly unit price, in units of 10,000 yen.
    pub unit_price: Option<f64>,
    pub location: Option<String>,
    pub work_style: Option<String>,
    pub skills: IndexSet<String>,
    pub positions: IndexSet<String>,
}

impl Project {
    /// Skill tags followed by the position tags not already listed.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = self.skills.clone();
        tags.extend(self.positions.iter().cloned());
        tags.into_iter().collect()
    }

    pub fn price_label(&self) -> String {
        format_unit_price(self.unit_price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub unit_price: Option<f64>,
    pub location: Option<String>,
    pub work_style: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub positions: Vec<String>,
}

fn format_amount(price: f64) -> String {
    if price.fract() == 0.0 { format!("{price:.0}") } else { format!("{price}") }
}

pub fn format_unit_price(unit_price: Option<f64>) -> String {
    match unit_price {
        Some(price) => format!("{}万円", format_amount(price)),
        None => "応相談".to_string(),
    }
}

impl ProjectDetail {
    /// `単価: 80 万円/月`, the wording of the detail page.
    pub fn price_line(&self) -> String {
        match self.unit_price {
            Some(price) => format!("単価: {} 万円/月", format_amount(price)),
            None => "単価: 応相談".to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use indexmap::indexset;

    use super::*;

    #[test]
    fn tags_are_the_union_of_skills_and_positions() {
        let project = Project {
            skills: indexset! {"React".to_string(), "PM".to_string()},
            positions: indexset! {"PM".to_string(), "SE".to_string()},
            ..Default::default()
        };
        assert_eq!(project.tags(), vec!["React", "PM", "SE"]);
    }

    #[test]
    fn unit_price_labels() {
        assert_eq!(format_unit_price(Some(80.0)), "80万円");
        assert_eq!(format_unit_price(Some(72.5)), "72.5万円");
        assert_eq!(format_unit_price(None), "応相談");
    }

    #[test]
    fn detail_price_line() {
        let detail = ProjectDetail { unit_price: Some(100.0), ..Default::default() };
        assert_eq!(detail.price_line(), "単価: 100 万円/月");
        assert_eq!(ProjectDetail::default().price_line(), "単価: 応相談");
    }
}
