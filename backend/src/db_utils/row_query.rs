//! Row selection requests for the hosted REST endpoint.
//!
//! A `RowQuery` renders to the `select=` parameter understood by the service,
//! with embedded joins written as `table(columns, nested(...))`, plus
//! `column=eq.value` filters and an `order=` clause.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub columns: Vec<String>,
    pub joins: Vec<Join>,
}

impl Join {
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), columns: vec![], joins: vec![] }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    fn render(&self) -> String {
        format!("{}({})", self.table, render_select(&self.columns, &self.joins))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq { column: String, value: String },
}

impl Filter {
    fn to_pair(&self) -> (String, String) {
        match self {
            Filter::Eq { column, value } => (column.clone(), format!("eq.{value}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    pub table: String,
    pub columns: Vec<String>,
    pub joins: Vec<Join>,
    pub filters: Vec<Filter>,
    pub order: Option<(String, bool)>,
}

impl RowQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into(), columns: vec![], joins: vec![], filters: vec![], order: None }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq { column: column.into(), value: value.into() });
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some((column.into(), ascending));
        self
    }

    pub fn select_param(&self) -> String {
        render_select(&self.columns, &self.joins)
    }

    /// Query string pairs, `select` first.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select_param())];
        pairs.extend(self.filters.iter().map(Filter::to_pair));
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            pairs.push(("order".to_string(), format!("{column}.{direction}")));
        }
        pairs
    }
}

fn render_select(columns: &[String], joins: &[Join]) -> String {
    let mut parts: Vec<String> = columns.to_vec();
    parts.extend(joins.iter().map(Join::render));
    if parts.is_empty() {
        return "*".to_string();
    }
    parts.join(",")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_joins() {
        let query = RowQuery::new("projects")
            .columns(["project_name", "unit_price"])
            .join(Join::new("project_skills").join(Join::new("skills").columns(["name"])))
            .join(Join::new("project_positions").join(Join::new("positions").columns(["name"])));
        assert_eq!(
            query.select_param(),
            "project_name,unit_price,project_skills(skills(name)),project_positions(positions(name))"
        );
    }

    #[test]
    fn renders_filters_and_order() {
        let query = RowQuery::new("projects").columns(["project_id"]).eq("project_id", "p-1").order_by("created_at", false);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("select".to_string(), "project_id".to_string()),
                ("project_id".to_string(), "eq.p-1".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn empty_selection_selects_everything() {
        assert_eq!(RowQuery::new("skills").select_param(), "*");
    }
}
