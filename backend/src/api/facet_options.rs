//! Option lists of the catalog facets.

use common::{
    backend_error::BackendError,
    facet::{Facet, FacetKey},
};
use futures::future::join_all;
use serde::Deserialize;
use tracing::warn;

use crate::db_utils::{
    row_query::RowQuery,
    service::{BackendService, decode_rows},
};

#[derive(Debug, Deserialize)]
struct OptionRow {
    name: String,
}

/// Options of one facet: the static list for area/price, the `name` column of the storage table otherwise.
pub async fn load_options(service: &impl BackendService, facet: FacetKey) -> Result<Vec<String>, BackendError> {
    if let Some(options) = facet.static_options() {
        return Ok(options.iter().map(|s| s.to_string()).collect());
    }
    let Some(table) = facet.option_table() else {
        return Ok(vec![]);
    };
    let query = RowQuery::new(table).columns(["name"]).order_by("id", true);
    let rows = service.fetch_rows(&query).await.map_err(|e| BackendError::Fetch(e.to_string()))?;
    let rows: Vec<OptionRow> = decode_rows(table, rows).map_err(|e| BackendError::Fetch(e.to_string()))?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Loads a facet, leaving its option list empty when the store cannot be read.
pub async fn load_facet(service: &impl BackendService, facet: FacetKey) -> Facet {
    match load_options(service, facet).await {
        Ok(values) => Facet::new(facet, values),
        Err(e) => {
            warn!("load_facet {facet:?}: {e}");
            Facet::new(facet, Vec::<String>::new())
        }
    }
}

/// All facets in declaration order, dynamic ones loaded concurrently.
pub async fn load_all_facets(service: &impl BackendService) -> Vec<Facet> {
    join_all(FacetKey::ALL.iter().map(|facet| load_facet(service, *facet))).await
}
