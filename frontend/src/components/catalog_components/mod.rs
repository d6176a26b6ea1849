pub mod catalog_view;
pub mod keyword_search_bar;
pub mod facet_filter_panel;
pub mod catalog_list_controls;
pub mod project_card;
