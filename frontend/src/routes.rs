use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::search_query::CatalogSearch;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;
use crate::pages::project_detail_page::ProjectDetailPage;
use crate::pages::signup_page::SignupPage;
use crate::pages::login_page::LoginPage;
use crate::pages::profile_page::ProfilePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search/:search/:current_page")]
    SearchPage {
        search: UrlParam<CatalogSearch>,
        current_page: u64,
    },


    #[route("/projects/:project_id")]
    ProjectDetailPage { project_id: String },


    #[route("/signup")]
    SignupPage {},

    #[route("/login")]
    LoginPage {},

    #[route("/profile")]
    ProfilePage {},

}

impl Route {
    pub fn search_page_from_query(search: CatalogSearch) -> Self {
        Self::SearchPage {
            search: UrlParam::from(search),
            current_page: 0_u64,
        }
    }
}
