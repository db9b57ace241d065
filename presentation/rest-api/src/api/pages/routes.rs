use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Pages API serving the bundled chat front-end.
pub struct PagesApi;

impl PagesApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl PagesApi {
    /// Chat page
    ///
    /// Serves the static front-end document embedded at build time.
    #[oai(path = "/", method = "get", tag = "ApiTags::Pages")]
    async fn index(&self) -> Html<String> {
        Html(INDEX_HTML.to_string())
    }
}
