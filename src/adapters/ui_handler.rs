use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Compiled dashboard (`trunk build` output).
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = match uri.path().trim_start_matches('/') {
            "" => "index.html",
            other => other,
        };

        if let Some(response) = Self::asset(path) {
            return response;
        }

        // API misses must not fall through to the SPA shell.
        if path.starts_with("api/") {
            return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
        }

        // Unknown paths belong to the client-side app.
        Self::asset("index.html").unwrap_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                "Dashboard assets not built; run `trunk build` in ui/",
            )
                .into_response()
        })
    }

    fn asset(path: &str) -> Option<Response> {
        let content = Asset::get(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Some(([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_api_path_is_404() {
        let response = UIHandler::serve(Uri::from_static("/api/nothing-here"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
